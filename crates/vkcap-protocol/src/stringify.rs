//! Display strings for API enums and bitmasks.
//!
//! Enums are `i32` newtypes so that values outside the known set survive a
//! round trip and still print (`"VkFormat<1234>"`). Bitmasks are bitflags
//! whose labels print in declaration order.

/// Label for an enum value with no known name.
pub fn fallback_label(type_name: &str, value: i32) -> String {
    format!("{type_name}<{value}>")
}

/// Join the labels of every set flag with `" | "`, in table order.
/// Zero gives an empty string; bits with no label are ignored.
pub fn join_flag_labels(bits: u64, labels: impl IntoIterator<Item = (u64, &'static str)>) -> String {
    let mut out = String::new();
    for (flag, label) in labels {
        if bits & flag == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push_str(" | ");
        }
        out.push_str(label);
    }
    out
}

macro_rules! vk_enum {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:literal {
            $($variant:ident = $value:expr => $label:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub i32);

        impl $name {
            $(pub const $variant: Self = Self($value);)*

            /// Every named value, in declaration order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),*];

            pub fn label(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($label),)*
                    _ => None,
                }
            }

            pub fn to_str(self) -> std::borrow::Cow<'static, str> {
                match self.label() {
                    Some(label) => std::borrow::Cow::Borrowed(label),
                    None => std::borrow::Cow::Owned(
                        $crate::stringify::fallback_label($fallback, self.0),
                    ),
                }
            }

            pub fn is_known(self) -> bool {
                self.label().is_some()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_str())
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_str())
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl $crate::serialiser::Primitive for $name {
            const SIZE: usize = 4;
            const TYPE_NAME: &'static str = $fallback;

            fn put(self, out: &mut Vec<u8>) {
                $crate::serialiser::Primitive::put(self.0, out);
            }

            fn get(field: &'static str, bytes: &[u8]) -> $crate::serialiser::Result<Self> {
                <i32 as $crate::serialiser::Primitive>::get(field, bytes).map(Self)
            }

            fn structured(self) -> $crate::structured::StructuredValue {
                $crate::structured::StructuredValue::Enum {
                    raw: i64::from(self.0),
                    label: self.to_str().into_owned(),
                }
            }
        }
    };
}

macro_rules! vk_flags {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($flag:ident = $value:expr => $label:literal,)*
        }
    ) => {
        bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name: u32 {
                $(const $flag = $value;)*
            }
        }

        impl $name {
            /// Display label of each flag, in declaration order.
            pub const LABELS: &'static [($name, &'static str)] = &[$(($name::$flag, $label)),*];

            pub fn to_str(self) -> String {
                $crate::stringify::join_flag_labels(
                    u64::from(self.bits()),
                    Self::LABELS.iter().map(|(flag, label)| (u64::from(flag.bits()), *label)),
                )
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_str())
            }
        }

        impl $crate::serialiser::Primitive for $name {
            const SIZE: usize = 4;
            const TYPE_NAME: &'static str = stringify!($name);

            fn put(self, out: &mut Vec<u8>) {
                $crate::serialiser::Primitive::put(self.bits(), out);
            }

            fn get(field: &'static str, bytes: &[u8]) -> $crate::serialiser::Result<Self> {
                <u32 as $crate::serialiser::Primitive>::get(field, bytes).map(Self::from_bits_retain)
            }

            fn structured(self) -> $crate::structured::StructuredValue {
                $crate::structured::StructuredValue::Flags {
                    raw: u64::from(self.bits()),
                    labels: self.to_str(),
                }
            }
        }
    };
}

pub(crate) use vk_enum;
pub(crate) use vk_flags;
