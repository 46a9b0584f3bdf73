use crate::enums::StructureType;
use crate::handle::{ResourceId, ResourceType};

/// Failure to translate between a handle and its stable resource id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("{ty:?} handle {raw:#x} was never registered")]
    Unregistered { ty: ResourceType, raw: u64 },

    #[error("unknown resource {0}")]
    UnknownId(ResourceId),

    #[error("resource {0} has no live handle in this context")]
    NotLive(ResourceId),

    #[error("resource {id} is a {actual:?}, expected {expected:?}")]
    TypeMismatch {
        id: ResourceId,
        expected: ResourceType,
        actual: ResourceType,
    },
}

/// Fatal stream errors. Any of these aborts the load of the enclosing capture.
#[derive(Debug, thiserror::Error)]
pub enum SerialiseError {
    #[error("unexpected end of stream in {field}: needed {needed} bytes, {remaining} left")]
    UnexpectedEof {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("scope tag mismatch in {field}: expected {expected} ({expected_tag:#010x}), found {found:#010x}")]
    TagMismatch {
        field: &'static str,
        expected: &'static str,
        expected_tag: u32,
        found: u32,
    },

    #[error("invalid bool value {value} in {field}")]
    InvalidBool { field: &'static str, value: u8 },

    #[error("invalid UTF-8 in string {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("{field}: count {count} needs at least {needed} bytes, only {remaining} remain")]
    CountTooLarge {
        field: &'static str,
        count: u64,
        needed: u64,
        remaining: usize,
    },

    #[error("{field}: {len} elements do not fit a 32-bit count")]
    TooManyElements { field: &'static str, len: usize },

    #[error("allocation of {count} elements for {field} failed")]
    Allocation { field: &'static str, count: usize },

    #[error("nesting depth exceeded {max} at {field}")]
    DepthExceeded { field: &'static str, max: u32 },

    #[error("unknown chained extension {s_type} in {field}")]
    UnknownExtension {
        field: &'static str,
        s_type: StructureType,
    },

    #[error("chained extension {s_type} declared {declared} bytes, consumed {consumed}")]
    ChainLengthMismatch {
        s_type: StructureType,
        declared: u32,
        consumed: usize,
    },

    #[error("{field}: handle translation requires a resource tracker")]
    NoTracker { field: &'static str },

    #[error("{field}: {source}")]
    Resolve {
        field: &'static str,
        #[source]
        source: ResolveError,
    },
}
