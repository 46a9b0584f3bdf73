use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chain::{self, Extensible, NextStruct};
use crate::error::SerialiseError;
use crate::handle::{ResourceHandle, ResourceId, ResourceTracker};
use crate::strings::{Interned, StringTable};
use crate::structured::{Recorder, StructuredObject, StructuredValue};

pub type Result<T> = std::result::Result<T, SerialiseError>;

/// Bytes taken by a scope marker on the wire.
pub const SCOPE_TAG_SIZE: usize = 4;

/// Default bound on structure nesting (sub-structures, arrays, chains).
pub const DEFAULT_MAX_DEPTH: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Decode and resolve ids to live handles.
    Reading,
    /// Decode for display only. Handles are left unresolved.
    Inspecting,
    Writing,
}

/// What to do with a chained extension whose type tag is not known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionPolicy {
    /// Drop the payload using its recorded length and log a warning.
    #[default]
    #[serde(rename = "skip")]
    Skip,
    /// Abort the load.
    #[serde(rename = "fail")]
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamLimits {
    pub max_depth: u32,
    pub unknown_extensions: ExtensionPolicy,
}

impl Default for StreamLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            unknown_extensions: ExtensionPolicy::Skip,
        }
    }
}

/// Collaborators a serialiser works against: the resource tracker for
/// handle translation, the string table, and stream limits.
#[derive(Clone)]
pub struct StreamContext {
    tracker: Option<Arc<dyn ResourceTracker + Send + Sync>>,
    strings: Arc<StringTable>,
    limits: StreamLimits,
}

impl StreamContext {
    pub fn new(tracker: Arc<dyn ResourceTracker + Send + Sync>) -> Self {
        Self {
            tracker: Some(tracker),
            strings: Arc::new(StringTable::new()),
            limits: StreamLimits::default(),
        }
    }

    /// A context without a tracker. Enough for inspection, which never
    /// resolves handles.
    pub fn detached() -> Self {
        Self {
            tracker: None,
            strings: Arc::new(StringTable::new()),
            limits: StreamLimits::default(),
        }
    }

    pub fn with_strings(mut self, strings: Arc<StringTable>) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_limits(mut self, limits: StreamLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn strings(&self) -> &Arc<StringTable> {
        &self.strings
    }

    pub fn limits(&self) -> StreamLimits {
        self.limits
    }

    pub fn has_tracker(&self) -> bool {
        self.tracker.is_some()
    }
}

impl fmt::Debug for StreamContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamContext")
            .field("tracker", &self.tracker.is_some())
            .field("strings", &self.strings)
            .field("limits", &self.limits)
            .finish()
    }
}

/// A structure with a field-by-field serialise routine.
///
/// `serialise_body` is called inside a scope already opened for the
/// structure, and must visit fields in the same order in every mode.
pub trait Serialise {
    const TYPE_NAME: &'static str;

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()>;
}

/// Fixed-size little-endian scalar.
pub trait Primitive: Copy {
    const SIZE: usize;
    const TYPE_NAME: &'static str;

    fn put(self, out: &mut Vec<u8>);
    fn get(field: &'static str, bytes: &[u8]) -> Result<Self>;
    fn structured(self) -> StructuredValue;
}

pub(crate) fn le_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut array = [0u8; N];
    array.copy_from_slice(&bytes[..N]);
    array
}

macro_rules! le_primitive {
    ($($t:ty => $name:literal, $variant:ident($conv:ty);)*) => {
        $(
            impl Primitive for $t {
                const SIZE: usize = std::mem::size_of::<$t>();
                const TYPE_NAME: &'static str = $name;

                fn put(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn get(_field: &'static str, bytes: &[u8]) -> Result<Self> {
                    Ok(<$t>::from_le_bytes(le_array(bytes)))
                }

                fn structured(self) -> StructuredValue {
                    StructuredValue::$variant(self as $conv)
                }
            }
        )*
    };
}

le_primitive! {
    u8 => "uint8", UInt(u64);
    u16 => "uint16", UInt(u64);
    u32 => "uint32", UInt(u64);
    u64 => "uint64", UInt(u64);
    i32 => "int32", Int(i64);
    i64 => "int64", Int(i64);
    f32 => "float", Float(f64);
    f64 => "double", Float(f64);
}

impl Primitive for bool {
    const SIZE: usize = 1;
    const TYPE_NAME: &'static str = "bool";

    fn put(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    fn get(field: &'static str, bytes: &[u8]) -> Result<Self> {
        match bytes[0] {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(SerialiseError::InvalidBool { field, value }),
        }
    }

    fn structured(self) -> StructuredValue {
        StructuredValue::Bool(self)
    }
}

/// An opaque byte payload (shader code, cache data).
///
/// Blobs read from a stream share the stream's storage instead of copying.
#[derive(Clone)]
pub struct Blob {
    data: Arc<[u8]>,
    range: Range<usize>,
}

impl Blob {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        let data = bytes.into();
        let range = 0..data.len();
        Self { data, range }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.range.clone()]
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// True when both blobs view the same underlying allocation.
    pub fn shares_storage(&self, other: &Blob) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Default for Blob {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.len())
    }
}

/// FNV-1a hash of a structure's type name, written as its scope marker.
pub const fn type_tag(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash: u32 = 0x811c_9dc5;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(0x0100_0193);
        i += 1;
    }
    hash
}

/// Bidirectional structure serialiser over one in-memory chunk payload.
pub struct Serialiser {
    mode: Mode,
    ctx: StreamContext,
    out: Vec<u8>,
    data: Arc<[u8]>,
    pos: usize,
    depth: u32,
    recorder: Option<Recorder>,
}

impl Serialiser {
    pub fn writer(ctx: StreamContext) -> Self {
        Self::with_mode(Mode::Writing, Arc::from(Vec::new()), ctx)
    }

    pub fn reader(data: impl Into<Arc<[u8]>>, ctx: StreamContext) -> Self {
        Self::with_mode(Mode::Reading, data.into(), ctx)
    }

    /// Decode without resolving handles. Always records a structured tree.
    pub fn inspector(data: impl Into<Arc<[u8]>>, ctx: StreamContext) -> Self {
        Self::with_mode(Mode::Inspecting, data.into(), ctx).with_structured()
    }

    fn with_mode(mode: Mode, data: Arc<[u8]>, ctx: StreamContext) -> Self {
        Self {
            mode,
            ctx,
            out: Vec::new(),
            data,
            pos: 0,
            depth: 0,
            recorder: None,
        }
    }

    /// Also record a structured tree of everything serialised.
    pub fn with_structured(mut self) -> Self {
        if self.recorder.is_none() {
            self.recorder = Some(Recorder::new());
        }
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True for both decoding modes.
    pub fn is_reading(&self) -> bool {
        self.mode != Mode::Writing
    }

    pub fn is_writing(&self) -> bool {
        self.mode == Mode::Writing
    }

    pub fn context(&self) -> &StreamContext {
        &self.ctx
    }

    pub fn position(&self) -> usize {
        if self.is_writing() {
            self.out.len()
        } else {
            self.pos
        }
    }

    /// Unread bytes. Always zero when writing.
    pub fn remaining(&self) -> usize {
        if self.is_writing() {
            0
        } else {
            self.data.len() - self.pos
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    pub fn take_structured(&mut self) -> Vec<StructuredObject> {
        self.recorder.as_mut().map(Recorder::take).unwrap_or_default()
    }

    // ── Scopes ──────────────────────────────────────────────────────────────

    /// Serialise a structure inside a named, type-tagged scope.
    pub fn serialise<T: Serialise>(&mut self, name: &'static str, value: &mut T) -> Result<()> {
        self.scope(name, T::TYPE_NAME, false, |s| {
            s.tag(name, T::TYPE_NAME)?;
            value.serialise_body(s)
        })
    }

    /// Decode a structure into a fresh value, returned only if every field
    /// decoded.
    pub fn read<T: Serialise + Default>(&mut self, name: &'static str) -> Result<T> {
        debug_assert!(self.is_reading());
        let mut scratch = T::default();
        self.serialise(name, &mut scratch)?;
        Ok(scratch)
    }

    fn scope(
        &mut self,
        name: &'static str,
        type_name: &str,
        array: bool,
        body: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        let max = self.ctx.limits.max_depth;
        if self.depth >= max {
            return Err(SerialiseError::DepthExceeded { field: name, max });
        }
        self.depth += 1;
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.open();
        }

        let result = body(self);

        self.depth -= 1;
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.close(name, type_name, array);
        }
        result
    }

    fn tag(&mut self, field: &'static str, type_name: &'static str) -> Result<()> {
        let expected = type_tag(type_name);
        if self.is_writing() {
            expected.put(&mut self.out);
            return Ok(());
        }
        let range = self.advance(field, SCOPE_TAG_SIZE)?;
        let found = u32::get(field, &self.data[range])?;
        if found != expected {
            return Err(SerialiseError::TagMismatch {
                field,
                expected: type_name,
                expected_tag: expected,
                found,
            });
        }
        Ok(())
    }

    /// Panics when writing a structure whose declared type tag is wrong.
    /// That is a caller bug, not a data error.
    pub fn check_structure_type<T: Extensible>(&self, value: &T) {
        if self.is_writing() {
            assert_eq!(
                value.structure_type(),
                T::STRUCTURE_TYPE,
                "{} declares the wrong structure type",
                T::TYPE_NAME
            );
        }
    }

    /// Opening fields of every extensible structure: the type tag check,
    /// then the chained extension.
    pub fn extension_header<T: Extensible>(&mut self, value: &mut T) -> Result<()> {
        self.check_structure_type(&*value);
        self.next(value.next_mut())
    }

    /// Serialise the optional chained extension structure.
    pub fn next(&mut self, next: &mut Option<Box<NextStruct>>) -> Result<()> {
        chain::serialise_next(self, next)
    }

    // ── Scalars ─────────────────────────────────────────────────────────────

    pub fn value<T: Primitive>(&mut self, name: &'static str, value: &mut T) -> Result<()> {
        self.transfer(name, value)?;
        let v = *value;
        self.record(name, T::TYPE_NAME, || v.structured());
        Ok(())
    }

    /// Fixed-length scalar array, no count on the wire.
    pub fn fixed<T: Primitive, const N: usize>(
        &mut self,
        name: &'static str,
        values: &mut [T; N],
    ) -> Result<()> {
        self.scope(name, T::TYPE_NAME, true, |s| {
            for value in values.iter_mut() {
                s.value(name, value)?;
            }
            Ok(())
        })
    }

    fn transfer<T: Primitive>(&mut self, field: &'static str, value: &mut T) -> Result<()> {
        if self.is_writing() {
            value.put(&mut self.out);
        } else {
            let range = self.advance(field, T::SIZE)?;
            *value = T::get(field, &self.data[range])?;
        }
        Ok(())
    }

    pub fn string(&mut self, name: &'static str, value: &mut Interned) -> Result<()> {
        let mut len = if self.is_writing() {
            u32::try_from(value.len())
                .map_err(|_| SerialiseError::TooManyElements { field: name, len: value.len() })?
        } else {
            0
        };
        self.transfer(name, &mut len)?;

        if self.is_writing() {
            self.out.extend_from_slice(value.as_bytes());
        } else {
            let range = self.advance(name, len as usize)?;
            let text = std::str::from_utf8(&self.data[range])
                .map_err(|_| SerialiseError::InvalidUtf8 { field: name })?;
            *value = self.ctx.strings.intern(text);
        }

        let shown = value.clone();
        self.record(name, "string", || StructuredValue::String(shown.to_string()));
        Ok(())
    }

    // ── Handles ─────────────────────────────────────────────────────────────

    /// Write a handle as its stable id; on read, resolve the id to the live
    /// handle in this context. Null handles travel as the null id.
    pub fn handle<H: ResourceHandle>(&mut self, name: &'static str, handle: &mut H) -> Result<()> {
        let mut id = ResourceId::NULL;
        if self.is_writing() && !handle.is_null() {
            id = self
                .tracker(name)?
                .stable_id(H::TYPE, handle.as_raw())
                .map_err(|source| SerialiseError::Resolve { field: name, source })?;
        }

        self.transfer(name, &mut id.0)?;

        if self.mode == Mode::Reading {
            *handle = if id.is_null() {
                H::null()
            } else {
                let raw = self
                    .tracker(name)?
                    .live_handle(H::TYPE, id)
                    .map_err(|source| SerialiseError::Resolve { field: name, source })?;
                H::from_raw(raw)
            };
        }

        self.record(name, H::TYPE.name(), || StructuredValue::Resource(id));
        Ok(())
    }

    /// The id a chunk assigns to the object it creates. Carried verbatim;
    /// binding it to a live handle is the replayer's job.
    pub fn declare_resource(&mut self, name: &'static str, id: &mut ResourceId) -> Result<()> {
        self.transfer(name, &mut id.0)?;
        let declared = *id;
        self.record(name, "ResourceId", || StructuredValue::Declared(declared));
        Ok(())
    }

    fn tracker(&self, field: &'static str) -> Result<&(dyn ResourceTracker + Send + Sync)> {
        self.ctx
            .tracker
            .as_deref()
            .ok_or(SerialiseError::NoTracker { field })
    }

    // ── Arrays ──────────────────────────────────────────────────────────────

    /// Serialise an element count. Returns the count to use for the
    /// following elements: `len` when writing, the stored count when reading.
    pub fn count(&mut self, name: &'static str, len: usize) -> Result<usize> {
        let mut count = if self.is_writing() {
            u32::try_from(len).map_err(|_| SerialiseError::TooManyElements { field: name, len })?
        } else {
            0
        };
        self.value(name, &mut count)?;
        Ok(count as usize)
    }

    /// Count followed by that many structures.
    pub fn array<T: Serialise + Default>(
        &mut self,
        count_name: &'static str,
        name: &'static str,
        items: &mut Vec<T>,
    ) -> Result<()> {
        let count = self.count(count_name, items.len())?;
        self.elements(name, items, count)
    }

    /// `count` structures whose count was serialised separately (for
    /// instance shared between two arrays).
    pub fn elements<T: Serialise + Default>(
        &mut self,
        name: &'static str,
        items: &mut Vec<T>,
        count: usize,
    ) -> Result<()> {
        if self.is_writing() {
            assert_eq!(items.len(), count, "{name}: array length disagrees with its count");
        } else {
            self.prepare(name, items, count, SCOPE_TAG_SIZE)?;
        }

        self.scope(name, T::TYPE_NAME, true, |s| {
            if s.is_writing() {
                for item in items.iter_mut() {
                    s.serialise(name, item)?;
                }
            } else {
                for _ in 0..count {
                    let item = s.read::<T>(name)?;
                    items.push(item);
                }
            }
            Ok(())
        })
    }

    /// Count followed by that many scalars.
    pub fn values<T: Primitive + Default>(
        &mut self,
        count_name: &'static str,
        name: &'static str,
        items: &mut Vec<T>,
    ) -> Result<()> {
        let count = self.count(count_name, items.len())?;
        if self.is_reading() {
            self.prepare(name, items, count, T::SIZE)?;
            items.resize(count, T::default());
        }
        self.scope(name, T::TYPE_NAME, true, |s| {
            for item in items.iter_mut() {
                s.value(name, item)?;
            }
            Ok(())
        })
    }

    /// `count` handles, each translated as in [`Serialiser::handle`].
    pub fn handles<H: ResourceHandle>(
        &mut self,
        name: &'static str,
        items: &mut Vec<H>,
        count: usize,
    ) -> Result<()> {
        if self.is_writing() {
            assert_eq!(items.len(), count, "{name}: array length disagrees with its count");
        } else {
            self.prepare(name, items, count, std::mem::size_of::<u64>())?;
            items.resize(count, H::null());
        }
        self.scope(name, H::TYPE.name(), true, |s| {
            for item in items.iter_mut() {
                s.handle(name, item)?;
            }
            Ok(())
        })
    }

    /// Count followed by that many interned strings.
    pub fn strings(
        &mut self,
        count_name: &'static str,
        name: &'static str,
        items: &mut Vec<Interned>,
    ) -> Result<()> {
        let count = self.count(count_name, items.len())?;
        if self.is_reading() {
            self.prepare(name, items, count, std::mem::size_of::<u32>())?;
            items.resize(count, Interned::default());
        }
        self.scope(name, "string", true, |s| {
            for item in items.iter_mut() {
                s.string(name, item)?;
            }
            Ok(())
        })
    }

    /// Reject counts the remaining bytes cannot possibly satisfy, then
    /// reserve without aborting on allocation failure.
    fn prepare<T>(
        &self,
        field: &'static str,
        items: &mut Vec<T>,
        count: usize,
        min_element_size: usize,
    ) -> Result<()> {
        let remaining = self.remaining();
        let needed = (count as u64).saturating_mul(min_element_size as u64);
        if needed > remaining as u64 {
            return Err(SerialiseError::CountTooLarge {
                field,
                count: count as u64,
                needed,
                remaining,
            });
        }
        items.clear();
        items
            .try_reserve_exact(count)
            .map_err(|_| SerialiseError::Allocation { field, count })
    }

    // ── Optional sub-structures and payloads ────────────────────────────────

    /// Presence flag, then the structure if present.
    pub fn optional<T: Serialise + Default>(
        &mut self,
        name: &'static str,
        value: &mut Option<Box<T>>,
    ) -> Result<()> {
        let mut present = value.is_some();
        self.value("present", &mut present)?;

        if self.is_reading() {
            *value = if present {
                Some(Box::new(self.read::<T>(name)?))
            } else {
                None
            };
        } else if let Some(inner) = value.as_deref_mut() {
            self.serialise(name, inner)?;
        }
        Ok(())
    }

    /// 64-bit size followed by the raw bytes.
    pub fn buffer(&mut self, size_name: &'static str, name: &'static str, blob: &mut Blob) -> Result<()> {
        let mut size = blob.len() as u64;
        self.value(size_name, &mut size)?;

        if self.is_writing() {
            self.out.extend_from_slice(blob.as_slice());
        } else {
            let len = usize::try_from(size).unwrap_or(usize::MAX);
            let range = self.advance(name, len)?;
            *blob = Blob {
                data: self.data.clone(),
                range,
            };
        }

        self.record(name, "byte[]", || StructuredValue::Buffer { size });
        Ok(())
    }

    // ── Raw cursor access for chain framing ─────────────────────────────────

    pub(crate) fn advance(&mut self, field: &'static str, n: usize) -> Result<Range<usize>> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(SerialiseError::UnexpectedEof {
                field,
                needed: n,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(start..self.pos)
    }

    pub(crate) fn raw<T: Primitive>(&mut self, field: &'static str, value: &mut T) -> Result<()> {
        self.transfer(field, value)
    }

    /// Write a zero u32 and return its offset, to be patched later.
    pub(crate) fn reserve_u32(&mut self) -> usize {
        let at = self.out.len();
        self.out.extend_from_slice(&[0; 4]);
        at
    }

    pub(crate) fn patch_u32(&mut self, at: usize, value: u32) {
        self.out[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn record(
        &mut self,
        name: &str,
        type_name: &str,
        value: impl FnOnce() -> StructuredValue,
    ) {
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.leaf(name, type_name, value());
        }
    }
}

impl fmt::Debug for Serialiser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serialiser")
            .field("mode", &self.mode)
            .field("position", &self.position())
            .field("remaining", &self.remaining())
            .field("depth", &self.depth)
            .finish()
    }
}
