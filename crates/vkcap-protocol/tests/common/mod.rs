//! Shared helpers for protocol integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use vkcap_protocol::serialiser::Result;
use vkcap_protocol::{
    ResolveError, ResourceId, ResourceTracker, ResourceType, Serialise, Serialiser, StreamContext,
};

/// A fixed-table tracker. Capture-side entries map handles to ids,
/// replay-side entries map ids to (different) live handles.
#[derive(Default)]
pub struct TableTracker {
    ids: HashMap<(ResourceType, u64), ResourceId>,
    live: HashMap<ResourceId, (ResourceType, u64)>,
}

impl TableTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture side: `handle` is written as `id`.
    pub fn captured(mut self, ty: ResourceType, handle: u64, id: u64) -> Self {
        self.ids.insert((ty, handle), ResourceId(id));
        self
    }

    /// Replay side: `id` resolves to `handle`.
    pub fn live(mut self, ty: ResourceType, id: u64, handle: u64) -> Self {
        self.live.insert(ResourceId(id), (ty, handle));
        self
    }

    pub fn into_context(self) -> StreamContext {
        StreamContext::new(Arc::new(self))
    }
}

impl ResourceTracker for TableTracker {
    fn stable_id(&self, ty: ResourceType, raw: u64) -> std::result::Result<ResourceId, ResolveError> {
        self.ids
            .get(&(ty, raw))
            .copied()
            .ok_or(ResolveError::Unregistered { ty, raw })
    }

    fn live_handle(&self, ty: ResourceType, id: ResourceId) -> std::result::Result<u64, ResolveError> {
        let (actual, handle) = *self.live.get(&id).ok_or(ResolveError::UnknownId(id))?;
        if actual != ty {
            return Err(ResolveError::TypeMismatch {
                id,
                expected: ty,
                actual,
            });
        }
        Ok(handle)
    }
}

pub fn write<T: Serialise>(ctx: &StreamContext, value: &mut T) -> Vec<u8> {
    let mut ser = Serialiser::writer(ctx.clone());
    match ser.serialise("value", value) {
        Ok(()) => ser.into_bytes(),
        Err(e) => panic!("write of {} failed: {}", T::TYPE_NAME, e),
    }
}

pub fn read<T: Serialise + Default>(ctx: &StreamContext, bytes: Vec<u8>) -> Result<T> {
    let mut ser = Serialiser::reader(bytes, ctx.clone());
    let value = ser.read::<T>("value")?;
    assert_eq!(ser.remaining(), 0, "{} left unread bytes", T::TYPE_NAME);
    Ok(value)
}
