use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::trace;
use vkcap_protocol::{ResolveError, ResourceHandle, ResourceId, ResourceTracker, ResourceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveResource {
    pub resource_type: ResourceType,
    pub handle: u64,
}

#[derive(Debug, Clone, Copy)]
struct ResourceRecord {
    resource_type: ResourceType,
    /// Handle in the current context; `None` until replay creates the object.
    live: Option<u64>,
}

/// The single id authority for one capture or replay session.
///
/// At capture time every driver handle is registered and gets a fresh
/// [`ResourceId`]. At replay time the ids read from the capture are
/// declared, then bound to the handles the replayed driver returns.
pub struct ResourceManager {
    /// (type, live handle) -> id
    ids: DashMap<(ResourceType, u64), ResourceId>,
    /// id -> record
    records: DashMap<ResourceId, ResourceRecord>,
    /// Next id to issue. Starts at 1; 0 is the null id.
    next_id: AtomicU64,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self {
            ids: DashMap::new(),
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a live handle and return its id. Registering the same
    /// handle again returns the same id.
    pub fn register(&self, resource_type: ResourceType, handle: u64) -> ResourceId {
        debug_assert!(handle != 0, "null handles are never registered");
        let id = *self
            .ids
            .entry((resource_type, handle))
            .or_insert_with(|| ResourceId(self.next_id.fetch_add(1, Ordering::Relaxed)));
        self.records.insert(
            id,
            ResourceRecord {
                resource_type,
                live: Some(handle),
            },
        );
        trace!("registered {} {:#x} as {}", resource_type.name(), handle, id);
        id
    }

    pub fn register_handle<H: ResourceHandle>(&self, handle: H) -> ResourceId {
        self.register(H::TYPE, handle.as_raw())
    }

    /// Make a captured id known in this context before its object exists.
    /// Ids issued afterwards by [`ResourceManager::register`] never collide
    /// with it.
    pub fn declare(&self, id: ResourceId, resource_type: ResourceType) {
        self.next_id.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
        self.records
            .entry(id)
            .or_insert(ResourceRecord {
                resource_type,
                live: None,
            });
    }

    /// Attach the live handle replay created for a captured id. A handle
    /// belongs to one id at a time: binding it again moves it, and the
    /// previous owner is left without a live handle.
    pub fn bind_live(
        &self,
        id: ResourceId,
        resource_type: ResourceType,
        handle: u64,
    ) -> Result<(), ResolveError> {
        self.declare(id, resource_type);
        let old = {
            let mut record = self.records.get_mut(&id).ok_or(ResolveError::UnknownId(id))?;
            if record.resource_type != resource_type {
                return Err(ResolveError::TypeMismatch {
                    id,
                    expected: resource_type,
                    actual: record.resource_type,
                });
            }
            record.live.replace(handle)
        };
        if let Some(old) = old.filter(|old| *old != handle) {
            self.ids.remove_if(&(resource_type, old), |_, owner| *owner == id);
        }
        if let Some(previous) = self.ids.insert((resource_type, handle), id) {
            if previous != id {
                if let Some(mut other) = self.records.get_mut(&previous) {
                    other.live = None;
                }
                trace!("{} {:#x} moved from {} to {}", resource_type.name(), handle, previous, id);
            }
        }
        Ok(())
    }

    pub fn bind_handle<H: ResourceHandle>(&self, id: ResourceId, handle: H) -> Result<(), ResolveError> {
        self.bind_live(id, H::TYPE, handle.as_raw())
    }

    /// Look up the id of a live handle.
    pub fn get_id(&self, resource_type: ResourceType, handle: u64) -> Option<ResourceId> {
        self.ids.get(&(resource_type, handle)).map(|v| *v)
    }

    /// Look up the live object behind an id.
    pub fn get_live_resource(&self, id: ResourceId) -> Result<LiveResource, ResolveError> {
        let record = self.records.get(&id).ok_or(ResolveError::UnknownId(id))?;
        let handle = record.live.ok_or(ResolveError::NotLive(id))?;
        Ok(LiveResource {
            resource_type: record.resource_type,
            handle,
        })
    }

    pub fn live_handle<H: ResourceHandle>(&self, id: ResourceId) -> Result<H, ResolveError> {
        ResourceTracker::live_handle(self, H::TYPE, id).map(H::from_raw)
    }

    /// Forget an id and its live handle, if any. Returns true if it existed.
    pub fn release(&self, id: ResourceId) -> bool {
        match self.records.remove(&id) {
            Some((_, record)) => {
                if let Some(handle) = record.live {
                    self.ids.remove(&(record.resource_type, handle));
                }
                true
            }
            None => false,
        }
    }

    /// Return number of known ids.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceTracker for ResourceManager {
    fn stable_id(&self, ty: ResourceType, raw: u64) -> Result<ResourceId, ResolveError> {
        self.get_id(ty, raw).ok_or(ResolveError::Unregistered { ty, raw })
    }

    fn live_handle(&self, ty: ResourceType, id: ResourceId) -> Result<u64, ResolveError> {
        let live = self.get_live_resource(id)?;
        if live.resource_type != ty {
            return Err(ResolveError::TypeMismatch {
                id,
                expected: ty,
                actual: live.resource_type,
            });
        }
        Ok(live.handle)
    }
}
