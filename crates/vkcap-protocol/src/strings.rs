use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;

/// A string held by reference into a [`StringTable`].
///
/// Equality compares contents. Use [`Interned::ptr_eq`] to check that two
/// values share the table's canonical storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Interned(Arc<str>);

impl Interned {
    /// Wrap a string without interning it. Write-side structures use this;
    /// reads always go through a table.
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Interned) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Interned {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl Deref for Interned {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Interned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Interned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Interned {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Interned {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

/// Process-wide string deduplication. Entries are never evicted, so every
/// [`Interned`] handed out stays canonical for the table's lifetime.
#[derive(Default)]
pub struct StringTable {
    entries: Mutex<HashSet<Arc<str>>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `s` if absent and return the canonical copy.
    pub fn intern(&self, s: &str) -> Interned {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(s) {
            return Interned(existing.clone());
        }
        let canonical: Arc<str> = Arc::from(s);
        entries.insert(canonical.clone());
        Interned(canonical)
    }

    /// Canonical copy of `s`, if it has been interned.
    pub fn find(&self, s: &str) -> Option<Interned> {
        self.entries.lock().get(s).cloned().map(Interned)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl fmt::Debug for StringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringTable").field("len", &self.len()).finish()
    }
}
