//! Screen-wide listener table shared between the host and open widgets.
//!
//! An open select listens for clicks, scrolls and resizes anywhere on the
//! screen so it can close on outside clicks and follow its anchor. The host
//! owns the table and routes those events to every registered owner; widgets
//! only ever hold a [`ListenerGuard`], which removes their entries on drop.

use std::fmt;
use std::sync::{Arc, RwLock};

/// Kinds of screen-wide events a widget can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Click,
    Scroll,
    Resize,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 3] = [ListenerKind::Click, ListenerKind::Scroll, ListenerKind::Resize];
}

/// Shared table of `(owner, kind)` registrations.
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    entries: Arc<RwLock<Vec<(String, ListenerKind)>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` for every [`ListenerKind`].
    ///
    /// The registrations live exactly as long as the returned guard.
    pub fn acquire(&self, owner: impl Into<String>) -> ListenerGuard {
        let owner = owner.into();
        if let Ok(mut entries) = self.entries.write() {
            for kind in ListenerKind::ALL {
                if !entries.iter().any(|(o, k)| *o == owner && *k == kind) {
                    entries.push((owner.clone(), kind));
                }
            }
        }
        log::debug!("[listeners] {} registered", owner);
        ListenerGuard {
            owner,
            listeners: self.clone(),
        }
    }

    pub fn is_registered(&self, owner: &str, kind: ListenerKind) -> bool {
        self.entries
            .read()
            .map(|entries| entries.iter().any(|(o, k)| o == owner && *k == kind))
            .unwrap_or(false)
    }

    /// Owners listening for `kind`, in registration order.
    pub fn owners(&self, kind: ListenerKind) -> Vec<String> {
        self.entries
            .read()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, k)| *k == kind)
                    .map(|(o, _)| o.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release(&self, owner: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|(o, _)| o != owner);
        }
        log::debug!("[listeners] {} released", owner);
    }
}

/// Proof that an owner is registered in a [`Listeners`] table.
#[must_use = "dropping the guard deregisters the listeners immediately"]
pub struct ListenerGuard {
    owner: String,
    listeners: Listeners,
}

impl ListenerGuard {
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("owner", &self.owner)
            .finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners.release(&self.owner);
    }
}
