use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Kind of container-independent listener a drag session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

/// Handle returned by [`ListenerRegistry::subscribe`].
///
/// Handles are unique for the lifetime of a registry and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionHandle {
    id: u64,
    kind: ListenerKind,
}

impl SubscriptionHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn kind(self) -> ListenerKind {
        self.kind
    }
}

/// Bookkeeping for global move/up listeners.
///
/// Hosts that bridge to a real event source mirror these subscriptions; the
/// registry is the single place leaks become observable.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: SmallVec<[SubscriptionHandle; 4]>,
}

impl ListenerRegistry {
    pub fn subscribe(&mut self, kind: ListenerKind) -> SubscriptionHandle {
        self.next_id += 1;
        let handle = SubscriptionHandle {
            id: self.next_id,
            kind,
        };
        self.active.push(handle);
        handle
    }

    /// Removes a subscription. Returns `false` when it was already released.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        match self.active.iter().position(|entry| *entry == handle) {
            Some(position) => {
                self.active.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.active.iter().filter(|entry| entry.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{ListenerKind, ListenerRegistry};

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut registry = ListenerRegistry::default();
        let moves = registry.subscribe(ListenerKind::PointerMove);
        let ups = registry.subscribe(ListenerKind::PointerUp);
        assert_ne!(moves.id(), ups.id());
        assert_eq!(registry.len(), 2);

        assert!(registry.unsubscribe(moves));
        assert!(!registry.unsubscribe(moves));
        assert_eq!(registry.count(ListenerKind::PointerMove), 0);
        assert_eq!(registry.count(ListenerKind::PointerUp), 1);
    }
}
