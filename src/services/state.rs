// src/services/state.rs
//
// Observable state cells

use tokio::sync::watch;

/// A single observable state slot.
///
/// Wraps a `watch` channel so consumers can read the current value or
/// subscribe for changes. Starts unset; each operation replaces the value
/// wholesale. Slots are independent: publishing to one never disturbs
/// another.
#[derive(Debug)]
pub struct StateCell<V> {
    tx: watch::Sender<Option<V>>,
}

impl<V: Clone> StateCell<V> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Current value, if one was ever published.
    pub fn value(&self) -> Option<V> {
        self.tx.borrow().clone()
    }

    /// Change stream; yields on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Option<V>> {
        self.tx.subscribe()
    }

    pub(crate) fn publish(&self, value: Option<V>) {
        self.tx.send_replace(value);
    }
}

impl<V: Clone> Default for StateCell<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let cell: StateCell<u32> = StateCell::new();
        assert_eq!(cell.value(), None);
    }

    #[test]
    fn test_publish_replaces_value() {
        let cell = StateCell::new();
        cell.publish(Some(1));
        cell.publish(Some(2));
        assert_eq!(cell.value(), Some(2));
        cell.publish(None);
        assert_eq!(cell.value(), None);
    }

    #[tokio::test]
    async fn test_subscribers_observe_publishes() {
        let cell = StateCell::new();
        let mut rx = cell.subscribe();
        cell.publish(Some("ready"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some("ready"));
    }
}
