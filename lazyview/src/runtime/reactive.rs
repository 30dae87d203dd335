//! Reactive value holder.
//!
//! A [`ReactiveCell`] stores the current value and notifies subscribers when
//! it changes, which is how placeholder views find out their template has
//! arrived. Built on [`tokio::sync::watch`], so observers are optional:
//! writing to a cell nobody watches is fine.
use std::sync::Arc;
use tokio::sync::watch;

pub struct ReactiveCell<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> ReactiveCell<T> {
    pub fn new(value: T) -> Self {
        let (sender, _receiver) = watch::channel(value);

        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replace the current value and wake up all subscribers.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Subscribe to changes. The receiver sees values set after this call;
    /// use [`watch::Receiver::wait_for`] to also match the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone> ReactiveCell<T> {
    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_set() {
        let cell = ReactiveCell::new(1);
        assert_eq!(cell.get(), 1);

        cell.set(2);
        assert_eq!(cell.get(), 2);

        // No subscribers required.
        let clone = cell.clone();
        clone.set(3);
        assert_eq!(cell.get(), 3);
    }

    #[tokio::test]
    async fn test_notifies_subscribers() {
        let cell = ReactiveCell::new(None::<String>);
        let mut changes = cell.subscribe();

        cell.set(Some("ready".into()));

        let value = changes
            .wait_for(|value| value.is_some())
            .await
            .expect("cell dropped");
        assert_eq!(value.as_deref(), Some("ready"));
    }
}
