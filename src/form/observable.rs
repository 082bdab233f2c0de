//! Observable value
//!
//! Holds the latest value of type `T` and calls every registered observer,
//! synchronously and in registration order, whenever a new value is set.

use log::trace;

/// Handle returned by [`Observable::observe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

pub struct Observable<T> {
    value: Option<T>,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self {
            value: None,
            observers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Observable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently set value, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Stores `value` and notifies observers before returning.
    ///
    /// With no observers attached the value is still stored.
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
        if let Some(current) = &self.value {
            trace!("Notifying {} observer(s)", self.observers.len());
            for (_, observer) in &mut self.observers {
                observer(current);
            }
        }
    }

    /// Drops the stored value without notifying anyone.
    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn observe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregisters an observer. Returns `false` if `id` was not registered.
    pub fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_set_value_without_observers() {
        let mut observable = Observable::new();
        assert!(observable.value().is_none());
        observable.set_value(3);
        assert_eq!(observable.value(), Some(&3));
    }

    #[test]
    fn test_observers_called_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new();

        let first = Rc::clone(&seen);
        observable.observe(move |v: &i32| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&seen);
        observable.observe(move |v: &i32| second.borrow_mut().push(("second", *v)));

        observable.set_value(7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_remove_observer() {
        let count = Rc::new(RefCell::new(0));
        let mut observable = Observable::new();
        let counter = Rc::clone(&count);
        let id = observable.observe(move |_: &&str| *counter.borrow_mut() += 1);

        observable.set_value("a");
        assert!(observable.remove_observer(id));
        assert!(!observable.remove_observer(id));
        observable.set_value("b");

        assert_eq!(*count.borrow(), 1);
        assert!(!observable.has_observers());
        assert_eq!(observable.value(), Some(&"b"));
    }

    #[test]
    fn test_clear_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut observable = Observable::new();
        let counter = Rc::clone(&count);
        observable.observe(move |_: &u8| *counter.borrow_mut() += 1);
        observable.set_value(1);
        observable.clear();
        assert!(observable.value().is_none());
        assert_eq!(*count.borrow(), 1);
    }
}
