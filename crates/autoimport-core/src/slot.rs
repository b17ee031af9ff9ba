use std::fmt;
use std::mem;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::errors::SlotError;
use crate::implementors::ImplementorIndex;

type Subscriber<T> = Box<dyn FnOnce(T) + Send>;

enum State<T> {
    Empty,
    /// Published before any subscriber was installed; buffered for pickup.
    Pending(T),
    /// Subscriber installed before the value was published.
    Subscribed(Subscriber<T>),
    Delivered,
}

/// Single-assignment publish slot.
///
/// `publish` delivers to the subscriber immediately when one is installed,
/// else buffers the value; `subscribe` installs the callback and drains a
/// buffered value. Delivery happens exactly once regardless of ordering, and
/// both operations reject a second call.
pub struct Slot<T> {
    state: Mutex<State<T>>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Empty),
        }
    }

    pub fn publish(&self, value: T) -> Result<(), SlotError> {
        let mut guard = self.state.lock().unwrap();
        match mem::replace(&mut *guard, State::Delivered) {
            State::Empty => {
                *guard = State::Pending(value);
                Ok(())
            }
            State::Subscribed(subscriber) => {
                // Run the callback outside the lock so it may inspect the slot.
                drop(guard);
                subscriber(value);
                Ok(())
            }
            prev @ (State::Pending(_) | State::Delivered) => {
                *guard = prev;
                Err(SlotError::AlreadyPublished)
            }
        }
    }

    pub fn subscribe<F>(&self, subscriber: F) -> Result<(), SlotError>
    where
        F: FnOnce(T) + Send + 'static,
    {
        let mut guard = self.state.lock().unwrap();
        match mem::replace(&mut *guard, State::Delivered) {
            State::Empty => {
                *guard = State::Subscribed(Box::new(subscriber));
                Ok(())
            }
            State::Pending(value) => {
                drop(guard);
                subscriber(value);
                Ok(())
            }
            prev @ (State::Subscribed(_) | State::Delivered) => {
                *guard = prev;
                Err(SlotError::AlreadySubscribed)
            }
        }
    }

    /// True once the value has reached a subscriber.
    pub fn is_delivered(&self) -> bool {
        matches!(&*self.state.lock().unwrap(), State::Delivered)
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.lock().unwrap() {
            State::Empty => "Empty",
            State::Pending(_) => "Pending",
            State::Subscribed(_) => "Subscribed",
            State::Delivered => "Delivered",
        };
        f.debug_struct("Slot").field("state", &state).finish()
    }
}

static IMPLEMENTOR_SLOT: Lazy<Slot<ImplementorIndex>> = Lazy::new(Slot::new);

/// Process-wide slot carrying the implementor table from whoever registers it
/// at startup to the consumer that renders documentation from it.
pub fn implementor_slot() -> &'static Slot<ImplementorIndex> {
    &IMPLEMENTOR_SLOT
}
