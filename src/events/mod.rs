//! Engine-to-presentation notifications.

mod observer;

pub use observer::{EventLog, GameEvent, GameObserver, NullObserver};
