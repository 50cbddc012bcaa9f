//! Service layer for the expense tracker
//!
//! Holds the stateful pieces: the category registry, the tracker that owns
//! expense records, and the clock that dates them.

pub mod category;
pub mod clock;
pub mod tracker;

pub use category::CategoryRegistry;
pub use clock::{Clock, FixedClock, SystemClock};
pub use tracker::Tracker;
