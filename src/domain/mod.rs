//! Domain types and business logic for venue ticketing
//!
//! Venues, events and tickets are independent of each other; only the
//! session coordinates them.

pub mod event;
pub mod identifiers;
pub mod test_data;
pub mod text_field;
pub mod ticket;
pub mod validation_constants;
pub mod venue;

pub use event::*;
pub use identifiers::*;
pub use text_field::*;
pub use ticket::*;
pub use venue::*;
