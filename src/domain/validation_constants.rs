//! Validation constants for domain types
//!
//! This module centralizes the limits and magic numbers used throughout the
//! domain layer so the session and the entities agree on them.

/// Fixed text field limits
pub mod fixed_text {
    /// Size of the backing buffer, including the terminator byte
    pub const CAPACITY: usize = 50;

    /// Longest content that can be stored (one byte is kept for the terminator)
    pub const MAX_CONTENT_BYTES: usize = CAPACITY - 1;
}

/// Venue layout limits
pub mod venue {
    /// Upper bound on rows accepted from interactive input
    pub const MAX_ROWS: usize = 10_000;
}

/// Ticket identifier window used by the validation action
pub mod ticket_id {
    /// Smallest identifier considered valid
    pub const MIN_VALID: i64 = 1;

    /// Exclusive upper bound; fixed, not derived from the allocator
    pub const MAX_VALID_EXCLUSIVE: i64 = 1_000_000;

    /// First identifier handed out by a fresh allocator
    pub const FIRST_ALLOCATED: u64 = 1;
}

/// Ticket type labels recognised by the seating dispatch
pub mod ticket_labels {
    /// Routes to cinema seating
    pub const CINEMA: &str = "VIP";

    /// Routes to stadium seating
    pub const STADIUM: &str = "Lawn";

    /// Routes to theater seating
    pub const THEATER: &str = "Balcony";
}
