//! Test data constants for consistent testing
//!
//! This module centralizes the sample venues, events and ticket labels used
//! throughout the test suite so unit and integration tests agree on them.

/// Sample venue layouts for testing
pub mod venues {
    /// Small arena: 100 seats over five even rows in two zones
    pub const ARENA_CAPACITY: u32 = 100;
    pub const ARENA_ZONES: u32 = 2;
    pub const ARENA_ROWS: &[u32] = &[20, 20, 20, 20, 20];

    /// Studio theater with uneven rows
    pub const STUDIO_CAPACITY: u32 = 42;
    pub const STUDIO_ZONES: u32 = 1;
    pub const STUDIO_ROWS: &[u32] = &[8, 10, 12, 12];
}

/// Event fields for testing
pub mod events {
    pub const CONCERT_NAME: &str = "Concert";
    pub const CONCERT_DATE: &str = "2026-12-31";
    pub const CONCERT_TIME: &str = "21:00";

    pub const MATINEE_NAME: &str = "Matinee";
    pub const MATINEE_DATE: &str = "Sunday";
    pub const MATINEE_TIME: &str = "14:00";
}

/// Ticket type labels for testing
pub mod ticket_types {
    pub const CINEMA_LABEL: &str = "VIP";
    pub const STADIUM_LABEL: &str = "Lawn";
    pub const THEATER_LABEL: &str = "Balcony";

    pub const UNKNOWN_LABEL: &str = "Bogus";
    pub const WRONG_CASE_LABEL: &str = "vip";
}

/// Ticket identifiers around the validation window
pub mod ticket_ids {
    pub const BELOW_WINDOW: i64 = 0;
    pub const FIRST_VALID: i64 = 1;
    pub const LAST_VALID: i64 = 999_999;
    pub const ABOVE_WINDOW: i64 = 1_000_000;
}
