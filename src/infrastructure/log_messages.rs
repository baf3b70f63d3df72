//! Log message constants for infrastructure components
//!
//! This module centralizes the log messages used by the session and its
//! start-up so wording stays consistent across the crate.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting venue ticketing session";
    pub const CONFIG_LOADED: &str = "Configuration loaded";
    pub const SESSION_ENDED: &str = "Session ended";
    pub const INPUT_EXHAUSTED: &str = "Input exhausted, ending session";
}

/// Session transition messages
pub mod session {
    pub const VENUE_REPLACED: &str = "Venue layout replaced";
    pub const VENUE_OVER_CAPACITY: &str = "Row seats exceed declared venue capacity";
    pub const EVENT_REPLACED: &str = "Event replaced";
    pub const TICKET_ISSUED: &str = "Ticket issued";
    pub const TICKET_DISCARDED: &str = "Ticket displayed and discarded";
    pub const TICKET_REJECTED: &str = "Ticket generation rejected";
    pub const TICKET_ID_CHECKED: &str = "Ticket id checked";
    pub const ROW_LOOKUP_REJECTED: &str = "Row lookup out of range";
    pub const INVALID_CHOICE: &str = "Invalid menu choice";
    pub const INPUT_REJECTED: &str = "Input rejected";
}
