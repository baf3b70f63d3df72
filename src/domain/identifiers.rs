//! Ticket identity: the identifier newtype, its allocator and the
//! validation window applied to user-supplied identifiers.

use crate::domain::validation_constants::ticket_id::{
    FIRST_ALLOCATED, MAX_VALID_EXCLUSIVE, MIN_VALID,
};
use derive_more::Display;
use nutype::nutype;

/// Unique identifier of an issued ticket
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct TicketId(u64);

/// Sole source of ticket identifiers for a session
///
/// Hands out 1, 2, 3, ... and never reuses a value. There is no reset; a
/// fresh sequence means a fresh allocator.
#[derive(Debug)]
pub struct TicketIdAllocator {
    next: u64,
}

impl TicketIdAllocator {
    pub fn new() -> Self {
        Self {
            next: FIRST_ALLOCATED,
        }
    }

    /// Allocator whose first identifier is `first`
    pub fn starting_at(first: TicketId) -> Self {
        Self {
            next: first.into_inner(),
        }
    }

    /// Identifier the next allocation will return
    pub fn peek(&self) -> TicketId {
        TicketId::new(self.next)
    }

    pub fn allocate(&mut self) -> TicketId {
        let id = TicketId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for TicketIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of checking a user-supplied ticket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TicketIdVerdict {
    #[display("valid")]
    Valid,
    #[display("invalid")]
    OutOfWindow,
}

impl TicketIdVerdict {
    /// Valid iff `1 <= candidate < 1_000_000`, regardless of what was issued
    pub fn assess(candidate: i64) -> Self {
        if (MIN_VALID..MAX_VALID_EXCLUSIVE).contains(&candidate) {
            Self::Valid
        } else {
            Self::OutOfWindow
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}
