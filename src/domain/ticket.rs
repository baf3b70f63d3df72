//! Tickets and their seating variants
//!
//! A ticket pairs an allocated [`TicketId`] and a type label with one of a
//! closed set of seating shapes. Which shape a label produces is decided by
//! [`SeatingKind::from_label`], an exact, case-sensitive lookup.

use crate::domain::identifiers::{TicketId, TicketIdAllocator};
use crate::domain::text_field::FixedText;
use crate::domain::validation_constants::ticket_labels;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Unrecognized ticket type '{0}'")]
    UnrecognizedTicketType(String),
}

/// Seating shape selected by a ticket type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SeatingKind {
    Stadium,
    Cinema,
    Theater,
}

impl SeatingKind {
    /// Dispatch a free-text label; matching happens before any truncation
    pub fn from_label(label: &str) -> Result<Self, TicketError> {
        match label {
            ticket_labels::CINEMA => Ok(Self::Cinema),
            ticket_labels::STADIUM => Ok(Self::Stadium),
            ticket_labels::THEATER => Ok(Self::Theater),
            other => Err(TicketError::UnrecognizedTicketType(other.to_string())),
        }
    }

    /// Seating of this kind with every locator set to zero
    pub fn default_seating(self) -> Seating {
        match self {
            Self::Stadium => Seating::Stadium {
                stand: 0,
                row: 0,
                seat: 0,
            },
            Self::Cinema => Seating::Cinema {
                area: 0,
                row: 0,
                seat: 0,
            },
            Self::Theater => Seating::Theater {
                category: 0,
                row: 0,
                seat: 0,
            },
        }
    }
}

/// Seat locator, one shape per venue style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seating {
    Stadium { stand: u32, row: u32, seat: u32 },
    Cinema { area: u32, row: u32, seat: u32 },
    Theater { category: u32, row: u32, seat: u32 },
}

impl Seating {
    pub fn kind(&self) -> SeatingKind {
        match self {
            Self::Stadium { .. } => SeatingKind::Stadium,
            Self::Cinema { .. } => SeatingKind::Cinema,
            Self::Theater { .. } => SeatingKind::Theater,
        }
    }
}

impl fmt::Display for Seating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stadium { stand, row, seat } => {
                write!(f, "Stadium seating: Stand={stand}, Row={row}, Seat={seat}")
            }
            Self::Cinema { area, row, seat } => {
                write!(f, "Cinema seating: Area={area}, Row={row}, Seat={seat}")
            }
            Self::Theater {
                category,
                row,
                seat,
            } => write!(
                f,
                "Theater seating: Category={category}, Row={row}, Seat={seat}"
            ),
        }
    }
}

/// An issued ticket
///
/// Two tickets are equal when their identifier and type label match; the
/// seating locators do not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    ticket_type: FixedText,
    seating: Seating,
}

impl Ticket {
    /// Allocate the next identifier and build the ticket
    pub fn issue(allocator: &mut TicketIdAllocator, ticket_type: &str, seating: Seating) -> Self {
        Self {
            id: allocator.allocate(),
            ticket_type: FixedText::new(ticket_type),
            seating,
        }
    }

    /// Dispatch `label` to a seating kind and issue a ticket with default locators
    ///
    /// An unrecognized label leaves the allocator untouched.
    pub fn issue_for_label(
        allocator: &mut TicketIdAllocator,
        label: &str,
    ) -> Result<Self, TicketError> {
        let kind = SeatingKind::from_label(label)?;
        Ok(Self::issue(allocator, label, kind.default_seating()))
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn ticket_type(&self) -> &FixedText {
        &self.ticket_type
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn kind(&self) -> SeatingKind {
        self.seating.kind()
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.ticket_type == other.ticket_type
    }
}

impl Eq for Ticket {}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket ID={}, Type={}", self.id, self.ticket_type)?;
        write!(f, "{}", self.seating)
    }
}
