//! Menu choices offered by the session and the text that lists them

use derive_more::Display;
use std::fmt;

/// One selectable action of the session menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MenuChoice {
    #[display("Enter Venue Layout")]
    SetVenue,
    #[display("Enter Event Details")]
    SetEvent,
    #[display("Generate Ticket")]
    GenerateTicket,
    #[display("Validate Ticket ID")]
    ValidateTicketId,
    #[display("Exit")]
    Exit,
    #[display("Show Seats in Row")]
    ShowRowSeats,
    #[display("Show Session")]
    ShowSession,
}

impl MenuChoice {
    /// Every choice in menu order
    pub const ALL: [Self; 7] = [
        Self::SetVenue,
        Self::SetEvent,
        Self::GenerateTicket,
        Self::ValidateTicketId,
        Self::Exit,
        Self::ShowRowSeats,
        Self::ShowSession,
    ];

    /// Map a menu selector to its choice; `None` when nothing is listed under it
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::SetVenue),
            2 => Some(Self::SetEvent),
            3 => Some(Self::GenerateTicket),
            4 => Some(Self::ValidateTicketId),
            5 => Some(Self::Exit),
            6 => Some(Self::ShowRowSeats),
            7 => Some(Self::ShowSession),
            _ => None,
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            Self::SetVenue => 1,
            Self::SetEvent => 2,
            Self::GenerateTicket => 3,
            Self::ValidateTicketId => 4,
            Self::Exit => 5,
            Self::ShowRowSeats => 6,
            Self::ShowSession => 7,
        }
    }
}

/// The full menu listing, rendered before each choice
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu;

impl Menu {
    pub const CHOICE_PROMPT: &'static str = "Enter your choice: ";
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "MENU")?;
        for choice in MenuChoice::ALL {
            writeln!(f, "{}. {choice}", choice.selector())?;
        }
        Ok(())
    }
}
