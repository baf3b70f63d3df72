//! The interactive session: one live venue, event and ticket, replaced or
//! queried one menu choice at a time.

use crate::application::input::{InputError, InputSource};
use crate::application::menu::{Menu, MenuChoice};
use crate::config::SessionSettings;
use crate::domain::validation_constants::venue::MAX_ROWS;
use crate::domain::{
    Capacity, EventRecord, SeatCount, Ticket, TicketError, TicketIdAllocator, TicketIdVerdict,
    VenueError, VenueLayout, ZoneCount,
};
use crate::infrastructure::log_messages::{application as app_log, session as session_log};
use crate::{Error, Result};
use std::fmt;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Reasons a menu cycle ends without changing state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid choice {0}. Please try again.")]
    InvalidMenuChoice(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// What a single menu cycle produced; `Display` is the text shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    VenueSet(VenueLayout),
    EventSet(EventRecord),
    TicketGenerated(Ticket),
    TicketRejected(TicketError),
    TicketIdChecked {
        candidate: i64,
        verdict: TicketIdVerdict,
    },
    RowSeats {
        index: i64,
        seats: SeatCount,
    },
    RowRejected(VenueError),
    SessionShown(Box<SessionSnapshot>),
    Rejected(SessionError),
    Exit,
}

/// Copy of the session's live slots at the time it was shown
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub venue: VenueLayout,
    pub event: EventRecord,
    pub ticket: Option<Ticket>,
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.venue)?;
        writeln!(f, "{}", self.event)?;
        match &self.ticket {
            Some(ticket) => write!(f, "{ticket}"),
            None => write!(f, "No ticket generated."),
        }
    }
}

impl Outcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VenueSet(venue) => write!(f, "Venue layout updated.\n{venue}"),
            Self::EventSet(event) => write!(f, "Event updated.\n{event}"),
            Self::TicketGenerated(ticket) => write!(f, "Generated Ticket: {ticket}"),
            Self::TicketRejected(error) => write!(f, "Ticket generation failed: {error}"),
            Self::TicketIdChecked { candidate, verdict } => {
                write!(f, "Ticket ID {candidate} is {verdict}.")
            }
            Self::RowSeats { index, seats } => write!(f, "Row {index} has {seats} seats."),
            Self::RowRejected(error) => write!(f, "Error: {error}"),
            Self::SessionShown(snapshot) => write!(f, "{snapshot}"),
            Self::Rejected(error) => write!(f, "{error}"),
            Self::Exit => write!(f, "Exiting..."),
        }
    }
}

/// Why an action stopped early
enum ActionFailure {
    Rejected(SessionError),
    Input(InputError),
}

impl From<SessionError> for ActionFailure {
    fn from(error: SessionError) -> Self {
        Self::Rejected(error)
    }
}

impl From<InputError> for ActionFailure {
    fn from(error: InputError) -> Self {
        match error {
            InputError::Malformed { .. } => {
                Self::Rejected(SessionError::InvalidInput(error.to_string()))
            }
            other => Self::Input(other),
        }
    }
}

/// Holds the session's live entities and interprets menu choices
#[derive(Debug)]
pub struct SessionController {
    venue: VenueLayout,
    event: EventRecord,
    ticket: Option<Ticket>,
    allocator: TicketIdAllocator,
    settings: SessionSettings,
}

impl SessionController {
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_allocator(settings, TicketIdAllocator::new())
    }

    pub fn with_allocator(settings: SessionSettings, allocator: TicketIdAllocator) -> Self {
        Self {
            venue: VenueLayout::empty(),
            event: EventRecord::default(),
            ticket: None,
            allocator,
            settings,
        }
    }

    pub fn venue(&self) -> &VenueLayout {
        &self.venue
    }

    pub fn event(&self) -> &EventRecord {
        &self.event
    }

    /// The current ticket, if one was generated and retained
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    pub fn allocator(&self) -> &TicketIdAllocator {
        &self.allocator
    }

    /// Interpret a raw menu selector
    ///
    /// Rejected choices and rejected input come back as [`Outcome::Rejected`];
    /// only exhausted or failing input is an error.
    #[instrument(skip(self, input))]
    pub fn handle<I: InputSource + ?Sized>(
        &mut self,
        selector: i64,
        input: &mut I,
    ) -> Result<Outcome> {
        match MenuChoice::from_selector(selector) {
            Some(choice) => self.apply(choice, input),
            None => {
                warn!(selector, "{}", session_log::INVALID_CHOICE);
                Ok(Outcome::Rejected(SessionError::InvalidMenuChoice(selector)))
            }
        }
    }

    /// Carry out `choice`, reading whatever values it needs from `input`
    pub fn apply<I: InputSource + ?Sized>(
        &mut self,
        choice: MenuChoice,
        input: &mut I,
    ) -> Result<Outcome> {
        let result = match choice {
            MenuChoice::SetVenue => self.set_venue(input),
            MenuChoice::SetEvent => self.set_event(input),
            MenuChoice::GenerateTicket => self.generate_ticket(input),
            MenuChoice::ValidateTicketId => Self::validate_ticket_id(input),
            MenuChoice::ShowRowSeats => self.show_row_seats(input),
            MenuChoice::ShowSession => Ok(self.show_session()),
            MenuChoice::Exit => Ok(Outcome::Exit),
        };

        match result {
            Ok(outcome) => Ok(outcome),
            Err(ActionFailure::Rejected(error)) => {
                warn!(%error, %choice, "{}", session_log::INPUT_REJECTED);
                Ok(Outcome::Rejected(error))
            }
            Err(ActionFailure::Input(error)) => Err(Error::Input(error)),
        }
    }

    /// Menu loop: runs until Exit is chosen or the input runs out
    #[instrument(skip_all)]
    pub fn run<I: InputSource + ?Sized, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> Result<()> {
        loop {
            if self.settings.show_menu {
                write!(out, "{}", Menu)?;
                out.flush()?;
            }

            let selector = match input.read_integer(Menu::CHOICE_PROMPT) {
                Ok(selector) => selector,
                Err(InputError::Exhausted) => {
                    info!("{}", app_log::INPUT_EXHAUSTED);
                    break;
                }
                Err(error @ InputError::Malformed { .. }) => {
                    warn!(%error, "{}", session_log::INVALID_CHOICE);
                    let outcome = Outcome::Rejected(SessionError::InvalidInput(error.to_string()));
                    writeln!(out, "{outcome}")?;
                    input.discard_pending();
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            let outcome = match self.handle(selector, input) {
                Ok(outcome) => outcome,
                Err(Error::Input(InputError::Exhausted)) => {
                    info!("{}", app_log::INPUT_EXHAUSTED);
                    break;
                }
                Err(error) => return Err(error),
            };

            writeln!(out, "{outcome}")?;
            if matches!(outcome, Outcome::Rejected(SessionError::InvalidInput(_))) {
                input.discard_pending();
            }
            if outcome.is_exit() {
                break;
            }
        }

        out.flush()?;
        info!("{}", app_log::SESSION_ENDED);
        Ok(())
    }

    fn set_venue<I: InputSource + ?Sized>(
        &mut self,
        input: &mut I,
    ) -> std::result::Result<Outcome, ActionFailure> {
        let max_seats = input.read_integer("Enter max seats: ")?;
        let num_rows = input.read_integer("Enter number of rows: ")?;
        let num_zones = input.read_integer("Enter number of zones: ")?;

        let max_seats = to_count(max_seats, "max seats")?;
        let num_rows = to_count(num_rows, "number of rows")?;
        let num_zones = to_count(num_zones, "number of zones")?;

        let num_rows = usize::try_from(num_rows)
            .ok()
            .filter(|rows| *rows <= MAX_ROWS)
            .ok_or_else(|| {
                SessionError::InvalidInput(format!("number of rows must be at most {MAX_ROWS}"))
            })?;

        let seats_per_row = (1..=num_rows)
            .map(|row| {
                read_count(&mut *input, &format!("Enter seats in row {row}: "), "seats per row")
                    .map(SeatCount::new)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let layout = VenueLayout::new(
            Capacity::new(max_seats),
            num_rows,
            ZoneCount::new(num_zones),
            seats_per_row,
        )
        .map_err(|e| SessionError::InvalidInput(e.to_string()))?;

        if layout.exceeds_capacity() {
            warn!(
                capacity = max_seats,
                row_seats = layout.total_row_seats(),
                "{}",
                session_log::VENUE_OVER_CAPACITY
            );
        }

        self.venue.replace(&layout);
        info!(
            rows = layout.num_rows(),
            zones = num_zones,
            "{}",
            session_log::VENUE_REPLACED
        );
        Ok(Outcome::VenueSet(layout))
    }

    fn set_event<I: InputSource + ?Sized>(
        &mut self,
        input: &mut I,
    ) -> std::result::Result<Outcome, ActionFailure> {
        let name = input.read_text("Enter event name: ")?;
        let date = input.read_text("Enter event date: ")?;
        let time = input.read_text("Enter event time: ")?;

        let event = EventRecord::new(&name, &date, &time);
        self.event.replace(&event);
        info!(event_name = %event.name(), "{}", session_log::EVENT_REPLACED);
        Ok(Outcome::EventSet(event))
    }

    fn generate_ticket<I: InputSource + ?Sized>(
        &mut self,
        input: &mut I,
    ) -> std::result::Result<Outcome, ActionFailure> {
        let label = input.read_text("Enter ticket type: ")?;

        let ticket = match Ticket::issue_for_label(&mut self.allocator, &label) {
            Ok(ticket) => ticket,
            Err(error) => {
                warn!(%error, "{}", session_log::TICKET_REJECTED);
                return Ok(Outcome::TicketRejected(error));
            }
        };

        info!(
            ticket_id = %ticket.id(),
            kind = %ticket.kind(),
            "{}",
            session_log::TICKET_ISSUED
        );
        if self.settings.retain_generated_ticket {
            self.ticket = Some(ticket.clone());
        } else {
            self.ticket = None;
            debug!(ticket_id = %ticket.id(), "{}", session_log::TICKET_DISCARDED);
        }
        Ok(Outcome::TicketGenerated(ticket))
    }

    fn validate_ticket_id<I: InputSource + ?Sized>(
        input: &mut I,
    ) -> std::result::Result<Outcome, ActionFailure> {
        let candidate = input.read_integer("Enter ticket ID to validate: ")?;
        let verdict = TicketIdVerdict::assess(candidate);
        info!(candidate, %verdict, "{}", session_log::TICKET_ID_CHECKED);
        Ok(Outcome::TicketIdChecked { candidate, verdict })
    }

    fn show_row_seats<I: InputSource + ?Sized>(
        &self,
        input: &mut I,
    ) -> std::result::Result<Outcome, ActionFailure> {
        let index = input.read_integer("Enter row index (starting at 0): ")?;
        Ok(match self.venue.seats_in_row(index) {
            Ok(seats) => Outcome::RowSeats { index, seats },
            Err(error) => {
                debug!(%error, "{}", session_log::ROW_LOOKUP_REJECTED);
                Outcome::RowRejected(error)
            }
        })
    }

    fn show_session(&self) -> Outcome {
        Outcome::SessionShown(Box::new(SessionSnapshot {
            venue: self.venue.clone(),
            event: self.event,
            ticket: self.ticket.clone(),
        }))
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

fn read_count<I: InputSource + ?Sized>(
    input: &mut I,
    prompt: &str,
    field: &str,
) -> std::result::Result<u32, ActionFailure> {
    let value = input.read_integer(prompt)?;
    to_count(value, field)
}

fn to_count(value: i64, field: &str) -> std::result::Result<u32, ActionFailure> {
    u32::try_from(value).map_err(|_| {
        SessionError::InvalidInput(format!("{field} must be a non-negative count, got {value}"))
            .into()
    })
}
