//! Application services and session orchestration
//!
//! This module contains the session state machine that coordinates the
//! domain entities, plus the menu and input seams it consumes.

pub mod input;
pub mod menu;
pub mod session;

pub use input::{InputError, InputSource};
pub use menu::{Menu, MenuChoice};
pub use session::{Outcome, SessionController, SessionError, SessionSnapshot};
