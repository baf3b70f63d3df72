//! Venue ticketing - an interactive venue, event and ticket session
//!
//! A single session holds one venue layout, one event and at most one
//! ticket, each replaced wholesale by menu actions, following type-driven
//! development principles.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::SessionController;
pub use error::{Error, Result};
