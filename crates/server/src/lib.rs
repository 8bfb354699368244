//! HTTP front end for the calendar service.
//!
//! The binary (`calendar-server`) reads [`config::Config`], installs logging and
//! serves [`router`] over a shared [`calendar::EventService`]. The router is
//! exposed as a library so it can be driven in-process by tests.

pub mod config;
pub mod error;
pub mod logging;
mod routes;

pub use error::{ApiError, Error, Result};
pub use routes::{AppState, router};
