//! In-memory calendar events with day, week and month queries.
//!
//! This crate is the core of the calendar service. It holds events per
//! user, hands out ids, and answers "which of this user's events fall on the
//! same day / ISO week / month as this date?". It performs no I/O; the
//! `server` crate puts an HTTP API in front of it.
//!
//! # Core Concepts
//!
//! ## DateOnly
//!
//! A [`DateOnly`] is a calendar date with no time of day, written as
//! `YYYY-MM-DD`. Timestamps converted into it are moved to UTC first, so
//! offsets never change which day an event lands on.
//!
//! ## Event
//!
//! An [`Event`] has an id, the owning user's id, a title, a description and
//! a date. Clients submit an [`EventInput`], which must pass
//! [`EventInput::validate`] before it becomes an `Event`.
//!
//! ## EventStore
//!
//! The [`EventStore`] keeps events in insertion order and assigns ids
//! `1, 2, 3, ...`. Removed ids are not reissued while the store still holds
//! events; once it is empty, numbering starts again at 1.
//!
//! ## Granularity
//!
//! A [`Granularity`] picks the bucket used by
//! [`EventStore::get_since`]: the same calendar day, the same ISO-8601 week,
//! or the same calendar month.
//!
//! ## Service
//!
//! The [`Service`] trait is what a transport talks to. [`EventService`]
//! implements it over one store guarded by a read/write lock, so it can be
//! shared between threads.
//!
//! # Example
//!
//! ```
//! use calendar::{DateOnly, Event, EventService, Granularity, Service};
//!
//! let service = EventService::new();
//! let date: DateOnly = "2025-10-04".parse()?;
//!
//! let created = service.create_event(Event::new(1, "Standup", "Daily sync", date));
//! assert_eq!(created.id, 1);
//!
//! let today = service.get_since(1, date, Granularity::Day);
//! assert_eq!(today, vec![created]);
//! # Ok::<(), calendar::Error>(())
//! ```

mod date;
mod error;
mod event;
mod query;
mod service;
mod store;

pub use date::DateOnly;
pub use error::{Error, Result};
pub use event::{Event, EventInput};
pub use query::Granularity;
pub use service::{EventService, Service};
pub use store::EventStore;
