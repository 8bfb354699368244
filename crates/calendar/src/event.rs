//! Event records and their unvalidated request form.

use serde::{Deserialize, Serialize};

use crate::{DateOnly, Error, Result};

/// A calendar event owned by a user.
///
/// `id` is 0 until the event is added to an [`EventStore`](crate::EventStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub date: DateOnly,
}

impl Event {
    pub fn new(
        user_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        date: DateOnly,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            title: title.into(),
            description: description.into(),
            date,
        }
    }
}

/// An event as submitted by a client, before required-field checks.
///
/// Every field may be missing. An empty `date` string decodes as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::date::optional::deserialize")]
    pub date: Option<DateOnly>,
}

impl EventInput {
    /// Check required fields and build the event.
    ///
    /// On failure every violated field is reported, not just the first.
    pub fn validate(self) -> Result<Event> {
        let mut missing = Vec::new();

        let user_id = self.user_id.filter(|id| *id != 0);
        if user_id.is_none() {
            missing.push("user_id");
        }
        let title = self.title.filter(|t| !t.is_empty());
        if title.is_none() {
            missing.push("title");
        }
        let description = self.description.filter(|d| !d.is_empty());
        if description.is_none() {
            missing.push("description");
        }
        if self.date.is_none() {
            missing.push("date");
        }

        match (user_id, title, description, self.date) {
            (Some(user_id), Some(title), Some(description), Some(date)) => Ok(Event {
                id: self.id,
                user_id,
                title,
                description,
                date,
            }),
            _ => Err(Error::Validation(missing)),
        }
    }
}
