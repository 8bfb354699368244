//! In-memory event store implementation.

use crate::{DateOnly, Error, Event, Granularity, Result};

/// Ordered, in-memory collection of events.
///
/// Events keep their insertion order. Ids are handed out as one past the
/// last id assigned, so a removed id is not reissued, except that adding
/// to an empty store restarts numbering at 1.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    last_id: i64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id to `event` and append it.
    pub fn add(&mut self, mut event: Event) -> &Event {
        if self.events.is_empty() {
            self.last_id = 0;
        }
        self.last_id += 1;
        event.id = self.last_id;

        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Remove the event with `id`, returning it.
    pub fn remove(&mut self, id: i64) -> Result<Event> {
        let index = self.position(id)?;
        Ok(self.events.remove(index))
    }

    pub fn get(&self, id: i64) -> Result<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Replace the stored event that has `event.id`, keeping its position.
    pub fn update(&mut self, event: Event) -> Result<&Event> {
        let index = self.position(event.id)?;
        self.events[index] = event;
        Ok(&self.events[index])
    }

    /// Events of `user_id` whose date shares a bucket with `reference`.
    pub fn get_since(
        &self,
        user_id: i64,
        reference: DateOnly,
        granularity: Granularity,
    ) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.user_id == user_id && granularity.same_bucket(e.date, reference))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    fn position(&self, id: i64) -> Result<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound(id))
    }
}
