//! Service façade over the event store.

use parking_lot::RwLock;
use tracing::debug;

use crate::{DateOnly, Event, EventStore, Granularity, Result};

/// Operations a transport layer needs from the calendar.
///
/// Implementations must be safe to share across request handlers.
pub trait Service: Send + Sync {
    /// Store a new event and return it with its assigned id.
    fn create_event(&self, event: Event) -> Event;

    fn get_event(&self, id: i64) -> Result<Event>;

    /// Replace the event with `event.id` and return the stored value.
    fn update_event(&self, event: Event) -> Result<Event>;

    /// Delete the event with `id` and return its last stored value.
    fn delete_event(&self, id: i64) -> Result<Event>;

    fn get_since(&self, user_id: i64, date: DateOnly, granularity: Granularity) -> Vec<Event>;
}

/// [`Service`] backed by a single lock-guarded [`EventStore`].
#[derive(Debug, Default)]
pub struct EventService {
    store: RwLock<EventStore>,
}

impl EventService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service for EventService {
    fn create_event(&self, event: Event) -> Event {
        let mut store = self.store.write();
        let created = store.add(event).clone();
        debug!(id = created.id, user_id = created.user_id, "event created");
        created
    }

    fn get_event(&self, id: i64) -> Result<Event> {
        self.store.read().get(id).cloned()
    }

    fn update_event(&self, event: Event) -> Result<Event> {
        let mut store = self.store.write();
        let updated = store.update(event)?.clone();
        debug!(id = updated.id, "event updated");
        Ok(updated)
    }

    fn delete_event(&self, id: i64) -> Result<Event> {
        let removed = self.store.write().remove(id)?;
        debug!(id, "event deleted");
        Ok(removed)
    }

    fn get_since(&self, user_id: i64, date: DateOnly, granularity: Granularity) -> Vec<Event> {
        self.store.read().get_since(user_id, date, granularity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Arc;
    use std::thread;

    fn event(user_id: i64, date: &str) -> Event {
        Event::new(user_id, "T", "D", date.parse().unwrap())
    }

    #[test]
    fn test_create_and_get() {
        let service = EventService::new();
        let created = service.create_event(event(1, "2025-10-04"));
        assert_eq!(created.id, 1);
        assert_eq!(service.get_event(1).unwrap(), created);
    }

    #[test]
    fn test_update_and_delete() {
        let service = EventService::new();
        let mut created = service.create_event(event(1, "2025-10-04"));

        created.title = "Renamed".to_string();
        let updated = service.update_event(created.clone()).unwrap();
        assert_eq!(updated.title, "Renamed");

        let deleted = service.delete_event(created.id).unwrap();
        assert_eq!(deleted, updated);
        assert_eq!(service.get_event(created.id).unwrap_err(), Error::NotFound(1));
        assert_eq!(service.delete_event(created.id).unwrap_err(), Error::NotFound(1));
    }

    #[test]
    fn test_get_since_delegates() {
        let service = EventService::new();
        service.create_event(event(1, "2025-10-04"));
        service.create_event(event(1, "2025-10-05"));

        let day = service.get_since(1, "2025-10-05".parse().unwrap(), Granularity::Day);
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, 2);
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let service = Arc::new(EventService::new());
        let handles: Vec<_> = (0..8)
            .map(|user| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| service.create_event(event(user + 1, "2025-10-04")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
    }
}
