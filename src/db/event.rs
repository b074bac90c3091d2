use std::collections::HashMap;

use log::debug;
use tokio::sync::RwLock;

use crate::models::{Event, PublicEvent};

/// Process-lifetime map from event id to event record.
#[derive(Debug, Default)]
pub struct EventStore {
    events: RwLock<HashMap<String, Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, event: Event) -> PublicEvent {
        let public = event.to_public();
        let mut events = self.events.write().await;
        debug!("storing event {}", event.id);
        events.insert(event.id.clone(), event);
        public
    }

    pub async fn get_by_id(&self, id: &str) -> Option<PublicEvent> {
        self.events.read().await.get(id).map(Event::to_public)
    }

    /// Runs `f` on the stored event while holding the write lock.
    /// Returns `None` when no event has this id.
    pub async fn modify<F, R>(&self, id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut Event) -> R,
    {
        let mut events = self.events.write().await;
        events.get_mut(id).map(f)
    }

    pub async fn count(&self) -> usize {
        self.events.read().await.len()
    }
}
