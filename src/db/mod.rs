pub mod event;

use log::info;

pub use event::EventStore;

pub fn init_store() -> EventStore {
    let store = EventStore::new();
    info!("{}", "In-memory event store ready".to_string());
    store
}
