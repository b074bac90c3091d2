pub mod crypto;
pub mod event;
pub mod log;
