//! Session controller: turns a submission into exactly one applied outcome.
//!
//! A `SessionController` owns one conversation and one diagnostic log,
//! runs each submission as a spawned exchange racing the transport against
//! a deadline, and pushes every state change to its render sink.

mod exchange;
mod knowledge;
mod manager;
mod types;


pub use manager::SessionController;
pub use types::{ControllerConfig, ControllerPhase, ExchangeHandle, Settlement};
