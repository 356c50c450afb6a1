//! Fake message traffic for the system visualization.
//!
//! A repeating tick picks a random node and one of its neighbours and
//! appends a short-lived message to a bounded log. Everything runs on a
//! caller-supplied clock so the UI drives it once per frame.

pub mod log;
pub mod simulator;
pub mod timer;
pub mod types;
pub mod widget;

pub use simulator::{SimState, Simulator};
pub use types::SimulationConfig;
pub use widget::{render_message_log, LeavingRow};
