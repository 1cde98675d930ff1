pub mod calculator;
pub mod event_logs;
pub mod limits;
pub mod logic;
pub mod overview;

pub use logic::{EngineOptions, LeaveEngine};
