pub mod category;
pub mod dataset;
pub mod employee;
pub mod event_log;
pub mod production_calendar;
pub mod rows;
