pub mod backend;
pub mod config;
pub mod event;
pub mod event_log;
pub mod hook;
pub mod paths;
pub mod speech;
