mod format;
mod refresh;
mod runner;
mod service;
mod tracker;

pub use format::format_countdown;
pub use refresh::RefreshOutcome;
pub use runner::{CountdownRunner, Readiness};
pub use service::CountdownService;
pub use tracker::{RefreshTracker, RefreshTransition};
