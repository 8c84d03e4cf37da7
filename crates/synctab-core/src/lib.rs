pub mod error;
pub mod validate;

pub mod cancel;
pub mod config;
pub mod report;
pub mod search;
pub mod table;

pub use crate::cancel::{CancelPoll, CancelSignal};
pub use crate::config::config::{SearchConfig, StaticWindow};
pub use crate::search::engine::{Engine, SearchOutcome, Termination};
pub use crate::table::Table;
