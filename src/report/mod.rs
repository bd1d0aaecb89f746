//! Report module - trace log, terminal output and JSON export

pub mod selection_export;
pub mod summary;
pub mod terminal;
pub mod trace_log;

pub use selection_export::*;
pub use summary::*;
pub use trace_log::*;
