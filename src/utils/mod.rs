//! Utility module - progress indicators and terminal styling

mod progress;
mod styling;

pub use progress::*;
pub use styling::*;
