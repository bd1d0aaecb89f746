//! mi-stepwise: Stepwise Predictor Selection Library
//!
//! Selects a small set of binned predictors that jointly carry the most
//! information about a binned target, using mutual information for the first
//! pick and the minimum conditional mutual information given every kept
//! variable for each later pick.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
