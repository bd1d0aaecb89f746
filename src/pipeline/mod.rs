//! Pipeline module - loading, binning, information scores and selection

pub mod analysis;
pub mod binning;
pub mod error;
pub mod information;
pub mod loader;
pub mod matrix;
pub mod selection;
pub mod univariate;

pub use analysis::*;
pub use binning::{
    bin_predictors, bin_variable, partition, split_at_zero, BinId, BinningMode, Partition,
    BIN_COUNT,
};
pub use error::DataError;
pub use information::{
    entropy, error_entropy, fano_bound, mutual_information, BinnedInformation, InformationSource,
};
pub use loader::*;
pub use matrix::BinMatrix;
pub use selection::*;
pub use univariate::*;
