//! Error type for plotting operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for plotting operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No data to plot
    #[error("No data to plot")]
    NoData,
    /// The requested output directory cannot be written to
    #[error("output directory {} is not writable", .0.display())]
    NotWritable(PathBuf),
}

/// Result type for plotting operations
pub type PlotResult<T> = Result<T, PlotError>;
