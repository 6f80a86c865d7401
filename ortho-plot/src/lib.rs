//! Ortho Plot - SVG rendering of orthonormal functions
//!
//! Renders sampled functions from `ortho-core` as a semilog-x line plot and
//! decides where the resulting file goes.
//!
//! # Examples
//!
//! ```
//! use ortho_core::{OrthoConfig, OrthogonalFunctions};
//! use ortho_plot::FunctionPlot;
//!
//! let family = OrthogonalFunctions::new(OrthoConfig::default().with_num_func(3)).unwrap();
//! let svg = FunctionPlot::from_samples(&family.sample()).to_svg().unwrap();
//! assert!(svg.contains("i = 3"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod output;
pub mod svg;

pub use error::{PlotError, PlotResult};
pub use output::{DEFAULT_PLOT_DIR, PLOT_FILE_NAME, resolve_output_dir, save_plot};
pub use svg::{Color, DEFAULT_COLORS, DEFAULT_TITLE, DataSeries, FunctionPlot, PlotConfig};
