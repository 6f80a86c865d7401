//! Where plots are written.

use crate::error::{PlotError, PlotResult};
use crate::svg::FunctionPlot;
use ortho_core::SampledFunction;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the saved plot.
pub const PLOT_FILE_NAME: &str = "orthogonal_functions.svg";

/// Preferred directory, relative to the working directory.
pub const DEFAULT_PLOT_DIR: &str = "docs/images";

fn is_writable_dir(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|m| m.is_dir() && !m.permissions().readonly())
        .unwrap_or(false)
}

/// Pick the output directory.
///
/// An explicit directory must exist and be writable. Otherwise
/// `docs/images` under `base` is used when it is a writable directory, and
/// `base` itself when it is not.
pub fn resolve_output_dir(explicit: Option<&Path>, base: &Path) -> PlotResult<PathBuf> {
    if let Some(dir) = explicit {
        if !is_writable_dir(dir) {
            return Err(PlotError::NotWritable(dir.to_path_buf()));
        }
        return Ok(dir.to_path_buf());
    }

    let preferred = base.join(DEFAULT_PLOT_DIR);
    if is_writable_dir(&preferred) {
        Ok(preferred)
    } else {
        warn!(
            preferred = %preferred.display(),
            fallback = %base.display(),
            "plot directory unavailable, saving to working directory"
        );
        Ok(base.to_path_buf())
    }
}

/// Render `samples` and write them to [`PLOT_FILE_NAME`] inside `dir`.
pub fn save_plot(samples: &[SampledFunction], dir: &Path) -> PlotResult<PathBuf> {
    let path = dir.join(PLOT_FILE_NAME);
    FunctionPlot::from_samples(samples).write_to_file(&path)?;
    info!(path = %path.display(), functions = samples.len(), "plot saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn samples() -> Vec<SampledFunction> {
        vec![SampledFunction {
            index: 1,
            points: vec![(1e-2, 0.1), (1.0, 1.0)],
        }]
    }

    #[test]
    fn test_prefers_docs_images() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("docs/images")).unwrap();
        let dir = resolve_output_dir(None, tmp.path()).unwrap();
        assert_eq!(dir, tmp.path().join("docs/images"));
    }

    #[test]
    fn test_falls_back_to_base() {
        let tmp = TempDir::new().unwrap();
        let dir = resolve_output_dir(None, tmp.path()).unwrap();
        assert_eq!(dir, tmp.path());
    }

    #[test]
    fn test_explicit_dir() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("out");
        assert!(matches!(
            resolve_output_dir(Some(&explicit), tmp.path()),
            Err(PlotError::NotWritable(_))
        ));
        fs::create_dir(&explicit).unwrap();
        assert_eq!(resolve_output_dir(Some(&explicit), tmp.path()).unwrap(), explicit);
    }

    #[test]
    fn test_save_plot() {
        let tmp = TempDir::new().unwrap();
        let path = save_plot(&samples(), tmp.path()).unwrap();
        assert_eq!(path, tmp.path().join(PLOT_FILE_NAME));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("<?xml"));
        assert!(content.contains("i = 1"));
    }

    #[test]
    fn test_save_empty_plot_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(save_plot(&[], tmp.path()), Err(PlotError::NoData)));
        assert!(!tmp.path().join(PLOT_FILE_NAME).exists());
    }
}
