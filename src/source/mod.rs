//! Portfolio content sources.
//!
//! Content is either the built-in page copy or a TOML file with the same
//! shape as [`Portfolio`]. The file is read once at startup; there is no
//! live reloading.

use crate::model::{ContentError, Portfolio};
use std::path::Path;
use tracing::info;

/// Load portfolio content.
///
/// # Logic:
/// 1. No path: the built-in portfolio
/// 2. Path given: the file must exist and parse
///
/// # Errors
///
/// Returns `ContentError::FileNotFound` if the named file does not exist.
/// Returns `ContentError::Read` for I/O errors while reading it.
/// Returns `ContentError::Parse` if it is not a valid portfolio document.
pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, ContentError> {
    let Some(path) = path else {
        info!("Using built-in portfolio content");
        return Ok(Portfolio::default());
    };

    if !path.exists() {
        return Err(ContentError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let portfolio = parse_portfolio(&text, path)?;
    info!(
        path = %path.display(),
        jobs = portfolio.experience.len(),
        projects = portfolio.projects.len(),
        "Loaded portfolio content"
    );
    Ok(portfolio)
}

/// Parse a TOML portfolio document. `origin` is only used in errors.
///
/// # Errors
///
/// Returns `ContentError::Parse` on invalid TOML, unknown keys or missing
/// required fields.
pub fn parse_portfolio(text: &str, origin: &Path) -> Result<Portfolio, ContentError> {
    toml::from_str(text).map_err(|e| ContentError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}
