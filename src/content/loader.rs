//! Content pack loading.
//!
//! A pack is a root screen id plus a list of screens, written as TOML or JSON:
//!
//! ```toml
//! root = "home"
//!
//! [[screens]]
//! type = "menu"
//! id = "home"
//! title = "GuideMate"
//! children = ["ee"]
//!
//! [[screens]]
//! type = "content"
//! id = "ee"
//! title = "Extended Essay"
//!
//! [[screens.sections]]
//! key = "purpose"
//! title = "Purpose"
//! body = { kind = "prose", content = "An independent piece of research." }
//! ```

use super::Catalog;
use crate::model::{ContentError, Screen, ScreenId};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialization format of a content pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl PackFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// On-disk shape of a pack, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackFile {
    root: ScreenId,
    #[serde(default)]
    screens: Vec<Screen>,
}

/// Parse and validate a pack from a string.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] for malformed documents and the
/// validation errors of [`Catalog::new`] otherwise.
pub fn parse_catalog(
    source: &str,
    format: PackFormat,
    origin: impl AsRef<Path>,
) -> Result<Catalog, ContentError> {
    let origin = origin.as_ref();
    let parse_error = |reason: String| ContentError::Parse {
        path: origin.to_path_buf(),
        reason,
    };

    let pack: PackFile = match format {
        PackFormat::Toml => toml::from_str(source).map_err(|e| parse_error(e.to_string()))?,
        PackFormat::Json => {
            serde_json::from_str(source).map_err(|e| parse_error(e.to_string()))?
        }
    };

    Catalog::new(pack.root, pack.screens)
}

/// Read, parse and validate a pack from disk. The format follows the
/// extension: `.toml` or `.json`.
///
/// # Errors
///
/// [`ContentError::UnsupportedFormat`] for other extensions,
/// [`ContentError::Read`] if the file cannot be read, and anything
/// [`parse_catalog`] returns.
pub fn load_catalog(path: impl Into<PathBuf>) -> Result<Catalog, ContentError> {
    let path = path.into();
    let format =
        PackFormat::from_path(&path).ok_or_else(|| ContentError::UnsupportedFormat(path.clone()))?;

    let source = std::fs::read_to_string(&path).map_err(|e| ContentError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let catalog = parse_catalog(&source, format, &path)?;
    info!(path = %path.display(), screens = catalog.len(), "Loaded content pack");
    Ok(catalog)
}
