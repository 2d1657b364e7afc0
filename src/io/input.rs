//! Point set loading.
//!
//! Accepted documents:
//! - JSON: `[[x, y], ...]` or `{"points": [[x, y], ...]}`
//! - TOML: `points = [[x, y], ...]`
//!
//! The format follows the file extension; stdin and unknown extensions are
//! read as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::{points_from_pairs, Point};

/// Demo data set: three loose groups in a 100x100 area.
pub const DEMO_POINTS: [(f64, f64); 9] = [
    (30.0, 20.0),
    (40.0, 25.0),
    (45.0, 30.0),
    (90.0, 85.0),
    (85.0, 80.0),
    (88.0, 78.0),
    (50.0, 80.0),
    (55.0, 75.0),
    (53.0, 78.0),
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read points from {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON point data in {source_name}: {source}")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML point data in {source_name}: {source}")]
    Toml {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("No input given: pass a point file, '-' for stdin, or --demo")]
    MissingInput,
}

/// Where points come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Demo,
}

impl InputSource {
    /// Build a source from the CLI arguments. `-` means stdin.
    pub fn from_args(path: Option<PathBuf>, demo: bool) -> Result<Self, InputError> {
        match (path, demo) {
            (_, true) => Ok(Self::Demo),
            (Some(path), false) if path.as_os_str() == "-" => Ok(Self::Stdin),
            (Some(path), false) => Ok(Self::File(path)),
            (None, false) => Err(InputError::MissingInput),
        }
    }

    /// Human-readable name used in reports and error messages.
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Demo => "<demo>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoints {
    Bare(Vec<Point>),
    Wrapped { points: Vec<Point> },
}

#[derive(Deserialize)]
struct TomlPoints {
    #[serde(default)]
    points: Vec<Point>,
}

/// Parse a point document. `source_name` is only used for error messages.
pub fn parse_points(
    contents: &str,
    format: InputFormat,
    source_name: &str,
) -> Result<Vec<Point>, InputError> {
    match format {
        InputFormat::Json => serde_json::from_str::<JsonPoints>(contents)
            .map(|doc| match doc {
                JsonPoints::Bare(points) | JsonPoints::Wrapped { points } => points,
            })
            .map_err(|source| InputError::Json {
                source_name: source_name.to_string(),
                source,
            }),
        InputFormat::Toml => toml::from_str::<TomlPoints>(contents)
            .map(|doc| doc.points)
            .map_err(|source| InputError::Toml {
                source_name: source_name.to_string(),
                source,
            }),
    }
}

/// Load points from the given source.
pub fn load_points(source: &InputSource) -> Result<Vec<Point>, InputError> {
    let points = match source {
        InputSource::Demo => points_from_pairs(&DEMO_POINTS),
        InputSource::File(path) => {
            let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
                source_name: path.display().to_string(),
                source,
            })?;
            parse_points(&contents, InputFormat::from_path(path), &source.display_name())?
        }
        InputSource::Stdin => {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .map_err(|source| InputError::Io {
                    source_name: "<stdin>".to_string(),
                    source,
                })?;
            parse_points(&contents, InputFormat::Json, "<stdin>")?
        }
    };

    debug!(points = points.len(), source = %source.display_name(), "Loaded points");
    Ok(points)
}
