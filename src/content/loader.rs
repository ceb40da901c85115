//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use super::data::{MOVEMENT_SCHEMA_VERSION, MovementFile};
use crate::movement::{MovementTuning, TuningError};

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },
    #[error("Failed to load {file}: unsupported schema_version {found} (expected {expected})")]
    Schema {
        file: String,
        found: u32,
        expected: u32,
    },
    #[error("Rejected {file}: {source}")]
    Invalid {
        file: String,
        #[source]
        source: TuningError,
    },
}

impl ContentLoadError {
    /// True when the file simply does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement tuning from RON text and validate it.
pub fn parse_movement_tuning(file: &str, contents: &str) -> Result<MovementTuning, ContentLoadError> {
    let data: MovementFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    if data.schema_version != MOVEMENT_SCHEMA_VERSION {
        return Err(ContentLoadError::Schema {
            file: file.to_string(),
            found: data.schema_version,
            expected: MOVEMENT_SCHEMA_VERSION,
        });
    }

    data.tuning
        .validate()
        .map_err(|source| ContentLoadError::Invalid {
            file: file.to_string(),
            source,
        })?;

    Ok(data.tuning)
}

/// Load and validate movement.ron.
pub fn load_movement_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file_name.clone(),
        source,
    })?;

    parse_movement_tuning(&file_name, &contents)
}
