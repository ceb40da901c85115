//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization only.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Latest understood layout of movement.ron.
pub const MOVEMENT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Movement tuning (movement.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementFile {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: MovementTuning,
}
