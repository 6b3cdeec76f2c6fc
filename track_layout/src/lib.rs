/*!
Load Formula Student Driverless track layouts from json and turn them into
a list of plot primitives: colored cones, the start arrow and the timing line.

The plotting itself lives in track_layout_gui, this crate has no gui dependencies.
*/

use std::path::PathBuf;

use thiserror::Error;

pub mod geometry;
pub mod layout;
pub mod palette;
pub mod scene;

pub use geometry::{heading_vector, Pose, Position, StartArrow, TimingLine};
pub use layout::TrackLayout;
pub use palette::{ConeColor, PALETTE};
pub use scene::{load_scene, Cone, TrackScene};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid track layout json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cone arrays differ in length: x={x}, y={y}, color={color}")]
    LengthMismatch { x: usize, y: usize, color: usize },
    #[error("unknown color index {0}, expected 0..={}", PALETTE.len() - 1)]
    UnknownColorIndex(i64),
    #[error("start_orientation is set but start_position is missing")]
    MissingStartPosition,
}
