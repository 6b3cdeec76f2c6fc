use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::geometry::{Pose, TimingLine};
use crate::LayoutError;

/// Track layout as stored on disk
///
/// Cones are three parallel arrays, `x[i]`, `y[i]` and `color[i]` describe
/// cone `i`. Orientations are in degrees. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackLayout {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// palette index, see `ConeColor`
    pub color: Vec<i64>,
    #[serde(default)]
    pub start_position: Option<[f64; 2]>,
    #[serde(default)]
    pub start_orientation: Option<f64>,
    pub timing_line_position: [f64; 2],
    pub timing_line_orientation: f64,
    pub timing_line_width: f64,
}

impl TrackLayout {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", content.len(), path.display());
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LayoutError> {
        let layout: TrackLayout = serde_json::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.x.len() != self.y.len() || self.x.len() != self.color.len() {
            return Err(LayoutError::LengthMismatch {
                x: self.x.len(),
                y: self.y.len(),
                color: self.color.len(),
            });
        }
        Ok(())
    }

    pub fn cone_count(&self) -> usize {
        self.x.len()
    }

    /// The start pose exists only if `start_orientation` is set, a position
    /// without an orientation gets no default heading.
    pub fn start_pose(&self) -> Result<Option<Pose>, LayoutError> {
        let Some(heading_deg) = self.start_orientation else {
            return Ok(None);
        };
        let position = self
            .start_position
            .ok_or(LayoutError::MissingStartPosition)?;
        Ok(Some(Pose::from_degrees(position, heading_deg)))
    }

    pub fn timing_line(&self) -> TimingLine {
        TimingLine::new(
            self.timing_line_position,
            self.timing_line_orientation,
            self.timing_line_width,
        )
    }
}
