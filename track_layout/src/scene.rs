use std::path::Path;

use log::{info, warn};

use crate::geometry::{Position, StartArrow, TimingLine};
use crate::layout::TrackLayout;
use crate::palette::{ConeColor, PALETTE};
use crate::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub position: Position,
    pub color: ConeColor,
}

/// Everything that goes into the track plot, independent of the plotting backend
#[derive(Debug, Clone, PartialEq)]
pub struct TrackScene {
    pub title: String,
    /// in file order
    pub cones: Vec<Cone>,
    pub start_arrow: Option<StartArrow>,
    pub timing_line: TimingLine,
}

impl TrackScene {
    /// `name` is used for the title, normally the file stem
    pub fn from_layout(name: &str, layout: &TrackLayout) -> Result<Self, LayoutError> {
        let start_arrow = layout
            .start_pose()?
            .map(|pose| StartArrow::from_pose(&pose));
        let timing_line = layout.timing_line();

        let cones = layout
            .x
            .iter()
            .zip(&layout.y)
            .zip(&layout.color)
            .map(|((&x, &y), &color)| {
                Ok(Cone {
                    position: Position::from_array_meter([x, y]),
                    color: ConeColor::from_index(color)?,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        Ok(Self {
            title: format!("{name}: {} cones", cones.len()),
            cones,
            start_arrow,
            timing_line,
        })
    }

    pub fn cone_count(&self) -> usize {
        self.cones.len()
    }

    /// Cone coordinates grouped per palette entry, in palette order. Colors
    /// without cones are left out.
    pub fn cones_by_color(&self) -> Vec<(ConeColor, Vec<[f64; 2]>)> {
        PALETTE
            .iter()
            .filter_map(|&color| {
                let points: Vec<_> = self
                    .cones
                    .iter()
                    .filter(|cone| cone.color == color)
                    .map(|cone| cone.position.as_array_meter())
                    .collect();
                (!points.is_empty()).then_some((color, points))
            })
            .collect()
    }
}

/// Load a layout file and build its scene
///
/// A path that doesn't exist is reported and gives `Ok(None)`, anything
/// wrong with an existing file is an error.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Option<TrackScene>, LayoutError> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("track layout {} not found", path.display());
        println!("Path {} does not exist.", path.display());
        return Ok(None);
    }

    let layout = TrackLayout::load(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let scene = TrackScene::from_layout(&name, &layout)?;
    info!(
        "{}, start arrow: {}",
        scene.title,
        scene.start_arrow.is_some()
    );
    Ok(Some(scene))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(color: Vec<i64>) -> TrackLayout {
        let n = color.len();
        TrackLayout {
            x: (0..n).map(|i| i as f64).collect(),
            y: (0..n).map(|i| -(i as f64)).collect(),
            color,
            start_position: None,
            start_orientation: None,
            timing_line_position: [0.0, 0.0],
            timing_line_orientation: 0.0,
            timing_line_width: 3.0,
        }
    }

    #[test]
    fn title_and_count() {
        let scene = TrackScene::from_layout("skidpad", &layout(vec![0, 1, 2, 3, 4, 1])).unwrap();
        assert_eq!(scene.cone_count(), 6);
        assert_eq!(scene.title, "skidpad: 6 cones");
        assert!(scene.start_arrow.is_none());
    }

    #[test]
    fn cones_keep_file_order() {
        let scene = TrackScene::from_layout("t", &layout(vec![2, 1, 4])).unwrap();
        let colors: Vec<_> = scene.cones.iter().map(|c| c.color.display_name()).collect();
        assert_eq!(colors, ["blue", "gold", "red"]);
        assert_eq!(scene.cones[2].position.as_array_meter(), [2.0, -2.0]);
    }

    #[test]
    fn grouped_by_color() {
        let scene = TrackScene::from_layout("t", &layout(vec![2, 1, 2, 1, 3])).unwrap();
        let groups = scene.cones_by_color();
        let summary: Vec<_> = groups.iter().map(|(c, pts)| (*c, pts.len())).collect();
        assert_eq!(
            summary,
            [
                (ConeColor::Yellow, 2),
                (ConeColor::Blue, 2),
                (ConeColor::OrangeSmall, 1)
            ]
        );
        let total: usize = groups.iter().map(|(_, pts)| pts.len()).sum();
        assert_eq!(total, scene.cone_count());
    }

    #[test]
    fn bad_color_aborts() {
        let result = TrackScene::from_layout("t", &layout(vec![0, 1, 5]));
        assert!(matches!(result, Err(LayoutError::UnknownColorIndex(5))));
    }

    #[test]
    fn start_arrow_present() {
        let mut track = layout(vec![1]);
        track.start_position = Some([2.0, 3.0]);
        track.start_orientation = Some(90.0);
        let scene = TrackScene::from_layout("t", &track).unwrap();
        let arrow = scene.start_arrow.unwrap();
        let [dx, dy] = arrow.delta();
        assert!(dx.abs() < 1e-9);
        assert!((dy - 3.0).abs() < 1e-9);
        assert_eq!(arrow.tail.as_array_meter(), [2.0, 3.0]);
    }

    #[test]
    fn empty_layout() {
        let scene = TrackScene::from_layout("empty", &layout(vec![])).unwrap();
        assert_eq!(scene.title, "empty: 0 cones");
        assert!(scene.cones_by_color().is_empty());
    }
}
