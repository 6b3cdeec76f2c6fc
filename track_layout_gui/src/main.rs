//! Show a track layout json file as a 2D plot: cones, start arrow and timing line
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui::{self, Color32, Stroke};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points, Polygon};
use log::{debug, info};
use track_layout::{load_scene, ConeColor, TrackScene};

/// marker radius in screen points
const CONE_RADIUS: f32 = 3.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Visualize a Formula Student Driverless track layout", long_about = None)]
struct Args {
    /// Path to the json file containing the track layout
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args = Args::parse();

    let scene = load_scene(&args.path)
        .with_context(|| format!("failed to load track layout {}", args.path.display()))?;
    // a missing file has already been reported
    let Some(scene) = scene else {
        return Ok(());
    };
    show(scene)
}

/// blocks until the window is closed
fn show(scene: TrackScene) -> anyhow::Result<()> {
    let title = scene.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_title(title.clone()),
        ..Default::default()
    };
    info!("opening plot window for {title}");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotTrack::create(scene)))),
    )
    .map_err(|e| anyhow::anyhow!("plot window error: {e}"))
}

struct PlotTrack {
    scene: TrackScene,
    cone_groups: Vec<(ConeColor, Vec<[f64; 2]>)>,
    mouse_point: Option<[f64; 2]>,
}

impl PlotTrack {
    fn create(scene: TrackScene) -> Self {
        let cone_groups = scene.cones_by_color();
        for (color, points) in &cone_groups {
            debug!("{} {} cones", points.len(), color.category());
        }
        Self {
            scene,
            cone_groups,
            mouse_point: None,
        }
    }
}

fn color32(color: ConeColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

impl eframe::App for PlotTrack {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.scene.title.as_str());

            let cursor_text = match self.mouse_point {
                Some([x, y]) => format!("Cursor position: x={x:.2}, y={y:.2}"),
                None => String::new(),
            };
            ui.label(cursor_text);

            // equal aspect so distances aren't distorted
            let _plot = Plot::new("track")
                .legend(Legend::default())
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    let timing_line: Vec<[f64; 2]> = self
                        .scene
                        .timing_line
                        .endpoints()
                        .iter()
                        .map(|p| p.as_array_meter())
                        .collect();
                    plot_ui.line(
                        Line::new(PlotPoints::new(timing_line))
                            .color(Color32::BLACK)
                            .name("timing line"),
                    );

                    if let Some(arrow) = &self.scene.start_arrow {
                        let shaft = vec![
                            arrow.tail.as_array_meter(),
                            arrow.shaft_end().as_array_meter(),
                        ];
                        plot_ui.line(
                            Line::new(PlotPoints::new(shaft))
                                .color(Color32::BLACK)
                                .name("start"),
                        );
                        let head: Vec<[f64; 2]> =
                            arrow.head().iter().map(|p| p.as_array_meter()).collect();
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::new(head))
                                .fill_color(Color32::BLACK)
                                .stroke(Stroke::new(1.0, Color32::BLACK))
                                .name("start"),
                        );
                    }

                    for (color, points) in &self.cone_groups {
                        plot_ui.points(
                            Points::new(PlotPoints::new(points.clone()))
                                .shape(MarkerShape::Circle)
                                .filled(true)
                                .radius(CONE_RADIUS)
                                .color(color32(*color))
                                .name(color.category()),
                        );
                    }

                    self.mouse_point = plot_ui.pointer_coordinate().map(|pos| [pos.x, pos.y]);
                });
        });
    }
}
