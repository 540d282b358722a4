//! A renderer that summarizes the scene as text instead of drawing it.

use colored::Colorize;
use mobius::{MobiusError, RenderScene, Renderer, COLOR_LABEL};
use serde::Serialize;

/// Color the boundary outline is drawn in.
const BOUNDARY_COLOR: &str = "red";

/// What a drawn frame would contain.
#[derive(Debug, Serialize)]
pub struct SceneSummary {
    pub grid_shape: (usize, usize),
    pub points: usize,
    pub triangles: usize,
    pub boundary_points: usize,
    pub boundary_color: &'static str,
    pub bounds_min: [f64; 3],
    pub bounds_max: [f64; 3],
    pub color_label: &'static str,
    pub color_range: (f64, f64),
}

impl SceneSummary {
    /// Print a human-readable block.
    pub fn print(&self) {
        println!();
        println!("{}", "Mobius Strip".bold().underline());
        println!(
            "  {}: {} x {} ({} points, {} triangles)",
            "Surface".cyan(),
            self.grid_shape.0,
            self.grid_shape.1,
            self.points,
            self.triangles
        );
        println!(
            "  {}: {} points in {}",
            "Edge".cyan(),
            self.boundary_points,
            self.boundary_color.red()
        );
        println!(
            "  {}: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
            "Bounds".cyan(),
            self.bounds_min[0],
            self.bounds_min[1],
            self.bounds_min[2],
            self.bounds_max[0],
            self.bounds_max[1],
            self.bounds_max[2]
        );
        println!(
            "  {}: plasma, {} from {:.4} to {:.4}",
            "Colors".cyan(),
            self.color_label,
            self.color_range.0,
            self.color_range.1
        );
    }
}

/// Summarizes each scene it is given.
#[derive(Debug, Default)]
pub struct SummaryRenderer;

impl Renderer for SummaryRenderer {
    type Output = SceneSummary;

    fn render(&mut self, scene: &RenderScene) -> Result<SceneSummary, MobiusError> {
        let (lo, hi) = scene
            .bounds()
            .ok_or_else(|| MobiusError::Render("scene has no points".into()))?;

        Ok(SceneSummary {
            grid_shape: scene.grid_shape,
            points: scene.points.len(),
            triangles: scene.mesh.num_triangles(),
            boundary_points: scene.boundary.len(),
            boundary_color: BOUNDARY_COLOR,
            bounds_min: [lo.x, lo.y, lo.z],
            bounds_max: [hi.x, hi.y, hi.z],
            color_label: COLOR_LABEL,
            color_range: scene.color_range,
        })
    }
}
