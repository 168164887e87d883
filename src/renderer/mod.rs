//! 2D scene rendering
//!
//! The simulation never talks to the browser directly; it is drawn through
//! the [`DrawSurface`] trait, a minimal immediate-mode capability (filled
//! circles, stroked paths and arcs, two-stop linear gradients, filled
//! polygons). The wasm build implements it on `CanvasRenderingContext2d`;
//! tests implement it with a recording double.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#FF6B6B`
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fill/stroke style: solid or a two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear {
        from: Vec2,
        to: Vec2,
        start: Color,
        end: Color,
    },
}

/// The consumed 2D rasterizer capability
///
/// Rotated shapes are not part of the contract; callers rotate points on the
/// CPU and submit plain paths and polygons.
pub trait DrawSurface {
    /// Fill the whole surface
    fn clear(&mut self, paint: &Paint);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, outline: Option<(Color, f32)>);

    /// Stroke an open polyline through `points`
    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint, width: f32);

    /// Stroke a circular arc from `from_angle` to `to_angle` (radians)
    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        from_angle: f32,
        to_angle: f32,
        paint: &Paint,
        width: f32,
    );

    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);
}
