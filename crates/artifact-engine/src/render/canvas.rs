// render/canvas.rs
//
// Generative canvas: turns a VisualConfig into the decorative blobs the page
// lays over the artifact backdrop. Pure index arithmetic, no randomness, so
// the same config always draws the same picture.

use glam::Vec2;
use serde::Serialize;

use crate::api::types::{AnimationSpeed, Complexity, ShapeStyle, VisualConfig};

/// Shapes drawn for a minimal config.
pub const MINIMAL_SHAPES: usize = 3;
/// Shapes drawn for a complex config.
pub const COMPLEX_SHAPES: usize = 6;

/// Blur radius applied to every shape, in px.
pub const SHAPE_BLUR_PX: f32 = 40.0;
/// Opacity applied to every shape.
pub const SHAPE_OPACITY: f32 = 0.6;

/// One blurred shape on the canvas. Lengths are percentages of the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    pub id: u32,
    /// Width and height (shapes are square before rounding).
    pub size: f32,
    /// Left (x) and top (y) offsets.
    pub origin: Vec2,
    pub color: String,
    /// CSS `border-radius` value.
    pub border_radius: String,
    /// CSS animation class name.
    pub animation: &'static str,
    /// Animation delay in seconds.
    pub delay: f32,
    pub rotation_deg: f32,
}

/// Number of shapes a config asks for.
pub fn shape_count(complexity: Complexity) -> usize {
    match complexity {
        Complexity::Minimal => MINIMAL_SHAPES,
        Complexity::Complex => COMPLEX_SHAPES,
    }
}

/// Animation class for a speed tier.
pub fn animation_class(speed: AnimationSpeed) -> &'static str {
    match speed {
        AnimationSpeed::Slow => "animate-pulse-slow",
        AnimationSpeed::Normal => "animate-float",
        AnimationSpeed::Fast => "animate-bounce",
        AnimationSpeed::Chaos => "animate-ping",
    }
}

/// Corner rounding for the shape at `index`.
pub fn border_radius(style: ShapeStyle, index: u32) -> String {
    match style {
        ShapeStyle::Rounded => "50%".to_string(),
        ShapeStyle::Sharp => "0%".to_string(),
        ShapeStyle::Liquid => {
            let i = index as i32;
            format!(
                "{}% {}% {}% {}% / {}%",
                30 + i * 10,
                70 - i * 10,
                50 + i * 5,
                50 - i * 5,
                30 + i * 5
            )
        }
    }
}

/// Tint painted under the shapes. Falls back to black for an invalid
/// (empty) palette.
pub fn backdrop_color(config: &VisualConfig) -> &str {
    config.colors.first().map(String::as_str).unwrap_or("#000000")
}

/// Lay out the shapes for `config`.
pub fn render_shapes(config: &VisualConfig) -> Vec<ShapeDescriptor> {
    let animation = animation_class(config.animation_speed);
    (0..shape_count(config.complexity) as u32)
        .map(|i| {
            let fi = i as f32;
            let color = if config.colors.is_empty() {
                "#000000".to_string()
            } else {
                config.colors[i as usize % config.colors.len()].clone()
            };
            ShapeDescriptor {
                id: i,
                size: 30.0 + fi * 15.0,
                origin: Vec2::new(10.0 + fi * 15.0, 20.0 + fi * 10.0),
                color,
                border_radius: border_radius(config.shape_style, i),
                animation,
                delay: fi * 0.5,
                rotation_deg: fi * 45.0,
            }
        })
        .collect()
}
