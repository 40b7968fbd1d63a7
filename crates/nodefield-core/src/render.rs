//! Drawing of one frame onto an abstract [`Surface`].
//!
//! The browser build implements `Surface` over `CanvasRenderingContext2d`;
//! tests implement it with a recorder. Connectors are painted before dots so
//! a line never covers a node.

use crate::color::{Rgb, Rgba};
use crate::config::FieldConfig;
use crate::node::{Node, NodePool, Viewport};
use crate::projector::{base_alpha, project};
use glam::Vec2;

/// Minimal 2D drawing target.
pub trait Surface {
    /// Erase the whole `width × height` area.
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Match the backing store to a new viewport.
    fn resize(&mut self, _viewport: Viewport) {}
}

/// Colours resolved once per field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub node: Rgb,
    pub connector: Rgba,
}

/// Everything the renderer reads for a frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub viewport: Viewport,
    pub pointer: Option<Vec2>,
    pub scroll_offset: f32,
    pub frame: u64,
    pub palette: &'a Palette,
}

/// Dot opacity for `node` at `frame`, always within `[min_alpha, 1]`.
pub fn node_alpha(node: &Node, frame: u64, config: &FieldConfig) -> f32 {
    let angle = frame as f64 * node.twinkle_speed() as f64 + node.twinkle_phase() as f64;
    let twinkle = angle.sin() as f32;
    let alpha = base_alpha(node.layer(), config) + config.twinkle_amplitude * twinkle;
    if alpha.is_finite() {
        alpha.clamp(config.min_alpha, 1.0)
    } else {
        config.min_alpha
    }
}

/// Connector opacity for a node `distance` away from the pointer, or `None`
/// when out of reach.
#[inline]
pub fn connector_alpha(distance: f32, config: &FieldConfig) -> Option<f32> {
    if !distance.is_finite() || distance >= config.interaction_radius {
        return None;
    }
    Some((1.0 - distance / config.interaction_radius) * config.connector_alpha_scale)
}

#[inline]
fn on_screen(draw_y: f32, viewport: Viewport, margin: f32) -> bool {
    draw_y >= -margin && draw_y <= viewport.height + margin
}

/// Paint one frame. Nodes outside the padded viewport are culled.
pub fn render_frame<S: Surface + ?Sized>(
    pool: &NodePool,
    view: &FrameView<'_>,
    config: &FieldConfig,
    surface: &mut S,
) {
    surface.clear(view.viewport.width, view.viewport.height);
    let margin = config.edge_margin;

    if let Some(pointer) = view.pointer {
        for node in pool.iter() {
            let at = project(node, view.scroll_offset, config);
            if !on_screen(at.y, view.viewport, margin) {
                continue;
            }
            if let Some(alpha) = connector_alpha(at.distance(pointer), config) {
                let color = view.palette.connector.with_alpha(alpha);
                surface.stroke_line(pointer, at, config.connector_width, color);
            }
        }
    }

    for node in pool.iter() {
        let at = project(node, view.scroll_offset, config);
        if !on_screen(at.y, view.viewport, margin) {
            continue;
        }
        let color = view.palette.node.with_alpha(node_alpha(node, view.frame, config));
        surface.fill_circle(at, config.node_radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped_for_extreme_twinkle() {
        let config = FieldConfig {
            twinkle_amplitude: 5.0,
            ..FieldConfig::default()
        };
        for layer in 0..config.layer_count {
            let node = Node::new(Vec2::ZERO, Vec2::ZERO, layer, 1.0, 0.37);
            for frame in 0..200 {
                let a = node_alpha(&node, frame, &config);
                assert!(a >= config.min_alpha && a <= 1.0);
            }
        }
    }

    #[test]
    fn zero_amplitude_is_steady() {
        let config = FieldConfig {
            twinkle_amplitude: 0.0,
            ..FieldConfig::default()
        };
        let node = Node::new(Vec2::ZERO, Vec2::ZERO, 0, 0.5, 0.05);
        let a0 = node_alpha(&node, 0, &config);
        assert_eq!(a0, node_alpha(&node, 1234, &config));
        assert!((a0 - config.base_alpha_far).abs() < 1e-6);
    }

    #[test]
    fn connector_fades_to_zero_at_radius() {
        let config = FieldConfig::default();
        let near = connector_alpha(0.0, &config).unwrap();
        assert!((near - config.connector_alpha_scale).abs() < 1e-6);
        assert!(connector_alpha(config.interaction_radius, &config).is_none());
        let a = connector_alpha(95.0, &config).unwrap();
        let b = connector_alpha(150.0, &config).unwrap();
        assert!(a > b);
    }
}
