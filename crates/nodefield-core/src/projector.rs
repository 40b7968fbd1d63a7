//! Depth-layered parallax.
//!
//! Stored positions are page-space; what lands on screen is shifted upward
//! by the scroll offset times a per-layer depth factor. Nothing here is
//! cached on the node.

use crate::config::FieldConfig;
use crate::node::Node;
use glam::Vec2;

/// Layer position in `[0, 1]`, 0 farthest and 1 nearest. A single layer
/// counts as nearest.
#[inline]
pub fn layer_fraction(layer: u32, layer_count: u32) -> f32 {
    if layer_count <= 1 {
        return 1.0;
    }
    (layer.min(layer_count - 1)) as f32 / (layer_count - 1) as f32
}

/// Scroll multiplier for a layer; increases with layer index.
#[inline]
pub fn depth_factor(layer: u32, config: &FieldConfig) -> f32 {
    let t = layer_fraction(layer, config.layer_count);
    t.powf(config.parallax_exponent) * config.parallax_scale + config.parallax_floor
}

/// Baseline brightness for a layer before twinkle.
#[inline]
pub fn base_alpha(layer: u32, config: &FieldConfig) -> f32 {
    let t = layer_fraction(layer, config.layer_count);
    config.base_alpha_far + (config.base_alpha_near - config.base_alpha_far) * t
}

#[inline]
pub fn projected_y(y: f32, layer: u32, scroll_offset: f32, config: &FieldConfig) -> f32 {
    y - scroll_offset * depth_factor(layer, config)
}

/// Screen-space draw position. No horizontal parallax.
#[inline]
pub fn project(node: &Node, scroll_offset: f32, config: &FieldConfig) -> Vec2 {
    Vec2::new(
        node.position.x,
        projected_y(node.position.y, node.layer(), scroll_offset, config),
    )
}
