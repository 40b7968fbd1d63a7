//! Per-frame node physics.
//!
//! One call to [`step_node`] runs, in order: edge handling, cursor force,
//! damping, integration and the occasional drift nudge. The timestep is one
//! display frame; there is no delta-time scaling.

use crate::config::{EdgeMode, FieldConfig};
use crate::node::{Node, NodePool, Viewport};
use crate::projector::projected_y;
use glam::Vec2;
use rand::Rng;

/// Per-frame inputs shared by every node.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepContext {
    pub viewport: Viewport,
    pub pointer: Option<Vec2>,
    pub scroll_offset: f32,
}

/// Velocity change caused by a pointer at `pointer` on a node drawn at `at`.
///
/// Inside the personal space the node is pushed away; further out, up to the
/// interaction radius, it is pulled in with a pull that falls linearly to zero
/// at the radius. The pull fades in across `attraction_ramp` pixels outside
/// the personal space so the two regimes meet at zero.
pub fn cursor_impulse(at: Vec2, pointer: Vec2, config: &FieldConfig) -> Vec2 {
    let delta = pointer - at;
    let d = delta.length();
    // d == 0 has no direction; NaN would poison the node for good
    if !d.is_finite() || d <= 0.0 {
        return Vec2::ZERO;
    }
    if d < config.personal_space_radius {
        let repel = (config.personal_space_radius - d) * config.repulsion_strength;
        -delta / d * repel
    } else if d < config.interaction_radius {
        let force = config.gravity_strength * (1.0 - d / config.interaction_radius) / d;
        delta * force * attraction_ramp(d, config)
    } else {
        Vec2::ZERO
    }
}

#[inline]
fn attraction_ramp(d: f32, config: &FieldConfig) -> f32 {
    if config.attraction_ramp <= 0.0 {
        return 1.0;
    }
    ((d - config.personal_space_radius) / config.attraction_ramp).clamp(0.0, 1.0)
}

/// Move a node that left the padded viewport back in from the opposite side.
/// Only `position` changes.
pub fn wrap_edges(node: &mut Node, ctx: &StepContext, config: &FieldConfig) {
    let margin = config.edge_margin;
    let Viewport { width, height } = ctx.viewport;

    if node.position.x < -margin {
        node.position.x = width + margin;
    } else if node.position.x > width + margin {
        node.position.x = -margin;
    }

    let span = height + 2.0 * margin;
    let py = projected_y(node.position.y, node.layer(), ctx.scroll_offset, config);
    if py < -margin {
        node.position.y += span;
    } else if py > height + margin {
        node.position.y -= span;
    }
}

/// Clamp a node to the viewport and reflect its motion off the wall it hit.
pub fn bounce_edges(node: &mut Node, ctx: &StepContext, config: &FieldConfig) {
    let Viewport { width, height } = ctx.viewport;

    if node.position.x < 0.0 {
        node.position.x = 0.0;
        node.velocity.x = node.velocity.x.abs();
        node.drift.x = node.drift.x.abs();
    } else if node.position.x > width {
        node.position.x = width;
        node.velocity.x = -node.velocity.x.abs();
        node.drift.x = -node.drift.x.abs();
    }

    let py = projected_y(node.position.y, node.layer(), ctx.scroll_offset, config);
    if py < 0.0 {
        node.position.y -= py;
        node.velocity.y = node.velocity.y.abs();
        node.drift.y = node.drift.y.abs();
    } else if py > height {
        node.position.y -= py - height;
        node.velocity.y = -node.velocity.y.abs();
        node.drift.y = -node.drift.y.abs();
    }
}

/// Random walk on the drift vector, bounded by `max_drift`.
pub fn perturb_drift(node: &mut Node, config: &FieldConfig, rng: &mut impl Rng) {
    if config.drift_nudge_probability <= 0.0 || !rng.gen_bool(config.drift_nudge_probability) {
        return;
    }
    let nudge = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * config.drift_nudge;
    node.drift = (node.drift + nudge).clamp_length_max(config.max_drift);
}

pub fn step_node(node: &mut Node, ctx: &StepContext, config: &FieldConfig, rng: &mut impl Rng) {
    match config.edge_mode {
        EdgeMode::Wrap => wrap_edges(node, ctx, config),
        EdgeMode::Bounce => bounce_edges(node, ctx, config),
    }

    if let Some(pointer) = ctx.pointer {
        let at = Vec2::new(
            node.position.x,
            projected_y(node.position.y, node.layer(), ctx.scroll_offset, config),
        );
        node.velocity += cursor_impulse(at, pointer, config);
    }

    node.velocity *= config.damping;
    node.position += node.velocity + node.drift;

    perturb_drift(node, config, rng);
}

pub fn step_pool(pool: &mut NodePool, ctx: &StepContext, config: &FieldConfig, rng: &mut impl Rng) {
    for node in pool.iter_mut() {
        step_node(node, ctx, config, rng);
    }
}
