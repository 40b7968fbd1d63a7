use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// One simulated particle.
///
/// `layer` and the twinkle parameters are fixed at creation; only motion
/// state changes from frame to frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Vec2,
    /// Interactive velocity from pointer forces; damped every frame.
    pub velocity: Vec2,
    /// Persistent bias that keeps nodes moving when left alone.
    pub drift: Vec2,
    layer: u32,
    twinkle_phase: f32,
    twinkle_speed: f32,
}

impl Node {
    pub fn new(position: Vec2, drift: Vec2, layer: u32, twinkle_phase: f32, twinkle_speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            drift,
            layer,
            twinkle_phase,
            twinkle_speed,
        }
    }

    /// Random node inside `viewport`.
    pub fn random(viewport: Viewport, config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let half_drift = config.drift_speed * 0.5;
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let drift = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.drift_speed,
            (rng.gen::<f32>() - 0.5) * config.drift_speed,
        )
        .clamp(Vec2::splat(-half_drift), Vec2::splat(half_drift));
        let layer = rng.gen_range(0..config.layer_count.max(1));
        let twinkle_phase = rng.gen::<f32>() * TAU;
        let span = config.twinkle_speed_max - config.twinkle_speed_min;
        let twinkle_speed = config.twinkle_speed_min + rng.gen::<f32>() * span;
        Self::new(position, drift, layer, twinkle_phase % TAU, twinkle_speed)
    }

    #[inline]
    pub fn layer(&self) -> u32 {
        self.layer
    }

    #[inline]
    pub fn twinkle_phase(&self) -> f32 {
        self.twinkle_phase
    }

    #[inline]
    pub fn twinkle_speed(&self) -> f32 {
        self.twinkle_speed
    }
}

/// Owned arena of nodes, indexed by position.
///
/// The pool is only ever replaced as a whole; there is no API for adding or
/// removing single nodes.
#[derive(Clone, Debug, Default)]
pub struct NodePool {
    nodes: Vec<Node>,
}

impl NodePool {
    pub fn populate(viewport: Viewport, config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let count = config.node_count_for(viewport.width, viewport.height);
        let nodes = (0..count)
            .map(|_| Node::random(viewport, config, rng))
            .collect();
        Self { nodes }
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn populate_respects_ranges() {
        let config = FieldConfig::default();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(7);
        let pool = NodePool::populate(viewport, &config, &mut rng);
        assert_eq!(pool.len(), 240);
        let half = config.drift_speed * 0.5;
        for n in pool.iter() {
            assert!(n.position.x >= 0.0 && n.position.x <= viewport.width);
            assert!(n.position.y >= 0.0 && n.position.y <= viewport.height);
            assert_eq!(n.velocity, Vec2::ZERO);
            assert!(n.drift.x.abs() <= half && n.drift.y.abs() <= half);
            assert!(n.layer() < config.layer_count);
            assert!(n.twinkle_phase() >= 0.0 && n.twinkle_phase() < TAU);
            assert!(n.twinkle_speed() >= config.twinkle_speed_min);
            assert!(n.twinkle_speed() <= config.twinkle_speed_max);
        }
    }

    #[test]
    fn populate_uses_every_layer_eventually() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = NodePool::populate(Viewport::new(1920.0, 1080.0), &config, &mut rng);
        let mut seen = vec![false; config.layer_count as usize];
        for n in pool.iter() {
            seen[n.layer() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn dense_config_populates_at_most_the_cap() {
        let config = FieldConfig {
            pixels_per_node: 1e-30,
            ..FieldConfig::default()
        };
        config.validate().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let pool = NodePool::populate(Viewport::new(800.0, 600.0), &config, &mut rng);
        assert_eq!(pool.len(), crate::constants::MAX_NODES);
    }

    #[test]
    fn empty_viewport_gives_empty_pool() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let pool = NodePool::populate(Viewport::new(0.0, 0.0), &config, &mut rng);
        assert!(pool.is_empty());
    }
}
