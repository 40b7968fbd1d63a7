use crate::color::{resolve_connector_color, resolve_node_color};
use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::input::InputSnapshot;
use crate::node::{NodePool, Viewport};
use crate::physics::{step_pool, StepContext};
use crate::render::{render_frame, FrameView, Palette, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The simulated node field: configuration, nodes and the frame counter that
/// drives twinkle.
pub struct NodeField {
    pub pool: NodePool,
    config: FieldConfig,
    palette: Palette,
    viewport: Viewport,
    rng: StdRng,
    frame: u64,
}

impl NodeField {
    pub fn new(config: FieldConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    /// Reproducible field, for tests and debugging.
    pub fn with_seed(config: FieldConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, viewport: Viewport, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = Palette {
            node: resolve_node_color(&config.node_color),
            connector: resolve_connector_color(&config.connector_color),
        };
        let pool = NodePool::populate(viewport, &config, &mut rng);
        log::info!(
            "[field] {} nodes for {}x{} ({} layers)",
            pool.len(),
            viewport.width,
            viewport.height,
            config.layer_count
        );
        Ok(Self {
            pool,
            config,
            palette,
            viewport,
            rng,
            frame: 0,
        })
    }

    /// Swap in a freshly populated pool sized for `viewport`.
    pub fn resize(&mut self, viewport: Viewport) {
        let pool = NodePool::populate(viewport, &self.config, &mut self.rng);
        log::debug!(
            "[field] resize {}x{} -> {}x{}, {} -> {} nodes",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height,
            self.pool.len(),
            pool.len()
        );
        self.viewport = viewport;
        self.pool = pool;
    }

    /// Advance every node by one frame.
    pub fn step(&mut self, input: &InputSnapshot) {
        let ctx = StepContext {
            viewport: self.viewport,
            pointer: input.pointer,
            scroll_offset: input.scroll_offset,
        };
        step_pool(&mut self.pool, &ctx, &self.config, &mut self.rng);
    }

    pub fn render<S: Surface + ?Sized>(&self, input: &InputSnapshot, surface: &mut S) {
        let view = FrameView {
            viewport: self.viewport,
            pointer: input.pointer,
            scroll_offset: input.scroll_offset,
            frame: self.frame,
            palette: &self.palette,
        };
        render_frame(&self.pool, &view, &self.config, surface);
    }

    /// One full frame: physics, then paint.
    pub fn advance<S: Surface + ?Sized>(&mut self, input: &InputSnapshot, surface: &mut S) {
        self.step(input);
        self.frame = self.frame.wrapping_add(1);
        self.render(input, surface);
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
