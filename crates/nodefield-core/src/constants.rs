/// Default tuning for the node field.
///
/// These constants seed `FieldConfig::default()` and keep magic numbers out of
/// the physics and render code.
// Population
pub const PIXELS_PER_NODE: f32 = 2000.0; // density: one node per this many px²
pub const MAX_NODES: usize = 20_000; // hard cap on pool size, explicit or derived

// Cursor interaction
pub const INTERACTION_RADIUS: f32 = 190.0; // px, attraction + connector reach
pub const GRAVITY_STRENGTH: f32 = 0.24;
pub const PERSONAL_SPACE_RADIUS: f32 = 66.0; // px, repulsion inside this
pub const REPULSION_STRENGTH: f32 = 0.008;
pub const ATTRACTION_RAMP: f32 = 24.0; // px band where attraction fades in

// Motion
pub const DAMPING: f32 = 0.94; // per-frame multiplier on interactive velocity
pub const DRIFT_SPEED: f32 = 0.2; // initial drift spans [-d/2, d/2]
pub const DRIFT_NUDGE_PROBABILITY: f64 = 0.01;
pub const DRIFT_NUDGE: f32 = 0.05; // nudge spans [-n/2, n/2]
pub const MAX_DRIFT: f32 = 0.3;

// Depth layers
pub const LAYER_COUNT: u32 = 7;
pub const PARALLAX_EXPONENT: f32 = 1.9; // >1 keeps most layers shallow
pub const PARALLAX_SCALE: f32 = 0.2;
pub const PARALLAX_FLOOR: f32 = 0.01;

// Twinkle
pub const TWINKLE_SPEED_MIN: f32 = 0.02; // radians per frame
pub const TWINKLE_SPEED_MAX: f32 = 0.06;
pub const TWINKLE_AMPLITUDE: f32 = 0.15;

// Brightness
pub const BASE_ALPHA_NEAR: f32 = 0.8;
pub const BASE_ALPHA_FAR: f32 = 0.2;
pub const MIN_ALPHA: f32 = 0.1;

// Drawing
pub const NODE_RADIUS: f32 = 0.9;
pub const CONNECTOR_WIDTH: f32 = 1.2;
pub const CONNECTOR_ALPHA_SCALE: f32 = 0.4; // lines stay fainter than dots
pub const EDGE_MARGIN: f32 = 50.0; // px beyond the viewport before recycling/culling

// Colors
pub const DEFAULT_NODE_COLOR: &str = "#FF6F00";
pub const DEFAULT_CONNECTOR_COLOR: &str = "rgba(255,111,0,0.5)";
pub const FALLBACK_RGB: [u8; 3] = [255, 111, 0];
pub const FALLBACK_CONNECTOR_ALPHA: f32 = 0.5;
