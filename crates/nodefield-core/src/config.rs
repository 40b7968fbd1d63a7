//! Mount-time configuration.
//!
//! A `FieldConfig` is fixed for the lifetime of a `NodeField`; changing any
//! value means building a new field. Every key is optional in JSON and
//! unknown keys are rejected so typos surface instead of silently using a
//! default.

use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// What happens when a node leaves the visible area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Re-enter from the opposite edge, keeping velocity and drift.
    #[default]
    Wrap,
    /// Clamp at the edge and reflect velocity and drift.
    Bounce,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Explicit node count. When unset the count follows the viewport area.
    pub node_count: Option<usize>,
    pub pixels_per_node: f32,

    pub interaction_radius: f32,
    pub gravity_strength: f32,
    pub personal_space_radius: f32,
    pub repulsion_strength: f32,
    pub attraction_ramp: f32,

    pub damping: f32,
    pub drift_speed: f32,
    pub drift_nudge_probability: f64,
    pub drift_nudge: f32,
    pub max_drift: f32,

    pub layer_count: u32,
    pub parallax_exponent: f32,
    pub parallax_scale: f32,
    pub parallax_floor: f32,

    pub twinkle_speed_min: f32,
    pub twinkle_speed_max: f32,
    pub twinkle_amplitude: f32,

    pub base_alpha_near: f32,
    pub base_alpha_far: f32,
    pub min_alpha: f32,

    pub node_radius: f32,
    pub connector_width: f32,
    pub connector_alpha_scale: f32,
    pub edge_margin: f32,
    pub edge_mode: EdgeMode,

    pub node_color: String,
    pub connector_color: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            node_count: None,
            pixels_per_node: PIXELS_PER_NODE,
            interaction_radius: INTERACTION_RADIUS,
            gravity_strength: GRAVITY_STRENGTH,
            personal_space_radius: PERSONAL_SPACE_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            attraction_ramp: ATTRACTION_RAMP,
            damping: DAMPING,
            drift_speed: DRIFT_SPEED,
            drift_nudge_probability: DRIFT_NUDGE_PROBABILITY,
            drift_nudge: DRIFT_NUDGE,
            max_drift: MAX_DRIFT,
            layer_count: LAYER_COUNT,
            parallax_exponent: PARALLAX_EXPONENT,
            parallax_scale: PARALLAX_SCALE,
            parallax_floor: PARALLAX_FLOOR,
            twinkle_speed_min: TWINKLE_SPEED_MIN,
            twinkle_speed_max: TWINKLE_SPEED_MAX,
            twinkle_amplitude: TWINKLE_AMPLITUDE,
            base_alpha_near: BASE_ALPHA_NEAR,
            base_alpha_far: BASE_ALPHA_FAR,
            min_alpha: MIN_ALPHA,
            node_radius: NODE_RADIUS,
            connector_width: CONNECTOR_WIDTH,
            connector_alpha_scale: CONNECTOR_ALPHA_SCALE,
            edge_margin: EDGE_MARGIN,
            edge_mode: EdgeMode::Wrap,
            node_color: DEFAULT_NODE_COLOR.to_string(),
            connector_color: DEFAULT_CONNECTOR_COLOR.to_string(),
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON object of overrides.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layer_count == 0 {
            return Err(ConfigError::NoLayers);
        }
        positive("pixels_per_node", self.pixels_per_node)?;
        if let Some(n) = self.node_count {
            if n > MAX_NODES {
                return Err(ConfigError::OutOfRange {
                    field: "node_count",
                    expected: "at most 20000",
                    value: n as f64,
                });
            }
        }
        positive("interaction_radius", self.interaction_radius)?;
        non_negative("personal_space_radius", self.personal_space_radius)?;
        if self.personal_space_radius >= self.interaction_radius {
            return Err(ConfigError::PersonalSpace {
                personal: self.personal_space_radius,
                interaction: self.interaction_radius,
            });
        }
        non_negative("gravity_strength", self.gravity_strength)?;
        non_negative("repulsion_strength", self.repulsion_strength)?;
        non_negative("attraction_ramp", self.attraction_ramp)?;
        if !(self.damping >= 0.0 && self.damping < 1.0) {
            return Err(out_of_range("damping", "in [0, 1)", self.damping));
        }
        non_negative("drift_speed", self.drift_speed)?;
        if !(0.0..=1.0).contains(&self.drift_nudge_probability) {
            return Err(ConfigError::OutOfRange {
                field: "drift_nudge_probability",
                expected: "in [0, 1]",
                value: self.drift_nudge_probability,
            });
        }
        non_negative("drift_nudge", self.drift_nudge)?;
        non_negative("max_drift", self.max_drift)?;
        positive("parallax_exponent", self.parallax_exponent)?;
        non_negative("parallax_scale", self.parallax_scale)?;
        non_negative("parallax_floor", self.parallax_floor)?;
        non_negative("twinkle_speed_min", self.twinkle_speed_min)?;
        non_negative("twinkle_speed_max", self.twinkle_speed_max)?;
        if self.twinkle_speed_min > self.twinkle_speed_max {
            return Err(ConfigError::TwinkleBand {
                min: self.twinkle_speed_min,
                max: self.twinkle_speed_max,
            });
        }
        non_negative("twinkle_amplitude", self.twinkle_amplitude)?;
        unit("base_alpha_near", self.base_alpha_near)?;
        unit("base_alpha_far", self.base_alpha_far)?;
        unit("min_alpha", self.min_alpha)?;
        positive("node_radius", self.node_radius)?;
        non_negative("connector_width", self.connector_width)?;
        unit("connector_alpha_scale", self.connector_alpha_scale)?;
        non_negative("edge_margin", self.edge_margin)?;
        Ok(())
    }

    /// Node count for a viewport: the explicit count, or one node per
    /// `pixels_per_node` of area. Never more than [`MAX_NODES`].
    pub fn node_count_for(&self, width: f32, height: f32) -> usize {
        let count = match self.node_count {
            Some(n) => n,
            None => {
                let area = (width.max(0.0) * height.max(0.0)) as f64;
                (area / self.pixels_per_node as f64).floor() as usize
            }
        };
        count.min(MAX_NODES)
    }
}

fn out_of_range(field: &'static str, expected: &'static str, value: f32) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        expected,
        value: value as f64,
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, "finite and > 0", value))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, "finite and >= 0", value))
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, "in [0, 1]", value))
    }
}
