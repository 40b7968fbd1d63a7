use thiserror::Error;

/// Reasons a colour string could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected `#RRGGBB`, got `{0}`")]
    BadHex(String),
    #[error("expected `rgb(r,g,b)` or `rgba(r,g,b,a)`, got `{0}`")]
    BadFunction(String),
}

/// Configuration rejected at mount time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("`layer_count` must be at least 1")]
    NoLayers,
    #[error("`twinkle_speed_min` ({min}) exceeds `twinkle_speed_max` ({max})")]
    TwinkleBand { min: f32, max: f32 },
    #[error("`personal_space_radius` ({personal}) must be below `interaction_radius` ({interaction})")]
    PersonalSpace { personal: f32, interaction: f32 },
}
