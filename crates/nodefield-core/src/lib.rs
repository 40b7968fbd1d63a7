//! Simulation and drawing logic for the reactive node field.
//!
//! Nothing in this crate touches the DOM; the web front-end feeds pointer,
//! scroll and resize events into an [`InputTracker`] and supplies a
//! [`Surface`] backed by a 2D canvas.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod input;
pub mod lifecycle;
pub mod node;
pub mod physics;
pub mod projector;
pub mod render;

pub use color::{resolve_connector_color, resolve_node_color, Rgb, Rgba};
pub use config::{EdgeMode, FieldConfig};
pub use error::{ColorError, ConfigError};
pub use field::NodeField;
pub use input::{InputSnapshot, InputTracker};
pub use lifecycle::{FrameDriver, Liveness};
pub use node::{Node, NodePool, Viewport};
pub use render::{Palette, Surface};
