//! Colour parsing for the node and connector styles.
//!
//! Configuration strings come straight from the page, so every entry point has
//! a resolving variant that falls back to the default orange instead of
//! failing: a bad colour must never blank the animation.

use crate::constants::{FALLBACK_CONNECTOR_ALPHA, FALLBACK_RGB};
use crate::error::ColorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Rgb {
    fn default() -> Self {
        let [r, g, b] = FALLBACK_RGB;
        Self { r, g, b }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgb::default().with_alpha(FALLBACK_CONNECTOR_ALPHA)
    }
}

impl Rgb {
    /// Parse `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadHex(input.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError::BadHex(input.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Channels scaled to `[0, 1]`.
    #[inline]
    pub fn normalized(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: clamp_alpha(a),
        }
    }
}

impl Rgba {
    /// Parse `rgba(r,g,b,a)`, `rgb(r,g,b)` or a hex colour (alpha 1).
    pub fn parse_css(input: &str) -> Result<Self, ColorError> {
        let s = input.trim().to_ascii_lowercase();
        let (inner, arity) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return Rgb::from_hex(&s).map(|rgb| rgb.with_alpha(1.0));
        };
        let bad = || ColorError::BadFunction(input.to_string());
        let inner = inner.strip_suffix(')').ok_or_else(bad)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != arity {
            return Err(bad());
        }
        let channel = |p: &str| -> Result<u8, ColorError> {
            let v: f32 = p.parse().map_err(|_| bad())?;
            if !v.is_finite() {
                return Err(bad());
            }
            Ok(v.round().clamp(0.0, 255.0) as u8)
        };
        let a = match parts.get(3) {
            Some(p) => {
                let a: f32 = p.parse().map_err(|_| bad())?;
                if !a.is_finite() {
                    return Err(bad());
                }
                a
            }
            None => 1.0,
        };
        Ok(Rgba {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
            a: clamp_alpha(a),
        })
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Same colour with its alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Rgba {
        self.rgb().with_alpha(a)
    }

    /// Canvas style string, e.g. `rgba(255,111,0,0.500)`.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

#[inline]
fn clamp_alpha(a: f32) -> f32 {
    if a.is_finite() {
        a.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Node colour from config; malformed input falls back to the default orange.
pub fn resolve_node_color(input: &str) -> Rgb {
    Rgb::from_hex(input).unwrap_or_else(|e| {
        log::warn!("[color] {e}; using fallback node color");
        Rgb::default()
    })
}

/// Connector colour from config; malformed input falls back to translucent orange.
pub fn resolve_connector_color(input: &str) -> Rgba {
    Rgba::parse_css(input).unwrap_or_else(|e| {
        log::warn!("[color] {e}; using fallback connector color");
        Rgba::default()
    })
}
