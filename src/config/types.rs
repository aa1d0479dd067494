//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Stroke-related settings.
///
/// Controls the appearance of strokes when a board is first created. Hosts
/// can change these values at runtime through the board's setters.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke style - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_style")]
    pub default_style: ColorSpec,

    /// Default line width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Default compositing mode ("normal" or "eraser")
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Minimum summed coordinate delta a pointer move must exceed before a
    /// new segment is accepted (valid range: 0.0 - 64.0)
    #[serde(default = "default_jitter_threshold")]
    pub jitter_threshold: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_style: default_style(),
            default_width: default_width(),
            default_mode: default_mode(),
            jitter_threshold: default_jitter_threshold(),
        }
    }
}

/// Input binding preferences.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Force the touch (`true`) or mouse (`false`) event family instead of
    /// probing platform touch capability at board creation
    #[serde(default)]
    pub touch: Option<bool>,
}

/// Startup background image settings.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct BackgroundConfig {
    /// Image to load as the board background when the board is created.
    /// Loading is asynchronous; the board comes up without a background and
    /// picks it up once decoding completes.
    #[serde(default)]
    pub image: Option<String>,
}

fn default_style() -> ColorSpec {
    ColorSpec::Name("yellow".to_string())
}

fn default_width() -> f64 {
    10.0
}

fn default_mode() -> String {
    "normal".to_string()
}

fn default_jitter_threshold() -> f64 {
    3.0
}
