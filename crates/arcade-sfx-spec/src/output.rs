//! Output level policies.

use serde::{Deserialize, Serialize};

/// Output policy tags accepted in descriptor JSON.
pub const OUTPUT_MODES: &[&str] = &["clip", "normalize"];

/// Safety bound used by the clip-based effects.
pub const DEFAULT_CLIP_LIMIT: f64 = 0.9;

fn default_peak() -> f64 {
    1.0
}

/// How the mixed signal is brought into full-scale range before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum OutputPolicy {
    /// Hard clip to `±limit`.
    Clip {
        /// Clip bound, in `(0, 1]`.
        limit: f64,
    },
    /// Scale the whole buffer so its peak absolute value equals `peak`.
    Normalize {
        /// Target peak, in `(0, 1]`.
        #[serde(default = "default_peak")]
        peak: f64,
    },
}

impl Default for OutputPolicy {
    fn default() -> Self {
        OutputPolicy::Clip {
            limit: DEFAULT_CLIP_LIMIT,
        }
    }
}

impl OutputPolicy {
    /// Returns the `mode` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            OutputPolicy::Clip { .. } => "clip",
            OutputPolicy::Normalize { .. } => "normalize",
        }
    }
}
