// src/config.rs
//
// Runtime knobs for the element-wise kernels.
//
// Defaults can be overridden through the environment so callers can experiment
// without plumbing a config value through every call:
//
//   WIL_PAR_THRESHOLD   element count at or above which loops use rayon (0 = always parallel)
//   WIL_FORCE_SERIAL    "1"/"true"/"yes"/"on" disables the parallel path entirely

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::sync::OnceLock;

/// Below this many elements the rayon split/join overhead dominates a per-element complex op.
pub const DEFAULT_PAR_THRESHOLD: usize = 32_768;

static GLOBAL: OnceLock<NumericsConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericsConfig {
    pub par_threshold: usize,
    pub force_serial: bool,
    /// "f64" or "f32". Always the compiled `Real`: written for provenance, never read back.
    #[serde(skip_deserializing, default = "default_precision")]
    pub precision: String,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            par_threshold: DEFAULT_PAR_THRESHOLD,
            force_serial: false,
            precision: default_precision(),
        }
    }
}

impl NumericsConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(v) = std::env::var("WIL_PAR_THRESHOLD")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
        {
            cfg.par_threshold = v;
        }
        if let Ok(v) = std::env::var("WIL_FORCE_SERIAL") {
            cfg.force_serial = matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        cfg
    }

    /// Process-wide config, read from the environment once on first use.
    pub fn global() -> &'static NumericsConfig {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Whether a loop over `len` elements should take the rayon path.
    #[inline]
    pub fn use_parallel(&self, len: usize) -> bool {
        !self.force_serial && len >= self.par_threshold
    }

    /// Write `numerics_config.json` into `out_dir` (for run provenance).
    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("numerics_config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

fn default_precision() -> String {
    precision_name().to_string()
}

#[cfg(not(feature = "single-precision"))]
fn precision_name() -> &'static str {
    "f64"
}

#[cfg(feature = "single-precision")]
fn precision_name() -> &'static str {
    "f32"
}
