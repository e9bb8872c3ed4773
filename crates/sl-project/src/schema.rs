//! Batch file schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sl_core::{Family, SlResult, StarParams};

pub const LATEST_VERSION: u32 = 1;

/// A named batch of constructions sharing one output directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub output: OutputDef,
    #[serde(default)]
    pub runs: Vec<RunDef>,
}

/// One construction: a family and its shape parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub id: String,
    pub family: Family,
    pub n: u32,
    /// Fan-out, required for `s_n_m` and ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<u32>,
    /// Label bound override; the family default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
}

impl RunDef {
    pub fn params(&self) -> SlResult<StarParams> {
        StarParams::new(self.family, self.n, self.m, self.k)
    }
}

/// Where reports go and whether to render diagrams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDef {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_visualize")]
    pub visualize: bool,
}

impl Default for OutputDef {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            visualize: default_visualize(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("starlabel-out")
}

fn default_visualize() -> bool {
    true
}
