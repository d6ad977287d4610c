//! Test fixtures and constants.

use std::path::PathBuf;
use tempfile::TempDir;

/// Palettes with a known classification
pub mod palettes {
    /// Three near-identical reds plus orange: 1 monochromatic subset, 3 analogous
    pub const ANALOGOUS_MAJORITY: [&str; 4] = ["#ff0000", "#ff0400", "#ff0800", "#ff5500"];

    /// Primaries plus a second red: every subset is a triad
    pub const TRIAD: [&str; 4] = ["#ff0000", "#00ff00", "#0000ff", "#ff0001"];

    /// Two tetrad and two complementary subsets; tetrad is seen first
    pub const TETRAD_TIE: [&str; 4] = ["#ff0000", "#ffaa00", "#7fff00", "#00feff"];

    /// Red, cyan and grey
    pub const COMPLEMENTARY: [&str; 3] = ["#ff0000", "#00ffff", "#808080"];

    /// Not enough colors to score
    pub const TOO_SHORT: [&str; 2] = ["#ff0000", "#00ffff"];

    /// Contains a 5-digit hex string
    pub const MALFORMED: [&str; 4] = ["#ff0000", "#12345", "#0000ff", "#ffffff"];
}

/// A temporary workspace holding an input palette file
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `value` as JSON to `name` and return its path
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    /// Read `name` back as JSON
    pub fn read_json(&self, name: &str) -> serde_json::Value {
        let content = std::fs::read_to_string(self.path(name)).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}
