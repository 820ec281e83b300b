use crate::error::{Result, RouteGenError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Simple names under which the generator recognises its markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerNames {
    pub configuration: Vec<String>,
    pub extra_route: Vec<String>,
    pub ignore: Vec<String>,
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self {
            configuration: vec!["AutoRoutes".to_string(), "AutoRouteGeneration".to_string()],
            extra_route: vec!["ExtraRoute".to_string()],
            ignore: vec!["IgnoreRoute".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteGenConfig {
    pub markers: MarkerNames,
    /// Where the generated file is written, relative to the project root.
    pub output_dir: Option<PathBuf>,
    /// Path prefixes, relative to the project root, left out of the scan.
    pub exclude: Vec<PathBuf>,
}

impl RouteGenConfig {
    pub const FILE_NAME: &'static str = "routegen.json";

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `routegen.json` from the project root, falling back to defaults.
    pub fn load_from_project(root: &Path) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        if path.is_file() {
            tracing::debug!("Loading configuration from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|prefix| relative.starts_with(prefix))
    }

    fn validate(&self) -> Result<()> {
        let groups = [
            ("configuration", &self.markers.configuration),
            ("extra_route", &self.markers.extra_route),
            ("ignore", &self.markers.ignore),
        ];
        for (field, names) in groups {
            if names.is_empty() || names.iter().any(|n| n.trim().is_empty()) {
                return Err(RouteGenError::Config(format!(
                    "markers.{} must list at least one non-blank name",
                    field
                )));
            }
        }
        Ok(())
    }
}
