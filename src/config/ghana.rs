//! Top-level configuration: YAML loading and validation.

use std::path::Path;

use super::{ConfigError, MapSection, PlannerSection};
use serde::{Deserialize, Serialize};

/// Complete configuration for a [`crate::VoxelMap`].
///
/// Both sections default independently, so any subset of fields may be
/// given in the YAML file:
///
/// ```yaml
/// map:
///   cell_size: 0.25
///   noise_level: 5
/// planner:
///   unknown_penalty: 3.0
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GhanaConfig {
    #[serde(default)]
    pub map: MapSection,

    #[serde(default)]
    pub planner: PlannerSection,
}

impl GhanaConfig {
    /// Loads configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Loads from the conventional path (`configs/config.yaml`). A
    /// missing file yields the built-in defaults; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_default(Path::new("configs/config.yaml"))
    }

    fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Checks every field against its contract. Called once when a map
    /// or worker is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.map;
        if !m.cell_size.is_finite() || m.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(m.cell_size));
        }
        if !m.ground_margin.is_finite() || m.ground_margin < 0.0 {
            return Err(ConfigError::InvalidGroundMargin(m.ground_margin));
        }

        let p = &self.planner;
        if !p.unknown_penalty.is_finite() || p.unknown_penalty < 0.0 {
            return Err(ConfigError::InvalidUnknownPenalty(p.unknown_penalty));
        }
        if p.expansion_cap_factor == 0 {
            return Err(ConfigError::InvalidExpansionCap);
        }
        if !p.waypoint_clearance.is_finite() || p.waypoint_clearance < 0.0 {
            return Err(ConfigError::InvalidWaypointClearance(p.waypoint_clearance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = GhanaConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.map.cell_size - 0.1).abs() < 1e-6);
        assert_eq!(config.map.noise_level, 10);
        assert_eq!(config.planner.expansion_cap_factor, 2);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
map:
  cell_size: 0.25
"#;
        let config = GhanaConfig::from_yaml(yaml).unwrap();
        assert!((config.map.cell_size - 0.25).abs() < 1e-6);
        // Unlisted fields keep their defaults.
        assert_eq!(config.map.noise_level, 10);
        assert!((config.planner.unknown_penalty - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = GhanaConfig::from_yaml("{}").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.map.noise_level, GhanaConfig::default().map.noise_level);
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let result = GhanaConfig::from_yaml("map: [not, a, mapping]");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = GhanaConfig::load(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_default_missing_file_gives_defaults() {
        let dir = temp_dir().join("ghana_config_missing");
        let _ = fs::remove_dir_all(&dir);

        let config = GhanaConfig::load_or_default(&dir.join("config.yaml")).unwrap();
        assert_eq!(config.map.noise_level, GhanaConfig::default().map.noise_level);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_default_corrupt_file_is_an_error() {
        let dir = temp_dir().join("ghana_config_corrupt");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        fs::write(&path, "map: [not, a, mapping]").unwrap();

        let result = GhanaConfig::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        // Cleanup
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_validation_rejects_bad_cell_size() {
        let mut config = GhanaConfig::default();
        config.map.cell_size = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCellSize(_))
        ));

        config.map.cell_size = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCellSize(_))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_expansion_cap() {
        let mut config = GhanaConfig::default();
        config.planner.expansion_cap_factor = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidExpansionCap));
    }

    #[test]
    fn test_validation_rejects_negative_penalty() {
        let mut config = GhanaConfig::default();
        config.planner.unknown_penalty = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUnknownPenalty(_))
        ));
    }

    #[test]
    fn test_section_builders() {
        let config = GhanaConfig {
            map: MapSection::default().with_cell_size(0.5).with_noise_level(1),
            planner: PlannerSection::default().with_unknown_penalty(0.0),
        };
        assert!(config.validate().is_ok());
        assert!((config.map.cell_size - 0.5).abs() < 1e-6);
        assert_eq!(config.map.noise_level, 1);
        assert_eq!(config.planner.unknown_penalty, 0.0);
    }
}
