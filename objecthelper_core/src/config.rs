use crate::error::{ObjectHelperError, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use strum::{Display, EnumString};
use tracing::{debug, error, info, trace};

pub const CONFIG_FILE_NAME: &str = "objecthelper.toml";
pub const CONFIG_ENV_VAR: &str = "OBJECTHELPER_CONFIG";

/// On/off switch for a single generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FunctionSwitch {
    #[default]
    Open,
    Close,
}

impl FunctionSwitch {
    pub fn is_open(self) -> bool {
        self == FunctionSwitch::Open
    }
}

/// Which generators are available to callers.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct FeatureConfig {
    #[serde(default)]
    pub object_copy: FunctionSwitch,
    #[serde(default)]
    pub class_to_json: FunctionSwitch,
    #[serde(default)]
    pub class_to_xml: FunctionSwitch,
}

/// How nested custom types are kept from expanding forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CycleGuard {
    /// Only a direct reference back to the class generation started from is
    /// rendered opaque. Indirect cycles (A -> B -> A) keep expanding until
    /// the depth ceiling is hit.
    #[default]
    RootOnly,
    /// Any class already on the current expansion chain is rendered opaque.
    AncestorChain,
}

fn default_core_namespaces() -> Vec<String> {
    vec!["java.".to_string(), "javax.".to_string(), "kotlin.".to_string()]
}

fn default_string_placeholder() -> String {
    "value".to_string()
}

fn default_max_depth() -> usize {
    32
}

fn default_true() -> bool {
    true
}

/// Settings shared by the JSON and XML stub generators.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StubConfig {
    /// Qualified-name prefixes of platform types rendered as opaque
    /// containers instead of being expanded.
    #[serde(default = "default_core_namespaces")]
    pub core_namespaces: Vec<String>,
    /// Text used for string and char leaves.
    #[serde(default = "default_string_placeholder")]
    pub string_placeholder: String,
    #[serde(default)]
    pub cycle_guard: CycleGuard,
    /// Nesting ceiling for custom objects.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            core_namespaces: default_core_namespaces(),
            string_placeholder: default_string_placeholder(),
            cycle_guard: CycleGuard::default(),
            max_depth: default_max_depth(),
        }
    }
}

/// Settings for the copy-method generator.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CopyConfig {
    /// Emit a comment for target fields that have no counterpart on the
    /// source class.
    #[serde(default = "default_true")]
    pub non_existent_field_generate_annotation: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            non_existent_field_generate_annotation: true,
        }
    }
}

/// Root configuration, usually read from `objecthelper.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ObjectHelperConfig {
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub stub: StubConfig,
    #[serde(default)]
    pub copy: CopyConfig,
}

impl ObjectHelperConfig {
    /// Loads configuration from `explicit`, then `$OBJECTHELPER_CONFIG`, then
    /// the nearest `objecthelper.toml` above the current directory. Falls
    /// back to defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<ObjectHelperConfig> {
        info!("Loading objecthelper configuration");

        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => match env::var(CONFIG_ENV_VAR) {
                Ok(value) if !value.trim().is_empty() => {
                    debug!("Using {} = {}", CONFIG_ENV_VAR, value);
                    Some(PathBuf::from(value))
                }
                _ => Self::find_config_file_from(&env::current_dir()?),
            },
        };

        match path {
            Some(path) => Self::from_path(&path),
            None => {
                info!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(ObjectHelperConfig::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<ObjectHelperConfig> {
        info!("Found configuration file at: {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            ObjectHelperError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<ObjectHelperConfig> {
        let config: ObjectHelperConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            ObjectHelperError::config(e.to_string())
        })?;
        config.validate()?;
        debug!(
            "Features - object_copy: {}, class_to_json: {}, class_to_xml: {}",
            config.features.object_copy,
            config.features.class_to_json,
            config.features.class_to_xml
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.stub.max_depth == 0 {
            return Err(ObjectHelperError::config("stub.max_depth must be at least 1"));
        }
        if self.stub.core_namespaces.iter().any(|ns| ns.trim().is_empty()) {
            return Err(ObjectHelperError::config(
                "stub.core_namespaces must not contain empty prefixes",
            ));
        }
        Ok(())
    }

    /// Searches for `objecthelper.toml` in `start` and its ancestors.
    pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start);
        for path in start.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ObjectHelperConfig::default();
        assert!(config.features.object_copy.is_open());
        assert_eq!(config.stub.core_namespaces, vec!["java.", "javax.", "kotlin."]);
        assert_eq!(config.stub.string_placeholder, "value");
        assert_eq!(config.stub.cycle_guard, CycleGuard::RootOnly);
        assert_eq!(config.stub.max_depth, 32);
        assert!(config.copy.non_existent_field_generate_annotation);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config = ObjectHelperConfig::from_toml_str("").unwrap();
        assert_eq!(config, ObjectHelperConfig::default());
    }

    #[test]
    fn test_deserialize_sections() {
        let toml_str = r#"
            [features]
            class_to_xml = "close"

            [stub]
            core_namespaces = ["java."]
            cycle_guard = "ancestor_chain"
            max_depth = 4

            [copy]
            non_existent_field_generate_annotation = false
        "#;
        let config = ObjectHelperConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.features.class_to_xml, FunctionSwitch::Close);
        assert!(config.features.class_to_json.is_open());
        assert_eq!(config.stub.core_namespaces, vec!["java."]);
        assert_eq!(config.stub.cycle_guard, CycleGuard::AncestorChain);
        assert_eq!(config.stub.max_depth, 4);
        assert_eq!(config.stub.string_placeholder, "value");
        assert!(!config.copy.non_existent_field_generate_annotation);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ObjectHelperConfig::from_toml_str("[stub]\nmax_depth = 0").is_err());
        assert!(ObjectHelperConfig::from_toml_str("[stub]\ncore_namespaces = [\"\"]").is_err());
        assert!(ObjectHelperConfig::from_toml_str("[features]\nobject_copy = \"maybe\"").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut config = ObjectHelperConfig::default();
        config.stub.cycle_guard = CycleGuard::AncestorChain;
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("ancestor_chain"));
        assert_eq!(ObjectHelperConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_switch_string_conversions() {
        assert_eq!(FunctionSwitch::Close.to_string(), "close");
        assert_eq!("open".parse::<FunctionSwitch>().unwrap(), FunctionSwitch::Open);
        assert_eq!(
            "ancestor_chain".parse::<CycleGuard>().unwrap(),
            CycleGuard::AncestorChain
        );
    }

    #[test]
    fn test_find_config_file_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[stub]\nmax_depth = 3\n").unwrap();

        let found = ObjectHelperConfig::find_config_file_from(&nested).unwrap();
        assert_eq!(found, config_path);
        assert_eq!(ObjectHelperConfig::from_path(&found).unwrap().stub.max_depth, 3);
    }

    #[test]
    fn test_load_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        fs::write(&config_path, "[copy]\nnon_existent_field_generate_annotation = false\n").unwrap();

        let config = ObjectHelperConfig::load(Some(&config_path)).unwrap();
        assert!(!config.copy.non_existent_field_generate_annotation);
    }

    #[test]
    fn test_load_from_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("env.toml");
        fs::write(&config_path, "[features]\nobject_copy = \"close\"\n").unwrap();

        temp_env::with_var(CONFIG_ENV_VAR, Some(config_path.as_os_str()), || {
            let config = ObjectHelperConfig::load(None).unwrap();
            assert_eq!(config.features.object_copy, FunctionSwitch::Close);
        });
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = ObjectHelperConfig::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ObjectHelperError::Io(_))));
    }
}
