use crate::activity::{Activity, Directory, SignupPolicy};
use crate::error::{ActivitiesError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub policy: SignupPolicy,
    /// Startup catalog. `None` means the built-in seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<BTreeMap<String, Activity>>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            policy: SignupPolicy::default(),
            activities: None,
        }
    }
}

impl Config {
    /// Default config with the seed catalog written out explicitly, so the
    /// file produced by `init` is editable.
    pub fn with_seed_catalog() -> Self {
        Self {
            activities: Some(crate::seed::default_activities()),
            ..Self::default()
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(ActivitiesError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(ActivitiesError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = self.to_yaml()?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn catalog(&self) -> BTreeMap<String, Activity> {
        self.activities
            .clone()
            .unwrap_or_else(crate::seed::default_activities)
    }

    /// Build the startup directory. Refuses a catalog with error-level
    /// warnings, since those would break the enrollment invariants.
    pub fn directory(&self) -> Result<Directory> {
        if let Some(w) = self
            .validate()
            .into_iter()
            .find(|w| w.level == WarnLevel::Error)
        {
            return Err(ActivitiesError::InvalidConfig(w.message));
        }
        Ok(Directory::new(self.catalog(), self.policy))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let catalog = self.catalog();

        if self.server.port == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "server.port is 0: the OS will pick a port".to_string(),
            });
        }

        let mut enrolled: HashMap<&str, &str> = HashMap::new();
        for (name, activity) in &catalog {
            if name.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: "activity with an empty name".to_string(),
                });
            }
            if activity.description.trim().is_empty() || activity.schedule.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("activity '{name}' is missing a description or schedule"),
                });
            }
            if activity.participants.len() > activity.max_participants as usize {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "activity '{name}' starts with {} participants but max_participants is {}",
                        activity.participants.len(),
                        activity.max_participants
                    ),
                });
            }

            for (i, email) in activity.participants.iter().enumerate() {
                if activity.participants[..i].contains(email) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!("'{email}' is listed twice in '{name}'"),
                    });
                    continue;
                }
                if let Some(other) = enrolled.insert(email, name) {
                    if self.policy == SignupPolicy::OneActivityPerStudent {
                        warnings.push(ConfigWarning {
                            level: WarnLevel::Error,
                            message: format!(
                                "'{email}' is enrolled in both '{other}' and '{name}'"
                            ),
                        });
                    }
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn errors(cfg: &Config) -> Vec<ConfigWarning> {
        cfg.validate()
            .into_iter()
            .filter(|w| w.level == WarnLevel::Error)
            .collect()
    }

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.port, 8000);
        assert_eq!(parsed.policy, SignupPolicy::OneActivityPerStudent);
        assert!(parsed.activities.is_none());
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.catalog().len(), 9);
    }

    #[test]
    fn policy_parses_snake_case() {
        let cfg: Config = serde_yaml::from_str("policy: one_per_activity\n").unwrap();
        assert_eq!(cfg.policy, SignupPolicy::OnePerActivity);
    }

    #[test]
    fn custom_catalog_parses() {
        let yaml = r#"
activities:
  Robotics:
    description: Build robots
    schedule: Mondays
    max_participants: 8
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        let dir = cfg.directory().unwrap();
        assert_eq!(dir.list_activities().len(), 1);
        assert!(dir.get("Robotics").unwrap().participants.is_empty());
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(ActivitiesError::NotInitialized)
        ));
        let cfg = Config::load_or_default(dir.path()).unwrap();
        assert!(cfg.activities.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::with_seed_catalog();
        cfg.server.port = 9090;
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.server.port, 9090);
        assert_eq!(loaded.catalog(), crate::seed::default_activities());
    }

    #[test]
    fn seed_catalog_is_clean() {
        assert!(Config::with_seed_catalog().validate().is_empty());
    }

    #[test]
    fn cross_activity_enrollment_is_error_under_default_policy() {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "A".to_string(),
            Activity::new("a", "s", 5).with_participants(["x@x.edu"]),
        );
        catalog.insert(
            "B".to_string(),
            Activity::new("b", "s", 5).with_participants(["x@x.edu"]),
        );
        let mut cfg = Config {
            activities: Some(catalog),
            ..Config::default()
        };
        assert_eq!(errors(&cfg).len(), 1);
        assert!(matches!(
            cfg.directory(),
            Err(ActivitiesError::InvalidConfig(_))
        ));

        cfg.policy = SignupPolicy::OnePerActivity;
        assert!(errors(&cfg).is_empty());
        assert!(cfg.directory().is_ok());
    }

    #[test]
    fn duplicate_within_activity_is_error() {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "A".to_string(),
            Activity::new("a", "s", 5).with_participants(["x@x.edu", "x@x.edu"]),
        );
        let cfg = Config {
            activities: Some(catalog),
            policy: SignupPolicy::OnePerActivity,
            ..Config::default()
        };
        let errs = errors(&cfg);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("listed twice"));
    }

    #[test]
    fn over_capacity_is_only_a_warning() {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "A".to_string(),
            Activity::new("a", "s", 1).with_participants(["x@x.edu", "y@x.edu"]),
        );
        let cfg = Config {
            activities: Some(catalog),
            ..Config::default()
        };
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
        assert!(cfg.directory().is_ok());
    }
}
