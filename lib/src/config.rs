use crate::models::Folder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder set the catalog is initialized with (fixed for the session)
    #[serde(default = "default_folders")]
    pub folders: Vec<Folder>,

    /// Folder new bookmarks are filed under when none is given
    #[serde(default = "default_folder_id")]
    pub default_folder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folders: default_folders(),
            default_folder: default_folder_id(),
        }
    }
}

fn default_folders() -> Vec<Folder> {
    vec![
        Folder::new("dev", "Development", "blue"),
        Folder::new("design", "Design", "purple"),
        Folder::new("personal", "Personal", "green"),
    ]
}

fn default_folder_id() -> String {
    "dev".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> crate::error::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default location
    /// (~/.config/linkstash/config.yml). Falls back to the default config
    /// if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load config from {:?}: {}",
                        config_path, e
                    );
                    eprintln!("Using default configuration");
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_folder, "dev");
        assert!(config.folders.iter().any(|f| f.id == "design"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        let original = Config {
            folders: vec![Folder::new("work", "Work", "red")],
            default_folder: "work".to_string(),
        };

        original.save_to_path(config_path).unwrap();
        let loaded = Config::load_from_path(config_path).unwrap();

        assert_eq!(loaded.default_folder, "work");
        assert_eq!(loaded.folders, original.folders);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "folders: [not a folder").unwrap();

        let result = Config::load_from_path(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        // Only default_folder present; folders should fall back to defaults
        fs::write(temp_file.path(), "default_folder: personal\n").unwrap();

        let config = Config::load_from_path(temp_file.path()).unwrap();
        assert_eq!(config.default_folder, "personal");
        assert_eq!(config.folders, default_folders());
    }
}
