use crate::error::{AlbumError, Result};
use catalog_album_common::layout::FONT_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// フォントパスを指定する環境変数
pub const FONT_ENV_VAR: &str = "CATALOG_ALBUM_FONT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub save_main_image: bool,
    pub pause_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: FONT_SIZE,
            save_main_image: false,
            pause_on_exit: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AlbumError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("catalog-album").join("config.json"))
    }

    pub fn get_font_path(&self) -> Option<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var(FONT_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.font_path.clone()
    }

    pub fn set_font_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(AlbumError::Config(format!(
                "字体文件不存在: {}",
                path.display()
            )));
        }
        self.font_path = Some(path);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.font_path.is_none());
        assert_eq!(config.font_size, 20.0);
        assert!(!config.save_main_image);
        assert!(config.pause_on_exit);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.font_size, 20.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            font_path: Some(PathBuf::from("/fonts/msyh.ttc")),
            save_main_image: true,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.font_path, Some(PathBuf::from("/fonts/msyh.ttc")));
        assert!(loaded.save_main_image);
        assert!(loaded.pause_on_exit);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "pause_on_exit": false }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.pause_on_exit);
        assert_eq!(loaded.font_size, 20.0);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid }").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(AlbumError::JsonParse(_))));
    }
}
