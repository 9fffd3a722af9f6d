use crate::error::{Result, SpotterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 保存先ディレクトリを上書きする環境変数
pub const STORE_DIR_ENV: &str = "MICROSPOTTER_STORE_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 画像ストアの保存先（未設定ならデータディレクトリ）
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SpotterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("microspotter").join("config.json"))
    }

    /// 保存先の決定: 引数 > 環境変数 > 設定ファイル > データディレクトリ
    pub fn resolve_store_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }

        if let Ok(dir) = std::env::var(STORE_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .map(|d| d.join("microspotter"))
            .ok_or_else(|| SpotterError::Config("データディレクトリが見つかりません".into()))
    }

    pub fn set_store_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.store_dir = Some(dir);
        self.save()
    }
}

/// `config` サブコマンドで設定を表示するか。フラグ無しなら表示
pub fn show_requested(set_store_dir: Option<&Path>, show: bool) -> bool {
    show || set_store_dir.is_none()
}
