//! 세션 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 입력 세션 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// 새 세션을 한글 모드로 시작할지
    #[serde(default = "default_korean_mode_on_start")]
    pub korean_mode_on_start: bool,
    /// 조합 실패 시 조합 중인 글자를 확정하고 영문 모드로 전환해 다시 입력할지
    #[serde(default = "default_recover_on_error")]
    pub recover_on_error: bool,
}

fn default_korean_mode_on_start() -> bool {
    true
}

fn default_recover_on_error() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            korean_mode_on_start: default_korean_mode_on_start(),
            recover_on_error: default_recover_on_error(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패 ({}): {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("직렬화 실패: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/hangul-ime/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("hangul-ime").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> SessionConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            SessionConfig::default()
        }),
        Err(_) => SessionConfig::default(),
    }
}

pub fn load_config() -> SessionConfig {
    load_config_from(&config_path())
}

/// 설정 파일 저장
pub fn save_config_to(path: &Path, config: &SessionConfig) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(io_err)?;
    Ok(())
}

pub fn save_config(config: &SessionConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}
