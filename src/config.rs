use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// UI 配置（节拍间隔与模拟计算延迟）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_compute_delay_ms")]
    pub compute_delay_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_compute_delay_ms() -> u64 {
    800
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            compute_delay_ms: default_compute_delay_ms(),
        }
    }
}

/// 从 TOML 文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<UiConfig> {
    if !path.exists() {
        return Ok(UiConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: UiConfig =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(config)
}
