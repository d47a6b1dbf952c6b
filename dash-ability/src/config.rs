use serde::{Deserialize, Serialize};
use std::path::Path;
use vek::Vec3;

use crate::error::ConfigError;
use crate::types::*;

/// 衝刺預覽粒子設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// 每個 tick 的粒子數
    pub particle_count: u32,
    /// x/z 方向的抖動寬度（以目標為中心）
    pub horizontal_jitter: f64,
    /// y 方向往上的抖動高度
    pub vertical_jitter: f64,
    pub velocity: Vec3<f64>,
    pub kind: ParticleKind,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            particle_count: 10,
            horizontal_jitter: 1.0,
            vertical_jitter: 2.0,
            velocity: Vec3::new(0.0, 0.5, 0.0),
            kind: ParticleKind::default(),
        }
    }
}

/// 衝刺技能設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// 衝刺冷卻（tick）
    pub dash_cooldown: Ticks,
    /// 血量必須嚴格大於此值才能衝刺
    pub resource_threshold: f64,
    /// 射線最大距離（方塊）
    pub max_range: f64,
    /// 送往伺服器的頻道識別字
    pub channel: String,
    /// 粒子亂數種子，未設定時使用系統亂數
    pub seed: Option<u64>,
    pub preview: PreviewConfig,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            dash_cooldown: 10,
            resource_threshold: 18.0,
            max_range: 16.0,
            channel: "haema:dash".to_string(),
            seed: None,
            preview: PreviewConfig::default(),
        }
    }
}

impl DashConfig {
    /// 從文件載入，依副檔名決定格式
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config = match ext.as_str() {
            "toml" => Self::from_toml(&content)?,
            "yaml" | "yml" => Self::from_yaml(&content)?,
            "json" => Self::from_json(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        log::info!("衝刺設定載入完成: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查數值是否合理
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dash_cooldown < 0 {
            return Err(ConfigError::Invalid(format!(
                "dash_cooldown 不可為負數: {}",
                self.dash_cooldown
            )));
        }
        if !(self.max_range.is_finite() && self.max_range > 0.0) {
            return Err(ConfigError::Invalid(format!("max_range 必須為正數: {}", self.max_range)));
        }
        if self.channel.is_empty() {
            return Err(ConfigError::Invalid("channel 不可為空".to_string()));
        }
        if self.preview.particle_count == 0 {
            return Err(ConfigError::Invalid("particle_count 必須大於 0".to_string()));
        }
        if self.preview.horizontal_jitter < 0.0 || self.preview.vertical_jitter < 0.0 {
            return Err(ConfigError::Invalid("抖動範圍不可為負數".to_string()));
        }
        Ok(())
    }
}
