use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use dash_ability::{DashConfig, Ticks};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ClientSetting {
    /// 每秒 tick 數
    pub tps: u64,
    /// log4rs 設定檔
    pub log_config: String,
    /// 進食冷卻（tick），決定紅色淡出速度
    pub feed_cooldown: Ticks,
}

impl Default for ClientSetting {
    fn default() -> Self {
        Self {
            tps: 20,
            log_config: "log4rs.yml".to_string(),
            feed_cooldown: 200,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Setting {
    pub client: ClientSetting,
    pub dash: DashConfig,
}

impl Setting {
    /// 讀取 game.toml，缺少的欄位使用預設值
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("no such file {}", path.display()))?;
        let setting = Self::from_toml(&content)
            .with_context(|| format!("設定檔格式錯誤 {}", path.display()))?;
        log::info!("設定檔載入完成: {}", path.display());
        Ok(setting)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let setting: Setting = toml::from_str(content)?;
        setting.validate()?;
        Ok(setting)
    }

    pub fn validate(&self) -> Result<()> {
        if self.client.tps == 0 {
            anyhow::bail!("tps 必須大於 0");
        }
        if self.client.feed_cooldown < 0 {
            anyhow::bail!("feed_cooldown 不可為負數: {}", self.client.feed_cooldown);
        }
        self.dash.validate()?;
        Ok(())
    }
}
