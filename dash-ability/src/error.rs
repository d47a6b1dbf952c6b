use thiserror::Error;

/// 設定載入錯誤
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("無法讀取設定檔 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML 解析失敗: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("YAML 解析失敗: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON 解析失敗: {0}")]
    Json(#[from] serde_json::Error),
    #[error("不支援的檔案格式: {0}")]
    UnsupportedFormat(String),
    #[error("設定值無效: {0}")]
    Invalid(String),
}
