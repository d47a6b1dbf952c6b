use serde::{Deserialize, Serialize};

use dash_ability::Ticks;

/// 世界時間（tick）
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldTime(pub Ticks);

/// 進食冷卻，紅色淡出的長度
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedCooldown(pub Ticks);

impl Default for FeedCooldown {
    fn default() -> Self {
        FeedCooldown(200)
    }
}

/// 衝刺鍵狀態，每個 tick 輪詢一次
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DashKey {
    pub pressed: bool,
}
