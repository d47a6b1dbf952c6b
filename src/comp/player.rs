use serde::{Deserialize, Serialize};
use specs::storage::{NullStorage, VecStorage};
use specs::Component;

use dash_ability::{PlayerAbilityState, ResourceSnapshot, Ticks};

pub const DEFAULT_EYE_HEIGHT: f64 = 1.62;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Player {
    pub name: String,
    /// 創造模式不消耗血量
    pub creative: bool,
    pub eye_height: f64,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creative: false,
            eye_height: DEFAULT_EYE_HEIGHT,
        }
    }
}

impl Component for Player {
    type Storage = VecStorage<Self>;
}

/// 本客戶端操控的玩家
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPlayer;

impl Component for LocalPlayer {
    type Storage = NullStorage<Self>;
}

/// 吸血鬼狀態標記
#[derive(Clone, Copy, Debug, Default)]
pub struct Vampire;

impl Component for Vampire {
    type Storage = NullStorage<Self>;
}

/// 吸血鬼血量，只有吸血鬼玩家才會掛上
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct VampireResource {
    /// 0..=20
    pub blood_level: f64,
    pub last_fed: Ticks,
}

impl VampireResource {
    pub fn snapshot(&self, feed_cooldown: Ticks) -> ResourceSnapshot {
        ResourceSnapshot {
            level: self.blood_level,
            last_replenished_time: self.last_fed,
            cooldown_duration: feed_cooldown,
        }
    }
}

impl Component for VampireResource {
    type Storage = VecStorage<Self>;
}

/// 衝刺暫態，隨玩家實體存在
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashState(pub PlayerAbilityState);

impl Component for DashState {
    type Storage = VecStorage<Self>;
}
