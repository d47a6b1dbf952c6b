/// 時間管理器 - 每個 tick 推進世界時間

use specs::{World, WorldExt};

use dash_ability::Ticks;
use crate::comp::WorldTime;

pub struct TimeManager {
    /// 每個 tick 推進的世界時間
    ticks_per_step: Ticks,
}

impl TimeManager {
    pub fn new() -> Self {
        Self { ticks_per_step: 1 }
    }

    pub fn update(&self, world: &mut World) {
        world.write_resource::<WorldTime>().0 += self.ticks_per_step;
    }

    /// 直接設定世界時間（例如伺服器同步）
    pub fn set_time(&self, world: &mut World, time: Ticks) {
        world.write_resource::<WorldTime>().0 = time;
    }

    pub fn get_time(&self, world: &World) -> Ticks {
        world.read_resource::<WorldTime>().0
    }
}

impl Default for TimeManager {
    fn default() -> Self {
        Self::new()
    }
}
