use vek::Vec3;

use crate::types::*;

pub const SATURATION_UNIFORM: &str = "Saturation";
pub const RED_MATRIX_UNIFORM: &str = "RedMatrix";

const MAX_SATURATION: f32 = 0.8;
const MAX_RESOURCE: f32 = 20.0;
const RED_PEAK: f32 = 2.3;
const RED_FLOOR: f32 = 1.3;

impl VampireShaderParams {
    /// 由血量與距上次進食的時間計算
    pub fn compute(resource: &ResourceSnapshot, now: Ticks) -> Self {
        Self {
            saturation: saturation(resource.level),
            red_matrix: Vec3::new(
                red_intensity(
                    now.saturating_sub(resource.last_replenished_time),
                    resource.cooldown_duration,
                ),
                0.0,
                0.0,
            ),
        }
    }
}

/// 血量越低畫面越灰
pub fn saturation(level: f64) -> f32 {
    MAX_SATURATION * level as f32 / MAX_RESOURCE
}

/// 剛進食時最紅，隨冷卻時間淡出到下限
pub fn red_intensity(elapsed: Ticks, cooldown_duration: Ticks) -> f32 {
    if cooldown_duration <= 0 {
        return RED_FLOOR;
    }
    RED_FLOOR.max(RED_PEAK - elapsed as f32 / cooldown_duration as f32)
}
