use serde::{Deserialize, Serialize};
use specs::storage::VecStorage;
use specs::Component;
use vek::*;

/// Position（腳底）
#[derive(Copy, Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pos(pub Vec3<f64>);

impl Component for Pos {
    type Storage = VecStorage<Self>;
}

/// 視線方向
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Look(pub Vec3<f64>);

impl Default for Look {
    fn default() -> Self {
        Look(Vec3::unit_z())
    }
}

impl Look {
    /// 由 yaw/pitch（角度）求單位向量，yaw 0 朝 +z
    pub fn from_angles(yaw_deg: f64, pitch_deg: f64) -> Self {
        let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
        Look(Vec3::new(
            -yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        ))
    }
}

impl Component for Look {
    type Storage = VecStorage<Self>;
}
