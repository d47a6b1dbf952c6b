use serde::{Deserialize, Serialize};
use vek::Vec3;

/// 世界時間（以 tick 為單位）
pub type Ticks = i64;

/// 每位玩家的衝刺暫態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAbilityState {
    /// 上一個 tick 的按鍵狀態
    pub was_input_pressed: bool,
    /// 上次衝刺的世界時間，`None` 表示尚未衝刺過
    pub last_activation_time: Option<Ticks>,
}

impl PlayerAbilityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 冷卻是否已經結束
    pub fn cooldown_elapsed(&self, now: Ticks, dash_cooldown: Ticks) -> bool {
        match self.last_activation_time {
            Some(last) => now > last.saturating_add(dash_cooldown),
            None => true,
        }
    }
}

/// 血量管理器的快照（只讀）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// 血量，慣例範圍 0..=20
    pub level: f64,
    /// 上次進食的世界時間
    pub last_replenished_time: Ticks,
    /// 進食冷卻（用於紅色淡出）
    pub cooldown_duration: Ticks,
}

/// 每個 tick 由外部提供的輸入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInputs {
    pub is_special_state: bool,
    /// 沒有吸血鬼血量能力時為 `None`
    pub resource: Option<ResourceSnapshot>,
    pub current_world_time: Ticks,
    pub is_input_pressed: bool,
    /// 創造模式：略過血量門檻
    pub is_unrestricted_mode: bool,
    pub eye_position: Vec3<f64>,
    pub look_direction: Vec3<f64>,
}

impl Default for TickInputs {
    fn default() -> Self {
        Self {
            is_special_state: false,
            resource: None,
            current_world_time: 0,
            is_input_pressed: false,
            is_unrestricted_mode: false,
            eye_position: Vec3::zero(),
            look_direction: Vec3::unit_z(),
        }
    }
}

/// 著色器 uniform 值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniformValue {
    Float(f32),
    Vec3(Vec3<f32>),
}

/// 粒子種類
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    Dust { r: f32, g: f32, b: f32, scale: f32 },
}

impl Default for ParticleKind {
    fn default() -> Self {
        ParticleKind::Dust { r: 0.0, g: 0.0, b: 0.0, scale: 1.0 }
    }
}

/// 吸血鬼著色器參數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VampireShaderParams {
    pub saturation: f32,
    pub red_matrix: Vec3<f32>,
}

/// 一次 tick 實際送出的效果摘要
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEffects {
    pub shader: Option<VampireShaderParams>,
    pub dash_requested: bool,
    pub preview_target: Option<Vec3<f64>>,
    pub particles_spawned: usize,
}

impl TickEffects {
    /// 是否完全沒有做任何事
    pub fn is_noop(&self) -> bool {
        *self == TickEffects::default()
    }
}
