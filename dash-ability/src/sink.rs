/// 外部協作者介面
///
/// 控制器只透過這些 trait 與著色器、網路、粒子和碰撞查詢溝通，
/// 全部都是送出即忘，沒有回傳值。

use vek::Vec3;

use crate::types::*;

/// 著色器 uniform 接收端
pub trait RenderSink: Send + Sync {
    fn set_uniform(&mut self, name: &str, value: UniformValue);
}

/// 送往伺服器的單向訊息
pub trait NetworkSink: Send + Sync {
    fn send_to_server(&mut self, channel: &str, payload: &[u8]);

    /// 衝刺請求沒有內容
    fn send_dash_request(&mut self, channel: &str) {
        self.send_to_server(channel, &[]);
    }
}

/// 只在客戶端顯示的粒子
pub trait ParticleSink: Send + Sync {
    fn spawn_particle(&mut self, kind: ParticleKind, position: Vec3<f64>, velocity: Vec3<f64>);
}

/// 衝刺目標的射線查詢
pub trait DashRaycast {
    /// 從眼睛位置沿視線方向查詢，遇到第一個實心障礙物即停止；
    /// 超過 `max_range` 仍未碰撞時回傳 `None`
    fn raytrace_for_dash(
        &self,
        eye: Vec3<f64>,
        look: Vec3<f64>,
        max_range: f64,
    ) -> Option<Vec3<f64>>;
}

/// 注入控制器的輸出端集合
pub struct EffectSinks {
    pub render: Box<dyn RenderSink>,
    pub network: Box<dyn NetworkSink>,
    pub particles: Box<dyn ParticleSink>,
}

impl std::fmt::Debug for EffectSinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectSinks").finish_non_exhaustive()
    }
}
