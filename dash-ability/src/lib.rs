/// 吸血鬼衝刺技能邏輯
///
/// 純邏輯，不依賴 ECS；由宿主每個 tick 呼叫 `AbilityTickController::on_tick`

pub mod config;
pub mod controller;
pub mod error;
pub mod preview;
pub mod shader;
pub mod sink;
pub mod types;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use sink::*;
pub use types::*;
