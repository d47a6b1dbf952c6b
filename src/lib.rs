/// Haema 客戶端
///
/// 吸血鬼玩家的著色器參數與衝刺技能，由宿主每個 tick 驅動

pub mod comp;
pub mod config;
pub mod msg;
pub mod render;
pub mod state;
pub mod tick;
pub mod world;

// Re-export commonly used types
pub use crate::comp::*;
pub use crate::msg::ClientMsg;
pub use crate::state::State;
