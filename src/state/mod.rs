/// 客戶端狀態管理模塊
///
/// 負責 ECS 世界、時間循環與系統分派

pub mod core;
pub mod initialization;
pub mod time_management;
pub mod system_dispatcher;

pub use self::core::State;
pub use initialization::StateInitializer;
pub use time_management::TimeManager;
pub use system_dispatcher::SystemDispatcher;
