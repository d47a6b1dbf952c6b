pub mod vampire_tick;

pub use self::vampire_tick::Sys as VampireSys;
