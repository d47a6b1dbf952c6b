pub mod block_world;

pub use self::block_world::*;
