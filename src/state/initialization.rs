/// 狀態初始化器 - 負責設置 ECS 世界

use specs::{World, WorldExt};

use crate::comp::*;
use crate::world::BlockWorld;

pub struct StateInitializer;

impl StateInitializer {
    pub fn setup_ecs_world(feed_cooldown: FeedCooldown) -> World {
        let mut ecs = World::new();
        Self::register_components(&mut ecs);
        Self::initialize_resources(&mut ecs, feed_cooldown);
        ecs
    }

    fn register_components(ecs: &mut World) {
        ecs.register::<Player>();
        ecs.register::<LocalPlayer>();
        ecs.register::<Pos>();
        ecs.register::<Look>();
        ecs.register::<Vampire>();
        ecs.register::<VampireResource>();
        ecs.register::<DashState>();
    }

    fn initialize_resources(ecs: &mut World, feed_cooldown: FeedCooldown) {
        ecs.insert(WorldTime(0));
        ecs.insert(feed_cooldown);
        ecs.insert(DashKey::default());
        ecs.insert(BlockWorld::new());
    }
}
