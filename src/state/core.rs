/// 客戶端狀態核心結構

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use specs::{Builder, Entity, World, WorldExt};
use vek::Vec3;

use dash_ability::{AbilityTickController, EffectSinks, Ticks};

use crate::comp::*;
use crate::config::Setting;
use crate::msg::{ChannelNetworkSink, ClientMsg};
use crate::render::{ParticleQueue, ParticleSpawn, UniformStore};
use crate::world::BlockWorld;

use super::{StateInitializer, SystemDispatcher, TimeManager};

/// 客戶端遊戲狀態
pub struct State {
    /// ECS 世界
    ecs: World,
    /// 時間管理器
    time_manager: TimeManager,
    /// 系統分派器
    system_dispatcher: SystemDispatcher,
    /// 送往伺服器的封包
    outgoing: Receiver<ClientMsg>,
    /// 著色器 uniform
    uniforms: UniformStore,
    /// 待產生的粒子
    particles: Receiver<ParticleSpawn>,
}

impl State {
    pub fn new(setting: &Setting) -> Result<Self> {
        setting.dash.validate().context("衝刺設定無效")?;

        let mut ecs = StateInitializer::setup_ecs_world(FeedCooldown(setting.client.feed_cooldown));

        let (network, outgoing) = ChannelNetworkSink::channel();
        let (particle_queue, particles) = ParticleQueue::new();
        let uniforms = UniformStore::new();
        let sinks = EffectSinks {
            render: Box::new(uniforms.clone()),
            network: Box::new(network),
            particles: Box::new(particle_queue),
        };
        let controller = AbilityTickController::new(setting.dash.clone(), sinks);
        let system_dispatcher = SystemDispatcher::new(&mut ecs, controller);

        log::info!(
            "客戶端狀態建立完成 dash_cooldown={} feed_cooldown={}",
            setting.dash.dash_cooldown,
            setting.client.feed_cooldown
        );
        Ok(Self {
            ecs,
            time_manager: TimeManager::new(),
            system_dispatcher,
            outgoing,
            uniforms,
            particles,
        })
    }

    /// 客戶端主循環 tick
    pub fn tick(&mut self) {
        self.time_manager.update(&mut self.ecs);
        self.system_dispatcher.run_systems(&self.ecs);
        self.ecs.maintain();
    }

    pub fn ecs_mut(&mut self) -> &mut World {
        &mut self.ecs
    }

    pub fn world_time(&self) -> Ticks {
        self.time_manager.get_time(&self.ecs)
    }

    pub fn set_world_time(&mut self, time: Ticks) {
        self.time_manager.set_time(&mut self.ecs, time);
    }

    /// 衝刺鍵輸入，下一個 tick 生效
    pub fn set_dash_key(&mut self, pressed: bool) {
        self.ecs.write_resource::<DashKey>().pressed = pressed;
    }

    pub fn blocks_mut(&mut self) -> specs::shred::FetchMut<'_, BlockWorld> {
        self.ecs.write_resource::<BlockWorld>()
    }

    /// 建立其他玩家，衝刺狀態跟著實體一起建立
    pub fn spawn_player(&mut self, player: Player, pos: Vec3<f64>, look: Look) -> Entity {
        self.ecs
            .create_entity()
            .with(player)
            .with(Pos(pos))
            .with(look)
            .with(DashState::default())
            .build()
    }

    /// 建立本地玩家，只有它會讀取衝刺鍵並驅動著色器
    pub fn spawn_local_player(&mut self, player: Player, pos: Vec3<f64>, look: Look) -> Entity {
        let entity = self.spawn_player(player, pos, look);
        self.ecs.write_storage::<LocalPlayer>().insert(entity, LocalPlayer).ok();
        entity
    }

    pub fn is_local_player(&self, entity: Entity) -> bool {
        self.ecs.read_storage::<LocalPlayer>().contains(entity)
    }

    /// 轉為吸血鬼，視為剛進食
    pub fn make_vampire(&mut self, entity: Entity, blood_level: f64) -> Result<()> {
        let now = self.world_time();
        self.ecs
            .write_storage::<Vampire>()
            .insert(entity, Vampire)
            .context("實體已不存在")?;
        self.ecs
            .write_storage::<VampireResource>()
            .insert(entity, VampireResource { blood_level, last_fed: now })
            .context("實體已不存在")?;
        Ok(())
    }

    /// 解除吸血鬼狀態
    pub fn cure(&mut self, entity: Entity) {
        self.ecs.write_storage::<Vampire>().remove(entity);
        self.ecs.write_storage::<VampireResource>().remove(entity);
    }

    /// 進食：設定血量並重置紅色淡出
    pub fn feed(&mut self, entity: Entity, blood_level: f64) -> Result<()> {
        let now = self.world_time();
        let mut storage = self.ecs.write_storage::<VampireResource>();
        let blood = storage.get_mut(entity).context("實體沒有吸血鬼血量")?;
        blood.blood_level = blood_level.clamp(0.0, 20.0);
        blood.last_fed = now;
        Ok(())
    }

    pub fn set_look(&mut self, entity: Entity, look: Look) -> Result<()> {
        self.ecs
            .write_storage::<Look>()
            .insert(entity, look)
            .context("實體已不存在")?;
        Ok(())
    }

    pub fn dash_state(&self, entity: Entity) -> Option<DashState> {
        self.ecs.read_storage::<DashState>().get(entity).copied()
    }

    pub fn outgoing(&self) -> &Receiver<ClientMsg> {
        &self.outgoing
    }

    pub fn uniforms(&self) -> &UniformStore {
        &self.uniforms
    }

    pub fn particles(&self) -> &Receiver<ParticleSpawn> {
        &self.particles
    }
}
