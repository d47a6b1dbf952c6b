/// 吸血鬼衝刺 tick 控制器
///
/// 每個 tick 由宿主呼叫一次：
/// - 依血量更新著色器參數
/// - 按鍵放開的瞬間若符合條件，送出衝刺請求並開始冷卻
/// - 按住時若符合條件，在射線目標處顯示預覽粒子

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::config::DashConfig;
use crate::preview::spawn_preview_burst;
use crate::shader::{RED_MATRIX_UNIFORM, SATURATION_UNIFORM};
use crate::sink::{DashRaycast, EffectSinks};
use crate::types::*;

/// 衝刺條件：冷卻結束，且血量高於門檻或處於創造模式
pub fn can_activate(config: &DashConfig, state: &PlayerAbilityState, input: &TickInputs) -> bool {
    let Some(resource) = input.resource else {
        return false;
    };
    state.cooldown_elapsed(input.current_world_time, config.dash_cooldown)
        && (resource.level > config.resource_threshold || input.is_unrestricted_mode)
}

pub struct AbilityTickController {
    config: DashConfig,
    sinks: EffectSinks,
    rng: Pcg64,
}

impl std::fmt::Debug for AbilityTickController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbilityTickController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AbilityTickController {
    pub fn new(config: DashConfig, sinks: EffectSinks) -> Self {
        let rng = match config.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        };
        Self { config, sinks, rng }
    }

    pub fn config(&self) -> &DashConfig {
        &self.config
    }

    pub fn can_activate(&self, state: &PlayerAbilityState, input: &TickInputs) -> bool {
        can_activate(&self.config, state, input)
    }

    /// 處理單一玩家的一個 tick
    pub fn on_tick(
        &mut self,
        state: &mut PlayerAbilityState,
        input: &TickInputs,
        raycast: &dyn DashRaycast,
    ) -> TickEffects {
        let mut effects = TickEffects::default();
        if !input.is_special_state {
            return effects;
        }
        let Some(resource) = input.resource else {
            return effects;
        };
        let now = input.current_world_time;

        let params = VampireShaderParams::compute(&resource, now);
        self.sinks
            .render
            .set_uniform(SATURATION_UNIFORM, UniformValue::Float(params.saturation));
        self.sinks
            .render
            .set_uniform(RED_MATRIX_UNIFORM, UniformValue::Vec3(params.red_matrix));
        effects.shader = Some(params);

        let eligible = self.can_activate(state, input);
        if state.was_input_pressed && !input.is_input_pressed && eligible {
            self.sinks.network.send_dash_request(&self.config.channel);
            state.last_activation_time = Some(now);
            effects.dash_requested = true;
            log::info!("衝刺請求已送出 tick={} 血量={}", now, resource.level);
        } else if input.is_input_pressed && eligible {
            let target = raycast.raytrace_for_dash(
                input.eye_position,
                input.look_direction,
                self.config.max_range,
            );
            if let Some(target) = target {
                effects.preview_target = Some(target);
                effects.particles_spawned = spawn_preview_burst(
                    &mut self.rng,
                    &self.config.preview,
                    target,
                    &mut *self.sinks.particles,
                );
                log::trace!("衝刺預覽 target={:?}", target);
            }
        }

        state.was_input_pressed = input.is_input_pressed;
        effects
    }
}
