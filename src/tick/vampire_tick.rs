use specs::{
    join::MaybeJoin, shred::{ResourceId, World}, Entities, Join, Read, ReadStorage, System, SystemData, WriteStorage,
};

use dash_ability::{AbilityTickController, TickInputs};
use crate::comp::*;
use crate::world::BlockWorld;

#[derive(SystemData)]
pub struct VampireRead<'a> {
    entities: Entities<'a>,
    time: Read<'a, WorldTime>,
    feed_cooldown: Read<'a, FeedCooldown>,
    dash_key: Read<'a, DashKey>,
    blocks: Read<'a, BlockWorld>,
    players: ReadStorage<'a, Player>,
    local: ReadStorage<'a, LocalPlayer>,
    pos: ReadStorage<'a, Pos>,
    look: ReadStorage<'a, Look>,
    vampires: ReadStorage<'a, Vampire>,
    blood: ReadStorage<'a, VampireResource>,
}

#[derive(SystemData)]
pub struct VampireWrite<'a> {
    dash_states: WriteStorage<'a, DashState>,
}

/// 吸血鬼著色器與衝刺
pub struct Sys {
    controller: AbilityTickController,
}

impl Sys {
    pub fn new(controller: AbilityTickController) -> Self {
        Self { controller }
    }
}

impl<'a> System<'a> for Sys {
    type SystemData = (
        VampireRead<'a>,
        VampireWrite<'a>,
    );

    fn run(&mut self, (tr, mut tw): Self::SystemData) {
        let now = tr.time.0;
        // 衝刺鍵與著色器都只屬於本地玩家
        for (e, player, _, pos, look, dash, vampire, blood) in (
            &tr.entities,
            &tr.players,
            &tr.local,
            &tr.pos,
            &tr.look,
            &mut tw.dash_states,
            MaybeJoin(&tr.vampires),
            MaybeJoin(&tr.blood),
        )
            .join()
        {
            let input = TickInputs {
                is_special_state: vampire.is_some(),
                resource: blood.map(|b| b.snapshot(tr.feed_cooldown.0)),
                current_world_time: now,
                is_input_pressed: tr.dash_key.pressed,
                is_unrestricted_mode: player.creative,
                eye_position: pos.0 + vek::Vec3::new(0.0, player.eye_height, 0.0),
                look_direction: look.0,
            };
            let effects = self.controller.on_tick(&mut dash.0, &input, &*tr.blocks);
            if effects.dash_requested {
                log::debug!("{} ({:?}) 衝刺 tick={}", player.name, e, now);
            }
        }
    }
}
