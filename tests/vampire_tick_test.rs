/// 吸血鬼 tick 系統整合測試
///
/// 透過 State 驅動完整的 ECS 流程

use dash_ability::UniformValue;
use haema_client::config::Setting;
use haema_client::*;
use specs::{Entity, WorldExt};
use vek::Vec3;

fn create_state() -> State {
    let mut setting = Setting::default();
    setting.dash.seed = Some(3);
    setting.dash.dash_cooldown = 10;
    setting.client.feed_cooldown = 200;
    let mut state = State::new(&setting).unwrap();
    state.blocks_mut().fill(Vec3::new(-8, 63, -8), Vec3::new(8, 63, 8));
    state
}

fn spawn_looking_down(state: &mut State, name: &str) -> Entity {
    state.spawn_local_player(
        Player::new(name),
        Vec3::new(0.5, 64.0, 0.5),
        Look::from_angles(0.0, 90.0),
    )
}

fn red(state: &State) -> f32 {
    match state.uniforms().get("RedMatrix") {
        Some(UniformValue::Vec3(v)) => v.x,
        other => panic!("RedMatrix 不存在: {:?}", other),
    }
}

#[test]
fn test_press_release_sends_single_dash() {
    let mut state = create_state();
    let player = spawn_looking_down(&mut state, "alice");
    state.make_vampire(player, 20.0).unwrap();

    state.set_dash_key(true);
    state.tick();
    assert_eq!(state.outgoing().try_iter().count(), 0);
    let particles: Vec<_> = state.particles().try_iter().collect();
    assert_eq!(particles.len(), 10);
    for p in &particles {
        assert!(p.position.x >= 0.0 && p.position.x < 1.0);
        assert!(p.position.y >= 64.0 && p.position.y < 66.0);
    }

    state.set_dash_key(false);
    state.tick();
    let sent: Vec<ClientMsg> = state.outgoing().try_iter().collect();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].channel, "haema:dash");
    assert_eq!(state.dash_state(player).unwrap().0.last_activation_time, Some(2));

    // 冷卻中再按一次不會觸發
    state.set_dash_key(true);
    state.tick();
    state.set_dash_key(false);
    state.tick();
    assert_eq!(state.outgoing().try_iter().count(), 0);
    assert_eq!(state.particles().try_iter().count(), 0);
}

#[test]
fn test_shader_uniforms_follow_blood() {
    let mut state = create_state();
    let player = spawn_looking_down(&mut state, "alice");
    state.make_vampire(player, 10.0).unwrap();

    state.tick();
    assert_eq!(state.uniforms().get("Saturation"), Some(UniformValue::Float(0.4)));
    assert!((red(&state) - 2.295).abs() < 1e-5);

    state.set_world_time(1000);
    state.tick();
    assert!((red(&state) - 1.3).abs() < 1e-6);

    state.feed(player, 20.0).unwrap();
    state.tick();
    assert!((red(&state) - 2.295).abs() < 1e-5);
    assert_eq!(state.uniforms().get("Saturation"), Some(UniformValue::Float(0.8)));
}

#[test]
fn test_non_vampire_is_untouched() {
    let mut state = create_state();
    let human = spawn_looking_down(&mut state, "bob");

    state.set_dash_key(true);
    state.tick();
    state.set_dash_key(false);
    state.tick();

    assert_eq!(state.dash_state(human), Some(DashState::default()));
    assert_eq!(state.outgoing().try_iter().count(), 0);
    assert_eq!(state.particles().try_iter().count(), 0);
    assert!(state.uniforms().snapshot().is_empty());
}

#[test]
fn test_vampire_without_blood_is_untouched() {
    let mut state = create_state();
    let player = spawn_looking_down(&mut state, "carol");
    state.ecs_mut().write_storage::<Vampire>().insert(player, Vampire).unwrap();

    state.set_dash_key(true);
    state.tick();

    assert_eq!(state.dash_state(player), Some(DashState::default()));
    assert!(state.uniforms().snapshot().is_empty());
}

#[test]
fn test_low_blood_needs_creative() {
    let mut state = create_state();
    let player = spawn_looking_down(&mut state, "dave");
    state.make_vampire(player, 5.0).unwrap();

    state.set_dash_key(true);
    state.tick();
    state.set_dash_key(false);
    state.tick();
    assert_eq!(state.outgoing().try_iter().count(), 0);

    state.ecs_mut().write_storage::<Player>().get_mut(player).unwrap().creative = true;
    state.set_dash_key(true);
    state.tick();
    state.set_dash_key(false);
    state.tick();
    assert_eq!(state.outgoing().try_iter().count(), 1);
}

#[test]
fn test_cured_player_stops_dashing() {
    let mut state = create_state();
    let player = spawn_looking_down(&mut state, "erin");
    state.make_vampire(player, 20.0).unwrap();

    state.set_dash_key(true);
    state.tick();
    state.cure(player);
    state.set_dash_key(false);
    state.tick();

    assert_eq!(state.outgoing().try_iter().count(), 0);
    // 解除後狀態保留最後一次處理時的值
    assert!(state.dash_state(player).unwrap().0.was_input_pressed);
}

#[test]
fn test_looking_at_sky_has_no_preview() {
    let mut state = create_state();
    let player = state.spawn_local_player(
        Player::new("frank"),
        Vec3::new(0.5, 64.0, 0.5),
        Look::from_angles(0.0, -90.0),
    );
    state.make_vampire(player, 20.0).unwrap();

    state.set_dash_key(true);
    state.tick();
    assert_eq!(state.particles().try_iter().count(), 0);

    // 沒有目標仍可在放開時衝刺
    state.set_dash_key(false);
    state.tick();
    assert_eq!(state.outgoing().try_iter().count(), 1);
}

#[test]
fn test_only_local_vampire_reads_key_and_shader() {
    let mut state = create_state();
    let local = spawn_looking_down(&mut state, "local");
    let remote = state.spawn_player(
        Player::new("remote"),
        Vec3::new(3.5, 64.0, 3.5),
        Look::from_angles(0.0, 90.0),
    );
    state.make_vampire(local, 20.0).unwrap();
    state.make_vampire(remote, 20.0).unwrap();
    assert!(state.is_local_player(local));
    assert!(!state.is_local_player(remote));

    state.set_dash_key(true);
    state.tick();
    state.set_dash_key(false);
    state.tick();

    assert_eq!(state.outgoing().try_iter().count(), 1);
    assert_eq!(state.dash_state(local).unwrap().0.last_activation_time, Some(2));
    assert_eq!(state.dash_state(remote), Some(DashState::default()));

    // 遠端玩家的血量不影響本地著色器
    state.feed(remote, 5.0).unwrap();
    state.tick();
    assert_eq!(state.uniforms().get("Saturation"), Some(UniformValue::Float(0.8)));
}
