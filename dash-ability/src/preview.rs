use rand::Rng;
use vek::Vec3;

use crate::config::PreviewConfig;
use crate::sink::ParticleSink;

/// 在目標周圍隨機散佈一組預覽粒子，回傳粒子數
pub fn spawn_preview_burst<R: Rng>(
    rng: &mut R,
    config: &PreviewConfig,
    target: Vec3<f64>,
    particles: &mut dyn ParticleSink,
) -> usize {
    let half = config.horizontal_jitter / 2.0;
    for _ in 0..config.particle_count {
        let position = Vec3::new(
            target.x - half + rng.random::<f64>() * config.horizontal_jitter,
            target.y + rng.random::<f64>() * config.vertical_jitter,
            target.z - half + rng.random::<f64>() * config.horizontal_jitter,
        );
        particles.spawn_particle(config.kind, position, config.velocity);
    }
    config.particle_count as usize
}
