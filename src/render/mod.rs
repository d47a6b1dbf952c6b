/// 著色器與粒子的客戶端輸出端
///
/// tick 執行緒寫入，渲染端自行讀取

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use hashbrown::HashMap;
use parking_lot::RwLock;
use vek::Vec3;

use dash_ability::{ParticleKind, ParticleSink, RenderSink, UniformValue};

/// 共享的 uniform 表，clone 後指向同一份資料
#[derive(Clone, Debug, Default)]
pub struct UniformStore {
    values: Arc<RwLock<HashMap<String, UniformValue>>>,
}

impl UniformStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.read().get(name).copied()
    }

    pub fn snapshot(&self) -> HashMap<String, UniformValue> {
        self.values.read().clone()
    }
}

impl RenderSink for UniformStore {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.values.write().insert(name.to_string(), value);
    }
}

/// 一個待產生的粒子
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpawn {
    pub kind: ParticleKind,
    pub position: Vec3<f64>,
    pub velocity: Vec3<f64>,
}

/// 粒子佇列的寫入端
#[derive(Clone, Debug)]
pub struct ParticleQueue {
    tx: Sender<ParticleSpawn>,
}

impl ParticleQueue {
    /// 回傳寫入端與渲染端用的讀取端
    pub fn new() -> (Self, Receiver<ParticleSpawn>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl ParticleSink for ParticleQueue {
    fn spawn_particle(&mut self, kind: ParticleKind, position: Vec3<f64>, velocity: Vec3<f64>) {
        if self.tx.send(ParticleSpawn { kind, position, velocity }).is_err() {
            log::trace!("粒子佇列已關閉，略過");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_store_shared_between_clones() {
        let store = UniformStore::new();
        let mut writer = store.clone();
        writer.set_uniform("Saturation", UniformValue::Float(0.4));
        writer.set_uniform("Saturation", UniformValue::Float(0.8));
        assert_eq!(store.get("Saturation"), Some(UniformValue::Float(0.8)));
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.get("RedMatrix"), None);
    }

    #[test]
    fn test_particle_queue_delivers_in_order() {
        let (mut queue, rx) = ParticleQueue::new();
        let kind = ParticleKind::default();
        queue.spawn_particle(kind, Vec3::new(1.0, 2.0, 3.0), Vec3::zero());
        queue.spawn_particle(kind, Vec3::new(4.0, 5.0, 6.0), Vec3::zero());
        let got: Vec<_> = rx.try_iter().map(|p| p.position).collect();
        assert_eq!(got, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_closed_queue_is_ignored() {
        let (mut queue, rx) = ParticleQueue::new();
        drop(rx);
        queue.spawn_particle(ParticleKind::default(), Vec3::zero(), Vec3::zero());
    }
}
