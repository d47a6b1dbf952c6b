/// 系統分派器 - 建立並運行客戶端 tick 系統

use specs::{Dispatcher, DispatcherBuilder, World};

use dash_ability::AbilityTickController;
use crate::tick::VampireSys;

pub struct SystemDispatcher {
    dispatcher: Dispatcher<'static, 'static>,
}

impl SystemDispatcher {
    /// 吸血鬼系統在呼叫端執行緒上同步執行
    pub fn new(world: &mut World, controller: AbilityTickController) -> Self {
        let mut dispatcher = DispatcherBuilder::new()
            .with_thread_local(VampireSys::new(controller))
            .build();
        dispatcher.setup(world);
        Self { dispatcher }
    }

    pub fn run_systems(&mut self, world: &World) {
        self.dispatcher.dispatch(world);
    }
}
