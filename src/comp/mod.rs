pub mod phys;
pub mod player;
pub mod resources;

pub use self::{
    phys::*,
    player::*,
    resources::*,
};
