#[macro_use]
mod macros;

pub mod distance;
pub mod efficiency;
pub mod energy;
pub mod percent;
pub mod power;
pub mod speed;
pub mod time;
