mod game;
mod wall;

pub use game::*;
pub use wall::*;
