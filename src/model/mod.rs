// Data model for the classic four-player, 136-tile game
mod action;
mod board;
mod define;
mod discards;
mod event;
mod hand;
mod player;
mod state;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use board::*;
pub use define::*;
pub use discards::*;
pub use event::*;
pub use hand::*;
pub use player::*;
pub use state::*;
pub use tile::*;
