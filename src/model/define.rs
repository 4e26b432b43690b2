// Shared type aliases and constants

pub type Seat = usize; // seat number (0..3)
pub type Rank = usize; // rank within a suit
pub type Index = usize; // tile slot index in a hand
pub type Score = i32;

pub const SEAT: usize = 4;
pub const HAND_SIZE: usize = 13; // tiles while waiting
pub const FULL_HAND: usize = HAND_SIZE + 1; // after a draw or a pickup
pub const SUIT: usize = 5;
pub const TILE_COPIES: usize = 4; // copies of each tile kind in the wall
pub const WALL_SIZE: usize = 136;
pub const WINNING_GROUPS: usize = 5; // 4 melds + 1 pair
pub const SESSION_CAP: Score = 3000; // per-round cap when accumulating session totals
