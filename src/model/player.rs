use super::*;

// [Player]
#[derive(Debug, Default, Clone, Serialize)]
pub struct Player {
    pub seat: Seat,
    pub seat_wind: Wind,
    pub hand: Hand,
    pub score: Score, // session total across rounds
    pub wins: u32,
}
