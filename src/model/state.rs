use super::*;

// [State]
// What a single seat may observe when deciding a move: its own full hand,
// the revealed part of every other hand, and the discard pile.
#[derive(Debug, Clone)]
pub struct State {
    pub seat: Seat,
    pub hands: Vec<Hand>,
    pub discards: DiscardPile,
}

impl State {
    pub fn own_hand(&self) -> &Hand {
        &self.hands[self.seat]
    }

    // copies of the tile accounted for from this seat's point of view
    pub fn seen_count(&self, tile: Tile) -> usize {
        let mut n = self.discards.count_of(tile);
        for hand in &self.hands {
            n += hand.count_of(tile);
        }
        n
    }
}
