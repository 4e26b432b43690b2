use super::*;

// [Board]
// Complete game state. Owned by the controller; listeners receive a shared
// reference alongside every event.
#[derive(Debug, Default, Serialize)]
pub struct Board {
    pub round: usize, // completed-round counter, dealer = round % SEAT
    pub round_wind: Wind,
    pub turn: Seat,
    pub wall: Vec<Tile>,
    pub discards: DiscardPile,
    pub players: [Player; SEAT],
    pub running: bool,
}

impl Board {
    // perspective handed to the actor sitting at `seat`
    pub fn state_for(&self, seat: Seat) -> State {
        let hands = self
            .players
            .iter()
            .map(|p| {
                if p.seat == seat {
                    p.hand.clone()
                } else {
                    p.hand.visible_hand()
                }
            })
            .collect();
        State {
            seat,
            hands,
            discards: self.discards.clone(),
        }
    }

    pub fn get_scores(&self) -> [Score; SEAT] {
        let mut scores = [0; SEAT];
        for s in 0..SEAT {
            scores[s] = self.players[s].score;
        }
        scores
    }

    pub fn next_seat(&self, seat: Seat) -> Seat {
        (seat + 1) % SEAT
    }
}
