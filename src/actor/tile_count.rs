use rand::prelude::*;

use super::*;

// [TileCount]
// Copy-counting heuristic. A discard candidate is penalized for copies
// already in hand (almost a group), copies not yet seen anywhere (still
// claimable), honor status and suit concentration; the cheapest tile goes
// to the pile. A small randomness factor keeps games from going stale.
pub struct TileCount {
    config: Config,
    randomness: f64,
    chow_rate: f64,
}

pub struct TileCountBuilder;

impl ActorBuilder for TileCountBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "TileCount".to_string(),
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(TileCount {
            config,
            randomness: 0.05,
            chow_rate: 0.5,
        })
    }
}

impl Actor for TileCount {
    fn select_discard(&mut self, state: &State, valid: &[Index]) -> Index {
        let mut rng = rand::thread_rng();
        if rng.gen::<f64>() < self.randomness {
            return valid[rng.gen_range(0..valid.len())];
        }

        let hand = state.own_hand();
        let mut preferred = valid[0];
        let mut minimal = Score::MAX;
        for &index in valid {
            let tile = hand.get(index);
            let in_hand = hand.count_of(tile) as Score;
            let seen = state.seen_count(tile) as Score;
            let honor = if tile.suit.is_honor() { 1 } else { 0 };
            let in_suit = hand.count_suit(tile.suit) as Score;

            let score =
                1000 * in_hand + 100 * (TILE_COPIES as Score - seen) + 10 * honor + in_suit;
            if score < minimal {
                minimal = score;
                preferred = index;
            } else if score == minimal && rng.gen_bool(0.5) {
                preferred = index;
            }
        }
        preferred
    }

    fn select_claim(
        &mut self,
        _state: &State,
        claims: &[ClaimKind],
        _tile: Tile,
    ) -> Option<ClaimKind> {
        let best = *claims.iter().max()?;
        if best == ClaimKind::Chow {
            let mut rng = rand::thread_rng();
            if !rng.gen_bool(self.chow_rate) {
                return None;
            }
        }
        Some(best)
    }

    fn select_chow_starter(&mut self, _state: &State, starters: &[Rank], _tile: Tile) -> Rank {
        let mut rng = rand::thread_rng();
        starters[rng.gen_range(0..starters.len())]
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}
