use rand::prelude::*;

use super::*;

// [Random]
// Uniformly random choices. Pass counts as one of the claim options.
pub struct Random {
    config: Config,
}

pub struct RandomBuilder;

impl ActorBuilder for RandomBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Random".to_string(),
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Random { config })
    }
}

impl Actor for Random {
    fn select_discard(&mut self, _state: &State, valid: &[Index]) -> Index {
        let mut rng = rand::thread_rng();
        valid[rng.gen_range(0..valid.len())]
    }

    fn select_claim(
        &mut self,
        _state: &State,
        claims: &[ClaimKind],
        _tile: Tile,
    ) -> Option<ClaimKind> {
        let mut rng = rand::thread_rng();
        let choice = rng.gen_range(0..claims.len() + 1);
        claims.get(choice).copied()
    }

    fn select_chow_starter(&mut self, _state: &State, starters: &[Rank], _tile: Tile) -> Rank {
        let mut rng = rand::thread_rng();
        starters[rng.gen_range(0..starters.len())]
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}
