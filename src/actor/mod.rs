mod manual;
mod random;
mod tile_count;

use std::fmt;

use crate::model::*;

use crate::error;

pub use manual::*;
pub use random::*;
pub use tile_count::*;

// [Config]
#[derive(Clone)]
pub struct Config {
    pub name: String,
}

// [Actor]
// A seat's decision maker. The controller hands it the observable state and
// a pre-validated list of options; the actor only chooses among them.
pub trait Actor {
    fn init(&mut self, _seat: Seat) {}

    // must return one of the indices in `valid`
    fn select_discard(&mut self, state: &State, valid: &[Index]) -> Index;

    // None passes on the discard
    fn select_claim(&mut self, state: &State, claims: &[ClaimKind], tile: Tile)
        -> Option<ClaimKind>;

    // called when more than one run could absorb the claimed tile
    fn select_chow_starter(&mut self, state: &State, starters: &[Rank], tile: Tile) -> Rank;

    fn get_config(&self) -> &Config;
}

impl fmt::Debug for dyn Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_config().name)
    }
}

trait ActorBuilder {
    fn get_default_config(&self) -> Config;
    fn create(&self, config: Config) -> Box<dyn Actor>;
}

pub fn create_actor(name: &str) -> Box<dyn Actor> {
    let builders: Vec<Box<dyn ActorBuilder>> = vec![
        Box::new(ManualBuilder {}),
        Box::new(RandomBuilder {}),
        Box::new(TileCountBuilder {}),
    ];
    for builder in &builders {
        let config = builder.get_default_config();
        if name == config.name {
            return builder.create(config);
        }
    }
    error!("unknown actor name: {}", name);
    std::process::exit(1);
}
