use super::*;
use crate::util::common::prompt;

// [Manual]
// Asks a human on stdin. Input is re-prompted until it names one of the
// options the controller offered.
pub struct Manual {
    config: Config,
}

pub struct ManualBuilder;

impl ActorBuilder for ManualBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Manual".to_string(),
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Manual { config })
    }
}

impl Actor for Manual {
    fn select_discard(&mut self, state: &State, valid: &[Index]) -> Index {
        println!("Discard pile: {}", state.discards);
        println!("{}", state.own_hand().describe());
        println!("Select which tile to discard:");
        loop {
            if let Ok(index) = prompt().trim().parse::<Index>() {
                if valid.contains(&index) {
                    return index;
                }
            }
            println!("Invalid number. The tile must be hidden.");
        }
    }

    fn select_claim(
        &mut self,
        _state: &State,
        claims: &[ClaimKind],
        tile: Tile,
    ) -> Option<ClaimKind> {
        println!("Discarded tile: {}", tile.name());
        println!("Available actions:");
        for (i, kind) in claims.iter().enumerate() {
            println!("{}: {}", i, kind);
        }
        println!("Select an action (empty or -1 to pass):");
        loop {
            let input = prompt();
            let input = input.trim();
            if input.is_empty() || input == "-1" {
                return None;
            }
            if let Ok(choice) = input.parse::<usize>() {
                if choice < claims.len() {
                    return Some(claims[choice]);
                }
            }
            println!("Invalid input. Please select from the listed actions.");
        }
    }

    fn select_chow_starter(&mut self, _state: &State, starters: &[Rank], tile: Tile) -> Rank {
        println!("Several runs are possible. Select the starting tile:");
        for (i, &rank) in starters.iter().enumerate() {
            println!("{}: {}", i, Tile::new(tile.suit, rank).name());
        }
        loop {
            if let Ok(choice) = prompt().trim().parse::<usize>() {
                if choice < starters.len() {
                    return starters[choice];
                }
            }
            println!("Invalid input. Please select from the listed tiles.");
        }
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}
