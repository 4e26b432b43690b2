use crate::actor::{create_actor, Actor};
use crate::control::Game;
use crate::listener::{EventPrinter, EventWriter, Listener};
use crate::model::*;
use crate::util::common::*;

use crate::{error, info};

// [EngineApp]
// Game mode. Runs one interactive game, or with -g a batch of quiet
// simulated games followed by aggregate statistics.
#[derive(Debug)]
pub struct EngineApp {
    seed: u64,
    n_game: u32,
    n_round: u32,
    write: bool,
    quiet: bool,
    human: Option<Seat>,
    names: [String; SEAT],
}

impl EngineApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            n_game: 0,
            n_round: 4,
            write: false,
            quiet: false,
            human: None,
            names: [
                "TileCount".to_string(),
                "TileCount".to_string(),
                "TileCount".to_string(),
                "TileCount".to_string(),
            ],
        };
        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, "-s"),
                "-g" => app.n_game = next_value(&mut it, "-g"),
                "-r" => app.n_round = next_value(&mut it, "-r"),
                "-w" => app.write = true,
                "-q" => app.quiet = true,
                "-h" => {
                    app.human = Some(0);
                    app.names[0] = "Manual".to_string();
                }
                "-0" => app.names[0] = next_value(&mut it, "-0"),
                "-1" => app.names[1] = next_value(&mut it, "-1"),
                "-2" => app.names[2] = next_value(&mut it, "-2"),
                "-3" => app.names[3] = next_value(&mut it, "-3"),
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(1);
                }
            }
        }
        if app.seed == 0 {
            app.seed = unixtime_now();
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as the seed.",
                app.seed
            );
        }
        app
    }

    pub fn run(&self) {
        if self.n_game == 0 {
            self.run_game();
        } else {
            self.run_simulation();
        }
    }

    fn create_actors(&self) -> [Box<dyn Actor>; SEAT] {
        [
            create_actor(&self.names[0]),
            create_actor(&self.names[1]),
            create_actor(&self.names[2]),
            create_actor(&self.names[3]),
        ]
    }

    fn run_game(&self) {
        let mut listeners: Vec<Box<dyn Listener>> = vec![];
        if !self.quiet {
            listeners.push(Box::new(EventPrinter::new(self.human)));
        }
        if self.write {
            listeners.push(Box::new(EventWriter::new()));
        }
        let mut game = Game::new(self.seed, self.create_actors(), listeners);
        for _ in 0..self.n_round {
            game.play_round();
            game.next_round();
        }
        game.finish();
    }

    fn run_simulation(&self) {
        let start = std::time::Instant::now();
        let mut wins = [0u32; SEAT];
        let mut scores = [0i64; SEAT];
        for n in 0..self.n_game {
            if !self.quiet && n % 100 == 0 {
                println!("Starting game number {}", n);
            }
            let mut game = Game::new(self.seed.wrapping_add(n as u64), self.create_actors(), vec![]);
            for _ in 0..self.n_round {
                let result = game.play_round();
                if let Some(winner) = result.winner {
                    wins[winner] += 1;
                }
                game.next_round();
            }
            let totals = game.board().get_scores();
            for seat in 0..SEAT {
                scores[seat] += totals[seat] as i64;
            }
        }
        println!(
            "{} games of {} rounds finished in {:.3}sec",
            self.n_game,
            self.n_round,
            start.elapsed().as_secs_f64()
        );
        for seat in 0..SEAT {
            println!("Player {} ({})", seat, self.names[seat]);
            println!("  rounds won: {}", wins[seat]);
            println!(
                "  average score: {:.1}",
                scores[seat] as f64 / self.n_game as f64
            );
        }
    }
}
