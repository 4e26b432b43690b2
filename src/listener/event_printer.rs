use super::*;
use crate::hand::{visible_score, ScoreTable};

// [EventPrinter]
// Human-readable transcript on stdout. Hidden tiles of every seat other
// than `human` stay hidden; for those seats only the score deducible from
// their revealed tiles is shown.
#[derive(Debug)]
pub struct EventPrinter {
    human: Option<Seat>,
    table: ScoreTable,
}

impl EventPrinter {
    pub fn new(human: Option<Seat>) -> Self {
        Self {
            human,
            table: ScoreTable::standard(),
        }
    }
}

impl Listener for EventPrinter {
    fn notify_event(&mut self, board: &Board, event: &Event) {
        match event {
            Event::Begin(e) => {
                println!("Game started with seed {}", e.seed);
            }
            Event::New(e) => {
                println!();
                println!(
                    "Round {} ({} round), player {} deals first",
                    e.round, e.round_wind, e.dealer
                );
            }
            Event::Deal(e) => {
                if self.human == Some(e.seat) {
                    println!("You draw {}", e.tile.name());
                } else {
                    println!("Player {} draws a tile", e.seat);
                }
            }
            Event::Discard(e) => {
                println!("Player {} discards {}", e.seat, e.tile.name());
                if self.human != Some(e.seat) {
                    let player = &board.players[e.seat];
                    let (base, doubles) =
                        visible_score(&player.hand, &self.table, board.round_wind, player.seat_wind);
                    println!(
                        "  visible score: {} ({} doubled {} times)",
                        base << doubles,
                        base,
                        doubles
                    );
                }
            }
            Event::Claim(e) => {
                println!("Player {} performs {} on {}", e.seat, e.kind, e.tile.name());
            }
            Event::Win(e) => {
                println!("Player {} has a winning hand. Congratulations!", e.seat);
                println!(
                    "  score: {} ({} doubled {} times)",
                    e.score, e.base, e.doubles
                );
            }
            Event::Exhausted(_) => {
                println!("Round finished: the wall is empty.");
            }
            Event::End(e) => {
                println!();
                for (seat, score) in e.scores.iter().enumerate() {
                    println!(
                        "Player {} ({} wins): {} points",
                        seat, board.players[seat].wins, score
                    );
                }
            }
        }
    }
}
