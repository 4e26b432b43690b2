use std::cmp::Reverse;

use super::wall::create_wall;
use crate::actor::Actor;
use crate::hand::{final_score, is_winning_hand, max_score, ScoreTable};
use crate::listener::Listener;
use crate::model::*;

use crate::error;

// [Game]
// Runs rounds of play: deal, draw/discard sequencing, claim arbitration,
// win detection and session scoring.
#[derive(Debug)]
pub struct Game {
    seed: u64,
    board: Board,
    actors: [Box<dyn Actor>; SEAT],
    listeners: Vec<Box<dyn Listener>>,
    table: ScoreTable,
    winner: Option<Seat>,
}

#[derive(Debug)]
pub struct RoundResult {
    pub winner: Option<Seat>,
    pub scores: [Score; SEAT], // session totals after the round
}

impl Game {
    pub fn new(
        seed: u64,
        actors: [Box<dyn Actor>; SEAT],
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        let mut board = Board::default();
        for seat in 0..SEAT {
            board.players[seat].seat = seat;
            board.players[seat].seat_wind = Wind(seat);
        }
        Self {
            seed,
            board,
            actors,
            listeners,
            table: ScoreTable::standard(),
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn notify(&mut self, event: Event) {
        for listener in &mut self.listeners {
            listener.notify_event(&self.board, &event);
        }
    }

    fn deal(&mut self) {
        if self.board.round == 0 {
            self.notify(Event::begin(self.seed));
        }
        let board = &mut self.board;
        board.wall = create_wall(self.seed.wrapping_add(board.round as u64));
        board.discards = DiscardPile::new();
        for seat in 0..SEAT {
            board.players[seat].hand = Hand::new();
            board.players[seat].hand.deal_from(&mut board.wall);
        }
        board.turn = board.round % SEAT;
        board.running = true;
        self.winner = None;
        for seat in 0..SEAT {
            self.actors[seat].init(seat);
        }
        self.notify(Event::new_round(
            self.board.round,
            self.board.round_wind,
            self.board.turn,
        ));
    }

    // One full round, from the deal to a win or wall exhaustion. Session
    // totals are updated before this returns.
    pub fn play_round(&mut self) -> RoundResult {
        self.deal();
        let mut current = self.board.turn;
        self.player_turn(current);
        while self.board.running {
            if let Some((seat, kind)) = self.claim_on_discard(current) {
                current = seat;
                self.board.turn = current;
                self.perform_claim(seat, kind);
                if self.board.running {
                    self.discard_turn(seat);
                }
            } else {
                current = self.board.next_seat(current);
                self.board.turn = current;
                self.player_turn(current);
            }
        }
        RoundResult {
            winner: self.winner,
            scores: self.board.get_scores(),
        }
    }

    // Rotates seat winds, advances the round wind after every full cycle and
    // moves the deal.
    pub fn next_round(&mut self) {
        self.board.round += 1;
        for player in self.board.players.iter_mut() {
            player.seat_wind = player.seat_wind.rotate();
        }
        if self.board.round % SEAT == 0 {
            self.board.round_wind = self.board.round_wind.rotate();
        }
    }

    pub fn finish(&mut self) {
        self.notify(Event::end(self.board.get_scores()));
    }

    fn player_turn(&mut self, seat: Seat) {
        if self.board.wall.is_empty() {
            self.notify(Event::exhausted());
            self.settle(None);
            return;
        }
        let board = &mut self.board;
        let tile = match board.players[seat].hand.draw_from(&mut board.wall) {
            Some(tile) => tile,
            None => {
                error!("draw failed with a non-empty wall");
                return;
            }
        };
        board.players[seat].hand.sort();
        self.notify(Event::deal(seat, tile));
        self.check_win(seat);
        if self.board.running {
            self.discard_turn(seat);
        }
    }

    fn discard_turn(&mut self, seat: Seat) {
        let valid = self.board.players[seat].hand.valid_discards();
        if valid.is_empty() {
            // a fully revealed hand has nothing left to throw
            return;
        }
        let state = self.board.state_for(seat);
        let index = self.actors[seat].select_discard(&state, &valid);
        let tile = self.board.players[seat].hand.discard(index);
        self.board.discards.add(tile);
        self.notify(Event::discard(seat, tile));
    }

    // Polls every other seat about the freshest discard. Kong beats pong
    // beats chow; the lowest seat number breaks remaining ties.
    fn claim_on_discard(&mut self, current: Seat) -> Option<(Seat, ClaimKind)> {
        let tile = self.board.discards.last()?;
        let mut claims: Vec<(Seat, ClaimKind)> = vec![];
        for seat in 0..SEAT {
            if seat == current {
                continue;
            }
            let is_next = seat == self.board.next_seat(current);
            let available = self.board.players[seat]
                .hand
                .available_claims(tile, is_next);
            if available.is_empty() {
                continue;
            }
            let state = self.board.state_for(seat);
            if let Some(kind) = self.actors[seat].select_claim(&state, &available, tile) {
                claims.push((seat, kind));
            }
        }
        claims.sort_by_key(|&(seat, kind)| (Reverse(kind), seat));
        claims.into_iter().next()
    }

    fn perform_claim(&mut self, seat: Seat, kind: ClaimKind) {
        let tile = match self.board.discards.pop() {
            Some(tile) => tile,
            None => {
                error!("claim with an empty discard pile");
                return;
            }
        };
        self.board.players[seat].hand.add(tile);
        let mut starter = 0;
        if kind == ClaimKind::Chow {
            let starters = self.board.players[seat].hand.chow_starters(tile);
            starter = if starters.len() == 1 {
                starters[0]
            } else {
                let state = self.board.state_for(seat);
                self.actors[seat].select_chow_starter(&state, &starters, tile)
            };
        }
        self.board.players[seat].hand.reveal_claim(tile, kind, starter);
        self.board.players[seat].hand.sort();
        self.notify(Event::claim(seat, kind, tile));
        self.check_win(seat);
    }

    fn check_win(&mut self, seat: Seat) {
        if is_winning_hand(&self.board.players[seat].hand) {
            self.settle(Some(seat));
        }
    }

    // Every seat banks its hand value for the round; only the winner gets
    // the win bonuses. Per-round gains are capped before accumulation.
    fn settle(&mut self, winner: Option<Seat>) {
        self.board.running = false;
        self.winner = winner;
        let round_wind = self.board.round_wind;
        let mut win_event = None;
        for seat in 0..SEAT {
            let player = &self.board.players[seat];
            let won = winner == Some(seat);
            let (base, doubles) = max_score(&player.hand, &self.table, round_wind, player.seat_wind);
            let total = final_score(
                base,
                doubles,
                won,
                player.hand.is_concealed(),
                &player.hand.suits(),
                &player.hand.numbered_ranks(),
            );
            let gained = total.min(SESSION_CAP);
            self.board.players[seat].score += gained;
            if won {
                self.board.players[seat].wins += 1;
                win_event = Some(Event::win(seat, base, doubles, gained));
            }
        }
        if let Some(event) = win_event {
            self.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::create_actor;

    fn test_actors() -> [Box<dyn Actor>; SEAT] {
        [
            create_actor("TileCount"),
            create_actor("TileCount"),
            create_actor("Random"),
            create_actor("Random"),
        ]
    }

    #[test]
    fn test_round_terminates() {
        let mut game = Game::new(3, test_actors(), vec![]);
        let result = game.play_round();
        assert!(!game.board().running);
        for seat in 0..SEAT {
            assert!(result.scores[seat] >= 0);
            assert!(result.scores[seat] <= SESSION_CAP);
        }
        if let Some(winner) = result.winner {
            assert_eq!(game.board().players[winner].wins, 1);
        }
    }

    #[test]
    fn test_session_accumulates() {
        let mut game = Game::new(11, test_actors(), vec![]);
        let mut previous = [0; SEAT];
        for round in 0..4 {
            let result = game.play_round();
            for seat in 0..SEAT {
                assert!(result.scores[seat] >= previous[seat]);
                assert!(result.scores[seat] - previous[seat] <= SESSION_CAP);
            }
            previous = result.scores;
            assert_eq!(game.board().round, round);
            game.next_round();
        }
        // a full cycle advances the round wind once
        assert_eq!(game.board().round_wind, Wind(3));
        assert_eq!(game.board().players[0].seat_wind, Wind(0));
    }

    #[test]
    fn test_hand_sizes_after_round() {
        let mut game = Game::new(5, test_actors(), vec![]);
        game.play_round();
        for player in game.board().players.iter() {
            assert!(player.hand.len() >= HAND_SIZE);
            // two kongs over a 14-tile base is the realistic ceiling
            assert!(player.hand.len() <= HAND_SIZE + 3);
        }
    }
}
