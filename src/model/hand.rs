use std::collections::BTreeSet;

use super::*;

// [Hand]
// An ordered tile vector. 13 tiles while waiting, 14 between a draw (or a
// discard pickup) and the following discard. Revealed tiles stay in the
// vector next to hidden ones; only hidden tiles may be discarded.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn get(&self, index: Index) -> Tile {
        self.tiles[index]
    }

    pub fn sort(&mut self) {
        self.tiles.sort();
    }

    // starting hand from the wall
    pub fn deal_from(&mut self, wall: &mut Vec<Tile>) {
        assert!(self.tiles.is_empty());
        for _ in 0..HAND_SIZE {
            self.tiles.push(wall.pop().unwrap());
        }
        self.sort();
    }

    pub fn draw_from(&mut self, wall: &mut Vec<Tile>) -> Option<Tile> {
        let tile = wall.pop()?;
        self.tiles.push(tile);
        Some(tile)
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn discard(&mut self, index: Index) -> Tile {
        self.tiles.remove(index)
    }

    // indices a player may legally discard
    pub fn valid_discards(&self) -> Vec<Index> {
        (0..self.tiles.len())
            .filter(|&i| self.tiles[i].is_hidden())
            .collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_hidden()).count()
    }

    pub fn is_concealed(&self) -> bool {
        self.tiles.iter().all(|t| t.is_hidden())
    }

    // the part of the hand opponents can see
    pub fn visible_hand(&self) -> Hand {
        Hand {
            tiles: self
                .tiles
                .iter()
                .filter(|t| !t.is_hidden())
                .cloned()
                .collect(),
        }
    }

    pub fn count_of(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn count_hidden(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .filter(|&&t| t == tile && t.is_hidden())
            .count()
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.tiles.iter().filter(|t| t.suit == suit).count()
    }

    pub fn suits(&self) -> BTreeSet<Suit> {
        self.tiles.iter().map(|t| t.suit).collect()
    }

    pub fn numbered_ranks(&self) -> BTreeSet<Rank> {
        self.tiles
            .iter()
            .filter(|t| t.suit.is_numbered())
            .map(|t| t.rank)
            .collect()
    }

    pub fn can_kong(&self, tile: Tile) -> bool {
        self.count_hidden(tile) == 3
    }

    pub fn can_pong(&self, tile: Tile) -> bool {
        self.count_hidden(tile) == 2
    }

    // Ranks that can start a run of three built from the claimed tile plus
    // hidden tiles of the same suit.
    pub fn chow_starters(&self, tile: Tile) -> Vec<Rank> {
        if !tile.suit.is_numbered() {
            return vec![];
        }
        let mut ranks = BTreeSet::new();
        ranks.insert(tile.rank);
        for t in &self.tiles {
            if t.is_hidden() && t.suit == tile.suit && t.rank + 2 >= tile.rank && t.rank <= tile.rank + 2
            {
                ranks.insert(t.rank);
            }
        }
        ranks
            .iter()
            .cloned()
            .filter(|&r| {
                r <= tile.rank
                    && tile.rank <= r + 2
                    && ranks.contains(&(r + 1))
                    && ranks.contains(&(r + 2))
            })
            .collect()
    }

    pub fn can_chow(&self, tile: Tile) -> bool {
        !self.chow_starters(tile).is_empty()
    }

    // Claims this hand could make on a discard. At most one kind is offered:
    // kong beats pong, and a chow is only possible for the next player in
    // turn order.
    pub fn available_claims(&self, tile: Tile, is_next_player: bool) -> Vec<ClaimKind> {
        if self.can_kong(tile) {
            vec![ClaimKind::Kong]
        } else if self.can_pong(tile) {
            vec![ClaimKind::Pong]
        } else if is_next_player && self.can_chow(tile) {
            vec![ClaimKind::Chow]
        } else {
            vec![]
        }
    }

    // Reveals the tiles of a claimed combination. The claimed tile has
    // already been added to the hand and is still flagged hidden.
    pub fn reveal_claim(&mut self, tile: Tile, kind: ClaimKind, chow_starter: Rank) {
        match kind {
            ClaimKind::Kong => self.reveal_copies(tile, 4),
            ClaimKind::Pong => self.reveal_copies(tile, 3),
            ClaimKind::Chow => {
                for rank in chow_starter..chow_starter + 3 {
                    self.reveal_one(Tile::new(tile.suit, rank));
                }
            }
        }
    }

    fn reveal_copies(&mut self, tile: Tile, n: usize) {
        let mut left = n;
        for t in self.tiles.iter_mut() {
            if left == 0 {
                break;
            }
            if *t == tile && t.is_hidden() {
                t.set_visible();
                left -= 1;
            }
        }
    }

    fn reveal_one(&mut self, tile: Tile) {
        for t in self.tiles.iter_mut() {
            if *t == tile && t.is_hidden() {
                t.set_visible();
                return;
            }
        }
    }

    // multi-line listing with indices, for interactive play
    pub fn describe(&self) -> String {
        let mut s = String::new();
        for (i, t) in self.tiles.iter().enumerate() {
            let vis = if t.is_hidden() { "Hidden" } else { "Open" };
            s += &format!("{:2}: {} ({})\n", i, t.name(), vis);
        }
        s.pop();
        s
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", symbols.join(" "))
    }
}

#[cfg(test)]
pub fn parse_hand(exp: &str) -> Hand {
    let tiles = exp
        .split_whitespace()
        .map(|s| Tile::parse(s).unwrap())
        .collect();
    Hand::from_tiles(tiles)
}

#[test]
fn test_hand_size_through_turns() {
    let mut wall = crate::control::create_wall(7);
    let mut hand = Hand::new();
    hand.deal_from(&mut wall);
    assert_eq!(hand.len(), HAND_SIZE);
    for _ in 0..10 {
        hand.draw_from(&mut wall).unwrap();
        assert_eq!(hand.len(), FULL_HAND);
        let valid = hand.valid_discards();
        hand.discard(valid[0]);
        assert_eq!(hand.len(), HAND_SIZE);
    }
}

#[test]
fn test_valid_discards_hidden_only() {
    let mut hand = parse_hand("c1 c1 c1 b5 b5 b5 k9");
    hand.reveal_copies(Tile::new(Suit::Circles, 1), 3);
    assert_eq!(hand.valid_discards(), vec![3, 4, 5, 6]);
}

#[test]
fn test_chow_starters() {
    let hand = parse_hand("b3 b4 b6 b7 k1 k2");
    let t = Tile::new(Suit::Bamboos, 5);
    assert_eq!(hand.chow_starters(t), vec![3, 4, 5]);
    assert!(hand.chow_starters(Tile::new(Suit::Bamboos, 1)).is_empty());
    assert!(hand.chow_starters(Tile::new(Suit::Winds, 1)).is_empty());
    // revealed tiles cannot feed a new chow
    let hand = parse_hand("b3* b4* k1 k2");
    assert!(hand.chow_starters(t).is_empty());
}

#[test]
fn test_available_claims() {
    let hand = parse_hand("c5 c5 c5 b1 b2");
    let c5 = Tile::new(Suit::Circles, 5);
    assert_eq!(hand.available_claims(c5, false), vec![ClaimKind::Kong]);
    let hand = parse_hand("c5 c5 b1 b2");
    assert_eq!(hand.available_claims(c5, false), vec![ClaimKind::Pong]);
    let hand = parse_hand("b1 b2 c9");
    let b3 = Tile::new(Suit::Bamboos, 3);
    assert_eq!(hand.available_claims(b3, true), vec![ClaimKind::Chow]);
    assert_eq!(hand.available_claims(b3, false), vec![]);
}

#[test]
fn test_reveal_claim_pong() {
    let mut hand = parse_hand("c5 c5 b1 b2");
    let c5 = Tile::new(Suit::Circles, 5);
    hand.add(c5);
    hand.reveal_claim(c5, ClaimKind::Pong, 0);
    assert_eq!(hand.hidden_count(), 2);
    assert_eq!(hand.count_of(c5) - hand.count_hidden(c5), 3);
}
