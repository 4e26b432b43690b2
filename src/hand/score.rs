use std::collections::{BTreeSet, HashMap};

use super::group::{enumerate_groups, Group, GroupKind};
use crate::model::*;

use GroupKind::*;
use Visibility::*;

// [Visibility]
// Visibility class of a whole group. Pairs, chows and pongs are uniform by
// construction; Mixed only ever applies to kongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hidden,
    Revealed,
    Mixed,
}

// (base points, times doubled)
pub type ScoreEntry = (Score, u32);

type ScoreKey = (GroupKind, Suit, Visibility, u8);

// [ScoreTable]
// Fixed lookup from (kind, suit, visibility, winds matched) to the group's
// base points and doubling count. Built once and passed to the scoring
// functions, so tests can inject alternative tables.
#[derive(Debug)]
pub struct ScoreTable {
    entries: HashMap<ScoreKey, ScoreEntry>,
}

impl ScoreTable {
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        let numbered = [Suit::Circles, Suit::Bamboos, Suit::Characters];

        // pairs are only enumerated fully hidden
        for &suit in Suit::ALL.iter() {
            let base = if suit.is_honor() { 2 } else { 0 };
            entries.insert((Pair, suit, Hidden, 0), (base, 0));
        }

        // chows never score on their own
        for &suit in numbered.iter() {
            entries.insert((Chow, suit, Hidden, 0), (0, 0));
            entries.insert((Chow, suit, Revealed, 0), (0, 0));
        }

        for &suit in numbered.iter().chain(&[Suit::Dragons]) {
            entries.insert((Pong, suit, Hidden, 0), (4, 0));
            entries.insert((Pong, suit, Revealed, 0), (8, 0));
        }
        for winds in 0..=2u8 {
            entries.insert((Pong, Suit::Winds, Hidden, winds), (8, winds as u32));
            entries.insert((Pong, Suit::Winds, Revealed, winds), (16, winds as u32));
        }

        // a kong claimed from the pile keeps its three drawn tiles hidden,
        // which counts as revealed for scoring
        for &suit in numbered.iter().chain(&[Suit::Dragons]) {
            for &vis in &[Hidden, Revealed, Mixed] {
                let base = if vis == Hidden { 8 } else { 16 };
                entries.insert((Kong, suit, vis, 0), (base, 1));
            }
        }
        for winds in 0..=2u8 {
            for &vis in &[Hidden, Revealed, Mixed] {
                let base = if vis == Hidden { 16 } else { 32 };
                entries.insert((Kong, Suit::Winds, vis, winds), (base, winds as u32));
            }
        }

        Self { entries }
    }

    // The key space is fully enumerated in standard(); a miss means the
    // group classifier and the table went out of sync, which is fatal.
    pub fn get(&self, kind: GroupKind, suit: Suit, vis: Visibility, winds: u8) -> ScoreEntry {
        match self.entries.get(&(kind, suit, vis, winds)) {
            Some(&entry) => entry,
            None => panic!(
                "no score entry for {:?} {:?} {:?} winds={}",
                kind, suit, vis, winds
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn group_visibility(hand: &Hand, group: &Group) -> Visibility {
    let hidden = group
        .indices
        .iter()
        .filter(|&&i| hand.get(i).is_hidden())
        .count();
    if hidden == group.indices.len() {
        Hidden
    } else if hidden == 0 {
        Revealed
    } else {
        Mixed
    }
}

// Score of a single group under the given winds. Pongs and kongs of the
// wind matching the round or the seat score higher; both at once stack.
pub fn group_score(
    hand: &Hand,
    group: &Group,
    table: &ScoreTable,
    round_wind: Wind,
    seat_wind: Wind,
) -> ScoreEntry {
    let tile = hand.get(group.indices[0]);
    let mut winds = 0u8;
    if tile.suit == Suit::Winds && (group.kind == Pong || group.kind == Kong) {
        if tile.rank == round_wind.0 {
            winds += 1;
        }
        if tile.rank == seat_wind.0 {
            winds += 1;
        }
    }
    table.get(group.kind, tile.suit, group_visibility(hand, group), winds)
}

// Highest total base score over all selections of pairwise disjoint groups,
// together with the doubling count of that same selection. When two
// selections tie on base points the one enumerated first is kept, whatever
// its doubling count.
pub fn max_score(
    hand: &Hand,
    table: &ScoreTable,
    round_wind: Wind,
    seat_wind: Wind,
) -> ScoreEntry {
    let groups = enumerate_groups(hand);
    let scores: Vec<ScoreEntry> = groups
        .iter()
        .map(|g| group_score(hand, g, table, round_wind, seat_wind))
        .collect();
    best_selection(&groups, &scores, 0, 0)
}

fn best_selection(groups: &[Group], scores: &[ScoreEntry], from: usize, used: u32) -> ScoreEntry {
    let mut best = (0, 0);
    for i in from..groups.len() {
        let mask = groups[i].mask();
        if used & mask != 0 {
            continue;
        }
        let (base, doubles) = best_selection(groups, scores, i + 1, used | mask);
        if base + scores[i].0 > best.0 {
            best = (base + scores[i].0, doubles + scores[i].1);
        }
    }
    best
}

// What opponents can already tell a hand is worth: the maximum over its
// revealed tiles alone.
pub fn visible_score(
    hand: &Hand,
    table: &ScoreTable,
    round_wind: Wind,
    seat_wind: Wind,
) -> ScoreEntry {
    max_score(&hand.visible_hand(), table, round_wind, seat_wind)
}

// Final point value of a hand. The flat and multiplier bonuses only apply
// to the hand that actually won the round.
pub fn final_score(
    base: Score,
    doubles: u32,
    won: bool,
    concealed: bool,
    suits: &BTreeSet<Suit>,
    numbered_ranks: &BTreeSet<Rank>,
) -> Score {
    let mut base = base;
    let mut doubles = doubles;
    if won {
        base += 20;
        if concealed {
            base += 20;
        }

        let numbered = suits.iter().filter(|s| s.is_numbered()).count();
        if !suits.is_empty() && numbered == 0 {
            // honors only
            doubles += 4;
        } else if suits.len() == 1 {
            // a single numbered suit, nothing else
            doubles += 3;
        }
        if numbered == 1 {
            doubles += 2;
        }

        if numbered_ranks.len() == 1 {
            let rank = *numbered_ranks.iter().next().unwrap();
            if rank == 1 || rank == 9 {
                doubles += 4;
            }
        }
    }
    base << doubles
}

#[cfg(test)]
use crate::model::parse_hand;

#[test]
fn test_table_lookups() {
    let table = ScoreTable::standard();
    assert_eq!(table.get(Pong, Suit::Dragons, Revealed, 0), (8, 0));
    assert_eq!(table.get(Kong, Suit::Winds, Hidden, 2), (16, 2));
    assert_eq!(table.get(Chow, Suit::Bamboos, Revealed, 0), (0, 0));
    assert_eq!(table.get(Pair, Suit::Winds, Hidden, 0), (2, 0));
    assert_eq!(table.len(), 46);
}

#[test]
#[should_panic]
fn test_missing_entry_panics() {
    // chows of honors cannot exist
    ScoreTable::standard().get(Chow, Suit::Winds, Hidden, 0);
}

#[test]
fn test_revealed_dragons_pong() {
    let table = ScoreTable::standard();
    let hand = parse_hand("dR* dR* dR*");
    let (base, doubles) = max_score(&hand, &table, Wind::EAST, Wind::EAST);
    assert_eq!((base, doubles), (8, 0));
}

#[test]
fn test_double_wind_kong() {
    let table = ScoreTable::standard();
    // seat and round wind both South
    let hand = parse_hand("wS wS wS wS");
    let (base, doubles) = max_score(&hand, &table, Wind(1), Wind(1));
    assert_eq!((base, doubles), (16, 2));
    // neither wind matches
    let (base, doubles) = max_score(&hand, &table, Wind(0), Wind(2));
    assert_eq!((base, doubles), (16, 0));
}

#[test]
fn test_revealing_never_lowers_a_group() {
    let table = ScoreTable::standard();
    for &suit in Suit::ALL.iter() {
        if suit == Suit::Winds {
            continue;
        }
        let hidden = table.get(Pong, suit, Hidden, 0);
        let revealed = table.get(Pong, suit, Revealed, 0);
        assert!(revealed.0 >= hidden.0, "{:?}", suit);
    }
    for winds in 0..=2u8 {
        let hidden = table.get(Pong, Suit::Winds, Hidden, winds);
        let revealed = table.get(Pong, Suit::Winds, Revealed, winds);
        assert!(revealed.0 >= hidden.0);
    }
}

#[test]
fn test_max_score_idempotent() {
    let table = ScoreTable::standard();
    let hand = parse_hand("c1 c2 c3 b5 b5 b5 k7 k8 k9 dG dG dG wN wN");
    let first = max_score(&hand, &table, Wind::EAST, Wind::EAST);
    let second = max_score(&hand, &table, Wind::EAST, Wind::EAST);
    assert_eq!(first, second);
    // pong of bamboos 4 + pong of dragons 4 + pair of winds 2
    assert_eq!(first, (10, 0));
}

#[test]
fn test_max_score_prefers_pongs_over_chows() {
    let table = ScoreTable::standard();
    // the nine circles can split into three chows (0 points) or three pongs
    let hand = parse_hand("c1 c1 c1 c2 c2 c2 c3 c3 c3");
    let (base, _) = max_score(&hand, &table, Wind::EAST, Wind::EAST);
    assert_eq!(base, 12);
}

#[test]
fn test_visible_score_ignores_hidden() {
    let table = ScoreTable::standard();
    let hand = parse_hand("dR* dR* dR* b5 b5 b5 wN wN");
    assert_eq!(visible_score(&hand, &table, Wind::EAST, Wind::EAST), (8, 0));
}

#[test]
fn test_final_score_bonuses() {
    let suits: BTreeSet<Suit> = [Suit::Circles, Suit::Dragons].iter().cloned().collect();
    let ranks: BTreeSet<Rank> = [1, 2, 3].iter().cloned().collect();
    // not a win: no bonuses at all
    assert_eq!(final_score(10, 1, false, true, &suits, &ranks), 20);
    // win, concealed, one numbered suit beside honors (+2 doubles)
    assert_eq!(final_score(10, 0, true, true, &suits, &ranks), 200);

    // all one numbered suit: +3 (pure) stacks with +2 (single suit)
    let pure: BTreeSet<Suit> = [Suit::Bamboos].iter().cloned().collect();
    assert_eq!(final_score(4, 0, true, false, &pure, &ranks), 24 << 5);

    // honors only
    let honors: BTreeSet<Suit> = [Suit::Winds, Suit::Dragons].iter().cloned().collect();
    let no_ranks = BTreeSet::new();
    assert_eq!(final_score(16, 0, true, false, &honors, &no_ranks), 36 << 4);

    // every numbered tile a terminal of the same rank
    let nines: BTreeSet<Rank> = [9].iter().cloned().collect();
    let mixed: BTreeSet<Suit> = [Suit::Circles, Suit::Bamboos].iter().cloned().collect();
    assert_eq!(final_score(8, 0, true, false, &mixed, &nines), 28 << 4);
}
