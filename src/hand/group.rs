use crate::model::*;

// [GroupKind]
// Decided once at enumeration time; scoring never re-derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Pair,
    Chow,
    Pong,
    Kong,
}

// [Group]
// A candidate scoring group, as slot indices into the hand it was
// enumerated from. Indices are strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub kind: GroupKind,
    pub indices: Vec<Index>,
}

impl Group {
    fn new(kind: GroupKind, indices: Vec<Index>) -> Self {
        Self { kind, indices }
    }

    // slot bitmask, for disjointness tests
    pub fn mask(&self) -> u32 {
        self.indices.iter().fold(0, |m, &i| m | 1 << i)
    }
}

// Two identical tiles, both hidden.
pub fn pairs(hand: &Hand) -> Vec<Group> {
    let n = hand.len();
    let mut groups = vec![];
    for i in 0..n {
        if !hand.get(i).is_hidden() {
            continue;
        }
        for j in i + 1..n {
            if hand.get(j).is_hidden() && hand.get(i) == hand.get(j) {
                groups.push(Group::new(GroupKind::Pair, vec![i, j]));
            }
        }
    }
    groups
}

// Three consecutive ranks of one numbered suit, uniform visibility.
pub fn chows(hand: &Hand) -> Vec<Group> {
    let n = hand.len();
    let mut groups = vec![];
    for i in 0..n {
        let a = hand.get(i);
        if !a.suit.is_numbered() {
            continue;
        }
        for j in i + 1..n {
            let b = hand.get(j);
            if b.suit != a.suit || b.is_hidden() != a.is_hidden() {
                continue;
            }
            for k in j + 1..n {
                let c = hand.get(k);
                if c.suit != a.suit || c.is_hidden() != a.is_hidden() {
                    continue;
                }
                let mut ranks = [a.rank, b.rank, c.rank];
                ranks.sort_unstable();
                if ranks[1] == ranks[0] + 1 && ranks[2] == ranks[1] + 1 {
                    groups.push(Group::new(GroupKind::Chow, vec![i, j, k]));
                }
            }
        }
    }
    groups
}

// Three identical tiles, uniform visibility.
pub fn pongs(hand: &Hand) -> Vec<Group> {
    let n = hand.len();
    let mut groups = vec![];
    for i in 0..n {
        let a = hand.get(i);
        for j in i + 1..n {
            let b = hand.get(j);
            if b != a || b.is_hidden() != a.is_hidden() {
                continue;
            }
            for k in j + 1..n {
                let c = hand.get(k);
                if c == a && c.is_hidden() == a.is_hidden() {
                    groups.push(Group::new(GroupKind::Pong, vec![i, j, k]));
                }
            }
        }
    }
    groups
}

// Four identical tiles. The only kind allowed to mix hidden and revealed
// tiles, since a claimed kong reveals tiles the owner drew hidden.
pub fn kongs(hand: &Hand) -> Vec<Group> {
    let n = hand.len();
    let mut groups = vec![];
    for i in 0..n {
        let a = hand.get(i);
        for j in i + 1..n {
            if hand.get(j) != a {
                continue;
            }
            for k in j + 1..n {
                if hand.get(k) != a {
                    continue;
                }
                for l in k + 1..n {
                    if hand.get(l) == a {
                        groups.push(Group::new(GroupKind::Kong, vec![i, j, k, l]));
                    }
                }
            }
        }
    }
    groups
}

// Every candidate group of the hand, concatenated in a fixed order: pairs,
// then chows, then pongs, then kongs. Both the win checker and the score
// search consume this list, so ties resolve the same way everywhere.
pub fn enumerate_groups(hand: &Hand) -> Vec<Group> {
    let mut groups = pairs(hand);
    groups.append(&mut chows(hand));
    groups.append(&mut pongs(hand));
    groups.append(&mut kongs(hand));
    groups
}

#[cfg(test)]
use crate::model::parse_hand;

#[test]
fn test_pairs_require_hidden() {
    let hand = parse_hand("c5 c5 c5* b1");
    let found = pairs(&hand);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].indices, vec![0, 1]);
}

#[test]
fn test_no_pairs_in_distinct_hand() {
    let hand = parse_hand("c1 c2 c4 c5 c7 c8 b1 b2 b4 b5 b7 b8 k1 k2");
    assert!(pairs(&hand).is_empty());
}

#[test]
fn test_chow_uniform_visibility() {
    let hand = parse_hand("b3 b4 b5");
    assert_eq!(chows(&hand).len(), 1);
    let hand = parse_hand("b3* b4* b5*");
    assert_eq!(chows(&hand).len(), 1);
    let hand = parse_hand("b3 b4* b5");
    assert!(chows(&hand).is_empty());
    // honors never form runs
    let hand = parse_hand("wE wS wW");
    assert!(chows(&hand).is_empty());
}

#[test]
fn test_kong_allows_mixed_visibility() {
    let hand = parse_hand("k7 k7 k7 k7*");
    assert!(pongs(&hand).len() == 1); // the three hidden copies
    assert_eq!(kongs(&hand).len(), 1);
}

#[test]
fn test_enumeration_order() {
    let hand = parse_hand("c1 c1 c1 c2 c3");
    let groups = enumerate_groups(&hand);
    let kinds: Vec<GroupKind> = groups.iter().map(|g| g.kind).collect();
    // pairs (3 ways), one chow per c1 copy, one pong
    assert_eq!(
        kinds,
        vec![
            GroupKind::Pair,
            GroupKind::Pair,
            GroupKind::Pair,
            GroupKind::Chow,
            GroupKind::Chow,
            GroupKind::Chow,
            GroupKind::Pong,
        ]
    );
}

#[test]
fn test_group_mask() {
    let g = Group::new(GroupKind::Chow, vec![0, 2, 5]);
    assert_eq!(g.mask(), 0b100101);
}
