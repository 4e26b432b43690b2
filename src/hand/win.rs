use super::dlx::find_exact_covers;
use super::group::{enumerate_groups, GroupKind};
use crate::model::*;

// A hand wins when some exact cover of all its tile slots consists of
// exactly five groups, at least one of them a pair. Kongs make covers of
// more than 14 slots possible, so only undersized hands are rejected
// outright.
pub fn is_winning_hand(hand: &Hand) -> bool {
    if hand.len() < FULL_HAND {
        return false;
    }

    let groups = enumerate_groups(hand);
    if groups.len() < WINNING_GROUPS {
        return false;
    }
    if !groups.iter().any(|g| g.kind == GroupKind::Pair) {
        return false;
    }

    // every slot must appear in at least one candidate group
    let covered: u32 = groups.iter().fold(0, |m, g| m | g.mask());
    if covered != (1u32 << hand.len()) - 1 {
        return false;
    }

    find_exact_covers(&groups, hand.len()).iter().any(|cover| {
        cover.len() == WINNING_GROUPS
            && cover.iter().any(|&i| groups[i].kind == GroupKind::Pair)
    })
}

#[cfg(test)]
use crate::model::parse_hand;

#[test]
fn test_standard_win() {
    // chow + pong + chow + pong + pair
    let hand = parse_hand("c1 c2 c3 b5 b5 b5 k7 k8 k9 dG dG dG wN wN");
    assert!(is_winning_hand(&hand));
}

#[test]
fn test_distinct_tiles_lose() {
    let hand = parse_hand("c1 c2 c4 c5 c7 c8 b1 b2 b4 b5 b7 b8 k1 k2");
    assert!(!is_winning_hand(&hand));
}

#[test]
fn test_two_kongs_win() {
    // two kongs stretch the hand to 16 slots
    let hand = parse_hand("c1 c1 c1 c1 b5 b5 b5 b5 k9 k9 k9 dR dR dR wE wE");
    assert!(is_winning_hand(&hand));
}

#[test]
fn test_no_pair_loses() {
    // four melds plus two loose tiles, no pair anywhere
    let hand = parse_hand("c1 c2 c3 c4 c5 c6 b1 b2 b3 b4 b5 b6 k1 k2");
    assert!(!is_winning_hand(&hand));
}

#[test]
fn test_undersized_hand_loses() {
    let hand = parse_hand("c1 c2 c3 b5 b5 b5 k7 k8 k9 dG dG dG wN");
    assert!(!is_winning_hand(&hand));
}

#[test]
fn test_six_group_cover_is_not_a_win() {
    // seven pairs cover everything with the wrong group count
    let hand = parse_hand("c1 c1 c4 c4 c7 c7 b2 b2 b8 b8 k3 k3 wE wE");
    assert!(!is_winning_hand(&hand));
}

#[test]
fn test_claimed_groups_still_win() {
    let hand = parse_hand("c1* c2* c3* b5* b5* b5* k7 k8 k9 dG dG dG wN wN");
    assert!(is_winning_hand(&hand));
}

#[test]
fn test_multiple_covers() {
    // nine consecutive circles decompose several ways, one of them wins
    let hand = parse_hand("c1 c1 c1 c2 c2 c2 c3 c3 c3 c4 c5 c6 wS wS");
    assert!(is_winning_hand(&hand));
}
