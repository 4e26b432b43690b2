use crate::hand::*;
use crate::model::*;
use crate::util::common::*;

use crate::error;

// [CalculatorApp]
// Hand evaluation mode. Tiles are given as symbols, a trailing '*' marks a
// tile revealed:
//   C c1 c1 c1 b5 b5 b5 k2 k3 k4 dR* dR* dR* wE wE -r E -s S
// With -f the tiles are read from a JSON array of symbols instead.
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn run(&self) {
        if let Err(e) = self.process() {
            error!("{}", e);
        }
    }

    fn process(&self) -> Res {
        let mut symbols: Vec<String> = vec![];
        let mut file_path = String::new();
        let mut round_wind = Wind::EAST;
        let mut seat_wind = Wind::EAST;

        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-f" => file_path = next_value(&mut it, "-f"),
                "-r" => {
                    let v: String = next_value(&mut it, "-r");
                    round_wind = parse_wind(&v)?;
                }
                "-s" => {
                    let v: String = next_value(&mut it, "-s");
                    seat_wind = parse_wind(&v)?;
                }
                _ if s.starts_with('-') => {
                    return Err(format!("unknown option: {}", s).into());
                }
                _ => symbols.push(s.clone()),
            }
        }

        let tiles: Vec<Tile> = if !file_path.is_empty() {
            serde_json::from_str(&std::fs::read_to_string(&file_path)?)?
        } else {
            symbols
                .iter()
                .map(|s| Tile::parse(s))
                .collect::<Result<_, _>>()?
        };
        if tiles.is_empty() {
            return Err("no tiles specified".into());
        }

        let mut hand = Hand::from_tiles(tiles);
        hand.sort();
        println!("{}", hand.describe());
        println!();
        println!("{}", shape_summary(&hand));

        let table = ScoreTable::standard();
        let won = is_winning_hand(&hand);
        let (base, doubles) = max_score(&hand, &table, round_wind, seat_wind);
        let (vbase, vdoubles) = visible_score(&hand, &table, round_wind, seat_wind);
        println!("round wind: {}, seat wind: {}", round_wind, seat_wind);
        println!("winning hand: {}", won);
        println!(
            "max score: {} ({} doubled {} times)",
            base << doubles,
            base,
            doubles
        );
        println!(
            "visible score: {} ({} doubled {} times)",
            vbase << vdoubles,
            vbase,
            vdoubles
        );
        let total = final_score(
            base,
            doubles,
            won,
            hand.is_concealed(),
            &hand.suits(),
            &hand.numbered_ranks(),
        );
        if won {
            println!("final score with bonuses: {}", total);
        }
        Ok(())
    }
}

// how the hand decomposes: candidate groups by kind, and how many ways the
// tiles can be partitioned into groups with nothing left over
fn shape_summary(hand: &Hand) -> String {
    let groups = enumerate_groups(hand);
    let count = |kind| groups.iter().filter(|g| g.kind == kind).count();
    let covers = find_exact_covers(&groups, hand.len());
    format!(
        "{} candidate groups (pairs {}, chows {}, pongs {}, kongs {}); {} exact covers",
        groups.len(),
        count(GroupKind::Pair),
        count(GroupKind::Chow),
        count(GroupKind::Pong),
        count(GroupKind::Kong),
        covers.len()
    )
}

fn parse_wind(s: &str) -> Result<Wind, String> {
    let index = match s {
        "E" | "East" => 0,
        "S" | "South" => 1,
        "W" | "West" => 2,
        "N" | "North" => 3,
        _ => return Err(format!("unknown wind: '{}'", s)),
    };
    Ok(Wind(index))
}

#[test]
fn test_shape_summary() {
    let hand = crate::model::parse_hand("c1 c2 c3 wS wS");
    assert_eq!(
        shape_summary(&hand),
        "2 candidate groups (pairs 1, chows 1, pongs 0, kongs 0); 1 exact covers"
    );
    // no pair and no run: nothing to count, nothing to cover
    let hand = crate::model::parse_hand("c1 c4 c7 b2");
    assert_eq!(
        shape_summary(&hand),
        "0 candidate groups (pairs 0, chows 0, pongs 0, kongs 0); 0 exact covers"
    );
}

#[test]
fn test_parse_wind() {
    assert_eq!(parse_wind("E").unwrap(), Wind(0));
    assert_eq!(parse_wind("North").unwrap(), Wind(3));
    assert!(parse_wind("X").is_err());
}
