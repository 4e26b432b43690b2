use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::*;

pub const WIND_NAMES: [&str; 4] = ["East", "South", "West", "North"];
pub const DRAGON_NAMES: [&str; 3] = ["Red", "Green", "White"];

const WIND_SYMBOLS: [char; 4] = ['E', 'S', 'W', 'N'];
const DRAGON_SYMBOLS: [char; 3] = ['R', 'G', 'W'];

// [Suit]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Circles,
    Bamboos,
    Characters,
    Winds,
    Dragons,
}

use Suit::*;

impl Suit {
    pub const ALL: [Suit; SUIT] = [Circles, Bamboos, Characters, Winds, Dragons];

    #[inline]
    pub fn is_numbered(self) -> bool {
        matches!(self, Circles | Bamboos | Characters)
    }

    #[inline]
    pub fn is_honor(self) -> bool {
        !self.is_numbered()
    }

    // valid ranks for this suit
    pub fn ranks(self) -> std::ops::Range<Rank> {
        match self {
            Winds => 0..4,
            Dragons => 0..3,
            _ => 1..10,
        }
    }

    pub fn symbol(self) -> char {
        ['c', 'b', 'k', 'w', 'd'][self as usize]
    }

    pub fn from_symbol(c: char) -> Result<Self, String> {
        Ok(match c {
            'c' => Circles,
            'b' => Bamboos,
            'k' => Characters,
            'w' => Winds,
            'd' => Dragons,
            _ => return Err(format!("unknown suit symbol: '{}'", c)),
        })
    }

    pub fn name(self) -> &'static str {
        ["Circles", "Bamboos", "Characters", "Winds", "Dragons"][self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// [Wind]
// Round wind and seat winds. The numeric value doubles as the rank of the
// matching wind tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind(pub usize);

impl Wind {
    pub const EAST: Wind = Wind(0);

    // East -> North -> West -> South -> East
    pub fn rotate(self) -> Self {
        Wind((self.0 + SEAT - 1) % SEAT)
    }

    pub fn name(self) -> &'static str {
        WIND_NAMES[self.0]
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// [Tile]
// Equality, ordering and hashing look at suit and rank only. The visibility
// flag starts hidden and flips at most once, when the tile is revealed as
// part of a claimed combination.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub suit: Suit,
    pub rank: Rank,
    hidden: bool,
}

impl Tile {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: true,
        }
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    // one-way transition, a revealed tile never hides again
    pub fn set_visible(&mut self) {
        self.hidden = false;
    }

    pub fn rank_name(&self) -> String {
        match self.suit {
            Winds => WIND_NAMES[self.rank].to_string(),
            Dragons => DRAGON_NAMES[self.rank].to_string(),
            _ => self.rank.to_string(),
        }
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.suit, self.rank_name())
    }

    fn rank_symbol(&self) -> char {
        match self.suit {
            Winds => WIND_SYMBOLS[self.rank],
            Dragons => DRAGON_SYMBOLS[self.rank],
            _ => std::char::from_digit(self.rank as u32, 10).unwrap(),
        }
    }

    // Parses a two-character symbol such as "c5", "wE" or "dG". A trailing
    // '*' marks the tile as revealed.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mut chars = s.chars();
        let suit = match chars.next() {
            Some(c) => Suit::from_symbol(c)?,
            None => return Err("empty tile symbol".to_string()),
        };
        let rank = chars
            .next()
            .and_then(|c| match suit {
                Winds => WIND_SYMBOLS.iter().position(|&w| w == c),
                Dragons => DRAGON_SYMBOLS.iter().position(|&d| d == c),
                _ => c
                    .to_digit(10)
                    .map(|d| d as Rank)
                    .filter(|r| suit.ranks().contains(r)),
            })
            .ok_or_else(|| format!("invalid tile symbol: '{}'", s))?;
        let mut tile = Self::new(suit, rank);
        match chars.next() {
            None => {}
            Some('*') if chars.next().is_none() => tile.set_visible(),
            Some(_) => return Err(format!("invalid tile symbol: '{}'", s)),
        }
        Ok(tile)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.suit, self.rank).cmp(&(other.suit, other.rank))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank_symbol())?;
        if !self.hidden {
            write!(f, "*")?;
        }
        Ok(())
    }
}

impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TileVisitor;

        impl<'de> serde::de::Visitor<'de> for TileVisitor {
            type Value = Tile;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a tile symbol such as \"c5\" or \"wE\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Tile::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TileVisitor)
    }
}

#[test]
fn test_tile_symbol() {
    let t = Tile::parse("c5").unwrap();
    assert_eq!(t, Tile::new(Circles, 5));
    assert!(t.is_hidden());
    assert_eq!(t.to_string(), "c5");

    let t = Tile::parse("dG*").unwrap();
    assert_eq!(t, Tile::new(Dragons, 1));
    assert!(!t.is_hidden());
    assert_eq!(t.to_string(), "dG*");
    assert_eq!(t.name(), "Dragons Green");

    assert_eq!(Tile::parse("wN").unwrap().rank, 3);
    assert!(Tile::parse("c0").is_err());
    assert!(Tile::parse("x5").is_err());
    assert!(Tile::parse("w5").is_err());
}

#[test]
fn test_tile_equality_ignores_visibility() {
    let hidden = Tile::new(Winds, 1);
    let mut revealed = Tile::new(Winds, 1);
    revealed.set_visible();
    assert_eq!(hidden, revealed);
    assert_eq!(hidden.cmp(&revealed), Ordering::Equal);
}

#[test]
fn test_wind_rotate() {
    let mut w = Wind::EAST;
    let order: Vec<usize> = (0..5)
        .map(|_| {
            let v = w.0;
            w = w.rotate();
            v
        })
        .collect();
    assert_eq!(order, vec![0, 3, 2, 1, 0]);
}
