use super::*;

// [Event]
// Everything listeners are told about. One JSON object per event when
// serialized, discriminated by "type".
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Begin(EventBegin),       // once per game
    New(EventNew),           // new round dealt
    Deal(EventDeal),         // wall draw
    Discard(EventDiscard),   // tile to the pile
    Claim(EventClaim),       // pile pickup
    Win(EventWin),           // winning hand declared
    Exhausted(EventExhausted), // wall ran out
    End(EventEnd),           // once per game
}

impl Event {
    #[inline]
    pub fn begin(seed: u64) -> Self {
        Self::Begin(EventBegin { seed })
    }

    #[inline]
    pub fn new_round(round: usize, round_wind: Wind, dealer: Seat) -> Self {
        Self::New(EventNew {
            round,
            round_wind,
            dealer,
        })
    }

    #[inline]
    pub fn deal(seat: Seat, tile: Tile) -> Self {
        Self::Deal(EventDeal { seat, tile })
    }

    #[inline]
    pub fn discard(seat: Seat, tile: Tile) -> Self {
        Self::Discard(EventDiscard { seat, tile })
    }

    #[inline]
    pub fn claim(seat: Seat, kind: ClaimKind, tile: Tile) -> Self {
        Self::Claim(EventClaim { seat, kind, tile })
    }

    #[inline]
    pub fn win(seat: Seat, base: Score, doubles: u32, score: Score) -> Self {
        Self::Win(EventWin {
            seat,
            base,
            doubles,
            score,
        })
    }

    #[inline]
    pub fn exhausted() -> Self {
        Self::Exhausted(EventExhausted {})
    }

    #[inline]
    pub fn end(scores: [Score; SEAT]) -> Self {
        Self::End(EventEnd { scores })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventBegin {
    pub seed: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventNew {
    pub round: usize,
    pub round_wind: Wind,
    pub dealer: Seat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventDeal {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventClaim {
    pub seat: Seat,
    pub kind: ClaimKind,
    pub tile: Tile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventWin {
    pub seat: Seat,
    pub base: Score,
    pub doubles: u32,
    pub score: Score, // capped value actually added to the session total
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventExhausted {}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventEnd {
    pub scores: [Score; SEAT],
}
