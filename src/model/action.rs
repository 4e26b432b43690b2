use super::*;

// [ClaimKind]
// A call on another player's freshest discard. The derived ordering is the
// arbitration priority (kong beats pong beats chow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClaimKind {
    Chow,
    Pong,
    Kong,
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimKind::Chow => "chow",
            ClaimKind::Pong => "pong",
            ClaimKind::Kong => "kong",
        };
        write!(f, "{}", s)
    }
}

#[test]
fn test_claim_priority() {
    assert!(ClaimKind::Kong > ClaimKind::Pong);
    assert!(ClaimKind::Pong > ClaimKind::Chow);
}
