use super::*;

// [DiscardPile]
// Shared face-up pile. Only the most recent discard can be claimed back.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DiscardPile {
    tiles: Vec<Tile>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn last(&self) -> Option<Tile> {
        self.tiles.last().cloned()
    }

    pub fn pop(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn count_of(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl fmt::Display for DiscardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", symbols.join(" "))
    }
}
