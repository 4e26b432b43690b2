use rand::prelude::*;

use crate::model::*;

// Builds the shuffled wall: four copies of every tile kind, 136 in total.
// The same seed always produces the same wall.
pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut wall = Vec::with_capacity(WALL_SIZE);
    for &suit in Suit::ALL.iter() {
        for rank in suit.ranks() {
            for _ in 0..TILE_COPIES {
                wall.push(Tile::new(suit, rank));
            }
        }
    }
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

#[test]
fn test_wall_composition() {
    let wall = create_wall(1);
    assert_eq!(wall.len(), WALL_SIZE);
    for &suit in Suit::ALL.iter() {
        for rank in suit.ranks() {
            let tile = Tile::new(suit, rank);
            let count = wall.iter().filter(|&&t| t == tile).count();
            assert_eq!(count, TILE_COPIES, "{}", tile.name());
        }
    }
    assert!(wall.iter().all(|t| t.is_hidden()));
}

#[test]
fn test_wall_seeded() {
    assert_eq!(create_wall(42), create_wall(42));
    assert_ne!(create_wall(42), create_wall(43));
}
