// Hand evaluation: candidate group enumeration, exact-cover win detection
// and score maximization over disjoint group selections.
mod dlx;
mod group;
mod score;
mod win;

pub use dlx::find_exact_covers;
pub use group::{enumerate_groups, GroupKind};
pub use score::{final_score, max_score, visible_score, ScoreTable};
pub use win::is_winning_hand;
