mod event_printer;
mod event_writer;

use std::fmt;

use crate::model::*;

pub use event_printer::EventPrinter;
pub use event_writer::EventWriter;

// [Listener]
// Observes the game. Called after the board has been updated for the event.
pub trait Listener {
    fn notify_event(&mut self, _board: &Board, _event: &Event) {}
}

impl fmt::Debug for dyn Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener")
    }
}
