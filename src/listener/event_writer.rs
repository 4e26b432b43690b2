use serde_json::{json, Value};

use super::*;
use crate::util::common::{unixtime_now, write_to_file};

use crate::error;

// [EventWriter]
// Records every event and writes one JSON file per round under
// data/<start time>/.
#[derive(Debug, Default)]
pub struct EventWriter {
    start_time: u64,
    round_index: u32,
    record: Vec<Value>,
}

impl EventWriter {
    pub fn new() -> Self {
        Self {
            start_time: unixtime_now(),
            round_index: 0,
            record: vec![],
        }
    }
}

impl Listener for EventWriter {
    fn notify_event(&mut self, _board: &Board, event: &Event) {
        let mut flush = false;
        match event {
            Event::New(_) => self.record.clear(),
            Event::Win(_) | Event::Exhausted(_) => flush = true,
            _ => {}
        }
        self.record.push(json!(event));
        if flush {
            let path = format!("data/{}/{:02}.json", self.start_time, self.round_index);
            let contents = serde_json::to_string_pretty(&json!(self.record)).unwrap();
            if let Err(e) = write_to_file(&path, &contents) {
                error!("failed to write event log: {}", e);
            }
            self.record.clear();
            self.round_index += 1;
        }
    }
}
