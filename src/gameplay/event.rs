use super::action::ResolvedAction;
use super::seat::SeatId;
use crate::cards::street::Street;
use crate::Chips;

pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Deal,
    BlindPost,
    Action,
    Street,
    Showdown,
    PotAward,
}

/// One append-only entry in a game's history. `hand_number` is the
/// partition key post-hoc queries use to recover "the current hand"; it is
/// never mutated once an entry is written.
#[derive(Debug, Clone)]
pub struct Event {
    pub hand_number: u64,
    pub kind: EventKind,
    pub seat: Option<SeatId>,
    pub action: Option<ResolvedAction>,
    pub amount: Chips,
    pub pot: Chips,
    pub street: Street,
    pub description: String,
}

/// The canonical, ordered record of everything observable that happened
/// across a session's hands. Bounded at `capacity` entries — beyond that,
/// the oldest are dropped, matching the reference's 1,000-entry cap.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: std::collections::VecDeque<Event>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: std::collections::VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn push(&mut self, event: Event) {
        log::trace!(
            "hand {} [{}] {}{}",
            event.hand_number,
            event.street,
            event
                .seat
                .map(|s| format!("seat {s} "))
                .unwrap_or_default(),
            event.description
        );
        self.entries.push_back(event);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter()
    }

    pub fn for_hand(&self, hand_number: u64) -> Vec<&Event> {
        self.entries
            .iter()
            .filter(|e| e.hand_number == hand_number)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(hand_number: u64, description: &str) -> Event {
        Event {
            hand_number,
            kind: EventKind::Action,
            seat: None,
            action: None,
            amount: 0,
            pot: 0,
            street: Street::Preflop,
            description: description.to_string(),
        }
    }

    #[test]
    fn drops_oldest_past_capacity() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.push(event(0, &format!("e{i}")));
        }
        assert_eq!(log.len(), 3);
        let kept: Vec<&str> = log.all().map(|e| e.description.as_str()).collect();
        assert_eq!(kept, vec!["e2", "e3", "e4"]);
    }

    #[test]
    fn for_hand_filters_by_partition() {
        let mut log = EventLog::new(100);
        log.push(event(1, "a"));
        log.push(event(2, "b"));
        log.push(event(2, "c"));
        assert_eq!(log.for_hand(2).len(), 2);
        assert_eq!(log.for_hand(1).len(), 1);
        assert_eq!(log.for_hand(3).len(), 0);
    }
}
