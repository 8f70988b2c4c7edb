use std::collections::VecDeque;

use crate::api::types::{ActivityEntry, ActivityKind};
use crate::core::rng::Rng;
use crate::i18n::Strings;

/// Entries kept on the ticker.
pub const FEED_CAPACITY: usize = 3;

/// Newest-first ticker of recent activity, capped at `FEED_CAPACITY`.
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    entries: VecDeque<ActivityEntry>,
    next_id: u64,
}

impl ActivityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, evicting the oldest past capacity. Returns its id.
    pub fn push(&mut self, text: String, kind: ActivityKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push_front(ActivityEntry { id, text, kind });
        self.entries.truncate(FEED_CAPACITY);
        id
    }

    /// Make up another player's activity, in the current language.
    pub fn push_synthetic(&mut self, rng: &mut Rng, strings: &Strings) -> u64 {
        let address = format!("0x{}...{}", rng.hex(4), rng.hex(4));
        let (verb, kind) = match rng.next_int(3) {
            0 => (strings.footer_failed, ActivityKind::Fail),
            1 => (strings.footer_joined, ActivityKind::Entry),
            _ => (strings.footer_thinking, ActivityKind::Entry),
        };
        self.push(format!("{address} {verb}"), kind)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
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
    use crate::api::types::Language;
    use crate::i18n::strings;

    #[test]
    fn never_exceeds_capacity() {
        let mut feed = ActivityFeed::new();
        for i in 0..10 {
            feed.push(format!("entry {i}"), ActivityKind::Entry);
            assert!(feed.len() <= FEED_CAPACITY);
        }
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn newest_first_with_increasing_ids() {
        let mut feed = ActivityFeed::new();
        let a = feed.push("a".into(), ActivityKind::Fail);
        let b = feed.push("b".into(), ActivityKind::Win);
        assert!(b > a);
        let first = feed.entries().next().unwrap();
        assert_eq!(first.text, "b");
        assert_eq!(first.kind, ActivityKind::Win);
    }

    #[test]
    fn synthetic_entries_use_language_verbs() {
        let mut feed = ActivityFeed::new();
        let mut rng = Rng::new(11);
        let t = strings(Language::Es);
        for _ in 0..6 {
            feed.push_synthetic(&mut rng, t);
        }
        for entry in feed.entries() {
            assert!(entry.text.starts_with("0x"));
            assert!(
                entry.text.ends_with(t.footer_failed)
                    || entry.text.ends_with(t.footer_joined)
                    || entry.text.ends_with(t.footer_thinking)
            );
            assert_ne!(entry.kind, ActivityKind::Win);
        }
    }
}
