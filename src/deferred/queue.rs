//! FIFO deferred action queue.

use std::collections::VecDeque;
use std::fmt;

use super::DeferredAction;
use crate::core::player::PlayerId;

/// Ordered work list of deferred actions.
///
/// Only the queue's own operations reorder or remove entries; the driver
/// pops from the head and never skips ahead.
#[derive(Default)]
pub struct DeferredActionQueue {
    actions: VecDeque<Box<dyn DeferredAction>>,
}

impl DeferredActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail.
    pub fn push(&mut self, action: Box<dyn DeferredAction>) {
        log::debug!(
            "deferred '{}' for {} ({} ahead)",
            action.description(),
            action.player(),
            self.actions.len()
        );
        self.actions.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of queued actions owned by `player`.
    #[must_use]
    pub fn pending_for(&self, player: PlayerId) -> usize {
        self.actions.iter().filter(|a| a.player() == player).count()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&dyn DeferredAction> {
        self.actions.front().map(|a| a.as_ref())
    }

    pub fn pop_front(&mut self) -> Option<Box<dyn DeferredAction>> {
        self.actions.pop_front()
    }

    /// Drop the head action without running it.
    pub fn skip_next(&mut self) -> Option<Box<dyn DeferredAction>> {
        let skipped = self.actions.pop_front();
        if let Some(action) = &skipped {
            log::info!("skipped deferred '{}' for {}", action.description(), action.player());
        }
        skipped
    }

    /// Remove every action owned by `player`, keeping the others in order.
    /// Returns how many were removed.
    pub fn clear_player(&mut self, player: PlayerId) -> usize {
        let before = self.actions.len();
        self.actions.retain(|a| a.player() != player);
        let removed = before - self.actions.len();
        if removed > 0 {
            log::info!("discarded {removed} deferred action(s) for {player}");
        }
        removed
    }

    /// Descriptions in queue order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.description())
    }
}

impl fmt::Debug for DeferredActionQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.actions.iter().map(|a| (a.player(), a.description())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::SimpleDeferredAction;
    use crate::effects::EffectOutcome;

    fn action(player: u8, name: &str) -> Box<dyn DeferredAction> {
        Box::new(SimpleDeferredAction::new(PlayerId(player), name, |_| {
            Ok(EffectOutcome::Done)
        }))
    }

    #[test]
    fn test_queue_fifo() {
        let mut queue = DeferredActionQueue::new();
        queue.push(action(0, "a"));
        queue.push(action(1, "b"));
        queue.push(action(0, "c"));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().map(|a| a.description()), Some("a"));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_front())
            .map(|a| a.description().to_string())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pending_for() {
        let mut queue = DeferredActionQueue::new();
        queue.push(action(0, "a"));
        queue.push(action(1, "b"));
        queue.push(action(0, "c"));

        assert_eq!(queue.pending_for(PlayerId(0)), 2);
        assert_eq!(queue.pending_for(PlayerId(1)), 1);
        assert_eq!(queue.pending_for(PlayerId(2)), 0);
    }

    #[test]
    fn test_skip_next() {
        let mut queue = DeferredActionQueue::new();
        queue.push(action(0, "a"));
        queue.push(action(0, "b"));

        assert_eq!(queue.skip_next().map(|a| a.description().to_string()), Some("a".into()));
        assert_eq!(queue.descriptions().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_clear_player_keeps_others_in_order() {
        let mut queue = DeferredActionQueue::new();
        queue.push(action(0, "a"));
        queue.push(action(1, "b"));
        queue.push(action(0, "c"));
        queue.push(action(1, "d"));

        assert_eq!(queue.clear_player(PlayerId(0)), 2);
        assert_eq!(queue.descriptions().collect::<Vec<_>>(), vec!["b", "d"]);
        assert_eq!(queue.clear_player(PlayerId(0)), 0);
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut queue = DeferredActionQueue::new();
        queue.push(action(1, "place ocean"));
        assert!(format!("{queue:?}").contains("place ocean"));
    }
}
