//! Notification Queue
//!
//! Clock-driven toast bookkeeping with no DOM or timer dependencies.
//! Every entry carries its own deadlines; `tick` applies whatever is due.

/// Time an entry stays visible after being pushed
pub const HIDE_AFTER_MS: u64 = 5_000;

/// Time between hiding an entry and dropping it (fade-out window)
pub const FADE_OUT_MS: u64 = 500;

/// Toast flavour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// A single transient message
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
    hide_at: u64,
    remove_at: u64,
}

/// Ordered collection of notifications owned by one screen
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    last_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visible notification pushed at `now` (ms since epoch).
    ///
    /// Ids derive from the push timestamp but stay strictly increasing
    /// even when several pushes land on the same millisecond.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: u64) -> u64 {
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            visible: true,
            hide_at: now + HIDE_AFTER_MS,
            remove_at: now + HIDE_AFTER_MS + FADE_OUT_MS,
        });
        id
    }

    /// Apply every hide/remove transition due at `now`.
    /// Returns true if anything changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| now < n.remove_at);
        let mut changed = self.entries.len() != before;

        for n in self.entries.iter_mut().filter(|n| n.visible && now >= n.hide_at) {
            n.visible = false;
            changed = true;
        }
        changed
    }

    /// All entries still held, hidden ones included
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Entries currently shown, in push order
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(|n| n.visible)
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

    const T0: u64 = 1_700_000_000_000;

    fn messages(queue: &NotificationQueue) -> Vec<&str> {
        queue.visible().map(|n| n.message.as_str()).collect()
    }

    #[test]
    fn test_push_is_visible_immediately() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("Task created", NotificationKind::Success, T0);

        assert_eq!(id, T0);
        assert_eq!(messages(&queue), vec!["Task created"]);
        assert!(!queue.tick(T0));
    }

    #[test]
    fn test_hidden_then_removed() {
        let mut queue = NotificationQueue::new();
        queue.push("Upload failed", NotificationKind::Error, T0);

        assert!(!queue.tick(T0 + HIDE_AFTER_MS - 1));
        assert_eq!(queue.visible().count(), 1);

        // Hidden but still held during the fade-out window
        assert!(queue.tick(T0 + HIDE_AFTER_MS));
        assert_eq!(queue.visible().count(), 0);
        assert_eq!(queue.len(), 1);
        assert!(!queue.entries()[0].visible);

        assert!(queue.tick(T0 + HIDE_AFTER_MS + FADE_OUT_MS));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_late_tick_removes_in_one_step() {
        let mut queue = NotificationQueue::new();
        queue.push("Saved", NotificationKind::Success, T0);

        assert!(queue.tick(T0 + 60_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_push_order_preserved() {
        let mut queue = NotificationQueue::new();
        queue.push("first", NotificationKind::Success, T0);
        queue.push("second", NotificationKind::Error, T0 + 1_000);

        for now in [T0 + 1_000, T0 + 3_000, T0 + HIDE_AFTER_MS - 1] {
            queue.tick(now);
            assert_eq!(messages(&queue), vec!["first", "second"]);
        }
    }

    #[test]
    fn test_entries_expire_independently() {
        let mut queue = NotificationQueue::new();
        queue.push("first", NotificationKind::Success, T0);
        queue.push("second", NotificationKind::Success, T0 + 2_000);

        queue.tick(T0 + HIDE_AFTER_MS);
        assert_eq!(messages(&queue), vec!["second"]);

        queue.tick(T0 + HIDE_AFTER_MS + FADE_OUT_MS);
        assert_eq!(queue.len(), 1);
        assert_eq!(messages(&queue), vec!["second"]);

        queue.tick(T0 + 2_000 + HIDE_AFTER_MS + FADE_OUT_MS);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("a", NotificationKind::Success, T0);
        let b = queue.push("b", NotificationKind::Success, T0);
        let c = queue.push("c", NotificationKind::Success, T0 - 10);

        assert!(a < b && b < c);
    }

    #[test]
    fn test_push_deadline_ticks_ignore_wall_clock() {
        // Timers replay the deadlines captured at push time, so a clock
        // that stepped backwards cannot strand a toast on screen
        let mut queue = NotificationQueue::new();
        queue.push("Saved", NotificationKind::Success, T0);

        assert!(!queue.tick(T0 - 60_000));
        assert_eq!(queue.visible().count(), 1);

        assert!(queue.tick(T0 + HIDE_AFTER_MS));
        assert_eq!(queue.visible().count(), 0);
        assert!(queue.tick(T0 + HIDE_AFTER_MS + FADE_OUT_MS));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(NotificationKind::Error.as_str(), "error");
    }
}
