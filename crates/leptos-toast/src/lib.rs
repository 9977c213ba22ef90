//! Leptos Toast Utilities
//!
//! Per-screen transient notifications ("toasts") for Leptos.
//! Each `Toasts` handle owns its queue and its timers; both go away
//! with the component that created it.

mod queue;

pub use queue::{Notification, NotificationKind, NotificationQueue, FADE_OUT_MS, HIDE_AFTER_MS};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Current wall-clock time in ms since epoch
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// (delay, queue time) of the hide and remove transitions for a push at
/// `now`. Timers tick the queue at the captured time, not the wall clock.
fn transitions(now: u64) -> [(u64, u64); 2] {
    [
        (HIDE_AFTER_MS, now + HIDE_AFTER_MS),
        (HIDE_AFTER_MS + FADE_OUT_MS, now + HIDE_AFTER_MS + FADE_OUT_MS),
    ]
}

/// Toast queue bound to the reactive owner it was created under.
///
/// Pending timers are held as `Timeout` handles; dropping one cancels it,
/// so owner cleanup cancels everything still scheduled.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<NotificationQueue>,
    timers: StoredValue<Vec<(u64, Timeout)>, LocalStorage>,
}

impl Toasts {
    /// Create a queue owned by the current component.
    pub fn new() -> Self {
        let queue = RwSignal::new(NotificationQueue::new());
        let timers = StoredValue::new_local(Vec::<(u64, Timeout)>::new());

        on_cleanup(move || {
            let _ = timers.try_update_value(|pending| pending.clear());
        });

        Self { queue, timers }
    }

    /// Show `message` now; it hides after `HIDE_AFTER_MS` and is dropped
    /// `FADE_OUT_MS` later.
    pub fn push(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let message = message.into();
        let now = now_ms();
        let Some(id) = self.queue.try_update(|q| q.push(message.clone(), kind, now)) else {
            return 0;
        };
        log::debug!("[TOAST] #{} {}: {}", id, kind.as_str(), message);

        // Timers whose entry is gone have already fired; release them here
        // rather than from inside their own callbacks.
        let queue = self.queue;
        let held = queue.with_untracked(|q| {
            q.entries().iter().map(|n| n.id).collect::<Vec<_>>()
        });
        let _ = self.timers.try_update_value(|pending| {
            pending.retain(|(owner, _)| held.contains(owner));
            for (delay_ms, deadline) in transitions(now) {
                pending.push((id, Self::schedule(queue, delay_ms, deadline)));
            }
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationKind::Error)
    }

    /// Reactive view of the visible notifications, in push order
    pub fn subscribe(&self) -> Signal<Vec<Notification>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.visible().cloned().collect()))
    }

    fn schedule(queue: RwSignal<NotificationQueue>, delay_ms: u64, deadline: u64) -> Timeout {
        Timeout::new(delay_ms as u32, move || {
            // No-op once the owning screen is gone
            let _ = queue.try_update(|q| q.tick(deadline));
        })
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position stack rendering the visible toasts of one queue
#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    let notifications = toasts.subscribe();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |n| {
                    view! {
                        <div class=format!("toast toast-{}", n.kind.as_str())>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_replay_push_deadlines() {
        let now = 1_700_000_000_000;
        let mut queue = NotificationQueue::new();
        queue.push("Task added successfully", NotificationKind::Success, now);

        let [(hide_delay, hide_at), (remove_delay, remove_at)] = transitions(now);
        assert_eq!(hide_delay, HIDE_AFTER_MS);
        assert_eq!(remove_delay, HIDE_AFTER_MS + FADE_OUT_MS);

        assert!(queue.tick(hide_at));
        assert_eq!(queue.visible().count(), 0);
        assert_eq!(queue.len(), 1);

        assert!(queue.tick(remove_at));
        assert!(queue.is_empty());
    }
}
