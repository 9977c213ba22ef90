//! Component Liveness
//!
//! Async continuations check `Alive` after every await so nothing writes
//! into a screen that has already been torn down.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Alive(StoredValue<bool>);

impl Alive {
    /// Flag owned by the current component; flips on cleanup
    pub fn new() -> Self {
        let flag = StoredValue::new(true);
        on_cleanup(move || {
            let _ = flag.try_update_value(|alive| *alive = false);
        });
        Self(flag)
    }

    /// False once the owner is cleaned up or disposed
    pub fn get(&self) -> bool {
        self.0.try_get_value().unwrap_or(false)
    }
}
