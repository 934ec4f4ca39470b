//! Extension trait for in-place signal updates.

use dioxus::prelude::*;

/// Mutate a signal's value through a closure.
///
/// Replaces the `let mut v = sig.read().clone(); f(&mut v); sig.set(v);`
/// dance with a single write guard.
///
/// ```ignore
/// use crate::utils::SignalExt;
///
/// complaint_form.mutate(|form| form.anonymous = !form.anonymous);
/// ```
pub trait SignalExt<T> {
    fn mutate<F: FnOnce(&mut T)>(&mut self, f: F);
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<F: FnOnce(&mut T)>(&mut self, f: F) {
        f(&mut *self.write());
    }
}
