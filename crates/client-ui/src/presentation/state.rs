//! Signal-backed page state

use dioxus::prelude::*;

use arena_client_app::application::controllers::StateStore;

/// Lets controllers write straight into a component's signal.
///
/// Copies are cheap; every spawned task gets its own handle to the same signal.
pub struct SignalStore<T: 'static>(pub Signal<T>);

impl<T: 'static> Clone for SignalStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalStore<T> {}

impl<T: 'static> StateStore<T> for SignalStore<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.0.write();
        f(&mut guard)
    }

    fn read<R>(&mut self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.peek())
    }
}
