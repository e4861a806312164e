//! Single-flight coalescing for the token refresh call.
//!
//! Concurrent requests that all find the access token expired must share one
//! refresh round trip instead of each issuing their own. The cell stores the
//! in-flight future as a [`Shared`] so late joiners await the same result.

#[cfg(test)]
#[path = "flight_test.rs"]
mod flight_test;

use std::cell::{Cell, RefCell};
use std::future::Future;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

type SharedFlight<T> = Shared<LocalBoxFuture<'static, T>>;

/// One-slot coalescing cell. Single-threaded (UI event loop); interior
/// mutability only, no locking.
pub struct SingleFlight<T: Clone + 'static> {
    next_id: Cell<u64>,
    slot: RefCell<Option<(u64, SharedFlight<T>)>>,
}

impl<T: Clone + 'static> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            slot: RefCell::new(None),
        }
    }

    /// Join the in-flight operation, or start one with `make`.
    ///
    /// `make` is only invoked when no flight is active; every waiter gets a
    /// clone of the same output.
    pub async fn run<F, Fut>(&self, make: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + 'static,
    {
        let (id, shared) = {
            let mut slot = self.slot.borrow_mut();
            match slot.as_ref() {
                Some((id, shared)) => (*id, shared.clone()),
                None => {
                    let id = self.next_id.get();
                    self.next_id.set(id.wrapping_add(1));
                    let shared = make().boxed_local().shared();
                    *slot = Some((id, shared.clone()));
                    (id, shared)
                }
            }
        };

        let out = shared.await;

        // First finisher retires the flight; the id check keeps a slow
        // waiter from evicting a newer one.
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|(slot_id, _)| *slot_id == id) {
            *slot = None;
        }
        out
    }
}
