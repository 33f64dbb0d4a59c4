//! Periodic status-message rotation shown while a request is in flight.

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use futures_util::FutureExt;

use crate::core::timing;

/// Messages cycled through while loading, in order.
pub const LOADING_MESSAGES: [&str; 3] = [
    "Collecting sensor readings…",
    "Clustering sensors with similar traffic…",
    "Optimizing signal timings…",
];

/// Owner of a running rotation loop. Dropping it stops the loop.
#[derive(Debug)]
pub struct RotationHandle {
    abort: AbortHandle,
}

impl RotationHandle {
    pub(crate) fn pair() -> (Self, AbortRegistration) {
        let (abort, registration) = AbortHandle::new_pair();
        (Self { abort }, registration)
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Build a loop that calls `on_tick` every `period_ms` until its handle is dropped.
/// The caller spawns the returned future on the UI executor.
pub fn start<F>(period_ms: u64, mut on_tick: F) -> (RotationHandle, impl Future<Output = ()>)
where
    F: FnMut() + 'static,
{
    let (handle, registration) = RotationHandle::pair();
    let ticker = async move {
        loop {
            timing::sleep_ms(period_ms).await;
            on_tick();
        }
    };
    (handle, Abortable::new(ticker, registration).map(|_| ()))
}

/// Index of the message following `index`, wrapping at the end.
pub fn next_message_index(index: usize) -> usize {
    (index + 1) % LOADING_MESSAGES.len()
}
