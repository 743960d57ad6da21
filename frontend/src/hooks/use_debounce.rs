//! Debounced copy of a signal, driven by a browser timer.

use std::{future::Future, time::Duration};

use common::debounce::Debouncer;
use dioxus::{core::Task, prelude::*};
use gloo_timers::future::TimeoutFuture;

/// Follows `value`, but only after it has stayed unchanged for `delay`.
///
/// Every change restarts the wait; the timer armed for the previous value is
/// cancelled, and a cancelled timer cannot deliver its value. Unmounting
/// drops whatever is still pending.
pub fn use_debounce<T: Clone + PartialEq + 'static>(value: ReadSignal<T>, delay: Duration) -> ReadSignal<T> {
    use_debounce_with_timer(value, delay, |wait: Duration| TimeoutFuture::new(u32::try_from(wait.as_millis()).unwrap_or(u32::MAX)))
}

/// [`use_debounce`] with the timer supplied by the caller.
pub fn use_debounce_with_timer<T, S, F>(value: ReadSignal<T>, delay: Duration, sleep: S) -> ReadSignal<T>
where
    T: Clone + PartialEq + 'static,
    S: Fn(Duration) -> F + Copy + 'static,
    F: Future<Output = ()> + 'static,
{
    let mut debounced = use_signal(|| value.peek().clone());
    let mut debouncer = use_signal(|| Debouncer::<T>::new(delay));
    let mut pending_timer = use_signal(|| None::<Task>);

    use_effect(move || {
        let latest = value.read().clone();
        let ticket = debouncer.write().push(latest);
        if let Some(previous) = pending_timer.write().take() {
            previous.cancel();
        }
        let wait = debouncer.peek().delay();
        let timer = spawn(async move {
            sleep(wait).await;
            let settled = debouncer.write().fire(ticket);
            if let Some(settled) = settled {
                if *debounced.peek() != settled {
                    debounced.set(settled);
                }
            }
        });
        pending_timer.set(Some(timer));
    });

    use_drop(move || {
        if let Ok(mut pending) = pending_timer.try_write() {
            if let Some(timer) = pending.take() {
                timer.cancel();
            }
        }
        if let Ok(mut debouncer) = debouncer.try_write() {
            debouncer.cancel();
        }
    });

    debounced.into()
}
