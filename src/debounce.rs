// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trailing-edge debouncing of async calls.
//!
//! Every call restarts the window. When a window elapses without a newer call, the wrapped
//! function runs once with the latest arguments and every caller that was waiting since
//! the previous run receives a clone of that single result.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;

struct Window<R> {
    epoch: u64,
    waiters: Vec<oneshot::Sender<R>>,
}

pub struct Debouncer<F, R> {
    interval: Duration,
    f: Arc<F>,
    window: Arc<Mutex<Window<R>>>,
}

impl<F, R> Clone for Debouncer<F, R> {
    fn clone(&self) -> Self {
        Self { interval: self.interval, f: self.f.clone(), window: self.window.clone() }
    }
}

impl<F, R> Debouncer<F, R> {
    pub fn new(interval: Duration, f: F) -> Self {
        Self {
            interval,
            f: Arc::new(f),
            window: Arc::new(Mutex::new(Window { epoch: 0, waiters: Vec::new() })),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Callers currently waiting for the next run.
    pub fn pending(&self) -> usize {
        self.window.lock().unwrap_or_else(PoisonError::into_inner).waiters.len()
    }
}

impl<F, Fut, R> Debouncer<F, R>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: Clone + Send + 'static,
{
    /// Schedules a call and resolves with the result of the run that absorbs it.
    ///
    /// The timer starts immediately, not on first poll. Must be called from within a
    /// tokio runtime. Resolves to `None` only if the runtime shuts down first.
    pub fn call(&self, args: String) -> impl Future<Output = Option<R>> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        let epoch = {
            let mut window = self.window.lock().unwrap_or_else(PoisonError::into_inner);
            window.epoch = window.epoch.wrapping_add(1);
            window.waiters.push(tx);
            window.epoch
        };

        let window = self.window.clone();
        let f = self.f.clone();
        let interval = self.interval;
        tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            let waiters = {
                let mut window = window.lock().unwrap_or_else(PoisonError::into_inner);
                if window.epoch != epoch {
                    return;
                }
                std::mem::take(&mut window.waiters)
            };
            tracing::trace!(waiters = waiters.len(), "debounce window elapsed");
            let result = (*f)(args).await;
            for waiter in waiters {
                let _ = waiter.send(result.clone());
            }
        });

        async move { rx.await.ok() }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::Debouncer;

    type Calls = Arc<Mutex<Vec<String>>>;

    fn recording_debouncer(
        interval: Duration,
    ) -> (
        Debouncer<impl Fn(String) -> std::future::Ready<String> + Send + Sync + 'static, String>,
        Calls,
    ) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();
        let debouncer = Debouncer::new(interval, move |query: String| {
            recorded.lock().unwrap().push(query.clone());
            std::future::ready(format!("result:{query}"))
        });
        (debouncer, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn calls_within_window_coalesce_into_the_last_one() {
        let (debouncer, calls) = recording_debouncer(Duration::from_millis(100));

        let first = debouncer.call("c".to_owned());
        tokio::time::sleep(Duration::from_millis(30)).await;
        let second = debouncer.call("ca".to_owned());
        tokio::time::sleep(Duration::from_millis(30)).await;
        let third = debouncer.call("cat".to_owned());

        let (a, b, c) = tokio::join!(first, second, third);
        let expected = Some("result:cat".to_owned());
        assert_eq!(a, expected);
        assert_eq!(b, expected);
        assert_eq!(c, expected);
        assert_eq!(*calls.lock().unwrap(), vec!["cat".to_owned()]);
        assert_eq!(debouncer.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn calls_further_apart_than_the_window_each_run() {
        let (debouncer, calls) = recording_debouncer(Duration::from_millis(100));

        let first = debouncer.call("a".to_owned()).await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        let second = debouncer.call("b".to_owned()).await;

        assert_eq!(first.as_deref(), Some("result:a"));
        assert_eq!(second.as_deref(), Some("result:b"));
        assert_eq!(*calls.lock().unwrap(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_runs_before_the_window_elapses() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let debouncer = Debouncer::new(Duration::from_millis(100), move |_query: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        });

        let pending = debouncer.call("x".to_owned());
        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(debouncer.pending(), 1);

        pending.await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
