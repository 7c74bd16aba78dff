//! Periodic background work: the 30s quote-board mutation and the 60s
//! market-clock refresh. Each loop runs in its own spawned task owned by
//! a `TaskHandle` that aborts the task on drop, so shutdown is just
//! dropping the handle. The tick bodies are plain async functions the
//! tests can drive directly without timers.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::models::quote::{market_status_at, now_ms, wib_now};
use crate::services::synthesizer;
use crate::state::AppState;

/// Owns a spawned background loop; dropping it cancels the loop.
pub struct TaskHandle {
    inner: JoinHandle<()>,
}

impl TaskHandle {
    pub fn abort(&self) {
        self.inner.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.inner.abort();
    }
}

/// Every `period`, re-perturb all displayed quotes and the index summary.
pub fn spawn_quote_ticker(state: AppState, period: Duration) -> TaskHandle {
    TaskHandle {
        inner: tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut timer = interval(period);
            // The first tick completes immediately; skip it so the seeded
            // board stays visible for a full period.
            timer.tick().await;
            loop {
                timer.tick().await;
                tick_quotes(&state, &mut rng).await;
            }
        }),
    }
}

/// Every `period`, recompute the open/closed flag from the WIB clock.
pub fn spawn_market_clock(state: AppState, period: Duration) -> TaskHandle {
    TaskHandle {
        inner: tokio::spawn(async move {
            let mut timer = interval(period);
            loop {
                timer.tick().await;
                tick_market_clock(&state).await;
            }
        }),
    }
}

/// One quote-board mutation pass.
pub async fn tick_quotes<R: Rng>(state: &AppState, rng: &mut R) {
    let ts = now_ms();
    let current = state.quotes().await;
    let next = current
        .iter()
        .map(|q| synthesizer::mutate_quote(q, ts, rng))
        .collect();
    state.set_quotes(next).await;
    state.set_summary(synthesizer::mutate_summary(ts, rng)).await;
    tracing::debug!("quote board mutated");
}

/// One market-clock pass.
pub async fn tick_market_clock(state: &AppState) {
    let status = market_status_at(wib_now());
    state.set_status(status).await;
    tracing::debug!(?status, "market status refreshed");
}
