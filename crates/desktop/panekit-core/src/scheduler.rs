// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cancellable timers.
//!
//! Components never sleep themselves. They ask a [`Scheduler`] for a timer and
//! hold the returned [`TimerHandle`]; cancelling or dropping the handle stops
//! the timer before its next tick.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    time::Duration,
};

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Source of one-shot and repeating timers.
pub trait Scheduler {
    /// Runs `tick` every `period`, the first time after `delay`.
    #[must_use = "dropping the handle cancels the timer"]
    fn repeat(&self, delay: Duration, period: Duration, tick: Box<dyn FnMut()>) -> TimerHandle;

    /// Runs `task` once after `delay`.
    #[must_use = "dropping the handle cancels the timer"]
    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owner-side view of a scheduled timer.
pub struct TimerHandle {
    alive:  Rc<Cell<bool>>,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    fn new(alive: Rc<Cell<bool>>, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            alive,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Whether the timer can still fire. One-shot timers turn inactive after
    /// running.
    pub fn is_active(&self) -> bool { self.alive.get() }

    pub fn cancel(mut self) { self.stop(); }

    fn stop(&mut self) {
        self.alive.set(false);
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) { self.stop(); }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.alive.get())
            .finish()
    }
}

enum Task {
    Repeat { period: Duration, tick: Box<dyn FnMut()> },
    Once(Box<dyn FnOnce()>),
}

struct ManualTimer {
    id:    u64,
    due:   Duration,
    alive: Rc<Cell<bool>>,
    task:  Task,
}

#[derive(Default)]
struct ManualClock {
    now:     Duration,
    next_id: u64,
    timers:  Vec<ManualTimer>,
}

/// A virtual clock advanced explicitly by its owner.
///
/// Tests drive it with [`ManualScheduler::advance`]; frame-based hosts call
/// it once per frame with the elapsed time. Timers fire in due order, ties in
/// registration order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self { Self::default() }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration { self.clock.borrow().now }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|timer| timer.alive.get())
            .count()
    }

    /// Moves the clock forward by `by`, running every timer that falls due on
    /// the way. Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        while let Some(mut timer) = self.take_next_due(target) {
            match timer.task {
                Task::Once(task) => {
                    timer.alive.set(false);
                    task();
                }
                Task::Repeat { period, ref mut tick } => {
                    tick();
                    if timer.alive.get() {
                        timer.due += period;
                        self.clock.borrow_mut().timers.push(timer);
                    }
                }
            }
            fired += 1;
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    fn take_next_due(&self, target: Duration) -> Option<ManualTimer> {
        let mut clock = self.clock.borrow_mut();
        clock.timers.retain(|timer| timer.alive.get());
        let index = clock
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index)?;
        let timer = clock.timers.swap_remove(index);
        clock.now = timer.due;
        Some(timer)
    }

    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let alive = Rc::new(Cell::new(true));
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.timers.push(ManualTimer {
            id,
            due,
            alive: Rc::clone(&alive),
            task,
        });
        TimerHandle::new(alive, || {})
    }
}

impl Scheduler for ManualScheduler {
    fn repeat(&self, delay: Duration, period: Duration, tick: Box<dyn FnMut()>) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.schedule(delay, Task::Repeat { period, tick })
    }

    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        self.schedule(delay, Task::Once(task))
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

/// Timers on the current thread's tokio `LocalSet`.
///
/// Must be used from inside [`tokio::task::LocalSet`], since callbacks are
/// not `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn repeat(&self, delay: Duration, period: Duration, mut tick: Box<dyn FnMut()>) -> TimerHandle {
        let token = CancellationToken::new();
        let alive = Rc::new(Cell::new(true));

        let cancelled = token.clone();
        let still_alive = Rc::clone(&alive);
        tokio::task::spawn_local(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + delay, period.max(MIN_PERIOD));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    () = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if !still_alive.get() {
                            break;
                        }
                        tick();
                    }
                }
            }
            tracing::trace!("repeating timer stopped");
        });

        TimerHandle::new(alive, move || token.cancel())
    }

    fn once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let token = CancellationToken::new();
        let alive = Rc::new(Cell::new(true));

        let cancelled = token.clone();
        let still_alive = Rc::clone(&alive);
        tokio::task::spawn_local(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    if still_alive.replace(false) {
                        task();
                    }
                }
            }
        });

        TimerHandle::new(alive, move || token.cancel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        (hits, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn manual_repeat_waits_for_delay_then_ticks_each_period() {
        let scheduler = ManualScheduler::new();
        let (hits, tick) = counter();
        let handle = scheduler.repeat(Duration::from_millis(200), Duration::from_millis(16), tick);

        scheduler.advance(Duration::from_millis(199));
        assert_eq!(hits.get(), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);

        scheduler.advance(Duration::from_millis(32));
        assert_eq!(hits.get(), 3);
        assert!(handle.is_active());

        handle.cancel();
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn manual_once_fires_a_single_time() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let handle = scheduler.once(Duration::from_millis(100), Box::new(move || flag.set(true)));

        scheduler.advance(Duration::from_millis(100));
        assert!(fired.get());
        assert!(!handle.is_active());
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (hits, tick) = counter();
        drop(scheduler.repeat(Duration::ZERO, Duration::from_millis(10), tick));
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn timer_may_schedule_from_inside_a_callback() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
        let (hits, mut tick) = counter();

        let inner_scheduler = scheduler.clone();
        let inner_slot = Rc::clone(&slot);
        let _outer = scheduler.once(
            Duration::from_millis(5),
            Box::new(move || {
                let handle = inner_scheduler.once(Duration::from_millis(5), Box::new(move || tick()));
                *inner_slot.borrow_mut() = Some(handle);
            }),
        );

        scheduler.advance(Duration::from_millis(10));
        assert_eq!(hits.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_repeat_stops_on_cancel() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (hits, tick) = counter();
                let handle =
                    TokioScheduler.repeat(Duration::from_millis(200), Duration::from_millis(16), tick);

                tokio::time::sleep(Duration::from_millis(190)).await;
                assert_eq!(hits.get(), 0);

                tokio::time::sleep(Duration::from_millis(50)).await;
                assert_eq!(hits.get(), 3);

                handle.cancel();
                tokio::time::sleep(Duration::from_millis(100)).await;
                assert_eq!(hits.get(), 3);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_once_is_skipped_after_drop() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let handle = TokioScheduler.once(Duration::from_millis(100), Box::new(move || flag.set(true)));
                drop(handle);

                tokio::time::sleep(Duration::from_millis(200)).await;
                assert!(!fired.get());
            })
            .await;
    }
}
