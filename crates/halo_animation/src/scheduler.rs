//! Animation scheduler
//!
//! Holds every registered animation and advances them when the host ticks.
//! The scheduler never spins its own frame loop: the host's compositor or
//! event loop calls [`AnimationScheduler::tick`] (wall clock) or
//! [`AnimationScheduler::tick_by`] (explicit frame delta) and then reads the
//! current values back out.
//!
//! Two kinds of work are registered:
//! - loops: a value swept linearly from `from` to `to` over a period,
//!   repeating forever until removed
//! - timers: one-shot callbacks fired after a delay
//!
//! Components hold a [`SchedulerHandle`], a weak reference, so an animation
//! never keeps the scheduler alive. [`AnimatedLoop`] wraps a loop
//! registration and removes it on `stop()` or drop.

use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered loop animation
    pub struct LoopId;
    /// Handle to a scheduled one-shot timer
    pub struct TimerId;
}

/// Callback fired when a timer elapses
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

// ============================================================================
// Loop Animation
// ============================================================================

/// A value that sweeps from `from` to `to` over `duration_ms`, then wraps
#[derive(Clone, Debug)]
pub struct LoopAnimation {
    from: f32,
    to: f32,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl LoopAnimation {
    pub fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms.max(0.0)),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms`, wrapping at the end of each period
    pub fn tick(&mut self, dt_ms: f64) {
        if self.duration_ms <= 0.0 || dt_ms <= 0.0 {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms) % self.duration_ms;
    }

    /// Linear progress through the current period (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        (self.elapsed_ms / self.duration_ms) as f32
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms as f32
    }

    /// Change the period while keeping the current phase
    pub fn set_duration(&mut self, duration_ms: f32) {
        let progress = f64::from(self.progress());
        self.duration_ms = f64::from(duration_ms.max(0.0));
        self.elapsed_ms = progress * self.duration_ms;
    }
}

struct Timer {
    remaining_ms: f64,
    callback: TimerCallback,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    loops: SlotMap<LoopId, LoopAnimation>,
    timers: SlotMap<TimerId, Timer>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn has_active(&self) -> bool {
        !self.loops.is_empty() || !self.timers.is_empty()
    }
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    // A panicking timer callback runs outside the lock, so poisoning only
    // comes from a bug inside the scheduler itself; keep going with the data.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Scheduler
// ============================================================================

/// The animation scheduler that ticks all registered animations
///
/// Typically owned by the application shell and shared with components via
/// [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    /// Set by ticks that leave animations running; the host checks and clears
    /// it to decide whether to schedule another frame
    needs_redraw: Arc<AtomicBool>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                loops: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
            needs_redraw: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick by the wall-clock time since the previous tick
    ///
    /// Returns true if anything is still registered (needs another tick).
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = lock(&self.inner);
            let now = Instant::now();
            let dt = now - inner.last_frame;
            inner.last_frame = now;
            dt.as_secs_f64() * 1000.0
        };
        self.advance(dt_ms)
    }

    /// Tick by an explicit frame delta in milliseconds
    pub fn tick_by(&self, dt_ms: f32) -> bool {
        lock(&self.inner).last_frame = Instant::now();
        self.advance(f64::from(dt_ms.max(0.0)))
    }

    fn advance(&self, dt_ms: f64) -> bool {
        let (due, active) = {
            let mut inner = lock(&self.inner);

            for (_, animation) in inner.loops.iter_mut() {
                animation.tick(dt_ms);
            }

            let mut expired: Vec<(f64, TimerId)> = Vec::new();
            for (id, timer) in inner.timers.iter_mut() {
                timer.remaining_ms -= dt_ms;
                if timer.remaining_ms <= 0.0 {
                    expired.push((timer.remaining_ms, id));
                }
            }
            // Most overdue first, so timers fire in the order they were due
            expired.sort_by(|a, b| a.0.total_cmp(&b.0));

            let due: Vec<TimerCallback> = expired
                .into_iter()
                .filter_map(|(_, id)| inner.timers.remove(id).map(|t| t.callback))
                .collect();

            (due, inner.has_active())
        };

        if !due.is_empty() {
            tracing::trace!("AnimationScheduler: firing {} timer(s)", due.len());
        }
        // Callbacks run without the lock so they can schedule more work
        for callback in due {
            callback();
        }

        let active = active || self.has_active_animations();
        if active {
            self.needs_redraw.store(true, Ordering::Release);
        }
        active
    }

    /// Check and clear the needs_redraw flag
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Acquire)
    }

    /// Check if anything is registered
    pub fn has_active_animations(&self) -> bool {
        lock(&self.inner).has_active()
    }

    /// Number of registered loop animations
    pub fn loop_count(&self) -> usize {
        lock(&self.inner).loops.len()
    }

    /// Number of pending timers
    pub fn timer_count(&self) -> usize {
        lock(&self.inner).timers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Scheduler Handle
// ============================================================================

/// A weak handle to the animation scheduler
///
/// Passed to components that register animations. Every operation is a safe
/// no-op once the scheduler has been dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Loop Operations
    // =========================================================================

    /// Register a loop animation and return its ID
    pub fn register_loop(&self, animation: LoopAnimation) -> Option<LoopId> {
        self.inner.upgrade().map(|inner| {
            let id = lock(&inner).loops.insert(animation);
            tracing::debug!("AnimationScheduler: registered loop {:?}", id);
            id
        })
    }

    /// Remove a loop animation, returning it if it was registered
    pub fn remove_loop(&self, id: LoopId) -> Option<LoopAnimation> {
        let removed = self
            .inner
            .upgrade()
            .and_then(|inner| lock(&inner).loops.remove(id));
        if removed.is_some() {
            tracing::debug!("AnimationScheduler: removed loop {:?}", id);
        }
        removed
    }

    pub fn has_loop(&self, id: LoopId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| lock(&inner).loops.contains_key(id))
            .unwrap_or(false)
    }

    /// Current value of a loop animation
    pub fn get_loop_value(&self, id: LoopId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).loops.get(id).map(|a| a.value()))
    }

    /// Linear progress of a loop animation (0.0 to 1.0)
    pub fn get_loop_progress(&self, id: LoopId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).loops.get(id).map(|a| a.progress()))
    }

    /// Change a loop's period, keeping its phase
    pub fn set_loop_duration(&self, id: LoopId, duration_ms: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(animation) = lock(&inner).loops.get_mut(id) {
                animation.set_duration(duration_ms);
            }
        }
    }

    // =========================================================================
    // Timer Operations
    // =========================================================================

    /// Run `callback` once after `delay_ms` of ticked time
    ///
    /// A zero delay fires on the next tick.
    pub fn schedule_after<F>(&self, delay_ms: f32, callback: F) -> Option<TimerId>
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            lock(&inner).timers.insert(Timer {
                remaining_ms: f64::from(delay_ms.max(0.0)),
                callback: Box::new(callback),
            })
        })
    }

    /// Cancel a pending timer; returns true if it had not fired yet
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| lock(&inner).timers.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Loop
// ============================================================================

/// An owned, restartable loop registration
///
/// `start()` registers the loop once; calling it again while running is a
/// no-op and keeps the phase. `stop()` unregisters it and the value falls
/// back to `from`. Dropping the wrapper unregisters as well.
///
/// # Example
///
/// ```
/// use halo_animation::{AnimatedLoop, AnimationScheduler};
/// use std::f32::consts::TAU;
///
/// let scheduler = AnimationScheduler::new();
/// let mut sweep = AnimatedLoop::new(scheduler.handle(), 0.0, TAU, 10_000.0);
///
/// sweep.start();
/// scheduler.tick_by(2_500.0);
/// assert!((sweep.value() - TAU / 4.0).abs() < 1e-4);
///
/// sweep.stop();
/// assert_eq!(scheduler.loop_count(), 0);
/// assert_eq!(sweep.value(), 0.0);
/// ```
pub struct AnimatedLoop {
    handle: SchedulerHandle,
    loop_id: Option<LoopId>,
    from: f32,
    to: f32,
    duration_ms: f32,
}

impl AnimatedLoop {
    pub fn new(handle: SchedulerHandle, from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            handle,
            loop_id: None,
            from,
            to,
            duration_ms,
        }
    }

    /// Register the loop; returns true if this call registered it
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let animation = LoopAnimation::new(self.from, self.to, self.duration_ms);
        self.loop_id = self.handle.register_loop(animation);
        self.loop_id.is_some()
    }

    /// Unregister the loop; returns true if it was running
    pub fn stop(&mut self) -> bool {
        match self.loop_id.take() {
            Some(id) => self.handle.remove_loop(id).is_some(),
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.loop_id
            .map(|id| self.handle.has_loop(id))
            .unwrap_or(false)
    }

    /// Current value; the resting `from` value when not running
    pub fn value(&self) -> f32 {
        self.loop_id
            .and_then(|id| self.handle.get_loop_value(id))
            .unwrap_or(self.from)
    }

    pub fn progress(&self) -> f32 {
        self.loop_id
            .and_then(|id| self.handle.get_loop_progress(id))
            .unwrap_or(0.0)
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Change the period; a running loop keeps its phase
    pub fn set_duration(&mut self, duration_ms: f32) {
        self.duration_ms = duration_ms;
        if let Some(id) = self.loop_id {
            self.handle.set_loop_duration(id, duration_ms);
        }
    }
}

impl Drop for AnimatedLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_loop_wraps_without_discontinuity() {
        let mut animation = LoopAnimation::new(0.0, TAU, 1000.0);
        animation.tick(250.0);
        assert!((animation.value() - TAU / 4.0).abs() < 1e-5);

        animation.tick(750.0);
        // A full period lands back on the start value
        assert!(animation.value().abs() < 1e-5);

        animation.tick(1100.0);
        assert!((animation.progress() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_loop_zero_duration_is_static() {
        let mut animation = LoopAnimation::new(1.0, 2.0, 0.0);
        animation.tick(16.0);
        assert_eq!(animation.value(), 1.0);
    }

    #[test]
    fn test_set_duration_keeps_phase() {
        let mut animation = LoopAnimation::new(0.0, 1.0, 1000.0);
        animation.tick(500.0);
        animation.set_duration(4000.0);
        assert!((animation.progress() - 0.5).abs() < 1e-6);
        animation.tick(1000.0);
        assert!((animation.progress() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_scheduler_counts() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        assert_eq!(scheduler.loop_count(), 0);
        assert_eq!(scheduler.timer_count(), 0);

        let id = handle
            .register_loop(LoopAnimation::new(0.0, 1.0, 100.0))
            .unwrap();
        handle.schedule_after(50.0, || {}).unwrap();

        assert_eq!(scheduler.loop_count(), 1);
        assert_eq!(scheduler.timer_count(), 1);
        assert!(scheduler.has_active_animations());

        handle.remove_loop(id);
        assert_eq!(scheduler.loop_count(), 0);
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (delay, tag) in [(30.0, "c"), (10.0, "a"), (20.0, "b")] {
            let order = Arc::clone(&order);
            handle.schedule_after(delay, move || order.lock().unwrap().push(tag));
        }

        scheduler.tick_by(5.0);
        assert!(order.lock().unwrap().is_empty());

        scheduler.tick_by(50.0);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.timer_count(), 0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_cancel_timer() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        let id = handle
            .schedule_after(10.0, move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        assert!(handle.cancel_timer(id));
        assert!(!handle.cancel_timer(id));
        scheduler.tick_by(100.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timer_callback_can_reschedule() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let fired = Arc::new(AtomicUsize::new(0));

        let inner_handle = handle.clone();
        let counter = Arc::clone(&fired);
        handle.schedule_after(10.0, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let counter = Arc::clone(&counter);
            inner_handle.schedule_after(10.0, move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });

        scheduler.tick_by(10.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.timer_count(), 1);

        scheduler.tick_by(10.0);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_animated_loop_start_is_idempotent() {
        let scheduler = AnimationScheduler::new();
        let mut sweep = AnimatedLoop::new(scheduler.handle(), 0.0, TAU, 1000.0);

        assert!(sweep.start());
        scheduler.tick_by(100.0);
        let before = sweep.value();

        assert!(!sweep.start());
        assert_eq!(scheduler.loop_count(), 1);
        // Second start does not reset the phase
        assert_eq!(sweep.value(), before);
    }

    #[test]
    fn test_animated_loop_stop_releases_registration() {
        let scheduler = AnimationScheduler::new();
        let mut sweep = AnimatedLoop::new(scheduler.handle(), 0.0, TAU, 1000.0);

        assert!(!sweep.stop());
        sweep.start();
        assert!(sweep.stop());
        assert!(!sweep.stop());
        assert_eq!(scheduler.loop_count(), 0);
        assert!(!sweep.is_running());
    }

    #[test]
    fn test_animated_loop_drop_unregisters() {
        let scheduler = AnimationScheduler::new();
        {
            let mut sweep = AnimatedLoop::new(scheduler.handle(), 0.0, 1.0, 1000.0);
            sweep.start();
            assert_eq!(scheduler.loop_count(), 1);
        }
        assert_eq!(scheduler.loop_count(), 0);
    }

    #[test]
    fn test_needs_redraw_flag() {
        let scheduler = AnimationScheduler::new();
        let mut sweep = AnimatedLoop::new(scheduler.handle(), 0.0, 1.0, 1000.0);

        assert!(!scheduler.tick_by(16.0));
        assert!(!scheduler.take_needs_redraw());

        sweep.start();
        assert!(scheduler.tick_by(16.0));
        assert!(scheduler.take_needs_redraw());
        assert!(!scheduler.take_needs_redraw());
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle
            .register_loop(LoopAnimation::new(0.0, 1.0, 100.0))
            .is_none());
        assert!(handle.schedule_after(10.0, || {}).is_none());

        let mut sweep = AnimatedLoop::new(handle, 0.0, 1.0, 100.0);
        assert!(!sweep.start());
        assert_eq!(sweep.value(), 0.0);
    }
}
