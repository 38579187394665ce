//=========================================================================
// Game Time
//=========================================================================
//
// Monotonic millisecond clock and the per-frame timing snapshot.
//
// Architecture:
//   TimeSource::now_millis() ──> FrameTiming::advance(previous) ──> components
//
// `total` is threaded from one snapshot to the next instead of being
// recomputed from the clock. The first frame receives the session start
// instant and every later frame carries that value forward unchanged.
// Simulation code steps with `elapsed`, never with absolute time.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

//=== Constants ===========================================================

/// Divisor turning elapsed milliseconds into a unitless pacing coefficient.
pub const TIME_DIVISOR: f32 = 100.0;

//=== TimeSource ==========================================================

/// Source of monotonically non-decreasing millisecond instants.
pub trait TimeSource {
    /// Returns the current instant in milliseconds.
    fn now_millis(&self) -> u64;
}

//=== GameClock ===========================================================

/// Real-time monotonic clock, measured from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    origin: Instant,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for GameClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

//=== ManualClock =========================================================

/// Deterministic clock driven by hand.
///
/// Clones share the same instant, so a test can keep one handle while the
/// loop reads through another. With a non-zero `step`, every read returns
/// the current instant and then advances it by `step` milliseconds.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
    step: u64,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start)),
            step: 0,
        }
    }

    /// Creates a clock that advances by `step` milliseconds after every read.
    pub fn stepping(start: u64, step: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start)),
            step,
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jumps the clock to `millis`. Ignored if it would move backwards.
    pub fn set(&self, millis: u64) {
        self.now.fetch_max(millis, Ordering::SeqCst);
    }

    /// Current instant without advancing.
    pub fn peek(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.fetch_add(self.step, Ordering::SeqCst)
    }
}

//=== FrameTiming =========================================================

/// Immutable timing snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    capture_instant: u64,
    previous_instant: u64,
    elapsed: u64,
    total: u64,
}

impl FrameTiming {
    //--- Construction -----------------------------------------------------

    /// Builds a snapshot at `now` against the previous frame's instant.
    ///
    /// `total` is carried through as given.
    pub fn new(now: u64, previous_instant: u64, total: u64) -> Self {
        Self {
            capture_instant: now,
            previous_instant,
            elapsed: now.saturating_sub(previous_instant),
            total,
        }
    }

    /// Reads `source` and builds a snapshot against `previous_instant`.
    pub fn capture(source: &dyn TimeSource, previous_instant: u64, total: u64) -> Self {
        Self::new(source.now_millis(), previous_instant, total)
    }

    /// Zero-elapsed snapshot anchored at the session start.
    pub fn start(start: u64) -> Self {
        Self::new(start, start, start)
    }

    /// Builds the next frame's snapshot from this one.
    pub fn advance(&self, source: &dyn TimeSource) -> Self {
        Self::capture(source, self.capture_instant, self.total)
    }

    //--- Accessors --------------------------------------------------------

    /// Instant at which this snapshot was taken.
    #[inline]
    pub fn capture_instant(&self) -> u64 {
        self.capture_instant
    }

    /// Capture instant of the previous frame.
    #[inline]
    pub fn previous_instant(&self) -> u64 {
        self.previous_instant
    }

    /// Milliseconds since the previous frame.
    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Value threaded through from the previous frame (session start).
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Elapsed time as a unitless coefficient for animation pacing.
    #[inline]
    pub fn elapsed_as_fraction(&self) -> f32 {
        self.elapsed as f32 / TIME_DIVISOR
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Clocks
    //=====================================================================

    #[test]
    fn game_clock_is_monotonic() {
        let clock = GameClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(10);
        let handle = clock.clone();
        handle.advance(5);
        assert_eq!(clock.now_millis(), 15);
    }

    #[test]
    fn manual_clock_never_moves_backwards() {
        let clock = ManualClock::new(100);
        clock.set(50);
        assert_eq!(clock.peek(), 100);
        clock.set(120);
        assert_eq!(clock.peek(), 120);
    }

    #[test]
    fn stepping_clock_advances_after_each_read() {
        let clock = ManualClock::stepping(0, 3);
        assert_eq!(clock.now_millis(), 0);
        assert_eq!(clock.now_millis(), 3);
        assert_eq!(clock.peek(), 6);
    }

    //=====================================================================
    // FrameTiming
    //=====================================================================

    #[test]
    fn reads_one_millisecond_apart_yield_elapsed_of_one() {
        let clock = ManualClock::stepping(1_000, 1);
        let previous = clock.now_millis();
        let timing = FrameTiming::capture(&clock, previous, 0);

        assert_eq!(timing.elapsed(), 1);
        assert_eq!(timing.elapsed_as_fraction(), 1.0 / 100.0);
    }

    #[test]
    fn elapsed_as_fraction_divides_by_hundred() {
        let timing = FrameTiming::new(1_250, 1_000, 0);
        assert_eq!(timing.elapsed(), 250);
        assert_eq!(timing.elapsed_as_fraction(), 2.5);
    }

    #[test]
    fn total_is_threaded_not_recomputed() {
        let clock = ManualClock::new(500);
        let first = FrameTiming::start(500);

        clock.advance(33);
        let second = first.advance(&clock);
        clock.advance(40);
        let third = second.advance(&clock);

        assert_eq!(second.total(), 500);
        assert_eq!(third.total(), 500);
        assert_eq!(second.elapsed(), 33);
        assert_eq!(third.elapsed(), 40);
        assert_eq!(third.previous_instant(), second.capture_instant());
    }

    #[test]
    fn start_snapshot_has_zero_elapsed() {
        let timing = FrameTiming::start(42);
        assert_eq!(timing.capture_instant(), 42);
        assert_eq!(timing.previous_instant(), 42);
        assert_eq!(timing.elapsed(), 0);
        assert_eq!(timing.total(), 42);
    }

    #[test]
    fn elapsed_saturates_if_previous_is_ahead() {
        let timing = FrameTiming::new(10, 20, 0);
        assert_eq!(timing.elapsed(), 0);
    }
}
