//! Fixed-period timers for the physics tick and pipe spawning.
//!
//! The main loop feeds wall-clock time in with [`Scheduler::advance`] and then
//! drains due events one at a time with [`Scheduler::pop_due`]. Draining one
//! event at a time lets the caller stop both timers in the middle of a frame
//! (round over) without the remaining events of that frame still firing.

use std::time::Duration;

/// Which timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    SpawnPipes,
}

#[derive(Debug, Clone)]
struct Timer {
    period_us: u64,
    /// Time left until the next firing.
    remaining_us: u64,
    running: bool,
}

impl Timer {
    fn new(period_ms: u64) -> Self {
        let period_us = period_ms.max(1).saturating_mul(1000);
        Self {
            period_us,
            remaining_us: period_us,
            running: false,
        }
    }

    fn arm(&mut self) {
        self.remaining_us = self.period_us;
        self.running = true;
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    tick: Timer,
    spawn: Timer,
    /// Elapsed time not yet consumed by fired events. Kept in microseconds so
    /// frame times that are not whole milliseconds do not drift.
    pending_us: u64,
}

impl Scheduler {
    /// Both timers start stopped; call [`Scheduler::start`] to arm them.
    pub fn new(tick_interval_ms: u64, spawn_interval_ms: u64) -> Self {
        Self {
            tick: Timer::new(tick_interval_ms),
            spawn: Timer::new(spawn_interval_ms),
            pending_us: 0,
        }
    }

    /// Arm both timers with a full period. Also used to re-arm after a stop.
    pub fn start(&mut self) {
        self.tick.arm();
        self.spawn.arm();
        self.pending_us = 0;
    }

    /// Suspend both timers and drop any elapsed time not yet consumed.
    pub fn stop(&mut self) {
        self.tick.running = false;
        self.spawn.running = false;
        self.pending_us = 0;
    }

    pub fn is_running(&self) -> bool {
        self.tick.running || self.spawn.running
    }

    /// Add elapsed wall-clock time. Ignored while stopped.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.is_running() {
            let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
            self.pending_us = self.pending_us.saturating_add(elapsed_us);
        }
    }

    /// Next due event in chronological order, or `None` once the pending time
    /// is used up. On a tie the tick fires first.
    pub fn pop_due(&mut self) -> Option<TimerEvent> {
        let candidates = [
            (TimerEvent::Tick, &self.tick),
            (TimerEvent::SpawnPipes, &self.spawn),
        ];
        let (event, wait_us) = candidates
            .iter()
            .filter(|(_, timer)| timer.running)
            .map(|(event, timer)| (*event, timer.remaining_us))
            .min_by_key(|(_, remaining)| *remaining)?;

        if wait_us > self.pending_us {
            return None;
        }

        self.pending_us -= wait_us;
        for timer in [&mut self.tick, &mut self.spawn] {
            if timer.running {
                timer.remaining_us -= wait_us;
            }
        }

        let fired = match event {
            TimerEvent::Tick => &mut self.tick,
            TimerEvent::SpawnPipes => &mut self.spawn,
        };
        fired.remaining_us = fired.period_us;

        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler) -> Vec<TimerEvent> {
        std::iter::from_fn(|| scheduler.pop_due()).collect()
    }

    #[test]
    fn test_stopped_scheduler_fires_nothing() {
        let mut scheduler = Scheduler::new(16, 1500);
        scheduler.advance(Duration::from_secs(10));
        assert!(!scheduler.is_running());
        assert!(drain(&mut scheduler).is_empty());
    }

    #[test]
    fn test_tick_fires_once_per_period() {
        let mut scheduler = Scheduler::new(16, 1500);
        scheduler.start();

        scheduler.advance(Duration::from_millis(15));
        assert!(drain(&mut scheduler).is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(drain(&mut scheduler), vec![TimerEvent::Tick]);

        scheduler.advance(Duration::from_millis(48));
        assert_eq!(drain(&mut scheduler).len(), 3);
    }

    #[test]
    fn test_spawn_interleaves_chronologically() {
        let mut scheduler = Scheduler::new(10, 25);
        scheduler.start();
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(
            drain(&mut scheduler),
            vec![
                TimerEvent::Tick,       // 10
                TimerEvent::Tick,       // 20
                TimerEvent::SpawnPipes, // 25
                TimerEvent::Tick,       // 30
                TimerEvent::Tick,       // 40
                TimerEvent::Tick,       // 50
                TimerEvent::SpawnPipes, // 50
            ]
        );
    }

    #[test]
    fn test_stop_discards_pending_time() {
        let mut scheduler = Scheduler::new(10, 1000);
        scheduler.start();
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(scheduler.pop_due(), Some(TimerEvent::Tick));

        scheduler.stop();
        assert_eq!(scheduler.pop_due(), None);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn test_start_rearms_with_full_period() {
        let mut scheduler = Scheduler::new(10, 30);
        scheduler.start();
        scheduler.advance(Duration::from_millis(25));
        drain(&mut scheduler);
        scheduler.stop();

        scheduler.start();
        scheduler.advance(Duration::from_millis(29));
        // Spawn timer restarted from a full 30 ms, not the 5 ms it had left
        assert!(!drain(&mut scheduler).contains(&TimerEvent::SpawnPipes));
        scheduler.advance(Duration::from_millis(1));
        assert!(drain(&mut scheduler).contains(&TimerEvent::SpawnPipes));
    }

    #[test]
    fn test_fractional_frames_accumulate() {
        let mut scheduler = Scheduler::new(16, 1500);
        scheduler.start();
        for _ in 0..4 {
            scheduler.advance(Duration::from_micros(4_000));
        }
        assert_eq!(scheduler.pop_due(), Some(TimerEvent::Tick));

        // 16 frames of 0.9 ms add up to 14.4 ms, then 1.6 ms more
        for _ in 0..16 {
            scheduler.advance(Duration::from_micros(900));
        }
        assert_eq!(scheduler.pop_due(), None);
        scheduler.advance(Duration::from_micros(1_600));
        assert_eq!(scheduler.pop_due(), Some(TimerEvent::Tick));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut scheduler = Scheduler::new(0, 0);
        scheduler.start();
        scheduler.advance(Duration::from_millis(2));
        assert_eq!(drain(&mut scheduler).len(), 4);
    }
}
