//! Pomodoro timer state machine and its wall-clock driver
//!
//! [`PomodoroTimer`] is a pure state machine: callers feed it one tick per
//! elapsed second and react to the events it emits. [`Ticker`] is the
//! wall-clock driver, a tokio task whose guard aborts it on drop so the
//! recurring tick is cancelled on every exit path.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::SessionConfig;

/// Which interval the timer is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A 25-minute focus interval
    Work,
    /// A 5-minute break
    Break,
}

/// Events the timer emits as ticks and user actions arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown moved; nothing else happened
    Ticked,
    /// The work interval hit zero: complete the task, break has begun
    WorkElapsed,
    /// The break hit zero: the next work interval is armed but not running
    BreakElapsed,
    /// The user skipped during work: skip the task, no break follows
    Skipped,
    /// The timer was not running; the tick was ignored
    Idle,
}

/// Per-task Pomodoro countdown
///
/// Work hitting zero flows into a running break; a break hitting zero
/// re-arms work without starting it. Skip only exists during work.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    phase: Phase,
    remaining_secs: u32,
    running: bool,
    work_secs: u32,
    break_secs: u32,
}

impl PomodoroTimer {
    /// Create a stopped work-phase timer with configured durations
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            phase: Phase::Work,
            remaining_secs: config.work_secs,
            running: false,
            work_secs: config.work_secs,
            break_secs: config.break_secs,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fraction of the current phase already elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        let total = self.phase_duration();
        if total == 0 {
            return 1.0;
        }
        f64::from(total - self.remaining_secs) / f64::from(total)
    }

    /// Start or resume the countdown
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the countdown; resume with [`start`](Self::start)
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and restore the full duration of the current phase
    ///
    /// The phase itself is unchanged: resetting during a break restarts
    /// the break, not the work interval.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.phase_duration();
    }

    /// Skip the current work interval
    ///
    /// Stops the clock and reports [`TimerEvent::Skipped`] so the caller
    /// can skip the task and close the timer. Ignored during a break.
    pub fn skip(&mut self) -> TimerEvent {
        if self.phase != Phase::Work {
            return TimerEvent::Idle;
        }
        self.running = false;
        debug!("work interval skipped");
        TimerEvent::Skipped
    }

    /// Advance one second of wall-clock time
    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TimerEvent::Ticked;
        }

        match self.phase {
            Phase::Work => {
                // Break starts immediately and keeps running.
                self.phase = Phase::Break;
                self.remaining_secs = self.break_secs;
                debug!("work interval elapsed, break started");
                TimerEvent::WorkElapsed
            }
            Phase::Break => {
                // Work is re-armed but waits for an explicit start.
                self.phase = Phase::Work;
                self.remaining_secs = self.work_secs;
                self.running = false;
                debug!("break elapsed, work re-armed");
                TimerEvent::BreakElapsed
            }
        }
    }

    fn phase_duration(&self) -> u32 {
        match self.phase {
            Phase::Work => self.work_secs,
            Phase::Break => self.break_secs,
        }
    }
}

/// Wall-clock tick source bound to the active timer's lifetime
///
/// Sends one unit per second on the channel until dropped. Dropping the
/// ticker aborts the underlying task, so a task switch, completion, skip,
/// or view teardown all stop the ticking with no extra bookkeeping.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a one-second ticker feeding `tx`
    pub fn spawn(tx: mpsc::Sender<()>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a tokio interval fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> SessionConfig {
        SessionConfig {
            work_secs: 3,
            break_secs: 2,
        }
    }

    #[test]
    fn test_new_timer_is_armed_not_running() {
        let timer = PomodoroTimer::new(&SessionConfig::default());
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining_secs(), 1500);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut timer = PomodoroTimer::new(&short_config());
        assert_eq!(timer.tick(), TimerEvent::Idle);
        assert_eq!(timer.remaining_secs(), 3);
    }

    #[test]
    fn test_work_elapse_starts_break() {
        let mut timer = PomodoroTimer::new(&short_config());
        timer.start();

        assert_eq!(timer.tick(), TimerEvent::Ticked);
        assert_eq!(timer.tick(), TimerEvent::Ticked);
        assert_eq!(timer.tick(), TimerEvent::WorkElapsed);

        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining_secs(), 2);
        assert!(timer.is_running());
    }

    #[test]
    fn test_break_elapse_rearms_work_stopped() {
        let mut timer = PomodoroTimer::new(&short_config());
        timer.start();
        for _ in 0..3 {
            timer.tick();
        }

        assert_eq!(timer.tick(), TimerEvent::Ticked);
        assert_eq!(timer.tick(), TimerEvent::BreakElapsed);

        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining_secs(), 3);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TimerEvent::Idle);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut timer = PomodoroTimer::new(&short_config());
        timer.start();
        timer.tick();
        timer.pause();

        assert_eq!(timer.tick(), TimerEvent::Idle);
        assert_eq!(timer.remaining_secs(), 2);

        timer.start();
        assert_eq!(timer.tick(), TimerEvent::Ticked);
        assert_eq!(timer.remaining_secs(), 1);
    }

    #[test]
    fn test_reset_restores_current_phase() {
        let mut timer = PomodoroTimer::new(&short_config());
        timer.start();
        timer.tick();
        timer.reset();

        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining_secs(), 3);
        assert!(!timer.is_running());

        // Reset during a break restores the break, not work.
        timer.start();
        for _ in 0..3 {
            timer.tick();
        }
        timer.tick();
        assert_eq!(timer.phase(), Phase::Break);
        timer.reset();
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining_secs(), 2);
    }

    #[test]
    fn test_skip_only_during_work() {
        let mut timer = PomodoroTimer::new(&short_config());
        timer.start();

        assert_eq!(timer.skip(), TimerEvent::Skipped);
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), Phase::Work);

        // Run into the break, then confirm skip is a no-op there.
        timer.start();
        for _ in 0..3 {
            timer.tick();
        }
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.skip(), TimerEvent::Idle);
        assert!(timer.is_running());
    }

    #[test]
    fn test_progress() {
        let mut timer = PomodoroTimer::new(&short_config());
        assert_eq!(timer.progress(), 0.0);

        timer.start();
        timer.tick();
        assert!((timer.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_delivers_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        let _ticker = Ticker::spawn(tx);

        // The paused clock auto-advances to each interval deadline.
        for _ in 0..3 {
            assert!(rx.recv().await.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_on_drop() {
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = Ticker::spawn(tx);

        assert!(rx.recv().await.is_some());

        drop(ticker);
        // The channel closes once the aborted task's sender is dropped.
        assert!(rx.recv().await.is_none());
    }
}
