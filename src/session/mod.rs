//! Task and timer state machines for the active day
//!
//! All transitions happen on discrete triggers: a user action, a
//! one-second tick, or a day change. Nothing here touches the network.

mod day;
mod timer;

pub use day::{DaySession, EnergyState, Transition};
pub use timer::{Phase, PomodoroTimer, Ticker, TimerEvent};
