//! Countdown timer module

mod countdown;
mod observer;
mod task;

pub use countdown::*;
pub use observer::*;
pub use task::*;
