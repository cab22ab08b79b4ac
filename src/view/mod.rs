//! View models for front ends
//!
//! Pure functions from session state to display-ready data. All question,
//! option and answer text passes through the math renderer here.

mod format;
mod question;
mod result;

pub use format::*;
pub use question::*;
pub use result::*;
