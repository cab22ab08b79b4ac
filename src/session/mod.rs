//! Quiz session module

mod scoring;
mod snapshot;
mod state;


pub use scoring::*;
pub use snapshot::*;
pub use state::*;
