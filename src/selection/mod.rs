//! Question selection module

mod shuffle;


pub use shuffle::*;
