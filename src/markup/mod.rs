//! Math markup rendering module

mod renderer;

pub use renderer::*;
