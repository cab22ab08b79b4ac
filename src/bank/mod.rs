//! Question bank module

mod repository;

pub use repository::*;
