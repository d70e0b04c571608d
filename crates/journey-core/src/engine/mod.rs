//! Engine module: aggregate `Journey` y su algoritmo de submit/branch/merge,
//! más la proyección de stages construida encima.

pub mod core;
pub mod stage;

pub use core::Journey;
