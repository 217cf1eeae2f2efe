//! Инфраструктурный слой вокруг движка: RNG-реализации.

pub mod rng;

pub use rng::*;
