//! Domain models for the Paddy Damage Analysis Platform

mod damage;
mod farm;
mod prediction;
mod soil;

pub use damage::*;
pub use farm::*;
pub use prediction::*;
pub use soil::*;
