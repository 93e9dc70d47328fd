//! HTTP handlers for the Paddy Damage Analysis Platform

pub mod damage;
pub mod health;

pub use damage::*;
pub use health::*;
