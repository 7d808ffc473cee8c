//! Behavioral design patterns are concerned with algorithms and the
//! assignment of responsibilities between objects.

pub mod observer;
pub mod state;
pub mod strategy;
