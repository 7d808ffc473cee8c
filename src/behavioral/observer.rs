//! # Observer
//!
//! A one-to-many dependency: when the subject changes state, every dependent
//! is notified and updated automatically.

pub const INTENT: &str = "The Observer design pattern establishes a one-to-many dependency \
    between objects, so that when one object changes state, all its dependents are notified and \
    updated automatically. This promotes loose coupling between the observed subject and its \
    observers, facilitating flexible and scalable system designs.";
