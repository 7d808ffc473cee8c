//! # Decorator
//!
//! Adds behavior to individual objects dynamically, without affecting other
//! objects of the same type.

pub const INTENT: &str = "The Decorator design pattern allows behavior to be added to individual \
    objects, dynamically and without affecting other objects of the same class. It provides a \
    flexible alternative to subclassing for extending functionality, promoting code reuse and \
    maintainability.";
