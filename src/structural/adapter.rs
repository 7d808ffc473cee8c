//! # Adapter
//!
//! Allows the interface of an existing type to be used as another interface.
//! It acts as a bridge between two incompatible interfaces, making them work
//! together. A single type, the adapter, is responsible for joining the
//! functionality of independent or incompatible interfaces.

pub const INTENT: &str = "The Adapter design pattern is a structural pattern that allows the \
    interface of an existing class to be used as another interface. It acts as a bridge between \
    two incompatible interfaces, making them work together. This pattern involves a single class, \
    known as the adapter, which is responsible for joining functionalities of independent or \
    incompatible interfaces.";
