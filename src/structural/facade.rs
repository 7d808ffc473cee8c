//! # Facade
//!
//! A unified interface to a set of interfaces in a subsystem.

pub const INTENT: &str = "The Facade design pattern acts as a unified interface to a set of \
    interfaces in a subsystem, simplifying interactions and promoting ease of use. It shields \
    clients from the complexities of the subsystem, enhancing code readability and \
    maintainability.";
