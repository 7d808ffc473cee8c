//! # Design Patterns
//!
//! Classic object-oriented design patterns as small, self-contained Rust
//! examples. Each runnable example builds its objects, drives them through the
//! pattern, and prints what happened.
//!
//! ## Creational Patterns
//! - Builder: fluent `CodeBuilder` (HTML/CSS), Director + concrete builder (UI)
//! - Factory Method: design tool providers injected into a `Designer`
//!
//! ## Structural Patterns (documented)
//! - Adapter, Facade, Decorator
//!
//! ## Behavioral Patterns (documented)
//! - Observer, Strategy, State
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_code_builder
//! cargo run --bin p2_ui_builder
//! cargo run --bin p3_factory_method
//! cargo run --bin patterns -- list
//! ```

pub mod behavioral;
pub mod catalog;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;

pub use error::{PatternError, Result};
