//! Creational patterns deal with how objects get created.
//!
//! - [`builder`]: a fluent `CodeBuilder` rendering HTML and CSS fragments
//! - [`ui_builder`]: a `Designer` director driving any `DesignTool` builder
//! - [`factory`]: providers deciding which design tool a `Designer` works with

pub mod builder;
pub mod factory;
pub mod ui_builder;
