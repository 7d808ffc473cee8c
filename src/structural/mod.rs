//! Structural design patterns explain how to assemble objects and classes into
//! larger structures, while keeping these structures flexible and efficient.

pub mod adapter;
pub mod decorator;
pub mod facade;
