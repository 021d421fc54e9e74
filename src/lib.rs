//! Form field validation with fixed message contracts.
//!
//! The core lives in [`utils::input_validation`]: four pure rules over plain
//! strings, each paired with one exact error message. [`models`] adds wrapper
//! types that can only hold values the rules accepted, [`forms`] aggregates
//! the rules per form, and [`binding`] connects a rule to any field display
//! through the `TextSource`/`MessageSink` traits.

pub mod binding;
pub mod forms;
pub mod models;
pub mod utils;
