//! Integration tests for the form rules and evaluation.

mod evaluate;
mod fields;
mod policy;
mod report;
