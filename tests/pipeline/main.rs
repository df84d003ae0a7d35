//! End-to-end tests for `gbspr-rs`

mod batch;
mod fixture;
mod render;
