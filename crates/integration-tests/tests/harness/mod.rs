//! Shared test harness: mock engine and gateway launcher

pub mod engine;
pub mod server;
