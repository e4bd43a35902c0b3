//! Application layer: orchestrates the market-data source and the lifecycle state.

pub mod fetch_controller;

pub use fetch_controller::{ActivationOutcome, FetchLifecycleController, LifecycleStore};
