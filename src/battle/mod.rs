pub mod ai;
pub mod calculators;
pub mod conditions;
pub mod engine;
pub mod rng;
pub mod service;
pub mod state;
pub mod stats;
pub mod switching;
pub mod view;

#[cfg(test)]
mod tests;
