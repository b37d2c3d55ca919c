pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod keywords;
pub mod observer;
pub mod verdict;
