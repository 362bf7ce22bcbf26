//! # tablestakes-bench: Low-variance strategy comparison
//!
//! Runs duplicate-deal matches between a candidate strategy and benchmark
//! opponents and reports the candidate's win rate in big blinds per 100
//! hands with a 95% confidence interval.
//!
//! ## Core Modules
//!
//! - [`duplicate`] - Seat rotation and heads-up seat swap over one deal
//! - [`evaluate`] - `evaluate_strategy_vs_benchmark` and `evaluate_multiway`
//! - [`stats`] - bb/100 summary statistics
//! - [`config`] - Benchmark configuration (defaults, TOML file, environment)
//! - [`cancel`] - Cancellation token checked between hands
//! - [`error`] - Error type for benchmark runs
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_ai::create_ai;
//! use tablestakes_bench::cancel::CancelToken;
//! use tablestakes_bench::config::BenchmarkConfig;
//! use tablestakes_bench::evaluate::evaluate_strategy_vs_benchmark;
//!
//! let config = BenchmarkConfig {
//!     hands_per_match: 10,
//!     num_duplicate_seed_sets: 2,
//!     ..BenchmarkConfig::default()
//! };
//! let summary = evaluate_strategy_vs_benchmark(
//!     create_ai("baseline").unwrap(),
//!     "calling_station",
//!     &config,
//!     &CancelToken::new(),
//! )
//! .unwrap();
//! assert_eq!(summary.hands_played, 40);
//! ```

pub mod cancel;
pub mod config;
pub mod duplicate;
pub mod error;
pub mod evaluate;
pub mod stats;

pub use error::BenchError;
