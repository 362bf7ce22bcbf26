//! # tablestakes-ai: Strategies for the Hold'em engine
//!
//! Implementations of [`tablestakes_engine::strategy::Strategy`] used as
//! benchmark opponents and as the reference for new strategies.
//!
//! ## Core Components
//!
//! - [`baseline`] - Threshold-table reference strategy with tunable parameters
//! - [`calling_station`] - Checks or calls every decision
//! - [`random`] - Seeded random actions
//! - [`create_ai`] - Factory by strategy id
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_ai::create_ai;
//! use tablestakes_engine::config::TableConfig;
//! use tablestakes_engine::engine::simulate_hand;
//! use tablestakes_engine::strategy::Strategy;
//!
//! let mut seats: Vec<Box<dyn Strategy>> =
//!     vec![create_ai("baseline").unwrap(), create_ai("calling_station").unwrap()];
//! let state = simulate_hand(2, &TableConfig::default(), 0, &[1000, 1000], &mut seats, Some(42))
//!     .expect("hand completes");
//! assert!(state.is_hand_over());
//! ```
//!
//! ## Strategy ids
//!
//! - `"baseline"` - [`baseline::BaselineAI`] with default parameters
//! - `"tight"` / `"loose"` - baseline with the tight or loose presets
//! - `"calling_station"` - [`calling_station::CallingStation`]
//! - `"random"` - [`random::RandomAI`]

use tablestakes_engine::strategy::Strategy;

pub mod baseline;
pub mod calling_station;
pub mod errors;
pub mod random;

pub use errors::{ParamError, UnknownStrategy};

/// Every id [`create_ai`] accepts.
pub const STRATEGY_IDS: [&str; 5] = ["baseline", "tight", "loose", "calling_station", "random"];

/// Creates a strategy by id. `"random"` is seeded from entropy; use
/// [`create_ai_seeded`] for reproducible runs.
///
/// # Example
///
/// ```rust
/// use tablestakes_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_err());
/// ```
pub fn create_ai(id: &str) -> Result<Box<dyn Strategy>, UnknownStrategy> {
    build(id, None)
}

/// Like [`create_ai`], but seeds any internal randomness with `seed`.
pub fn create_ai_seeded(id: &str, seed: u64) -> Result<Box<dyn Strategy>, UnknownStrategy> {
    build(id, Some(seed))
}

fn build(id: &str, seed: Option<u64>) -> Result<Box<dyn Strategy>, UnknownStrategy> {
    use baseline::{BaselineAI, BaselineParams};

    let ai: Box<dyn Strategy> = match id {
        "baseline" => Box::new(BaselineAI::new()),
        "tight" => Box::new(BaselineAI::with_params(BaselineParams::tight()).named("TightAI")),
        "loose" => Box::new(BaselineAI::with_params(BaselineParams::loose()).named("LooseAI")),
        "calling_station" => Box::new(calling_station::CallingStation),
        "random" => match seed {
            Some(seed) => Box::new(random::RandomAI::with_seed(seed)),
            None => Box::new(random::RandomAI::new()),
        },
        other => return Err(UnknownStrategy(other.to_string())),
    };
    tracing::debug!(id, name = ai.name(), "strategy created");
    Ok(ai)
}
