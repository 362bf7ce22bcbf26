//! Benchmark configuration.
//!
//! Values resolve in order: built-in defaults, then a TOML file named by
//! `TABLESTAKES_BENCH_CONFIG`, then individual environment variables. The
//! source of every field is recorded alongside the resolved value.

use std::fs;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tablestakes_engine::config::TableConfig;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "TABLESTAKES_BENCH_CONFIG";
pub const HANDS_PER_MATCH_ENV: &str = "TABLESTAKES_HANDS_PER_MATCH";
pub const SEED_SETS_ENV: &str = "TABLESTAKES_SEED_SETS";
pub const BASE_SEED_ENV: &str = "TABLESTAKES_BASE_SEED";
pub const STARTING_STACK_ENV: &str = "TABLESTAKES_STARTING_STACK";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Distinct deals per seed set; each deal is replayed once per seat
    pub hands_per_match: u32,
    pub num_duplicate_seed_sets: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub ante: u32,
    pub starting_stack: u32,
    pub base_seed: u64,
    pub max_actions_per_round: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            hands_per_match: 500,
            num_duplicate_seed_sets: 4,
            small_blind: 5,
            big_blind: 10,
            ante: 0,
            starting_stack: 1_000,
            base_seed: 0,
            max_actions_per_round: 100,
        }
    }
}

impl BenchmarkConfig {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            ante: self.ante,
            max_actions_per_round: self.max_actions_per_round,
        }
    }

    /// Seed of the `index`-th deal of seed set `set`.
    pub fn deal_seed(&self, set: u32, index: u32) -> u64 {
        self.base_seed
            .wrapping_add(u64::from(set) * u64::from(self.hands_per_match))
            .wrapping_add(u64::from(index))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands_per_match == 0 {
            return Err(ConfigError::Invalid(
                "Invalid configuration: hands_per_match must be >0".into(),
            ));
        }
        if self.num_duplicate_seed_sets == 0 {
            return Err(ConfigError::Invalid(
                "Invalid configuration: num_duplicate_seed_sets must be >0".into(),
            ));
        }
        if self.starting_stack == 0 {
            return Err(ConfigError::Invalid(
                "Invalid configuration: starting_stack must be >0".into(),
            ));
        }
        self.table()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ConfigSources {
    pub hands_per_match: ValueSource,
    pub num_duplicate_seed_sets: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub ante: ValueSource,
    pub starting_stack: ValueSource,
    pub base_seed: ValueSource,
    pub max_actions_per_round: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            hands_per_match: ValueSource::Default,
            num_duplicate_seed_sets: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            ante: ValueSource::Default,
            starting_stack: ValueSource::Default,
            base_seed: ValueSource::Default,
            max_actions_per_round: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: BenchmarkConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<BenchmarkConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = BenchmarkConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        f.apply(&mut cfg, &mut sources);
    }

    if let Some(v) = env_value(HANDS_PER_MATCH_ENV)? {
        cfg.hands_per_match = v;
        sources.hands_per_match = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_SETS_ENV)? {
        cfg.num_duplicate_seed_sets = v;
        sources.num_duplicate_seed_sets = ValueSource::Env;
    }
    if let Some(v) = env_value(BASE_SEED_ENV)? {
        cfg.base_seed = v;
        sources.base_seed = ValueSource::Env;
    }
    if let Some(v) = env_value(STARTING_STACK_ENV)? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }

    cfg.validate()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    hands_per_match: Option<u32>,
    #[serde(default)]
    num_duplicate_seed_sets: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    ante: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    base_seed: Option<u64>,
    #[serde(default)]
    max_actions_per_round: Option<u32>,
}

impl FileConfig {
    fn apply(self, cfg: &mut BenchmarkConfig, sources: &mut ConfigSources) {
        macro_rules! take {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    cfg.$field = v;
                    sources.$field = ValueSource::File;
                }
            };
        }
        take!(hands_per_match);
        take!(num_duplicate_seed_sets);
        take!(small_blind);
        take!(big_blind);
        take!(ante);
        take!(starting_stack);
        take!(base_seed);
        take!(max_actions_per_round);
    }
}
