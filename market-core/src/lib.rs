//! # Market Core Library
//!
//! Bootstrap-time composition of the market-making platform's static state.
//!
//! ## Modules
//! - `config`: Exchange, risk, market-maker and execution-engine settings decoded from JSON.
//! - `fs`: Reading configuration documents from disk.
//! - `universe`: Per-exchange market registries built from the exchange settings.
//! - `error`: The error type shared by all loaders.
//!
//! Everything here runs once, on one thread, before trading starts. The resulting values are
//! immutable; [`universe::MarketUniverse`] hands out `Arc` handles for concurrent readers.

pub mod config;
pub mod error;
pub mod fs;
pub mod universe;

pub use config::{
    ExchangeDefinition, ExchangeSettings, ExecutionEngineConfig, Loadable, MarketMakerConfig,
    RiskSettings,
};
pub use error::{ConfigError, Result};
pub use universe::MarketUniverse;
