//! Typed settings decoded from JSON configuration documents.
//!
//! Every settings type implements [`Loadable`], so it can be built either from an already
//! parsed document or straight from a file. Decoding is all-or-nothing: a missing or mistyped
//! field fails the whole load and no partial settings are returned.
//!
//! # Submodules
//! - [`exchange`]: Exchange definitions (instruments + sessions) keyed by exchange name.
//! - [`risk`]: Risk limits keyed by exchange, then symbol.
//! - [`market_maker`]: Trader/engine identity plus risk limits.
//! - [`execution_engine`]: Engine identity.

pub mod exchange;
pub mod execution_engine;
pub mod market_maker;
pub mod risk;

pub use exchange::{ExchangeDefinition, ExchangeSettings};
pub use execution_engine::ExecutionEngineConfig;
pub use market_maker::MarketMakerConfig;
pub use risk::RiskSettings;

use crate::error::{ConfigError, Result};
use crate::fs::load_document;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// A settings value that can be decoded from a JSON document.
pub trait Loadable: Sized {
    /// Decodes the settings from an already parsed document.
    fn from_value(doc: &Value) -> Result<Self>;

    /// Reads the document at `path` and decodes it with [`Loadable::from_value`].
    fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let doc = load_document(path.as_ref())?;
        Self::from_value(&doc)
    }
}

/// Deserializes `T` from `doc`, labelling failures with `what`.
pub(crate) fn decode<T: DeserializeOwned>(what: &'static str, doc: &Value) -> Result<T> {
    T::deserialize(doc).map_err(|source| ConfigError::Malformed { what, source })
}
