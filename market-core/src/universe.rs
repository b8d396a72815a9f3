//! Per-exchange market registries built from the exchange settings.
//!
//! This is the last bootstrap step before trading starts: each exchange's instruments are
//! indexed by both key forms, turned into markets, and published behind an `Arc`. Once
//! published a [`MarketDB`] is only reachable through `&self`, so any number of engine threads
//! can read it without locking.

use crate::config::ExchangeSettings;
use crate::error::{ConfigError, Result};
use log::{debug, info};
use market::{InstrumentDB, MarketDB};
use std::collections::HashMap;
use std::sync::Arc;

/// The published market registries of every configured exchange.
#[derive(Debug, Default, Clone)]
pub struct MarketUniverse {
    markets: HashMap<String, Arc<MarketDB>>,
}

impl MarketUniverse {
    /// Builds one [`MarketDB`] per exchange in `settings`.
    ///
    /// Exchanges are numbered from 0 in ascending name order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if two instruments of one exchange share a numeric id.
    pub fn build(settings: &ExchangeSettings) -> Result<Self> {
        let mut markets = HashMap::with_capacity(settings.len());

        for (id, name) in settings.names().into_iter().enumerate() {
            let definition = settings.get(name)?;
            let store = index_by_numeric_id(name, definition.instruments())?;

            let mut registry = MarketDB::new(name, id as u64);
            let created = registry.populate(&store);
            info!(
                "MarketUniverse: exchange {:?} (id {}) has {} markets",
                name, id, created
            );

            markets.insert(name.to_string(), Arc::new(registry));
        }

        Ok(Self { markets })
    }

    /// Returns a shared handle to the markets of `exchange`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownExchange`] if `exchange` was not in the settings.
    pub fn get(&self, exchange: &str) -> Result<Arc<MarketDB>> {
        self.markets
            .get(exchange)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownExchange(exchange.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MarketDB>> {
        self.markets.values()
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

/// Copies a symbol-keyed registry and adds the numeric key of every instrument that has one.
fn index_by_numeric_id(exchange: &str, symbol_keyed: &InstrumentDB) -> Result<InstrumentDB> {
    let mut store = symbol_keyed.clone();

    let mut instruments: Vec<_> = symbol_keyed
        .iter()
        .filter(|(id, _)| id.is_symbol())
        .map(|(_, instrument)| instrument)
        .collect();
    instruments.sort_by(|a, b| a.symbol().cmp(b.symbol()));

    for instrument in instruments {
        let Some(key) = instrument.numeric_id() else {
            debug!(
                "MarketUniverse: {} on {:?} has no numeric id",
                instrument.symbol(),
                exchange
            );
            continue;
        };
        if let Some(existing) = store.get(&key) {
            return Err(ConfigError::Invalid(format!(
                "{} and {} on exchange {:?} share {}",
                existing.symbol(),
                instrument.symbol(),
                exchange,
                key
            )));
        }
        store.put(key, instrument.clone());
    }

    Ok(store)
}
