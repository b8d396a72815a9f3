//! Risk bounds applied by the market maker, per instrument and grouped by exchange.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Quoting and exposure bounds for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RiskLimit {
    symbol: String,
    /// Size quoted on each side.
    quoted_size: i64,
    /// Maximum long position.
    max_long: i64,
    /// Maximum short position.
    max_short: i64,
}

impl RiskLimit {
    pub fn new(symbol: impl Into<String>, quoted_size: i64, max_long: i64, max_short: i64) -> Self {
        Self {
            symbol: symbol.into(),
            quoted_size,
            max_long,
            max_short,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quoted_size(&self) -> i64 {
        self.quoted_size
    }

    pub fn max_long(&self) -> i64 {
        self.max_long
    }

    pub fn max_short(&self) -> i64 {
        self.max_short
    }
}

#[derive(Deserialize)]
struct ExchangeRiskLimitsRecord {
    exchange: String,
    instruments: Vec<RiskLimit>,
}

/// Risk limits of one exchange, keyed by symbol.
///
/// Decoded from `{"exchange": .., "instruments": [..]}`. When the list names a symbol more than
/// once, the later entry replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ExchangeRiskLimitsRecord")]
pub struct ExchangeRiskLimits {
    exchange: String,
    instruments: HashMap<String, RiskLimit>,
}

impl From<ExchangeRiskLimitsRecord> for ExchangeRiskLimits {
    fn from(record: ExchangeRiskLimitsRecord) -> Self {
        let mut limits = Self::new(record.exchange);
        for limit in record.instruments {
            limits.set(limit);
        }
        limits
    }
}

impl ExchangeRiskLimits {
    pub fn new(exchange: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            instruments: HashMap::new(),
        }
    }

    /// Sets the limit for `limit.symbol()`, replacing any previous one.
    pub fn set(&mut self, limit: RiskLimit) {
        self.instruments.insert(limit.symbol.clone(), limit);
    }

    pub fn get(&self, symbol: &str) -> Option<&RiskLimit> {
        self.instruments.get(symbol)
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskLimit> {
        self.instruments.values()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
