//! Defines tradable instruments and the key used to address them.
//!
//! An instrument can be looked up either by its human-readable symbol or by its numeric id.
//! The two forms are distinct keys: callers always state which one they mean.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which an [`Instrument`] is stored in a registry.
///
/// Equality and hashing discriminate on the variant, so `Symbol("1")` and `Numeric(1)` are
/// different keys even when they happen to denote the same instrument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstrumentId {
    Symbol(String),
    Numeric(u64),
}

impl InstrumentId {
    /// Creates a symbol-form key (e.g. `"AAPL"`).
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self::Symbol(symbol.into())
    }

    /// Creates a numeric-form key.
    pub fn numeric(id: u64) -> Self {
        Self::Numeric(id)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "symbol:{}", symbol),
            Self::Numeric(id) => write!(f, "id:{}", id),
        }
    }
}

/// Represents a tradable security listed on one exchange.
///
/// `symbol` and `exchange` are the authoritative attributes. `id` is a secondary handle to the
/// same instrument, used for compact addressing once the definition is known (e.g. in market
/// data streams).
///
/// Wire form (kebab-case):
/// `{"symbol": "AAPL", "exchange": "X", "id": 7, "price-decimals": 2, "tick-size": 1}`.
/// `exchange` and `id` may be omitted on decode; the enclosing exchange definition supplies
/// the exchange name. An instrument without `id` is addressable by symbol only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Instrument {
    /// The human-readable ticker symbol (e.g., "AAPL").
    symbol: String,

    /// The exchange where this instrument trades.
    #[serde(default)]
    exchange: String,

    /// Numeric handle of the instrument, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,

    /// Number of decimals in a quoted price.
    price_decimals: u64,

    /// Minimum price increment, in units of the last price decimal.
    tick_size: i64,
}

impl Instrument {
    /// Creates a new Instrument.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker symbol (e.g. "AAPL").
    /// * `exchange` - The exchange name.
    /// * `id` - The numeric handle.
    /// * `price_decimals` - Price precision.
    /// * `tick_size` - Minimum price increment.
    pub fn new(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        id: u64,
        price_decimals: u64,
        tick_size: i64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            id: Some(id),
            price_decimals,
            tick_size,
        }
    }

    /// Creates an instrument with no numeric handle.
    pub fn without_id(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        price_decimals: u64,
        tick_size: i64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            id: None,
            price_decimals,
            tick_size,
        }
    }

    /// Relists this instrument on `exchange`.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn price_decimals(&self) -> u64 {
        self.price_decimals
    }

    pub fn tick_size(&self) -> i64 {
        self.tick_size
    }

    /// Symbol-form key of this instrument.
    pub fn symbol_id(&self) -> InstrumentId {
        InstrumentId::symbol(self.symbol.clone())
    }

    /// Numeric-form key of this instrument, if it has a numeric handle.
    pub fn numeric_id(&self) -> Option<InstrumentId> {
        self.id.map(InstrumentId::numeric)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Instrument {}@{} (id: {})", self.symbol, self.exchange, id),
            None => write!(f, "Instrument {}@{}", self.symbol, self.exchange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_and_numeric_keys_never_collide() {
        let by_symbol = InstrumentId::symbol("1");
        let by_id = InstrumentId::numeric(1);
        assert_ne!(by_symbol, by_id);

        let keys: HashSet<_> = [by_symbol.clone(), by_id.clone(), by_symbol].into_iter().collect();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_instrument_id_display() {
        assert_eq!(InstrumentId::numeric(42).to_string(), "id:42");
        assert_eq!(InstrumentId::symbol("ES").to_string(), "symbol:ES");
    }

    #[test]
    fn test_instrument_keys() {
        let inst = Instrument::new("AAPL", "NASDAQ", 7, 2, 1);
        assert_eq!(inst.symbol_id(), InstrumentId::symbol("AAPL"));
        assert_eq!(inst.numeric_id(), Some(InstrumentId::numeric(7)));
        assert!(inst.symbol_id().is_symbol());

        let unnumbered = Instrument::without_id("MSFT", "NASDAQ", 2, 1);
        assert_eq!(unnumbered.id(), None);
        assert_eq!(unnumbered.numeric_id(), None);
        assert_eq!(unnumbered.to_string(), "Instrument MSFT@NASDAQ");
    }
}
