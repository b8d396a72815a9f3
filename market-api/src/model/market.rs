//! Markets: an instrument paired with its order book, partitioned per exchange.

use super::instrument::{Instrument, InstrumentId};
use super::instrument_db::InstrumentDB;
use super::order_book::OrderBook;
use log::debug;
use std::collections::HashMap;

/// An instrument together with the order book the engine trades it on.
#[derive(Debug)]
pub struct Market {
    instrument: Instrument,
    order_book: OrderBook,
}

impl Market {
    /// Creates a market with a fresh, empty order book.
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            order_book: OrderBook::new(),
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn order_book(&self) -> &OrderBook {
        &self.order_book
    }
}

/// All markets of a single exchange.
///
/// Every market held here lists its instrument on the exchange named by [`MarketDB::name`].
#[derive(Debug)]
pub struct MarketDB {
    name: String,
    id: u64,
    markets: HashMap<InstrumentId, Market>,
}

impl MarketDB {
    /// Creates an empty registry for the exchange `name`.
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
            markets: HashMap::new(),
        }
    }

    /// Creates a market for every entry of `store` listed on this exchange.
    ///
    /// Markets are keyed by the same id as in `store`, so a dual-indexed instrument yields two
    /// markets, each with its own order book. Entries of other exchanges are skipped, and keys
    /// already present are left untouched.
    ///
    /// # Returns
    ///
    /// The number of markets created by this call.
    pub fn populate(&mut self, store: &InstrumentDB) -> usize {
        let mut created = 0;
        for (id, instrument) in store.iter() {
            if instrument.exchange() != self.name || self.markets.contains_key(id) {
                continue;
            }
            self.markets
                .insert(id.clone(), Market::new(instrument.clone()));
            created += 1;
        }
        debug!(
            "MarketDB[{}]: populated {} markets from {} instrument entries",
            self.name,
            created,
            store.len()
        );
        created
    }

    /// Retrieves the market stored under `id`.
    pub fn get(&self, id: &InstrumentId) -> Option<&Market> {
        self.markets.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InstrumentId, &Market)> {
        self.markets.iter()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
