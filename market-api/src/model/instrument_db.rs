//! In-memory registry of instrument definitions.
//!
//! Each instrument is normally stored twice: once under its symbol key and once under its
//! numeric key. Both entries carry the same payload. The registry is populated once at startup
//! and only read afterwards.

use crate::model::instrument::{Instrument, InstrumentId};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A registry of trading instruments addressable by symbol or numeric id.
///
/// Insertion is first-write-wins: `put` under a key that is already present leaves the stored
/// instrument untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InstrumentDB {
    instruments: HashMap<InstrumentId, Instrument>,
}

impl InstrumentDB {
    /// Creates a new, empty InstrumentDB.
    pub fn new() -> Self {
        Self {
            instruments: HashMap::new(),
        }
    }

    /// Builds a registry keyed by symbol only, in iteration order (first duplicate wins).
    ///
    /// This is the decoding path for a list of instrument definitions. Numeric keys are not
    /// added; use [`InstrumentDB::put_indexed`] when both forms are needed.
    pub fn from_instruments(instruments: impl IntoIterator<Item = Instrument>) -> Self {
        let mut db = Self::new();
        for instrument in instruments {
            db.put(instrument.symbol_id(), instrument);
        }
        db
    }

    /// Stores `instrument` under `id` unless `id` is already present.
    ///
    /// Returns `true` if the instrument was inserted.
    pub fn put(&mut self, id: InstrumentId, instrument: Instrument) -> bool {
        if self.instruments.contains_key(&id) {
            debug!("InstrumentDB: ignoring duplicate insert under {}", id);
            return false;
        }
        self.instruments.insert(id, instrument);
        true
    }

    /// Stores `instrument` under its symbol key and, when it has one, its numeric key.
    ///
    /// Each insert follows the first-write-wins rule independently.
    pub fn put_indexed(&mut self, instrument: Instrument) {
        if let Some(numeric_id) = instrument.numeric_id() {
            self.put(numeric_id, instrument.clone());
        }
        self.put(instrument.symbol_id(), instrument);
    }

    /// Retrieves a copy of the instrument stored under `id`.
    pub fn get(&self, id: &InstrumentId) -> Option<Instrument> {
        self.instruments.get(id).cloned()
    }

    pub fn contains(&self, id: &InstrumentId) -> bool {
        self.instruments.contains_key(id)
    }

    /// Returns an iterator over every stored entry, including both keys of a dual-indexed
    /// instrument. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&InstrumentId, &Instrument)> {
        self.instruments.iter()
    }

    /// Number of stored entries (keys), not distinct instruments.
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl<'de> Deserialize<'de> for InstrumentDB {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let instruments = Vec::<Instrument>::deserialize(deserializer)?;
        Ok(Self::from_instruments(instruments))
    }
}

/// Encodes the symbol-keyed entries as a list of instrument definitions, the inverse of the
/// `Deserialize` impl.
impl Serialize for InstrumentDB {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            self.instruments
                .iter()
                .filter(|(id, _)| id.is_symbol())
                .map(|(_, instrument)| instrument),
        )
    }
}

pub mod filter {
    use super::InstrumentDB;

    /// Returns a new registry holding only the entries listed on `exchange`.
    ///
    /// Keys are preserved, so a dual-indexed instrument keeps both of its entries.
    pub fn by_exchange(store: &InstrumentDB, exchange: &str) -> InstrumentDB {
        let mut out = InstrumentDB::new();
        for (id, instrument) in store.iter() {
            if instrument.exchange() == exchange {
                out.put(id.clone(), instrument.clone());
            }
        }
        out
    }
}
