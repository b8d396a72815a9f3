use super::{decode, Loadable};
use crate::error::{ConfigError, Result};
use log::{info, warn};
use market::{Instrument, InstrumentDB, SessionDescriptor};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ExchangeRecord {
    name: String,
    instruments: Vec<Instrument>,
    market_data: SessionDescriptor,
    order_entry: SessionDescriptor,
}

#[derive(Deserialize)]
struct ExchangesRecord {
    exchanges: Vec<ExchangeRecord>,
}

/// One venue: its instrument universe and the sessions used to reach it.
#[derive(Debug, Clone)]
pub struct ExchangeDefinition {
    name: String,
    /// Instruments of this exchange, keyed by symbol.
    instruments: InstrumentDB,
    market_data: SessionDescriptor,
    order_entry: SessionDescriptor,
}

impl ExchangeDefinition {
    pub fn new(
        name: impl Into<String>,
        instruments: InstrumentDB,
        market_data: SessionDescriptor,
        order_entry: SessionDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            instruments,
            market_data,
            order_entry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instruments(&self) -> &InstrumentDB {
        &self.instruments
    }

    pub fn market_data(&self) -> &SessionDescriptor {
        &self.market_data
    }

    pub fn order_entry(&self) -> &SessionDescriptor {
        &self.order_entry
    }
}

impl TryFrom<ExchangeRecord> for ExchangeDefinition {
    type Error = ConfigError;

    /// Lists every instrument on the enclosing exchange. An instrument that names another
    /// exchange is rejected.
    fn try_from(record: ExchangeRecord) -> Result<Self> {
        let mut instruments = Vec::with_capacity(record.instruments.len());
        for instrument in record.instruments {
            if instrument.exchange().is_empty() {
                instruments.push(instrument.with_exchange(record.name.as_str()));
            } else if instrument.exchange() == record.name {
                instruments.push(instrument);
            } else {
                return Err(ConfigError::Invalid(format!(
                    "instrument {} listed under exchange {:?} names exchange {:?}",
                    instrument.symbol(),
                    record.name,
                    instrument.exchange()
                )));
            }
        }

        Ok(Self::new(
            record.name,
            InstrumentDB::from_instruments(instruments),
            record.market_data,
            record.order_entry,
        ))
    }
}

impl Loadable for ExchangeDefinition {
    /// Decodes `{"name", "instruments", "market-data", "order-entry"}`.
    fn from_value(doc: &Value) -> Result<Self> {
        let record: ExchangeRecord = decode("exchange", doc)?;
        Self::try_from(record)
    }
}

/// Exchange definitions keyed by exchange name.
///
/// Built once from the `exchanges` section, then only read. Unlike the registries, looking up
/// an unknown exchange is an error.
#[derive(Debug, Default, Clone)]
pub struct ExchangeSettings {
    exchanges: HashMap<String, ExchangeDefinition>,
}

impl ExchangeSettings {
    pub fn new() -> Self {
        Self {
            exchanges: HashMap::new(),
        }
    }

    /// Adds `definition`, replacing any exchange of the same name.
    ///
    /// # Returns
    ///
    /// The replaced definition, if any.
    pub fn add(&mut self, definition: ExchangeDefinition) -> Option<ExchangeDefinition> {
        let replaced = self
            .exchanges
            .insert(definition.name.clone(), definition);
        if let Some(previous) = &replaced {
            warn!(
                "ExchangeSettings: exchange {:?} defined more than once, keeping the last definition",
                previous.name
            );
        }
        replaced
    }

    /// Retrieves the definition of `name`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownExchange`] if `name` was never added.
    pub fn get(&self, name: &str) -> Result<&ExchangeDefinition> {
        self.exchanges
            .get(name)
            .ok_or_else(|| ConfigError::UnknownExchange(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exchanges.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeDefinition> {
        self.exchanges.values()
    }

    /// Exchange names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.exchanges.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

impl FromIterator<ExchangeDefinition> for ExchangeSettings {
    fn from_iter<I: IntoIterator<Item = ExchangeDefinition>>(iter: I) -> Self {
        let mut settings = Self::new();
        for definition in iter {
            settings.add(definition);
        }
        settings
    }
}

impl Loadable for ExchangeSettings {
    /// Decodes `{"exchanges": [..]}`.
    fn from_value(doc: &Value) -> Result<Self> {
        let record: ExchangesRecord = decode("exchanges", doc)?;
        let definitions = record
            .exchanges
            .into_iter()
            .map(ExchangeDefinition::try_from)
            .collect::<Result<Vec<_>>>()?;

        let settings: Self = definitions.into_iter().collect();
        info!(
            "ExchangeSettings: loaded {} exchanges {:?}",
            settings.len(),
            settings.names()
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::InstrumentId;
    use serde_json::json;

    fn exchange_doc(name: &str, symbols: &[&str]) -> Value {
        let instruments: Vec<Value> = symbols
            .iter()
            .map(|s| json!({"symbol": s, "price-decimals": 2, "tick-size": 1}))
            .collect();
        json!({
            "name": name,
            "instruments": instruments,
            "market-data": {"host": "127.0.0.1", "port": 9000},
            "order-entry": {"host": "127.0.0.1", "port": 9001}
        })
    }

    #[test]
    fn test_definition_stamps_exchange() {
        let definition = ExchangeDefinition::from_value(&exchange_doc("X", &["AAPL"])).unwrap();

        let aapl = definition
            .instruments()
            .get(&InstrumentId::symbol("AAPL"))
            .unwrap();
        assert_eq!(aapl.exchange(), "X");
        assert_eq!(definition.market_data().port(), Some(9000));
        assert_eq!(definition.order_entry().port(), Some(9001));
    }

    #[test]
    fn test_definition_rejects_foreign_instrument() {
        let mut doc = exchange_doc("X", &[]);
        doc["instruments"] = json!([
            {"symbol": "ES", "exchange": "Y", "price-decimals": 2, "tick-size": 25}
        ]);

        assert!(matches!(
            ExchangeDefinition::from_value(&doc),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_definition_missing_fields() {
        for field in ["name", "instruments", "market-data", "order-entry"] {
            let mut doc = exchange_doc("X", &["AAPL"]);
            doc.as_object_mut().unwrap().remove(field);
            assert!(
                matches!(
                    ExchangeDefinition::from_value(&doc),
                    Err(ConfigError::Malformed { what: "exchange", .. })
                ),
                "missing {} should be fatal",
                field
            );
        }
    }

    #[test]
    fn test_session_must_be_object() {
        let mut doc = exchange_doc("X", &["AAPL"]);
        doc["market-data"] = json!("tcp://127.0.0.1:9000");
        assert!(ExchangeDefinition::from_value(&doc).is_err());
    }

    #[test]
    fn test_add_last_write_wins() {
        let first = ExchangeDefinition::from_value(&exchange_doc("X", &["AAPL"])).unwrap();
        let second = ExchangeDefinition::from_value(&exchange_doc("X", &["MSFT"])).unwrap();

        let mut settings = ExchangeSettings::new();
        assert!(settings.add(first).is_none());
        assert!(settings.add(second).is_some());

        let x = settings.get("X").unwrap();
        assert!(x.instruments().contains(&InstrumentId::symbol("MSFT")));
        assert!(!x.instruments().contains(&InstrumentId::symbol("AAPL")));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_get_unknown_exchange_is_error() {
        let settings = ExchangeSettings::from_value(&json!({"exchanges": []})).unwrap();
        assert!(settings.is_empty());
        assert!(matches!(
            settings.get("X"),
            Err(ConfigError::UnknownExchange(name)) if name == "X"
        ));
    }

    #[test]
    fn test_one_bad_exchange_fails_the_load() {
        let mut bad = exchange_doc("Y", &["ES"]);
        bad.as_object_mut().unwrap().remove("order-entry");
        let doc = json!({"exchanges": [exchange_doc("X", &["AAPL"]), bad]});

        assert!(ExchangeSettings::from_value(&doc).is_err());
    }

    #[test]
    fn test_names_sorted() {
        let doc = json!({"exchanges": [
            exchange_doc("Z", &[]),
            exchange_doc("A", &[]),
            exchange_doc("M", &[])
        ]});
        let settings = ExchangeSettings::from_value(&doc).unwrap();
        assert_eq!(settings.names(), vec!["A", "M", "Z"]);
        assert!(settings.contains("M"));
        assert_eq!(settings.iter().count(), 3);
    }
}
