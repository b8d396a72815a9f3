use super::exchange::ExchangeSettings;
use super::{decode, Loadable};
use crate::error::{ConfigError, Result};
use log::{info, warn};
use market::{ExchangeRiskLimits, InstrumentId, RiskLimit};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RiskRecord {
    risk_limits: Vec<ExchangeRiskLimits>,
}

/// Risk limits keyed by exchange name.
///
/// Both levels are last-write-wins: a later entry for the same exchange replaces the earlier
/// one, and within an exchange a later entry for the same symbol does too.
#[derive(Debug, Default, Clone)]
pub struct RiskSettings {
    exchanges: HashMap<String, ExchangeRiskLimits>,
}

impl RiskSettings {
    pub fn new() -> Self {
        Self {
            exchanges: HashMap::new(),
        }
    }

    /// Adds `limits`, replacing any limits configured for the same exchange.
    pub fn add(&mut self, limits: ExchangeRiskLimits) -> Option<ExchangeRiskLimits> {
        let replaced = self
            .exchanges
            .insert(limits.exchange().to_string(), limits);
        if let Some(previous) = &replaced {
            warn!(
                "RiskSettings: risk limits for {:?} defined more than once, keeping the last entry",
                previous.exchange()
            );
        }
        replaced
    }

    /// Retrieves the limits of `exchange`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownExchange`] if no limits were configured for `exchange`.
    pub fn get(&self, exchange: &str) -> Result<&ExchangeRiskLimits> {
        self.exchanges
            .get(exchange)
            .ok_or_else(|| ConfigError::UnknownExchange(exchange.to_string()))
    }

    /// Limit for `symbol` on `exchange`. The exchange must be configured; the symbol may not be.
    pub fn limit(&self, exchange: &str, symbol: &str) -> Result<Option<&RiskLimit>> {
        Ok(self.get(exchange)?.get(symbol))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRiskLimits> {
        self.exchanges.values()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Lists `(exchange, symbol)` pairs whose limit has no matching instrument in `exchanges`.
    ///
    /// Loading never performs this check; callers decide whether an orphan limit is fatal.
    pub fn unknown_symbols(&self, exchanges: &ExchangeSettings) -> Vec<(String, String)> {
        let mut unknown = Vec::new();
        for limits in self.exchanges.values() {
            let definition = exchanges.get(limits.exchange()).ok();
            for limit in limits.iter() {
                let known = definition.is_some_and(|d| {
                    d.instruments()
                        .contains(&InstrumentId::symbol(limit.symbol()))
                });
                if !known {
                    unknown.push((limits.exchange().to_string(), limit.symbol().to_string()));
                }
            }
        }
        unknown.sort();
        unknown
    }
}

impl FromIterator<ExchangeRiskLimits> for RiskSettings {
    fn from_iter<I: IntoIterator<Item = ExchangeRiskLimits>>(iter: I) -> Self {
        let mut settings = Self::new();
        for limits in iter {
            settings.add(limits);
        }
        settings
    }
}

impl Loadable for RiskSettings {
    /// Decodes `{"risk-limits": [{"exchange", "instruments": [..]}, ..]}`.
    fn from_value(doc: &Value) -> Result<Self> {
        let record: RiskRecord = decode("risk-limits", doc)?;
        let settings: Self = record.risk_limits.into_iter().collect();
        info!("RiskSettings: loaded limits for {} exchanges", settings.len());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn limit(symbol: &str, quoted_size: i64) -> Value {
        json!({"symbol": symbol, "quoted-size": quoted_size, "max-long": 1000, "max-short": 800})
    }

    #[test]
    fn test_parse_risk_limits() {
        let doc = json!({"risk-limits": [
            {"exchange": "X", "instruments": [limit("AAPL", 100), limit("MSFT", 200)]},
            {"exchange": "Y", "instruments": [limit("ES", 5)]}
        ]});

        let settings = RiskSettings::from_value(&doc).unwrap();
        assert_eq!(settings.len(), 2);

        let aapl = settings.limit("X", "AAPL").unwrap().unwrap();
        assert_eq!(aapl.quoted_size(), 100);
        assert_eq!(aapl.max_long(), 1000);
        assert_eq!(aapl.max_short(), 800);

        assert_eq!(settings.get("Y").unwrap().len(), 1);
        assert!(settings.limit("Y", "AAPL").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_symbol_last_write_wins() {
        let doc = json!({"risk-limits": [
            {"exchange": "X", "instruments": [limit("AAPL", 100), limit("AAPL", 300)]}
        ]});

        let settings = RiskSettings::from_value(&doc).unwrap();
        let x = settings.get("X").unwrap();
        assert_eq!(x.len(), 1);
        assert_eq!(x.get("AAPL").unwrap().quoted_size(), 300);
    }

    #[test]
    fn test_duplicate_exchange_last_write_wins() {
        let doc = json!({"risk-limits": [
            {"exchange": "X", "instruments": [limit("AAPL", 100)]},
            {"exchange": "X", "instruments": [limit("MSFT", 200)]}
        ]});

        let settings = RiskSettings::from_value(&doc).unwrap();
        assert_eq!(settings.len(), 1);
        assert!(settings.limit("X", "AAPL").unwrap().is_none());
        assert!(settings.limit("X", "MSFT").unwrap().is_some());
    }

    #[test]
    fn test_unknown_exchange_is_error() {
        let settings = RiskSettings::from_value(&json!({"risk-limits": []})).unwrap();
        assert!(matches!(
            settings.get("X"),
            Err(ConfigError::UnknownExchange(_))
        ));
        assert!(settings.limit("X", "AAPL").is_err());
    }

    #[test]
    fn test_malformed_risk_limits() {
        assert!(RiskSettings::from_value(&json!({})).is_err());

        let missing_max_short = json!({"risk-limits": [
            {"exchange": "X", "instruments": [{"symbol": "AAPL", "quoted-size": 1, "max-long": 1}]}
        ]});
        assert!(matches!(
            RiskSettings::from_value(&missing_max_short),
            Err(ConfigError::Malformed { what: "risk-limits", .. })
        ));
    }

    #[test]
    fn test_unknown_symbols_report() {
        let exchanges = ExchangeSettings::from_value(&json!({"exchanges": [{
            "name": "X",
            "instruments": [{"symbol": "AAPL", "price-decimals": 2, "tick-size": 1}],
            "market-data": {},
            "order-entry": {}
        }]}))
        .unwrap();

        let risk = RiskSettings::from_value(&json!({"risk-limits": [
            {"exchange": "X", "instruments": [limit("AAPL", 1), limit("TSLA", 1)]},
            {"exchange": "Y", "instruments": [limit("ES", 1)]}
        ]}))
        .unwrap();

        assert_eq!(
            risk.unknown_symbols(&exchanges),
            vec![
                ("X".to_string(), "TSLA".to_string()),
                ("Y".to_string(), "ES".to_string())
            ]
        );
    }
}
