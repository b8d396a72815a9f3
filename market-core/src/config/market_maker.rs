use super::risk::RiskSettings;
use super::{decode, Loadable};
use crate::error::Result;
use log::info;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct MarketMakerRecord {
    trader_id: u64,
    oms_id: u64,
}

/// Settings of one market-maker process.
///
/// Decoded from a single document carrying `trader-id`, `oms-id` and, inline, the
/// `risk-limits` section.
#[derive(Debug, Clone)]
pub struct MarketMakerConfig {
    trader_id: u64,
    /// Id of the execution engine (OMS) the market maker routes orders through.
    engine_id: u64,
    risk: RiskSettings,
}

impl MarketMakerConfig {
    pub fn new(trader_id: u64, engine_id: u64, risk: RiskSettings) -> Self {
        Self {
            trader_id,
            engine_id,
            risk,
        }
    }

    pub fn trader_id(&self) -> u64 {
        self.trader_id
    }

    pub fn engine_id(&self) -> u64 {
        self.engine_id
    }

    pub fn risk(&self) -> &RiskSettings {
        &self.risk
    }
}

impl Loadable for MarketMakerConfig {
    fn from_value(doc: &Value) -> Result<Self> {
        let record: MarketMakerRecord = decode("market-maker", doc)?;
        let risk = RiskSettings::from_value(doc)?;
        info!(
            "MarketMakerConfig: trader {} on engine {}",
            record.trader_id, record.oms_id
        );
        Ok(Self::new(record.trader_id, record.oms_id, risk))
    }
}
