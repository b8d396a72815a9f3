use std::collections::BTreeMap;

/// Order book handle owned by a [`crate::Market`].
///
/// Matching and level maintenance belong to the trading engine; the registry only needs to
/// construct an empty book per market. Levels are kept as price (in ticks) -> resting quantity.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BTreeMap<i64, u64>,
    asks: BTreeMap<i64, u64>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither side holds a price level.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
