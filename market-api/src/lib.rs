//! # Market API
//!
//! Plain data model shared by the market-making engine: instruments addressable by symbol or
//! numeric id, per-exchange market registries, risk limit records and the collaborator seams
//! (`OrderBook`, `SessionDescriptor`) the engine attaches live behaviour to.
//!
//! Nothing in this crate performs I/O. Configuration loading lives in `market-core`.

pub mod model;

pub use model::instrument::{Instrument, InstrumentId};
pub use model::instrument_db::{filter, InstrumentDB};
pub use model::market::{Market, MarketDB};
pub use model::order_book::OrderBook;
pub use model::risk::{ExchangeRiskLimits, RiskLimit};
pub use model::session::SessionDescriptor;
