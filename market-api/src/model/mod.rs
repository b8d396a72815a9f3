//! Core data models for the instrument and market registries.
//!
//! # Submodules
//! - [`instrument`]: Instrument definitions and the dual-form [`instrument::InstrumentId`] key.
//! - [`instrument_db`]: The instrument registry and the exchange filter.
//! - [`market`]: Markets (instrument + order book) partitioned per exchange.
//! - [`risk`]: Per-instrument risk bounds grouped by exchange.

pub mod instrument;
pub mod instrument_db;
pub mod market;
pub mod order_book;
pub mod risk;
pub mod session;
