pub mod persistence;

pub use persistence::load_document;
