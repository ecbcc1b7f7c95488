//! Storage layer for the FPL Draft CLI
//!
//! Everything lives as JSON documents under one data directory:
//! - `layout`: where each document lives
//! - `store`: typed reads, atomic writes, gameweek record persistence
//! - `season`: the store seen as season inputs and record sink

pub mod layout;
pub mod season;
pub mod store;

#[cfg(test)]
mod tests;

pub use layout::DataLayout;
pub use season::StoredSeason;
pub use store::JsonStore;
