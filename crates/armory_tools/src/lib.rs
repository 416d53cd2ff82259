//! # Armory Tools
//!
//! Offline helpers for armory data:
//! - Data directory validation
//! - Rebalance runs against a stock snapshot

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod loader;
pub mod rebalance;
pub mod validate;
