//! Error types for armory data loading and validation.
//!
//! Runtime accounting never fails: pool mutations clamp, skip or log instead.
//! These errors only surface while building catalogs and configuration.

use thiserror::Error;

use crate::item::{ItemCategory, ItemId};

/// Result type alias using [`ArmoryError`].
pub type Result<T> = std::result::Result<T, ArmoryError>;

/// Top-level error type for armory data errors.
#[derive(Debug, Error)]
pub enum ArmoryError {
    /// Data file parsing error.
    #[error("Failed to parse data file '{source_name}': {message}")]
    DataParseError {
        /// Name of the file or buffer that failed to parse.
        source_name: String,
        /// Error message.
        message: String,
    },

    /// Two catalog entries share an identifier.
    #[error("Duplicate item ID: {0}")]
    DuplicateItem(ItemId),

    /// Referenced item is not in the catalog.
    #[error("Unknown item ID: {0}")]
    UnknownItem(ItemId),

    /// Catalog entry violates a data rule.
    #[error("Invalid item '{id}': {reason}")]
    InvalidItem {
        /// Offending item.
        id: ItemId,
        /// What is wrong with it.
        reason: String,
    },

    /// Threshold rule cannot be evaluated.
    #[error("Invalid threshold for {category:?}: {reason}")]
    InvalidThreshold {
        /// Category the rule belongs to.
        category: ItemCategory,
        /// What is wrong with it.
        reason: String,
    },
}
