// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by the ledger store and the report engine.
///
/// Aggregation calls only ever fail with `InvalidArgument` (bad caller
/// input) or `StoreUnavailable` (the underlying database failed); they are
/// pure reads and leave no partial state behind.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ledger store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),

    #[error("corrupt ledger row: {0}")]
    Corrupt(String),

    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("transfer requires a destination account")]
    MissingTransferAccount,

    #[error("account {0} is referenced by transactions and cannot be deleted")]
    AccountInUse(i64),

    #[error("category {0} is referenced by transactions and cannot be deleted")]
    CategoryInUse(i64),

    #[error("category {0} still has subcategories")]
    CategoryHasChildren(i64),
}

impl LedgerError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LedgerError::InvalidArgument(msg.into())
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        LedgerError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
