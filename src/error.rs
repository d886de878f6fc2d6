// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Errors
//
// The economy computations themselves never fail: bad per-entity input is
// skipped or clamped. These errors come from building the engine (tuning
// tables, catalogs) and from decoding values at the JS boundary.

/// Errors raised while configuring the engine or marshalling its inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid constant `{field}`: {reason}")]
    InvalidConstant { field: &'static str, reason: String },

    #[error("species `{0}` is defined twice in the catalog")]
    DuplicateSpecies(String),

    #[error("item `{0}` is defined twice in the catalog")]
    DuplicateItem(String),

    #[error("invalid catalog entry `{id}` field `{field}`: {reason}")]
    InvalidCatalogEntry { id: String, field: &'static str, reason: String },

    #[error("could not decode input: {0}")]
    Decode(String),

    #[error("could not encode output: {0}")]
    Encode(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
