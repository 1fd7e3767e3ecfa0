/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use g3_types::metrics::ParseError;

/// A tag specification that can not be turned into a tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed tag #{index} '{spec}': {reason}")]
pub struct MalformedTag {
    /// Position of the tag in the fragment, counted from 0.
    pub index: usize,
    /// The raw specification, lossy decoded.
    pub spec: String,
    pub reason: ParseError,
}
