// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use thiserror::Error;

/// Errors returned by [`Optional`](crate::Optional) accessors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value was read from an absent optional
    #[error("element not found")]
    ElementNotFound,
}
