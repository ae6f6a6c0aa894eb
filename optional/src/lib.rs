// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![deny(unsafe_code)]

//! # retro-optional wraps a value that may be missing
//!
//! An [`Optional`] is either [`Optional::Present`] with exactly one value or
//! [`Optional::Absent`]. Values enter through [`Optional::wrap`], which maps a
//! missing input to `Absent`, or through [`Optional::absent`].
//!
//! Every combinator ([`Optional::map`], [`Optional::flat_map`],
//! [`Optional::filter`], [`Optional::do_if_present`], the `or_else` family)
//! skips the caller's closure entirely when the optional is absent:
//!
//! ```
//! use retro_optional::Optional;
//!
//! let calls = std::cell::Cell::new(0);
//! let out = Optional::<i32>::absent().map(|x| {
//!     calls.set(calls.get() + 1);
//!     x + 1
//! });
//! assert!(!out.is_present());
//! assert_eq!(calls.get(), 0);
//! ```
//!
//! Reading an absent value is reported as [`Error::ElementNotFound`] rather
//! than a panic.

mod error;
mod optional;

/// Logger module for handling logging functionality
pub mod logger;

pub use error::Error;
pub use optional::{IntoIter, Optional};
