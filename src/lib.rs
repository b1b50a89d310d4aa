// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

//! Internal library for the oddeven tool.
//!
//! The crate ships one contract, [`OddEvenDiff`], and the smallest harness able to
//! exercise it the way a chain-backed test runner would: a [`DevChain`] environment
//! holding a registry of deployable contract templates, a [`ContractFactory`] obtained
//! by looking a template up by name, and a [`Deployed`] instance handle produced by an
//! asynchronous deployment. Method invocation goes through the instance handle as a
//! single awaited call, and any failure propagates straight back to the caller.
//!
//! ## The shape of a session
//!
//! A session always follows the same three steps: construct a chain, deploy a template
//! through its factory, call a method on the deployed instance. Nothing persists
//! between sessions, and no instance survives the chain that created it. The harness
//! models exactly what the deploy/call flow needs. There are no accounts, no gas, and
//! no transaction log.
//!
//! [`OddEvenDiff`]: crate::contract::OddEvenDiff
//! [`DevChain`]: crate::chain::DevChain
//! [`ContractFactory`]: crate::chain::ContractFactory
//! [`Deployed`]: crate::chain::Deployed

#![warn(
    clippy::complexity,
    clippy::correctness,
    missing_debug_implementations,
    rust_2021_compatibility
)]

pub mod chain;
pub mod cmd;
pub mod contract;

use crate::chain::Address;

/// Result type alias for whole crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for whole crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No deployable template registered under the requested name.
    #[error("no contract named {name:?} is registered")]
    ContractNotFound {
        /// Name the factory lookup was given.
        name: String,
    },

    /// Deployed instance does not expose the requested method.
    #[error("contract at {address} has no method {method:?}")]
    MethodNotFound {
        /// Address of the instance that rejected the call.
        address: Address,

        /// Method name the call was given.
        method: String,
    },
}

/// Determine exit status from given error.
///
/// Attempts to downcast into crate [`Error`] to select a meaningful exit status.
/// Anything else is reported as plain software failure.
pub fn exit_status_from_error(error: anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::ContractNotFound { .. } | Error::MethodNotFound { .. }) => exitcode::USAGE,
        None => exitcode::SOFTWARE,
    }
}
