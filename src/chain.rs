// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

//! In-process deployment harness.
//!
//! This module provides the environment that contract tests run against. A [`DevChain`]
//! owns a registry of deployable contract templates keyed by name. Looking a template
//! up produces a [`ContractFactory`], deployment produces a [`Deployed`] instance bound
//! to a fresh [`Address`], and method invocation routes through [`ContractAbi`] so the
//! harness never needs to know which concrete contract it is holding.

use crate::{contract::OddEvenDiff, Error, Result};

use std::{
    collections::BTreeMap,
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tracing::{info, instrument, trace};

/// First address handed out by a fresh chain.
const ADDRESS_BASE: u64 = 0x1000;

/// Deployable contract template constructor.
type Template = fn() -> Arc<dyn ContractAbi>;

/// Call surface every deployable contract exposes to the harness.
///
/// Dispatch is string keyed on purpose. The harness mirrors a runtime that resolves
/// methods by name at call time, so an unknown method is a call-time failure rather
/// than a compile-time one.
pub trait ContractAbi: fmt::Debug + Send + Sync {
    /// Template name this contract registers under.
    fn name(&self) -> &'static str;

    /// Route a named method call, or [`None`] if the method does not exist.
    fn dispatch(&self, method: &str, input: &[i64]) -> Option<i64>;
}

/// Contract deployment address.
///
/// Opaque identity of one deployed instance. Only ever produced by deployment, and
/// only unique within the chain that allocated it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Address(u64);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// In-process contract chain environment.
///
/// Stand-in for the external node a chain-backed test runner would talk to. Holds
/// every built-in contract template, and allocates addresses for deployments.
///
/// # Invariants
///
/// - Addresses are unique per chain and monotonically increasing.
/// - Deployment is only reachable through [`DevChain::factory`], so every live
///   instance traces back to a registered template.
#[derive(Debug)]
pub struct DevChain {
    templates: BTreeMap<&'static str, Template>,
    next_address: AtomicU64,
}

impl DevChain {
    /// Construct new chain environment with all built-in templates registered.
    pub fn new() -> Self {
        let mut templates: BTreeMap<&'static str, Template> = BTreeMap::new();
        templates.insert(OddEvenDiff::NAME, || Arc::new(OddEvenDiff::new()));

        Self { templates, next_address: AtomicU64::new(ADDRESS_BASE) }
    }

    /// Look up deployable contract template by name.
    ///
    /// # Errors
    ///
    /// - Return [`Error::ContractNotFound`] if no template registered under given name.
    #[instrument(skip(self), level = "debug")]
    pub fn factory(&self, name: impl AsRef<str> + fmt::Debug) -> Result<ContractFactory<'_>> {
        let name = name.as_ref();
        let template = self
            .templates
            .get(name)
            .copied()
            .ok_or(Error::ContractNotFound { name: name.into() })?;

        Ok(ContractFactory { chain: self, template })
    }

    /// Iterate names of all registered contract templates.
    pub fn contract_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }

    fn allocate_address(&self) -> Address {
        Address(self.next_address.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for DevChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one registered contract template.
///
/// Obtained from [`DevChain::factory`]. Its sole purpose is to produce live instances
/// through [`ContractFactory::deploy`].
#[derive(Clone, Copy, Debug)]
pub struct ContractFactory<'chain> {
    chain: &'chain DevChain,
    template: Template,
}

impl ContractFactory<'_> {
    /// Deploy new instance of this factory's template.
    ///
    /// Each deployment constructs a fresh contract and binds it to the next address
    /// allocated by the owning chain.
    #[instrument(skip(self), level = "debug")]
    pub async fn deploy(&self) -> Result<Deployed> {
        let contract = (self.template)();
        let address = self.chain.allocate_address();
        info!("Deploy {} at {address}", contract.name());

        Ok(Deployed { address, contract })
    }
}

/// Live contract instance produced by deployment.
#[derive(Clone, Debug)]
pub struct Deployed {
    address: Address,
    contract: Arc<dyn ContractAbi>,
}

impl Deployed {
    /// Address this instance was deployed at.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Template name of the contract behind this instance.
    pub fn name(&self) -> &'static str {
        self.contract.name()
    }

    /// Invoke named method on this instance.
    ///
    /// # Errors
    ///
    /// - Return [`Error::MethodNotFound`] if instance does not expose given method.
    #[instrument(skip(self), level = "debug")]
    pub async fn call(&self, method: impl AsRef<str> + fmt::Debug, input: &[i64]) -> Result<i64> {
        let method = method.as_ref();
        trace!("Call {}::{method} at {}", self.contract.name(), self.address);

        self.contract.dispatch(method, input).ok_or_else(|| Error::MethodNotFound {
            address: self.address,
            method: method.into(),
        })
    }
}
