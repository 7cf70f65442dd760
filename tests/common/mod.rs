//! Shared test utilities for the integration test suites.
//!
//! Provides an in-memory manager whose capabilities, info, element
//! errors and callback delivery order are all configurable, and that
//! records what the host asked of it.
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

pub use assetlink::{
    BatchElementError, BatchElementErrorCallback, BatchElementErrorCode, Capability, Context,
    DefaultEntityAccess, EntityReference, EntityReferencePagerInterface,
    EntityReferencePagerInterfacePtr, EntityReferences, EntityTraitsAccess, Error, HostInterface,
    HostSession, InfoDictionary, Manager, ManagerInterface, ManagerState, ManagerStateHandle,
    PolicyAccess, PublishingAccess, RelationsAccess, ResolveAccess, Result, SuccessCallback,
    TraitSet, TraitsData, Value,
};
use parking_lot::Mutex;
use rayon::prelude::*;

/// Reference scheme the mock manager recognizes.
pub const PREFIX: &str = "mock://";

/// Trait every resolved entity carries.
pub const LOCATABLE: &str = "mock:locatable";

/// Trait set for which the mock has a default reference.
pub const DEFAULTABLE: &str = "mock:defaultable";

// ============================================================================
// Host
// ============================================================================

/// Minimal host identity.
pub struct TestHost;

impl HostInterface for TestHost {
    fn identifier(&self) -> String {
        "org.assetlink.test.host".into()
    }

    fn display_name(&self) -> String {
        "Test Host".into()
    }
}

pub fn host_session() -> HostSession {
    HostSession::new(Arc::new(TestHost))
}

// ============================================================================
// State
// ============================================================================

/// State handed out by the mock for stateful contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockState {
    pub id: u64,
    pub parent: Option<u64>,
}

impl ManagerState for MockState {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn state_of(context: &Context) -> Option<MockState> {
    context
        .manager_state
        .as_ref()
        .and_then(|state| state.as_any().downcast_ref::<MockState>())
        .cloned()
}

// ============================================================================
// Callback delivery
// ============================================================================

/// Order in which the mock reports batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Forward,
    Reverse,
    /// From rayon worker threads, in no particular order.
    Parallel,
}

pub const ALL_DELIVERIES: [Delivery; 3] = [Delivery::Forward, Delivery::Reverse, Delivery::Parallel];

// ============================================================================
// MockManager
// ============================================================================

/// In-memory manager for driving the host facade.
pub struct MockManager {
    capabilities: Mutex<BTreeSet<Capability>>,
    capabilities_after_initialize: Option<BTreeSet<Capability>>,
    info: InfoDictionary,
    delivery: Delivery,
    element_errors: BTreeMap<String, BatchElementError>,
    related: EntityReferences,
    settings: Mutex<InfoDictionary>,
    calls: Mutex<Vec<&'static str>>,
    reference_checks: AtomicUsize,
    pager_calls: Arc<AtomicUsize>,
    page_sizes: Mutex<Vec<usize>>,
    next_state_id: AtomicU64,
}

impl MockManager {
    pub const IDENTIFIER: &'static str = "org.assetlink.test.mock";

    /// A manager with every capability, no published prefix, and forward
    /// delivery.
    pub fn new() -> Self {
        Self {
            capabilities: Mutex::new(Capability::ALL.iter().copied().collect()),
            capabilities_after_initialize: None,
            info: InfoDictionary::new(),
            delivery: Delivery::Forward,
            element_errors: BTreeMap::new(),
            related: EntityReferences::new(),
            settings: Mutex::new(InfoDictionary::new()),
            calls: Mutex::new(Vec::new()),
            reference_checks: AtomicUsize::new(0),
            pager_calls: Arc::new(AtomicUsize::new(0)),
            page_sizes: Mutex::new(Vec::new()),
            next_state_id: AtomicU64::new(1),
        }
    }

    pub fn without_capability(self, capability: Capability) -> Self {
        self.capabilities.lock().remove(&capability);
        self
    }

    /// Capabilities the manager only reports once initialized.
    pub fn with_capabilities_after_initialize(mut self, capabilities: &[Capability]) -> Self {
        self.capabilities_after_initialize = Some(capabilities.iter().copied().collect());
        self
    }

    pub fn with_info(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.info.insert(key.to_string(), value.into());
        self
    }

    /// Publish [`PREFIX`] as the entity reference prefix.
    pub fn with_prefix(self) -> Self {
        self.with_info(
            assetlink::constants::INFO_KEY_ENTITY_REFERENCES_MATCH_PREFIX,
            PREFIX,
        )
    }

    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Report `code` for `reference` from every batched operation.
    pub fn failing(mut self, reference: &str, code: BatchElementErrorCode) -> Self {
        self.element_errors.insert(
            reference.to_string(),
            BatchElementError::new(code, format!("mock failure for {}", reference)),
        );
        self
    }

    /// Entities every relationship query pages over.
    pub fn with_related(mut self, count: usize) -> Self {
        self.related = (0..count)
            .map(|i| EntityReference::new_unchecked(format!("{}related/{}", PREFIX, i)))
            .collect();
        self
    }

    // ------------------------------------------------------------------------
    // Recorded interactions
    // ------------------------------------------------------------------------

    /// Names of the manager methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|m| **m == method).count()
    }

    /// How often the manager was asked to validate a reference string.
    pub fn reference_checks(&self) -> usize {
        self.reference_checks.load(Ordering::SeqCst)
    }

    /// Calls made on any pager this manager handed out.
    pub fn pager_calls(&self) -> usize {
        self.pager_calls.load(Ordering::SeqCst)
    }

    pub fn page_sizes(&self) -> Vec<usize> {
        self.page_sizes.lock().clone()
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn record(&self, method: &'static str) {
        self.calls.lock().push(method);
    }

    fn element_error(&self, reference: &EntityReference) -> Option<BatchElementError> {
        self.element_errors.get(reference.as_str()).cloned()
    }

    fn checked(&self, reference: &EntityReference) -> std::result::Result<(), BatchElementError> {
        match self.element_error(reference) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn new_state(&self, parent: Option<u64>) -> ManagerStateHandle {
        let id = self.next_state_id.fetch_add(1, Ordering::SeqCst);
        Arc::new(MockState { id, parent })
    }

    fn pager(&self, page_size: usize) -> EntityReferencePagerInterfacePtr {
        Box::new(MockPager {
            items: self.related.clone(),
            page_size,
            offset: 0,
            calls: Arc::clone(&self.pager_calls),
        })
    }

    /// Report each index's outcome through the callbacks in the
    /// configured order.
    fn deliver<T, F>(
        &self,
        len: usize,
        success: SuccessCallback<'_, T>,
        error: BatchElementErrorCallback<'_>,
        outcome: F,
    ) where
        T: Send,
        F: Fn(usize) -> std::result::Result<T, BatchElementError> + Sync,
    {
        let report = |index: usize| match outcome(index) {
            Ok(value) => success(index, value),
            Err(e) => error(index, e),
        };
        match self.delivery {
            Delivery::Forward => (0..len).for_each(report),
            Delivery::Reverse => (0..len).rev().for_each(report),
            Delivery::Parallel => (0..len).into_par_iter().for_each(report),
        }
    }
}

fn state_id(state: &ManagerStateHandle) -> Result<u64> {
    state
        .as_any()
        .downcast_ref::<MockState>()
        .map(|s| s.id)
        .ok_or_else(|| Error::Manager {
            reason: "state was not created by this manager".into(),
        })
}

impl ManagerInterface for MockManager {
    fn identifier(&self) -> String {
        Self::IDENTIFIER.into()
    }

    fn display_name(&self) -> String {
        "Mock Manager".into()
    }

    fn info(&self) -> InfoDictionary {
        self.info.clone()
    }

    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.lock().contains(&capability)
    }

    fn settings(&self, _host_session: &HostSession) -> Result<InfoDictionary> {
        Ok(self.settings.lock().clone())
    }

    fn initialize(&self, settings: InfoDictionary, _host_session: &HostSession) -> Result<()> {
        self.record("initialize");
        if settings.get("fail").and_then(Value::as_bool) == Some(true) {
            return Err(Error::Manager {
                reason: "initialization refused".into(),
            });
        }
        *self.settings.lock() = settings;
        if let Some(capabilities) = &self.capabilities_after_initialize {
            *self.capabilities.lock() = capabilities.clone();
        }
        Ok(())
    }

    fn management_policy(
        &self,
        trait_sets: &[TraitSet],
        _access: PolicyAccess,
        _context: &Context,
        _host_session: &HostSession,
    ) -> Result<Vec<TraitsData>> {
        self.record("management_policy");
        Ok(trait_sets
            .iter()
            .map(|trait_set| {
                let mut policy = TraitsData::new();
                if trait_set.contains(LOCATABLE) {
                    policy.add_trait("mock:managed");
                }
                policy
            })
            .collect())
    }

    fn create_state(&self, _host_session: &HostSession) -> Result<ManagerStateHandle> {
        self.record("create_state");
        Ok(self.new_state(None))
    }

    fn create_child_state(
        &self,
        parent_state: &ManagerStateHandle,
        _host_session: &HostSession,
    ) -> Result<ManagerStateHandle> {
        self.record("create_child_state");
        let parent = state_id(parent_state)?;
        Ok(self.new_state(Some(parent)))
    }

    fn persistence_token_for_state(
        &self,
        state: &ManagerStateHandle,
        _host_session: &HostSession,
    ) -> Result<String> {
        self.record("persistence_token_for_state");
        Ok(format!("mock-state:{}", state_id(state)?))
    }

    fn state_from_persistence_token(
        &self,
        token: &str,
        _host_session: &HostSession,
    ) -> Result<ManagerStateHandle> {
        self.record("state_from_persistence_token");
        let id = token
            .strip_prefix("mock-state:")
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| Error::Manager {
                reason: format!("unrecognized token: {}", token),
            })?;
        Ok(Arc::new(MockState { id, parent: None }))
    }

    fn is_entity_reference_string(&self, some_string: &str, _host_session: &HostSession) -> bool {
        self.reference_checks.fetch_add(1, Ordering::SeqCst);
        some_string.starts_with(PREFIX)
    }

    fn entity_exists(
        &self,
        entity_references: &[EntityReference],
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, bool>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("entity_exists");
        self.deliver(entity_references.len(), success, error, |i| {
            let reference = &entity_references[i];
            self.checked(reference)?;
            Ok(!reference.as_str().ends_with("/missing"))
        });
        Ok(())
    }

    fn entity_traits(
        &self,
        entity_references: &[EntityReference],
        _access: EntityTraitsAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, TraitSet>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("entity_traits");
        self.deliver(entity_references.len(), success, error, |i| {
            self.checked(&entity_references[i])?;
            Ok(TraitSet::from([LOCATABLE.to_string()]))
        });
        Ok(())
    }

    fn resolve(
        &self,
        entity_references: &[EntityReference],
        trait_set: &TraitSet,
        _access: ResolveAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, TraitsData>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("resolve");
        self.deliver(entity_references.len(), success, error, |i| {
            let reference = &entity_references[i];
            self.checked(reference)?;
            let mut data = TraitsData::with_traits(trait_set);
            if trait_set.contains(LOCATABLE) {
                data.set_trait_property(LOCATABLE, "location", reference.as_str());
            }
            Ok(data)
        });
        Ok(())
    }

    fn default_entity_reference(
        &self,
        trait_sets: &[TraitSet],
        _access: DefaultEntityAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, Option<EntityReference>>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("default_entity_reference");
        self.deliver(trait_sets.len(), success, error, |i| {
            Ok(trait_sets[i]
                .contains(DEFAULTABLE)
                .then(|| EntityReference::new_unchecked(format!("{}default", PREFIX))))
        });
        Ok(())
    }

    fn get_with_relationship(
        &self,
        entity_references: &[EntityReference],
        _relationship: &TraitsData,
        _result_trait_set: &TraitSet,
        page_size: usize,
        _access: RelationsAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, EntityReferencePagerInterfacePtr>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("get_with_relationship");
        self.page_sizes.lock().push(page_size);
        self.deliver(entity_references.len(), success, error, |i| {
            self.checked(&entity_references[i])?;
            Ok(self.pager(page_size))
        });
        Ok(())
    }

    fn get_with_relationships(
        &self,
        entity_reference: &EntityReference,
        relationships: &[TraitsData],
        _result_trait_set: &TraitSet,
        page_size: usize,
        _access: RelationsAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, EntityReferencePagerInterfacePtr>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("get_with_relationships");
        self.page_sizes.lock().push(page_size);
        self.deliver(relationships.len(), success, error, |_| {
            self.checked(entity_reference)?;
            Ok(self.pager(page_size))
        });
        Ok(())
    }

    fn preflight(
        &self,
        entity_references: &[EntityReference],
        _traits_hints: &[TraitsData],
        _access: PublishingAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, EntityReference>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("preflight");
        self.deliver(entity_references.len(), success, error, |i| {
            let reference = &entity_references[i];
            self.checked(reference)?;
            Ok(EntityReference::new_unchecked(format!(
                "{}?preflight",
                reference
            )))
        });
        Ok(())
    }

    fn register(
        &self,
        entity_references: &[EntityReference],
        _entity_traits_datas: &[TraitsData],
        _access: PublishingAccess,
        _context: &Context,
        _host_session: &HostSession,
        success: SuccessCallback<'_, EntityReference>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        self.record("register");
        self.deliver(entity_references.len(), success, error, |i| {
            let reference = &entity_references[i];
            self.checked(reference)?;
            Ok(EntityReference::new_unchecked(format!("{}#v1", reference)))
        });
        Ok(())
    }
}

// ============================================================================
// MockPager
// ============================================================================

/// Pages over a fixed list of references.
pub struct MockPager {
    items: EntityReferences,
    page_size: usize,
    offset: usize,
    calls: Arc<AtomicUsize>,
}

impl EntityReferencePagerInterface for MockPager {
    fn has_next(&mut self, _host_session: &HostSession) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.offset + self.page_size < self.items.len())
    }

    fn get(&mut self, _host_session: &HostSession) -> Result<EntityReferences> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let start = self.offset.min(self.items.len());
        let end = (self.offset + self.page_size).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }

    fn next(&mut self, _host_session: &HostSession) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.offset += self.page_size;
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Wrap `mock` in a host-side manager without initializing it.
pub fn uninitialized(mock: MockManager) -> (Manager, Arc<MockManager>) {
    let mock = Arc::new(mock);
    let manager = Manager::new(mock.clone(), host_session());
    (manager, mock)
}

/// Wrap and initialize `mock` with empty settings.
pub fn initialized(mock: MockManager) -> (Manager, Arc<MockManager>) {
    let (manager, mock) = uninitialized(mock);
    manager
        .initialize(InfoDictionary::new())
        .expect("mock manager should initialize");
    (manager, mock)
}

/// `n` references `mock://entity/0` .. `mock://entity/{n-1}`.
pub fn references(n: usize) -> Vec<EntityReference> {
    (0..n)
        .map(|i| EntityReference::new_unchecked(format!("{}entity/{}", PREFIX, i)))
        .collect()
}

pub fn locatable() -> TraitSet {
    TraitSet::from([LOCATABLE.to_string()])
}

/// Where the mock resolves `reference` to.
pub fn location_of(data: &TraitsData) -> Option<String> {
    data.get_trait_property(LOCATABLE, "location")
        .and_then(Value::as_str)
        .map(str::to_string)
}
