//! Index-addressed collection of batched callback results
//!
//! Every convenience form of a batched operation goes through
//! [`collect`]: it hands the manager a pair of callbacks, gathers what
//! they report into one slot per index, and turns the slots into a
//! vector once the manager returns.
//!
//! ## Slots
//!
//! Each index owns a `OnceCell`. Managers may report from several
//! threads at once; writes to different indices never contend, and a
//! second report for the same index is dropped with a warning.
//!
//! ## Error Policy
//!
//! | Policy | Per-element error |
//! |--------|-------------------|
//! | `Exception` | latched; `collect` returns `Error::BatchElement` |
//! | `Variant` | stored in the element's slot as `Err` |
//!
//! Under `Exception`, when several elements fail the lowest index wins,
//! whatever order the errors arrived in. Results for every other element
//! are discarded.

use assetlink_core::{Access, BatchElementError, EntityReference, Error, Result};
use assetlink_manager_api::{BatchElementErrorCallback, SuccessCallback};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Outcome of one element of a batch under the `Variant` policy.
pub type BatchOutcome<T> = std::result::Result<T, BatchElementError>;

/// How per-element errors surface from the convenience forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchElementErrorPolicy {
    /// Fail the whole call on the first (lowest-index) element error.
    Exception,
    /// Return every element's outcome, success or error, by index.
    Variant,
}

/// Per-index result sink shared with manager callbacks.
pub(crate) struct BatchCollector<T> {
    operation: &'static str,
    policy: BatchElementErrorPolicy,
    slots: Vec<OnceCell<BatchOutcome<T>>>,
    first_error: Mutex<Option<(usize, BatchElementError)>>,
}

impl<T> BatchCollector<T> {
    pub(crate) fn new(operation: &'static str, len: usize, policy: BatchElementErrorPolicy) -> Self {
        Self {
            operation,
            policy,
            slots: (0..len).map(|_| OnceCell::new()).collect(),
            first_error: Mutex::new(None),
        }
    }

    pub(crate) fn on_success(&self, index: usize, value: T) {
        self.store(index, Ok(value));
    }

    pub(crate) fn on_error(&self, index: usize, error: BatchElementError) {
        match self.policy {
            BatchElementErrorPolicy::Variant => self.store(index, Err(error)),
            BatchElementErrorPolicy::Exception => {
                if index >= self.slots.len() {
                    self.warn_out_of_range(index);
                    return;
                }
                let mut latch = self.first_error.lock();
                match latch.as_ref() {
                    Some((latched, _)) if *latched <= index => {}
                    _ => *latch = Some((index, error)),
                }
            }
        }
    }

    fn store(&self, index: usize, outcome: BatchOutcome<T>) {
        let Some(slot) = self.slots.get(index) else {
            self.warn_out_of_range(index);
            return;
        };
        if slot.set(outcome).is_err() {
            warn!(
                operation = self.operation,
                index, "Manager reported an index twice; keeping the first report"
            );
        }
    }

    fn warn_out_of_range(&self, index: usize) {
        warn!(
            operation = self.operation,
            index,
            len = self.slots.len(),
            "Manager reported an index outside the batch; ignoring"
        );
    }

    /// Turn the slots into outcomes, or the latched error into a failure.
    ///
    /// `references` names the entity of each index in rendered messages.
    pub(crate) fn finish(
        self,
        references: &[EntityReference],
        access: Access,
    ) -> Result<Vec<BatchOutcome<T>>> {
        if let Some((index, error)) = self.first_error.into_inner() {
            debug!(
                operation = self.operation,
                index, "Raising first element error of batch"
            );
            return match references.get(index) {
                Some(reference) => Err(Error::batch_element(index, error, reference, access)),
                None => Err(Error::internal(format!(
                    "{} failed at index {} with no entity reference: {}",
                    self.operation, index, error
                ))),
            };
        }

        let operation = self.operation;
        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.into_inner().ok_or_else(|| {
                    Error::internal(format!(
                        "{} reported no result for index {}",
                        operation, index
                    ))
                })
            })
            .collect()
    }
}

/// Run one batched manager call and collect its per-index results.
///
/// `dispatch` receives the success and error sinks and forwards them to
/// the canonical batched operation. Returns once the manager returns.
pub(crate) fn collect<T, F>(
    operation: &'static str,
    references: &[EntityReference],
    access: Access,
    policy: BatchElementErrorPolicy,
    dispatch: F,
) -> Result<Vec<BatchOutcome<T>>>
where
    T: Send + Sync,
    F: FnOnce(SuccessCallback<'_, T>, BatchElementErrorCallback<'_>) -> Result<()>,
{
    let collector = BatchCollector::new(operation, references.len(), policy);
    let on_success = |index: usize, value: T| collector.on_success(index, value);
    let on_error = |index: usize, error: BatchElementError| collector.on_error(index, error);
    dispatch(&on_success, &on_error)?;
    collector.finish(references, access)
}

fn escaped(error: BatchElementError) -> Error {
    Error::internal(format!(
        "element error escaped the exception policy: {}",
        error
    ))
}

/// Unwrap outcomes gathered under the `Exception` policy.
pub(crate) fn into_values<T>(outcomes: Vec<BatchOutcome<T>>) -> Result<Vec<T>> {
    outcomes
        .into_iter()
        .map(|outcome| outcome.map_err(escaped))
        .collect()
}

/// Unwrap the only outcome of a single-element batch gathered under the
/// `Exception` policy.
pub(crate) fn into_single_value<T>(outcomes: Vec<BatchOutcome<T>>) -> Result<T> {
    into_single(outcomes)?.map_err(escaped)
}

/// Take the only outcome of a single-element batch.
pub(crate) fn into_single<T>(outcomes: Vec<BatchOutcome<T>>) -> Result<BatchOutcome<T>> {
    let len = outcomes.len();
    let mut outcomes = outcomes.into_iter();
    match (outcomes.next(), outcomes.next()) {
        (Some(outcome), None) => Ok(outcome),
        _ => Err(Error::internal(format!(
            "expected exactly one outcome, got {}",
            len
        ))),
    }
}
