//! Application context: the populated registry plus startup diagnostics.
//!
//! # Responsibility
//! - Hold components registered during startup.
//! - Expose read-only resolution once startup registration is finished.

pub mod registry;

use crate::autoconfigure::ConditionEvaluationReport;
use crate::error::StarterResult;
use registry::{ComponentDescriptor, ComponentRegistry};
use std::sync::Arc;
use uuid::Uuid;

/// Frozen view over a fully populated registry.
pub struct ApplicationContext {
    registry: ComponentRegistry,
    report: ConditionEvaluationReport,
}

impl ApplicationContext {
    pub fn new(registry: ComponentRegistry, report: ConditionEvaluationReport) -> Self {
        Self { registry, report }
    }

    pub fn id(&self) -> Uuid {
        self.registry.context_id()
    }

    /// Resolves the active component for capability `C`.
    pub fn resolve<C>(&self) -> StarterResult<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.registry.resolve::<C>()
    }

    pub fn describe<C>(&self) -> Option<&ComponentDescriptor>
    where
        C: ?Sized + 'static,
    {
        self.registry.describe::<C>()
    }

    pub fn components(&self) -> Vec<&ComponentDescriptor> {
        self.registry.descriptors()
    }

    /// Outcome of every auto-configuration considered during startup.
    pub fn condition_report(&self) -> &ConditionEvaluationReport {
        &self.report
    }
}
