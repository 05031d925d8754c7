//! Condition-guarded registration units applied after application components.
//!
//! # Responsibility
//! - Evaluate each auto-configuration's conditions against the registry.
//! - Apply matching auto-configurations in declaration order.
//! - Record every decision in a `ConditionEvaluationReport`.
//!
//! # Invariants
//! - An auto-configuration is applied only when all its conditions match.
//! - Excluded auto-configurations are never evaluated or applied.

pub mod hello;

use crate::config::StarterConfig;
use crate::context::registry::ComponentRegistry;
use crate::error::StarterResult;
use log::{debug, info};
use std::any::type_name;

/// One precondition of an auto-configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Capability must be compiled into the build.
    OnCapability {
        capability: &'static str,
        present: bool,
    },
    /// No component may be registered yet for the capability.
    OnMissingComponent {
        capability: &'static str,
        present: bool,
    },
}

impl Condition {
    pub fn on_capability(capability: &'static str, present: bool) -> Self {
        Self::OnCapability {
            capability,
            present,
        }
    }

    /// Snapshots whether capability `C` is already registered.
    pub fn on_missing_component<C>(registry: &ComponentRegistry) -> Self
    where
        C: ?Sized + 'static,
    {
        Self::OnMissingComponent {
            capability: type_name::<C>(),
            present: registry.contains::<C>(),
        }
    }

    pub fn evaluate(&self) -> ConditionOutcome {
        match self {
            Self::OnCapability {
                capability,
                present: true,
            } => ConditionOutcome::matched(format!("capability `{capability}` is available")),
            Self::OnCapability {
                capability,
                present: false,
            } => ConditionOutcome::no_match(format!(
                "capability `{capability}` is not compiled into this build"
            )),
            Self::OnMissingComponent {
                capability,
                present: false,
            } => ConditionOutcome::matched(format!(
                "no component registered for `{capability}`"
            )),
            Self::OnMissingComponent {
                capability,
                present: true,
            } => ConditionOutcome::no_match(format!(
                "component already registered for `{capability}`"
            )),
        }
    }
}

/// Result of evaluating one condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
    pub matched: bool,
    pub message: String,
}

impl ConditionOutcome {
    pub fn matched(message: impl Into<String>) -> Self {
        Self {
            matched: true,
            message: message.into(),
        }
    }

    pub fn no_match(message: impl Into<String>) -> Self {
        Self {
            matched: false,
            message: message.into(),
        }
    }
}

/// Library-provided registration unit guarded by conditions.
pub trait AutoConfiguration {
    /// Stable name, also used for configuration-driven exclusion.
    fn name(&self) -> &'static str;

    /// Conditions evaluated against the registry right before applying.
    fn conditions(&self, registry: &ComponentRegistry) -> Vec<Condition>;

    /// Registers components. Called only when every condition matched.
    fn configure(&self, registry: &mut ComponentRegistry) -> StarterResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoConfigurationStatus {
    Applied,
    Skipped,
    Excluded,
}

/// Report entry for one auto-configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoConfigurationReport {
    pub name: &'static str,
    pub status: AutoConfigurationStatus,
    pub outcomes: Vec<ConditionOutcome>,
}

/// Ordered record of auto-configuration decisions made during startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionEvaluationReport {
    entries: Vec<AutoConfigurationReport>,
}

impl ConditionEvaluationReport {
    pub fn entries(&self) -> &[AutoConfigurationReport] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&AutoConfigurationReport> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Names of applied auto-configurations, in application order.
    pub fn applied(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|entry| entry.status == AutoConfigurationStatus::Applied)
            .map(|entry| entry.name)
            .collect()
    }

    fn record(&mut self, entry: AutoConfigurationReport) {
        self.entries.push(entry);
    }
}

/// Returns the starter's built-in auto-configurations, in application order.
pub fn default_auto_configurations(config: &StarterConfig) -> Vec<Box<dyn AutoConfiguration>> {
    vec![Box::new(hello::HelloServiceAutoConfiguration::from_config(
        &config.hello,
    ))]
}

/// Evaluates and applies auto-configurations against `registry`.
///
/// # Errors
/// - Propagates the first `configure` failure.
pub fn apply_auto_configurations(
    registry: &mut ComponentRegistry,
    auto_configurations: &[Box<dyn AutoConfiguration>],
    config: &StarterConfig,
) -> StarterResult<ConditionEvaluationReport> {
    let mut report = ConditionEvaluationReport::default();

    for auto_configuration in auto_configurations {
        let name = auto_configuration.name();
        if config.autoconfigure.is_excluded(name) {
            info!(
                "event=auto_configuration module=autoconfigure status=excluded context_id={} name={}",
                registry.context_id(),
                name
            );
            report.record(AutoConfigurationReport {
                name,
                status: AutoConfigurationStatus::Excluded,
                outcomes: vec![],
            });
            continue;
        }

        let outcomes: Vec<ConditionOutcome> = auto_configuration
            .conditions(registry)
            .iter()
            .map(Condition::evaluate)
            .collect();
        for outcome in &outcomes {
            debug!(
                "event=condition_evaluated module=autoconfigure context_id={} name={} matched={} message={}",
                registry.context_id(),
                name,
                outcome.matched,
                outcome.message
            );
        }

        let status = if outcomes.iter().all(|outcome| outcome.matched) {
            auto_configuration.configure(registry)?;
            AutoConfigurationStatus::Applied
        } else {
            AutoConfigurationStatus::Skipped
        };
        info!(
            "event=auto_configuration module=autoconfigure status={:?} context_id={} name={}",
            status,
            registry.context_id(),
            name
        );
        report.record(AutoConfigurationReport {
            name,
            status,
            outcomes,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_auto_configurations, AutoConfiguration, AutoConfigurationStatus, Condition,
    };
    use crate::config::StarterConfig;
    use crate::context::registry::ComponentRegistry;
    use crate::error::StarterResult;
    use std::sync::Arc;

    trait Clock: Send + Sync {}

    struct SystemClock;

    impl Clock for SystemClock {}

    struct ClockAutoConfiguration {
        compiled_in: bool,
    }

    impl AutoConfiguration for ClockAutoConfiguration {
        fn name(&self) -> &'static str {
            "clock"
        }

        fn conditions(&self, registry: &ComponentRegistry) -> Vec<Condition> {
            vec![
                Condition::on_capability("clock", self.compiled_in),
                Condition::on_missing_component::<dyn Clock>(registry),
            ]
        }

        fn configure(&self, registry: &mut ComponentRegistry) -> StarterResult<()> {
            registry.register_if_missing::<dyn Clock, _>("clock", || Arc::new(SystemClock))?;
            Ok(())
        }
    }

    #[test]
    fn condition_messages_describe_outcome() {
        let outcome = Condition::on_capability("clock", false).evaluate();
        assert!(!outcome.matched);
        assert!(outcome.message.contains("not compiled"));

        let registry = ComponentRegistry::new();
        let outcome = Condition::on_missing_component::<dyn Clock>(&registry).evaluate();
        assert!(outcome.matched);
    }

    #[test]
    fn applies_when_all_conditions_match() {
        let mut registry = ComponentRegistry::new();
        let configs: Vec<Box<dyn AutoConfiguration>> =
            vec![Box::new(ClockAutoConfiguration { compiled_in: true })];

        let report = apply_auto_configurations(&mut registry, &configs, &StarterConfig::default())
            .expect("auto-configuration");

        assert_eq!(report.applied(), vec!["clock"]);
        assert!(registry.contains::<dyn Clock>());
    }

    #[test]
    fn skips_when_capability_is_absent() {
        let mut registry = ComponentRegistry::new();
        let configs: Vec<Box<dyn AutoConfiguration>> =
            vec![Box::new(ClockAutoConfiguration { compiled_in: false })];

        let report = apply_auto_configurations(&mut registry, &configs, &StarterConfig::default())
            .expect("auto-configuration");

        let entry = report.get("clock").expect("clock entry");
        assert_eq!(entry.status, AutoConfigurationStatus::Skipped);
        assert_eq!(entry.outcomes.len(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn excluded_configuration_is_not_evaluated() {
        let mut registry = ComponentRegistry::new();
        let configs: Vec<Box<dyn AutoConfiguration>> =
            vec![Box::new(ClockAutoConfiguration { compiled_in: true })];
        let mut config = StarterConfig::default();
        config.autoconfigure.exclude.push("clock".to_string());

        let report =
            apply_auto_configurations(&mut registry, &configs, &config).expect("auto-configuration");

        let entry = report.get("clock").expect("clock entry");
        assert_eq!(entry.status, AutoConfigurationStatus::Excluded);
        assert!(entry.outcomes.is_empty());
        assert!(registry.is_empty());
    }
}
