//! In-process component registry keyed by capability type.
//!
//! # Invariants
//! - At most one active component per capability.
//! - Fallback components never replace an existing registration.
//! - Explicit components replace fallbacks; two explicit ones conflict.

use crate::error::{StarterError, StarterResult};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::any::{type_name, Any, TypeId};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

static COMPONENT_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][A-Za-z0-9_]{0,63}$").expect("valid component name regex")
});

/// How a component entered the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationSource {
    /// Registered directly by the application.
    Explicit,
    /// Registered by a conditional auto-configuration.
    Fallback,
}

/// Metadata snapshot for one registered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    pub capability: &'static str,
    pub source: RegistrationSource,
}

struct ComponentEntry {
    descriptor: ComponentDescriptor,
    instance: Box<dyn Any + Send + Sync>,
}

/// Capability-keyed component registry.
pub struct ComponentRegistry {
    context_id: Uuid,
    entries: BTreeMap<TypeId, ComponentEntry>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            context_id: Uuid::new_v4(),
            entries: BTreeMap::new(),
        }
    }

    /// Correlation id for log events emitted during one startup.
    pub fn context_id(&self) -> Uuid {
        self.context_id
    }

    /// Registers `instance` as the explicit component for capability `C`.
    ///
    /// A fallback already in place is replaced. An explicit component already
    /// in place is a conflict.
    pub fn register<C>(&mut self, name: &str, instance: Arc<C>) -> StarterResult<()>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let name = validate_component_name(name)?;
        let capability = type_name::<C>();

        if let Some(existing) = self.entries.get(&TypeId::of::<C>()) {
            if existing.descriptor.source == RegistrationSource::Explicit {
                return Err(StarterError::DuplicateRegistration {
                    capability,
                    existing: existing.descriptor.name.clone(),
                    attempted: name,
                });
            }
            info!(
                "event=component_override module=context status=ok context_id={} capability={} replaced={} by={}",
                self.context_id, capability, existing.descriptor.name, name
            );
        }

        self.insert(name, instance, RegistrationSource::Explicit);
        Ok(())
    }

    /// Registers a fallback for capability `C` only when none exists.
    ///
    /// `factory` runs only when the registration takes effect. Returns
    /// whether the fallback was registered.
    pub fn register_if_missing<C, F>(&mut self, name: &str, factory: F) -> StarterResult<bool>
    where
        C: ?Sized + Send + Sync + 'static,
        F: FnOnce() -> Arc<C>,
    {
        let name = validate_component_name(name)?;
        if let Some(existing) = self.entries.get(&TypeId::of::<C>()) {
            debug!(
                "event=component_register module=context status=skip context_id={} capability={} existing={}",
                self.context_id,
                type_name::<C>(),
                existing.descriptor.name
            );
            return Ok(false);
        }

        self.insert(name, factory(), RegistrationSource::Fallback);
        Ok(true)
    }

    /// Resolves the active component for capability `C`.
    pub fn resolve<C>(&self) -> StarterResult<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.entries
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.instance.downcast_ref::<Arc<C>>())
            .cloned()
            .ok_or(StarterError::Resolution {
                capability: type_name::<C>(),
            })
    }

    pub fn contains<C>(&self) -> bool
    where
        C: ?Sized + 'static,
    {
        self.entries.contains_key(&TypeId::of::<C>())
    }

    /// Returns metadata for the component backing capability `C`.
    pub fn describe<C>(&self) -> Option<&ComponentDescriptor>
    where
        C: ?Sized + 'static,
    {
        self.entries
            .get(&TypeId::of::<C>())
            .map(|entry| &entry.descriptor)
    }

    /// Returns all descriptors sorted by component name.
    pub fn descriptors(&self) -> Vec<&ComponentDescriptor> {
        let mut values: Vec<_> = self.entries.values().map(|entry| &entry.descriptor).collect();
        values.sort_by(|left, right| left.name.cmp(&right.name));
        values
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert<C>(&mut self, name: String, instance: Arc<C>, source: RegistrationSource)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let capability = type_name::<C>();
        info!(
            "event=component_register module=context status=ok context_id={} capability={} name={} source={:?}",
            self.context_id, capability, name, source
        );
        self.entries.insert(
            TypeId::of::<C>(),
            ComponentEntry {
                descriptor: ComponentDescriptor {
                    name,
                    capability,
                    source,
                },
                instance: Box::new(instance),
            },
        );
    }
}

fn validate_component_name(value: &str) -> StarterResult<String> {
    let trimmed = value.trim();
    if !COMPONENT_NAME_RE.is_match(trimmed) {
        return Err(StarterError::InvalidComponentName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
