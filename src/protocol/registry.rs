//! Descriptor registry keyed by message id

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::catalog;
use super::{Error, MessageDescriptor, MessageShape, Result};

/// Descriptors registered under one id
///
/// Most ids have exactly one shape. A few (the relative and absolute move
/// commands) exist in both, and the header flag picks one at decode time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variants {
    short: Option<MessageDescriptor>,
    long: Option<MessageDescriptor>,
}

impl Variants {
    /// Descriptor for a specific shape
    #[must_use]
    pub const fn get(&self, shape: MessageShape) -> Option<&MessageDescriptor> {
        match shape {
            MessageShape::Short => self.short.as_ref(),
            MessageShape::Long => self.long.as_ref(),
        }
    }

    /// The only descriptor, if the id has exactly one shape
    #[must_use]
    pub const fn single(&self) -> Option<&MessageDescriptor> {
        match (&self.short, &self.long) {
            (Some(desc), None) | (None, Some(desc)) => Some(desc),
            _ => None,
        }
    }

    /// Check if both shapes are registered
    #[must_use]
    pub const fn is_dual(&self) -> bool {
        self.short.is_some() && self.long.is_some()
    }

    /// Iterate registered descriptors, short first
    pub fn iter(&self) -> impl Iterator<Item = &MessageDescriptor> {
        self.short.iter().chain(self.long.iter())
    }

    fn slot(&mut self, shape: MessageShape) -> &mut Option<MessageDescriptor> {
        match shape {
            MessageShape::Short => &mut self.short,
            MessageShape::Long => &mut self.long,
        }
    }
}

/// Read-only mapping from message id to descriptors
///
/// Built once, then shared by immutable reference; lookups never mutate.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<u16, Variants>,
}

impl Registry {
    /// Build a registry, validating every descriptor
    pub fn new(descriptors: impl IntoIterator<Item = MessageDescriptor>) -> Result<Self> {
        let mut entries: HashMap<u16, Variants> = HashMap::new();

        for desc in descriptors {
            desc.validate()?;
            let slot = entries.entry(desc.id()).or_default().slot(desc.shape());
            if slot.is_some() {
                return Err(Error::DuplicateDescriptor {
                    id: desc.id(),
                    shape: desc.shape(),
                });
            }
            *slot = Some(desc);
        }

        debug!(ids = entries.len(), "descriptor registry built");
        Ok(Self { entries })
    }

    /// Registry over the built-in catalog, constructed on first use
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            Self::new(catalog::DESCRIPTORS.iter().copied())
                .expect("built-in catalog is well-formed")
        })
    }

    /// All descriptors registered under `id`
    #[must_use]
    pub fn lookup(&self, id: u16) -> Option<&Variants> {
        self.entries.get(&id)
    }

    /// Descriptor for `id` in a specific shape
    #[must_use]
    pub fn resolve(&self, id: u16, shape: MessageShape) -> Option<&MessageDescriptor> {
        self.lookup(id).and_then(|variants| variants.get(shape))
    }

    /// Find a descriptor by protocol name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MessageDescriptor> {
        self.descriptors().find(|desc| desc.name() == name)
    }

    /// Iterate every registered descriptor (unordered)
    pub fn descriptors(&self) -> impl Iterator<Item = &MessageDescriptor> {
        self.entries.values().flat_map(Variants::iter)
    }

    /// Number of registered ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no ids are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
