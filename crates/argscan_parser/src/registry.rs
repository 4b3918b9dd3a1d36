//! The set of descriptors a parse call matches against.

use hashbrown::HashMap;
use indexmap::IndexMap;
use thiserror::Error;

use crate::Descriptor;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("option name must not be empty")]
    EmptyName,
    #[error("invalid option name '{0}': names cannot start with '-' or contain '='")]
    InvalidName(String),
    #[error("invalid short name {short:?} for option --{name}")]
    InvalidShortName { short: char, name: String },
    #[error("duplicate option name --{0}")]
    DuplicateName(String),
    #[error("short name -{short} of --{name} is already used by --{existing}")]
    DuplicateShortName {
        short: char,
        name: String,
        existing: String,
    },
}

/// Descriptors in declaration order, unique by long and by short name.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, Descriptor>,
    shorts: HashMap<char, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = Descriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for d in descriptors {
            registry.add(d)?;
        }
        Ok(registry)
    }

    /// Builder form of [`Registry::add`].
    pub fn with(mut self, descriptor: Descriptor) -> Result<Self, RegistryError> {
        self.add(descriptor)?;
        Ok(self)
    }

    pub fn add(&mut self, descriptor: Descriptor) -> Result<(), RegistryError> {
        let name = descriptor.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if name.starts_with('-') || name.contains('=') {
            return Err(RegistryError::InvalidName(name));
        }
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        if let Some(short) = descriptor.short() {
            if short == '-' || short.is_whitespace() || short.is_control() {
                return Err(RegistryError::InvalidShortName { short, name });
            }
            if let Some(&idx) = self.shorts.get(&short) {
                let existing = self.entries[idx].name().to_string();
                return Err(RegistryError::DuplicateShortName {
                    short,
                    name,
                    existing,
                });
            }
            self.shorts.insert(short, self.entries.len());
        }
        self.entries.insert(name, descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_long_name(&self, name: &str) -> Option<&Descriptor> {
        self.entries.get(name)
    }

    pub fn find_by_long_name_mut(&mut self, name: &str) -> Option<&mut Descriptor> {
        self.entries.get_mut(name)
    }

    pub fn find_by_short_name(&self, short: char) -> Option<&Descriptor> {
        let idx = *self.shorts.get(&short)?;
        self.entries.get_index(idx).map(|(_, d)| d)
    }

    pub fn find_by_short_name_mut(&mut self, short: char) -> Option<&mut Descriptor> {
        let idx = *self.shorts.get(&short)?;
        self.entries.get_index_mut(idx).map(|(_, d)| d)
    }

    /// Shorthand for [`Registry::find_by_long_name`].
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.find_by_long_name(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(Descriptor::is_set)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names from `required` that are undeclared or still unset.
    pub fn unset<'n>(&self, required: &[&'n str]) -> Vec<&'n str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.is_set(name))
            .collect()
    }

    pub(crate) fn index_of_long(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub(crate) fn index_of_short(&self, short: char) -> Option<usize> {
        self.shorts.get(&short).copied()
    }

    pub(crate) fn descriptor(&self, idx: usize) -> &Descriptor {
        &self.entries[idx]
    }

    pub(crate) fn descriptor_mut(&mut self, idx: usize) -> &mut Descriptor {
        &mut self.entries[idx]
    }
}

impl<'r> IntoIterator for &'r Registry {
    type Item = &'r Descriptor;
    type IntoIter = indexmap::map::Values<'r, String, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
