// Model descriptions for Molder
//
// A description names the namespace to extract from, the fields to populate
// (dotted paths or computed functions) and optionally the fields that survive
// desolation.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::internal::error::Result;
use crate::molder::populate::FieldContext;

/// Key holding the namespace in a JSON description
pub const NAMESPACE_KEY: &str = "namespace";

/// Key holding the serializable list in a JSON description
pub const SERIALIZABLE_KEY: &str = "serializable";

/// Names that never count as model fields
pub const RESERVED_KEYS: [&str; 2] = [NAMESPACE_KEY, SERIALIZABLE_KEY];

/// Function backing a computed field
pub type ComputedFn = Arc<dyn Fn(&FieldContext<'_>) -> Result<Value> + Send + Sync>;

/// A single field entry of a description
#[derive(Clone)]
pub enum FieldEntry {
    /// Dotted path resolved against the namespaced root
    Path(String),
    /// Function producing a derived value
    Computed(ComputedFn),
}

impl FieldEntry {
    /// Returns true for path ("primitive") fields
    pub fn is_path(&self) -> bool {
        matches!(self, FieldEntry::Path(_))
    }

    /// Returns true for computed fields
    pub fn is_computed(&self) -> bool {
        matches!(self, FieldEntry::Computed(_))
    }
}

impl fmt::Debug for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldEntry::Path(path) => f.debug_tuple("Path").field(path).finish(),
            FieldEntry::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// Describes how a model is populated from a source and reduced for output
#[derive(Debug, Clone, Default)]
pub struct ModelDescription {
    namespace: Option<String>,
    fields: Vec<(String, FieldEntry)>,
    serializable: Option<Vec<String>>,
}

impl ModelDescription {
    /// Creates an empty description without namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace the fields are resolved against
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Adds a path field
    pub fn path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(name, FieldEntry::Path(path.into()));
        self
    }

    /// Adds a computed field
    pub fn computed<F>(mut self, name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&FieldContext<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.insert(name, FieldEntry::Computed(Arc::new(compute)));
        self
    }

    /// Sets the explicit list of serializable field names
    pub fn with_serializable<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.serializable = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Inserts a field entry. Re-declaring a name replaces the entry but keeps
    /// its original position. Reserved names are never fields and are ignored.
    pub fn insert(&mut self, name: impl Into<String>, entry: FieldEntry) {
        let name = name.into();
        if RESERVED_KEYS.contains(&name.as_str()) {
            warn!(field = %name, "ignoring field entry with reserved name");
            return;
        }
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = entry,
            None => self.fields.push((name, entry)),
        }
    }

    /// The namespace, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Field entries in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldEntry)> + '_ {
        self.fields.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Looks up a field entry by name
    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Number of field entries
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field entries are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if at least one path field is declared
    pub fn has_primitive_fields(&self) -> bool {
        self.fields.iter().any(|(_, entry)| entry.is_path())
    }

    /// The explicit serializable list, if one was given
    pub fn serializable(&self) -> Option<&[String]> {
        self.serializable.as_deref()
    }

    /// Names kept by desolation.
    ///
    /// The explicit list when present, otherwise every non-computed field.
    pub fn serializable_fields(&self) -> Vec<String> {
        match &self.serializable {
            Some(names) => names.clone(),
            None => self
                .fields
                .iter()
                .filter(|(_, entry)| !entry.is_computed())
                .map(|(name, _)| name.clone())
                .collect(),
        }
    }
}
