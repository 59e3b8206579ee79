// Model population
//
// Projects a source value into a fresh model according to a description. Path
// fields are looked up against the namespaced root; computed fields receive a
// `FieldContext` giving them the root, the fields populated so far and the
// ability to populate nested descriptions.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::internal::error::{Error, Result};
use crate::molder::config::MolderConfig;
use crate::molder::description::{FieldEntry, ModelDescription};
use crate::molder::namespace::{extract_namespace, Lookup};

/// A populated model, keyed by field name in declaration order
pub type Model = Map<String, Value>;

/// Populates and desolates models from descriptions
#[derive(Debug, Clone, Default)]
pub struct Molder {
    config: MolderConfig,
}

impl Molder {
    /// Creates a molder with default configuration
    pub fn new() -> Self {
        Self {
            config: MolderConfig::default(),
        }
    }

    /// Creates a molder with custom configuration
    pub fn with_config(config: MolderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &MolderConfig {
        &self.config
    }

    /// Builds a new model from `source` according to `description`.
    ///
    /// Fails with [`Error::NamespaceMissing`] when the namespace does not
    /// resolve, or resolves to `null`, and the description declares at least
    /// one path field. A
    /// description made only of computed fields still runs them, with no root.
    pub fn populate(&self, description: &ModelDescription, source: &Value) -> Result<Model> {
        self.populate_at(description, source, 1)
    }

    fn populate_at(
        &self,
        description: &ModelDescription,
        source: &Value,
        depth: usize,
    ) -> Result<Model> {
        if depth > self.config.max_depth {
            return Err(Error::RecursionLimit {
                limit: self.config.max_depth,
            });
        }

        debug!(namespace = ?description.namespace(), depth, "populating model");

        let root = match description.namespace() {
            Some(namespace) => extract_namespace(source, namespace)
                .as_option()
                .filter(|root| !root.is_null()),
            None => Some(source),
        };

        if root.is_none() && description.has_primitive_fields() {
            let namespace = description.namespace().unwrap_or_default().to_string();
            debug!(%namespace, "namespace not found, skipping population");
            return Err(Error::NamespaceMissing { namespace });
        }

        let mut model = Model::new();
        for (name, entry) in description.fields() {
            let value = match entry {
                FieldEntry::Path(path) => {
                    trace!(field = name, path = %path, "resolving path field");
                    root.map(|root| extract_namespace(root, path))
                        .unwrap_or(Lookup::NotFound)
                        .cloned_or_null()
                }
                FieldEntry::Computed(compute) => {
                    trace!(field = name, "evaluating computed field");
                    let context = FieldContext {
                        molder: self,
                        root,
                        model: &model,
                        depth,
                    };
                    compute(&context)?
                }
            };
            model.insert(name.to_string(), value);
        }

        Ok(model)
    }
}

/// What a computed field sees while it is evaluated
#[derive(Debug)]
pub struct FieldContext<'a> {
    molder: &'a Molder,
    root: Option<&'a Value>,
    model: &'a Model,
    depth: usize,
}

impl<'a> FieldContext<'a> {
    /// The namespaced root, `None` when the namespace did not resolve
    pub fn root(&self) -> Option<&'a Value> {
        self.root
    }

    /// Resolves a dotted path against any value
    pub fn extract<'v>(&self, origin: &'v Value, namespace: &str) -> Lookup<'v> {
        extract_namespace(origin, namespace)
    }

    /// Resolves a dotted path against the namespaced root
    pub fn lookup(&self, path: &str) -> Lookup<'a> {
        match self.root {
            Some(root) => extract_namespace(root, path),
            None => Lookup::NotFound,
        }
    }

    /// A field assigned earlier in declaration order
    pub fn sibling(&self, name: &str) -> Option<&'a Value> {
        self.model.get(name)
    }

    /// Every field assigned so far
    pub fn model(&self) -> &'a Model {
        self.model
    }

    /// Nesting level of the populate call evaluating this field
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Populates a nested description one level deeper
    pub fn populate(&self, description: &ModelDescription, source: &Value) -> Result<Model> {
        self.molder.populate_at(description, source, self.depth + 1)
    }

    /// Like [`populate`](Self::populate) but yields `Value::Null` when the
    /// nested namespace is missing.
    pub fn populate_value(&self, description: &ModelDescription, source: &Value) -> Result<Value> {
        match self.populate(description, source) {
            Ok(model) => Ok(Value::Object(model)),
            Err(err) if err.is_namespace_missing() => Ok(Value::Null),
            Err(err) => Err(err),
        }
    }
}
