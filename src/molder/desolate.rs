// Model desolation
//
// Reduces a populated model to the fields its description allows out. The
// allow-list is decided from the description alone; computed fields only make it
// through when listed explicitly.

use tracing::debug;

use crate::internal::error::Result;
use crate::molder::description::ModelDescription;
use crate::molder::populate::{Model, Molder};

impl Molder {
    /// Returns a new model holding only the serializable fields of `model`,
    /// in allow-list order. Names absent from `model` are skipped.
    pub fn desolate(&self, description: &ModelDescription, model: &Model) -> Model {
        let allowed = description.serializable_fields();
        debug!(
            explicit = description.serializable().is_some(),
            fields = ?allowed,
            "desolating model"
        );

        allowed
            .into_iter()
            .filter_map(|name| model.get(&name).cloned().map(|value| (name, value)))
            .collect()
    }

    /// Desolates `model` and renders the result as compact JSON.
    pub fn desolate_to_string(
        &self,
        description: &ModelDescription,
        model: &Model,
    ) -> Result<String> {
        Ok(serde_json::to_string(&self.desolate(description, model))?)
    }
}
