// JSON description parser for Molder
//
// Builds `ModelDescription`s from plain JSON objects. JSON can only express
// path fields; computed fields are added in code afterwards.

use serde_json::{Map, Value};

use crate::internal::error::{Error, Result};
use crate::molder::description::{FieldEntry, ModelDescription, NAMESPACE_KEY, SERIALIZABLE_KEY};

/// Parser for JSON model descriptions
#[derive(Debug, Default)]
pub struct DescriptionParser;

impl DescriptionParser {
    /// Creates a new description parser
    pub fn new() -> Self {
        Self
    }

    /// Parses a JSON object into a description.
    ///
    /// `namespace` must be a string, `serializable` an array of strings, and
    /// every other key a string path. Key order is kept as field order.
    pub fn parse(&self, json: &Value) -> Result<ModelDescription> {
        let obj = match json {
            Value::Object(obj) => obj,
            _ => {
                return Err(Error::DescriptionError(
                    "Description must be a JSON object".to_string(),
                ))
            }
        };

        let mut description = ModelDescription::new();

        if let Some(namespace) = obj.get(NAMESPACE_KEY) {
            description = description.with_namespace(self.get_string(NAMESPACE_KEY, namespace)?);
        }

        if let Some(serializable) = obj.get(SERIALIZABLE_KEY) {
            description = description.with_serializable(self.parse_serializable(serializable)?);
        }

        self.parse_fields(obj, &mut description)?;

        Ok(description)
    }

    /// Parses a description from JSON text
    pub fn parse_str(&self, json: &str) -> Result<ModelDescription> {
        let value: Value = serde_json::from_str(json)?;
        self.parse(&value)
    }

    fn parse_fields(
        &self,
        obj: &Map<String, Value>,
        description: &mut ModelDescription,
    ) -> Result<()> {
        for (name, value) in obj {
            if name == NAMESPACE_KEY || name == SERIALIZABLE_KEY {
                continue;
            }
            let path = match value {
                Value::String(path) => path.clone(),
                other => {
                    return Err(Error::DescriptionError(format!(
                        "Field '{}' must be a path string, got {}",
                        name, other
                    )))
                }
            };
            description.insert(name.clone(), FieldEntry::Path(path));
        }
        Ok(())
    }

    fn parse_serializable(&self, value: &Value) -> Result<Vec<String>> {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                return Err(Error::DescriptionError(format!(
                    "Field '{}' must be an array of field names",
                    SERIALIZABLE_KEY
                )))
            }
        };

        items
            .iter()
            .map(|item| self.get_string(SERIALIZABLE_KEY, item))
            .collect()
    }

    /// Helper to read a string value
    fn get_string(&self, field: &str, value: &Value) -> Result<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(Error::DescriptionError(format!("Field '{}' must hold strings", field))),
        }
    }
}
