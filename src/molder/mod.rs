// Molder: declarative model population for JSON-like data
//
// This module turns namespaced source data into models and reduces models back
// to their serializable fields. It includes:
//
// 1. Dotted namespace resolution
// 2. Model descriptions with path and computed fields
// 3. A JSON description parser
// 4. Population with bounded nesting
// 5. Desolation to an allow-list of fields

// Re-export public types and functions
pub use self::config::MolderConfig;
pub use self::description::{ComputedFn, FieldEntry, ModelDescription};
pub use self::namespace::{extract_namespace, Lookup};
pub use self::parser::DescriptionParser;
pub use self::populate::{FieldContext, Model, Molder};

// Sub-modules
pub mod config;
pub mod description;
pub mod namespace;
pub mod parser;
pub mod populate;

mod desolate;
