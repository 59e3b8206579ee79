// Molder library entry point

pub mod internal;
pub mod molder;

pub use crate::internal::error::{Error, Result};
pub use crate::molder::{
    extract_namespace, DescriptionParser, FieldContext, FieldEntry, Lookup, Model,
    ModelDescription, Molder, MolderConfig,
};
