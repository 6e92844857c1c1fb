//! Exercise entities, value objects, validation, and fallback content.

pub mod entities;
pub mod fallback;
pub mod validation;
pub mod value_objects;
