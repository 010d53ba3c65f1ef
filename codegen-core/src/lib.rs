pub mod error;
pub mod sql_meta;
pub mod template;

pub use error::{CodegenError, Result};
pub use sql_meta::{Dialect, FieldMetadata, ParseResult, parse_sql_to_field_metadata};
pub use template::render_entity;
