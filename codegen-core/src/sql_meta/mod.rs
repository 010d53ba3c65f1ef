mod dialect;
mod parser;
mod types;


// 重新导出公共接口
pub use dialect::infer_dialect;
pub use parser::parse_sql_to_field_metadata;
pub use types::{Dialect, FieldMetadata, ParseResult};
