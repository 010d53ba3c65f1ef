use codegen_core::{CodegenError, Result, parse_sql_to_field_metadata, render_entity};
use std::path::Path;
use tracing::info;

use super::{read_sql_input, write_result};

/// 解析建表语句并生成 Java 实体类源码
pub fn run_generate(file: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let sql = read_sql_input(file)?;
    let result = parse_sql_to_field_metadata(&sql);

    if let Some(err) = &result.error {
        return Err(CodegenError::sql_parse(err.clone()));
    }

    let source = render_entity(&result)?;
    write_result(output, &source)?;

    if let Some(table) = &result.table_name {
        info!("实体类 {} 已生成", table);
    }
    Ok(())
}
