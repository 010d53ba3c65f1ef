use codegen_core::{CodegenError, Result, parse_sql_to_field_metadata};
use std::path::Path;
use tracing::{info, warn};

use super::{read_sql_input, write_result};

/// 解析建表语句并输出字段元数据 JSON
///
/// 解析失败时仍会输出携带 error 字段的 JSON，随后以错误退出。
pub fn run_parse(file: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let sql = read_sql_input(file)?;
    let result = parse_sql_to_field_metadata(&sql);

    let json = serde_json::to_string_pretty(&result)?;
    write_result(output, &json)?;

    if let Some(err) = &result.error {
        warn!("解析失败: {}", err);
        return Err(CodegenError::sql_parse(err.clone()));
    }

    if let (Some(table), Some(fields)) = (&result.table_name, &result.fields) {
        info!("表 {} 共解析出 {} 个字段", table, fields.len());
    }
    Ok(())
}
