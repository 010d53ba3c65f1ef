use crate::error::{CodegenError, Result};
use crate::sql_meta::{FieldMetadata, ParseResult};
use tracing::info;

/// 根据解析结果渲染 Java 实体类源码
///
/// 带 error 的解析结果不允许进入模板阶段；字段列表为空时生成空类体。
pub fn render_entity(result: &ParseResult) -> Result<String> {
    if let Some(err) = &result.error {
        return Err(CodegenError::template(format!(
            "解析结果带有错误，无法生成实体: {err}"
        )));
    }
    let table_name = result
        .table_name
        .as_deref()
        .ok_or_else(|| CodegenError::template("解析结果缺少表名，无法生成实体"))?;
    let fields: &[FieldMetadata] = result.fields.as_deref().unwrap_or(&[]);

    let mut lines = Vec::new();

    let imports = collect_imports(fields);
    if !imports.is_empty() {
        for import in imports {
            lines.push(format!("import {import};"));
        }
        lines.push(String::new());
    }

    lines.push("@Entity".to_string());
    lines.push("@Table".to_string());
    lines.push(format!("public class {table_name} {{"));
    for field in fields {
        if !field.comment.is_empty() {
            lines.push(format!("    // {}", field.comment));
        }
        lines.push(format!(
            "    private {} {};",
            field.java_type, field.entity_field_name
        ));
    }
    lines.push("}".to_string());

    info!("实体类 {} 生成完成，共 {} 个字段", table_name, fields.len());
    Ok(lines.join("\n"))
}

/// 字段类型需要的 import 语句，按出现的类型收集
fn collect_imports(fields: &[FieldMetadata]) -> Vec<&'static str> {
    let mut imports = Vec::new();
    if fields.iter().any(|f| f.java_type == "BigDecimal") {
        imports.push("java.math.BigDecimal");
    }
    if fields.iter().any(|f| f.java_type == "Date") {
        imports.push("java.util.Date");
    }
    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_meta::parse_sql_to_field_metadata;

    #[test]
    fn test_render_entity_basic() {
        let sql = r#"
CREATE TABLE `template` (
    `id` BIGINT COMMENT '主键',
    `creator_id` BIGINT COMMENT '创建人ID',
    `name` VARCHAR(64)
)
        "#;
        let result = parse_sql_to_field_metadata(sql);
        let source = render_entity(&result).unwrap();

        assert!(source.contains("@Entity"));
        assert!(source.contains("@Table"));
        assert!(source.contains("public class template {"));
        assert!(source.contains("    // 创建人ID"));
        assert!(source.contains("    private Long creatorId;"));
        assert!(source.contains("    private String name;"));
        // 没有 BigDecimal 和 Date 字段时不生成 import
        assert!(!source.contains("import"));
    }

    #[test]
    fn test_render_entity_imports() {
        let sql = "CREATE TABLE t (price DECIMAL(10,2), created_at DATETIME)";
        let result = parse_sql_to_field_metadata(sql);
        let source = render_entity(&result).unwrap();

        assert!(source.contains("import java.math.BigDecimal;"));
        assert!(source.contains("import java.util.Date;"));
        assert!(source.contains("private BigDecimal price;"));
        assert!(source.contains("private Date createdAt;"));
    }

    #[test]
    fn test_render_entity_rejects_failed_parse() {
        let result = parse_sql_to_field_metadata("DROP TABLE user");
        let err = render_entity(&result).unwrap_err();
        assert!(err.to_string().contains("模板渲染失败"));
    }

    #[test]
    fn test_render_entity_rejects_empty_result() {
        let result = parse_sql_to_field_metadata("");
        assert!(render_entity(&result).is_err());
    }

    #[test]
    fn test_render_entity_empty_field_list() {
        let result = parse_sql_to_field_metadata("CREATE TABLE t (PRIMARY KEY (id))");
        let source = render_entity(&result).unwrap();
        assert!(source.contains("public class t {"));
        assert!(!source.contains("private"));
    }
}
