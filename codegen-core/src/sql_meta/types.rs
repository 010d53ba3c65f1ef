use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL 方言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dialect {
    #[default]
    MySql,
    PostgreSql,
    Oracle,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::MySql => "MYSQL",
            Dialect::PostgreSql => "POSTGRESQL",
            Dialect::Oracle => "ORACLE",
        };
        f.write_str(name)
    }
}

/// 单个列的元数据，供实体模板消费
///
/// length 与 precision/scale 互斥：类型参数只有一个数字时填 length，
/// 逗号分隔的一对数字时填 precision/scale，没有参数则三者均为空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    /// 列名（保留 SQL 中的原始写法）
    pub name: String,
    /// 列名的驼峰形式，作为实体字段名
    pub entity_field_name: String,
    /// 映射后的 Java 类型名
    pub java_type: String,
    /// 大写的数据库类型关键字
    pub db_type: String,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    /// 列注释，没有时为空字符串
    pub comment: String,
}

/// 建表语句的解析结果
///
/// error 与 table_name/fields 互斥：解析失败时只有 error 和 dialect 有值。
/// 空输入直接返回全空的默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_serializes_to_empty_object() {
        let json = serde_json::to_string(&ParseResult::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_field_metadata_json_shape() {
        let field = FieldMetadata {
            name: "creator_id".to_string(),
            entity_field_name: "creatorId".to_string(),
            java_type: "Long".to_string(),
            db_type: "BIGINT".to_string(),
            length: None,
            precision: None,
            scale: None,
            comment: "创建人ID".to_string(),
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains(r#""entityFieldName":"creatorId""#));
        assert!(json.contains(r#""javaType":"Long""#));
        assert!(json.contains(r#""dbType":"BIGINT""#));
        // 无参数的类型三个数值字段都输出 null
        assert!(json.contains(r#""length":null"#));
    }

    #[test]
    fn test_dialect_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Dialect::MySql).unwrap(), r#""MYSQL""#);
        assert_eq!(
            serde_json::to_string(&Dialect::PostgreSql).unwrap(),
            r#""POSTGRESQL""#
        );
        assert_eq!(serde_json::to_string(&Dialect::Oracle).unwrap(), r#""ORACLE""#);
        assert_eq!(Dialect::PostgreSql.to_string(), "POSTGRESQL");
    }
}
