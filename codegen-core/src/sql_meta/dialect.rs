use super::types::Dialect;
use tracing::debug;

/// 根据特征词推断 SQL 方言
///
/// 判定顺序固定：先 Oracle，再 PostgreSQL，最后 MySQL；都未命中时回退 MySQL。
pub fn infer_dialect(sql: &str) -> Dialect {
    let upper = sql.to_uppercase();
    if upper.contains("NUMBER(") || upper.contains("VARCHAR2") || upper.contains("SYSDATE") {
        return Dialect::Oracle;
    }
    if upper.contains("BIGSERIAL")
        || upper.contains("TEXT[]")
        || upper.contains("JSONB")
        || upper.contains("BYTEA")
    {
        return Dialect::PostgreSql;
    }
    // 反引号是字面量检查，不做大小写转换
    if sql.contains('`')
        || upper.contains("ENGINE=INNODB")
        || upper.contains("AUTO_INCREMENT")
        || upper.contains("TINYINT")
    {
        return Dialect::MySql;
    }
    debug!("未命中任何方言特征词，按 MySQL 处理");
    Dialect::MySql
}

/// (方言, 类型关键字, 长度/精度/小数位) 到 Java 类型名的固定映射
///
/// 未覆盖的类型一律回退 String，不报错。
pub(crate) fn map_java_type(
    dialect: Dialect,
    db_type: &str,
    length: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
) -> &'static str {
    match dialect {
        Dialect::MySql => map_type_mysql(db_type, length),
        Dialect::PostgreSql => map_type_postgresql(db_type),
        Dialect::Oracle => map_type_oracle(db_type, precision, scale),
    }
}

fn map_type_mysql(db_type: &str, length: Option<u32>) -> &'static str {
    match db_type {
        "VARCHAR" | "CHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "JSON" | "ENUM"
        | "SET" => "String",
        "INT" | "INTEGER" | "SMALLINT" | "MEDIUMINT" => "Integer",
        // TINYINT(1) 按惯例当作布尔
        "TINYINT" => {
            if length == Some(1) {
                "Boolean"
            } else {
                "Integer"
            }
        }
        "BIGINT" => "Long",
        "DECIMAL" | "NUMERIC" => "BigDecimal",
        "FLOAT" | "DOUBLE" | "REAL" => "Double",
        "BIT" => match length {
            Some(1) | None => "Boolean",
            _ => "byte[]",
        },
        "DATE" | "DATETIME" | "TIMESTAMP" | "TIME" | "YEAR" => "Date",
        "BLOB" | "LONGBLOB" | "MEDIUMBLOB" | "TINYBLOB" | "BINARY" | "VARBINARY" => "byte[]",
        _ => "String",
    }
}

fn map_type_postgresql(db_type: &str) -> &'static str {
    match db_type {
        "VARCHAR" | "CHAR" | "TEXT" | "UUID" | "INET" | "JSON" | "JSONB" | "XML" => "String",
        "INT4" | "INT" | "INTEGER" | "SMALLINT" | "INT2" => "Integer",
        "INT8" | "BIGINT" | "BIGSERIAL" | "SERIAL" => "Long",
        "NUMERIC" | "DECIMAL" | "MONEY" => "BigDecimal",
        "FLOAT4" | "REAL" | "FLOAT8" | "DOUBLE" => "Double",
        "BOOL" | "BOOLEAN" => "Boolean",
        "DATE" | "TIMESTAMP" | "TIMESTAMPTZ" | "TIME" => "Date",
        "BYTEA" => "byte[]",
        // 数组类型等一律按 String 处理
        _ => "String",
    }
}

/// NUMBER 的数值分类：scale 大于 0 为小数，其余按 precision 落到整型区间；
/// 单参数写法 NUMBER(n) 填的是 length 而非 precision，会落到 Integer
fn map_type_oracle(db_type: &str, precision: Option<u32>, scale: Option<u32>) -> &'static str {
    match db_type {
        "VARCHAR2" | "NVARCHAR2" | "CHAR" | "NCHAR" | "CLOB" | "NCLOB" | "ROWID" => "String",
        "NUMBER" => {
            if scale.is_some_and(|s| s > 0) {
                return "BigDecimal";
            }
            match precision {
                Some(p) if p > 18 => "BigDecimal",
                Some(p) if p > 9 => "Long",
                _ => "Integer",
            }
        }
        "FLOAT" | "BINARY_FLOAT" | "BINARY_DOUBLE" => "Double",
        "DATE" | "TIMESTAMP" => "Date",
        "BLOB" | "RAW" | "LONG RAW" => "byte[]",
        _ => "String",
    }
}
