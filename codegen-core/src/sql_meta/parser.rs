use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::dialect::{infer_dialect, map_java_type};
use super::types::{Dialect, FieldMetadata, ParseResult};

/// 定位不到 CREATE TABLE 或括号不配对时返回的错误信息
const UNRECOGNIZED_CREATE_TABLE: &str = "无法识别 CREATE TABLE 语句";

static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)--.*$").unwrap());

static BLOCK_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static CREATE_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(?:["`\[]?\w+["`\]]?\.)?["`\[]?(\w+)["`\]]?\s*\("#,
    )
    .unwrap()
});

static COLUMN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["`\[]?(\w+)["`\]]?\s+(.*)$"#).unwrap());

static COLUMN_TYPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)(?:\s*\(([^)]+)\))?").unwrap());

static INLINE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)COMMENT\s+['"]([^'"]+)['"]"#).unwrap());

static EXTERNAL_COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)COMMENT\s+ON\s+COLUMN\s+(?:["`\[]?\w+["`\]]?\.)*["`\[]?(\w+)["`\]]?\s+IS\s+['"]([^'"]*)['"]"#,
    )
    .unwrap()
});

/// 表级约束子句的前缀集合，命中即整条丢弃
const CONSTRAINT_PREFIXES: [&str; 7] = [
    "PRIMARY KEY",
    "KEY",
    "INDEX",
    "UNIQUE",
    "CONSTRAINT",
    "FOREIGN KEY",
    "CHECK",
];

/// 解析建表语句，提取每一列的结构化元数据
///
/// 整个流程是对输入字符串的纯函数：清理注释、推断方言、定位 CREATE TABLE
/// 主体、按顶层逗号拆分子句、逐条解析列定义，最后回填 COMMENT ON COLUMN
/// 形式的外部注释。解析失败通过返回值的 error 字段表达，不会 panic。
pub fn parse_sql_to_field_metadata(sql: &str) -> ParseResult {
    if sql.is_empty() {
        return ParseResult::default();
    }

    let clean = clean_sql(sql);
    let dialect = infer_dialect(&clean);
    debug!("推断方言: {}", dialect);

    let Some(block) = find_create_table_block(&clean) else {
        return ParseResult {
            dialect: Some(dialect),
            error: Some(UNRECOGNIZED_CREATE_TABLE.to_string()),
            ..ParseResult::default()
        };
    };

    let mut fields = Vec::new();
    for clause in split_columns(&block.body) {
        if clause.is_empty() {
            continue;
        }
        if is_constraint_definition(&clause.to_uppercase()) {
            debug!("跳过表级约束: {}", clause);
            continue;
        }
        match parse_column_definition(&clause, dialect) {
            Some(field) => fields.push(field),
            None => debug!("无法识别的列定义，已跳过: {}", clause),
        }
    }

    apply_external_comments(&clean, &mut fields);

    info!("表 {} 解析完成，共 {} 个字段", block.table_name, fields.len());

    ParseResult {
        table_name: Some(block.table_name),
        dialect: Some(dialect),
        fields: Some(fields),
        error: None,
    }
}

/// 预处理：剥离行注释与块注释，再整体去除首尾空白
pub(crate) fn clean_sql(sql: &str) -> String {
    let without_line = LINE_COMMENT_RE.replace_all(sql, "");
    let without_block = BLOCK_COMMENT_RE.replace_all(&without_line, "");
    without_block.trim().to_string()
}

struct CreateTableBlock {
    table_name: String,
    body: String,
}

/// 定位首个 CREATE TABLE 语句，返回表名与括号内的列定义主体
///
/// 从开括号之后做括号深度扫描，深度回到 0 的位置即主体结束；
/// 括号始终不配对时视为定位失败。
fn find_create_table_block(sql: &str) -> Option<CreateTableBlock> {
    let caps = CREATE_TABLE_RE.captures(sql)?;
    let table_name = caps.get(1)?.as_str().to_string();
    let start = caps.get(0)?.end();

    let mut level = 1;
    let mut end = None;
    for (offset, ch) in sql[start..].char_indices() {
        match ch {
            '(' => level += 1,
            ')' => {
                level -= 1;
                if level == 0 {
                    end = Some(start + offset);
                    break;
                }
            }
            _ => {}
        }
    }

    Some(CreateTableBlock {
        table_name,
        body: sql[start..end?].to_string(),
    })
}

/// 按顶层逗号拆分列定义主体
///
/// 只有括号深度为 0 的逗号才是分隔符，DECIMAL(10,2) 这类嵌套逗号不拆。
fn split_columns(body: &str) -> Vec<String> {
    let mut columns = Vec::new();
    let mut level = 0;
    let mut current = String::new();
    for ch in body.chars() {
        match ch {
            '(' => {
                level += 1;
                current.push(ch);
            }
            ')' => {
                level -= 1;
                current.push(ch);
            }
            ',' if level == 0 => {
                columns.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    columns.push(current.trim().to_string());
    columns
}

/// 表级约束判定，对大写子句做前缀匹配
///
/// 列名本身以 KEY、INDEX 等开头的子句同样会被当作约束丢弃。
fn is_constraint_definition(upper_def: &str) -> bool {
    CONSTRAINT_PREFIXES
        .iter()
        .any(|prefix| upper_def.starts_with(prefix))
}

/// 解析单个列定义子句，无法识别时返回 None，由调用方跳过
pub(crate) fn parse_column_definition(def: &str, dialect: Dialect) -> Option<FieldMetadata> {
    let name_caps = COLUMN_NAME_RE.captures(def)?;
    let name = name_caps.get(1)?.as_str().to_string();
    let rest = name_caps.get(2)?.as_str();

    let type_caps = COLUMN_TYPE_RE.captures(rest)?;
    let db_type = type_caps.get(1)?.as_str().to_uppercase();

    let mut length = None;
    let mut precision = None;
    let mut scale = None;
    if let Some(args) = type_caps.get(2) {
        let args = args.as_str();
        if args.contains(',') {
            let mut parts = args.split(',');
            precision = parts.next().and_then(parse_leading_int);
            scale = parts.next().and_then(parse_leading_int);
        } else {
            length = parse_leading_int(args);
        }
    }

    let comment = INLINE_COMMENT_RE
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let java_type = map_java_type(dialect, &db_type, length, precision, scale);

    Some(FieldMetadata {
        entity_field_name: to_camel_case(&name),
        java_type: java_type.to_string(),
        db_type,
        length,
        precision,
        scale,
        comment,
        name,
    })
}

/// 解析类型参数中的整数，只取前导数字，容忍尾随修饰（如 "255 CHAR"）
fn parse_leading_int(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// 下划线命名转驼峰：整体转小写后，下划线后的字符改为大写
pub(crate) fn to_camel_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut chars = lower.chars();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            match chars.next() {
                Some(next) => result.extend(next.to_uppercase()),
                // 结尾的下划线原样保留
                None => result.push('_'),
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// 回填 COMMENT ON COLUMN 形式的外部注释
///
/// 在整段清理后的 SQL 中反复匹配，每个匹配覆盖第一个列名相同
/// （精确或忽略大小写）的字段注释；没有匹配的字段时不做任何事。
fn apply_external_comments(clean_sql: &str, fields: &mut [FieldMetadata]) {
    for caps in EXTERNAL_COMMENT_RE.captures_iter(clean_sql) {
        let (Some(column), Some(text)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let column = column.as_str();
        let field = fields
            .iter_mut()
            .find(|f| f.name == column || f.name.to_lowercase() == column.to_lowercase());
        if let Some(field) = field {
            debug!("外部注释覆盖列 {}: {}", field.name, text.as_str());
            field.comment = text.as_str().to_string();
        }
    }
}
