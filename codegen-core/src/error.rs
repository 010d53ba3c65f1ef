use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("SQL 解析失败: {0}")]
    SqlParse(String),

    #[error("模板渲染失败: {0}")]
    Template(String),

    #[error("自定义错误: {0}")]
    Custom(String),
}

impl CodegenError {
    pub fn sql_parse(msg: impl Into<String>) -> Self {
        Self::SqlParse(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}
