mod generate;
mod parse;

pub use generate::run_generate;
pub use parse::run_parse;

use codegen_core::Result;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// 读取 SQL 输入：指定了文件就读文件，否则读标准输入
pub(crate) fn read_sql_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// 写出结果：指定了输出文件就落盘，否则打印到标准输出
pub(crate) fn write_result(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("已写入 {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
