use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codegen CLI - SQL 建表语句解析与 Java 实体代码生成工具
#[derive(Parser, Debug)]
#[command(name = "codegen-cli", version, about, long_about = None)]
pub struct Cli {
    /// 启用详细日志输出（DEBUG 级别）
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 解析建表语句，输出字段元数据 JSON
    Parse {
        /// SQL 文件路径（不指定时从标准输入读取）
        file: Option<PathBuf>,
        /// 输出文件路径（不指定时输出到标准输出）
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// 解析建表语句并生成 Java 实体类源码
    Generate {
        /// SQL 文件路径（不指定时从标准输入读取）
        file: Option<PathBuf>,
        /// 输出文件路径（不指定时输出到标准输出）
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
