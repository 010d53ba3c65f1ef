// 私有模块声明
mod cli;
mod commands;
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use cli::{Cli, Commands};
pub use commands::{run_generate, run_parse};
pub use utils::setup_logging;
