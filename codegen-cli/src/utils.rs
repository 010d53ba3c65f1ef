/// 设置日志记录系统
///
/// 库代码只使用 tracing 宏记录日志，由应用入口统一配置输出行为：
/// - 支持 RUST_LOG 环境变量控制日志级别
/// - `-v, --verbose` 把默认级别提升到 DEBUG
/// - CODEGEN_LOG_FILE 设置后日志输出到文件而非终端
/// - 终端输出用简洁格式，文件输出带模块路径和行号
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Ok(log_file) = std::env::var("CODEGEN_LOG_FILE") {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to create log file");

        fmt()
            .with_env_filter(env_filter)
            .with_writer(file)
            .with_target(true)
            .with_line_number(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .without_time()
            .compact()
            .init();
    }
}
