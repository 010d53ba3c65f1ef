use clap::Parser;
use codegen_cli::{Cli, Commands, run_generate, run_parse, setup_logging};
use tracing::error;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { file, output } => run_parse(file.as_deref(), output.as_deref()),
        Commands::Generate { file, output } => run_generate(file.as_deref(), output.as_deref()),
    };

    if let Err(e) = result {
        error!("❌ 操作失败: {}", e);
        std::process::exit(1);
    }
}
