use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;
use std::process::ExitCode;

use bitplane_hide::{
    cli::{Cli, Commands},
    handler::{exit_code, handle_embed, handle_extract},
};

/// 初始化日志系统。
///
/// 默认只输出警告，`-v` 提升到 info，`-vv` 及以上提升到 debug；
/// 设置了 `RUST_LOG` 时以环境变量为准。
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`embed` 或 `extract`）
/// 将执行分派到相应的处理函数。
/// 输入错误以退出码 2 结束，其余错误以退出码 1 结束。
fn main() -> ExitCode {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 根据子命令调用相应的处理函数
    let result = match cli.command {
        Commands::Embed(args) => handle_embed(args),
        Commands::Extract(args) => handle_extract(args),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(exit_code(&err))
        }
    }
}
