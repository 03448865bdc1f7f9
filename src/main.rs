use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use parity_hide::{cli::HideArgs, handler::handle_hide};

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志，并将执行分派到隐藏文本的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let args = HideArgs::parse();

    // 调试模式默认输出 debug 级别日志，RUST_LOG 优先
    let default_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("parity_hide={default_level}"))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    handle_hide(args).map(|_| ())
}
