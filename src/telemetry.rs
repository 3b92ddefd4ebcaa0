//! 日志初始化
//! RUST_LOG 优先，其次取配置里的级别；格式由配置决定

use crate::config::AppConfig;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// 初始化全局 tracing 订阅器，进程内只能调用一次
pub fn init(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(&config.logging.level))
        .with(fmt_layer(&config.logging.format))
        .init();

    tracing::info!(
        service = "movie-catalog",
        version = env!("CARGO_PKG_VERSION"),
        level = %config.logging.level,
        format = %config.logging.format,
        "Logging initialized"
    );
}

/// 过滤器：环境变量 RUST_LOG 存在时覆盖配置级别
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// 输出层：json 给采集器，pretty 给终端；配置校验保证不会出现其它取值
fn fmt_layer<S>(format: &str) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    match format {
        "pretty" => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    }
}
