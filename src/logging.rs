// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 引擎本身只打结构化日志,输出端配置由宿主进程决定
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统 (人读格式)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: rail_traffic_aps=info）
///   例如: RUST_LOG=debug 或 RUST_LOG=rail_traffic_aps=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rail_traffic_aps=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// 初始化日志系统 (JSON 行格式)
///
/// 供接入集中采集的宿主进程使用
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rail_traffic_aps=info"));

    fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别,输出重定向到测试捕获器;
/// 重复调用安全 (忽略二次初始化)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
