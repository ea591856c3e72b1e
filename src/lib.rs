// ==========================================
// 铁路运行监控系统 - 核心库
// ==========================================
// 技术栈: Rust (纯计算引擎)
// 系统定位: 决策支持系统 (建议制,人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AdvisoryAction, GeoPoint, RiskLevel, SectionStatus, TrainStatus};

// 领域实体
pub use domain::{CongestionPrediction, ScheduleEntry, Section, SystemMetrics, Train};

// 引擎
pub use engine::{
    ActionClassifier, CongestionPredictor, EngineError, EngineResult, GlobalAdjuster,
    MetricsCalculator, PrioritySorter, ScheduleGenerator, SectionAllocator, SpeedRecommender,
    TrafficOptimizer,
};

// 配置
pub use config::{OptimizerProfile, OptimizerWeights, PremiumServiceProfile};

// API
pub use api::{ApiError, ApiResult, DashboardApi, OptimizationApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "铁路运行监控系统";

// ==========================================
// 预编译检查
// ==========================================
