// ==========================================
// 铁路运行监控系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与输出记录
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod metrics;
pub mod prediction;
pub mod schedule;
pub mod section;
pub mod train;
pub mod types;

// 重导出核心类型
pub use metrics::SystemMetrics;
pub use prediction::CongestionPrediction;
pub use schedule::ScheduleEntry;
pub use section::Section;
pub use train::Train;
pub use types::{AdvisoryAction, GeoPoint, RiskLevel, SectionStatus, TrainStatus};
