// ==========================================
// 铁路运行监控系统 - 引擎层
// ==========================================
// 职责: 实现调度与预测业务规则
// 红线: 引擎只读快照,只产出建议记录; 不做持久化,不做广播
// ==========================================

pub mod action;
pub mod adjustment;
pub mod allocator;
pub mod error;
pub mod events;
pub mod generator;
pub mod metrics;
pub mod optimizer;
pub mod predictor;
pub mod priority;
pub mod speed;
pub mod validate;

// 重导出核心引擎
pub use action::ActionClassifier;
pub use adjustment::GlobalAdjuster;
pub use allocator::SectionAllocator;
pub use error::{EngineError, EngineResult};
pub use events::{
    NoOpEventPublisher, OptionalEventPublisher, RecommendationEvent, RecommendationEventPublisher,
    RecommendationEventType,
};
pub use generator::ScheduleGenerator;
pub use metrics::MetricsCalculator;
pub use optimizer::TrafficOptimizer;
pub use predictor::CongestionPredictor;
pub use priority::PrioritySorter;
pub use speed::SpeedRecommender;
