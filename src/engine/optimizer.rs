// ==========================================
// 铁路运行监控系统 - 引擎编排器
// ==========================================
// 职责: 协调指标/调度/修正/预测引擎的执行顺序
// 红线: 同步无阻塞,调用间不共享可变状态 — 每次调用独立快照,
//       可被多调用方并发调用
// ==========================================

use crate::config::optimizer_profile::OptimizerProfile;
use crate::domain::metrics::SystemMetrics;
use crate::domain::prediction::CongestionPrediction;
use crate::domain::schedule::ScheduleEntry;
use crate::domain::section::Section;
use crate::domain::train::Train;
use crate::engine::adjustment::GlobalAdjuster;
use crate::engine::error::EngineResult;
use crate::engine::generator::ScheduleGenerator;
use crate::engine::metrics::MetricsCalculator;
use crate::engine::predictor::{CongestionPredictor, DEFAULT_HORIZON_MINUTES};
use crate::engine::validate::{validate_horizon, validate_sections, validate_trains};
use tracing::{info, instrument};

// ==========================================
// TrafficOptimizer - 引擎编排器
// ==========================================

/// 引擎编排器
///
/// 对外暴露三个纯操作:
/// - `compute_metrics`: 快照 → 系统聚合指标
/// - `optimize_schedule`: 快照 → 修正后的调度建议列表
/// - `predict_congestion`: 区间快照 → 拥堵预测列表
///
/// 唯一跨调用状态是构造时注入的固定配置
pub struct TrafficOptimizer {
    profile: OptimizerProfile,
    metrics: MetricsCalculator,
    generator: ScheduleGenerator,
    adjuster: GlobalAdjuster,
    predictor: CongestionPredictor,
}

impl TrafficOptimizer {
    /// 以缺省配置构造
    pub fn new() -> Self {
        Self::with_profile(OptimizerProfile::default())
    }

    /// 以指定配置构造
    ///
    /// # 参数
    /// - `profile`: 优化器配置 (权重 + 高级别车次名单)
    pub fn with_profile(profile: OptimizerProfile) -> Self {
        Self {
            generator: ScheduleGenerator::new(profile.premium.clone()),
            metrics: MetricsCalculator::new(),
            adjuster: GlobalAdjuster::new(),
            predictor: CongestionPredictor::new(),
            profile,
        }
    }

    /// 当前生效配置
    pub fn profile(&self) -> &OptimizerProfile {
        &self.profile
    }

    // ==========================================
    // 核心操作
    // ==========================================

    /// 计算系统聚合指标
    ///
    /// # 参数
    /// - `trains`: 列车快照列表
    /// - `sections`: 区间快照列表
    ///
    /// # 返回
    /// SystemMetrics, 空快照返回全零指标
    pub fn compute_metrics(
        &self,
        trains: &[Train],
        sections: &[Section],
    ) -> EngineResult<SystemMetrics> {
        validate_trains(trains)?;
        validate_sections(sections)?;

        Ok(self.metrics.calculate(trains, sections))
    }

    /// 执行一轮调度优化
    ///
    /// 流程: 指标计算 → 调度生成 → 全局修正
    ///
    /// # 参数
    /// - `trains`: 列车快照列表
    /// - `sections`: 区间快照列表
    ///
    /// # 返回
    /// 修正后的调度建议列表; 空列车列表返回空列表
    #[instrument(skip(self, trains, sections), fields(
        trains_count = trains.len(),
        sections_count = sections.len()
    ))]
    pub fn optimize_schedule(
        &self,
        trains: &[Train],
        sections: &[Section],
    ) -> EngineResult<Vec<ScheduleEntry>> {
        validate_trains(trains)?;
        validate_sections(sections)?;

        if trains.is_empty() {
            return Ok(Vec::new());
        }

        let metrics = self.metrics.calculate(trains, sections);
        let schedule = self.generator.generate(trains, sections, &metrics);
        let adjusted = self.adjuster.apply(&schedule, &metrics);

        info!(
            scheduled_count = adjusted.len(),
            avg_delay = metrics.avg_delay,
            congestion_level = metrics.congestion_level,
            "一轮调度优化完成"
        );

        Ok(adjusted)
    }

    /// 生成各区间拥堵预测
    ///
    /// # 参数
    /// - `sections`: 区间快照列表
    /// - `horizon_minutes`: 预测时距 (分钟), None 取缺省 15
    ///
    /// # 返回
    /// 预测列表, 顺序与输入一致
    pub fn predict_congestion(
        &self,
        sections: &[Section],
        horizon_minutes: Option<i64>,
    ) -> EngineResult<Vec<CongestionPrediction>> {
        validate_sections(sections)?;

        let horizon = horizon_minutes.unwrap_or(DEFAULT_HORIZON_MINUTES);
        validate_horizon(horizon)?;

        Ok(self.predictor.predict(sections, horizon))
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for TrafficOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{GeoPoint, SectionStatus, TrainStatus};
    use crate::engine::error::EngineError;

    fn create_test_train(train_id: &str, current_section: Option<&str>, delay: f64) -> Train {
        Train {
            train_id: train_id.to_string(),
            name: format!("Express {}", train_id),
            current_section: current_section.map(|s| s.to_string()),
            next_section: None,
            speed: 80.0,
            max_speed: 120.0,
            position: GeoPoint::new(28.61, 77.21),
            status: TrainStatus::Running,
            priority: 3,
            scheduled_arrival: None,
            estimated_arrival: None,
            delay,
            passengers: 400,
        }
    }

    fn create_test_section(section_id: &str, occupants: usize) -> Section {
        Section {
            section_id: section_id.to_string(),
            name: format!("Section {}", section_id),
            start_point: GeoPoint::new(28.61, 77.21),
            end_point: GeoPoint::new(28.70, 77.30),
            length: 5000.0,
            max_capacity: 3,
            current_trains: (0..occupants).map(|i| format!("T{:03}", i)).collect(),
            speed_limit: 120.0,
            status: SectionStatus::Operational,
            throughput: 10.0,
            average_delay: 60.0,
            connected_sections: vec![],
        }
    }

    #[test]
    fn test_empty_trains_yield_empty_schedule() {
        let optimizer = TrafficOptimizer::new();
        let sections = vec![create_test_section("S001", 0)];

        let schedule = optimizer.optimize_schedule(&[], &sections).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_full_pipeline_attaches_confidence() {
        let optimizer = TrafficOptimizer::new();
        let trains = vec![create_test_train("T001", Some("S001"), 60.0)];
        let sections = vec![create_test_section("S001", 1)];

        let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

        assert_eq!(schedule.len(), 1);
        assert!(schedule[0].confidence.is_some());
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let optimizer = TrafficOptimizer::new();
        let trains = vec![create_test_train("T001", Some("S001"), f64::NAN)];
        let sections = vec![create_test_section("S001", 0)];

        let result = optimizer.optimize_schedule(&trains, &sections);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_predict_congestion_default_horizon() {
        let optimizer = TrafficOptimizer::new();
        let sections = vec![create_test_section("S001", 1)];

        let predictions = optimizer.predict_congestion(&sections, None).unwrap();

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].time_horizon_minutes, 15);
    }

    #[test]
    fn test_predict_congestion_rejects_bad_horizon() {
        let optimizer = TrafficOptimizer::new();
        let sections = vec![create_test_section("S001", 1)];

        assert!(optimizer.predict_congestion(&sections, Some(0)).is_err());
    }

    #[test]
    fn test_compute_metrics_idempotent() {
        let optimizer = TrafficOptimizer::new();
        let trains = vec![create_test_train("T001", Some("S001"), 90.0)];
        let sections = vec![create_test_section("S001", 1)];

        let first = optimizer.compute_metrics(&trains, &sections).unwrap();
        let second = optimizer.compute_metrics(&trains, &sections).unwrap();

        assert_eq!(first, second);
    }
}
