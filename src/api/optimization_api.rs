// ==========================================
// 铁路运行监控系统 - 优化 API
// ==========================================
// 职责: 封装引擎编排器,产出带运行ID与时间戳的响应信封,
//       并在一轮优化完成后发布建议事件
// 红线: 不落库,不广播 — 事件经发布者 trait 交给传输层
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::prediction::CongestionPrediction;
use crate::domain::schedule::ScheduleEntry;
use crate::domain::section::Section;
use crate::domain::train::Train;
use crate::engine::events::{OptionalEventPublisher, RecommendationEvent};
use crate::engine::optimizer::TrafficOptimizer;
use crate::engine::predictor::DEFAULT_HORIZON_MINUTES;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

// ==========================================
// 响应信封
// ==========================================

/// 一轮调度优化的响应信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// 本轮优化运行ID
    pub run_id: String,

    /// 调度建议列表 (分配顺序)
    pub schedule: Vec<ScheduleEntry>,

    /// 生成时间
    pub timestamp: DateTime<Utc>,

    /// 快照内列车总数
    pub total_trains: usize,

    /// 快照内区间总数
    pub total_sections: usize,
}

/// 拥堵预测的响应信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// 预测列表 (与输入区间同序)
    pub predictions: Vec<CongestionPrediction>,

    /// 实际采用的预测时距 (分钟)
    pub time_horizon_minutes: i64,

    /// 生成时间
    pub timestamp: DateTime<Utc>,
}

// ==========================================
// OptimizationApi - 优化 API
// ==========================================

/// 优化API
///
/// 持有引擎编排器与可选事件发布者;
/// 事件发布失败只告警,不影响本次调用结果
pub struct OptimizationApi {
    optimizer: TrafficOptimizer,
    events: OptionalEventPublisher,
}

impl OptimizationApi {
    /// 创建新的OptimizationApi实例 (无事件发布)
    pub fn new(optimizer: TrafficOptimizer) -> Self {
        Self {
            optimizer,
            events: OptionalEventPublisher::none(),
        }
    }

    /// 创建带事件发布者的实例
    ///
    /// # 参数
    /// - `optimizer`: 引擎编排器
    /// - `events`: 事件发布者包装
    pub fn with_events(optimizer: TrafficOptimizer, events: OptionalEventPublisher) -> Self {
        Self { optimizer, events }
    }

    // ==========================================
    // 核心接口
    // ==========================================

    /// 执行一轮调度优化并返回响应信封
    ///
    /// # 参数
    /// - `trains`: 列车快照列表 (外键已由调用方解析)
    /// - `sections`: 区间快照列表
    pub fn get_schedule(
        &self,
        trains: &[Train],
        sections: &[Section],
    ) -> ApiResult<ScheduleResponse> {
        let schedule = self.optimizer.optimize_schedule(trains, sections)?;
        let run_id = Uuid::new_v4().to_string();

        if let Err(err) = self.events.publish(RecommendationEvent::optimization_updated(
            run_id.clone(),
            schedule.len(),
        )) {
            warn!(run_id = %run_id, error = %err, "建议事件发布失败,忽略");
        }

        Ok(ScheduleResponse {
            run_id,
            total_trains: trains.len(),
            total_sections: sections.len(),
            schedule,
            timestamp: Utc::now(),
        })
    }

    /// 生成拥堵预测并返回响应信封
    ///
    /// # 参数
    /// - `sections`: 区间快照列表
    /// - `horizon_minutes`: 预测时距 (分钟), None 取缺省 15
    pub fn get_predictions(
        &self,
        sections: &[Section],
        horizon_minutes: Option<i64>,
    ) -> ApiResult<PredictionResponse> {
        let horizon = horizon_minutes.unwrap_or(DEFAULT_HORIZON_MINUTES);
        let predictions = self.optimizer.predict_congestion(sections, Some(horizon))?;

        Ok(PredictionResponse {
            predictions,
            time_horizon_minutes: horizon,
            timestamp: Utc::now(),
        })
    }
}
