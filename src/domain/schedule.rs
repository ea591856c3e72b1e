// ==========================================
// 铁路运行监控系统 - 调度建议记录
// ==========================================
// 职责: 调度引擎的输出记录定义
// 红线: 建议不落库 — 持久化与广播由调用方负责
// ==========================================

use crate::domain::types::AdvisoryAction;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduleEntry - 单车调度建议
// ==========================================

/// 单车调度建议
///
/// 每个在本轮通过容量分配的列车产生一条,
/// 顺序即分配顺序 (优先级序扣除跳过项)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 列车编号
    pub train_id: String,

    /// 列车名称
    pub train_name: String,

    /// 分配的区间ID (即列车当前区间)
    pub section_id: String,

    /// 建议时速 (km/h)
    pub recommended_speed: f64,

    /// 预计通过区间用时 (秒)
    pub estimated_time_secs: i64,

    /// 基础优先级快照 (1-5)
    pub priority: i32,

    /// 建议动作
    pub action: AdvisoryAction,

    /// 置信度 (0..1), 由全局修正阶段补全
    #[serde(default)]
    pub confidence: Option<f64>,
}
