// ==========================================
// 铁路运行监控系统 - 拥堵预测记录
// ==========================================
// 职责: 拥堵预测引擎的输出记录定义
// 说明: 单点趋势外推,不含时序状态
// ==========================================

use crate::domain::types::RiskLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// CongestionPrediction - 区间拥堵预测
// ==========================================

/// 区间拥堵预测
///
/// 每个区间产生一条,顺序与输入区间列表一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CongestionPrediction {
    /// 区间编号
    pub section_id: String,

    /// 区间名称
    pub section_name: String,

    /// 当前负载比 (占用数 / 生效容量)
    pub current_load: f64,

    /// 预测负载比 (上限 1.0)
    pub predicted_load: f64,

    /// 预测时距 (分钟)
    pub time_horizon_minutes: i64,

    /// 风险等级
    pub risk_level: RiskLevel,
}
