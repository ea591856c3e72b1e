// ==========================================
// 铁路运行监控系统 - 系统指标
// ==========================================
// 职责: 快照聚合指标的输出记录
// 生命周期: 每次调用现算现返,引擎不留存
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SystemMetrics - 系统聚合指标
// ==========================================

/// 系统聚合指标
///
/// 由指标计算引擎从一次快照归约得出:
/// - `avg_delay`: 全网平均晚点 (秒), 无列车时为 0
/// - `total_throughput`: 各区间吞吐量之和 (列车/小时)
/// - `congestion_level`: 各区间负载比均值, 无区间时为 0
/// - `total_trains`: 快照内列车总数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub avg_delay: f64,
    pub total_throughput: f64,
    pub congestion_level: f64,
    pub total_trains: usize,
}

impl SystemMetrics {
    /// 空快照指标 (全零)
    pub fn empty() -> Self {
        Self {
            avg_delay: 0.0,
            total_throughput: 0.0,
            congestion_level: 0.0,
            total_trains: 0,
        }
    }
}
