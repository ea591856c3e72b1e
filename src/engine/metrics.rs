// ==========================================
// 铁路运行监控系统 - 指标计算引擎
// ==========================================
// 职责: 将一次快照归约为系统聚合指标
// 输入: 列车列表 + 区间列表
// 输出: SystemMetrics (平均晚点/总吞吐/拥堵水平/列车数)
// 红线: 纯函数,无副作用; 空快照返回全零指标,不报错
// ==========================================

use crate::domain::metrics::SystemMetrics;
use crate::domain::section::Section;
use crate::domain::train::Train;

// ==========================================
// MetricsCalculator - 指标计算引擎
// ==========================================
pub struct MetricsCalculator {
    // 无状态引擎,不需要注入依赖
}

impl MetricsCalculator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算系统聚合指标
    ///
    /// 指标口径:
    /// - avg_delay: sum(delay) / count, 无列车时为 0
    /// - total_throughput: sum(section.throughput)
    /// - congestion_level: mean(占用数 / 生效容量), 无区间时为 0
    ///
    /// # 参数
    /// - `trains`: 列车快照列表
    /// - `sections`: 区间快照列表
    ///
    /// # 返回
    /// SystemMetrics 聚合指标
    pub fn calculate(&self, trains: &[Train], sections: &[Section]) -> SystemMetrics {
        let avg_delay = if trains.is_empty() {
            0.0
        } else {
            let total_delay: f64 = trains.iter().map(|t| t.delay).sum();
            total_delay / trains.len() as f64
        };

        let total_throughput: f64 = sections.iter().map(|s| s.throughput).sum();

        let congestion_level = if sections.is_empty() {
            0.0
        } else {
            let load_sum: f64 = sections.iter().map(|s| s.load_ratio()).sum();
            load_sum / sections.len() as f64
        };

        SystemMetrics {
            avg_delay,
            total_throughput,
            congestion_level,
            total_trains: trains.len(),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
