// ==========================================
// 铁路运行监控系统 - 驾驶舱 API
// ==========================================
// 职责: 面向前端驾驶舱的快照聚合查询
// 输入: 列车/区间快照 (外键已解析)
// 输出: 总览 + 区间拥堵明细 + 区间绩效对比
// 红线: 只读聚合,不触发调度计算
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::metrics::SystemMetrics;
use crate::domain::section::Section;
use crate::domain::train::Train;
use crate::domain::types::{SectionStatus, TrainStatus};
use crate::engine::metrics::MetricsCalculator;
use crate::engine::validate::{validate_sections, validate_trains};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// 响应记录
// ==========================================

/// 系统总览
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// 列车总数
    pub total_trains: usize,

    /// 运行中列车数
    pub running_trains: usize,

    /// 晚点列车数
    pub delayed_trains: usize,

    /// 平均晚点 (秒, 四舍五入)
    pub avg_delay: i64,

    /// 总吞吐量 (列车/小时)
    pub total_throughput: f64,

    /// 总载客数
    pub total_passengers: i64,

    /// 系统效率 (运行中占比, %)
    pub system_efficiency: f64,
}

/// 单区间拥堵明细
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCongestion {
    pub section_id: String,
    pub section_name: String,

    /// 利用率 (%)
    pub utilization_pct: f64,

    pub current_trains: usize,
    pub max_capacity: i32,
    pub status: SectionStatus,
}

/// 驾驶舱聚合响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub overview: DashboardOverview,
    pub congestion: Vec<SectionCongestion>,
    pub metrics: SystemMetrics,
    pub timestamp: DateTime<Utc>,
}

/// 单区间绩效
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPerformance {
    pub section_id: String,
    pub section_name: String,
    pub throughput: f64,
    pub average_delay: f64,

    /// 利用率 (%)
    pub utilization_pct: f64,

    /// 绩效分: 吞吐量为正时 100 − 平均晚点/吞吐量, 否则 0
    pub efficiency: f64,

    pub status: SectionStatus,
    pub current_trains: usize,
    pub max_capacity: i32,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
pub struct DashboardApi {
    metrics: MetricsCalculator,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new() -> Self {
        Self {
            metrics: MetricsCalculator::new(),
        }
    }

    // ==========================================
    // 核心接口
    // ==========================================

    /// 驾驶舱聚合查询
    ///
    /// # 参数
    /// - `trains`: 列车快照列表
    /// - `sections`: 区间快照列表
    pub fn get_dashboard(
        &self,
        trains: &[Train],
        sections: &[Section],
    ) -> ApiResult<DashboardResponse> {
        validate_trains(trains)?;
        validate_sections(sections)?;

        let total_trains = trains.len();
        let running_trains = trains
            .iter()
            .filter(|t| t.status == TrainStatus::Running)
            .count();
        let delayed_trains = trains
            .iter()
            .filter(|t| t.status == TrainStatus::Delayed)
            .count();

        let avg_delay = if total_trains == 0 {
            0.0
        } else {
            trains.iter().map(|t| t.delay).sum::<f64>() / total_trains as f64
        };

        let total_throughput: f64 = sections.iter().map(|s| s.throughput).sum();
        let total_passengers: i64 = trains.iter().map(|t| t.passengers).sum();

        let system_efficiency = if total_trains == 0 {
            0.0
        } else {
            running_trains as f64 / total_trains as f64 * 100.0
        };

        let congestion = sections
            .iter()
            .map(|section| SectionCongestion {
                section_id: section.section_id.clone(),
                section_name: section.name.clone(),
                utilization_pct: section.load_ratio() * 100.0,
                current_trains: section.occupancy(),
                max_capacity: section.effective_capacity(),
                status: section.status,
            })
            .collect();

        Ok(DashboardResponse {
            overview: DashboardOverview {
                total_trains,
                running_trains,
                delayed_trains,
                avg_delay: avg_delay.round() as i64,
                total_throughput,
                total_passengers,
                system_efficiency,
            },
            congestion,
            metrics: self.metrics.calculate(trains, sections),
            timestamp: Utc::now(),
        })
    }

    /// 区间绩效对比
    ///
    /// # 参数
    /// - `sections`: 区间快照列表
    ///
    /// # 返回
    /// 按绩效分降序排列的区间绩效列表
    pub fn get_section_performance(
        &self,
        sections: &[Section],
    ) -> ApiResult<Vec<SectionPerformance>> {
        validate_sections(sections)?;

        let mut performance: Vec<SectionPerformance> = sections
            .iter()
            .map(|section| SectionPerformance {
                section_id: section.section_id.clone(),
                section_name: section.name.clone(),
                throughput: section.throughput,
                average_delay: section.average_delay,
                utilization_pct: section.load_ratio() * 100.0,
                efficiency: if section.throughput > 0.0 {
                    100.0 - section.average_delay / section.throughput
                } else {
                    0.0
                },
                status: section.status,
                current_trains: section.occupancy(),
                max_capacity: section.effective_capacity(),
            })
            .collect();

        performance.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));

        Ok(performance)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}
