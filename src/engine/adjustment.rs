// ==========================================
// 铁路运行监控系统 - 全局修正引擎
// ==========================================
// 职责: 按系统级指标对已生成调度做后置修正并补全置信度
// 输入: 调度建议列表 + 系统指标
// 输出: 修正后的新列表 (顺序不变)
// 红线: 纯变换,不原地改写入参; 两项修正相互独立,顺序固定:
//       先晚点提速,后拥堵减速
// ==========================================

use crate::domain::metrics::SystemMetrics;
use crate::domain::schedule::ScheduleEntry;
use tracing::debug;

/// 系统晚点修正触发阈值 (秒)
pub const SYSTEM_DELAY_THRESHOLD_SECS: f64 = 300.0;

/// 晚点修正的优先级门槛
pub const DELAY_BOOST_MIN_PRIORITY: i32 = 3;

/// 晚点修正提速系数
pub const DELAY_BOOST_FACTOR: f64 = 1.15;

/// 晚点修正后的时速上限 (km/h)
pub const BOOSTED_SPEED_CEILING_KMH: f64 = 150.0;

/// 系统拥堵修正触发阈值 (负载比均值)
pub const SYSTEM_CONGESTION_THRESHOLD: f64 = 0.7;

/// 拥堵修正减速系数
pub const CONGESTION_REDUCTION_FACTOR: f64 = 0.9;

/// 置信度基准值
pub const BASE_CONFIDENCE: f64 = 0.70;

/// 置信度加成: 系统拥堵水平 < 0.5
pub const LOW_CONGESTION_BONUS: f64 = 0.15;

/// 置信度加成: 系统平均晚点 < 180 秒
pub const LOW_DELAY_BONUS: f64 = 0.10;

/// 置信度加成: 条目优先级 >= 4
pub const HIGH_PRIORITY_BONUS: f64 = 0.05;

/// 置信度上限
pub const CONFIDENCE_CAP: f64 = 0.95;

// ==========================================
// GlobalAdjuster - 全局修正引擎
// ==========================================
pub struct GlobalAdjuster {
    // 无状态引擎,不需要注入依赖
}

impl GlobalAdjuster {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 应用全局修正
    ///
    /// 规则:
    /// 1) 系统平均晚点 > 300 秒 且 条目优先级 >= 3 → 时速 ×1.15, 上限 150
    /// 2) 系统拥堵水平 > 0.7 → 全部条目时速 ×0.9 (与规则 1 独立,后应用)
    /// 3) 为每条计算置信度
    ///
    /// # 参数
    /// - `schedule`: 已生成的调度建议列表
    /// - `metrics`: 系统聚合指标
    ///
    /// # 返回
    /// 修正后的新列表,顺序与输入一致
    pub fn apply(&self, schedule: &[ScheduleEntry], metrics: &SystemMetrics) -> Vec<ScheduleEntry> {
        let delay_boost_active = metrics.avg_delay > SYSTEM_DELAY_THRESHOLD_SECS;
        let congestion_reduction_active = metrics.congestion_level > SYSTEM_CONGESTION_THRESHOLD;

        debug!(
            avg_delay = metrics.avg_delay,
            congestion_level = metrics.congestion_level,
            delay_boost_active,
            congestion_reduction_active,
            "全局修正开始"
        );

        schedule
            .iter()
            .map(|entry| {
                let mut adjusted = entry.clone();

                if delay_boost_active && adjusted.priority >= DELAY_BOOST_MIN_PRIORITY {
                    adjusted.recommended_speed = (adjusted.recommended_speed * DELAY_BOOST_FACTOR)
                        .min(BOOSTED_SPEED_CEILING_KMH);
                }

                if congestion_reduction_active {
                    adjusted.recommended_speed *= CONGESTION_REDUCTION_FACTOR;
                }

                adjusted.confidence = Some(self.confidence(&adjusted, metrics));
                adjusted
            })
            .collect()
    }

    /// 计算置信度
    ///
    /// 口径: 启发式加分后截断,不是概率模型
    /// 基准 0.70; 拥堵 < 0.5 加 0.15; 平均晚点 < 180 加 0.10;
    /// 优先级 >= 4 加 0.05; 上限 0.95
    ///
    /// # 参数
    /// - `entry`: 调度建议条目
    /// - `metrics`: 系统聚合指标
    ///
    /// # 返回
    /// 置信度 (0..1)
    pub fn confidence(&self, entry: &ScheduleEntry, metrics: &SystemMetrics) -> f64 {
        let mut confidence = BASE_CONFIDENCE;

        if metrics.congestion_level < 0.5 {
            confidence += LOW_CONGESTION_BONUS;
        }
        if metrics.avg_delay < 180.0 {
            confidence += LOW_DELAY_BONUS;
        }
        if entry.priority >= 4 {
            confidence += HIGH_PRIORITY_BONUS;
        }

        confidence.min(CONFIDENCE_CAP)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for GlobalAdjuster {
    fn default() -> Self {
        Self::new()
    }
}
