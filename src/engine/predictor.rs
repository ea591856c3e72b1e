// ==========================================
// 铁路运行监控系统 - 拥堵预测引擎
// ==========================================
// 职责: 按当前负载 + 有界趋势项外推短时距拥堵风险
// 输入: 区间列表 + 预测时距 (分钟)
// 输出: 每区间一条 CongestionPrediction, 顺序与输入一致
// 说明: 非时序模型 — 只消费快照内的吞吐/晚点统计值,不查历史
// ==========================================

use crate::domain::prediction::CongestionPrediction;
use crate::domain::section::Section;
use crate::domain::types::RiskLevel;

/// 预测时距缺省值 (分钟)
pub const DEFAULT_HORIZON_MINUTES: i64 = 15;

/// 趋势项绝对值上限
pub const TREND_BOUND: f64 = 0.1;

/// 趋势项吞吐量归一化分母 (列车/小时)
pub const TREND_THROUGHPUT_SCALE: f64 = 100.0;

/// 趋势项晚点归一化分母 (秒)
pub const TREND_DELAY_SCALE: f64 = 600.0;

/// 趋势外推步长 (分钟)
pub const TREND_STEP_MINUTES: f64 = 5.0;

/// 高风险负载阈值
pub const HIGH_RISK_LOAD_THRESHOLD: f64 = 0.8;

/// 中风险负载阈值
pub const MEDIUM_RISK_LOAD_THRESHOLD: f64 = 0.6;

// ==========================================
// CongestionPredictor - 拥堵预测引擎
// ==========================================
pub struct CongestionPredictor {
    // 无状态引擎,不需要注入依赖
}

impl CongestionPredictor {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成各区间拥堵预测
    ///
    /// 口径:
    /// - current_load = 占用数 / 生效容量
    /// - trend = clamp(吞吐/100 − 平均晚点/600, ±0.1)
    /// - predicted_load = min(current_load + trend × (时距/5), 1)
    /// - 风险: > 0.8 高, > 0.6 中, 其余低
    ///
    /// # 参数
    /// - `sections`: 区间快照列表
    /// - `horizon_minutes`: 预测时距 (分钟)
    ///
    /// # 返回
    /// 预测列表, 顺序与输入一致
    pub fn predict(&self, sections: &[Section], horizon_minutes: i64) -> Vec<CongestionPrediction> {
        sections
            .iter()
            .map(|section| {
                let current_load = section.load_ratio();
                let trend = self.trend(section);
                let predicted_load =
                    (current_load + trend * (horizon_minutes as f64 / TREND_STEP_MINUTES)).min(1.0);

                CongestionPrediction {
                    section_id: section.section_id.clone(),
                    section_name: section.name.clone(),
                    current_load,
                    predicted_load,
                    time_horizon_minutes: horizon_minutes,
                    risk_level: self.risk_level(predicted_load),
                }
            })
            .collect()
    }

    /// 计算有界趋势项
    ///
    /// 吞吐量高 → 区间消化能力强, 趋势为正 (负载上升);
    /// 历史晚点高 → 区间运转不畅, 趋势为负 (抵消项)
    fn trend(&self, section: &Section) -> f64 {
        let trend =
            section.throughput / TREND_THROUGHPUT_SCALE - section.average_delay / TREND_DELAY_SCALE;
        trend.clamp(-TREND_BOUND, TREND_BOUND)
    }

    /// 按预测负载划分风险等级
    fn risk_level(&self, predicted_load: f64) -> RiskLevel {
        if predicted_load > HIGH_RISK_LOAD_THRESHOLD {
            RiskLevel::High
        } else if predicted_load > MEDIUM_RISK_LOAD_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CongestionPredictor {
    fn default() -> Self {
        Self::new()
    }
}
