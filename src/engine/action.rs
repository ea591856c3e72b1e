// ==========================================
// 铁路运行监控系统 - 建议动作分类引擎
// ==========================================
// 职责: 列车 + 所在区间拥堵 → 离散建议动作
// 规则: 首条命中即返回,顺序固定
// ==========================================

use crate::domain::section::Section;
use crate::domain::train::Train;
use crate::domain::types::AdvisoryAction;

/// 减速动作触发阈值 (负载比)
pub const SLOW_DOWN_CONGESTION_THRESHOLD: f64 = 0.8;

/// 提速动作晚点阈值 (秒)
pub const SPEED_UP_DELAY_THRESHOLD_SECS: f64 = 300.0;

/// 提速动作拥堵上限 (负载比)
pub const SPEED_UP_CONGESTION_CEILING: f64 = 0.5;

/// 正常通行拥堵上限 (负载比)
pub const PROCEED_CONGESTION_CEILING: f64 = 0.3;

// ==========================================
// ActionClassifier - 建议动作分类引擎
// ==========================================
pub struct ActionClassifier {
    // 无状态引擎,不需要注入依赖
}

impl ActionClassifier {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分类建议动作
    ///
    /// 规则 (首条命中即返回):
    /// 1) 负载比 > 0.8 → slow_down
    /// 2) 晚点 > 300 秒 且 负载比 < 0.5 → speed_up
    /// 3) 负载比 < 0.3 → proceed
    /// 4) 其余 → maintain
    ///
    /// 区间未解析 → maintain
    ///
    /// # 参数
    /// - `train`: 列车快照
    /// - `section`: 已解析的当前区间 (未解析传 None)
    ///
    /// # 返回
    /// 建议动作
    pub fn classify(&self, train: &Train, section: Option<&Section>) -> AdvisoryAction {
        let section = match section {
            Some(section) => section,
            None => return AdvisoryAction::Maintain,
        };

        let congestion = section.load_ratio();

        if congestion > SLOW_DOWN_CONGESTION_THRESHOLD {
            return AdvisoryAction::SlowDown;
        }

        if train.delay > SPEED_UP_DELAY_THRESHOLD_SECS && congestion < SPEED_UP_CONGESTION_CEILING
        {
            return AdvisoryAction::SpeedUp;
        }

        if congestion < PROCEED_CONGESTION_CEILING {
            return AdvisoryAction::Proceed;
        }

        AdvisoryAction::Maintain
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ActionClassifier {
    fn default() -> Self {
        Self::new()
    }
}
