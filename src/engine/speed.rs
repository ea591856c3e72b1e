// ==========================================
// 铁路运行监控系统 - 建议时速引擎
// ==========================================
// 职责: 按区间拥堵与自身晚点计算有界建议时速
// 输入: 列车 + 已解析的当前区间 + 系统指标
// 输出: 建议时速 (km/h) 与预计通过用时 (秒)
// 规则: 拥堵与赶点只取其一,拥堵优先
// ==========================================

use crate::domain::metrics::SystemMetrics;
use crate::domain::section::Section;
use crate::domain::train::Train;

/// 拥堵减速触发阈值 (负载比)
pub const CONGESTION_SLOWDOWN_THRESHOLD: f64 = 0.7;

/// 拥堵减速系数
pub const CONGESTION_SLOWDOWN_FACTOR: f64 = 0.8;

/// 赶点提速触发阈值 (晚点饱和系数)
pub const DELAY_RECOVERY_THRESHOLD: f64 = 0.5;

/// 赶点提速系数
pub const DELAY_RECOVERY_FACTOR: f64 = 1.1;

/// 晚点影响饱和点 (秒): 超过后晚点不再放大影响
pub const DELAY_SATURATION_SECS: f64 = 60.0;

/// 建议时速下限 (km/h)
pub const MIN_RECOMMENDED_SPEED_KMH: f64 = 20.0;

/// 米每秒换算系数: 长度(米) / 速度(km/h) * 3.6 = 秒
const METERS_KMH_TO_SECS: f64 = 3.6;

// ==========================================
// SpeedRecommender - 建议时速引擎
// ==========================================
pub struct SpeedRecommender {
    // 无状态引擎,不需要注入依赖
}

impl SpeedRecommender {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算建议时速
    ///
    /// 规则:
    /// 1) 基准 = 列车最高时速 (未设置回退到 120)
    /// 2) 区间未解析 → 返回基准
    /// 3) 区间负载比 > 0.7 → ×0.8 (拥堵优先,不叠加赶点)
    /// 4) 否则晚点饱和系数 > 0.5 → ×1.1 (温和赶点)
    /// 5) 压到区间限速以内 (未设置回退到 120),再取下限 20
    ///
    /// # 参数
    /// - `train`: 列车快照
    /// - `section`: 已解析的当前区间 (未解析传 None)
    /// - `_metrics`: 系统指标 (预留扩展位,当前规则不消费)
    ///
    /// # 返回
    /// 建议时速 (km/h)
    pub fn optimal_speed(
        &self,
        train: &Train,
        section: Option<&Section>,
        _metrics: &SystemMetrics,
    ) -> f64 {
        let base_speed = train.effective_max_speed();

        let section = match section {
            Some(section) => section,
            None => return base_speed,
        };

        let congestion = section.load_ratio();
        let delay_factor = (train.delay / DELAY_SATURATION_SECS).min(1.0);

        let mut speed = base_speed;

        if congestion > CONGESTION_SLOWDOWN_THRESHOLD {
            speed *= CONGESTION_SLOWDOWN_FACTOR;
        } else if delay_factor > DELAY_RECOVERY_THRESHOLD {
            speed *= DELAY_RECOVERY_FACTOR;
        }

        speed = speed.min(section.effective_speed_limit());
        speed.max(MIN_RECOMMENDED_SPEED_KMH)
    }

    /// 估算通过区间用时
    ///
    /// 口径: round(长度(米,未设置回退到 1000) / 时速(km/h) * 3.6) 秒
    ///
    /// # 参数
    /// - `section`: 区间快照
    /// - `speed`: 通过时速 (km/h)
    ///
    /// # 返回
    /// 预计用时 (秒), 时速非正时为 0
    pub fn estimate_section_time(&self, section: &Section, speed: f64) -> i64 {
        if speed <= 0.0 {
            return 0;
        }

        let distance = section.effective_length();
        (distance / speed * METERS_KMH_TO_SECS).round() as i64
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SpeedRecommender {
    fn default() -> Self {
        Self::new()
    }
}
