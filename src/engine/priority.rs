// ==========================================
// 铁路运行监控系统 - 优先级排序引擎
// ==========================================
// 职责: 按调度优先分计算与稳定排序
// 输入: 列车快照列表 + 高级别车次识别配置
// 输出: 排序后的列车列表 (优先分降序, 同分晚点降序)
// 红线: 高级别车次识别走配置名单,不得散落字符串匹配
// ==========================================

use crate::config::optimizer_profile::PremiumServiceProfile;
use crate::domain::train::Train;
use std::cmp::Ordering;

// ==========================================
// PrioritySorter - 优先级排序引擎
// ==========================================
pub struct PrioritySorter {
    /// 高级别车次识别配置 (注入,可定制)
    premium: PremiumServiceProfile,
}

impl PrioritySorter {
    /// 构造函数
    ///
    /// # 参数
    /// - `premium`: 高级别车次识别配置
    pub fn new(premium: PremiumServiceProfile) -> Self {
        Self { premium }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算调度优先分
    ///
    /// 优先分 = 基础优先级 (1-5, 未设置回退到 1) + 高级别车次加成
    ///
    /// # 参数
    /// - `train`: 列车快照
    ///
    /// # 返回
    /// 调度优先分
    pub fn priority_score(&self, train: &Train) -> i32 {
        train.effective_priority() + self.premium.boost_for(&train.name)
    }

    /// 排序列车列表
    ///
    /// 排序键:
    /// 1) 优先分降序
    /// 2) 当前晚点降序 (晚点越多越先处理)
    ///
    /// 稳定排序: 两键均相同的列车保持输入相对顺序
    ///
    /// # 参数
    /// - `trains`: 待排序的列车列表
    ///
    /// # 返回
    /// 排序后的列车列表 (按优先级从高到低)
    pub fn sort(&self, mut trains: Vec<Train>) -> Vec<Train> {
        trains.sort_by(|a, b| self.compare(a, b));
        trains
    }

    // ==========================================
    // 比较方法
    // ==========================================

    /// 比较两个列车的调度优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 优先于 b
    fn compare(&self, a: &Train, b: &Train) -> Ordering {
        let score_a = self.priority_score(a);
        let score_b = self.priority_score(b);

        // 1. 优先分降序
        match score_b.cmp(&score_a) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. 晚点降序
        b.delay.total_cmp(&a.delay)
    }
}
