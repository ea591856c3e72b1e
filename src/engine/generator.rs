// ==========================================
// 铁路运行监控系统 - 调度生成引擎
// ==========================================
// 职责: 排序 → 容量分配 → 时速/用时/动作计算 的单轮编排
// 输入: 列车列表 + 区间列表 + 系统指标
// 输出: ScheduleEntry 列表 (分配顺序 = 优先级序扣除跳过项)
// 红线: 无当前区间或额度已满的列车本轮静默跳过,不报错不重试
// ==========================================

use crate::config::optimizer_profile::PremiumServiceProfile;
use crate::domain::metrics::SystemMetrics;
use crate::domain::schedule::ScheduleEntry;
use crate::domain::section::Section;
use crate::domain::train::Train;
use crate::engine::action::ActionClassifier;
use crate::engine::allocator::SectionAllocator;
use crate::engine::priority::PrioritySorter;
use crate::engine::speed::SpeedRecommender;
use std::collections::HashMap;
use tracing::{debug, info};

// ==========================================
// ScheduleGenerator - 调度生成引擎
// ==========================================
pub struct ScheduleGenerator {
    sorter: PrioritySorter,
    speed: SpeedRecommender,
    action: ActionClassifier,
}

impl ScheduleGenerator {
    /// 构造函数
    ///
    /// # 参数
    /// - `premium`: 高级别车次识别配置 (传给排序引擎)
    pub fn new(premium: PremiumServiceProfile) -> Self {
        Self {
            sorter: PrioritySorter::new(premium),
            speed: SpeedRecommender::new(),
            action: ActionClassifier::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成单轮调度建议
    ///
    /// 流程:
    /// 1) 优先分稳定排序 (优先分降序, 同分晚点降序)
    /// 2) 每区间初始化占用桶 (额度 = 生效容量)
    /// 3) 单次遍历: 解析当前区间 → 额度检查 → 计算时速/用时/动作
    ///
    /// # 参数
    /// - `trains`: 列车快照列表
    /// - `sections`: 区间快照列表
    /// - `metrics`: 系统聚合指标
    ///
    /// # 返回
    /// 调度建议列表 (分配顺序)
    pub fn generate(
        &self,
        trains: &[Train],
        sections: &[Section],
        metrics: &SystemMetrics,
    ) -> Vec<ScheduleEntry> {
        if trains.is_empty() {
            return Vec::new();
        }

        // 区间索引: 外键解析只做一次标识比较
        let section_index: HashMap<&str, &Section> = sections
            .iter()
            .map(|section| (section.section_id.as_str(), section))
            .collect();

        let sorted_trains = self.sorter.sort(trains.to_vec());
        let mut allocator = SectionAllocator::from_sections(sections);

        let mut schedule = Vec::new();

        for train in &sorted_trains {
            let section_id = match train.current_section.as_deref() {
                Some(section_id) => section_id,
                None => {
                    debug!(train_id = %train.train_id, "列车无当前区间,本轮跳过");
                    continue;
                }
            };

            let section = match section_index.get(section_id) {
                Some(section) => *section,
                None => {
                    debug!(
                        train_id = %train.train_id,
                        section_id = %section_id,
                        "当前区间在快照中不可解析,本轮跳过"
                    );
                    continue;
                }
            };

            if !allocator.try_assign(section_id, &train.train_id) {
                debug!(
                    train_id = %train.train_id,
                    section_id = %section_id,
                    "区间额度已满,本轮跳过"
                );
                continue;
            }

            let optimal_speed = self.speed.optimal_speed(train, Some(section), metrics);
            let estimated_time_secs = self.speed.estimate_section_time(section, optimal_speed);
            let action = self.action.classify(train, Some(section));

            schedule.push(ScheduleEntry {
                train_id: train.train_id.clone(),
                train_name: train.name.clone(),
                section_id: section_id.to_string(),
                recommended_speed: optimal_speed,
                estimated_time_secs,
                priority: train.effective_priority(),
                action,
                confidence: None,
            });
        }

        info!(
            trains_count = trains.len(),
            scheduled_count = schedule.len(),
            skipped_count = trains.len() - schedule.len(),
            "调度生成完成"
        );

        schedule
    }
}
