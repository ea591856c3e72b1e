// ==========================================
// 铁路运行监控系统 - 区间容量分配引擎
// ==========================================
// 职责: 单轮调度内的区间占用额度管理
// 红线: 容量约束优先于列车优先级 — 满额即跳过,本轮不重试
// ==========================================

use crate::domain::section::Section;
use std::collections::HashMap;

// ==========================================
// OccupancyBucket - 单区间占用桶
// ==========================================

/// 单区间占用桶
#[derive(Debug, Clone)]
struct OccupancyBucket {
    /// 本轮可分配额度 (生效容量)
    capacity: i32,

    /// 本轮已分配的列车ID
    assigned: Vec<String>,
}

impl OccupancyBucket {
    fn is_full(&self) -> bool {
        self.assigned.len() >= self.capacity as usize
    }
}

// ==========================================
// SectionAllocator - 区间容量分配引擎
// ==========================================

/// 区间容量分配引擎
///
/// 每轮调度构造一次: 为每个区间初始化一个占用桶,
/// 额度取生效容量 (未设置回退到 3),分配计数从零开始 —
/// 快照里的历史占用记录不占本轮额度
pub struct SectionAllocator {
    buckets: HashMap<String, OccupancyBucket>,
}

impl SectionAllocator {
    /// 从区间列表初始化占用桶
    ///
    /// # 参数
    /// - `sections`: 区间快照列表
    pub fn from_sections(sections: &[Section]) -> Self {
        let buckets = sections
            .iter()
            .map(|section| {
                (
                    section.section_id.clone(),
                    OccupancyBucket {
                        capacity: section.effective_capacity(),
                        assigned: Vec::new(),
                    },
                )
            })
            .collect();

        Self { buckets }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 尝试将列车分配到区间
    ///
    /// # 参数
    /// - `section_id`: 目标区间ID
    /// - `train_id`: 列车ID
    ///
    /// # 返回
    /// - `true`: 分配成功,占用计数 +1
    /// - `false`: 区间未知或额度已满,本轮跳过该列车
    pub fn try_assign(&mut self, section_id: &str, train_id: &str) -> bool {
        match self.buckets.get_mut(section_id) {
            Some(bucket) if !bucket.is_full() => {
                bucket.assigned.push(train_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// 查询区间本轮已分配数
    pub fn assigned_count(&self, section_id: &str) -> usize {
        self.buckets
            .get(section_id)
            .map(|bucket| bucket.assigned.len())
            .unwrap_or(0)
    }
}
