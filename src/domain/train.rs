// ==========================================
// 铁路运行监控系统 - 列车实体
// ==========================================
// 职责: 列车快照实体定义
// 红线: 引擎只读,不回写实体 — 持久化由外部存储负责
// ==========================================

use crate::domain::types::{GeoPoint, TrainStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 列车基础优先级下限
pub const MIN_PRIORITY: i32 = 1;

/// 列车基础优先级上限
pub const MAX_PRIORITY: i32 = 5;

/// 最高时速缺省值 (km/h)
pub const DEFAULT_MAX_SPEED_KMH: f64 = 120.0;

// ==========================================
// Train - 列车快照
// ==========================================

/// 列车快照实体
///
/// 由外部存储在调用前完成外键解析:
/// `current_section` 为空或可在同一快照的区间列表中解析,
/// 解析失败按"无当前区间"处理,不做跨存储追查
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Train {
    /// 列车编号 (业务主键)
    pub train_id: String,

    /// 列车名称 (展示用,也是高级别车次识别的输入)
    pub name: String,

    /// 当前区间ID (可为空)
    #[serde(default)]
    pub current_section: Option<String>,

    /// 下一区间ID (可为空)
    #[serde(default)]
    pub next_section: Option<String>,

    /// 当前时速 (km/h)
    #[serde(default)]
    pub speed: f64,

    /// 最高时速 (km/h), 0 表示未设置
    #[serde(default)]
    pub max_speed: f64,

    /// 当前位置
    pub position: GeoPoint,

    /// 运行状态
    pub status: TrainStatus,

    /// 基础优先级 (1-5), 0 表示未设置
    #[serde(default)]
    pub priority: i32,

    /// 计划到达时间
    #[serde(default)]
    pub scheduled_arrival: Option<DateTime<Utc>>,

    /// 预计到达时间
    #[serde(default)]
    pub estimated_arrival: Option<DateTime<Utc>>,

    /// 当前晚点 (秒, >=0)
    #[serde(default)]
    pub delay: f64,

    /// 载客数
    #[serde(default)]
    pub passengers: i64,
}

impl Train {
    /// 生效优先级: 未设置时回退到 1
    pub fn effective_priority(&self) -> i32 {
        if self.priority >= MIN_PRIORITY {
            self.priority
        } else {
            MIN_PRIORITY
        }
    }

    /// 生效最高时速: 未设置时回退到 120 km/h
    pub fn effective_max_speed(&self) -> f64 {
        if self.max_speed > 0.0 {
            self.max_speed
        } else {
            DEFAULT_MAX_SPEED_KMH
        }
    }
}
