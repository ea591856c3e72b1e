// ==========================================
// 铁路运行监控系统 - 区间实体
// ==========================================
// 职责: 轨道区间快照实体定义
// 说明: current_trains 为历史记录值,可能瞬时超出 max_capacity,
//       引擎不假设其已在容量约束之内
// ==========================================

use crate::domain::types::{GeoPoint, SectionStatus};
use serde::{Deserialize, Serialize};

/// 区间容量缺省值 (列车数)
pub const DEFAULT_CAPACITY: i32 = 3;

/// 区间限速缺省值 (km/h)
pub const DEFAULT_SPEED_LIMIT_KMH: f64 = 120.0;

/// 区间长度缺省值 (米)
pub const DEFAULT_LENGTH_M: f64 = 1000.0;

// ==========================================
// Section - 轨道区间快照
// ==========================================

/// 轨道区间快照实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// 区间编号 (业务主键)
    pub section_id: String,

    /// 区间名称
    pub name: String,

    /// 起点坐标
    pub start_point: GeoPoint,

    /// 终点坐标
    pub end_point: GeoPoint,

    /// 区间长度 (米), 0 表示未设置
    #[serde(default)]
    pub length: f64,

    /// 最大同时容纳列车数, 0 表示未设置
    #[serde(default)]
    pub max_capacity: i32,

    /// 当前占用列车ID列表
    #[serde(default)]
    pub current_trains: Vec<String>,

    /// 限速 (km/h), 0 表示未设置
    #[serde(default)]
    pub speed_limit: f64,

    /// 运行状态
    pub status: SectionStatus,

    /// 吞吐量 (列车/小时, 历史统计值)
    #[serde(default)]
    pub throughput: f64,

    /// 平均晚点 (秒, 历史统计值)
    #[serde(default)]
    pub average_delay: f64,

    /// 相邻区间ID列表
    #[serde(default)]
    pub connected_sections: Vec<String>,
}

impl Section {
    /// 生效容量: 未设置时回退到 3
    pub fn effective_capacity(&self) -> i32 {
        if self.max_capacity > 0 {
            self.max_capacity
        } else {
            DEFAULT_CAPACITY
        }
    }

    /// 生效限速: 未设置时回退到 120 km/h
    pub fn effective_speed_limit(&self) -> f64 {
        if self.speed_limit > 0.0 {
            self.speed_limit
        } else {
            DEFAULT_SPEED_LIMIT_KMH
        }
    }

    /// 生效长度: 未设置时回退到 1000 米
    pub fn effective_length(&self) -> f64 {
        if self.length > 0.0 {
            self.length
        } else {
            DEFAULT_LENGTH_M
        }
    }

    /// 当前占用数
    pub fn occupancy(&self) -> usize {
        self.current_trains.len()
    }

    /// 负载比: 占用数 / 生效容量 (可能 > 1,记录值瞬时超容时)
    pub fn load_ratio(&self) -> f64 {
        self.occupancy() as f64 / self.effective_capacity() as f64
    }
}
