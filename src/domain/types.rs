// ==========================================
// 铁路运行监控系统 - 领域类型定义
// ==========================================
// 职责: 定义跨实体共享的枚举与值对象
// 序列化格式: snake_case / lowercase (与前端 API 约定一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 列车运行状态 (Train Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainStatus {
    Running,     // 运行中
    Stopped,     // 停车
    Delayed,     // 晚点
    Maintenance, // 检修
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainStatus::Running => write!(f, "running"),
            TrainStatus::Stopped => write!(f, "stopped"),
            TrainStatus::Delayed => write!(f, "delayed"),
            TrainStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

// ==========================================
// 区间运行状态 (Section Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Operational, // 正常
    Maintenance, // 检修
    Congested,   // 拥堵
    Blocked,     // 封锁
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionStatus::Operational => write!(f, "operational"),
            SectionStatus::Maintenance => write!(f, "maintenance"),
            SectionStatus::Congested => write!(f, "congested"),
            SectionStatus::Blocked => write!(f, "blocked"),
        }
    }
}

// ==========================================
// 调度建议动作 (Advisory Action)
// ==========================================
// 红线: 建议制,不是控制制 — 引擎只输出建议,执行由调用方决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryAction {
    SlowDown, // 减速
    SpeedUp,  // 提速
    Proceed,  // 正常通行
    Maintain, // 维持现速
}

impl fmt::Display for AdvisoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryAction::SlowDown => write!(f, "slow_down"),
            AdvisoryAction::SpeedUp => write!(f, "speed_up"),
            AdvisoryAction::Proceed => write!(f, "proceed"),
            AdvisoryAction::Maintain => write!(f, "maintain"),
        }
    }
}

// ==========================================
// 拥堵风险等级 (Risk Level)
// ==========================================
// 三档分级: 依预测负载阈值 0.8 / 0.6 划分
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,    // 低风险
    Medium, // 中风险
    High,   // 高风险
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 地理坐标 (Geo Point)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
