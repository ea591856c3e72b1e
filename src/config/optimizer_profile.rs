// ==========================================
// 铁路运行监控系统 - 优化器配置
// ==========================================
// 职责: 引擎固定配置 (权重/高级别车次名单)
// 说明: 引擎跨调用唯一保留的状态,调用期间只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PremiumServiceProfile - 高级别车次识别配置
// ==========================================

/// 高级别车次识别配置
///
/// 以可配置的名称子串名单代替散落的字符串匹配:
/// 列车名称命中任一子串即视为高级别车次,获得固定优先级加成
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumServiceProfile {
    /// 识别名单 (名称子串)
    #[serde(default = "PremiumServiceProfile::default_tiers")]
    pub tiers: Vec<String>,

    /// 优先级加成
    #[serde(default = "PremiumServiceProfile::default_boost")]
    pub priority_boost: i32,
}

impl PremiumServiceProfile {
    fn default_tiers() -> Vec<String> {
        vec!["Rajdhani".to_string(), "Vande Bharat".to_string()]
    }

    fn default_boost() -> i32 {
        2
    }

    /// 判定列车名称是否命中高级别名单
    pub fn is_premium(&self, train_name: &str) -> bool {
        self.tiers.iter().any(|tier| train_name.contains(tier))
    }

    /// 返回列车名称对应的优先级加成 (未命中为 0)
    pub fn boost_for(&self, train_name: &str) -> i32 {
        if self.is_premium(train_name) {
            self.priority_boost
        } else {
            0
        }
    }
}

impl Default for PremiumServiceProfile {
    fn default() -> Self {
        Self {
            tiers: Self::default_tiers(),
            priority_boost: Self::default_boost(),
        }
    }
}

// ==========================================
// OptimizerWeights - 优化权重
// ==========================================

/// 优化权重
///
/// 保留为配置项供后续调权,当前版本的规则引擎
/// 采用阈值式规则,权重不直接进入计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerWeights {
    #[serde(default)]
    pub delay: f64,

    #[serde(default)]
    pub throughput: f64,

    #[serde(default)]
    pub priority: f64,

    #[serde(default)]
    pub capacity: f64,
}

impl Default for OptimizerWeights {
    fn default() -> Self {
        Self {
            delay: 0.3,
            throughput: 0.4,
            priority: 0.2,
            capacity: 0.1,
        }
    }
}

// ==========================================
// OptimizerProfile - 优化器配置聚合
// ==========================================

/// 优化器配置聚合
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizerProfile {
    /// 高级别车次识别配置
    #[serde(default)]
    pub premium: PremiumServiceProfile,

    /// 优化权重
    #[serde(default)]
    pub weights: OptimizerWeights,
}
