// ==========================================
// 铁路运行监控系统 - 引擎层事件发布
// ==========================================
// 职责: 定义建议事件发布 trait,实现依赖倒置
// 说明: Engine 层定义 trait,传输层 (WebSocket 等) 实现适配器
// 红线: 引擎不直接依赖任何传输实现
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;

// ==========================================
// 建议事件类型
// ==========================================

/// 建议事件触发类型
///
/// Engine 层定义的事件类型,用于通知下游广播系统
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationEventType {
    /// 调度建议更新 (一轮优化完成)
    OptimizationUpdated,
    /// 单车建议被调用方采纳
    TrainOptimized,
}

impl RecommendationEventType {
    /// 转换为字符串标识 (与前端事件名一致)
    pub fn as_str(&self) -> &str {
        match self {
            RecommendationEventType::OptimizationUpdated => "optimization:updated",
            RecommendationEventType::TrainOptimized => "train:optimized",
        }
    }
}

/// 建议事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEvent {
    /// 本轮优化运行ID
    pub run_id: String,
    /// 事件类型
    pub event_type: RecommendationEventType,
    /// 事件来源描述
    pub source: Option<String>,
    /// 涉及的建议条数
    pub entry_count: usize,
}

impl RecommendationEvent {
    /// 创建一轮优化完成事件
    pub fn optimization_updated(run_id: String, entry_count: usize) -> Self {
        Self {
            run_id,
            event_type: RecommendationEventType::OptimizationUpdated,
            source: None,
            entry_count,
        }
    }
}

// ==========================================
// 事件发布 Trait
// ==========================================

/// 建议事件发布者 Trait
///
/// Engine 层定义,传输层实现
/// 通过 trait 实现依赖倒置,解除 Engine → 传输层的直接依赖
pub trait RecommendationEventPublisher: Send + Sync {
    /// 发布建议事件
    ///
    /// # 参数
    /// - `event`: 建议事件
    fn publish(&self, event: RecommendationEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作事件发布者
///
/// 用于不需要事件发布的场景 (如单元测试)
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl RecommendationEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: RecommendationEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            run_id = %event.run_id,
            event_type = event.event_type.as_str(),
            "NoOpEventPublisher: 跳过事件发布"
        );
        Ok(())
    }
}

/// 可选的事件发布者包装
///
/// 简化 Option<Arc<dyn RecommendationEventPublisher>> 的使用
pub struct OptionalEventPublisher {
    inner: Option<Arc<dyn RecommendationEventPublisher>>,
}

impl OptionalEventPublisher {
    /// 创建带发布者的实例
    pub fn with_publisher(publisher: Arc<dyn RecommendationEventPublisher>) -> Self {
        Self {
            inner: Some(publisher),
        }
    }

    /// 创建空实例 (不发布事件)
    pub fn none() -> Self {
        Self { inner: None }
    }

    /// 发布事件 (如果有发布者)
    pub fn publish(&self, event: RecommendationEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        match &self.inner {
            Some(publisher) => publisher.publish(event),
            None => Ok(()),
        }
    }

    /// 检查是否配置了发布者
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalEventPublisher {
    fn default() -> Self {
        Self::none()
    }
}
