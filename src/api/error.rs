// ==========================================
// 铁路运行监控系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎错误为用户友好的错误消息
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 内部错误 =====
    #[error("内部错误: {0}")]
    Internal(String),
}

// 引擎错误 → API错误
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput { .. } => ApiError::InvalidInput(err.to_string()),
            EngineError::Other(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
