// ==========================================
// 铁路运行监控系统 - 引擎层错误类型
// ==========================================
// 职责: 定义引擎调用的失败类别
// 工具: thiserror 派生宏
// 红线: 缺省可补的字段走回退值,不报错;
//       数值污染 (NaN/Inf/负值) 必须快速失败,禁止静默传播
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 输入校验错误 =====
    #[error("无效输入: {entity}[{id}].{field}: {message}")]
    InvalidInput {
        entity: String,
        id: String,
        field: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// 构造输入校验错误
    pub fn invalid_input(
        entity: impl Into<String>,
        id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        EngineError::InvalidInput {
            entity: entity.into(),
            id: id.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
