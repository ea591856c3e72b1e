// ==========================================
// 铁路运行监控系统 - 快照输入校验
// ==========================================
// 职责: 数值字段合法性检查,在进入任何计算之前执行
// 规则: 缺省/零值字段由回退值兜底,不在此拦截;
//       NaN/Inf 与负值属于调用方错误,快速失败
// ==========================================

use crate::domain::section::Section;
use crate::domain::train::{Train, MAX_PRIORITY};
use crate::engine::error::{EngineError, EngineResult};

/// 校验单个数值字段: 必须有限且非负
fn check_non_negative(
    entity: &str,
    id: &str,
    field: &str,
    value: f64,
) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::invalid_input(
            entity,
            id,
            field,
            format!("非法数值 {}", value),
        ));
    }
    if value < 0.0 {
        return Err(EngineError::invalid_input(
            entity,
            id,
            field,
            format!("不允许负值 {}", value),
        ));
    }
    Ok(())
}

/// 校验列车快照列表
pub fn validate_trains(trains: &[Train]) -> EngineResult<()> {
    for train in trains {
        check_non_negative("train", &train.train_id, "delay", train.delay)?;
        check_non_negative("train", &train.train_id, "speed", train.speed)?;
        check_non_negative("train", &train.train_id, "max_speed", train.max_speed)?;

        // priority: 0 表示未设置 (回退到 1), 负值与超上限属于调用方错误
        if train.priority < 0 || train.priority > MAX_PRIORITY {
            return Err(EngineError::invalid_input(
                "train",
                &train.train_id,
                "priority",
                format!("优先级超出范围 [0, {}]: {}", MAX_PRIORITY, train.priority),
            ));
        }

        if train.passengers < 0 {
            return Err(EngineError::invalid_input(
                "train",
                &train.train_id,
                "passengers",
                format!("不允许负值 {}", train.passengers),
            ));
        }
    }
    Ok(())
}

/// 校验区间快照列表
pub fn validate_sections(sections: &[Section]) -> EngineResult<()> {
    for section in sections {
        check_non_negative("section", &section.section_id, "length", section.length)?;
        check_non_negative(
            "section",
            &section.section_id,
            "speed_limit",
            section.speed_limit,
        )?;
        check_non_negative(
            "section",
            &section.section_id,
            "throughput",
            section.throughput,
        )?;
        check_non_negative(
            "section",
            &section.section_id,
            "average_delay",
            section.average_delay,
        )?;

        if section.max_capacity < 0 {
            return Err(EngineError::invalid_input(
                "section",
                &section.section_id,
                "max_capacity",
                format!("不允许负值 {}", section.max_capacity),
            ));
        }
    }
    Ok(())
}

/// 校验预测时距 (分钟)
pub fn validate_horizon(horizon_minutes: i64) -> EngineResult<()> {
    if horizon_minutes <= 0 {
        return Err(EngineError::invalid_input(
            "prediction",
            "-",
            "time_horizon_minutes",
            format!("时距必须为正: {}", horizon_minutes),
        ));
    }
    Ok(())
}
