// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证指标/调度/修正/预测引擎之间的协作和数据流转
// 场景: MetricsCalculator → ScheduleGenerator → GlobalAdjuster 组合测试
// ==========================================

use rail_traffic_aps::domain::section::Section;
use rail_traffic_aps::domain::train::Train;
use rail_traffic_aps::domain::types::{
    AdvisoryAction, GeoPoint, RiskLevel, SectionStatus, TrainStatus,
};
use rail_traffic_aps::engine::{EngineError, TrafficOptimizer};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用Train
fn create_test_train(
    train_id: &str,
    name: &str,
    current_section: Option<&str>,
    priority: i32,
    delay: f64,
) -> Train {
    Train {
        train_id: train_id.to_string(),
        name: name.to_string(),
        current_section: current_section.map(|s| s.to_string()),
        next_section: None,
        speed: 80.0,
        max_speed: 120.0,
        position: GeoPoint::new(28.6139, 77.2090),
        status: TrainStatus::Running,
        priority,
        scheduled_arrival: None,
        estimated_arrival: None,
        delay,
        passengers: 800,
    }
}

/// 创建测试用Section
fn create_test_section(
    section_id: &str,
    max_capacity: i32,
    occupants: usize,
    speed_limit: f64,
) -> Section {
    Section {
        section_id: section_id.to_string(),
        name: format!("Section {}", section_id),
        start_point: GeoPoint::new(28.6139, 77.2090),
        end_point: GeoPoint::new(28.7041, 77.1025),
        length: 8000.0,
        max_capacity,
        current_trains: (0..occupants).map(|i| format!("X{:03}", i)).collect(),
        speed_limit,
        status: SectionStatus::Operational,
        throughput: 10.0,
        average_delay: 60.0,
        connected_sections: vec![],
    }
}

// ==========================================
// 容量分配场景
// ==========================================

#[test]
fn test_capacity_race_only_highest_priority_wins() {
    let optimizer = TrafficOptimizer::new();

    // 2 个容量 1 的区间; 3 车同在 S001, 优先级 [5, 3, 1]
    let trains = vec![
        create_test_train("T001", "Express A", Some("S001"), 5, 0.0),
        create_test_train("T002", "Express B", Some("S001"), 3, 0.0),
        create_test_train("T003", "Express C", Some("S001"), 1, 0.0),
    ];
    let sections = vec![
        create_test_section("S001", 1, 0, 120.0),
        create_test_section("S002", 1, 0, 120.0),
    ];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    // 本轮恰好一条 S001 建议, 属于优先级 5 的列车; 其余两车无建议
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].train_id, "T001");
    assert_eq!(schedule[0].section_id, "S001");
}

#[test]
fn test_allocation_never_exceeds_effective_capacity() {
    let optimizer = TrafficOptimizer::new();

    // 容量未设置 → 生效容量 3; 5 车竞争
    let trains: Vec<Train> = (1..=5)
        .map(|i| {
            create_test_train(
                &format!("T{:03}", i),
                &format!("Express {}", i),
                Some("S001"),
                3,
                0.0,
            )
        })
        .collect();
    let sections = vec![create_test_section("S001", 0, 0, 120.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert_eq!(schedule.len(), 3);
}

// ==========================================
// 时速与动作场景
// ==========================================

#[test]
fn test_saturated_section_slows_down_and_clamps() {
    let optimizer = TrafficOptimizer::new();

    // 3/3 占用 → 拥堵 1.0: ×0.8 后再收到限速
    let trains = vec![create_test_train("T001", "Express A", Some("S001"), 3, 0.0)];
    let sections = vec![create_test_section("S001", 3, 3, 90.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].action, AdvisoryAction::SlowDown);
    // 生成: 120 * 0.8 = 96 → 限速 90
    // 修正: 全网拥堵水平 1.0 > 0.7 → 90 * 0.9 = 81
    assert!((schedule[0].recommended_speed - 81.0).abs() < 1e-9);
}

#[test]
fn test_heavily_delayed_train_on_clear_section_speeds_up() {
    let optimizer = TrafficOptimizer::new();

    // 晚点 400 秒, 1/5 = 0.2 拥堵
    let trains = vec![create_test_train("T001", "Express A", Some("S001"), 3, 400.0)];
    let sections = vec![create_test_section("S001", 5, 1, 130.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert_eq!(schedule[0].action, AdvisoryAction::SpeedUp);
    // 生成: 120 * 1.1 = 132 → 限速 130
    // 修正: 全网平均晚点 400 > 300 且优先级 3 → 130 * 1.15 = 149.5 (<150)
    assert!((schedule[0].recommended_speed - 149.5).abs() < 1e-9);
}

#[test]
fn test_train_without_section_gets_no_entry() {
    let optimizer = TrafficOptimizer::new();

    let trains = vec![
        create_test_train("T001", "Express A", None, 5, 0.0),
        create_test_train("T002", "Express B", Some("S001"), 1, 0.0),
    ];
    let sections = vec![create_test_section("S001", 3, 0, 120.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].train_id, "T002");
}

// ==========================================
// 高级别车次与排序场景
// ==========================================

#[test]
fn test_premium_service_wins_capacity_race() {
    let optimizer = TrafficOptimizer::new();

    // Rajdhani: 3 + 2 = 5 > 普通车 4
    let trains = vec![
        create_test_train("T001", "Howrah Mail", Some("S001"), 4, 0.0),
        create_test_train("T002", "Rajdhani Express 12301", Some("S001"), 3, 0.0),
    ];
    let sections = vec![create_test_section("S001", 1, 0, 120.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].train_id, "T002");
}

#[test]
fn test_equal_score_tie_broken_by_delay() {
    let optimizer = TrafficOptimizer::new();

    let trains = vec![
        create_test_train("T001", "Express A", Some("S001"), 3, 60.0),
        create_test_train("T002", "Express B", Some("S001"), 3, 480.0),
    ];
    let sections = vec![create_test_section("S001", 1, 0, 120.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert_eq!(schedule[0].train_id, "T002");
}

// ==========================================
// 全局修正场景
// ==========================================

#[test]
fn test_adjustments_compose_in_fixed_order() {
    let optimizer = TrafficOptimizer::new();

    // 全网平均晚点 350 秒, 区间满载 (拥堵水平 1.0 > 0.7)
    let trains = vec![create_test_train("T001", "Express A", Some("S001"), 4, 350.0)];
    let sections = vec![create_test_section("S001", 3, 3, 120.0)];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    // 生成: 120 * 0.8 = 96 (拥堵减速)
    // 修正: 96 * 1.15 = 110.4 (晚点提速, <150 不截断), 再 * 0.9 = 99.36 (拥堵减速)
    let entry = &schedule[0];
    assert!((entry.recommended_speed - 99.36).abs() < 1e-9);
    assert!(entry.recommended_speed >= 20.0);
    assert!(entry.recommended_speed <= 150.0);
}

#[test]
fn test_confidence_attached_after_full_pipeline() {
    let optimizer = TrafficOptimizer::new();

    let trains = vec![
        create_test_train("T001", "Express A", Some("S001"), 4, 60.0),
        create_test_train("T002", "Express B", Some("S002"), 2, 60.0),
    ];
    let sections = vec![
        create_test_section("S001", 5, 1, 120.0),
        create_test_section("S002", 5, 1, 120.0),
    ];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    // 拥堵 0.2 < 0.5 (+0.15), 晚点 60 < 180 (+0.10)
    // 优先级 4 额外 +0.05 → 1.00 截断 0.95; 优先级 2 → 0.95
    assert_eq!(schedule.len(), 2);
    for entry in &schedule {
        let confidence = entry.confidence.expect("修正阶段必须补全置信度");
        assert!(confidence >= 0.70 && confidence <= 0.95);
    }
    assert!((schedule[0].confidence.unwrap() - 0.95).abs() < 1e-9);
}

#[test]
fn test_recommended_speed_bounds_over_mixed_fleet() {
    let optimizer = TrafficOptimizer::new();

    let trains = vec![
        create_test_train("T001", "Rajdhani Express 12301", Some("S001"), 5, 600.0),
        create_test_train("T002", "Vande Bharat 22439", Some("S002"), 4, 350.0),
        create_test_train("T003", "Howrah Mail", Some("S001"), 2, 45.0),
        create_test_train("T004", "Local Passenger", Some("S003"), 1, 0.0),
        create_test_train("T005", "Duronto Express", Some("S002"), 3, 900.0),
    ];
    let sections = vec![
        create_test_section("S001", 3, 3, 110.0),
        create_test_section("S002", 2, 1, 130.0),
        create_test_section("S003", 0, 2, 100.0),
    ];

    let schedule = optimizer.optimize_schedule(&trains, &sections).unwrap();

    assert!(!schedule.is_empty());
    for entry in &schedule {
        assert!(
            entry.recommended_speed >= 20.0,
            "时速下限被击穿: {}",
            entry.recommended_speed
        );
        assert!(
            entry.recommended_speed <= 150.0,
            "时速上限被击穿: {}",
            entry.recommended_speed
        );
        assert!(entry.estimated_time_secs > 0);
    }
}

// ==========================================
// 拥堵预测场景
// ==========================================

#[test]
fn test_prediction_bounds_and_thresholds() {
    let optimizer = TrafficOptimizer::new();

    let mut saturated = create_test_section("S001", 3, 3, 120.0);
    saturated.throughput = 80.0; // 正趋势

    let mut draining = create_test_section("S002", 3, 1, 120.0);
    draining.throughput = 0.0;
    draining.average_delay = 900.0; // 负趋势

    let sections = vec![saturated, draining];

    let predictions = optimizer.predict_congestion(&sections, Some(15)).unwrap();

    assert_eq!(predictions.len(), 2);
    for prediction in &predictions {
        assert!(prediction.predicted_load >= 0.0);
        assert!(prediction.predicted_load <= 1.0);

        let expected_level = if prediction.predicted_load > 0.8 {
            RiskLevel::High
        } else if prediction.predicted_load > 0.6 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        assert_eq!(prediction.risk_level, expected_level);
    }

    // 满载 + 正趋势 → 封顶 1.0, 高风险
    assert_eq!(predictions[0].predicted_load, 1.0);
    assert_eq!(predictions[0].risk_level, RiskLevel::High);
}

#[test]
fn test_prediction_order_matches_input() {
    let optimizer = TrafficOptimizer::new();

    let sections = vec![
        create_test_section("S003", 3, 1, 120.0),
        create_test_section("S001", 3, 2, 120.0),
        create_test_section("S002", 3, 0, 120.0),
    ];

    let predictions = optimizer.predict_congestion(&sections, None).unwrap();

    let order: Vec<&str> = predictions.iter().map(|p| p.section_id.as_str()).collect();
    assert_eq!(order, vec!["S003", "S001", "S002"]);
}

// ==========================================
// 指标与错误处理场景
// ==========================================

#[test]
fn test_metrics_idempotent_and_zeroed_on_empty() {
    let optimizer = TrafficOptimizer::new();

    let trains = vec![create_test_train("T001", "Express A", Some("S001"), 3, 120.0)];
    let sections = vec![create_test_section("S001", 3, 2, 120.0)];

    let first = optimizer.compute_metrics(&trains, &sections).unwrap();
    let second = optimizer.compute_metrics(&trains, &sections).unwrap();
    assert_eq!(first, second);

    let empty = optimizer.compute_metrics(&[], &[]).unwrap();
    assert_eq!(empty.avg_delay, 0.0);
    assert_eq!(empty.congestion_level, 0.0);
    assert_eq!(empty.total_trains, 0);
}

#[test]
fn test_non_finite_input_fails_fast() {
    let optimizer = TrafficOptimizer::new();

    let mut poisoned = create_test_train("T001", "Express A", Some("S001"), 3, 0.0);
    poisoned.delay = f64::NAN;
    let sections = vec![create_test_section("S001", 3, 0, 120.0)];

    let result = optimizer.optimize_schedule(&[poisoned], &sections);
    assert!(matches!(result, Err(EngineError::InvalidInput { .. })));

    let mut bad_section = create_test_section("S002", 3, 0, 120.0);
    bad_section.length = f64::INFINITY;

    let result = optimizer.predict_congestion(&[bad_section], None);
    assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
}
