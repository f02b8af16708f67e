use evinsight_core::{VehicleInfo, VehicleType};
use evinsight_prompt::{build_prompt, InsightTask, TaskKind};
use serde_json::json;

fn tesla() -> VehicleInfo {
    VehicleInfo::new()
        .with_make("Tesla")
        .with_model("Model 3")
        .with_model_year(2023)
        .with_vehicle_type(VehicleType::Bev)
        .with_base_msrp(46990.0)
        .with_state("CA")
}

fn recommendation(vehicle: VehicleInfo) -> InsightTask {
    InsightTask::Recommendation {
        vehicle,
        predicted_range_miles: 358.5,
    }
}

#[test]
fn recommendation_contains_every_formatted_field() {
    let prompt = recommendation(tesla()).build_prompt();

    assert!(prompt.starts_with("You are an expert electric vehicle consultant."));
    assert!(prompt.contains("- Make: Tesla\n"));
    assert!(prompt.contains("- Model: Model 3\n"));
    assert!(prompt.contains("- Year: 2023\n"));
    assert!(prompt.contains("- Type: BEV\n"));
    assert!(prompt.contains("- Price: $46,990\n"));
    assert!(prompt.contains("- Predicted Range: 358.5 miles\n"));
    assert!(prompt.contains("- Location: CA\n"));
    assert!(prompt.contains("2-3 sentence"));
}

#[test]
fn missing_make_renders_unknown() {
    let mut vehicle = tesla();
    vehicle.make = None;
    let prompt = recommendation(vehicle).build_prompt();

    assert!(prompt.contains("- Make: Unknown\n"));
    assert!(!prompt.contains("None"));
    assert!(!prompt.contains(": \n"));
}

#[test]
fn empty_vehicle_renders_placeholders_and_zero_price() {
    let prompt = recommendation(VehicleInfo::default()).build_prompt();

    for line in [
        "- Make: Unknown",
        "- Model: Unknown",
        "- Year: Unknown",
        "- Type: Unknown",
        "- Location: Unknown",
    ] {
        assert!(prompt.contains(line), "missing line {line}");
    }
    // Absent prices keep rendering as $0 rather than Unknown.
    assert!(prompt.contains("- Price: $0\n"));
}

#[test]
fn maintenance_tips_mentions_age_and_type() {
    let task = InsightTask::MaintenanceTips {
        vehicle_type: "BEV".to_string(),
        age_years: 2,
    };
    let prompt = task.build_prompt();

    assert!(prompt.contains("2-year-old BEV"));
    assert!(prompt.contains("3-4 key maintenance points"));
    assert!(prompt.contains("- Seasonal care"));
}

#[test]
fn charging_strategy_rounds_to_whole_miles() {
    let task = InsightTask::ChargingStrategy {
        predicted_range_miles: 358.5,
        daily_commute_miles: 50.0,
    };
    let prompt = task.build_prompt();

    assert!(prompt.contains("359 miles range"));
    assert!(prompt.contains("50 miles daily commute"));
    assert!(prompt.contains("3. Home vs public charging strategy"));
}

#[test]
fn question_is_forwarded_verbatim() {
    let task = InsightTask::Question {
        text: "What is the difference between BEV and PHEV?".to_string(),
    };
    let prompt = task.build_prompt();

    assert!(prompt.contains("User Question: What is the difference between BEV and PHEV?\n"));
    assert!(prompt.contains("(2-3 sentences)"));
}

#[test]
fn empty_question_still_builds() {
    let prompt = InsightTask::Question {
        text: String::new(),
    }
    .build_prompt();
    assert!(prompt.contains("User Question: \n"));
}

#[test]
fn comparison_renders_both_vehicles_with_whole_ranges() {
    let bolt = VehicleInfo::new()
        .with_make("Chevrolet")
        .with_model("Bolt EV")
        .with_model_year(2022)
        .with_vehicle_type(VehicleType::Bev)
        .with_base_msrp(31995.0);
    let task = InsightTask::Comparison {
        vehicle_a: tesla(),
        range_a: 358.5,
        vehicle_b: bolt,
        range_b: 259.4,
    };
    let prompt = task.build_prompt();

    assert!(prompt.contains("Vehicle 1:\n- Make/Model: Tesla Model 3\n"));
    assert!(prompt.contains("Vehicle 2:\n- Make/Model: Chevrolet Bolt EV\n"));
    assert!(prompt.contains("- Price: $46,990\n"));
    assert!(prompt.contains("- Price: $31,995\n"));
    assert!(prompt.contains("- Predicted Range: 359 miles\n"));
    assert!(prompt.contains("- Predicted Range: 259 miles\n"));
}

#[test]
fn comparison_with_missing_fields_uses_unknown() {
    let task = InsightTask::Comparison {
        vehicle_a: VehicleInfo::default(),
        range_a: 100.0,
        vehicle_b: VehicleInfo::default(),
        range_b: 200.0,
    };
    let prompt = task.build_prompt();

    assert!(prompt.contains("- Make/Model: Unknown Unknown\n"));
    assert!(!prompt.contains("None"));
}

#[test]
fn building_twice_is_byte_identical() {
    let tasks = [
        recommendation(tesla()),
        InsightTask::MaintenanceTips {
            vehicle_type: "PHEV".to_string(),
            age_years: 7,
        },
        InsightTask::ChargingStrategy {
            predicted_range_miles: 42.0,
            daily_commute_miles: 18.3,
        },
        InsightTask::Question {
            text: "Does cold weather matter?".to_string(),
        },
        InsightTask::Comparison {
            vehicle_a: tesla(),
            range_a: 300.0,
            vehicle_b: VehicleInfo::default(),
            range_b: 30.0,
        },
    ];

    for task in &tasks {
        assert_eq!(task.build_prompt(), build_prompt(task));
        assert_eq!(task.build_prompt(), task.clone().build_prompt());
    }
}

#[test]
fn task_parameters_are_fixed_per_kind() {
    let expected = [
        (TaskKind::Recommendation, 250, Some(0.7), "generate AI insights"),
        (TaskKind::MaintenanceTips, 200, None, "generate maintenance tips"),
        (TaskKind::ChargingStrategy, 200, None, "generate charging strategy"),
        (TaskKind::Question, 300, Some(0.7), "answer question"),
        (TaskKind::Comparison, 300, None, "compare vehicles"),
    ];

    for (kind, max_tokens, temperature, fallback) in expected {
        let params = kind.params();
        assert_eq!(params.max_tokens, max_tokens, "{kind}");
        assert_eq!(params.temperature, temperature, "{kind}");
        assert_eq!(kind.fallback_description(), fallback);
    }
    assert_eq!(TaskKind::ALL.len(), 5);
}

#[test]
fn task_deserializes_from_tagged_json() {
    let task: InsightTask = serde_json::from_value(json!({
        "task": "maintenance_tips",
        "vehicle_type": "BEV",
        "age_years": 2
    }))
    .expect("deserialize");

    assert_eq!(task.kind(), TaskKind::MaintenanceTips);
    assert!(task.build_prompt().contains("2-year-old BEV"));
}
