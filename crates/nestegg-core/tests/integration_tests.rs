//! Integration tests for nestegg-core
//!
//! These tests exercise the full deposits → market lookup → plan → recommendations workflow.

use nestegg_core::{
    generate_recommendations, parse_deposits_csv, plan_purchase, projection, total_savings,
    AssetType, Config, GoalAnalysis, GoalInputs, GoalStatus, MarketDataSource, PlanRequest,
    RecommendationType,
};

/// Fixed deposit export totalling 100,000
fn deposits_csv() -> &'static str {
    r#"amount,date,description
40000,2023-04-01,Bank FD 1y
35000,2023-10-15,Bank FD 2y
25000,2024-02-20,Post office TD"#
}

// =============================================================================
// Planning Workflow
// =============================================================================

#[test]
fn test_car_plan_from_deposits() {
    let config = Config::builtin().expect("embedded config should parse");

    let deposits = parse_deposits_csv(deposits_csv().as_bytes()).expect("Failed to parse CSV");
    assert_eq!(deposits.len(), 3);
    let savings = total_savings(&deposits);
    assert_eq!(savings, 100_000.0);

    let request = PlanRequest {
        location: "Pune".to_string(),
        ..PlanRequest::with_defaults(AssetType::Car, savings, &config.defaults)
    };
    let plan = plan_purchase(&config.market, &request).unwrap();

    // Cars depreciate 10%/year from the 1,000,000 average
    assert_eq!(plan.estimate.location, "Pune");
    assert_eq!(plan.current_price, 1_000_000.0);
    assert!(plan.target_price < plan.current_price);

    // ~857,692 saved against ~590,490
    assert_eq!(plan.analysis.status, GoalStatus::Achievable);
    assert_eq!(plan.analysis.percentage, 100.0);
    assert!(plan.analysis.shortfall < 0.0);
    assert_eq!(plan.recommendations.len(), 1);
}

#[test]
fn test_flat_plan_is_out_of_reach() {
    let config = Config::builtin().unwrap();
    let request = PlanRequest::with_defaults(AssetType::Flat, 100_000.0, &config.defaults);

    let plan = plan_purchase(&config.market, &request).unwrap();

    // 15M Mumbai flat appreciating 8%/year vs ~858K of savings
    assert_eq!(plan.analysis.status, GoalStatus::NotAchievable);
    assert!(plan.analysis.percentage < 10.0);

    let kinds: Vec<_> = plan.recommendations.iter().map(|r| r.kind).collect();
    assert_eq!(kinds.last(), Some(&RecommendationType::ReduceTarget));
    assert!(!kinds.contains(&RecommendationType::IncreaseSavings));
}

#[test]
fn test_plan_is_deterministic() {
    let config = Config::builtin().unwrap();
    let request = PlanRequest::with_defaults(AssetType::House, 2_000_000.0, &config.defaults);

    let first = plan_purchase(&config.market, &request).unwrap();
    let second = plan_purchase(&config.market, &request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_location_and_asset_resolves() {
    let config = Config::builtin().unwrap();

    for location in config.market.locations() {
        for asset in AssetType::all() {
            let estimate = config.market.lookup(*asset, &location).unwrap();
            assert_eq!(estimate.location, location);
            assert!(estimate.price.min <= estimate.price.avg);
            assert!(estimate.price.avg <= estimate.price.max);
        }
    }
}

// =============================================================================
// Engine Properties
// =============================================================================

#[test]
fn test_analysis_and_recommendations_agree() {
    let inputs = GoalInputs {
        current_savings: 0.0,
        monthly_contribution: 10_000.0,
        annual_rate: 7.0,
        target_amount: 8_000_000.0,
        years: 20.0,
    };
    let analysis = GoalAnalysis::compute(&inputs).unwrap();
    assert_eq!(analysis.status, GoalStatus::Partially);

    let recs = generate_recommendations(&analysis);
    let kinds: Vec<_> = recs.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecommendationType::IncreaseSavings,
            RecommendationType::ExtendTimeline,
            RecommendationType::ImproveReturns,
        ]
    );

    // Following the increase-savings advice reaches the target
    let extra = recs[0].action_value.unwrap();
    let projected = projection::future_value_with_contributions(
        inputs.current_savings,
        inputs.monthly_contribution + extra,
        inputs.annual_rate,
        inputs.years,
    );
    assert!((projected - inputs.target_amount).abs() / inputs.target_amount < 1e-3);

    // And so does waiting the suggested extra years
    let extra_years = recs[1].action_value.unwrap();
    let later = projection::future_value_with_contributions(
        inputs.current_savings,
        inputs.monthly_contribution,
        inputs.annual_rate,
        inputs.years + extra_years,
    );
    assert!(later >= inputs.target_amount);
}

#[test]
fn test_percentage_always_bounded() {
    for projected in [0.0, 1.0, 599_999.0, 1_000_000.0, 10_000_000.0] {
        let pct = projection::goal_percentage(projected, 1_000_000.0);
        assert!((0.0..=100.0).contains(&pct));
    }
}

#[test]
fn test_status_matches_percentage() {
    for projected in [0.0, 300_000.0, 600_000.0, 999_999.0, 1_000_000.0, 5_000_000.0] {
        let pct = projection::goal_percentage(projected, 1_000_000.0);
        let status = projection::determine_goal_status(projected, 1_000_000.0);

        let expected = if pct >= 100.0 {
            GoalStatus::Achievable
        } else if pct >= 60.0 {
            GoalStatus::Partially
        } else {
            GoalStatus::NotAchievable
        };
        assert_eq!(status, expected, "projected = {}", projected);
    }
}
