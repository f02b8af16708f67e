use evinsight_core::{RangeAnalysis, RangePredictor, VehicleInfo, VehicleType};

#[test]
fn closures_act_as_predictors() {
    let predictor = |vehicle: &VehicleInfo| match vehicle.vehicle_type {
        Some(VehicleType::Bev) => 300.0,
        _ => 40.0,
    };

    let bev = VehicleInfo::new().with_vehicle_type(VehicleType::Bev);
    assert_eq!(predictor.predict(&bev), 300.0);
    assert_eq!(predictor.predict(&VehicleInfo::new()), 40.0);
}

#[test]
fn range_analysis_derives_daily_weekly_and_cost() {
    let analysis = RangeAnalysis::from_prediction(300.0, 45000.0);
    assert_eq!(analysis.daily_miles, 150.0);
    assert_eq!(analysis.weekly_miles, 1500.0);
    assert_eq!(analysis.cost_per_mile, Some(3.0));
}

#[test]
fn range_analysis_skips_cost_for_zero_range() {
    let analysis = RangeAnalysis::from_prediction(0.0, 45000.0);
    assert_eq!(analysis.daily_miles, 0.0);
    assert_eq!(analysis.cost_per_mile, None);
}
