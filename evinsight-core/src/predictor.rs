use crate::VehicleInfo;

/// Range-prediction model consumed by the surrounding application.
///
/// Training and loading live outside this workspace; the insight client never
/// calls a predictor itself, it only receives the resulting miles.
pub trait RangePredictor: Send + Sync {
    fn predict(&self, vehicle: &VehicleInfo) -> f64;
}

impl<F> RangePredictor for F
where
    F: Fn(&VehicleInfo) -> f64 + Send + Sync,
{
    fn predict(&self, vehicle: &VehicleInfo) -> f64 {
        self(vehicle)
    }
}

/// Rule-of-thumb figures shown next to a range prediction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeAnalysis {
    /// Miles available per day when a charge covers a round trip.
    pub daily_miles: f64,
    /// Five driving days on one charge each.
    pub weekly_miles: f64,
    /// Purchase price spread over fifty full charges. `None` for a
    /// non-positive range.
    pub cost_per_mile: Option<f64>,
}

impl RangeAnalysis {
    pub fn from_prediction(predicted_range_miles: f64, base_msrp: f64) -> Self {
        let cost_per_mile = if predicted_range_miles > 0.0 {
            Some(base_msrp / (predicted_range_miles * 50.0))
        } else {
            None
        };
        Self {
            daily_miles: predicted_range_miles / 2.0,
            weekly_miles: predicted_range_miles * 5.0,
            cost_per_mile,
        }
    }
}
