use anyhow::Context;
use evinsight::{
    InsightClient, InsightConfig, InsightTask, RangeAnalysis, RangePredictor, VehicleInfo,
    VehicleType,
};
use tracing_subscriber::EnvFilter;

// Stand-in for the trained regression model.
struct FixedRangePredictor;

impl RangePredictor for FixedRangePredictor {
    fn predict(&self, vehicle: &VehicleInfo) -> f64 {
        match vehicle.vehicle_type {
            Some(VehicleType::Bev) => 358.5,
            Some(VehicleType::Phev) => 38.0,
            None => 0.0,
        }
    }
}

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(60));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = InsightConfig::from_env().context("AI insights are not configured")?;
    let client = InsightClient::from_config(config)?;
    tracing::info!(model = client.model(), "insight client ready");

    println!("EV AI Assistant Demo");
    println!("{}", "=".repeat(60));

    let predictor = FixedRangePredictor;
    let tesla = VehicleInfo::new()
        .with_make("Tesla")
        .with_model("Model 3")
        .with_model_year(2023)
        .with_vehicle_type(VehicleType::Bev)
        .with_base_msrp(46990.0)
        .with_state("CA");
    let prius = VehicleInfo::new()
        .with_make("Toyota")
        .with_model("Prius Prime")
        .with_model_year(2023)
        .with_vehicle_type(VehicleType::Phev)
        .with_base_msrp(32975.0)
        .with_state("WA");
    let tesla_range = predictor.predict(&tesla);
    let prius_range = predictor.predict(&prius);

    section("1. VEHICLE RECOMMENDATION");
    let analysis = RangeAnalysis::from_prediction(tesla_range, tesla.base_msrp.unwrap_or(0.0));
    println!("Vehicle: Tesla Model 3, predicted range {tesla_range:.1} miles");
    println!(
        "Daily capability: {:.0} miles, weekly potential: {:.0} miles",
        analysis.daily_miles, analysis.weekly_miles
    );
    if let Some(cost) = analysis.cost_per_mile {
        println!("Infrastructure cost: ${cost:.2}/mile");
    }
    let recommendation = client
        .generate(&InsightTask::Recommendation {
            vehicle: tesla.clone(),
            predicted_range_miles: tesla_range,
        })
        .await;
    println!("Recommendation: {recommendation}");

    section("2. MAINTENANCE TIPS");
    println!("{}", client.maintenance_tips("BEV", 2).await);

    section("3. CHARGING STRATEGY");
    println!("{}", client.charging_strategy(tesla_range, 50.0).await);

    section("4. EV QUESTION ANSWERING");
    let question = "What is the difference between BEV and PHEV?";
    println!("Q: {question}");
    println!("A: {}", client.answer_question(question).await);

    section("5. VEHICLE COMPARISON");
    println!(
        "{}",
        client
            .compare_vehicles(&tesla, tesla_range, &prius, prius_range)
            .await
    );

    println!("\n{}", "=".repeat(60));
    Ok(())
}
