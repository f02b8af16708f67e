use evinsight_core::{VehicleInfo, VehicleType};
use serde_json::json;

#[test]
fn vehicle_type_parses_short_and_long_forms() {
    assert_eq!("BEV".parse::<VehicleType>().unwrap(), VehicleType::Bev);
    assert_eq!("phev".parse::<VehicleType>().unwrap(), VehicleType::Phev);
    assert_eq!(
        "Battery Electric Vehicle (BEV)".parse::<VehicleType>().unwrap(),
        VehicleType::Bev
    );
    assert_eq!(
        "Plug-in Hybrid Electric Vehicle (PHEV)"
            .parse::<VehicleType>()
            .unwrap(),
        VehicleType::Phev
    );
}

#[test]
fn vehicle_type_rejects_unknown() {
    let err = "FCEV".parse::<VehicleType>().unwrap_err();
    assert!(err.to_string().contains("FCEV"));
}

#[test]
fn vehicle_info_deserializes_dataset_columns() {
    let vehicle: VehicleInfo = serde_json::from_value(json!({
        "Make": "Tesla",
        "Model": "Model 3",
        "Model Year": 2023,
        "Electric Vehicle Type": "Battery Electric Vehicle (BEV)",
        "Base MSRP": 46990,
        "State": "CA"
    }))
    .expect("deserialize");

    assert_eq!(
        vehicle,
        VehicleInfo::new()
            .with_make("Tesla")
            .with_model("Model 3")
            .with_model_year(2023)
            .with_vehicle_type(VehicleType::Bev)
            .with_base_msrp(46990.0)
            .with_state("CA")
    );
}

#[test]
fn vehicle_info_serializes_canonical_keys_and_skips_missing() {
    let vehicle = VehicleInfo::new()
        .with_make("Nissan")
        .with_vehicle_type(VehicleType::Phev);

    let value = serde_json::to_value(vehicle).expect("serialize");
    assert_eq!(value, json!({"Make": "Nissan", "VehicleType": "PHEV"}));
}

#[test]
fn vehicle_info_missing_fields_default_to_none() {
    let vehicle: VehicleInfo = serde_json::from_value(json!({})).expect("deserialize");
    assert_eq!(vehicle, VehicleInfo::default());
}
