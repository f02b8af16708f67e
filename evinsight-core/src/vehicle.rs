use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InsightError;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum VehicleType {
    #[serde(rename = "BEV")]
    Bev,
    #[serde(rename = "PHEV")]
    Phev,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Bev => "BEV",
            VehicleType::Phev => "PHEV",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = InsightError;

    /// Accepts the short codes as well as the registration dataset's long
    /// forms, e.g. `Battery Electric Vehicle (BEV)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "BEV" | "BATTERY ELECTRIC VEHICLE (BEV)" => Ok(VehicleType::Bev),
            "PHEV" | "PLUG-IN HYBRID ELECTRIC VEHICLE (PHEV)" => Ok(VehicleType::Phev),
            _ => Err(InsightError::InvalidInput(format!(
                "unknown vehicle type '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for VehicleType {
    type Error = InsightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Vehicle attributes as collected by the presentation layer.
///
/// Every field is optional; prompt rendering substitutes placeholders for
/// whatever is missing.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct VehicleInfo {
    #[serde(rename = "Make", default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(rename = "Model", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(
        rename = "ModelYear",
        alias = "Model Year",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub model_year: Option<i32>,
    #[serde(
        rename = "VehicleType",
        alias = "Electric Vehicle Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_type: Option<VehicleType>,
    #[serde(
        rename = "BaseMSRP",
        alias = "Base MSRP",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_msrp: Option<f64>,
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl VehicleInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_make(mut self, value: impl Into<String>) -> Self {
        self.make = Some(value.into());
        self
    }

    pub fn with_model(mut self, value: impl Into<String>) -> Self {
        self.model = Some(value.into());
        self
    }

    pub fn with_model_year(mut self, value: i32) -> Self {
        self.model_year = Some(value);
        self
    }

    pub fn with_vehicle_type(mut self, value: VehicleType) -> Self {
        self.vehicle_type = Some(value);
        self
    }

    pub fn with_base_msrp(mut self, value: f64) -> Self {
        self.base_msrp = Some(value);
        self
    }

    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }
}
