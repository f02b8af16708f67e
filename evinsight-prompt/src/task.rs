use std::collections::HashMap;
use std::fmt;

use evinsight_core::VehicleInfo;
use serde::{Deserialize, Serialize};

use crate::format::{currency_or_zero, display_or_unknown, one_decimal, text_or_unknown, whole};
use crate::PromptTemplate;

const RECOMMENDATION_TEMPLATE: &str = "\
You are an expert electric vehicle consultant. Provide a professional recommendation for this vehicle.

Vehicle Details:
- Make: {{make}}
- Model: {{model}}
- Year: {{year}}
- Type: {{vehicle_type}}
- Price: {{price}}
- Predicted Range: {{range}} miles
- Location: {{state}}

Provide a 2-3 sentence professional insight about:
1. Whether this range is competitive for this vehicle class and price point
2. Best use cases and real-world recommendations
Keep it concise, professional, and user-friendly.";

const MAINTENANCE_TEMPLATE: &str = "\
You are an EV maintenance expert. Provide maintenance tips for a {{age}}-year-old {{vehicle_type}}.

Provide 3-4 key maintenance points in bullet format for:
- Battery health management
- Charging recommendations
- Seasonal care
Keep it practical and actionable.";

const CHARGING_TEMPLATE: &str = "\
You are an EV charging expert. Provide optimal charging strategy for a vehicle with {{range}} miles range and {{commute}} miles daily commute.

Provide practical recommendations for:
1. Charging frequency
2. Optimal charging times
3. Home vs public charging strategy
Keep it concise and actionable.";

const QUESTION_TEMPLATE: &str = "\
You are an expert electric vehicle consultant with deep knowledge about EVs, charging, batteries, and sustainability.

User Question: {{question}}

Provide a helpful, accurate, and professional response. Keep it concise (2-3 sentences) and practical.";

const COMPARISON_TEMPLATE: &str = "\
Compare these two electric vehicles as an expert consultant:

Vehicle 1:
{{vehicle_a}}

Vehicle 2:
{{vehicle_b}}

Provide a brief, professional comparison highlighting key differences and which might be better for different use cases.";

const COMPARISON_VEHICLE_TEMPLATE: &str = "\
- Make/Model: {{make}} {{model}}
- Year: {{year}}
- Type: {{vehicle_type}}
- Price: {{price}}
- Predicted Range: {{range}} miles";

/// Output-length and sampling settings sent with a task's request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    /// `None` leaves sampling at the endpoint default.
    pub temperature: Option<f32>,
}

struct TaskProfile {
    name: &'static str,
    template: &'static str,
    params: GenerationParams,
    fallback: &'static str,
}

static RECOMMENDATION: TaskProfile = TaskProfile {
    name: "recommendation",
    template: RECOMMENDATION_TEMPLATE,
    params: GenerationParams {
        max_tokens: 250,
        temperature: Some(0.7),
    },
    fallback: "generate AI insights",
};

static MAINTENANCE_TIPS: TaskProfile = TaskProfile {
    name: "maintenance_tips",
    template: MAINTENANCE_TEMPLATE,
    params: GenerationParams {
        max_tokens: 200,
        temperature: None,
    },
    fallback: "generate maintenance tips",
};

static CHARGING_STRATEGY: TaskProfile = TaskProfile {
    name: "charging_strategy",
    template: CHARGING_TEMPLATE,
    params: GenerationParams {
        max_tokens: 200,
        temperature: None,
    },
    fallback: "generate charging strategy",
};

static QUESTION: TaskProfile = TaskProfile {
    name: "question",
    template: QUESTION_TEMPLATE,
    params: GenerationParams {
        max_tokens: 300,
        temperature: Some(0.7),
    },
    fallback: "answer question",
};

static COMPARISON: TaskProfile = TaskProfile {
    name: "comparison",
    template: COMPARISON_TEMPLATE,
    params: GenerationParams {
        max_tokens: 300,
        temperature: None,
    },
    fallback: "compare vehicles",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Recommendation,
    MaintenanceTips,
    ChargingStrategy,
    Question,
    Comparison,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Recommendation,
        TaskKind::MaintenanceTips,
        TaskKind::ChargingStrategy,
        TaskKind::Question,
        TaskKind::Comparison,
    ];

    fn profile(self) -> &'static TaskProfile {
        match self {
            TaskKind::Recommendation => &RECOMMENDATION,
            TaskKind::MaintenanceTips => &MAINTENANCE_TIPS,
            TaskKind::ChargingStrategy => &CHARGING_STRATEGY,
            TaskKind::Question => &QUESTION,
            TaskKind::Comparison => &COMPARISON,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.profile().name
    }

    pub fn params(self) -> GenerationParams {
        self.profile().params
    }

    /// Phrase completing `"Unable to ..."` when the task cannot be served.
    pub fn fallback_description(self) -> &'static str {
        self.profile().fallback
    }

    fn template(self) -> PromptTemplate {
        PromptTemplate::new(self.profile().template)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One insight request with everything its prompt needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum InsightTask {
    Recommendation {
        vehicle: VehicleInfo,
        predicted_range_miles: f64,
    },
    MaintenanceTips {
        vehicle_type: String,
        age_years: u32,
    },
    ChargingStrategy {
        predicted_range_miles: f64,
        daily_commute_miles: f64,
    },
    Question {
        text: String,
    },
    Comparison {
        vehicle_a: VehicleInfo,
        range_a: f64,
        vehicle_b: VehicleInfo,
        range_b: f64,
    },
}

impl InsightTask {
    pub fn kind(&self) -> TaskKind {
        match self {
            InsightTask::Recommendation { .. } => TaskKind::Recommendation,
            InsightTask::MaintenanceTips { .. } => TaskKind::MaintenanceTips,
            InsightTask::ChargingStrategy { .. } => TaskKind::ChargingStrategy,
            InsightTask::Question { .. } => TaskKind::Question,
            InsightTask::Comparison { .. } => TaskKind::Comparison,
        }
    }

    pub fn params(&self) -> GenerationParams {
        self.kind().params()
    }

    /// Renders the task into the prompt sent to the endpoint.
    pub fn build_prompt(&self) -> String {
        let mut vars = HashMap::new();
        match self {
            InsightTask::Recommendation {
                vehicle,
                predicted_range_miles,
            } => {
                insert_vehicle_vars(&mut vars, vehicle);
                vars.insert("range", one_decimal(*predicted_range_miles));
                vars.insert(
                    "state",
                    text_or_unknown(vehicle.state.as_deref()).to_string(),
                );
            }
            InsightTask::MaintenanceTips {
                vehicle_type,
                age_years,
            } => {
                vars.insert("age", age_years.to_string());
                vars.insert(
                    "vehicle_type",
                    text_or_unknown(Some(vehicle_type.as_str())).to_string(),
                );
            }
            InsightTask::ChargingStrategy {
                predicted_range_miles,
                daily_commute_miles,
            } => {
                vars.insert("range", whole(*predicted_range_miles));
                vars.insert("commute", whole(*daily_commute_miles));
            }
            InsightTask::Question { text } => {
                vars.insert("question", text.clone());
            }
            InsightTask::Comparison {
                vehicle_a,
                range_a,
                vehicle_b,
                range_b,
            } => {
                vars.insert("vehicle_a", comparison_block(vehicle_a, *range_a));
                vars.insert("vehicle_b", comparison_block(vehicle_b, *range_b));
            }
        }
        self.kind().template().render(&vars)
    }
}

pub fn build_prompt(task: &InsightTask) -> String {
    task.build_prompt()
}

fn insert_vehicle_vars(vars: &mut HashMap<&'static str, String>, vehicle: &VehicleInfo) {
    vars.insert("make", text_or_unknown(vehicle.make.as_deref()).to_string());
    vars.insert("model", text_or_unknown(vehicle.model.as_deref()).to_string());
    vars.insert("year", display_or_unknown(vehicle.model_year));
    vars.insert("vehicle_type", display_or_unknown(vehicle.vehicle_type));
    vars.insert("price", currency_or_zero(vehicle.base_msrp));
}

fn comparison_block(vehicle: &VehicleInfo, range: f64) -> String {
    let mut vars = HashMap::new();
    insert_vehicle_vars(&mut vars, vehicle);
    vars.insert("range", whole(range));
    PromptTemplate::new(COMPARISON_VEHICLE_TEMPLATE).render(&vars)
}
