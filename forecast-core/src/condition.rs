use serde::{Deserialize, Serialize};

const ICON_BASE: &str = "//cdn.weatherapi.com/weather/64x64/day";

/// Discrete sky condition derived from cloud cover and precipitation.
///
/// Serializes as the `{ text, icon, code }` record the display layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(into = "ConditionRecord", try_from = "ConditionRecord")]
pub enum Condition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    /// Only produced when there was nothing to classify.
    #[default]
    Unknown,
}

impl Condition {
    /// Rain beats any cloud cover; cloud thresholds are strict.
    pub fn classify(cloud_cover_pct: f64, has_precipitation: bool) -> Self {
        if has_precipitation {
            Self::Rain
        } else if cloud_cover_pct > 75.0 {
            Self::Cloudy
        } else if cloud_cover_pct > 50.0 {
            Self::PartlyCloudy
        } else {
            Self::Clear
        }
    }

    /// Classifies from a resolved precipitation amount rather than a flag.
    pub fn from_readings(cloud_cover_pct: f64, precipitation: f64) -> Self {
        Self::classify(cloud_cover_pct, precipitation > 0.0)
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
            Self::Unknown => "Unknown",
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Clear | Self::Unknown => 1000,
            Self::PartlyCloudy => 1003,
            Self::Cloudy => 1006,
            Self::Rain => 1063,
        }
    }

    pub fn icon(&self) -> String {
        let file = match self {
            Self::Clear => "113",
            Self::PartlyCloudy => "116",
            Self::Cloudy => "119",
            Self::Rain => "266",
            Self::Unknown => return String::new(),
        };
        format!("{ICON_BASE}/{file}.png")
    }
}

/// Wire shape of a [`Condition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub text: String,
    pub icon: String,
    pub code: u16,
}

impl From<Condition> for ConditionRecord {
    fn from(condition: Condition) -> Self {
        Self {
            text: condition.text().to_string(),
            icon: condition.icon(),
            code: condition.code(),
        }
    }
}

impl TryFrom<ConditionRecord> for Condition {
    type Error = String;

    fn try_from(record: ConditionRecord) -> Result<Self, Self::Error> {
        [
            Condition::Clear,
            Condition::PartlyCloudy,
            Condition::Cloudy,
            Condition::Rain,
            Condition::Unknown,
        ]
        .into_iter()
        .find(|c| c.text() == record.text)
        .ok_or_else(|| format!("unknown condition '{}'", record.text))
    }
}
