use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Upstream model that contributed a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Sg,
    Noaa,
    Icon,
    Meteo,
    Dwd,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Sg => "sg",
            Source::Noaa => "noaa",
            Source::Icon => "icon",
            Source::Meteo => "meteo",
            Source::Dwd => "dwd",
        }
    }

    /// All sources, highest priority first.
    pub const fn all() -> &'static [Source] {
        &[Source::Sg, Source::Noaa, Source::Icon, Source::Meteo, Source::Dwd]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Source {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "sg" => Ok(Source::Sg),
            "noaa" => Ok(Source::Noaa),
            "icon" => Ok(Source::Icon),
            "meteo" => Ok(Source::Meteo),
            "dwd" => Ok(Source::Dwd),
            _ => Err(anyhow::anyhow!(
                "Unknown source '{value}'. Supported sources: sg, noaa, icon, meteo, dwd."
            )),
        }
    }
}

/// Readings of one physical quantity, keyed by the source that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noaa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meteo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dwd: Option<f64>,
}

impl SourceValue {
    pub fn get(&self, source: Source) -> Option<f64> {
        match source {
            Source::Sg => self.sg,
            Source::Noaa => self.noaa,
            Source::Icon => self.icon,
            Source::Meteo => self.meteo,
            Source::Dwd => self.dwd,
        }
    }

    /// Readings in priority order.
    pub fn readings(&self) -> impl Iterator<Item = (Source, Option<f64>)> + '_ {
        Source::all().iter().map(|&source| (source, self.get(source)))
    }

    /// The reading of the highest-priority source that reported one.
    pub fn value(&self) -> Option<f64> {
        first_reading(self.readings())
    }
}

/// Returns the first present reading of an ordered `(source, reading)` list.
pub fn first_reading<I>(readings: I) -> Option<f64>
where
    I: IntoIterator<Item = (Source, Option<f64>)>,
{
    readings.into_iter().find_map(|(_, reading)| reading)
}

/// Resolves an optional parameter block; a missing block resolves to `None`.
pub fn resolve(value: Option<&SourceValue>) -> Option<f64> {
    value.and_then(SourceValue::value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_as_str_roundtrip() {
        for source in Source::all() {
            let s = source.as_str();
            let parsed = Source::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*source, parsed);
        }
    }

    #[test]
    fn source_parse_is_case_insensitive() {
        assert_eq!(Source::try_from("NOAA").unwrap(), Source::Noaa);
    }

    #[test]
    fn unknown_source_error() {
        let err = Source::try_from("ecmwf").unwrap_err();
        assert!(err.to_string().contains("Unknown source"));
    }

    #[test]
    fn sg_wins_over_every_other_source() {
        let value = SourceValue {
            noaa: Some(1.0),
            sg: Some(2.0),
            icon: Some(3.0),
            meteo: Some(4.0),
            dwd: Some(5.0),
        };
        assert_eq!(value.value(), Some(2.0));
    }

    #[test]
    fn falls_through_in_priority_order() {
        let value = SourceValue { meteo: Some(4.0), dwd: Some(5.0), ..Default::default() };
        assert_eq!(value.value(), Some(4.0));

        let value = SourceValue { icon: Some(3.0), noaa: Some(1.0), ..Default::default() };
        assert_eq!(value.value(), Some(1.0));

        let value = SourceValue { dwd: Some(5.0), ..Default::default() };
        assert_eq!(value.value(), Some(5.0));
    }

    #[test]
    fn zero_reading_is_still_a_reading() {
        let value = SourceValue { sg: Some(0.0), noaa: Some(9.0), ..Default::default() };
        assert_eq!(value.value(), Some(0.0));
    }

    #[test]
    fn all_absent_resolves_to_none() {
        assert_eq!(SourceValue::default().value(), None);
        assert_eq!(resolve(None), None);
    }

    #[test]
    fn readings_follow_priority_order() {
        let order: Vec<Source> = SourceValue::default().readings().map(|(s, _)| s).collect();
        assert_eq!(order, Source::all());
    }
}
