//! Display projection of a [`WeatherRecord`].

use chrono::{DateTime, Local, NaiveDateTime};
use std::fmt;

use crate::{
    WeatherRecord,
    advice::{UvCategory, advisories},
};

const PROVIDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Everything the result region shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub title: String,
    pub description: String,
    pub icon_url: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub cloud_cover: String,
    pub wind_speed: String,
    pub wind_dir: String,
    pub pressure: String,
    pub uv_index: String,
    pub uv_category: UvCategory,
    pub last_updated: String,
    pub advice: Vec<&'static str>,
}

impl WeatherCard {
    pub fn new(record: &WeatherRecord) -> Self {
        let uv_category = UvCategory::from_index(record.uv);

        Self {
            title: format!("{}, {}", record.name, record.country),
            description: record.description.clone(),
            icon_url: record.icon_url.clone(),
            temperature: format!("{}°C", round_for_display(record.temp_c)),
            feels_like: format!("{}°C", round_for_display(record.feels_like_c)),
            humidity: format!("{}%", record.humidity),
            cloud_cover: format!("{}%", record.cloud),
            wind_speed: format!("{} km/h", record.wind_kph),
            wind_dir: record.wind_dir.clone(),
            pressure: format!("{} mb", record.pressure_mb),
            uv_index: format!("{} ({uv_category})", record.uv),
            uv_category,
            last_updated: local_time_of_day(&record.last_updated),
            advice: advisories(record),
        }
    }
}

impl From<&WeatherRecord> for WeatherCard {
    fn from(record: &WeatherRecord) -> Self {
        Self::new(record)
    }
}

impl fmt::Display for WeatherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "{}", self.icon_url)?;
        writeln!(f)?;
        writeln!(f, "  {:<14}{}", "Temperature", self.temperature)?;
        writeln!(f, "  {:<14}{}", "Feels like", self.feels_like)?;
        writeln!(f, "  {:<14}{}", "Humidity", self.humidity)?;
        writeln!(f, "  {:<14}{}", "Cloud Cover", self.cloud_cover)?;
        writeln!(f)?;
        writeln!(f, "Additional Information")?;
        let wind_label = format!("Wind Speed ({})", self.wind_dir);
        writeln!(f, "  {:<20}{}", wind_label, self.wind_speed)?;
        writeln!(f, "  {:<20}{}", "Pressure", self.pressure)?;
        writeln!(f, "  {:<20}{}", "UV Index", self.uv_index)?;
        writeln!(f, "  {:<20}{}", "Last Updated", self.last_updated)?;
        writeln!(f)?;
        writeln!(f, "Weather Advice")?;
        for line in &self.advice {
            writeln!(f, "  • {line}")?;
        }
        Ok(())
    }
}

/// Nearest integer, halves toward positive infinity (-2.5 shows as -2).
fn round_for_display(value: f64) -> i64 {
    let rounded = value.round();
    // `round` sends negative halves away from zero.
    let rounded = if value - rounded == 0.5 { rounded + 1.0 } else { rounded };
    rounded as i64
}

/// Render a provider timestamp as a time of day, e.g. `2:30:00 PM`.
/// Falls back to the raw text when it cannot be parsed.
fn local_time_of_day(raw: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(raw, PROVIDER_TIMESTAMP_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Local).naive_local())
    });

    match parsed {
        Some(dt) => dt.format("%-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::{COLD_ADVICE, HUMID_ADVICE};

    fn london() -> WeatherRecord {
        WeatherRecord {
            name: "London".into(),
            country: "United Kingdom".into(),
            temp_c: 9.5,
            feels_like_c: 7.4,
            humidity: 82,
            condition: "Partly cloudy".into(),
            description: "Partly cloudy".into(),
            icon_url: "https://cdn.weatherapi.com/weather/64x64/day/116.png".into(),
            wind_kph: 19.1,
            wind_dir: "WSW".into(),
            pressure_mb: 1012.0,
            uv: 3.0,
            cloud: 50,
            last_updated: "2024-01-15 14:30".into(),
        }
    }

    #[test]
    fn card_projects_record() {
        let record = london();
        let card = WeatherCard::new(&record);

        assert_eq!(card.title, "London, United Kingdom");
        assert_eq!(card.description, "Partly cloudy");
        assert_eq!(card.temperature, "10°C");
        assert_eq!(card.feels_like, "7°C");
        assert_eq!(card.humidity, "82%");
        assert_eq!(card.cloud_cover, "50%");
        assert_eq!(card.wind_speed, "19.1 km/h");
        assert_eq!(card.pressure, "1012 mb");
        assert_eq!(card.uv_index, "3 (Moderate)");
        assert_eq!(card.uv_category, UvCategory::Moderate);
        assert_eq!(card.last_updated, "2:30:00 PM");
        assert_eq!(card.advice, vec![COLD_ADVICE, HUMID_ADVICE]);

        // Rounding is display-only.
        assert_eq!(record.temp_c, 9.5);
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_for_display(11.4), 11);
        assert_eq!(round_for_display(11.5), 12);
        assert_eq!(round_for_display(-2.5), -2);
        assert_eq!(round_for_display(-2.6), -3);
        assert_eq!(round_for_display(2.5), 3);
        assert_eq!(round_for_display(-0.5), 0);
    }

    #[test]
    fn rounding_is_exact_near_float_limits() {
        assert_eq!(round_for_display(0.49999999999999994), 0);
        assert_eq!(round_for_display(-0.49999999999999994), 0);
        assert_eq!(round_for_display(4503599627370497.0), 4503599627370497);
    }

    #[test]
    fn timestamps() {
        assert_eq!(local_time_of_day("2024-01-15 09:05"), "9:05:00 AM");
        assert_eq!(local_time_of_day("2024-01-15 00:00"), "12:00:00 AM");
        assert_eq!(local_time_of_day("yesterday-ish"), "yesterday-ish");
    }

    #[test]
    fn display_contains_sections() {
        let text = WeatherCard::new(&london()).to_string();

        assert!(text.starts_with("London, United Kingdom\n"));
        assert!(text.contains("Wind Speed (WSW)"));
        assert!(text.contains("Additional Information"));
        assert!(text.contains("  • High humidity - stay cool and comfortable"));
    }
}
