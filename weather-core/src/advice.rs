//! Derived fields shown alongside a [`WeatherRecord`].

use crate::WeatherRecord;

pub const HOT_ADVICE: &str = "Stay hydrated and avoid prolonged sun exposure";
pub const COLD_ADVICE: &str = "Dress warmly and protect against cold";
pub const HUMID_ADVICE: &str = "High humidity - stay cool and comfortable";
pub const UV_ADVICE: &str = "High UV - use sun protection";
pub const WIND_ADVICE: &str = "Strong winds - take precautions outdoors";
pub const COMFORTABLE_ADVICE: &str = "Weather conditions are comfortable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvCategory {
    /// Each bucket includes its upper bound: 2 is Low, 5 is Moderate.
    pub fn from_index(uv: f64) -> Self {
        if uv <= 2.0 {
            Self::Low
        } else if uv <= 5.0 {
            Self::Moderate
        } else if uv <= 7.0 {
            Self::High
        } else if uv <= 10.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for UvCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommendations for the conditions in `record`, in display order. Never empty.
pub fn advisories(record: &WeatherRecord) -> Vec<&'static str> {
    let mut advice = Vec::new();

    if record.temp_c > 30.0 {
        advice.push(HOT_ADVICE);
    } else if record.temp_c < 10.0 {
        advice.push(COLD_ADVICE);
    }

    if record.humidity > 70 {
        advice.push(HUMID_ADVICE);
    }

    if record.uv > 5.0 {
        advice.push(UV_ADVICE);
    }

    if record.wind_kph > 20.0 {
        advice.push(WIND_ADVICE);
    }

    if advice.is_empty() {
        advice.push(COMFORTABLE_ADVICE);
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(temp_c: f64, humidity: u8, uv: f64, wind_kph: f64) -> WeatherRecord {
        WeatherRecord {
            name: "Madrid".into(),
            country: "Spain".into(),
            temp_c,
            feels_like_c: temp_c,
            humidity,
            condition: "Sunny".into(),
            description: "Sunny".into(),
            icon_url: "https://cdn.weatherapi.com/weather/64x64/day/113.png".into(),
            wind_kph,
            wind_dir: "E".into(),
            pressure_mb: 1016.0,
            uv,
            cloud: 0,
            last_updated: "2024-07-01 15:00".into(),
        }
    }

    #[test]
    fn uv_category_boundaries() {
        let cases = [
            (0.0, UvCategory::Low),
            (2.0, UvCategory::Low),
            (2.1, UvCategory::Moderate),
            (5.0, UvCategory::Moderate),
            (5.1, UvCategory::High),
            (7.0, UvCategory::High),
            (7.1, UvCategory::VeryHigh),
            (10.0, UvCategory::VeryHigh),
            (10.1, UvCategory::Extreme),
        ];

        for (uv, expected) in cases {
            assert_eq!(UvCategory::from_index(uv), expected, "uv = {uv}");
        }
    }

    #[test]
    fn uv_labels() {
        assert_eq!(UvCategory::VeryHigh.to_string(), "Very High");
        assert_eq!(UvCategory::Extreme.label(), "Extreme");
    }

    #[test]
    fn hot_humid_sunny_windy_day_collects_all_in_order() {
        let advice = advisories(&conditions(35.0, 80, 8.0, 25.0));
        assert_eq!(advice, vec![HOT_ADVICE, HUMID_ADVICE, UV_ADVICE, WIND_ADVICE]);
    }

    #[test]
    fn comfortable_day_has_single_message() {
        let advice = advisories(&conditions(20.0, 40, 2.0, 5.0));
        assert_eq!(advice, vec![COMFORTABLE_ADVICE]);
    }

    #[test]
    fn cold_day_gets_cold_advice_only() {
        let advice = advisories(&conditions(-3.0, 60, 1.0, 10.0));
        assert_eq!(advice, vec![COLD_ADVICE]);
    }

    #[test]
    fn thresholds_are_strict() {
        let advice = advisories(&conditions(30.0, 70, 5.0, 20.0));
        assert_eq!(advice, vec![COMFORTABLE_ADVICE]);

        let advice = advisories(&conditions(10.0, 70, 5.0, 20.0));
        assert_eq!(advice, vec![COMFORTABLE_ADVICE]);
    }

    #[test]
    fn never_both_temperature_messages() {
        for temp in [-40.0, 0.0, 9.9, 10.0, 25.0, 30.0, 30.1, 45.0] {
            let advice = advisories(&conditions(temp, 50, 1.0, 1.0));
            let both = advice.contains(&HOT_ADVICE) && advice.contains(&COLD_ADVICE);
            assert!(!both, "temp = {temp}");
            assert!(!advice.is_empty());
        }
    }
}
