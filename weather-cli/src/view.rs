use chrono::{DateTime, Local};
use weather_core::{RequestStatus, WeatherCard, clock};

pub const TITLE: &str = "Weather Forecast";
pub const HINT: &str = "Enter a city name to get the current weather conditions";
pub const LOADING: &str = "Searching...";

/// Clock lines shown above the title and above every card.
pub fn clock_lines(now: &DateTime<Local>) -> String {
    format!("{}\n{}", clock::format_date(now), clock::format_time(now))
}

pub fn header(now: &DateTime<Local>) -> String {
    format!("{}\n\n{TITLE}\n{HINT}\n(:time shows the clock, :quit exits)", clock_lines(now))
}

/// Text for the status and result regions. `None` while idle.
pub fn status(status: &RequestStatus, now: &DateTime<Local>) -> Option<String> {
    match status {
        RequestStatus::Idle => None,
        RequestStatus::Loading => Some(LOADING.to_string()),
        RequestStatus::Failed(message) => Some(format!("! {message}")),
        RequestStatus::Success(record) => {
            Some(format!("{}\n\n{}", clock_lines(now), WeatherCard::new(record)))
        }
    }
}
