use chrono::NaiveDate;
use serde::Deserialize;

/// Reading applied when a numeric field is absent from the provider payload.
pub const FALLBACK_READING: f64 = 0.0;

/// Condition text applied when the payload carries no weather entries.
pub const FALLBACK_CONDITION: &str = "Unknown";

/// Current conditions as returned by the provider.
///
/// The provider enforces no invariants, so every field is optional and an
/// empty body parses successfully. Held raw for the app lifetime; the view
/// is projected from it per frame.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub name: Option<String>,
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
    pub wind: Option<WindReading>,
    pub rain: Option<RainVolume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionTag {
    pub main: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindReading {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RainVolume {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
}

/// One cell of the hourly strip at the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSlot {
    pub hour: &'static str,
    pub temp: i32,
    pub icon: &'static str,
}

/// The hourly strip is sample data, not derived from the fetched report.
pub const HOURLY_STRIP: [ForecastSlot; 4] = [
    ForecastSlot { hour: "15:00", temp: -5, icon: "cloud-outline" },
    ForecastSlot { hour: "16:00", temp: -6, icon: "cloudy-outline" },
    ForecastSlot { hour: "17:00", temp: -7, icon: "snow-outline" },
    ForecastSlot { hour: "18:00", temp: -8, icon: "snow-outline" },
];

/// Render-ready projection of a [`WeatherReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub temp: f64,
    pub description: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: u8,
    pub wind: f64,
    pub rain: f64,
    pub today: String,
    pub forecast: [ForecastSlot; 4],
}

impl WeatherView {
    /// Project a report onto the screen layout for the given render date.
    ///
    /// Pure function: absent numeric fields become [`FALLBACK_READING`], an
    /// absent condition becomes [`FALLBACK_CONDITION`], an absent city name
    /// becomes the empty string.
    pub fn project(report: &WeatherReport, today: NaiveDate) -> Self {
        let main = report.main.as_ref();

        Self {
            city: report.name.clone().unwrap_or_default(),
            temp: main.and_then(|m| m.temp).unwrap_or(FALLBACK_READING),
            description: report
                .weather
                .first()
                .and_then(|w| w.main.clone())
                .unwrap_or_else(|| FALLBACK_CONDITION.to_string()),
            temp_max: main.and_then(|m| m.temp_max).unwrap_or(FALLBACK_READING),
            temp_min: main.and_then(|m| m.temp_min).unwrap_or(FALLBACK_READING),
            humidity: main.and_then(|m| m.humidity).unwrap_or_default(),
            wind: report
                .wind
                .as_ref()
                .and_then(|w| w.speed)
                .unwrap_or(FALLBACK_READING),
            rain: report
                .rain
                .as_ref()
                .and_then(|r| r.one_hour)
                .unwrap_or(FALLBACK_READING),
            today: today_label(today),
            forecast: HOURLY_STRIP,
        }
    }
}

/// "Jan, 5" style label for the render date.
pub fn today_label(date: NaiveDate) -> String {
    date.format("%b, %-d").to_string()
}
