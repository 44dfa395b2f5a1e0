//! The weather screen: two render states and their text frames.
//!
//! Frames are pure functions returning `String`; the caller decides when to
//! write them out. The raw report is held in the loaded state and the view
//! is re-projected on every frame.

use chrono::NaiveDate;
use skyview_core::{FetchError, ForecastSlot, WeatherReport, WeatherView};
use tracing::error;

const FRAME_WIDTH: usize = 34;
const CELL_WIDTH: usize = 8;

/// Render states of the screen.
#[derive(Debug)]
pub enum ScreenState {
    /// Initial state; also terminal when the fetch fails.
    Loading,
    /// Fetched payload, held raw.
    Loaded(WeatherReport),
}

#[derive(Debug)]
pub struct Screen {
    state: ScreenState,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Loading,
        }
    }

    /// Fold the fetch outcome into the screen.
    ///
    /// A failure is logged and leaves the loading view in place; nothing
    /// re-attempts the fetch, so the loading view then stays up for the rest
    /// of the session.
    pub fn apply_fetch(&mut self, outcome: Result<WeatherReport, FetchError>) {
        match outcome {
            Ok(report) => self.state = ScreenState::Loaded(report),
            Err(err) => error!("weather fetch failed: {err}"),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ScreenState::Loaded(_))
    }

    /// Render the current state for the given render date.
    pub fn frame(&self, today: NaiveDate) -> String {
        match &self.state {
            ScreenState::Loading => loading_frame(),
            ScreenState::Loaded(report) => weather_frame(&WeatherView::project(report, today)),
        }
    }
}

fn loading_frame() -> String {
    let mut out = String::from("\n");
    push_centered(&mut out, "◌");
    push_centered(&mut out, "Loading weather...");
    out
}

fn weather_frame(view: &WeatherView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "📍 {city:<width$}🔔\n",
        city = view.city,
        width = FRAME_WIDTH - 5
    ));
    out.push('\n');

    push_centered(&mut out, &format!("{}º", view.temp));
    push_centered(&mut out, &view.description);
    push_centered(
        &mut out,
        &format!("Max: {}º  Min: {}º", view.temp_max, view.temp_min),
    );
    out.push('\n');

    out.push_str(&format!(
        "  💧 {}%    🌡 {}%    💨 {} km/h\n",
        view.rain, view.humidity, view.wind
    ));
    out.push('\n');

    out.push_str(&format!(
        "  Today{today:>width$}\n",
        today = view.today,
        width = FRAME_WIDTH - 7
    ));
    out.push_str(&strip_rows(&view.forecast));

    out
}

/// The hourly strip as three stacked rows: temperature, icon, hour.
fn strip_rows(strip: &[ForecastSlot]) -> String {
    let mut temps = String::new();
    let mut icons = String::new();
    let mut hours = String::new();

    for slot in strip {
        temps.push_str(&format!(
            "{cell:^width$}",
            cell = format!("{}ºC", slot.temp),
            width = CELL_WIDTH
        ));
        icons.push_str(&format!(
            "{cell:^width$}",
            cell = icon_glyph(slot.icon),
            width = CELL_WIDTH
        ));
        hours.push_str(&format!(
            "{cell:^width$}",
            cell = slot.hour,
            width = CELL_WIDTH
        ));
    }

    format!(
        "{}\n{}\n{}\n",
        temps.trim_end(),
        icons.trim_end(),
        hours.trim_end()
    )
}

fn icon_glyph(name: &str) -> &'static str {
    match name {
        "cloud-outline" => "☁",
        "cloudy-outline" => "🌥",
        "snow-outline" => "❄",
        _ => "·",
    }
}

fn push_centered(out: &mut String, text: &str) {
    let line = format!("{text:^width$}", width = FRAME_WIDTH);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: serde_json::Value) -> WeatherReport {
        serde_json::from_value(value).expect("report must deserialize")
    }

    fn render_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date")
    }

    fn parse_failure() -> FetchError {
        serde_json::from_str::<WeatherReport>("definitely not json")
            .expect_err("body must not parse")
            .into()
    }

    #[test]
    fn new_screen_shows_the_loading_view() {
        let screen = Screen::new();

        let frame = screen.frame(render_date());
        assert!(frame.contains("Loading weather..."));
        assert!(!screen.is_loaded());
    }

    #[test]
    fn failed_fetch_keeps_the_loading_view() {
        let mut screen = Screen::new();

        screen.apply_fetch(Err(parse_failure()));

        assert!(!screen.is_loaded());
        assert!(screen.frame(render_date()).contains("Loading weather..."));
    }

    #[test]
    fn loaded_frame_shows_the_raw_temperature() {
        let mut screen = Screen::new();
        screen.apply_fetch(Ok(report(json!({
            "name": "Astana",
            "main": { "temp": -5.2 },
            "weather": [{ "main": "Clouds" }]
        }))));

        let frame = screen.frame(render_date());
        assert!(frame.contains("Astana"));
        assert!(frame.contains("-5.2º"));
        assert!(frame.contains("Clouds"));
    }

    #[test]
    fn loaded_frame_shows_the_metric_row() {
        let mut screen = Screen::new();
        screen.apply_fetch(Ok(report(json!({
            "main": { "humidity": 98 },
            "wind": { "speed": 4.6 },
            "rain": { "1h": 0.3 }
        }))));

        let frame = screen.frame(render_date());
        assert!(frame.contains("0.3%"));
        assert!(frame.contains("98%"));
        assert!(frame.contains("4.6 km/h"));
    }

    #[test]
    fn loaded_frame_renders_the_fixed_strip() {
        let mut screen = Screen::new();
        screen.apply_fetch(Ok(report(json!({}))));

        let frame = screen.frame(render_date());
        for hour in ["15:00", "16:00", "17:00", "18:00"] {
            assert!(frame.contains(hour), "missing hour {hour}");
        }
        assert!(frame.contains("-5ºC"));
        assert!(frame.contains("-8ºC"));
    }

    #[test]
    fn loaded_frame_carries_the_date_label() {
        let mut screen = Screen::new();
        screen.apply_fetch(Ok(report(json!({}))));

        let frame = screen.frame(render_date());
        assert!(frame.contains("Today"));
        assert!(frame.contains("Jan, 5"));
    }

    #[test]
    fn missing_fields_render_as_fallbacks() {
        let mut screen = Screen::new();
        screen.apply_fetch(Ok(report(json!({}))));

        let frame = screen.frame(render_date());
        assert!(frame.contains("Unknown"));
        assert!(frame.contains("0º"));
        assert!(frame.contains("0 km/h"));
    }
}
