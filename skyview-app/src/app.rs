use anyhow::{Context, Result};
use chrono::Local;
use skyview_core::WeatherProvider;
use std::io::{self, Write};
use tokio::signal;
use tracing::info;

use crate::screen::Screen;

/// The one city this screen knows about.
pub(crate) const CITY: &str = "Astana";

/// Drive the screen through its lifetime: draw the loading view, run the
/// single fetch, then hold the final frame until interrupted.
///
/// The fetch races shutdown: an interrupt while the request is in flight
/// drops the request future, so no state update can happen after the screen
/// is gone. A failed fetch leaves the loading view up for the rest of the
/// session; nothing re-attempts it.
pub async fn run(provider: &dyn WeatherProvider) -> Result<()> {
    let mut screen = Screen::new();
    draw(&screen.frame(Local::now().date_naive()))?;

    tokio::select! {
        outcome = provider.current_weather(CITY) => {
            screen.apply_fetch(outcome);
            if screen.is_loaded() {
                draw(&screen.frame(Local::now().date_naive()))?;
            }
        }
        _ = signal::ctrl_c() => {
            info!("interrupted before the fetch settled");
            return Ok(());
        }
    }

    signal::ctrl_c().await.context("Failed to wait for interrupt")?;
    Ok(())
}

fn draw(frame: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(frame.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write frame to stdout")
}
