pub mod builder;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod habits;
pub mod hero;
pub mod insights;
pub mod particles;
pub mod ring;
pub mod session;
pub mod theme;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse `HH:MM`, defaulting to the local wall clock.
pub fn parse_time(at: Option<&str>) -> Result<NaiveTime, Box<dyn std::error::Error>> {
    match at {
        Some(s) => Ok(NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|e| format!("invalid time '{s}' (expected HH:MM): {e}"))?),
        None => Ok(Local::now().time()),
    }
}

/// Parse `YYYY-MM-DD HH:MM` or `HH:MM` (today), defaulting to now.
pub fn parse_datetime(at: Option<&str>) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    let Some(s) = at else {
        return Ok(Local::now().naive_local());
    };
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| format!("invalid time '{s}' (expected 'YYYY-MM-DD HH:MM' or HH:MM)"))?;
    let today: NaiveDate = Local::now().date_naive();
    Ok(today.and_time(time))
}
