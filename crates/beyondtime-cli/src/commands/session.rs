//! Replay a recorded list of gestures against a fresh session.

use std::io::Read;
use std::path::PathBuf;

use clap::Subcommand;

use beyondtime_core::{Action, Config, Session};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Apply a JSON array of actions and print the resulting events and state
    Replay {
        /// JSON file with the actions (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

pub fn run(action: SessionAction) -> CmdResult {
    match action {
        SessionAction::Replay { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let actions: Vec<Action> = serde_json::from_str(&raw)?;

            let mut session = Session::new(Config::load_or_default().theme());
            let mut events = Vec::new();
            for action in actions {
                events.extend(session.apply(action)?);
            }

            print_json(&serde_json::json!({
                "events": events,
                "theme": session.theme(),
                "schedule": session.schedule_view(),
                "habits": session.habits().habits(),
            }))
        }
    }
}
