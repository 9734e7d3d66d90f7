use clap::Subcommand;

use beyondtime_core::{Config, Theme};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the configured starting theme and its palette
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the theme a toggle would switch to (nothing is saved)
    Toggle {
        /// Theme to toggle from (default: from config)
        #[arg(long)]
        from: Option<Theme>,
    },
}

pub fn run(action: ThemeAction) -> CmdResult {
    let config = Config::load_or_default();
    match action {
        ThemeAction::Show { json } => {
            let theme = config.theme();
            if json {
                return print_json(&serde_json::json!({
                    "theme": theme,
                    "palette": theme.palette(),
                }));
            }
            println!("{theme}");
            println!("toggle: {}", theme.toggle_label());
        }
        ThemeAction::Toggle { from } => {
            let current = from.unwrap_or_else(|| config.theme());
            println!("{}", current.toggled());
        }
    }
    Ok(())
}
