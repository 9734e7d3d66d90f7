use clap::Args;

use beyondtime_core::{Config, DashboardView};

use super::{parse_datetime, print_json, CmdResult};

#[derive(Args)]
pub struct DashboardArgs {
    /// Moment to render, `YYYY-MM-DD HH:MM` or `HH:MM` (default: now)
    #[arg(long)]
    at: Option<String>,
    /// Name used in the greeting (default: from config)
    #[arg(long)]
    name: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: DashboardArgs) -> CmdResult {
    let config = Config::load_or_default();
    let now = parse_datetime(args.at.as_deref())?;
    let name = args.name.unwrap_or(config.ui.user_name);
    let view = DashboardView::at(now, &name);

    if args.json {
        return print_json(&view);
    }

    println!("{}", view.date_line.to_uppercase());
    println!("{}", view.greeting);
    println!("{}", view.message);
    println!("live  {}", view.clock);
    println!();
    for stat in &view.stats {
        let filled = usize::from(stat.progress) / 5;
        println!(
            "{:<16} {:>6}  [{}{}] {}%",
            stat.label,
            stat.value,
            "#".repeat(filled),
            ".".repeat(20 - filled),
            stat.progress
        );
    }
    Ok(())
}
