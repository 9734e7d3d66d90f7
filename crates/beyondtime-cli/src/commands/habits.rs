use clap::Subcommand;

use beyondtime_core::HabitTracker;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum HabitsAction {
    /// Show today's habits
    List {
        /// Toggle these habit ids before listing (repeatable)
        #[arg(long)]
        toggle: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HabitsAction) -> CmdResult {
    match action {
        HabitsAction::List { toggle, json } => {
            let mut tracker = HabitTracker::default();
            for id in &toggle {
                tracker.toggle(id)?;
            }

            if json {
                return print_json(&tracker);
            }
            for habit in tracker.habits() {
                println!(
                    "[{}] {:<2} {:<16} {:>3} day streak  {:<16} trail {:>3}%",
                    if habit.completed { "x" } else { " " },
                    habit.id,
                    habit.name,
                    habit.streak,
                    habit.status_text(),
                    habit.trail_percent()
                );
            }
            println!("\n{} habits completed today", tracker.summary());
            if tracker.all_completed() {
                println!("All done. Enjoy the rest of your day.");
            }
        }
    }
    Ok(())
}
