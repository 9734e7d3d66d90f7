//! Routine builder commands.

use clap::Subcommand;

use beyondtime_core::builder::slot_labels;
use beyondtime_core::session::Action;
use beyondtime_core::task::routine_catalog;
use beyondtime_core::{Event, Session, TimeSlot};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum BuilderAction {
    /// List the sixteen hourly slots
    Slots,
    /// List tasks available for dragging
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a day from placement steps, applied in order
    Plan {
        /// Steps: `SLOT=TASK` drops a task (e.g. 09:00=t2), `SLOT=` clears a slot
        steps: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

enum Step {
    Place(TimeSlot, String),
    Clear(TimeSlot),
}

fn parse_step(raw: &str) -> Result<Step, Box<dyn std::error::Error>> {
    let (slot, task) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid step '{raw}': expected SLOT=TASK or SLOT="))?;
    let slot: TimeSlot = slot.trim().parse()?;
    let task = task.trim();
    Ok(if task.is_empty() {
        Step::Clear(slot)
    } else {
        Step::Place(slot, task.to_string())
    })
}

pub fn run(action: BuilderAction) -> CmdResult {
    match action {
        BuilderAction::Slots => {
            for label in slot_labels() {
                println!("{label}");
            }
        }
        BuilderAction::Catalog { json } => {
            let catalog = routine_catalog();
            if json {
                return print_json(&catalog);
            }
            for task in catalog {
                println!(
                    "{:<4} {:<20} {:>4} min  {}",
                    task.id, task.name, task.duration_minutes, task.energy
                );
            }
        }
        BuilderAction::Plan { steps, json } => {
            let steps = steps
                .iter()
                .map(|s| parse_step(s))
                .collect::<Result<Vec<_>, _>>()?;

            let mut session = Session::default();
            let mut events: Vec<Event> = Vec::new();
            for step in steps {
                match step {
                    Step::Place(slot, task_id) => {
                        events.extend(session.drag_and_drop(&task_id, slot)?);
                    }
                    Step::Clear(slot) => {
                        events.extend(session.apply(Action::Remove { slot })?);
                    }
                }
            }

            let view = session.schedule_view();
            if json {
                return print_json(&serde_json::json!({
                    "events": events,
                    "schedule": view,
                }));
            }
            for row in &view {
                match (&row.task, row.placeholder()) {
                    (Some(task), _) => println!("{}  {}", row.slot, task),
                    (None, Some(text)) => println!("{}  {}", row.slot, text),
                    (None, None) => println!("{}", row.slot),
                }
            }
            println!(
                "\n{} of {} slots filled, {} min planned",
                session.schedule().occupied_count(),
                view.len(),
                session.schedule().planned_minutes()
            );
        }
    }
    Ok(())
}
