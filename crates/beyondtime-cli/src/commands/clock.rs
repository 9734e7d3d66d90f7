use std::time::Duration;

use clap::Subcommand;

use beyondtime_core::{spawn_clock, RefreshSchedule, RefreshTarget};

use super::CmdResult;

#[derive(Subcommand)]
pub enum ClockAction {
    /// Tick the live clock and print which displays need a redraw
    Watch {
        /// Stop after this many ticks (default: run until Ctrl-C)
        #[arg(long)]
        ticks: Option<u64>,
        /// Tick period in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
    },
}

pub fn run(action: ClockAction) -> CmdResult {
    match action {
        ClockAction::Watch { ticks, interval_ms } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .enable_io()
                .build()?;
            runtime.block_on(watch(ticks, Duration::from_millis(interval_ms)));
        }
    }
    Ok(())
}

async fn watch(ticks: Option<u64>, period: Duration) {
    let mut clock = spawn_clock(period);
    let mut schedule = RefreshSchedule::new();
    let mut seen = 0u64;
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            tick = clock.next() => {
                let Some(now) = tick else { break };
                let due = schedule.due(now);
                if !due.is_empty() {
                    let names: Vec<&str> = due
                        .iter()
                        .map(|t| match t {
                            RefreshTarget::Ring => "ring",
                            RefreshTarget::Dashboard => "dashboard",
                        })
                        .collect();
                    println!("{}  {}", now.format("%H:%M:%S"), names.join(","));
                }
                seen += 1;
                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
            _ = &mut interrupt => {
                tracing::info!("interrupted");
                break;
            }
        }
    }
    clock.stop();
}
