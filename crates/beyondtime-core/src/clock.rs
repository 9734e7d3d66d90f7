//! Wall-clock refresh for the live displays.
//!
//! The ring's time hand redraws every second and the dashboard greeting every
//! minute. [`RefreshSchedule`] is the pure part: the caller feeds it the
//! current time and it answers which displays are stale. [`spawn_clock`]
//! drives it from a tokio interval until the returned handle is stopped or
//! dropped.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshTarget {
    /// Time ring hand and centre readout
    Ring,
    /// Greeting, date line and live time
    Dashboard,
}

impl RefreshTarget {
    pub const ALL: [RefreshTarget; 2] = [RefreshTarget::Ring, RefreshTarget::Dashboard];

    pub fn period(self) -> Duration {
        match self {
            RefreshTarget::Ring => Duration::seconds(1),
            RefreshTarget::Dashboard => Duration::seconds(60),
        }
    }

    fn slot(self) -> usize {
        match self {
            RefreshTarget::Ring => 0,
            RefreshTarget::Dashboard => 1,
        }
    }
}

/// Tracks when each display last refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSchedule {
    last: [Option<DateTime<Utc>>; 2],
}

impl RefreshSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays that need a redraw at `now`, marking them refreshed.
    ///
    /// Everything is due on the first call. A clock that jumps backwards
    /// also counts as due.
    pub fn due(&mut self, now: DateTime<Utc>) -> Vec<RefreshTarget> {
        let mut due = Vec::new();
        for target in RefreshTarget::ALL {
            let stale = match self.last[target.slot()] {
                None => true,
                Some(last) => now < last || now - last >= target.period(),
            };
            if stale {
                self.last[target.slot()] = Some(now);
                due.push(target);
            }
        }
        if !due.is_empty() {
            trace!(?due, %now, "refresh due");
        }
        due
    }

    pub fn last_refresh(&self, target: RefreshTarget) -> Option<DateTime<Utc>> {
        self.last[target.slot()]
    }
}

/// Running clock task. Stops on [`stop`](Self::stop) or drop.
#[derive(Debug)]
pub struct ClockHandle {
    rx: mpsc::Receiver<DateTime<Utc>>,
    task: JoinHandle<()>,
}

impl ClockHandle {
    /// Next tick, or `None` once the clock has stopped and drained.
    pub async fn next(&mut self) -> Option<DateTime<Utc>> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        if !self.task.is_finished() {
            debug!("clock stopped");
        }
        self.task.abort();
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start ticking every `period` on the current tokio runtime.
///
/// The first tick fires immediately. Ticks that cannot be delivered on time
/// are skipped rather than bunched up. A zero period is raised to 1 ms.
pub fn spawn_clock(period: StdDuration) -> ClockHandle {
    let period = period.max(StdDuration::from_millis(1));
    let (tx, rx) = mpsc::channel(8);
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Utc::now()).await.is_err() {
                break;
            }
        }
    });
    debug!(?period, "clock started");
    ClockHandle { rx, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_800_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn first_call_refreshes_everything() {
        let mut schedule = RefreshSchedule::new();
        assert_eq!(schedule.due(t(0)), RefreshTarget::ALL.to_vec());
    }

    #[test]
    fn ring_every_second_dashboard_every_minute() {
        let mut schedule = RefreshSchedule::new();
        schedule.due(t(0));
        assert!(schedule.due(t(0)).is_empty());
        assert_eq!(schedule.due(t(1)), vec![RefreshTarget::Ring]);
        for s in 2..60 {
            assert_eq!(schedule.due(t(s)), vec![RefreshTarget::Ring]);
        }
        assert_eq!(schedule.due(t(60)), RefreshTarget::ALL.to_vec());
    }

    #[test]
    fn backwards_clock_forces_refresh() {
        let mut schedule = RefreshSchedule::new();
        schedule.due(t(100));
        assert_eq!(schedule.due(t(50)), RefreshTarget::ALL.to_vec());
        assert_eq!(schedule.last_refresh(RefreshTarget::Dashboard), Some(t(50)));
    }

    #[tokio::test]
    async fn clock_ticks_until_stopped() {
        let mut clock = spawn_clock(StdDuration::from_millis(5));
        let first = clock.next().await.unwrap();
        let second = clock.next().await.unwrap();
        assert!(second >= first);

        clock.stop();
        let drained = tokio::time::timeout(StdDuration::from_secs(2), async {
            while clock.next().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok(), "clock kept ticking after stop");
    }

    #[tokio::test]
    async fn dropping_the_handle_ends_the_task() {
        let mut clock = spawn_clock(StdDuration::from_millis(5));
        clock.next().await.unwrap();
        let task = clock.task.abort_handle();
        assert!(!task.is_finished());

        drop(clock);
        let ended = tokio::time::timeout(StdDuration::from_secs(2), async {
            while !task.is_finished() {
                tokio::time::sleep(StdDuration::from_millis(1)).await;
            }
        })
        .await;
        assert!(ended.is_ok(), "clock task outlived its handle");
    }
}
