//! Live wall clock for the session header.

use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::{sync::watch, task::JoinHandle, time::MissedTickBehavior};

/// Default refresh period of the header clock.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic producer of local timestamps. Stops when dropped.
#[derive(Debug)]
pub struct Clock {
    rx: watch::Receiver<DateTime<Local>>,
    task: JoinHandle<()>,
}

impl Clock {
    /// Spawn the producer on the current tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = watch::channel(Local::now());

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if tx.send(Local::now()).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Latest published reading.
    pub fn now(&self) -> DateTime<Local> {
        *self.rx.borrow()
    }

    /// Wait for the next reading. `None` once the producer has stopped.
    pub async fn tick(&mut self) -> Option<DateTime<Local>> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    pub fn stop(&mut self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Long en-US date, e.g. `Monday, January 15, 2024`.
pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

/// Two-digit 12-hour time, e.g. `02:30:05 PM`.
pub fn format_time(now: &DateTime<Local>) -> String {
    now.format("%I:%M:%S %p").to_string()
}
