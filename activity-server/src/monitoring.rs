use chrono::Local;
use colored::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    SignedUp {
        activity: String,
        email: String,
        participants: usize,
        max_participants: usize,
    },
    Unregistered {
        activity: String,
        email: String,
        participants: usize,
    },
    Rejected {
        reason: String,
    },
    DirectoryReset,
}

/// Producer side of the console feed.
///
/// Events are dropped when the display task falls behind; requests never wait
/// on the channel.
#[derive(Clone)]
pub struct MonitoringLayer {
    tx: mpsc::Sender<LogMessage>,
}

impl MonitoringLayer {
    pub fn new(tx: mpsc::Sender<LogMessage>) -> Self {
        Self { tx }
    }

    pub fn log_signed_up(
        &self,
        activity: &str,
        email: &str,
        participants: usize,
        max_participants: usize,
    ) {
        self.emit(LogMessage::SignedUp {
            activity: activity.to_string(),
            email: email.to_string(),
            participants,
            max_participants,
        });
    }

    pub fn log_unregistered(&self, activity: &str, email: &str, participants: usize) {
        self.emit(LogMessage::Unregistered {
            activity: activity.to_string(),
            email: email.to_string(),
            participants,
        });
    }

    pub fn log_rejected(&self, reason: String) {
        self.emit(LogMessage::Rejected { reason });
    }

    pub fn log_reset(&self) {
        self.emit(LogMessage::DirectoryReset);
    }

    fn emit(&self, message: LogMessage) {
        if let Err(mpsc::error::TrySendError::Full(_)) = self.tx.try_send(message) {
            debug!("Monitoring channel full, dropping event");
        }
    }
}

pub async fn spawn_monitoring_display(mut rx: mpsc::Receiver<LogMessage>) {
    tokio::spawn(async move {
        info!("");
        info!("{}", "📋 Registration Log:".bold());
        info!("{}", "─".repeat(80).dimmed());

        while let Some(log) = rx.recv().await {
            let timestamp = Local::now().format("%H:%M:%S%.3f");

            match log {
                LogMessage::SignedUp {
                    activity,
                    email,
                    participants,
                    max_participants,
                } => {
                    info!(
                        "{} {} {} joined {} ({}/{})",
                        timestamp.to_string().dimmed(),
                        "→".green().bold(),
                        email.yellow(),
                        activity.white().bold(),
                        participants,
                        max_participants
                    );
                }
                LogMessage::Unregistered {
                    activity,
                    email,
                    participants,
                } => {
                    info!(
                        "{} {} {} left {} ({} remaining)",
                        timestamp.to_string().dimmed(),
                        "←".red().bold(),
                        email.yellow(),
                        activity.white().bold(),
                        participants
                    );
                }
                LogMessage::Rejected { reason } => {
                    info!(
                        "{} ⚠️ Rejected: {}",
                        timestamp.to_string().dimmed(),
                        reason.red()
                    );
                }
                LogMessage::DirectoryReset => {
                    info!(
                        "{} 🔄 {}",
                        timestamp.to_string().dimmed(),
                        "Activities reset to seed data".cyan()
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_layer_forwards_events() {
        let (tx, mut rx) = mpsc::channel(8);
        let layer = MonitoringLayer::new(tx);

        layer.log_signed_up("Chess Club", "a@mergington.edu", 3, 12);
        layer.log_reset();

        assert_eq!(
            rx.recv().await,
            Some(LogMessage::SignedUp {
                activity: "Chess Club".to_string(),
                email: "a@mergington.edu".to_string(),
                participants: 3,
                max_participants: 12,
            })
        );
        assert_eq!(rx.recv().await, Some(LogMessage::DirectoryReset));
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic once the display task is gone
        MonitoringLayer::new(tx).log_rejected("Activity not found".to_string());
    }

    #[tokio::test]
    async fn test_full_channel_drops_newest_events() {
        let (tx, mut rx) = mpsc::channel(1);
        let layer = MonitoringLayer::new(tx);

        layer.log_reset();
        layer.log_unregistered("Chess Club", "michael@mergington.edu", 1);
        layer.log_rejected("Activity is full".to_string());

        assert_eq!(rx.recv().await, Some(LogMessage::DirectoryReset));
        assert!(rx.try_recv().is_err());
    }
}
