use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted by the coupon service. Delivery is fire-and-forget; a
/// closed channel is logged and never fails the originating operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    CouponApplied {
        code: String,
        discount_amount: i64,
        timestamp: DateTime<Utc>,
    },
    CouponRedeemed {
        code: String,
        used_count: u32,
        timestamp: DateTime<Utc>,
    },
}

#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Creates an event channel with the given buffer size.
pub fn channel(buffer: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(buffer);
    (EventSender::new(tx), rx)
}
