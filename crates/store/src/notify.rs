//! In-process change notification.
//!
//! Pages that mounted earlier in the session hold stale clones of the
//! collections they rendered. The store announces every successful mutation
//! on this bus so a live view can re-read instead of polling.
//!
//! - No IO / no async
//! - Best-effort fan-out
//! - Subscribers that dropped their receiver are pruned on publish

use std::sync::{Mutex, mpsc};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which of the seven collections changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Fruit,
    Supplies,
    Customers,
    Suppliers,
    SalesOrders,
    PurchaseOrders,
    Movements,
}

/// What kind of mutation happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
    /// Wholesale replacement (snapshot import).
    Replaced,
}

/// One change announcement. Carries no record payload; consumers re-read
/// the collection they care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    pub collection: CollectionKind,
    pub kind: ChangeKind,
}

/// A subscription to store changes.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<StoreChange>,
}

impl Subscription {
    /// Block until the next change is available.
    pub fn recv(&self) -> Result<StoreChange, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a change without blocking.
    pub fn try_recv(&self) -> Result<StoreChange, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a change.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<StoreChange, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued.
    pub fn drain(&self) -> Vec<StoreChange> {
        let mut out = Vec::new();
        while let Ok(change) = self.try_recv() {
            out.push(change);
        }
        out
    }
}

/// Broadcast bus for [`StoreChange`] announcements.
#[derive(Debug, Default)]
pub struct ChangeBus {
    subscribers: Mutex<Vec<mpsc::Sender<StoreChange>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fan the change out to every live subscriber, dropping dead ones.
    pub fn publish(&self, change: StoreChange) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.retain(|tx| tx.send(change).is_ok());
        }
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned the subscription is still returned; it
        // just never receives anything.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription { receiver: rx }
    }

    /// Number of currently-registered subscribers (dead ones included until
    /// the next publish).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}
