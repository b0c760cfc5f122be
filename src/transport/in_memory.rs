#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::Message;
use crate::transport::Transport;

/// One end of an in-process channel. Messages sent on one end are received,
/// in order, on the other.
pub struct InMemoryTransport {
    inbox: Arc<Mutex<VecDeque<Message>>>,
    outbox: Arc<Mutex<VecDeque<Message>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let a = Arc::new(Mutex::new(VecDeque::new()));
        let b = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                inbox: a.clone(),
                outbox: b.clone(),
            },
            Self {
                inbox: b,
                outbox: a,
            },
        )
    }

    fn peer_gone(&self) -> bool {
        Arc::strong_count(&self.outbox) == 1
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        if self.peer_gone() {
            return Err(anyhow::anyhow!("Channel closed"));
        }
        self.outbox
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?
            .push_back(msg);
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        loop {
            // Read the peer count first so a final send-then-drop is still delivered.
            let closed = Arc::strong_count(&self.inbox) == 1;
            let next = self
                .inbox
                .lock()
                .map_err(|_| anyhow::anyhow!("Channel poisoned"))?
                .pop_front();
            if let Some(msg) = next {
                return Ok(msg);
            }
            if closed {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}
