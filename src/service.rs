#![cfg(feature = "std")]

//! Request/response service around the stepper, and the matching client.

use anyhow::anyhow;
use tokio::net::TcpListener;

use crate::coord::Coordinate;
use crate::protocol::{Message, RemoteStepError, PROTOCOL_VERSION};
use crate::stepper::StepRequest;
use crate::transport::tcp::TcpTransport;
use crate::transport::Transport;

/// Default address for `serve` and `query`.
pub const DEFAULT_BIND: &str = "127.0.0.1:7415";

/// Answers `Step` requests arriving on one transport.
pub struct StepService<T: Transport> {
    transport: T,
    answered: usize,
}

impl<T: Transport> StepService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            answered: 0,
        }
    }

    /// Number of `Step` requests answered so far.
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Serve until the peer says `Bye` or goes away. Fails on a bad handshake.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::Hello {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
            }
            Message::Hello { version } => {
                self.transport
                    .send(Message::Hello {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
                return Err(anyhow!(
                    "Protocol version mismatch: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ));
            }
            _ => return Err(anyhow!("Expected Hello")),
        }

        loop {
            let msg = match self.transport.recv().await {
                Ok(msg) => msg,
                Err(e) => {
                    log::debug!("connection ended: {}", e);
                    break;
                }
            };
            let reply = match msg {
                Message::Step {
                    seq,
                    start,
                    direction,
                    steps,
                } => {
                    let result = StepRequest::from_fields(&start, &direction, &steps)
                        .and_then(|req| req.run());
                    self.answered += 1;
                    match result {
                        Ok(path) => Message::path(seq, path),
                        Err(e) => {
                            log::debug!("request {} rejected: {}", seq, e);
                            Message::failure(seq, &e)
                        }
                    }
                }
                Message::Bye => break,
                other => return Err(anyhow!("Unexpected message: {:?}", other)),
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}

/// Client side: performs the handshake on first use and numbers requests.
pub struct StepClient<T: Transport> {
    transport: T,
    next_seq: u64,
    handshaken: bool,
}

impl<T: Transport> StepClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_seq: 0,
            handshaken: false,
        }
    }

    async fn ensure_handshake(&mut self) -> anyhow::Result<()> {
        if self.handshaken {
            return Ok(());
        }
        self.transport
            .send(Message::Hello {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.handshaken = true;
                Ok(())
            }
            Message::Hello { version } => Err(anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            _ => Err(anyhow!("Expected Hello")),
        }
    }

    /// Ask the service for a sequence. A `Failure` reply becomes a
    /// [`RemoteStepError`].
    pub async fn step(
        &mut self,
        start: &str,
        direction: &str,
        steps: &str,
    ) -> anyhow::Result<Vec<Coordinate>> {
        self.ensure_handshake().await?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.transport
            .send(Message::Step {
                seq,
                start: start.to_string(),
                direction: direction.to_string(),
                steps: steps.to_string(),
            })
            .await?;
        match self.transport.recv().await? {
            Message::Path {
                seq: got,
                coordinates,
                ..
            } if got == seq => Ok(coordinates),
            Message::Failure {
                seq: got,
                kind,
                message,
            } if got == seq => Err(RemoteStepError { kind, message }.into()),
            Message::Path { seq: got, .. } | Message::Failure { seq: got, .. } => Err(anyhow!(
                "Sequence mismatch: expected {}, got {}",
                seq,
                got
            )),
            other => Err(anyhow!("Unexpected reply: {:?}", other)),
        }
    }

    /// Tell the service we are done.
    pub async fn close(mut self) -> anyhow::Result<()> {
        if self.handshaken {
            self.transport.send(Message::Bye).await?;
        }
        Ok(())
    }
}

/// Accept connections forever, one task per connection.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    log::info!("listening on {}", listener.local_addr()?);
    loop {
        let (stream, addr) = listener.accept().await?;
        log::info!("client connected from {}", addr);
        tokio::spawn(async move {
            let mut service = StepService::new(TcpTransport::new(stream));
            match service.run().await {
                Ok(()) => log::info!(
                    "client {} done after {} requests",
                    addr,
                    service.answered()
                ),
                Err(e) => log::warn!("client {} failed: {}", addr, e),
            }
        });
    }
}
