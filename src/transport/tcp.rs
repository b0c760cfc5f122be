#![cfg(feature = "std")]

//! Length-prefixed `bincode` frames over TCP.
//!
//! Each frame is a 4-byte big-endian payload length followed by the payload.

use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for a single send or receive (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest accepted payload. Step requests are tiny; anything near this is
/// garbage.
pub const MAX_FRAME_SIZE: u32 = 64 * 1024;

pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_frame_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, DEFAULT_TIMEOUT, MAX_FRAME_SIZE)
    }

    pub fn with_config(stream: TcpStream, timeout_duration: Duration, max_frame_size: u32) -> Self {
        Self {
            stream,
            timeout_duration,
            max_frame_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe => {
            anyhow::anyhow!("Connection closed by peer")
        }
        ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

/// Serialize `msg` into a complete frame, length prefix included.
pub fn encode_frame(msg: &Message, max_frame_size: u32) -> anyhow::Result<Vec<u8>> {
    let payload =
        bincode::serialize(msg).map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
    if payload.len() > max_frame_size as usize {
        return Err(anyhow::anyhow!(
            "Frame too large: {} bytes (max: {})",
            payload.len(),
            max_frame_size
        ));
    }
    let mut frame = Vec::with_capacity(4 + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let frame = encode_frame(&msg, self.max_frame_size)?;
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let write = async move {
            stream.write_all(&frame).await.map_err(io_error)?;
            stream.flush().await.map_err(io_error)
        };
        timeout(limit, write)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", limit))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let max = self.max_frame_size;
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let read = async move {
            let mut len_buf = [0u8; 4];
            stream.read_exact(&mut len_buf).await.map_err(io_error)?;
            let len = u32::from_be_bytes(len_buf);
            if len == 0 {
                return Err(anyhow::anyhow!("Invalid frame length: 0"));
            }
            if len > max {
                return Err(anyhow::anyhow!("Frame too large: {} bytes (max: {})", len, max));
            }
            let mut payload = vec![0u8; len as usize];
            stream.read_exact(&mut payload).await.map_err(io_error)?;
            bincode::deserialize::<Message>(&payload)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
        };
        timeout(limit, read)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", limit))?
    }
}
