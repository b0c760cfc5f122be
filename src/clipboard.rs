#![cfg(feature = "std")]

//! Destinations for a computed coordinate list.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;

/// Something that can receive the joined result, like a system clipboard.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Prints each result on its own line of stdout.
pub struct StdoutSink;

impl ClipboardSink for StdoutSink {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

/// Sets the terminal's clipboard through the OSC 52 escape sequence.
pub struct Osc52Sink<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Sink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// The OSC 52 sequence that stores `text` in the clipboard selection.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write> ClipboardSink for Osc52Sink<W> {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        log::debug!("copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}

/// Keeps every copied string; the last one is the current clipboard content.
#[derive(Debug, Default)]
pub struct MemorySink {
    history: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl ClipboardSink for MemorySink {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        self.history.push(text.to_string());
        Ok(())
    }
}

impl<S: ClipboardSink + ?Sized> ClipboardSink for Box<S> {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        (**self).copy(text)
    }
}
