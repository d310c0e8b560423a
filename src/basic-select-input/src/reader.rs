//! Terminal event reader.
//!
//! `InputReader` owns raw mode and mouse capture for the lifetime of an
//! interactive session and hands out normalized [`Event`]s, inserting a
//! synthesized click after every release that completes one.

use crate::event::Event;
use crate::mouse::ClickTracker;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading terminal input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// `poll`/`read` was called before `init`.
    #[error("input reader not initialized")]
    NotInitialized,

    /// `init` was called twice.
    #[error("input reader already initialized")]
    AlreadyInitialized,
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct InputReaderConfig {
    /// Capture mouse events.
    pub enable_mouse: bool,
    /// Enter raw mode on `init` (hosts that already did so can skip it).
    pub enable_raw_mode: bool,
}

impl Default for InputReaderConfig {
    fn default() -> Self {
        Self {
            enable_mouse: true,
            enable_raw_mode: true,
        }
    }
}

impl InputReaderConfig {
    /// Keyboard only: no mouse capture.
    #[must_use]
    pub fn keyboard_only() -> Self {
        Self {
            enable_mouse: false,
            ..Self::default()
        }
    }

    /// Sets whether raw mode is managed by the reader.
    #[must_use]
    pub fn with_raw_mode(mut self, enable: bool) -> Self {
        self.enable_raw_mode = enable;
        self
    }
}

/// Reads crossterm events and normalizes them.
pub struct InputReader {
    config: InputReaderConfig,
    initialized: bool,
    was_raw_mode: bool,
    clicks: ClickTracker,
    pending: VecDeque<Event>,
}

impl InputReader {
    /// Creates an uninitialized reader.
    #[must_use]
    pub fn new(config: InputReaderConfig) -> Self {
        Self {
            config,
            initialized: false,
            was_raw_mode: false,
            clicks: ClickTracker::new(),
            pending: VecDeque::new(),
        }
    }

    /// Enables raw mode and mouse capture as configured.
    pub fn init(&mut self) -> InputResult<()> {
        if self.initialized {
            return Err(InputError::AlreadyInitialized);
        }

        if self.config.enable_raw_mode {
            self.was_raw_mode = is_raw_mode_enabled().unwrap_or(false);
            if !self.was_raw_mode {
                enable_raw_mode()?;
            }
        }
        if self.config.enable_mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }

        self.initialized = true;
        tracing::debug!(mouse = self.config.enable_mouse, "input reader initialized");
        Ok(())
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> InputResult<()> {
        if !self.initialized {
            return Ok(());
        }

        if self.config.enable_mouse {
            execute!(io::stdout(), DisableMouseCapture)?;
        }
        if self.config.enable_raw_mode && !self.was_raw_mode {
            disable_raw_mode()?;
        }

        self.initialized = false;
        self.clicks.reset();
        self.pending.clear();
        Ok(())
    }

    /// Returns true between `init` and `cleanup`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Waits up to `timeout` for the next event.
    pub fn poll(&mut self, timeout: Duration) -> InputResult<Option<Event>> {
        if !self.initialized {
            return Err(InputError::NotInitialized);
        }
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }
        if event::poll(timeout)? {
            Ok(Some(self.normalize(event::read()?)))
        } else {
            Ok(None)
        }
    }

    /// Blocks until the next event.
    pub fn read(&mut self) -> InputResult<Event> {
        if !self.initialized {
            return Err(InputError::NotInitialized);
        }
        if let Some(event) = self.pending.pop_front() {
            return Ok(event);
        }
        Ok(self.normalize(event::read()?))
    }

    fn normalize(&mut self, raw: event::Event) -> Event {
        let event = Event::from(raw);
        if let Event::Mouse(mouse) = &event
            && let Some(click) = self.clicks.update(mouse)
        {
            self.pending.push_back(Event::Mouse(click));
        }
        event
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mouse::{MouseButton, MouseEvent};

    #[test]
    fn test_uninitialized_reader_refuses_to_poll() {
        let mut reader = InputReader::new(InputReaderConfig::keyboard_only());
        assert!(!reader.is_initialized());
        assert!(matches!(
            reader.poll(Duration::from_millis(1)),
            Err(InputError::NotInitialized)
        ));
        assert!(matches!(reader.read(), Err(InputError::NotInitialized)));
    }

    #[test]
    fn test_cleanup_without_init_is_noop() {
        let mut reader = InputReader::new(InputReaderConfig::default());
        assert!(reader.cleanup().is_ok());
    }

    #[test]
    fn test_release_queues_click() {
        let mut reader = InputReader::new(InputReaderConfig::default());
        let down = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 2,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        let up = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Up(crossterm::event::MouseButton::Left),
            column: 2,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });

        reader.normalize(down);
        let released = reader.normalize(up);
        assert_eq!(
            released,
            Event::Mouse(MouseEvent::up(MouseButton::Left, 2, 5))
        );
        assert_eq!(
            reader.pending.pop_front(),
            Some(Event::Mouse(MouseEvent::click(2, 5)))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InputError::AlreadyInitialized.to_string(),
            "input reader already initialized"
        );
    }
}
