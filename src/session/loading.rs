//! Rotating loading messages shown while a request is in flight

use std::time::Duration;

/// Messages cycled through by the loading overlay
pub const LOADING_MESSAGES: [&str; 10] = [
    "Analyzing every message",
    "Reading your chat history",
    "Counting words and emojis",
    "Generating cool charts",
    "Crunching data bytes",
    "Detecting conversation trends",
    "Mapping user activity",
    "Uncovering chat secrets",
    "Building word clouds",
    "Preparing insights for you",
];

/// How long each message stays on screen
pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_secs(3);

/// Cursor into [`LOADING_MESSAGES`]
///
/// The index survives between requests, so the next load resumes where the
/// previous one stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingTicker {
    index: usize,
}

impl LoadingTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next message, wrapping around
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % LOADING_MESSAGES.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_wraps() {
        let mut ticker = LoadingTicker::new();
        assert_eq!(ticker.message(), "Analyzing every message");

        for _ in 0..LOADING_MESSAGES.len() - 1 {
            ticker.advance();
        }
        assert_eq!(ticker.message(), "Preparing insights for you");

        ticker.advance();
        assert_eq!(ticker.index(), 0);
    }
}
