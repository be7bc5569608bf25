// src/domain/status.rs
use chrono::Timelike;

use crate::constants::{DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Open,
    Closed,
}

impl OpenStatus {
    pub fn label(self) -> &'static str {
        match self {
            OpenStatus::Open => "OPEN",
            OpenStatus::Closed => "CLOSED",
        }
    }

    /// Modifier class added to the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            OpenStatus::Open => "",
            OpenStatus::Closed => "closed",
        }
    }
}

/// Daily opening window on a 24-hour clock.
///
/// When `closes` is earlier than `opens` the window runs past midnight, e.g.
/// 12..2 is open from noon until 01:59. Equal hours mean open all day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub opens: u32,
    pub closes: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            opens: DEFAULT_OPENING_HOUR,
            closes: DEFAULT_CLOSING_HOUR,
        }
    }
}

impl OpeningHours {
    pub fn new(opens: u32, closes: u32) -> Result<Self, DomainError> {
        for hour in [opens, closes] {
            if hour > 23 {
                return Err(DomainError::InvalidHour(hour));
            }
        }
        Ok(Self { opens, closes })
    }

    pub fn is_open_at(&self, hour: u32) -> bool {
        if self.opens == self.closes {
            true
        } else if self.opens > self.closes {
            hour >= self.opens || hour < self.closes
        } else {
            hour >= self.opens && hour < self.closes
        }
    }

    pub fn is_open<T: Timelike>(&self, now: &T) -> bool {
        self.is_open_at(now.hour())
    }

    pub fn status<T: Timelike>(&self, now: &T) -> OpenStatus {
        if self.is_open(now) {
            OpenStatus::Open
        } else {
            OpenStatus::Closed
        }
    }
}

/// Open from 12:00 until 01:59.
pub fn is_open<T: Timelike>(now: &T) -> bool {
    OpeningHours::default().is_open(now)
}
