// src/domain/view.rs
use std::fmt;
use std::str::FromStr;

use crate::constants::{CARD_TAB_ID, CARD_VIEW_ID, TABLE_TAB_ID, TABLE_VIEW_ID};

/// Which directory view is shown. Changes only on an explicit tab click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

impl ViewMode {
    /// Transition for a tab click; the clicked tab always wins.
    pub fn on_tab_click(self, clicked: ViewMode) -> ViewMode {
        clicked
    }

    pub fn other(self) -> ViewMode {
        match self {
            ViewMode::Card => ViewMode::Table,
            ViewMode::Table => ViewMode::Card,
        }
    }

    pub fn tab_id(self) -> &'static str {
        match self {
            ViewMode::Card => CARD_TAB_ID,
            ViewMode::Table => TABLE_TAB_ID,
        }
    }

    pub fn view_id(self) -> &'static str {
        match self {
            ViewMode::Card => CARD_VIEW_ID,
            ViewMode::Table => TABLE_VIEW_ID,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Card => write!(f, "card"),
            ViewMode::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" | "cards" => Ok(ViewMode::Card),
            "table" => Ok(ViewMode::Table),
            other => Err(format!("unknown view '{other}', expected 'card' or 'table'")),
        }
    }
}
