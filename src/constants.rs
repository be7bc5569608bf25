// src/constants.rs
//
// Container identifiers, class names and fixed values shared by the renderer,
// the controller and the in-memory host document.

/// Hour (24h clock) at which restaurants open.
///
/// Used in: `domain/status.rs`, `infrastructure/config.rs`
pub const DEFAULT_OPENING_HOUR: u32 = 12;

/// Hour (24h clock) at which restaurants close. Earlier than the opening hour,
/// so the window wraps past midnight.
///
/// Used in: `domain/status.rs`, `infrastructure/config.rs`
pub const DEFAULT_CLOSING_HOUR: u32 = 2;

/// Number of glyph slots in a star rating.
pub const STAR_SLOTS: u32 = 5;

/// Highest rating a record may carry.
pub const MAX_RATING: f64 = 5.0;

/// Mood attribute value of the filter button that shows every record.
pub const ALL_MOODS: &str = "all";

/// Attribute carrying a filter button's mood.
pub const MOOD_ATTRIBUTE: &str = "data-mood";

// Container ids looked up in the host document.
pub const GRID_ID: &str = "restaurant-grid";
pub const TABLE_BODY_ID: &str = "restaurant-table";
pub const MOOD_FILTER_ID: &str = "mood-filter";
pub const SPIN_BUTTON_ID: &str = "spin-button";
pub const RANDOM_SLOT_ID: &str = "random-restaurant";
pub const MODAL_ID: &str = "modal";
pub const CARD_TAB_ID: &str = "card-tab";
pub const TABLE_TAB_ID: &str = "table-tab";
pub const CARD_VIEW_ID: &str = "card-view";
pub const TABLE_VIEW_ID: &str = "table-view";

/// Class of the control that dismisses the modal.
pub const CLOSE_CLASS: &str = "close";

// Classes toggled on controls.
pub const ACTIVE_CLASS: &str = "active";
pub const PRIMARY_BUTTON_CLASS: &str = "button";
pub const SECONDARY_BUTTON_CLASS: &str = "secondary";

/// Delay in milliseconds after writing a page snapshot before opening the browser.
///
/// Used in: `infrastructure/page.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
