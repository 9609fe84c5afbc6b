//! Color palette for the scrivi theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on ACCENT

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success
pub const STATUS_RED: Color = Color::Red; // Failure
pub const STATUS_YELLOW: Color = Color::Yellow; // In progress / key hints

// --- Sentiment label colors ---
pub const SENTIMENT_POSITIVE: Color = STATUS_GREEN;
pub const SENTIMENT_NEGATIVE: Color = STATUS_RED;
pub const SENTIMENT_NEUTRAL: Color = Color::Gray;
