//! Text glyphs used as icons.
//!
//! Destinations carry an outlined glyph and a filled one for the selected
//! state.

pub(crate) const MENU: &str = "☰";
pub(crate) const BACK: &str = "←";
pub(crate) const FORWARD: &str = "→";
pub(crate) const ICONS_ONLY: &str = "▤";
pub(crate) const MENU_WIDTH: &str = "⇔";

pub(crate) const INPUT: &str = "▷";
pub(crate) const INPUT_SELECTED: &str = "▶";
pub(crate) const ANIMATION: &str = "◇";
pub(crate) const ANIMATION_SELECTED: &str = "◆";
pub(crate) const OUTPUT: &str = "□";
pub(crate) const OUTPUT_SELECTED: &str = "■";
pub(crate) const TEAM: &str = "♡";
pub(crate) const TEAM_SELECTED: &str = "♥";
pub(crate) const INFO: &str = "ⓘ";
pub(crate) const INFO_SELECTED: &str = "ℹ";
