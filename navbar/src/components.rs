//! View pieces of the navbar.
//!
//! `navbar` is the bar itself; `icons` renders the lucide glyphs it uses.

pub mod icons;
pub mod navbar;
