//! Token styling
//!
//! A theme maps token kinds to display colors. It is constructed once at
//! startup and passed to the rendering layer; kinds without an entry are
//! drawn in the host's default foreground.

use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Token kind to color mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: BTreeMap<TokenKind, Rgb>,
}

impl Theme {
    /// A theme with no rules; everything renders in the default foreground
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// The stock dark palette
    pub fn dark() -> Self {
        let mut theme = Self::empty();
        theme.set(TokenKind::Keyword, Rgb::new(0x56, 0x9c, 0xd6));
        theme.set(TokenKind::Name, Rgb::new(0xd4, 0xd4, 0xd4));
        theme.set(TokenKind::Comment, Rgb::new(0x6a, 0x99, 0x55));
        theme.set(TokenKind::String, Rgb::new(0xce, 0x91, 0x78));
        theme.set(TokenKind::Number, Rgb::new(0xb5, 0xce, 0xa8));
        theme.set(TokenKind::Operator, Rgb::new(0xd4, 0xd4, 0xd4));
        theme
    }

    pub fn set(&mut self, kind: TokenKind, color: Rgb) {
        self.colors.insert(kind, color);
    }

    /// Color for a token kind, if the theme styles it
    pub fn color(&self, kind: TokenKind) -> Option<Rgb> {
        self.colors.get(&kind).copied()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
