// SPDX-License-Identifier: MPL-2.0
//! Style fragments, named override slots, and their composition.
//!
//! Every visual region of the list and the player is drawn from a base
//! [`Style`] plus an optional caller override for the same [`StyleSlot`].
//! Fragments only carry the properties they set; [`compose`] folds an ordered
//! list of optional fragments so that later entries win field by field.
//!
//! ```
//! use iced_clips::ui::styles::{compose, Style};
//! use iced::Color;
//!
//! let base = Style { font_size: Some(16.0), text_color: Some(Color::WHITE), ..Style::EMPTY };
//! let caller = Style { text_color: Some(Color::BLACK), ..Style::EMPTY };
//!
//! let merged = compose([Some(&base), None, Some(&caller)]);
//! assert_eq!(merged.font_size, Some(16.0));
//! assert_eq!(merged.text_color, Some(Color::BLACK));
//! ```

pub mod button;
pub mod container;
pub mod slider;

use iced::widget::text;
use iced::{Background, Border, Color, Padding};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named regions that accept caller overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    Container,
    Item,
    SelectedItem,
    VideoPreview,
    Title,
    SelectedText,
    Description,
    TagContainer,
    Tag,
    Video,
    Controls,
    Button,
    Slider,
    TimeText,
    TimeTextFullscreen,
}

/// A partial set of visual properties.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Highlight color (slider fill and handle, active states).
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub accent: Option<Color>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Gap between children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl Style {
    /// Fragment that sets nothing; the base for struct-update syntax in consts.
    pub const EMPTY: Style = Style {
        background: None,
        text_color: None,
        accent: None,
        border_color: None,
        border_width: None,
        border_radius: None,
        padding: None,
        spacing: None,
        width: None,
        height: None,
        font_size: None,
    };

    /// Returns `self` with every property set in `over` replaced.
    #[must_use]
    pub fn merge(self, over: &Style) -> Style {
        Style {
            background: over.background.or(self.background),
            text_color: over.text_color.or(self.text_color),
            accent: over.accent.or(self.accent),
            border_color: over.border_color.or(self.border_color),
            border_width: over.border_width.or(self.border_width),
            border_radius: over.border_radius.or(self.border_radius),
            padding: over.padding.or(self.padding),
            spacing: over.spacing.or(self.spacing),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            font_size: over.font_size.or(self.font_size),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Style::EMPTY
    }

    /// Border built from the border properties, zero-width when unset.
    #[must_use]
    pub fn border(&self) -> Border {
        Border {
            color: self.border_color.unwrap_or(Color::TRANSPARENT),
            width: self.border_width.unwrap_or(0.0),
            radius: self.border_radius.unwrap_or(0.0).into(),
        }
    }

    #[must_use]
    pub fn background(&self) -> Option<Background> {
        self.background.map(Background::Color)
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        Padding::new(self.padding.unwrap_or(0.0))
    }

    /// Text style for `text(..).style(..)`.
    #[must_use]
    pub fn text(&self) -> text::Style {
        text::Style {
            color: self.text_color,
        }
    }
}

/// Folds optional fragments in order; later fragments override earlier ones.
#[must_use]
pub fn compose<'a, I>(fragments: I) -> Style
where
    I: IntoIterator<Item = Option<&'a Style>>,
{
    fragments
        .into_iter()
        .flatten()
        .fold(Style::EMPTY, |merged, fragment| merged.merge(fragment))
}

/// Caller-supplied overrides keyed by slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverrides(HashMap<StyleSlot, Style>);

impl StyleOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, slot: StyleSlot, style: Style) -> Self {
        self.0.insert(slot, style);
        self
    }

    #[must_use]
    pub fn get(&self, slot: StyleSlot) -> Option<&Style> {
        self.0.get(&slot)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base fragment followed by the override for `slot`.
    #[must_use]
    pub fn resolve(&self, slot: StyleSlot, base: &Style) -> Style {
        compose([Some(base), self.get(slot)])
    }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| channel(&format!("{c}{c}")));
            let (r, g, b) = (digits.next()??, digits.next()??, digits.next()??);
            Some(Color::from_rgb8(r, g, b))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 {
                f32::from(channel(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Color::from_rgba8(r, g, b, a))
        }
        _ => None,
    }
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when translucent.
#[must_use]
pub fn to_hex_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_str(&super::to_hex_color(*color)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) => super::parse_hex_color(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid color: {raw}"))),
        }
    }
}
