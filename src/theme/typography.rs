//! Typography - Named Text Styles
//!
//! A fixed table mapping semantic text roles to font family, weight, point size
//! and line height. The table is `const` data: every [`StyleName`] maps to exactly
//! one [`TextStyle`] through an exhaustive `match`, so lookups are total.

use std::fmt;
use std::str::FromStr;

use gpui::FontWeight;

use crate::error::Error;

/// Abstract font-weight category, independent of any family's naming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeightToken {
    Thin,
    UltraLight,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl WeightToken {
    /// All weight tokens, lightest first
    pub const ALL: [WeightToken; 9] = [
        WeightToken::Thin,
        WeightToken::UltraLight,
        WeightToken::Light,
        WeightToken::Regular,
        WeightToken::Medium,
        WeightToken::Semibold,
        WeightToken::Bold,
        WeightToken::Heavy,
        WeightToken::Black,
    ];

    /// Face-name suffix used by the bundled font files.
    ///
    /// Note that `Heavy` maps to `ExtraBold` and `UltraLight` to `ExtraLight`.
    pub fn suffix(self) -> &'static str {
        match self {
            WeightToken::Black => "Black",
            WeightToken::Bold => "Bold",
            WeightToken::Heavy => "ExtraBold",
            WeightToken::UltraLight => "ExtraLight",
            WeightToken::Light => "Light",
            WeightToken::Medium => "Medium",
            WeightToken::Regular => "Regular",
            WeightToken::Semibold => "SemiBold",
            WeightToken::Thin => "Thin",
        }
    }

    /// Numeric weight understood by GPUI
    pub fn font_weight(self) -> FontWeight {
        match self {
            WeightToken::Thin => FontWeight::THIN,
            WeightToken::UltraLight => FontWeight::EXTRA_LIGHT,
            WeightToken::Light => FontWeight::LIGHT,
            WeightToken::Regular => FontWeight::NORMAL,
            WeightToken::Medium => FontWeight::MEDIUM,
            WeightToken::Semibold => FontWeight::SEMIBOLD,
            WeightToken::Bold => FontWeight::BOLD,
            WeightToken::Heavy => FontWeight::EXTRA_BOLD,
            WeightToken::Black => FontWeight::BLACK,
        }
    }

    /// Map a numeric weight back to a token.
    ///
    /// Only the nine standard stops are recognized; anything else is `Regular`.
    pub fn from_font_weight(weight: FontWeight) -> Self {
        match weight.0.round() as i32 {
            100 => WeightToken::Thin,
            200 => WeightToken::UltraLight,
            300 => WeightToken::Light,
            400 => WeightToken::Regular,
            500 => WeightToken::Medium,
            600 => WeightToken::Semibold,
            700 => WeightToken::Bold,
            800 => WeightToken::Heavy,
            900 => WeightToken::Black,
            _ => WeightToken::Regular,
        }
    }
}

/// Font families bundled with the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Multi-weight UI family, one face per weight (`Pretendard-SemiBold`, ...)
    Pretendard,
    /// Single-face decorative family used for food names
    HakgyoansimRikodeo,
}

impl FontFamily {
    /// Family name as registered with the text system
    pub fn family_name(self) -> &'static str {
        match self {
            FontFamily::Pretendard => "Pretendard",
            FontFamily::HakgyoansimRikodeo => "OTHakgyoansimRikodeoR",
        }
    }

    /// Face name for the given weight, matching the bundled file stem
    pub fn face_name(self, weight: WeightToken) -> String {
        match self {
            FontFamily::Pretendard => format!("{}-{}", self.family_name(), weight.suffix()),
            // One face only; weight is synthesized by the text system
            FontFamily::HakgyoansimRikodeo => self.family_name().to_string(),
        }
    }
}

/// Resolved, immutable bundle of font reference, point size and line height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: WeightToken,
    pub point_size: f32,
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(
        family: FontFamily,
        weight: WeightToken,
        point_size: f32,
        line_height: f32,
    ) -> Self {
        Self {
            family,
            weight,
            point_size,
            line_height,
        }
    }

    const fn pretendard(point_size: f32, weight: WeightToken, line_height: f32) -> Self {
        Self::new(FontFamily::Pretendard, weight, point_size, line_height)
    }

    /// Extra space between lines: `line_height - point_size`
    pub fn spacing(&self) -> f32 {
        self.line_height - self.point_size
    }

    /// Face name this style asks the resolver for
    pub fn face_name(&self) -> String {
        self.family.face_name(self.weight)
    }

    /// Scale size and line height together, keeping family and weight
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            point_size: self.point_size * factor,
            line_height: self.line_height * factor,
            ..self
        }
    }
}

/// Weight variant within a style group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Emphasis {
    #[default]
    Default,
    Bold,
}

impl Emphasis {
    pub const ALL: [Emphasis; 2] = [Emphasis::Default, Emphasis::Bold];

    pub fn key(self) -> &'static str {
        match self {
            Emphasis::Default => "default",
            Emphasis::Bold => "bold",
        }
    }
}

/// Size variant for button labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    SmallText,
    Text,
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::SmallText, ButtonSize::Text, ButtonSize::Icon];

    pub fn key(self) -> &'static str {
        match self {
            ButtonSize::SmallText => "smalltext",
            ButtonSize::Text => "text",
            ButtonSize::Icon => "icon",
        }
    }
}

/// Semantic role a style belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleGroup {
    Body,
    LargeBodyCopy,
    Callout,
    Caption1,
    Caption2,
    Footnote,
    Title1,
    Title2,
    Title3,
    Button,
    FoodName,
}

impl StyleGroup {
    pub const ALL: [StyleGroup; 11] = [
        StyleGroup::Body,
        StyleGroup::LargeBodyCopy,
        StyleGroup::Callout,
        StyleGroup::Caption1,
        StyleGroup::Caption2,
        StyleGroup::Footnote,
        StyleGroup::Title1,
        StyleGroup::Title2,
        StyleGroup::Title3,
        StyleGroup::Button,
        StyleGroup::FoodName,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StyleGroup::Body => "body",
            StyleGroup::LargeBodyCopy => "largebodycopy",
            StyleGroup::Callout => "callout",
            StyleGroup::Caption1 => "caption1",
            StyleGroup::Caption2 => "caption2",
            StyleGroup::Footnote => "footnote",
            StyleGroup::Title1 => "title1",
            StyleGroup::Title2 => "title2",
            StyleGroup::Title3 => "title3",
            StyleGroup::Button => "button",
            StyleGroup::FoodName => "foodname",
        }
    }

    /// Build the style name for a weight variant, if this group has weight variants
    pub fn with_emphasis(self, emphasis: Emphasis) -> Option<StyleName> {
        let name = match self {
            StyleGroup::Body => StyleName::Body(emphasis),
            StyleGroup::LargeBodyCopy => StyleName::LargeBodyCopy(emphasis),
            StyleGroup::Callout => StyleName::Callout(emphasis),
            StyleGroup::Caption1 => StyleName::Caption1(emphasis),
            StyleGroup::Caption2 => StyleName::Caption2(emphasis),
            StyleGroup::Footnote => StyleName::Footnote(emphasis),
            StyleGroup::Title1 => StyleName::Title1(emphasis),
            StyleGroup::Title2 => StyleName::Title2(emphasis),
            StyleGroup::Title3 => StyleName::Title3(emphasis),
            StyleGroup::Button | StyleGroup::FoodName => return None,
        };
        Some(name)
    }

    /// Every style name in this group, in declaration order
    pub fn names(self) -> Vec<StyleName> {
        match self {
            StyleGroup::Button => ButtonSize::ALL.into_iter().map(StyleName::Button).collect(),
            StyleGroup::FoodName => vec![StyleName::FoodName],
            group => Emphasis::ALL
                .into_iter()
                .filter_map(|emphasis| group.with_emphasis(emphasis))
                .collect(),
        }
    }
}

/// Identifier for one named text style variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Body(Emphasis),
    LargeBodyCopy(Emphasis),
    Callout(Emphasis),
    Caption1(Emphasis),
    Caption2(Emphasis),
    Footnote(Emphasis),
    Title1(Emphasis),
    Title2(Emphasis),
    Title3(Emphasis),
    Button(ButtonSize),
    FoodName,
}

impl StyleName {
    /// Every declared style, grouped in table order
    pub const ALL: [StyleName; 22] = [
        StyleName::Body(Emphasis::Default),
        StyleName::Body(Emphasis::Bold),
        StyleName::LargeBodyCopy(Emphasis::Default),
        StyleName::LargeBodyCopy(Emphasis::Bold),
        StyleName::Callout(Emphasis::Default),
        StyleName::Callout(Emphasis::Bold),
        StyleName::Caption1(Emphasis::Default),
        StyleName::Caption1(Emphasis::Bold),
        StyleName::Caption2(Emphasis::Default),
        StyleName::Caption2(Emphasis::Bold),
        StyleName::Footnote(Emphasis::Default),
        StyleName::Footnote(Emphasis::Bold),
        StyleName::Title1(Emphasis::Default),
        StyleName::Title1(Emphasis::Bold),
        StyleName::Title2(Emphasis::Default),
        StyleName::Title2(Emphasis::Bold),
        StyleName::Title3(Emphasis::Default),
        StyleName::Title3(Emphasis::Bold),
        StyleName::Button(ButtonSize::SmallText),
        StyleName::Button(ButtonSize::Text),
        StyleName::Button(ButtonSize::Icon),
        StyleName::FoodName,
    ];

    pub fn group(self) -> StyleGroup {
        match self {
            StyleName::Body(_) => StyleGroup::Body,
            StyleName::LargeBodyCopy(_) => StyleGroup::LargeBodyCopy,
            StyleName::Callout(_) => StyleGroup::Callout,
            StyleName::Caption1(_) => StyleGroup::Caption1,
            StyleName::Caption2(_) => StyleGroup::Caption2,
            StyleName::Footnote(_) => StyleGroup::Footnote,
            StyleName::Title1(_) => StyleGroup::Title1,
            StyleName::Title2(_) => StyleGroup::Title2,
            StyleName::Title3(_) => StyleGroup::Title3,
            StyleName::Button(_) => StyleGroup::Button,
            StyleName::FoodName => StyleGroup::FoodName,
        }
    }

    /// Look up the style attributes for this name
    pub const fn style(self) -> TextStyle {
        text_style(self)
    }
}

/// Registry lookup: the full table of named styles
pub const fn text_style(name: StyleName) -> TextStyle {
    use WeightToken::Semibold;

    // Default variants are medium; bold variants use the given weight
    const fn pair(emphasis: Emphasis, size: f32, bold: WeightToken, line_height: f32) -> TextStyle {
        match emphasis {
            Emphasis::Default => TextStyle::pretendard(size, WeightToken::Medium, line_height),
            Emphasis::Bold => TextStyle::pretendard(size, bold, line_height),
        }
    }

    match name {
        StyleName::Body(e) => pair(e, 17.0, WeightToken::Bold, 24.0),
        StyleName::LargeBodyCopy(e) => pair(e, 22.0, WeightToken::Bold, 32.0),
        StyleName::Callout(e) => pair(e, 16.0, WeightToken::Bold, 20.0),
        StyleName::Caption1(e) => pair(e, 12.0, WeightToken::Bold, 16.0),
        StyleName::Caption2(e) => pair(e, 11.0, WeightToken::Bold, 16.0),
        StyleName::Footnote(e) => pair(e, 13.0, WeightToken::Bold, 16.0),
        StyleName::Title1(e) => pair(e, 28.0, WeightToken::Bold, 32.0),
        StyleName::Title2(e) => pair(e, 22.0, WeightToken::Bold, 28.0),
        StyleName::Title3(e) => pair(e, 20.0, Semibold, 24.0),
        StyleName::Button(ButtonSize::SmallText) => TextStyle::pretendard(16.0, Semibold, 24.0),
        StyleName::Button(ButtonSize::Text) => TextStyle::pretendard(20.0, Semibold, 24.0),
        StyleName::Button(ButtonSize::Icon) => TextStyle::pretendard(23.0, Semibold, 24.0),
        StyleName::FoodName => {
            TextStyle::new(FontFamily::HakgyoansimRikodeo, WeightToken::Regular, 30.0, 36.0)
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self.group().key();
        match self {
            StyleName::Button(size) => write!(f, "{group}.{}", size.key()),
            StyleName::FoodName => f.write_str(group),
            StyleName::Body(e)
            | StyleName::LargeBodyCopy(e)
            | StyleName::Callout(e)
            | StyleName::Caption1(e)
            | StyleName::Caption2(e)
            | StyleName::Footnote(e)
            | StyleName::Title1(e)
            | StyleName::Title2(e)
            | StyleName::Title3(e) => write!(f, "{group}.{}", e.key()),
        }
    }
}

impl FromStr for StyleName {
    type Err = Error;

    /// Parse a dotted key such as `body.bold` or `button.icon` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let (group_key, variant_key) = match key.split_once('.') {
            Some((group, variant)) => (group, Some(variant)),
            None => (key.as_str(), None),
        };

        let unknown = || Error::UnknownStyle { key: s.to_string() };

        let group = StyleGroup::ALL
            .into_iter()
            .find(|g| g.key() == group_key)
            .ok_or_else(unknown)?;

        match (group, variant_key) {
            (StyleGroup::FoodName, None) => Ok(StyleName::FoodName),
            (StyleGroup::Button, Some(variant)) => ButtonSize::ALL
                .into_iter()
                .find(|size| size.key() == variant)
                .map(StyleName::Button)
                .ok_or_else(unknown),
            (group, Some(variant)) => Emphasis::ALL
                .into_iter()
                .find(|emphasis| emphasis.key() == variant)
                .and_then(|emphasis| group.with_emphasis(emphasis))
                .ok_or_else(unknown),
            (_, None) => Err(unknown()),
        }
    }
}
