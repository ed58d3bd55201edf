//! Text Style Applicator
//!
//! Applies named text styles to any GPUI element:
//!
//! ```ignore
//! div().text_style_named(StyleName::Body(Emphasis::Bold)).child("Hello");
//! div().typography().title1().default().child("Menu");
//! div().typography().button().icon().child("+");
//! ```
//!
//! The font comes from the installed [`Typography`]; missing faces degrade to
//! the system font without failing.

use gpui::Styled;
use tracing::warn;

use crate::theme::{AppliedText, ButtonSize, Emphasis, StyleName, TextStyle, Typography};

/// Something that can receive resolved text attributes
pub trait TextStyleTarget: Sized {
    fn set_text_attributes(self, applied: &AppliedText) -> Self;
}

impl<E: Styled> TextStyleTarget for E {
    fn set_text_attributes(self, applied: &AppliedText) -> Self {
        self.font_family(applied.font.family.clone())
            .font_weight(applied.font.weight)
            .text_size(applied.text_size)
            .line_height(applied.line_height)
    }
}

/// Apply a style using an explicit typography
pub fn apply_with<E: TextStyleTarget>(element: E, style: &TextStyle, typography: &Typography) -> E {
    element.set_text_attributes(&typography.resolve(style))
}

/// Apply a style using the process-wide typography
pub fn apply<E: TextStyleTarget>(element: E, style: &TextStyle) -> E {
    apply_with(element, style, Typography::current())
}

/// Typography methods for styled elements
pub trait TypographyExt: TextStyleTarget {
    /// Set font, text size and line height from a text style
    fn apply_text_style(self, style: &TextStyle) -> Self {
        apply(self, style)
    }

    /// Apply a named style from the registry
    fn text_style_named(self, name: StyleName) -> Self {
        apply(self, &name.style())
    }

    /// Apply a style by dotted key such as `"body.bold"`.
    ///
    /// An unknown key leaves the element unstyled and logs a warning.
    fn text_style_key(self, key: &str) -> Self {
        match key.parse::<StyleName>() {
            Ok(name) => self.text_style_named(name),
            Err(e) => {
                warn!(error = %e, key, "Text style not applied");
                self
            }
        }
    }

    /// Grouped accessor: `element.typography().body().bold()`
    fn typography(self) -> TypographyProxy<Self> {
        TypographyProxy { element: self }
    }
}

impl<E: TextStyleTarget> TypographyExt for E {}

/// Entry point of the grouped accessor
pub struct TypographyProxy<E> {
    element: E,
}

impl<E: TextStyleTarget> TypographyProxy<E> {
    fn emphasis(self, make: fn(Emphasis) -> StyleName) -> EmphasisProxy<E> {
        EmphasisProxy {
            element: self.element,
            make,
        }
    }

    pub fn body(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Body)
    }

    pub fn large_body_copy(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::LargeBodyCopy)
    }

    pub fn callout(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Callout)
    }

    pub fn caption1(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Caption1)
    }

    pub fn caption2(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Caption2)
    }

    pub fn footnote(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Footnote)
    }

    pub fn title1(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Title1)
    }

    pub fn title2(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Title2)
    }

    pub fn title3(self) -> EmphasisProxy<E> {
        self.emphasis(StyleName::Title3)
    }

    pub fn button(self) -> ButtonProxy<E> {
        ButtonProxy {
            element: self.element,
        }
    }

    pub fn food_name(self) -> E {
        self.element.text_style_named(StyleName::FoodName)
    }

    /// Leave the accessor without applying anything
    pub fn into_inner(self) -> E {
        self.element
    }
}

/// Groups with a default and a bold variant
pub struct EmphasisProxy<E> {
    element: E,
    make: fn(Emphasis) -> StyleName,
}

impl<E: TextStyleTarget> EmphasisProxy<E> {
    pub fn default(self) -> E {
        self.with(Emphasis::Default)
    }

    pub fn bold(self) -> E {
        self.with(Emphasis::Bold)
    }

    pub fn with(self, emphasis: Emphasis) -> E {
        self.element.text_style_named((self.make)(emphasis))
    }
}

/// Button label sizes
pub struct ButtonProxy<E> {
    element: E,
}

impl<E: TextStyleTarget> ButtonProxy<E> {
    pub fn small_text(self) -> E {
        self.size(ButtonSize::SmallText)
    }

    pub fn text(self) -> E {
        self.size(ButtonSize::Text)
    }

    pub fn icon(self) -> E {
        self.size(ButtonSize::Icon)
    }

    pub fn size(self, size: ButtonSize) -> E {
        self.element.text_style_named(StyleName::Button(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FontResolver, FontSource, SYSTEM_FONT_FAMILY};
    use gpui::px;

    /// Records what the applicator sets
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Recorder {
        applied: Option<AppliedText>,
        writes: usize,
    }

    impl TextStyleTarget for Recorder {
        fn set_text_attributes(mut self, applied: &AppliedText) -> Self {
            self.applied = Some(applied.clone());
            self.writes += 1;
            self
        }
    }

    fn r() -> Recorder {
        Recorder::default()
    }

    fn applied(recorded: &Recorder) -> &AppliedText {
        recorded.applied.as_ref().expect("style should be applied")
    }

    #[test]
    fn test_apply_sets_font_size_and_spacing() {
        let recorded = r().text_style_named(StyleName::Body(Emphasis::Default));
        let attrs = applied(&recorded);
        assert_eq!(attrs.text_size, px(17.0));
        assert_eq!(attrs.line_height, px(24.0));
        assert_eq!(attrs.spacing(), px(7.0));
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let style = StyleName::Title2(Emphasis::Bold).style();
        let once = r().apply_text_style(&style);
        let twice = once.clone().apply_text_style(&style);
        assert_eq!(once.applied, twice.applied);
        assert_eq!(twice.writes, 2);
    }

    #[test]
    fn test_apply_with_missing_face_still_styles() {
        let typography = Typography::new(FontResolver::system_only(), 1.0);
        let style = StyleName::Caption1(Emphasis::Bold).style();
        let recorded = apply_with(r(), &style, &typography);
        let attrs = applied(&recorded);
        assert_eq!(attrs.source, FontSource::SystemFallback);
        assert_eq!(attrs.font.family.as_ref(), SYSTEM_FONT_FAMILY);
        assert_eq!(attrs.font.weight, style.weight.font_weight());
        assert_eq!(attrs.text_size, px(12.0));
    }

    #[test]
    fn test_apply_with_bundled_face() {
        let typography = Typography::new(FontResolver::new(["Pretendard-SemiBold"]), 1.0);
        let recorded = apply_with(
            r(),
            &StyleName::Button(ButtonSize::Icon).style(),
            &typography,
        );
        let attrs = applied(&recorded);
        assert_eq!(attrs.source, FontSource::Bundled);
        assert_eq!(attrs.font.family.as_ref(), "Pretendard");
        assert_eq!(attrs.text_size, px(23.0));
        assert_eq!(attrs.line_height, px(24.0));
    }

    #[test]
    fn test_proxy_matches_named_styles() {
        let cases: Vec<(Recorder, StyleName)> = vec![
            (r().typography().body().default(), StyleName::Body(Emphasis::Default)),
            (r().typography().body().bold(), StyleName::Body(Emphasis::Bold)),
            (
                r().typography().large_body_copy().bold(),
                StyleName::LargeBodyCopy(Emphasis::Bold),
            ),
            (r().typography().callout().default(), StyleName::Callout(Emphasis::Default)),
            (r().typography().caption1().bold(), StyleName::Caption1(Emphasis::Bold)),
            (r().typography().caption2().default(), StyleName::Caption2(Emphasis::Default)),
            (r().typography().footnote().bold(), StyleName::Footnote(Emphasis::Bold)),
            (r().typography().title1().default(), StyleName::Title1(Emphasis::Default)),
            (r().typography().title2().bold(), StyleName::Title2(Emphasis::Bold)),
            (r().typography().title3().bold(), StyleName::Title3(Emphasis::Bold)),
            (r().typography().button().small_text(), StyleName::Button(ButtonSize::SmallText)),
            (r().typography().button().text(), StyleName::Button(ButtonSize::Text)),
            (r().typography().button().icon(), StyleName::Button(ButtonSize::Icon)),
            (r().typography().food_name(), StyleName::FoodName),
        ];

        for (recorded, name) in cases {
            let expected = r().text_style_named(name);
            assert_eq!(recorded, expected, "{name}");
        }
    }

    #[test]
    fn test_key_accessor_applies_known_style() {
        let by_key = r().text_style_key("footnote.bold");
        let by_name = r().text_style_named(StyleName::Footnote(Emphasis::Bold));
        assert_eq!(by_key, by_name);
    }

    #[test]
    fn test_key_accessor_ignores_unknown_group() {
        let original = r();
        let result = original.clone().text_style_key("headline.default");
        assert_eq!(result, original);
        assert_eq!(result.writes, 0);
    }

    #[test]
    fn test_into_inner_leaves_element_unstyled() {
        let recorded = r().typography().into_inner();
        assert!(recorded.applied.is_none());
    }
}
