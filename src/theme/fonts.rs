//! Fonts - Face Resolution with System Fallback
//!
//! Turns a family and weight into a concrete GPUI [`Font`]. A face is only used
//! when it was registered with the text system; otherwise the platform UI font
//! is substituted at the same size and weight. The fallback is silent: callers
//! always get a usable font.
//!
//! ## Pattern
//!
//! ```text
//! TextStyle (family, weight, size, line height)
//!       │
//!       ▼
//! FontResolver::resolve()  ── face missing ──▶  .SystemUIFont, same weight
//!       │
//!       ▼
//! AppliedText { font, text_size, line_height }
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use gpui::{Font, FontWeight, Pixels, font, px};
use tracing::{info, trace, warn};

use super::typography::{FontFamily, TextStyle, WeightToken};

/// Family name GPUI maps to the platform's built-in UI font
pub const SYSTEM_FONT_FAMILY: &str = ".SystemUIFont";

/// Where a resolved font came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSource {
    /// A bundled face registered at startup
    Bundled,
    /// The platform default font, used because the face was unavailable
    SystemFallback,
}

/// A concrete font handle at a given size
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub font: Font,
    pub size: Pixels,
    pub source: FontSource,
}

impl ResolvedFont {
    pub fn is_fallback(&self) -> bool {
        self.source == FontSource::SystemFallback
    }
}

/// Resolves family/weight pairs against the set of available faces
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    faces: HashSet<String>,
}

impl FontResolver {
    /// Create a resolver that knows the given face names (e.g. `Pretendard-Bold`)
    pub fn new<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
        }
    }

    /// A resolver with no bundled faces; every lookup falls back to the system font
    pub fn system_only() -> Self {
        Self::default()
    }

    pub fn has_face(&self, face: &str) -> bool {
        self.faces.contains(face)
    }

    /// Number of available faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Resolve a family at a weight token and point size
    pub fn resolve(&self, family: FontFamily, weight: WeightToken, size: f32) -> ResolvedFont {
        self.resolve_with_weight(family, weight, weight.font_weight(), size)
    }

    /// Resolve a family at an arbitrary numeric weight.
    ///
    /// Non-standard weights pick the `Regular` face, but a system fallback keeps
    /// the exact weight that was asked for.
    pub fn resolve_font_weight(
        &self,
        family: FontFamily,
        weight: FontWeight,
        size: f32,
    ) -> ResolvedFont {
        self.resolve_with_weight(family, WeightToken::from_font_weight(weight), weight, size)
    }

    /// Shorthand for the primary UI family
    pub fn pretendard(&self, weight: WeightToken, size: f32) -> ResolvedFont {
        self.resolve(FontFamily::Pretendard, weight, size)
    }

    fn resolve_with_weight(
        &self,
        family: FontFamily,
        token: WeightToken,
        weight: FontWeight,
        size: f32,
    ) -> ResolvedFont {
        let face = family.face_name(token);

        let (family_name, source) = if self.has_face(&face) {
            (family.family_name(), FontSource::Bundled)
        } else {
            trace!(face = %face, "Font face unavailable, using system font");
            (SYSTEM_FONT_FAMILY, FontSource::SystemFallback)
        };

        let mut handle = font(family_name);
        handle.weight = weight;

        ResolvedFont {
            font: handle,
            size: px(size),
            source,
        }
    }
}

/// Attributes an element receives when a text style is applied
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedText {
    pub font: Font,
    pub text_size: Pixels,
    /// Absolute line height: text size plus the style's spacing
    pub line_height: Pixels,
    pub source: FontSource,
}

impl AppliedText {
    /// Space between lines
    pub fn spacing(&self) -> Pixels {
        self.line_height - self.text_size
    }
}

/// Process-wide typography settings: the font resolver and a text scale factor
#[derive(Debug, Clone)]
pub struct Typography {
    resolver: FontResolver,
    scale: f32,
}

/// Write-once holder for the process-wide typography.
///
/// Reads before install see a system-only fallback without consuming the slot,
/// so a later install still takes effect.
#[derive(Debug, Default)]
pub struct TypographySlot {
    installed: OnceLock<Typography>,
    fallback: OnceLock<Typography>,
}

impl TypographySlot {
    pub const fn new() -> Self {
        Self {
            installed: OnceLock::new(),
            fallback: OnceLock::new(),
        }
    }

    /// Store a typography; only the first install wins
    pub fn install(&self, typography: Typography) -> bool {
        let faces = typography.resolver.face_count();
        let scale = typography.scale;
        match self.installed.set(typography) {
            Ok(()) => {
                info!(faces, scale, "Typography installed");
                true
            }
            Err(_) => {
                warn!("Typography already installed, keeping the existing one");
                false
            }
        }
    }

    pub fn is_installed(&self) -> bool {
        self.installed.get().is_some()
    }

    /// The installed typography, or system fonts at scale 1.0 until one is installed
    pub fn current(&self) -> &Typography {
        match self.installed.get() {
            Some(typography) => typography,
            None => self.fallback.get_or_init(Typography::system_only),
        }
    }
}

static TYPOGRAPHY: TypographySlot = TypographySlot::new();

impl Typography {
    pub fn new(resolver: FontResolver, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            warn!(scale, "Ignoring invalid text scale");
            1.0
        };
        Self { resolver, scale }
    }

    /// System fonts only, unscaled
    pub fn system_only() -> Self {
        Self::new(FontResolver::system_only(), 1.0)
    }

    pub fn resolver(&self) -> &FontResolver {
        &self.resolver
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Resolve a style into the attributes set on an element
    pub fn resolve(&self, style: &TextStyle) -> AppliedText {
        let style = style.scaled(self.scale);
        let resolved = self.resolver.resolve(style.family, style.weight, style.point_size);

        AppliedText {
            font: resolved.font,
            text_size: resolved.size,
            line_height: px(style.point_size + style.spacing()),
            source: resolved.source,
        }
    }

    /// Install as the process-wide typography; only the first install wins
    pub fn install(self) -> bool {
        TYPOGRAPHY.install(self)
    }

    /// The installed typography, or system fonts at scale 1.0 if none was installed yet
    pub fn current() -> &'static Typography {
        TYPOGRAPHY.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::typography::{ButtonSize, Emphasis, StyleName};

    fn bundled() -> FontResolver {
        FontResolver::new(["Pretendard-Medium", "Pretendard-Bold", "OTHakgyoansimRikodeoR"])
    }

    #[test]
    fn test_bundled_face_is_used() {
        let resolved = bundled().pretendard(WeightToken::Bold, 17.0);
        assert_eq!(resolved.source, FontSource::Bundled);
        assert_eq!(resolved.font.family.as_ref(), "Pretendard");
        assert_eq!(resolved.font.weight, FontWeight::BOLD);
        assert_eq!(resolved.size, px(17.0));
    }

    #[test]
    fn test_missing_face_falls_back_to_system_font() {
        let resolved = bundled().pretendard(WeightToken::Semibold, 20.0);
        assert!(resolved.is_fallback());
        assert_eq!(resolved.font.family.as_ref(), SYSTEM_FONT_FAMILY);
        assert_eq!(resolved.font.weight, FontWeight::SEMIBOLD);
        assert_eq!(resolved.size, px(20.0));
    }

    #[test]
    fn test_system_only_resolves_every_style() {
        let resolver = FontResolver::system_only();
        for name in StyleName::ALL {
            let style = name.style();
            let resolved = resolver.resolve(style.family, style.weight, style.point_size);
            assert!(resolved.is_fallback());
            assert_eq!(resolved.font.weight, style.weight.font_weight());
            assert_eq!(resolved.size, px(style.point_size));
        }
    }

    #[test]
    fn test_nonstandard_weight_uses_regular_face() {
        let resolver = FontResolver::new(["Pretendard-Regular"]);
        let resolved =
            resolver.resolve_font_weight(FontFamily::Pretendard, FontWeight(450.0), 14.0);
        assert_eq!(resolved.source, FontSource::Bundled);
        assert_eq!(resolved.font.family.as_ref(), "Pretendard");

        let fallback = FontResolver::system_only().resolve_font_weight(
            FontFamily::Pretendard,
            FontWeight(450.0),
            14.0,
        );
        assert!(fallback.is_fallback());
        assert_eq!(fallback.font.weight, FontWeight(450.0));
    }

    #[test]
    fn test_single_face_family_ignores_weight_for_lookup() {
        let resolved =
            bundled().resolve(FontFamily::HakgyoansimRikodeo, WeightToken::Regular, 30.0);
        assert_eq!(resolved.source, FontSource::Bundled);
        assert_eq!(resolved.font.family.as_ref(), "OTHakgyoansimRikodeoR");
    }

    #[test]
    fn test_applied_spacing_matches_style() {
        let typography = Typography::new(bundled(), 1.0);
        for name in StyleName::ALL {
            let style = name.style();
            let applied = typography.resolve(&style);
            assert_eq!(applied.text_size, px(style.point_size));
            assert_eq!(applied.line_height, px(style.line_height));
            assert_eq!(applied.spacing(), px(style.spacing()));
        }
    }

    #[test]
    fn test_scale_applies_to_size_and_line_height() {
        let typography = Typography::new(FontResolver::system_only(), 2.0);
        let applied = typography.resolve(&StyleName::Button(ButtonSize::Text).style());
        assert_eq!(applied.text_size, px(40.0));
        assert_eq!(applied.line_height, px(48.0));
        assert_eq!(applied.spacing(), px(8.0));
    }

    #[test]
    fn test_invalid_scale_resets_to_one() {
        assert_eq!(Typography::new(FontResolver::system_only(), 0.0).scale(), 1.0);
        assert_eq!(Typography::new(FontResolver::system_only(), f32::NAN).scale(), 1.0);
        assert_eq!(Typography::new(FontResolver::system_only(), -1.5).scale(), 1.0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let typography = Typography::new(bundled(), 1.0);
        let style = StyleName::Body(Emphasis::Default).style();
        assert_eq!(typography.resolve(&style), typography.resolve(&style));
    }

    #[test]
    fn test_read_before_install_does_not_block_install() {
        let slot = TypographySlot::new();
        assert!(!slot.is_installed());
        assert_eq!(slot.current().resolver().face_count(), 0);
        assert_eq!(slot.current().scale(), 1.0);

        assert!(slot.install(Typography::new(bundled(), 1.125)));
        assert!(slot.is_installed());
        assert_eq!(slot.current().resolver().face_count(), 3);
        assert_eq!(slot.current().scale(), 1.125);
    }

    #[test]
    fn test_second_install_keeps_first() {
        let slot = TypographySlot::new();
        assert!(slot.install(Typography::new(bundled(), 1.0)));
        assert!(!slot.install(Typography::system_only()));
        assert!(slot.current().resolver().has_face("Pretendard-Bold"));
    }
}
