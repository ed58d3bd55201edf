//! Embedded assets for Typekit
//!
//! Uses rust-embed to bundle font files at compile time, and registers them
//! with the GPUI text system at startup.

use gpui::{AssetSource, Result, SharedString, TextSystem};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::theme::FontResolver;

/// Directory (inside `assets/`) holding bundled font files
pub const FONTS_DIR: &str = "fonts/";

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "fonts/*.otf"]
#[include = "fonts/*.ttf"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Face name for a bundled font path: `fonts/Pretendard-Bold.otf` -> `Pretendard-Bold`
pub fn font_face_name(path: &str) -> Option<&str> {
    let file = path.strip_prefix(FONTS_DIR)?;
    let (stem, ext) = file.rsplit_once('.')?;
    let is_font = ext.eq_ignore_ascii_case("otf") || ext.eq_ignore_ascii_case("ttf");
    (is_font && !stem.is_empty() && !stem.contains('/')).then_some(stem)
}

/// Face names of every embedded font file
pub fn bundled_faces() -> Vec<String> {
    Assets::iter()
        .filter_map(|path| font_face_name(&path).map(str::to_string))
        .collect()
}

/// Register every embedded font with the text system.
///
/// The returned resolver knows exactly the faces that registered successfully.
pub fn register_bundled_fonts(text_system: &TextSystem) -> FontResolver {
    let files = Assets::iter().filter_map(|path| {
        let face = font_face_name(&path)?.to_string();
        let file = Assets::get(&path)?;
        Some((face, file.data))
    });

    register_faces(files, |data| text_system.add_fonts(vec![data]))
}

/// Register each face on its own so one bad file doesn't hide the rest
pub fn register_faces<I, F>(files: I, mut add: F) -> FontResolver
where
    I: IntoIterator<Item = (String, Cow<'static, [u8]>)>,
    F: FnMut(Cow<'static, [u8]>) -> Result<()>,
{
    let mut faces = Vec::new();

    for (face, data) in files {
        match add(data) {
            Ok(()) => {
                debug!(face, "Registered bundled font");
                faces.push(face);
            }
            Err(e) => {
                let err = Error::FontLoad {
                    message: e.to_string(),
                };
                warn!(error = %err, face, "Skipping bundled font");
            }
        }
    }

    if faces.is_empty() {
        info!("No bundled fonts registered, text uses the system font");
    } else {
        info!(count = faces.len(), "Bundled fonts registered");
    }

    FontResolver::new(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_face_name() {
        assert_eq!(font_face_name("fonts/Pretendard-Bold.otf"), Some("Pretendard-Bold"));
        assert_eq!(
            font_face_name("fonts/OTHakgyoansimRikodeoR.TTF"),
            Some("OTHakgyoansimRikodeoR")
        );
    }

    #[test]
    fn test_font_face_name_rejects_other_paths() {
        assert_eq!(font_face_name("fonts/README.md"), None);
        assert_eq!(font_face_name("icons/device.svg"), None);
        assert_eq!(font_face_name("fonts/.otf"), None);
        assert_eq!(font_face_name("fonts/nested/Face.otf"), None);
        assert_eq!(font_face_name("fonts/NoExtension"), None);
    }

    #[test]
    fn test_bundled_faces_are_font_files() {
        // Only files matching the include patterns are embedded
        for face in bundled_faces() {
            assert!(!face.is_empty());
            assert!(!face.contains('.'));
        }
    }

    fn file(face: &str, data: &'static [u8]) -> (String, Cow<'static, [u8]>) {
        (face.to_string(), Cow::Borrowed(data))
    }

    #[test]
    fn test_failed_font_only_drops_its_face() {
        let files = vec![
            file("Pretendard-Medium", b"medium"),
            file("Pretendard-Bold", b"corrupt"),
            file("Pretendard-SemiBold", b"semibold"),
        ];

        let mut attempts = 0;
        let resolver = register_faces(files, |data| {
            attempts += 1;
            if &*data == b"corrupt" {
                Err(anyhow::anyhow!("unsupported font data"))
            } else {
                Ok(())
            }
        });

        assert_eq!(attempts, 3);
        assert_eq!(resolver.face_count(), 2);
        assert!(resolver.has_face("Pretendard-Medium"));
        assert!(resolver.has_face("Pretendard-SemiBold"));
        assert!(!resolver.has_face("Pretendard-Bold"));
    }

    #[test]
    fn test_no_fonts_registered_is_system_only() {
        let resolver = register_faces(Vec::new(), |_| Ok(()));
        assert_eq!(resolver.face_count(), 0);
    }
}
