//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use tracing::{error, info};

use crate::assets::{Assets, register_bundled_fonts};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::states::TypographySettings;
use crate::theme::{FontResolver, Typography};
use crate::views::Specimen;

actions!(typekit, [Quit]);

/// Build the typography the settings ask for.
///
/// `register` is only called when bundled fonts are enabled.
pub fn typography_for(
    settings: &TypographySettings,
    register: impl FnOnce() -> FontResolver,
) -> Typography {
    let resolver = if settings.bundled_fonts() {
        register()
    } else {
        info!("Bundled fonts disabled in settings");
        FontResolver::system_only()
    };

    Typography::new(resolver, settings.text_scale().factor())
}

/// Register fonts and install the process-wide typography
pub fn init_typography(settings: &TypographySettings, cx: &mut App) {
    typography_for(settings, || register_bundled_fonts(cx.text_system())).install();
}

/// Run the specimen application
pub fn run_app(settings: TypographySettings) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        init_typography(&settings, cx);

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Typekit")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| cx.new(|_cx| Specimen::new()));
        if let Err(e) = opened {
            error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
