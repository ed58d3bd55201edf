//! Specimen View
//!
//! Renders every registered text style with its metrics and resolved face.

use gpui::{Context, IntoElement, Render, SharedString, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, v_flex};

use crate::components::TypographyExt;
use crate::constants::{SPECIMEN_KEY_WIDTH, SPECIMEN_SAMPLE};
use crate::theme::{FontSource, StyleGroup, StyleName, Typography};

/// Type specimen listing all styles grouped by role
pub struct Specimen {
    sample: SharedString,
}

impl Specimen {
    pub fn new() -> Self {
        Self {
            sample: SharedString::from(SPECIMEN_SAMPLE),
        }
    }

    fn render_group(&self, group: StyleGroup, cx: &Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_1()
            .child(
                div()
                    .typography()
                    .footnote()
                    .bold()
                    .text_color(cx.theme().muted_foreground)
                    .child(SharedString::from(group.key().to_uppercase())),
            )
            .children(group.names().into_iter().map(|name| self.render_style(name, cx)))
    }

    fn render_style(&self, name: StyleName, cx: &Context<Self>) -> impl IntoElement {
        let style = name.style();
        let applied = Typography::current().resolve(&style);
        let source = match applied.source {
            FontSource::Bundled => "bundled",
            FontSource::SystemFallback => "system font",
        };
        let metrics = SharedString::from(format!(
            "{} / {}  +{}",
            style.point_size,
            style.line_height,
            style.spacing()
        ));
        let face = SharedString::from(format!("{} ({source})", style.face_name()));

        h_flex()
            .items_start()
            .gap_4()
            .py_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                v_flex()
                    .w(px(SPECIMEN_KEY_WIDTH))
                    .flex_shrink_0()
                    .child(
                        div()
                            .typography()
                            .caption1()
                            .bold()
                            .child(SharedString::from(name.to_string())),
                    )
                    .child(
                        div()
                            .typography()
                            .caption2()
                            .default()
                            .text_color(cx.theme().muted_foreground)
                            .child(metrics),
                    )
                    .child(
                        div()
                            .typography()
                            .caption2()
                            .default()
                            .text_color(cx.theme().muted_foreground)
                            .child(face),
                    ),
            )
            .child(div().flex_1().text_style_named(name).child(self.sample.clone()))
    }
}

impl Default for Specimen {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Specimen {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let typography = Typography::current();
        let summary = SharedString::from(format!(
            "{} bundled faces, text scale {}",
            typography.resolver().face_count(),
            typography.scale()
        ));

        v_flex()
            .id("specimen")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .gap_6()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(
                v_flex()
                    .child(div().typography().title1().bold().child("Typekit"))
                    .child(
                        div()
                            .typography()
                            .callout()
                            .default()
                            .text_color(cx.theme().muted_foreground)
                            .child(summary),
                    ),
            )
            .children(StyleGroup::ALL.into_iter().map(|group| self.render_group(group, cx)))
    }
}
