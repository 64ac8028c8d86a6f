//! Page cards drawn over the backdrop with egui.

use egui::{Align2, Color32, RichText};

use crate::page::{
    articles, profile, CardTransition, Heading, Icon, TabBar, ABOUT_HEADING, ARTICLES_HEADING, CODE_EXAMPLE, CODE_HEADING,
    PAGE_HEADING, PROFILE_HEADING,
};

const ACCENT: Color32 = Color32::from_rgb(94, 234, 212);
const CONTENT_TOP: f32 = 150.0;

/// Translucent dark cards with a faint white border.
pub fn style() -> egui::Style {
    let mut style = egui::Style::default();
    style.visuals = egui::Visuals::dark();
    style.visuals.window_fill = Color32::from_rgba_unmultiplied(0, 0, 0, 77);
    style.visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 51));
    style.visuals.window_shadow = egui::Shadow::NONE;
    style.visuals.popup_shadow = egui::Shadow::NONE;
    style
}

/// The landing page overlay: header, tabs, content card, code example,
/// profile and recent articles.
#[derive(Debug, Default)]
pub struct PageOverlay {
    pub tabs: TabBar,
    transition: CardTransition,
}

impl PageOverlay {
    pub fn new(tabs: TabBar) -> Self {
        Self {
            tabs,
            transition: CardTransition::default(),
        }
    }

    /// Switch tabs. The content card slides in again only when the active
    /// tab actually changes.
    pub fn select_tab(&mut self, id: &str) -> bool {
        let changed = !self.tabs.is_active(id);
        let known = self.tabs.select(id);
        if known && changed {
            self.transition.restart();
        }
        known
    }

    /// Opacity and horizontal offset of the content card at `now` seconds.
    pub fn content_transition(&mut self, now: f64) -> (f32, f32) {
        self.transition.sample(now)
    }

    /// Lay out every card for this frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.header(ctx);
        self.content_card(ctx);
        code_card(ctx);
        profile_card(ctx);
        articles_card(ctx);
    }

    fn header(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        egui::Window::new("header")
            .title_bar(false)
            .anchor(Align2::CENTER_TOP, [0.0, 24.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(PAGE_HEADING.label()).size(40.0).strong().color(Color32::WHITE));
                });
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    for post in self.tabs.posts() {
                        let text = format!("{} {}", post.icon.glyph(), post.title);
                        if ui.selectable_label(self.tabs.is_active(post.id), text).clicked() {
                            clicked = Some(post.id);
                        }
                    }
                });
            });
        if let Some(id) = clicked {
            self.select_tab(id);
        }
    }

    fn content_card(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let (opacity, offset) = self.content_transition(now);
        let frame = egui::Frame::window(&ctx.style()).multiply_with_opacity(opacity);

        // keyed on the active tab
        let id = self.tabs.active().map_or("", |post| post.id);
        egui::Window::new("content")
            .id(egui::Id::new(("content", id)))
            .title_bar(false)
            .frame(frame)
            .anchor(Align2::CENTER_TOP, [offset, CONTENT_TOP])
            .resizable(false)
            .collapsible(false)
            .default_width(640.0)
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                if let Some(post) = self.tabs.active() {
                    ui.label(
                        RichText::new(format!("{} {}", post.icon.glyph(), post.title))
                            .size(24.0)
                            .color(ACCENT),
                    );
                }
                ui.label(self.tabs.body_text());
            });

        if !self.transition.is_finished(now) {
            ctx.request_repaint();
        }
    }
}

fn card_heading(ui: &mut egui::Ui, heading: Heading, size: f32) {
    ui.label(RichText::new(heading.label()).size(size).strong().color(ACCENT));
}

fn code_card(ctx: &egui::Context) {
    egui::Window::new(CODE_HEADING.text)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [24.0, -24.0])
        .resizable(false)
        .collapsible(false)
        .default_width(420.0)
        .show(ctx, |ui| {
            card_heading(ui, CODE_HEADING, 20.0);
            ui.code(CODE_EXAMPLE);
        });
}

fn profile_card(ctx: &egui::Context) {
    egui::Window::new(PROFILE_HEADING.text)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-24.0, CONTENT_TOP])
        .resizable(false)
        .collapsible(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            let profile = profile();
            card_heading(ui, PROFILE_HEADING, 20.0);
            ui.label(format!("{} {}", Icon::User.glyph(), profile.name));
            ui.label(format!("{} {}", Icon::Mail.glyph(), profile.email));
            for link in profile.links {
                ui.horizontal(|ui| {
                    ui.label(link.icon.glyph());
                    ui.hyperlink_to(link.label, link.url);
                });
            }
            ui.add_space(8.0);
            card_heading(ui, ABOUT_HEADING, 16.0);
            ui.label(profile.about);
        });
}

fn articles_card(ctx: &egui::Context) {
    egui::Window::new(ARTICLES_HEADING.text)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-24.0, -24.0])
        .resizable(false)
        .collapsible(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            card_heading(ui, ARTICLES_HEADING, 20.0);
            ui.separator();
            for article in articles() {
                ui.horizontal(|ui| {
                    if ui.link(article.title).clicked() {
                        tracing::info!(link = article.link, "article opened");
                    }
                    ui.label(RichText::new(article.date).weak());
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_change_replays_transition() {
        let mut overlay = PageOverlay::default();
        overlay.content_transition(0.0);
        assert_eq!(overlay.content_transition(2.0), (1.0, 0.0));

        let other = overlay.tabs.posts()[1].id;
        assert!(overlay.select_tab(other));
        assert_eq!(overlay.content_transition(3.0), (0.0, CardTransition::START_OFFSET));
        assert_eq!(overlay.content_transition(3.5), (1.0, 0.0));
    }

    #[test]
    fn test_same_tab_keeps_transition() {
        let mut overlay = PageOverlay::default();
        overlay.content_transition(0.0);
        let active = overlay.tabs.active().map(|post| post.id).unwrap();

        assert!(overlay.select_tab(active));
        assert!(!overlay.select_tab("missing"));
        assert_eq!(overlay.content_transition(2.0), (1.0, 0.0));
    }

    #[test]
    fn test_show_lays_out_without_input() {
        let ctx = egui::Context::default();
        ctx.set_style(style());
        let mut overlay = PageOverlay::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| overlay.show(ctx));
        assert!(!overlay.transition.is_finished(0.0));
    }

    #[test]
    fn test_style_is_translucent() {
        let style = style();
        assert!(style.visuals.window_fill.a() < 255);
        assert_eq!(style.visuals.window_shadow, egui::Shadow::NONE);
    }
}
