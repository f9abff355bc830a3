use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

use crate::core::SentimentLabel;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::lavender()
    }
}

impl Theme {
    pub fn lavender() -> Self {
        Theme { dark: ThemeDetails::lavender_night(), light: ThemeDetails::lavender_day() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn title(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).size(30.0).strong()
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn error(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).negative).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    /// Green for positive, red for negative, grey otherwise.
    pub fn label_color(&self, ctx: &egui::Context, label: SentimentLabel) -> Color32 {
        let details = self.details(ctx);
        match label {
            SentimentLabel::Positive => details.positive,
            SentimentLabel::Neutral => details.neutral,
            SentimentLabel::Negative => details.negative,
        }
    }

    pub fn label(&self, ctx: &egui::Context, label: SentimentLabel) -> RichText {
        RichText::new(label.as_str()).color(self.label_color(ctx, label)).strong()
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    panel: Color32,
    raised: Color32,
    foreground: Color32,
    selection: Color32,
    accent: Color32,
    positive: Color32,
    neutral: Color32,
    negative: Color32,
}

impl ThemeDetails {
    fn lavender_night() -> Self {
        Self {
            background: Color32::from_rgb(30, 27, 46),
            panel: Color32::from_rgb(38, 34, 58),
            raised: Color32::from_rgb(55, 50, 82),
            foreground: Color32::from_rgb(236, 233, 245),
            selection: Color32::from_rgb(88, 70, 140),
            accent: Color32::from_rgb(192, 160, 255),
            positive: Color32::from_rgb(74, 222, 128),
            neutral: Color32::from_rgb(156, 163, 175),
            negative: Color32::from_rgb(248, 113, 113),
        }
    }

    fn lavender_day() -> Self {
        Self {
            background: Color32::from_rgb(255, 255, 255),
            panel: Color32::from_rgb(243, 240, 252),
            raised: Color32::from_rgb(233, 228, 250),
            foreground: Color32::from_rgb(55, 65, 81),
            selection: Color32::from_rgb(216, 204, 250),
            accent: Color32::from_rgb(126, 34, 206),
            positive: Color32::from_rgb(22, 163, 74),
            neutral: Color32::from_rgb(107, 114, 128),
            negative: Color32::from_rgb(239, 68, 68),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.raised,
                ),
                inactive: widget(default.widgets.inactive, theme.raised, theme.raised),
                hovered: widget(default.widgets.hovered, theme.selection, theme.accent),
                active: widget(default.widgets.active, theme.selection, theme.accent),
                open: widget(default.widgets.open, theme.panel, theme.accent),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: theme.panel,
            extreme_bg_color: theme.background,
            error_fg_color: theme.negative,
            window_fill: theme.background,
            panel_fill: theme.panel,
            ..default
        },
    );
}
