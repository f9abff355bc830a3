use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    Pos2,
    Rect,
    Sense,
    Stroke,
};

use crate::core::BarData;

const CHART_MAX_WIDTH: f32 = 420.0;
const CHART_HEIGHT: f32 = 220.0;
const TITLE_HEIGHT: f32 = 22.0;
const AXIS_WIDTH: f32 = 34.0;
const LABEL_HEIGHT: f32 = 20.0;
const BAR_FILL_RATIO: f32 = 0.6;
const BAR_CORNER_RADIUS: f32 = 8.0;
const Y_TICKS: usize = 5;

/// Vertical bar chart for one set of sentiment scores. The y axis is fixed
/// to `0..=1`.
pub struct SentimentChart<'a> {
    data: &'a BarData,
}

impl<'a> SentimentChart<'a> {
    pub fn new(data: &'a BarData) -> Self {
        Self { data }
    }
}

impl egui::Widget for SentimentChart<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let width = ui.available_width().min(CHART_MAX_WIDTH);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let grid_color = ui.visuals().weak_text_color().gamma_multiply(0.4);

        painter.text(
            Pos2::new(rect.center().x, rect.top() + TITLE_HEIGHT / 2.0),
            Align2::CENTER_CENTER,
            self.data.title,
            FontId::proportional(14.0),
            text_color,
        );

        let plot = plot_area(rect);

        for tick in 0..=Y_TICKS {
            let value = tick as f32 / Y_TICKS as f32;
            let y = plot.bottom() - value * plot.height();
            painter.line_segment(
                [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                Stroke::new(1.0, grid_color),
            );
            painter.text(
                Pos2::new(plot.left() - 4.0, y),
                Align2::RIGHT_CENTER,
                format!("{value:.1}"),
                FontId::proportional(11.0),
                text_color,
            );
        }

        let bars = bar_rects(plot, &self.data.values);
        let mut hovered: Option<usize> = None;

        for (i, bar) in bars.iter().enumerate() {
            let [r, g, b, a] = self.data.colors[i];
            painter.rect_filled(
                *bar,
                BAR_CORNER_RADIUS,
                Color32::from_rgba_unmultiplied(r, g, b, a),
            );
            painter.text(
                Pos2::new(bar.center().x, plot.bottom() + LABEL_HEIGHT / 2.0),
                Align2::CENTER_CENTER,
                self.data.labels[i],
                FontId::proportional(12.0),
                text_color,
            );

            if response.hover_pos().is_some_and(|pos| column_rect(plot, i).contains(pos)) {
                hovered = Some(i);
            }
        }

        match hovered {
            Some(i) => response.on_hover_text(format!(
                "{}: {:.3}",
                self.data.labels[i], self.data.values[i]
            )),
            None => response,
        }
    }
}

fn plot_area(rect: Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.left() + AXIS_WIDTH, rect.top() + TITLE_HEIGHT),
        Pos2::new(rect.right() - 4.0, rect.bottom() - LABEL_HEIGHT),
    )
}

fn column_rect(plot: Rect, index: usize) -> Rect {
    let slot = plot.width() / 3.0;
    let left = plot.left() + slot * index as f32;
    Rect::from_min_max(Pos2::new(left, plot.top()), Pos2::new(left + slot, plot.bottom()))
}

/// Bar geometry inside `plot`, left to right in value order. Values are
/// clamped to the axis range.
pub fn bar_rects(plot: Rect, values: &[f64; 3]) -> [Rect; 3] {
    std::array::from_fn(|i| {
        let column = column_rect(plot, i);
        let bar_width = column.width() * BAR_FILL_RATIO;
        let value = values[i].clamp(0.0, 1.0) as f32;
        let top = plot.bottom() - value * plot.height();

        Rect::from_min_max(
            Pos2::new(column.center().x - bar_width / 2.0, top),
            Pos2::new(column.center().x + bar_width / 2.0, plot.bottom()),
        )
    })
}
