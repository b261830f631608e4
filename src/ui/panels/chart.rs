// IncomeScope - ui/panels/chart.rs
//
// The Age vs. Income scatterplot (central area), drawn directly with the
// egui painter: axes, gridlines, one coloured point per filtered row, and
// a per-category legend. Series grouping and axis maths live in
// core::chart; this module only paints.

use crate::app::state::AppState;
use crate::core::chart::{self, ScatterSeries};
use crate::ui::theme;
use egui::{pos2, Align2, FontId, Pos2, Rect, Sense, Stroke};

/// Render the scatterplot panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let series = chart::scatter_series(&state.dataset.rows, &state.filtered_indices);

    if chart::point_count(&series) == 0 {
        render_placeholder(ui, state);
        return;
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let plot = Rect::from_min_max(
        pos2(
            rect.left() + theme::CHART_MARGIN_LEFT,
            rect.top() + theme::CHART_MARGIN_TOP,
        ),
        pos2(
            rect.right() - theme::CHART_MARGIN_RIGHT,
            rect.bottom() - theme::CHART_MARGIN_BOTTOM,
        ),
    );

    let text_colour = theme::chart_text_colour(state.dark_mode);
    let grid_colour = theme::chart_grid_colour(state.dark_mode);
    let label_font = FontId::proportional(12.0);

    // Axis ranges over the filtered points.
    let (age_lo, age_hi, income_lo, income_hi) = data_extent(&series);
    let x_axis = chart::nice_axis(age_lo, age_hi, 8);
    let y_axis = chart::nice_axis(income_lo, income_hi, 6);

    let to_screen = |age: f64, income: f64| -> Pos2 {
        pos2(
            plot.left() + (x_axis.fraction(age) as f32) * plot.width(),
            plot.bottom() - (y_axis.fraction(income) as f32) * plot.height(),
        )
    };

    // Title.
    painter.text(
        pos2(plot.center().x, rect.top() + 12.0),
        Align2::CENTER_CENTER,
        chart::CHART_TITLE,
        FontId::proportional(16.0),
        text_colour,
    );

    // Gridlines and tick labels.
    for &tick in &x_axis.ticks {
        let x = to_screen(tick, y_axis.min).x;
        painter.line_segment(
            [pos2(x, plot.top()), pos2(x, plot.bottom())],
            Stroke::new(1.0, grid_colour),
        );
        painter.text(
            pos2(x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            format!("{tick:.0}"),
            label_font.clone(),
            text_colour,
        );
    }
    for &tick in &y_axis.ticks {
        let y = to_screen(x_axis.min, tick).y;
        painter.line_segment(
            [pos2(plot.left(), y), pos2(plot.right(), y)],
            Stroke::new(1.0, grid_colour),
        );
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format_income(tick),
            label_font.clone(),
            text_colour,
        );
    }

    // Axis lines and captions.
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.5, text_colour),
    );
    painter.line_segment(
        [plot.left_top(), plot.left_bottom()],
        Stroke::new(1.5, text_colour),
    );
    painter.text(
        pos2(plot.center().x, rect.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "Age",
        label_font.clone(),
        text_colour,
    );
    painter.text(
        pos2(rect.left() + 4.0, plot.top() - 8.0),
        Align2::LEFT_BOTTOM,
        "Income ($)",
        label_font.clone(),
        text_colour,
    );

    // Points, coloured by broad racial category.
    for s in &series {
        let colour = theme::race_colour(&s.race);
        for &(age, income) in &s.points {
            painter.circle_filled(to_screen(age, income), theme::POINT_RADIUS, colour);
        }
    }

    // Legend (top-right corner of the plot area).
    let mut legend_y = plot.top() + 4.0;
    for s in &series {
        let colour = theme::race_colour(&s.race);
        let dot = pos2(plot.right() - 86.0, legend_y + 6.0);
        painter.circle_filled(dot, 4.0, colour);
        painter.text(
            pos2(dot.x + 8.0, dot.y),
            Align2::LEFT_CENTER,
            format!("{} ({})", s.race.label(), s.points.len()),
            label_font.clone(),
            text_colour,
        );
        legend_y += 16.0;
    }

    // Hover: show the nearest point's values when the pointer is close.
    if let Some(pointer) = response.hover_pos() {
        if let Some((race, age, income, pos)) = nearest_point(&series, pointer, &to_screen) {
            painter.circle_stroke(pos, theme::POINT_RADIUS + 2.0, Stroke::new(1.5, text_colour));
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                egui::Id::new("chart_hover"),
                |ui| {
                    ui.label(format!("{race}: age {age:.0}, ${income:.0}"));
                },
            );
        }
    }
}

/// Placeholder shown while no points are plottable.
fn render_placeholder(ui: &mut egui::Ui, state: &AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(chart::CHART_TITLE_EMPTY);
    });
    ui.centered_and_justified(|ui| {
        if state.dataset.rows.is_empty() {
            ui.label("No submissions yet. Fill in the form to add the first data point.");
        } else {
            ui.label("No submissions match the current filters.");
        }
    });
}

/// Min/max of age and income across all series points.
fn data_extent(series: &[ScatterSeries]) -> (f64, f64, f64, f64) {
    let mut age_lo = f64::MAX;
    let mut age_hi = f64::MIN;
    let mut income_lo = f64::MAX;
    let mut income_hi = f64::MIN;
    for s in series {
        for &(age, income) in &s.points {
            age_lo = age_lo.min(age);
            age_hi = age_hi.max(age);
            income_lo = income_lo.min(income);
            income_hi = income_hi.max(income);
        }
    }
    (age_lo, age_hi, income_lo, income_hi)
}

/// The point nearest to `pointer`, if within grab distance.
fn nearest_point(
    series: &[ScatterSeries],
    pointer: Pos2,
    to_screen: &impl Fn(f64, f64) -> Pos2,
) -> Option<(&'static str, f64, f64, Pos2)> {
    const GRAB_DISTANCE: f32 = 10.0;

    let mut best: Option<(&'static str, f64, f64, Pos2)> = None;
    let mut best_dist = GRAB_DISTANCE;
    for s in series {
        for &(age, income) in &s.points {
            let pos = to_screen(age, income);
            let dist = pos.distance(pointer);
            if dist < best_dist {
                best_dist = dist;
                best = Some((s.race.label(), age, income, pos));
            }
        }
    }
    best
}

/// Compact income tick label: 1_500_000 -> "1.5M", 52_000 -> "52k".
fn format_income(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_tick_labels() {
        assert_eq!(format_income(0.0), "0");
        assert_eq!(format_income(500.0), "500");
        assert_eq!(format_income(52_000.0), "52k");
        assert_eq!(format_income(1_500_000.0), "1.5M");
    }
}
