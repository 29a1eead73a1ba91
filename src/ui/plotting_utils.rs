use eframe::egui::plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, PlotUi};
use eframe::egui::Ui;

use crate::chart::{Canvas, Series};

/// Draw every series retained by `canvas`, oldest first.
pub(super) fn show_canvas(ui: &mut Ui, canvas: &Canvas) {
    Plot::new("distribution_plot")
        .legend(Legend::default())
        .show_axes(canvas.grid())
        .include_x(0.)
        .include_y(0.)
        .show(ui, |plot_ui| {
            for series in canvas.series() {
                draw_series(plot_ui, series);
            }
        });
}

fn draw_series(plot_ui: &mut PlotUi, series: &Series) {
    match series {
        Series::Line { points, style } => plot_ui.line(
            Line::new(PlotPoints::from(points.clone()))
                .color(style.color)
                .width(style.width)
                .name(&style.label),
        ),
        Series::Bars {
            points,
            bar_width,
            style,
        } => {
            let bars = points
                .iter()
                .map(|&[x, height]| Bar::new(x, height).width(*bar_width).fill(style.color))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(style.color).name(&style.label));
        }
    }
}
