use eframe::egui::{Align, Layout, TextStyle, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::Series;

/// List the series currently on the chart.
pub(super) fn show(ui: &mut Ui, series: &[Series]) {
    let row_height = ui.text_style_height(&TextStyle::Body) + ui.spacing().item_spacing.y;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto_with_initial_suggestion(20.))
        .columns(Column::auto(), 2)
        .column(Column::remainder())
        .header(row_height, |mut header| {
            header.col(|_ui| {});
            header.col(|ui| {
                ui.strong("Style");
            });
            header.col(|ui| {
                ui.strong("Points");
            });
            header.col(|ui| {
                ui.strong("Distribution");
            });
        })
        .body(|mut body| {
            for (i, series) in series.iter().enumerate() {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label((i + 1).to_string());
                    });
                    row.col(|ui| {
                        ui.label(if series.is_bars() { "bars" } else { "line" });
                    });
                    row.col(|ui| {
                        ui.label(series.points().len().to_string());
                    });
                    row.col(|ui| {
                        let style = series.style();
                        ui.colored_label(style.color, style.label.as_str());
                    });
                });
            }
        });
}
