mod plotting_utils;
mod series_table;

use eframe::egui::{CentralPanel, ComboBox, Context, Grid, SidePanel, TextEdit, Ui};
use eframe::epaint::Color32;
use itertools::Itertools;

use crate::config::Settings;
use crate::numerics::distribution::Kind;
use crate::panel::{self, DistributionPanel};

pub struct DistPlot {
    panel: DistributionPanel,
}

impl DistPlot {
    const FIELD_WIDTH: f32 = 120.;

    #[must_use]
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing.y = 5.;
        style.spacing.combo_width = 200.;
        cc.egui_ctx.set_style(style);

        Self {
            panel: DistributionPanel::new(settings),
        }
    }

    fn on_select(&mut self, index: usize) {
        if let Err(e) = self.panel.select_distribution(index) {
            tracing::error!(error = %e, "selector offered an invalid distribution");
            if cfg!(debug_assertions) {
                panic!("{e}");
            }
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.heading("Distributions");

        ui.separator();

        let mut selected = self.panel.selected();
        ui.horizontal(|ui| {
            let spec = self.panel.selected_spec();
            ComboBox::from_id_source("distribution_selector")
                .selected_text(spec.name)
                .show_ui(ui, |ui| {
                    for (i, name) in panel::list_distributions().enumerate() {
                        ui.selectable_value(&mut selected, i, name);
                    }
                });
            ui.label(spec.kind.name());
        });
        if selected != self.panel.selected() {
            self.on_select(selected);
        }

        let x_hint = match self.panel.selected_spec().kind {
            Kind::Continuous => "Upper limit of the plotted range, starting from 0",
            Kind::Discrete => "Number of outcomes to plot, starting from 0",
        };
        let visible = self.panel.visible_params().collect_vec();
        Grid::new("controls_inputs")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("x:").on_hover_text(x_hint);
                ui.add(
                    TextEdit::singleline(self.panel.x_bound_text_mut())
                        .desired_width(Self::FIELD_WIDTH),
                );
                ui.end_row();

                for parameter in visible {
                    ui.label(format!("{parameter}:"));
                    ui.add(
                        TextEdit::singleline(self.panel.param_text_mut(parameter))
                            .desired_width(Self::FIELD_WIDTH),
                    );
                    ui.end_row();
                }
            });

        ui.horizontal(|ui| {
            if ui
                .button("Show Graph")
                .on_hover_text("Add the selected distribution to the chart")
                .clicked()
            {
                self.panel.show_graph();
            }
            if ui
                .button("Clear Graph")
                .on_hover_text("Remove everything drawn so far")
                .clicked()
            {
                self.panel.clear_chart();
            }
        });

        match self.panel.error() {
            Some(message) => {
                ui.colored_label(Color32::RED, message);
            }
            None => {
                ui.label(format!("{} series drawn", self.panel.chart().series().len()));
            }
        }
    }
}

impl eframe::App for DistPlot {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        SidePanel::right("controls")
            .min_width(ctx.available_rect().width() * 0.3)
            .resizable(false)
            .show(ctx, |ui| {
                self.controls(ui);
                if self.panel.chart().series().is_empty() {
                    return;
                }
                ui.separator();
                series_table::show(ui, self.panel.chart().series());
            });

        CentralPanel::default().show(ctx, |ui| {
            plotting_utils::show_canvas(ui, self.panel.chart());
        });
    }
}
