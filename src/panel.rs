use std::array;

use itertools::Itertools;

use crate::chart::{Canvas, Chart, Style};
use crate::config::Settings;
use crate::error::{Error, Field};
use crate::numerics::distribution::{
    self, DistributionSpec, Kind, ParamValues, Parameter, CATALOG,
};

/// The text field backing one [`Parameter`]. Hidden fields keep their text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParamField {
    pub visible: bool,
    pub text: String,
}

/// Names of the selectable distributions, in catalog order.
pub fn list_distributions() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|spec| spec.name)
}

/// The distribution selector, its input fields and the chart they draw onto.
#[derive(Debug)]
pub struct DistributionPanel<C = Canvas> {
    settings: Settings,
    catalog: &'static [DistributionSpec],
    selected: usize,
    fields: [ParamField; Parameter::COUNT],
    x_bound: String,
    chart: C,
    /// Message describing why the last compute failed, if it did.
    error: Option<String>,
}

impl DistributionPanel {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_chart(settings, Canvas::default())
    }
}

impl<C: Chart> DistributionPanel<C> {
    #[must_use]
    pub fn with_chart(settings: Settings, chart: C) -> Self {
        Self::with_catalog(settings, chart, &CATALOG)
    }

    /// A panel offering `catalog` instead of the built-in [`CATALOG`].
    ///
    /// # Panics
    /// If `catalog` is empty.
    #[must_use]
    pub fn with_catalog(
        settings: Settings,
        chart: C,
        catalog: &'static [DistributionSpec],
    ) -> Self {
        assert!(!catalog.is_empty(), "distribution catalog is empty");
        let fields = array::from_fn(|_| ParamField {
            visible: false,
            text: settings.param_text.clone(),
        });
        let mut panel = Self {
            x_bound: settings.x_bound_text.clone(),
            settings,
            catalog,
            selected: 0,
            fields,
            chart,
            error: None,
        };
        panel.apply_visibility();
        panel
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_spec(&self) -> &'static DistributionSpec {
        &self.catalog[self.selected]
    }

    pub fn select_distribution(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.catalog.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.catalog.len(),
            });
        }
        if index != self.selected {
            tracing::debug!(from = self.selected, to = index, "distribution selected");
        }
        self.selected = index;
        self.apply_visibility();
        Ok(())
    }

    fn apply_visibility(&mut self) {
        for field in &mut self.fields {
            field.visible = false;
        }
        for &parameter in self.selected_spec().params {
            self.fields[parameter.index()].visible = true;
        }
    }

    #[must_use]
    pub fn field(&self, parameter: Parameter) -> &ParamField {
        &self.fields[parameter.index()]
    }

    pub fn param_text_mut(&mut self, parameter: Parameter) -> &mut String {
        &mut self.fields[parameter.index()].text
    }

    /// Parameters whose fields are currently shown, in declaration order.
    pub fn visible_params(&self) -> impl Iterator<Item = Parameter> + '_ {
        Parameter::ALL
            .into_iter()
            .filter(move |&p| self.field(p).visible)
    }

    pub fn x_bound_text_mut(&mut self) -> &mut String {
        &mut self.x_bound
    }

    #[must_use]
    pub fn chart(&self) -> &C {
        &self.chart
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Parse the x-bound field. Only whole numbers are accepted, and a discrete bound must
    /// also lie within `0..=Settings::max_discrete_bound`.
    pub fn read_x_bound(&self, kind: Kind) -> Result<i64, Error> {
        let text = self.x_bound.trim();
        if text.is_empty() {
            return Err(Error::invalid_input(Field::XBound, "no value entered"));
        }
        let bound = text.parse::<i64>().map_err(|_| {
            let reason = if text.parse::<f64>().is_ok() {
                "must be a whole number"
            } else {
                "not a number"
            };
            Error::invalid_input(Field::XBound, reason)
        })?;
        if kind == Kind::Discrete && bound < 0 {
            return Err(Error::invalid_input(Field::XBound, "must not be negative"));
        }
        if kind == Kind::Discrete && bound > self.settings.max_discrete_bound {
            return Err(Error::invalid_input(
                Field::XBound,
                format!("must be at most {}", self.settings.max_discrete_bound),
            ));
        }
        Ok(bound)
    }

    /// Parse the text of a visible parameter field.
    ///
    /// # Panics
    /// If the field is hidden, i.e. the selected distribution does not declare `parameter`.
    pub fn read_param(&self, parameter: Parameter) -> Result<f64, Error> {
        let field = self.field(parameter);
        assert!(field.visible, "read of hidden parameter field `{parameter}`");
        let text = field.text.trim();
        if text.is_empty() {
            return Err(Error::invalid_input(Field::Param(parameter), "no value entered"));
        }
        text.parse::<f64>()
            .map_err(|e| Error::invalid_input(Field::Param(parameter), e))
    }

    /// Parse the inputs, evaluate the selected distribution and append the result to the chart.
    /// On any error the chart is left untouched.
    pub fn compute(&mut self) -> Result<(), Error> {
        let spec = self.selected_spec();

        // Parsing.
        let bound = self.read_x_bound(spec.kind)?;
        let params = spec
            .params
            .iter()
            .map(|&p| self.read_param(p).map(|value| (p, value)))
            .collect::<Result<ParamValues, _>>()?;

        // Evaluating.
        let xs = distribution::generate_range(spec.kind, bound, self.settings.samples);
        let ys = spec.evaluate_checked(&xs, &params)?;

        // Rendering.
        let label = series_label(spec, &params);
        match spec.kind {
            Kind::Continuous => {
                let style = Style {
                    label,
                    color: self.settings.line_color,
                    width: self.settings.line_width,
                };
                self.chart.plot_line(&xs, &ys, &style);
            }
            Kind::Discrete => {
                let style = Style {
                    label,
                    color: self.settings.bar_color,
                    width: 0.,
                };
                self.chart
                    .plot_bars(&xs, &ys, self.settings.bar_width, &style);
            }
        }
        self.chart.set_grid_visible(true, true);
        tracing::info!(distribution = spec.name, bound, points = xs.len(), "series drawn");
        Ok(())
    }

    /// Handler for the "Show Graph" action: runs [`compute`](Self::compute) and records any
    /// failure for display instead of propagating it.
    pub fn show_graph(&mut self) {
        match self.compute() {
            Ok(()) => self.error = None,
            Err(e) => {
                tracing::warn!(error = %e, "compute aborted");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Handler for the "Clear Graph" action.
    pub fn clear_chart(&mut self) {
        self.chart.clear();
        tracing::debug!("chart cleared");
    }
}

fn series_label(spec: &DistributionSpec, params: &ParamValues) -> String {
    if params.iter().next().is_none() {
        return spec.name.to_owned();
    }
    let params = params
        .iter()
        .map(|(p, value)| format!("{} = {}", p.symbol(), format_value(value)))
        .join(", ");
    format!("{} ({params})", spec.name)
}

fn format_value(x: f64) -> String {
    if approx::relative_eq!(x, x.round()) {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::chart::Series;
    use crate::error::EvaluationFault;

    const EXPONENTIAL: usize = 0;
    const POISSON: usize = 1;

    fn panel() -> DistributionPanel {
        DistributionPanel::new(Settings::default())
    }

    fn visible(panel: &DistributionPanel) -> Vec<Parameter> {
        panel.visible_params().collect_vec()
    }

    #[test]
    fn lists_catalog_in_order() {
        assert_eq!(
            list_distributions().collect_vec(),
            ["exponential distribution", "poisson distribution"]
        );
    }

    #[test]
    fn initial_selection_shows_its_params() {
        let panel = panel();
        assert_eq!(panel.selected(), 0);
        assert_eq!(visible(&panel), CATALOG[0].params);
    }

    #[test]
    fn select_is_idempotent() {
        let mut panel = panel();
        *panel.param_text_mut(Parameter::Lambda) = "2.5".to_owned();
        panel.select_distribution(POISSON).unwrap();
        let once = (panel.selected(), panel.field(Parameter::Lambda).clone());
        panel.select_distribution(POISSON).unwrap();
        let twice = (panel.selected(), panel.field(Parameter::Lambda).clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn select_preserves_field_text() {
        let mut panel = panel();
        *panel.param_text_mut(Parameter::Lambda) = "4".to_owned();
        panel.select_distribution(POISSON).unwrap();
        assert_eq!(visible(&panel), CATALOG[POISSON].params);
        panel.select_distribution(EXPONENTIAL).unwrap();
        assert_eq!(panel.field(Parameter::Lambda).text, "4");
    }

    #[test]
    fn out_of_range_selection_leaves_state() {
        let mut panel = panel();
        panel.select_distribution(POISSON).unwrap();
        assert_eq!(
            panel.select_distribution(99),
            Err(Error::OutOfRange { index: 99, len: 2 })
        );
        assert_eq!(panel.selected(), POISSON);
        assert_eq!(visible(&panel), CATALOG[POISSON].params);
    }

    #[test]
    fn x_bound_parsing() {
        let mut panel = panel();
        let mut read = |text: &str, kind| {
            *panel.x_bound_text_mut() = text.to_owned();
            panel.read_x_bound(kind)
        };
        assert_eq!(read("5", Kind::Discrete), Ok(5));
        assert_eq!(read(" 12 ", Kind::Continuous), Ok(12));
        assert_eq!(read("-3", Kind::Continuous), Ok(-3));
        for bad in ["", "   ", "abc", "2.5", "0.0"] {
            for kind in [Kind::Discrete, Kind::Continuous] {
                assert!(matches!(
                    read(bad, kind),
                    Err(Error::InvalidInput {
                        field: Field::XBound,
                        ..
                    })
                ));
            }
        }
        assert!(matches!(
            read("-1", Kind::Discrete),
            Err(Error::InvalidInput {
                field: Field::XBound,
                ..
            })
        ));
    }

    #[test]
    fn param_parsing() {
        let mut panel = panel();
        let mut read = |text: &str| {
            *panel.param_text_mut(Parameter::Lambda) = text.to_owned();
            panel.read_param(Parameter::Lambda)
        };
        assert_eq!(read("3.0"), Ok(3.0));
        assert_eq!(read("-0.5"), Ok(-0.5));
        for bad in ["", "lambda", "1,5"] {
            assert!(matches!(
                read(bad),
                Err(Error::InvalidInput {
                    field: Field::Param(Parameter::Lambda),
                    ..
                })
            ));
        }
    }

    #[test]
    fn poisson_end_to_end() {
        let mut panel = panel();
        panel.select_distribution(POISSON).unwrap();
        *panel.x_bound_text_mut() = "5".to_owned();
        *panel.param_text_mut(Parameter::Lambda) = "3.0".to_owned();
        panel.show_graph();

        assert_eq!(panel.error(), None);
        let series = panel.chart().series();
        assert_eq!(series.len(), 1);
        let Series::Bars { points, bar_width, style } = &series[0] else {
            panic!("expected a bar series, got {:?}", series[0]);
        };
        assert_eq!(points.iter().map(|p| p[0]).collect_vec(), [0., 1., 2., 3., 4.]);
        assert_eq!(*bar_width, 0.7);
        assert_eq!(style.label, "poisson distribution (λ = 3)");
        assert_eq!(panel.chart().grid(), [true, true]);

        panel.clear_chart();
        assert!(panel.chart().series().is_empty());
    }

    #[test]
    fn exponential_appends_lines() {
        let mut panel = panel();
        *panel.x_bound_text_mut() = "4".to_owned();
        *panel.param_text_mut(Parameter::Lambda) = "2".to_owned();
        panel.show_graph();
        *panel.param_text_mut(Parameter::Lambda) = "0.5".to_owned();
        panel.show_graph();

        let series = panel.chart().series();
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| !s.is_bars()));
        assert_eq!(series[0].points().len(), 50);
        assert_eq!(series[0].points()[0], [0., 2.]);
        assert_eq!(series[1].style().label, "exponential distribution (λ = 0.5)");
    }

    #[test]
    fn invalid_input_leaves_chart_untouched() {
        let mut panel = panel();
        *panel.x_bound_text_mut() = "3".to_owned();
        *panel.param_text_mut(Parameter::Lambda) = "1".to_owned();
        panel.show_graph();
        let before = panel.chart().clone();

        *panel.param_text_mut(Parameter::Lambda) = "one".to_owned();
        panel.show_graph();
        assert_eq!(panel.chart(), &before);
        assert!(panel.error().unwrap().contains("lambda"));

        *panel.param_text_mut(Parameter::Lambda) = "1".to_owned();
        *panel.x_bound_text_mut() = String::new();
        panel.show_graph();
        assert_eq!(panel.chart(), &before);
        assert!(panel.error().is_some());

        *panel.x_bound_text_mut() = "3".to_owned();
        panel.show_graph();
        assert_eq!(panel.error(), None);
        assert_eq!(panel.chart().series().len(), 2);
    }

    #[test]
    fn compute_reports_error_kind() {
        let mut panel = panel();
        *panel.x_bound_text_mut() = "x".to_owned();
        assert!(matches!(
            panel.compute(),
            Err(Error::InvalidInput {
                field: Field::XBound,
                ..
            })
        ));
        let fault: Error = EvaluationFault::InvalidArgument { x: 0.5 }.into();
        assert!(matches!(fault, Error::EvaluationFault(_)));
    }

    fn always_faults(_: &[f64], _: &ParamValues) -> Result<Vec<f64>, EvaluationFault> {
        Err(EvaluationFault::InvalidArgument { x: 0.0 })
    }

    static FAULTY: [DistributionSpec; 1] = [DistributionSpec {
        name: "faulty distribution",
        params: &[Parameter::Lambda],
        kind: Kind::Continuous,
        evaluate: always_faults,
    }];

    #[test]
    fn evaluation_fault_leaves_chart_untouched() {
        let mut panel =
            DistributionPanel::with_catalog(Settings::default(), Canvas::default(), &FAULTY);
        *panel.x_bound_text_mut() = "3".to_owned();
        *panel.param_text_mut(Parameter::Lambda) = "1".to_owned();
        assert!(matches!(panel.compute(), Err(Error::EvaluationFault(_))));

        panel.show_graph();
        assert!(panel.chart().series().is_empty());
        assert_eq!(panel.chart().grid(), [false; 2]);
        assert!(panel.error().unwrap().starts_with("could not evaluate distribution"));
    }

    #[test]
    fn huge_discrete_bound_is_rejected() {
        let mut panel = panel();
        panel.select_distribution(POISSON).unwrap();
        *panel.param_text_mut(Parameter::Lambda) = "3".to_owned();
        *panel.x_bound_text_mut() = "4".to_owned();
        panel.show_graph();
        let before = panel.chart().clone();

        *panel.x_bound_text_mut() = "100000000000".to_owned();
        assert!(matches!(
            panel.read_x_bound(Kind::Discrete),
            Err(Error::InvalidInput {
                field: Field::XBound,
                ..
            })
        ));
        panel.show_graph();
        assert_eq!(panel.chart(), &before);
        assert!(panel.error().unwrap().contains("at most"));

        // Continuous ranges have a fixed sample count, so their bound is not capped.
        assert_eq!(panel.read_x_bound(Kind::Continuous), Ok(100_000_000_000));
    }

    #[test]
    fn discrete_bound_limit_comes_from_settings() {
        let settings = Settings {
            max_discrete_bound: 20,
            ..Settings::default()
        };
        let mut panel = DistributionPanel::new(settings);
        *panel.x_bound_text_mut() = "20".to_owned();
        assert_eq!(panel.read_x_bound(Kind::Discrete), Ok(20));
        *panel.x_bound_text_mut() = "21".to_owned();
        assert!(panel.read_x_bound(Kind::Discrete).is_err());
    }

    #[test]
    #[should_panic(expected = "catalog is empty")]
    fn empty_catalog_panics() {
        let _ = DistributionPanel::with_catalog(Settings::default(), Canvas::default(), &[]);
    }

    #[test]
    fn clear_always_succeeds() {
        let mut panel = panel();
        panel.clear_chart();
        assert!(panel.chart().series().is_empty());
    }

    #[test]
    fn empty_discrete_range_draws_empty_series() {
        let mut panel = panel();
        panel.select_distribution(POISSON).unwrap();
        *panel.x_bound_text_mut() = "0".to_owned();
        *panel.param_text_mut(Parameter::Lambda) = "1".to_owned();
        panel.show_graph();
        assert_eq!(panel.error(), None);
        assert!(panel.chart().series()[0].points().is_empty());
    }

    #[test]
    #[should_panic(expected = "hidden")]
    fn reading_hidden_field_panics() {
        let mut panel = panel();
        panel.fields[Parameter::Lambda.index()].visible = false;
        let _ = panel.read_param(Parameter::Lambda);
    }
}
