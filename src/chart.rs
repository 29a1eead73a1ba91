use eframe::epaint::Color32;

/// How a series should look on the chart.
#[derive(Clone, PartialEq, Debug)]
pub struct Style {
    /// Legend entry for the series.
    pub label: String,
    pub color: Color32,
    /// Stroke width of a line series. Ignored for bars.
    pub width: f32,
}

/// The drawing surface the panel renders onto.
pub trait Chart {
    /// Append a connected line through `(xs[i], ys[i])`.
    fn plot_line(&mut self, xs: &[f64], ys: &[f64], style: &Style);
    /// Append one bar of width `bar_width` centred on each `xs[i]`.
    fn plot_bars(&mut self, xs: &[f64], heights: &[f64], bar_width: f64, style: &Style);
    /// Remove every series.
    fn clear(&mut self);
    fn set_grid_visible(&mut self, x: bool, y: bool);
}

#[derive(Clone, PartialEq, Debug)]
pub enum Series {
    Line {
        points: Vec<[f64; 2]>,
        style: Style,
    },
    Bars {
        points: Vec<[f64; 2]>,
        bar_width: f64,
        style: Style,
    },
}

/// A retained [`Chart`]: series accumulate here and are redrawn every frame.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Canvas {
    series: Vec<Series>,
    grid: [bool; 2],
}

impl Series {
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        match self {
            Self::Line { points, .. } | Self::Bars { points, .. } => points,
        }
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Line { style, .. } | Self::Bars { style, .. } => style,
        }
    }

    #[must_use]
    pub fn is_bars(&self) -> bool {
        matches!(self, Self::Bars { .. })
    }
}

impl Canvas {
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn grid(&self) -> [bool; 2] {
        self.grid
    }
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    debug_assert_eq!(xs.len(), ys.len());
    xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
}

impl Chart for Canvas {
    fn plot_line(&mut self, xs: &[f64], ys: &[f64], style: &Style) {
        self.series.push(Series::Line {
            points: zip_points(xs, ys),
            style: style.clone(),
        });
    }

    fn plot_bars(&mut self, xs: &[f64], heights: &[f64], bar_width: f64, style: &Style) {
        self.series.push(Series::Bars {
            points: zip_points(xs, heights),
            bar_width,
            style: style.clone(),
        });
    }

    fn clear(&mut self) {
        self.series.clear();
    }

    fn set_grid_visible(&mut self, x: bool, y: bool) {
        self.grid = [x, y];
    }
}
