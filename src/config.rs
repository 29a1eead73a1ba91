use eframe::epaint::{Color32, Vec2};

/// Presentation settings for the panel and its chart.
#[derive(Clone, PartialEq, Debug)]
pub struct Settings {
    /// Number of points sampled over a continuous range.
    pub samples: usize,
    /// Width of each bar of a discrete series, in x units.
    pub bar_width: f64,
    /// Largest accepted bound for a discrete range, i.e. the most bars one series may hold.
    pub max_discrete_bound: i64,
    pub line_width: f32,
    pub line_color: Color32,
    pub bar_color: Color32,
    pub window_size: Vec2,
    /// Initial contents of the x-bound field.
    pub x_bound_text: String,
    /// Initial contents of every parameter field.
    pub param_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            samples: 50,
            bar_width: 0.7,
            max_discrete_bound: 1_000_000,
            line_width: 3.,
            line_color: Color32::RED,
            bar_color: Color32::BLUE,
            window_size: Vec2 { x: 800., y: 600. },
            x_bound_text: "10".to_owned(),
            param_text: "0.0".to_owned(),
        }
    }
}
