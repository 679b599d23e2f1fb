use bitflags::bitflags;

bitflags! {
    /// Controls attached to a viewport.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MapControls: u8 {
        const ZOOM = 1;
        const SCALE = 1 << 1;
    }
}

/// Corner a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// `+` / `-` zoom buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomControl {
    pub position: ControlPosition,
}

impl Default for ZoomControl {
    fn default() -> Self {
        Self {
            position: ControlPosition::TopLeft,
        }
    }
}

/// Metric scale bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleControl {
    pub position: ControlPosition,
    pub metric: bool,
    pub imperial: bool,
    pub max_width: f32,
}

impl Default for ScaleControl {
    fn default() -> Self {
        Self {
            position: ControlPosition::BottomLeft,
            metric: true,
            imperial: false,
            max_width: 150.0,
        }
    }
}

/// Measured scale bar ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    pub meters: f64,
    pub width: f32,
    pub label: String,
}

impl ScaleControl {
    /// Fit the longest round distance into `max_width` pixels.
    pub fn measure(&self, meters_per_pixel: f64) -> Option<ScaleBar> {
        if !self.metric
            || !meters_per_pixel.is_finite()
            || meters_per_pixel <= 0.0
        {
            return None;
        }

        let max_meters = meters_per_pixel * f64::from(self.max_width);
        let meters = round_distance(max_meters);
        let width = (f64::from(self.max_width) * meters / max_meters) as f32;
        let label = if meters < 1000.0 {
            format!("{meters} m")
        } else {
            format!("{} km", meters / 1000.0)
        };

        Some(ScaleBar {
            meters,
            width,
            label,
        })
    }
}

/// Largest 1, 2, 3 or 5 × 10ⁿ not exceeding `value`.
pub fn round_distance(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let pow10 = 10f64.powi(value.log10().floor() as i32);
    let d = value / pow10;
    let d = if d >= 10.0 {
        10.0
    } else if d >= 5.0 {
        5.0
    } else if d >= 3.0 {
        3.0
    } else if d >= 2.0 {
        2.0
    } else {
        1.0
    };
    pow10 * d
}
