use super::ChartLayout;

/// Maps sample indices and values into canvas pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    layout: ChartLayout,
    count: usize,
    low: f64,
    high: f64,
}

impl CoordinateMapper {
    pub fn new(layout: ChartLayout, count: usize, low: f64, high: f64) -> Self {
        CoordinateMapper {
            layout,
            count,
            low,
            high,
        }
    }

    /// A single-sample series sits on the left margin.
    pub fn x(&self, index: usize) -> f64 {
        let span = self.count.saturating_sub(1).max(1) as f64;
        self.layout.margin.left + (index as f64 / span) * self.layout.plot_width()
    }

    /// Larger values map to smaller y. A flat series sits on the vertical midline.
    pub fn y(&self, value: f64) -> f64 {
        let top = self.layout.margin.top;
        let height = self.layout.plot_height();
        if self.high == self.low {
            return top + height / 2.0;
        }
        let ratio = (value - self.low) / (self.high - self.low);
        top + (1.0 - ratio) * height
    }

    pub fn point(&self, index: usize, value: f64) -> (f64, f64) {
        (self.x(index), self.y(value))
    }

    pub fn baseline(&self) -> f64 {
        self.layout.height - self.layout.margin.bottom
    }
}
