// Trend of a current value against a baseline
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// `current - baseline`.
    pub delta: f64,
    /// Delta as a percentage of the baseline. `None` when the baseline is
    /// zero, in which case the delta is reported as an absolute value.
    pub percent: Option<f64>,
}

impl Trend {
    pub fn between(current: f64, baseline: f64) -> Self {
        let delta = current - baseline;
        let direction = if delta >= 0.0 { TrendDirection::Up } else { TrendDirection::Down };
        let percent = if baseline == 0.0 { None } else { Some(delta / baseline.abs() * 100.0) };
        Trend { direction, delta, percent }
    }

    pub fn is_up(&self) -> bool {
        self.direction == TrendDirection::Up
    }

    /// Magnitude as shown on KPI cards: percent when available, otherwise the
    /// absolute delta.
    pub fn magnitude(&self) -> f64 {
        self.percent.unwrap_or(self.delta)
    }

    /// "+12.4%", "-10%", or "+5" for an absolute delta. One decimal, with a
    /// trailing ".0" dropped.
    pub fn label(&self) -> String {
        let sign = if self.is_up() { "+" } else { "-" };
        let number = compact_decimal(self.magnitude().abs());
        match self.percent {
            Some(_) => format!("{}{}%", sign, number),
            None => format!("{}{}", sign, number),
        }
    }
}

fn compact_decimal(value: f64) -> String {
    let tenths = (value * 10.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{:.0}", tenths)
    } else {
        format!("{:.1}", tenths)
    }
}
