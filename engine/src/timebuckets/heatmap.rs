// Day x hour activity heatmap
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const HOURS_PER_DAY: usize = 24;

/// Spread of the randomised part of a cell before scaling.
pub const INTENSITY_SPAN: f64 = 80.0;
/// Added to every cell so the quietest hour is never empty.
pub const INTENSITY_FLOOR: f64 = 5.0;

pub const WEEKDAY_FACTOR: f64 = 1.0;
pub const WEEKEND_FACTOR: f64 = 0.4;
pub const BUSINESS_HOURS_FACTOR: f64 = 1.0;
pub const EVENING_FACTOR: f64 = 0.6;
pub const NIGHT_FACTOR: f64 = 0.2;

/// Day index 0 is Monday; indexes wrap every seven days.
pub fn day_factor(day: usize) -> f64 {
    if day % 7 >= 5 {
        WEEKEND_FACTOR
    } else {
        WEEKDAY_FACTOR
    }
}

/// 09:00-18:59 business, 19:00-22:59 evening, everything else night.
pub fn hour_factor(hour: usize) -> f64 {
    match hour {
        9..=18 => BUSINESS_HOURS_FACTOR,
        19..=22 => EVENING_FACTOR,
        _ => NIGHT_FACTOR,
    }
}

/// Source of the per-cell magnitude, in `[0, 1)`.
pub trait IntensitySource {
    fn sample(&mut self, day: usize, hour: usize) -> f64;
}

/// Pure functions of the coordinates are sources too.
impl<F: FnMut(usize, usize) -> f64> IntensitySource for F {
    fn sample(&mut self, day: usize, hour: usize) -> f64 {
        self(day, hour)
    }
}

/// Reproducible pseudo-random source.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl IntensitySource for SeededSource {
    fn sample(&mut self, _day: usize, _hour: usize) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub day: String,
    pub hours: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: Vec<HeatmapRow>,
}

impl Heatmap {
    pub fn cell(&self, day: usize, hour: usize) -> Option<u32> {
        self.rows.get(day).and_then(|row| row.hours.get(hour)).copied()
    }

    pub fn max(&self) -> u32 {
        self.rows.iter().flat_map(|row| row.hours.iter().copied()).max().unwrap_or(0)
    }
}

/// Builds a `days x hours_per_day` matrix. Each cell is
/// `floor(sample * 80 * day_factor * hour_factor + 5)`.
pub fn generate_heatmap(days: usize, hours_per_day: usize, source: &mut impl IntensitySource) -> Heatmap {
    let rows = (0..days)
        .map(|day| HeatmapRow {
            day: DAYS[day % DAYS.len()].to_string(),
            hours: (0..hours_per_day)
                .map(|hour| {
                    let sample = source.sample(day, hour).clamp(0.0, 1.0);
                    (sample * INTENSITY_SPAN * day_factor(day) * hour_factor(hour) + INTENSITY_FLOOR).floor() as u32
                })
                .collect(),
        })
        .collect();
    Heatmap { rows }
}
