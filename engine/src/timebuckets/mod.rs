// Time-bucket generator: the day x hour activity heatmap and the derived
// monthly/weekly series the analytics and overview pages chart.
pub mod heatmap;
pub mod series;

pub use heatmap::{
    day_factor, generate_heatmap, hour_factor, Heatmap, HeatmapRow, IntensitySource, SeededSource, DAYS,
    HOURS_PER_DAY,
};
pub use series::{client_total, moving_average, profit_series, SeriesPoint};
