// Intensity bands for activity heatmaps
use serde::Serialize;

/// Ascending upper bounds (exclusive) of the first four bands.
pub const HEAT_THRESHOLDS: [u32; 4] = [15, 30, 45, 60];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatTier {
    Faint,
    Light,
    Moderate,
    Strong,
    Peak,
}

impl HeatTier {
    pub const ALL: [HeatTier; 5] = [HeatTier::Faint, HeatTier::Light, HeatTier::Moderate, HeatTier::Strong, HeatTier::Peak];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn class_name(self) -> &'static str {
        match self {
            HeatTier::Faint => "bg-blue-50",
            HeatTier::Light => "bg-blue-100",
            HeatTier::Moderate => "bg-blue-200",
            HeatTier::Strong => "bg-blue-400",
            HeatTier::Peak => "bg-primary",
        }
    }
}

pub fn heat_tier(value: u32) -> HeatTier {
    HEAT_THRESHOLDS
        .iter()
        .position(|&bound| value < bound)
        .map_or(HeatTier::Peak, |band| HeatTier::ALL[band])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(heat_tier(0), HeatTier::Faint);
        assert_eq!(heat_tier(14), HeatTier::Faint);
        assert_eq!(heat_tier(15), HeatTier::Light);
        assert_eq!(heat_tier(29), HeatTier::Light);
        assert_eq!(heat_tier(30), HeatTier::Moderate);
        assert_eq!(heat_tier(45), HeatTier::Strong);
        assert_eq!(heat_tier(59), HeatTier::Strong);
        assert_eq!(heat_tier(60), HeatTier::Peak);
        assert_eq!(heat_tier(u32::MAX), HeatTier::Peak);
    }

    #[test]
    fn test_bands_are_ordered() {
        let tiers: Vec<HeatTier> = (0..100).map(heat_tier).collect();
        assert!(tiers.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(HeatTier::Peak.level(), 4);
        assert_eq!(HeatTier::Faint.class_name(), "bg-blue-50");
    }
}
