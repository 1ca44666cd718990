use serde::{Deserialize, Serialize};

use crate::Error;

/// Severity of an amount of emitted CO2, from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactTier {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ImpactTier {
    pub const ALL: [ImpactTier; 5] = [
        ImpactTier::VeryLow,
        ImpactTier::Low,
        ImpactTier::Medium,
        ImpactTier::High,
        ImpactTier::VeryHigh,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::VeryLow => "🌱",
            Self::Low => "💚",
            Self::Medium => "💛",
            Self::High => "🔴",
            Self::VeryHigh => "🚨",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::VeryLow => "Excellent! Your emissions are very low!",
            Self::Low => "Good! You are contributing to a cleaner planet.",
            Self::Medium => "Your emissions are moderate. There is room for improvement!",
            Self::High => "Your emissions are high. Consider alternatives!",
            Self::VeryHigh => "Your emissions are very high. Urgent action is recommended!",
        }
    }

    /// The suggested action to reduce emissions
    pub fn action(&self) -> &'static str {
        match self {
            Self::VeryLow => "Keep choosing sustainable means of transport.",
            Self::Low => "Consider cycling or using public transport more often.",
            Self::Medium => "Try carpooling or collective transport.",
            Self::High => "Try cycling, taking the bus or working remotely when possible.",
            Self::VeryHigh => {
                "Consider switching to a more efficient vehicle or using public transport."
            }
        }
    }
}

/// Upper bounds (exclusive, in kg of CO2) of every [`ImpactTier`] but the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactThresholds {
    bounds: [f64; 4],
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self {
            bounds: [10.0, 50.0, 150.0, 500.0],
        }
    }
}

impl ImpactThresholds {
    /// # Error
    /// Errors if `bounds` are not finite, non-negative and strictly increasing
    pub fn new(bounds: [f64; 4]) -> Result<Self, Error> {
        let valid = bounds.iter().all(|b| b.is_finite() && *b >= 0.0)
            && bounds.windows(2).all(|w| w[0] < w[1]);
        if valid {
            Ok(Self { bounds })
        } else {
            Err(Error::InvalidThresholds(bounds.to_vec()))
        }
    }

    pub fn bounds(&self) -> [f64; 4] {
        self.bounds
    }

    /// Returns the tier of `total_kg`. Negative and NaN values are [`ImpactTier::VeryLow`].
    pub fn classify(&self, total_kg: f64) -> ImpactTier {
        let exceeded = self.bounds.iter().filter(|bound| total_kg >= **bound).count();
        ImpactTier::ALL[exceeded]
    }
}

/// Returns the tier of `total_kg` according to the default [`ImpactThresholds`].
pub fn classify_impact(total_kg: f64) -> ImpactTier {
    ImpactThresholds::default().classify(total_kg)
}
