//! Score bands and their display colours.
//!
//! Thresholds are inclusive on the lower bound and evaluated high to low:
//! 90 and above is [`Band::Excellent`], 70 to 89 is [`Band::High`], 40 to 69
//! is [`Band::Medium`], anything lower is [`Band::Low`].
//!
//! # Examples
//! ```
//! use siting_core::{Band, classify};
//!
//! assert_eq!(classify(70).band, Band::High);
//! assert_eq!(classify(69).color, "#ff9933");
//! ```

/// Discrete suitability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Band {
    /// Scores below 40.
    Low,
    /// Scores from 40 to 69.
    Medium,
    /// Scores from 70 to 89.
    High,
    /// Scores of 90 and above.
    Excellent,
}

impl Band {
    /// Bands from best to worst.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::High, Self::Medium, Self::Low];

    /// Classify a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            70..=89 => Self::High,
            40..=69 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Display colour for the band.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#2c974b",
            Self::High => "#91cf60",
            Self::Medium => "#ff9933",
            Self::Low => "#1f4e79",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Inclusive score range covered by the band, for legends.
    #[must_use]
    pub const fn range(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Self::Excellent => 90..=100,
            Self::High => 70..=89,
            Self::Medium => 40..=69,
            Self::Low => 0..=39,
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A band together with its display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// The band the score falls into.
    pub band: Band,
    /// Colour associated with the band.
    pub color: &'static str,
}

/// Classify a score into a band and colour.
#[must_use]
pub const fn classify(score: u8) -> Classification {
    let band = Band::from_score(score);
    Classification {
        band,
        color: band.color(),
    }
}
