//! Normalized-FFMI category bands.

/// The seven ordered FFMI bands. Left-closed, right-open, except the top
/// band which is open-ended; a boundary value belongs to the band that
/// starts at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FfmiCategory {
    BelowAverage,
    Average,
    AboveAverage,
    Excellent,
    Superior,
    NaturalLimit,
    Elite,
}

impl FfmiCategory {
    /// Classify a normalized FFMI into its band. Purely a function of the
    /// value; recomputed on every render, never stored.
    #[must_use]
    pub fn classify(normalized_ffmi: f64) -> Self {
        match normalized_ffmi {
            v if v < 18.0 => Self::BelowAverage,
            v if v < 20.0 => Self::Average,
            v if v < 22.0 => Self::AboveAverage,
            v if v < 23.0 => Self::Excellent,
            v if v < 25.0 => Self::Superior,
            v if v < 26.0 => Self::NaturalLimit,
            _ => Self::Elite,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BelowAverage => "Below Average",
            Self::Average => "Average",
            Self::AboveAverage => "Above Average",
            Self::Excellent => "Excellent",
            Self::Superior => "Superior",
            Self::NaturalLimit => "Natural Limit",
            Self::Elite => "Elite",
        }
    }

    /// Short description shown next to the label.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::BelowAverage => "less muscle than the average untrained man",
            Self::Average => "typical of an untrained man",
            Self::AboveAverage => "noticeably more muscular than average",
            Self::Excellent => "several years of serious training",
            Self::Superior => "near the ceiling for most dedicated lifters",
            Self::NaturalLimit => "around the drug-free ceiling",
            Self::Elite => "rarely attained without pharmaceutical help",
        }
    }
}
