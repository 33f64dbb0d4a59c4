//! Five-way bucketing of per-sensor improvement percentages.

/// Improvement buckets in display order. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImprovementCategory {
    Excellent,
    Good,
    Moderate,
    Low,
    NoImprovement,
}

impl ImprovementCategory {
    pub const ALL: [ImprovementCategory; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Moderate,
        Self::Low,
        Self::NoImprovement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (≥50%)",
            Self::Good => "Good (25-50%)",
            Self::Moderate => "Moderate (10-25%)",
            Self::Low => "Low (0-10%)",
            Self::NoImprovement => "No improvement (<0%)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "rgba(34, 197, 94, 0.8)",
            Self::Good => "rgba(132, 204, 22, 0.8)",
            Self::Moderate => "rgba(234, 179, 8, 0.8)",
            Self::Low => "rgba(249, 115, 22, 0.8)",
            Self::NoImprovement => "rgba(239, 68, 68, 0.8)",
        }
    }

    /// Position in [`ImprovementCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Excellent => 0,
            Self::Good => 1,
            Self::Moderate => 2,
            Self::Low => 3,
            Self::NoImprovement => 4,
        }
    }
}

/// Bucket an improvement percentage. NaN never satisfies a lower bound and
/// therefore lands in `NoImprovement`.
pub fn classify(pct: f64) -> ImprovementCategory {
    if pct >= 50.0 {
        ImprovementCategory::Excellent
    } else if pct >= 25.0 {
        ImprovementCategory::Good
    } else if pct >= 10.0 {
        ImprovementCategory::Moderate
    } else if pct >= 0.0 {
        ImprovementCategory::Low
    } else {
        ImprovementCategory::NoImprovement
    }
}
