use serde::{Deserialize, Serialize};

/// Point thresholds mapping evidence scores to confidence buckets.
///
/// The defaults are heuristic calibrations pending clinical review;
/// they are data, not hard-coded truths, and a deployment may tune them
/// at pipeline construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectionThresholds {
    /// ESBL evidence score at or above which confidence is high.
    pub esbl_high: u32,
    /// ESBL evidence score at or above which confidence is moderate.
    pub esbl_moderate: u32,
    /// AmpC evidence score at or above which confidence is high.
    pub ampc_high: u32,
    /// AmpC evidence score at or above which confidence is moderate.
    pub ampc_moderate: u32,
    /// Penicillinase evidence score at or above which confidence is high.
    pub penicillinase_high: u32,
    /// Resistant-carbapenem count at or above which confidence is high.
    pub carbapenemase_high_count: usize,
    /// Resistant-carbapenem count at or above which confidence is moderate.
    pub carbapenemase_moderate_count: usize,
    /// Resistant class members (of 3) for high class-resistance confidence.
    pub class_high_count: usize,
    /// Resistant class members (of 3) for moderate class-resistance confidence.
    pub class_moderate_count: usize,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            esbl_high: 6,
            esbl_moderate: 4,
            ampc_high: 6,
            ampc_moderate: 4,
            penicillinase_high: 4,
            carbapenemase_high_count: 3,
            carbapenemase_moderate_count: 2,
            class_high_count: 3,
            class_moderate_count: 2,
        }
    }
}
