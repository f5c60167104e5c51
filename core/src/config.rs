use serde::Deserialize;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_CHUNK_SIZE: usize = 150;
pub const DEFAULT_OVERLAP: usize = 30;
pub const DEFAULT_MIN_SCORE: f64 = 0.05;

/// Tuning knobs for one `answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct QaParams {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_overlap")]
    pub overlap: usize,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}
fn default_top_k() -> usize { DEFAULT_TOP_K }
fn default_chunk_size() -> usize { DEFAULT_CHUNK_SIZE }
fn default_overlap() -> usize { DEFAULT_OVERLAP }
fn default_min_score() -> f64 { DEFAULT_MIN_SCORE }

impl Default for QaParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl QaParams {
    /// Build from signed wire values, clamping degenerate ones instead of rejecting them.
    pub fn from_signed(top_k: i64, chunk_size: i64, overlap: i64, min_score: f64) -> Self {
        let to_usize = |v: i64, floor: i64| usize::try_from(v.max(floor)).unwrap_or(usize::MAX);
        Self {
            top_k: to_usize(top_k, 0),
            chunk_size: to_usize(chunk_size, 1),
            overlap: to_usize(overlap, 0),
            min_score: if min_score.is_finite() { min_score } else { DEFAULT_MIN_SCORE },
        }
    }
}
