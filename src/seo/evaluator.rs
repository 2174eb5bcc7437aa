use serde::Serialize;
use strum::{AsRefStr, Display};

pub const TITLE_LIMIT: usize = 60;
pub const TITLE_MIN: usize = 50;
pub const DESCRIPTION_LIMIT: usize = 160;
pub const DESCRIPTION_MIN: usize = 150;
pub const ELLIPSIS: &str = "...";

/// Where a field's character count falls relative to its recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum LengthVerdict {
    #[strum(serialize = "Too Short ⚠️")]
    TooShort,
    #[strum(serialize = "Perfect ✅")]
    Perfect,
    #[strum(serialize = "Too Long ⚠️")]
    TooLong,
}

impl LengthVerdict {
    /// Classify `length` against the inclusive `min..=max` range.
    pub fn classify(length: usize, min: usize, max: usize) -> Self {
        if length < min {
            LengthVerdict::TooShort
        } else if length <= max {
            LengthVerdict::Perfect
        } else {
            LengthVerdict::TooLong
        }
    }
}

/// Analysis of a single field: raw text, preview, and its length verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub text: String,
    pub preview: String,
    pub length: usize,
    pub limit: usize,
    pub verdict: LengthVerdict,
}

impl FieldReport {
    fn new(text: &str, min: usize, limit: usize) -> Self {
        let length = char_len(text);
        FieldReport {
            text: text.to_string(),
            preview: truncate_preview(text, limit),
            length,
            limit,
            verdict: LengthVerdict::classify(length, min, limit),
        }
    }

    /// Length against limit, e.g. `"62/60"`.
    pub fn metric(&self) -> String {
        format!("{}/{}", self.length, self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    pub title: FieldReport,
    pub description: FieldReport,
}

pub fn evaluate(title: &str, description: &str) -> SeoReport {
    SeoReport {
        title: FieldReport::new(title, TITLE_MIN, TITLE_LIMIT),
        description: FieldReport::new(description, DESCRIPTION_MIN, DESCRIPTION_LIMIT),
    }
}

/// Cut `text` to `limit` characters and append an ellipsis, but only when it
/// is longer than `limit`. Not word-aware: words are cut mid-way.
pub fn truncate_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
