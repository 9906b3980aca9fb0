use crate::utils::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// 單一輸入的去重行序列，保留首次出現的順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    lines: Vec<String>,
}

impl LineSet {
    pub(crate) fn from_unique_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// 特殊字元行放在輸出的頂部或底部
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Top,
    Bottom,
}

impl SortMode {
    /// Parses an optional request token. Only an absent token means `Top`;
    /// a provided token must be `top` or `bottom`, blank included.
    pub fn from_request_token(token: Option<&str>) -> Result<Self> {
        match token {
            None => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for SortMode {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(CompareError::InvalidSortMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Special,
    Ordinary,
}

/// 判定特殊字元的規則
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationPolicy {
    /// Unicode letters (L*) and decimal digits (Nd) are ordinary.
    #[default]
    Unicode,
    /// Only `[A-Za-z0-9]` is ordinary.
    Ascii,
}

impl ClassificationPolicy {
    /// Classifies by the first character only. Empty lines are special.
    pub fn classify(&self, line: &str) -> LineClass {
        let ordinary = match line.chars().next() {
            Some(c) => match self {
                Self::Unicode => {
                    c.general_category_group() == GeneralCategoryGroup::Letter
                        || c.general_category() == GeneralCategory::DecimalNumber
                }
                Self::Ascii => c.is_ascii_alphanumeric(),
            },
            None => false,
        };

        if ordinary {
            LineClass::Ordinary
        } else {
            LineClass::Special
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Ascii => "ascii",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub unique_to_a: Vec<String>,
    pub unique_to_b: Vec<String>,
}

impl ComparisonResult {
    pub fn identical(&self) -> bool {
        self.unique_to_a.is_empty() && self.unique_to_b.is_empty()
    }
}

/// 一次比對請求的原始輸入
#[derive(Debug, Clone, Default)]
pub struct CompareRequest {
    pub file_a: Option<Vec<u8>>,
    pub file_b: Option<Vec<u8>>,
    pub sort_mode: SortMode,
}

impl CompareRequest {
    pub fn new(file_a: impl Into<Vec<u8>>, file_b: impl Into<Vec<u8>>, sort_mode: SortMode) -> Self {
        Self {
            file_a: Some(file_a.into()),
            file_b: Some(file_b.into()),
            sort_mode,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractedInputs {
    pub a: LineSet,
    pub b: LineSet,
    pub sort_mode: SortMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    Identical,
    Differences {
        id: String,
        output_a: String,
        output_b: String,
        unique_to_a_count: usize,
        unique_to_b_count: usize,
    },
}

impl CompareOutcome {
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }
}
