//! Loader options.

use std::fmt;
use std::str::FromStr;

/// Whether a text stream starts with a vehicle-count line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum HeaderMode {
    /// Every non-blank line is a vehicle record.
    #[default]
    Absent,
    /// The first non-blank line is the number of records that follow, and
    /// must match it exactly.
    Count,
}

/// Encoding of the vehicle stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum InputFormat {
    /// Five whitespace-separated integers per line.
    #[default]
    Text,
    /// `id,arrival_time,start_zone,end_zone,payment` with a column header
    /// row.  [`HeaderMode`] does not apply.
    Csv,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct LoadOptions {
    pub header: HeaderMode,
    pub format: InputFormat,
}

impl LoadOptions {
    pub fn text(header: HeaderMode) -> Self {
        Self { header, format: InputFormat::Text }
    }

    pub fn csv() -> Self {
        Self { header: HeaderMode::Absent, format: InputFormat::Csv }
    }
}

// ── Parsing and display ───────────────────────────────────────────────────────

impl HeaderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderMode::Absent => "absent",
            HeaderMode::Count  => "count",
        }
    }
}

impl fmt::Display for HeaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absent" | "none" => Ok(HeaderMode::Absent),
            "count"           => Ok(HeaderMode::Count),
            other => Err(format!("unknown header mode {other:?}: expected \"absent\" or \"count\"")),
        }
    }
}

impl InputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Text => "text",
            InputFormat::Csv  => "csv",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(InputFormat::Text),
            "csv"          => Ok(InputFormat::Csv),
            other => Err(format!("unknown input format {other:?}: expected \"text\" or \"csv\"")),
        }
    }
}
