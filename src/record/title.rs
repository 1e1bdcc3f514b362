//! Parsing of the `MOVI` line.
//!
//! ```text
//! MOVI: "1,000 Places to See Before You Die" (2007) {Australia (#1.5)}
//! MOVI: Creature from the Black Lagoon (1954/XI) (TV)
//! ```

use crate::regex::{Captures, Regex};
use std::sync::LazyLock;

static TITLE_DETAILS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"?(.*?)"? \(([0-9?]{4})(?:/([IVXLC]+))?\)"#).unwrap()
});

static SERIES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^}]*?)\s*(?:\(#([0-9]+)\.([0-9]+)\))?\}").unwrap()
});

/// Details of a movie read from its `MOVI` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleDetails {
    pub title: String,
    pub year: i32,
    /// Value of the roman numeral after the year, see [`crate::Movie::month`]
    pub month: u32,
    pub is_television: bool,
    pub series_name: String,
    pub series_number: u32,
    pub episode_number: u32,
}

/// Parse the value of a `MOVI` line.
///
/// A line without a parenthesised year yields an empty title; the TV marker and
/// series descriptor are still read. The roman numeral after the year is only
/// read when there is no series descriptor.
pub fn parse_movie_title(text: &str) -> TitleDetails {
    let text = text.trim();
    let mut details = TitleDetails {
        is_television: text.contains("(TV)"),
        ..Default::default()
    };

    let series = SERIES_REGEX.captures(text);
    if let Some(caps) = &series {
        details.series_name = caps[1].trim().to_string();
        details.series_number = number(caps, 2);
        details.episode_number = number(caps, 3);
    }

    if let Some(caps) = TITLE_DETAILS_REGEX.captures(text) {
        details.title = caps[1].trim().to_string();
        // `????` marks an unknown year
        details.year = caps[2].parse().unwrap_or_default();
        // episodes are told apart by their series descriptor instead
        if series.is_none() {
            details.month = caps.get(3).map_or(0, |m| roman_to_number(m.as_str()));
        }
    }

    details
}

fn number(caps: &Captures<'_>, i: usize) -> u32 {
    caps.get(i)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}

/// Value of a roman numeral written with `I`, `V`, `X`, `L` and `C`.
///
/// Unknown characters count as zero.
pub fn roman_to_number(numeral: &str) -> u32 {
    let values = numeral.chars().map(|c| match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        _ => 0,
    });

    let mut total: i32 = 0;
    let mut previous = 0;
    // right to left, a digit smaller than the one after it is subtracted
    for value in values.rev() {
        if value < previous {
            total -= value;
        } else {
            total += value;
            previous = value;
        }
    }
    total.max(0) as u32
}
