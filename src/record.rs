//! Parsing of a single literature list record into a [`Movie`].
//!
//! A record is the block of text for one movie: a `MOVI` line followed by any
//! number of tagged literature entries.
//!
//! # Example
//!
//! ```
//! use litlist::RecordParser;
//!
//! let input = r#"MOVI: Mansfield Park (1999)
//!
//! NOVL: Austen, Jane. "Mansfield Park". (London, UK), Thomas Egerton, 1814
//! CRIT: Ebert, Roger. "Mansfield Park". In: "Chicago Sun-Times" (Chicago, USA), 19 November 1999
//! "#;
//!
//! let parser = RecordParser::new();
//! let movie = parser.parse(input);
//!
//! assert_eq!(movie.title, "Mansfield Park");
//! assert_eq!(movie.novels[0].book.author, "Austen, Jane");
//! assert_eq!(movie.critiques[0].publication.name, "Chicago Sun-Times");
//! ```

pub mod extract;
pub mod group;
pub mod shape;
pub mod tags;
pub mod title;

use crate::model::Movie;
use crate::record::group::group_entries;
use crate::record::shape::parse_entry;
use crate::record::tags::EntryTag;
use crate::record::title::parse_movie_title;
use log::debug;

/// Which entries a [RecordParser] decodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Every literature entry
    #[default]
    Full,
    /// Only adaptations, books and novels, for callers matching adaptations
    BooksOnly,
}

impl ParseMode {
    fn tags(&self) -> &'static [EntryTag] {
        match self {
            Self::Full => &EntryTag::LITERATURE,
            Self::BooksOnly => &EntryTag::BOOK_LIKE,
        }
    }
}

/// Parser for literature list records.
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    mode: ParseMode,
}

impl RecordParser {
    /// Creates a parser decoding every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use litlist::RecordParser;
    /// let parser = RecordParser::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser decoding only adaptations, books and novels.
    #[must_use]
    pub fn books_only() -> Self {
        Self::with_mode(ParseMode::BooksOnly)
    }

    #[must_use]
    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parses the text of one record.
    ///
    /// Parsing never fails. Fields that cannot be found are left empty, and a
    /// record without a `MOVI` line yields a movie without a title.
    pub fn parse(&self, record_text: &str) -> Movie {
        let mut entries = group_entries(record_text);
        if entries.is_empty() {
            debug!("record without any recognised entry");
        }

        let details = entries
            .first(EntryTag::Movie)
            .map(parse_movie_title)
            .unwrap_or_default();
        let mut movie = Movie {
            title: details.title,
            year: details.year,
            month: details.month,
            is_television: details.is_television,
            series_name: details.series_name,
            series_number: details.series_number,
            episode_number: details.episode_number,
            ..Default::default()
        };

        for &tag in self.mode.tags() {
            for value in entries.remove(tag) {
                if let Some(entry) = parse_entry(tag, &value) {
                    movie.push_entry(entry);
                }
            }
        }

        movie
    }
}
