//! Scanning of a complete literature list file.
//!
//! The file opens with a free-form header ending in a `LITERATURE LIST` banner,
//! followed by the records, each preceded by a [RECORD_DIVIDER] line:
//!
//! ```text
//! CRC: 0x527C5E79  File: literature.list  Date: Fri Dec 22 00:00:00 2017
//!
//! LITERATURE LIST
//! ===============
//! -------------------------------------------------------------------------------
//! MOVI: Mansfield Park (1983)
//!
//! NOVL: Austen, Jane. "Mansfield Park"
//!
//! -------------------------------------------------------------------------------
//! MOVI: Mansion of the Doomed (1976)
//! ```
//!
//! # Example
//!
//! ```
//! use litlist::LiteratureList;
//!
//! let input = "LITERATURE LIST
//! ===============
//! -------------------------------------------------------------------------------
//! MOVI: Mansfield Park (1983)
//!
//! NOVL: Austen, Jane. \"Mansfield Park\"
//! ";
//!
//! let mut list = LiteratureList::new(input.as_bytes());
//! let movies = list.find_adaptations("Mansfield Park", "Jane Austen").unwrap();
//!
//! assert_eq!(movies[0].year, 1983);
//! assert_eq!(list.total_records(), 1);
//! ```
//!
//! The published list is Windows-1252 encoded, and lines are decoded as such
//! unless [ScanConfig::encoding] says otherwise.

mod split;

use crate::model::Movie;
use crate::record::RecordParser;
use crate::{LitListError, Result};
use chrono::NaiveDateTime;
use encoding_rs::{Encoding, WINDOWS_1252};
use itertools::Itertools;
use log::{debug, warn};
use std::cmp::Reverse;
use std::io::{self, BufRead};

pub use split::{DecodedLines, RECORD_DIVIDER, RecordBlocks};

/// The line closing the header, underlined by a row of `=`.
const HEADER_BANNER: &str = "LITERATURE LIST";

/// Marks the creation timestamp in the header, e.g. `Date: Fri Dec 22 00:00:00 2017`.
const CREATED_ON_MARKER: &str = " Date: ";

const CREATED_ON_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Options for scanning a literature list.
///
/// # Examples
///
/// ```
/// use litlist::ScanConfig;
///
/// let config = ScanConfig {
///     run_in_parallel: true,
///     ..Default::default()
/// };
/// assert!(config.newest_first);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// Parse and match records on the rayon thread pool.
    /// Requires the `parallel` feature, without it records are scanned in turn.
    pub run_in_parallel: bool,
    /// Order found movies by year, newest first. Otherwise they are kept in file order.
    pub newest_first: bool,
    /// Text encoding of the list, Windows-1252 by default.
    pub encoding: &'static Encoding,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            run_in_parallel: false,
            newest_first: true,
            encoding: WINDOWS_1252,
        }
    }
}

/// A literature list read from `reader`.
pub struct LiteratureList<R> {
    reader: R,
    config: ScanConfig,
    created_on: Option<NaiveDateTime>,
    total_records: usize,
    line_number: usize,
    header_read: bool,
}

impl<R: BufRead> LiteratureList<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            config: ScanConfig::default(),
            created_on: None,
            total_records: 0,
            line_number: 0,
            header_read: false,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// When the list was generated, once the header has been read.
    pub fn created_on(&self) -> Option<NaiveDateTime> {
        self.created_on
    }

    /// Number of records read so far.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Reads the header up to and including the banner underline.
    ///
    /// Does nothing if the header has already been read.
    ///
    /// # Errors
    ///
    /// Returns [`LitListError::UnexpectedEof`] if the input ends before the banner.
    pub fn read_header(&mut self) -> Result<()> {
        if self.header_read {
            return Ok(());
        }
        loop {
            let line = self.read_line()?.ok_or_else(|| {
                LitListError::UnexpectedEof(format!("no {HEADER_BANNER:?} banner found"))
            })?;

            if line.contains(CREATED_ON_MARKER) {
                self.created_on = parse_created_on(&line);
            }
            if line.trim_end() == HEADER_BANNER {
                self.read_line()?.ok_or_else(|| {
                    LitListError::UnexpectedEof(format!("no records after {HEADER_BANNER:?}"))
                })?;
                self.header_read = true;
                return Ok(());
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let line = DecodedLines::new(&mut self.reader, self.config.encoding)
            .read_line()
            .map_err(|err| read_error(err, self.line_number + 1))?;
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    /// Reads the header if needed, and returns an iterator over the text of each
    /// remaining record.
    pub fn records(&mut self) -> Result<RecordBlocks<'_, DecodedLines<&mut R>>> {
        self.read_header()?;
        Ok(RecordBlocks::new(
            DecodedLines::new(&mut self.reader, self.config.encoding),
            self.line_number,
            &mut self.total_records,
        ))
    }

    /// Returns every movie adapted from a book with the given title and author.
    ///
    /// Only adaptation, book and novel entries are parsed. See
    /// [`Movie::is_adaptation_of`] for how books are matched.
    pub fn find_adaptations(&mut self, title: &str, author: &str) -> Result<Vec<Movie>> {
        let parser = RecordParser::books_only();
        let config = self.config;

        let mut movies = if config.run_in_parallel {
            let blocks = self.records()?.collect::<Result<Vec<_>>>()?;
            match_in_parallel(&parser, &blocks, title, author)
        } else {
            let mut movies = Vec::new();
            for block in self.records()? {
                let movie = parser.parse(&block?);
                if movie.is_adaptation_of(title, author) {
                    movies.push(movie);
                }
            }
            movies
        };

        if config.newest_first {
            movies.sort_by_key(|movie| Reverse(movie.year));
        }
        debug!(
            "found {} adaptations of {title:?} in {} records",
            movies.len(),
            self.total_records
        );
        Ok(movies)
    }
}

#[cfg(feature = "parallel")]
fn match_in_parallel(
    parser: &RecordParser,
    blocks: &[String],
    title: &str,
    author: &str,
) -> Vec<Movie> {
    use rayon::prelude::*;

    blocks
        .par_iter()
        .map(|block| parser.parse(block))
        .filter(|movie| movie.is_adaptation_of(title, author))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn match_in_parallel(
    parser: &RecordParser,
    blocks: &[String],
    title: &str,
    author: &str,
) -> Vec<Movie> {
    warn!("parallel scan requested without the `parallel` feature, scanning in turn");
    blocks
        .iter()
        .map(|block| parser.parse(block))
        .filter(|movie| movie.is_adaptation_of(title, author))
        .collect()
}

/// Reads the timestamp following the `Date:` marker of a header line.
fn parse_created_on(line: &str) -> Option<NaiveDateTime> {
    let (_, date) = line.rsplit_once(CREATED_ON_MARKER)?;
    let date = date.split_whitespace().join(" ");
    NaiveDateTime::parse_from_str(&date, CREATED_ON_FORMAT)
        .inspect_err(|err| warn!("unreadable creation date {date:?}: {err}"))
        .ok()
}

/// Invalid text is reported with its line, other errors are passed on.
pub(crate) fn read_error(err: io::Error, line: usize) -> LitListError {
    if err.kind() == io::ErrorKind::InvalidData {
        LitListError::MalformedInput {
            message: err.to_string(),
            line,
        }
    } else {
        err.into()
    }
}
