//! A library for reading the literature list of a movie database.
//!
//! The literature list records, for every movie, the books it was adapted from and
//! the articles, reviews, interviews and screenplays written about it. Each entry
//! is a single line of loosely formatted text:
//!
//! ```text
//! MOVI: Creature from the Black Lagoon (1954)
//!
//! NOVL: Dreadstone, Carl. "Creature from the Black Lagoon". (New York City, New York, USA), Berkley Medallion Books, 27 June 1977, Pg. 194, (BK)
//! CRIT: D.. "La mujer y el monstruo". In: "ABC" (Madrid), 8 June 1955, Pg. 60-61, (NP)
//! ```
//!
//! `litlist` decodes such records into a [`Movie`], pulling authors, titles,
//! publishers, dates, page numbers and identifiers out of every entry.
//!
//! # Key Features
//!
//! - **Tolerant parsing**: fields that cannot be found are left empty, parsing a
//!   record never fails
//! - **Adaptation search**: find the movies made from a given book
//! - **Streaming scanner**: read a whole list record by record, optionally in
//!   parallel
//!
//! # Basic Usage
//!
//! ```rust
//! use litlist::{movie_is_adaptation_of, parse_full_record};
//!
//! let input = r#"MOVI: Creature from the Black Lagoon (1954)
//!
//! NOVL: Dreadstone, Carl. "Creature from the Black Lagoon". (New York City, New York, USA), Berkley Medallion Books, 27 June 1977, Pg. 194, (BK)
//! CRIT: D.. "La mujer y el monstruo". In: "ABC" (Madrid), 8 June 1955, Pg. 60-61, (NP)
//! "#;
//!
//! let movie = parse_full_record(input);
//! assert_eq!(movie.year, 1954);
//!
//! let novel = &movie.novels[0].book;
//! assert_eq!(novel.author, "Dreadstone, Carl");
//! assert_eq!(novel.page_count, 194);
//! assert_eq!(novel.publisher.city, "New York City, New York");
//!
//! let review = &movie.critiques[0].publication;
//! assert_eq!(review.name, "ABC");
//! assert_eq!(review.article_pages, "60-61");
//!
//! assert!(movie_is_adaptation_of(&movie, "Creature from the Black Lagoon", "Carl Dreadstone"));
//! ```
//!
//! # Scanning a List
//!
//! ```rust
//! use litlist::{LiteratureList, ScanConfig};
//!
//! # let file = "LITERATURE LIST\n===\n";
//! let config = ScanConfig {
//!     run_in_parallel: true,
//!     ..Default::default()
//! };
//! let mut list = LiteratureList::new(file.as_bytes()).with_config(config);
//! for movie in list.find_adaptations("Mansfield Park", "Jane Austen")? {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! # Ok::<(), litlist::LitListError>(())
//! ```
//!
//! # Logging
//!
//! Skipped lines and scan summaries are reported through the [`log`] facade.
//! No logger is installed by the library.

use thiserror::Error;

pub mod adaptation;
pub mod literature;
pub mod model;
pub mod record;
mod regex;

// Reexports
pub use literature::{LiteratureList, RECORD_DIVIDER, ScanConfig};
pub use model::*;
pub use record::{ParseMode, RecordParser};

/// A specialized Result type for literature list operations.
pub type Result<T> = std::result::Result<T, LitListError>;

/// Errors that can occur while reading a literature list.
///
/// Parsing a record never fails, these only come from reading the input.
#[derive(Error, Debug)]
pub enum LitListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    #[error("Malformed input: {message} at line {line}")]
    MalformedInput { message: String, line: usize },
}

/// Parses a record with all of its entries.
pub fn parse_full_record(record_text: &str) -> Movie {
    RecordParser::new().parse(record_text)
}

/// Parses a record, keeping only its adaptation, book and novel entries.
pub fn parse_book_record(record_text: &str) -> Movie {
    RecordParser::books_only().parse(record_text)
}

/// Returns `true` if `movie` lists a book-like entry with the given title and author.
pub fn movie_is_adaptation_of(movie: &Movie, title: &str, author: &str) -> bool {
    movie.is_adaptation_of(title, author)
}
