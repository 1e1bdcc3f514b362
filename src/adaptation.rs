//! Matching movies against the book they may be adapted from.
//!
//! Matching is deliberately loose. Titles are compared case-insensitively with
//! every `the ` removed, and the wanted title only has to appear somewhere in the
//! entry's title. Authors are compared as a bag of words, so `Jane Austen` matches
//! `Austen, Jane`.

use crate::model::{Book, Movie};

impl Movie {
    /// Returns `true` if an adaptation, book or novel entry of this movie has the
    /// given title and author.
    ///
    /// # Examples
    ///
    /// ```
    /// use litlist::RecordParser;
    ///
    /// let movie = RecordParser::books_only()
    ///     .parse(r#"NOVL: Austen, Jane. "Mansfield Park""#);
    /// assert!(movie.is_adaptation_of("Mansfield Park", "Jane Austen"));
    /// assert!(!movie.is_adaptation_of("Emma", "Jane Austen"));
    /// ```
    pub fn is_adaptation_of(&self, title: &str, author: &str) -> bool {
        self.book_like_entries()
            .any(|book| book_matches(book, title, author))
    }
}

fn book_matches(book: &Book, title: &str, author: &str) -> bool {
    title_matches(&book.title, title) && author_matches(&book.author, author)
}

/// Returns `true` if `target` appears in `source`, ignoring case and `the `.
pub fn title_matches(source: &str, target: &str) -> bool {
    normalize_title(source).contains(&normalize_title(target))
}

fn normalize_title(title: &str) -> String {
    title.to_lowercase().replace("the ", "")
}

/// Returns `true` if every word of `target` appears in `source`, ignoring case
/// and commas.
///
/// Words are matched as substrings, so `H.P.` is found in `H.P. Lovecraft` and
/// also in `H.P.L.`.
pub fn author_matches(source: &str, target: &str) -> bool {
    let source = normalize_author(source);
    normalize_author(target)
        .split_whitespace()
        .all(|word| source.contains(word))
}

fn normalize_author(author: &str) -> String {
    author.to_lowercase().replace(',', "")
}
