//! Data types a literature list record is decoded into.
//!
//! A [`Movie`] owns one collection per entry type. Entry types built on the same
//! layout share it by composition: adaptations and novels wrap a [`Book`], while
//! critiques, essays, interviews, other literature, production protocols and
//! screenplays wrap a [`Publication`].

use serde::{Deserialize, Serialize};

/// A partial calendar date. Unknown parts are `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    /// `1..=12`, or `0` when unknown
    pub month: u32,
    /// `1..=31`, or `0` when unknown
    pub day: u32,
}

impl Date {
    /// Creates a date from its parts.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// Publisher details shared by books and publications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub name: String,
    /// Every part of the location before the country, e.g. `Lanham, Maryland`
    pub city: String,
    /// Province, county, state, etc. Locations are not split this finely, so
    /// the region stays part of `city`.
    pub state: String,
    pub country: String,
}

/// A monographic book, the layout shared by `ADPT`, `BOOK` and `NOVL` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: Publisher,
    pub date: Date,
    /// Year from a "First published ..." remark, `0` if absent
    pub first_published: i32,
    pub page_count: u32,
    pub volume: String,
    pub issue: String,
    pub isbn: String,
    /// Trailing parenthesised remark
    pub note: String,
    /// Text of the `In: "..."` clause, usually a link or a collection name
    pub misc_info: String,
}

/// A periodical or collection, the layout shared by the non-book entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Name of the magazine, newspaper or collection
    pub name: String,
    pub publisher: Publisher,
    pub date: Date,
    pub volume: String,
    pub issue: String,
    /// Usually an ISSN, sometimes an ISBN
    pub issn: String,

    pub article_author: String,
    pub article_title: String,
    /// Page range exactly as written, e.g. `1-17`, `56`, `213 to 222, 224, 383`
    pub article_pages: String,
    /// Subject of an interview; only set for `IVIW` entries
    pub article_interviewee: String,
}

/// `ADPT`: adapted literary source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adaptation {
    pub book: Book,
}

/// `NOVL`: original literary source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    pub book: Book,
}

/// `CRIT`: printed media review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critique {
    pub publication: Publication,
}

/// `ESSY`: printed essay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essay {
    pub publication: Publication,
}

/// `IVIW`: interview with cast or crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub publication: Publication,
}

/// `OTHR`: other literature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Other {
    pub publication: Publication,
}

/// `PROT`: production protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionProtocol {
    pub publication: Publication,
}

/// `SCRP`: published screenplay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenplay {
    pub publication: Publication,
}

/// One parsed entry line of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Adaptation(Adaptation),
    Book(Book),
    Critique(Critique),
    Essay(Essay),
    Interview(Interview),
    Novel(Novel),
    Other(Other),
    ProductionProtocol(ProductionProtocol),
    Screenplay(Screenplay),
}

/// A movie record with the details of its `MOVI` line and every literature entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// `0` when the year is given as `????`
    pub year: i32,
    /// Roman numeral suffix of the year, e.g. `XI` in `(1954/XI)`, as a number.
    ///
    /// The literature list does not say what the numeral denotes; it is kept under
    /// this name for lack of a better one. Always `0` for series episodes, which
    /// are identified by their series descriptor.
    pub month: u32,
    pub is_television: bool,
    pub series_name: String,
    pub series_number: u32,
    pub episode_number: u32,

    pub adaptations: Vec<Adaptation>,
    pub books: Vec<Book>,
    pub critiques: Vec<Critique>,
    pub essays: Vec<Essay>,
    pub interviews: Vec<Interview>,
    pub novels: Vec<Novel>,
    pub others: Vec<Other>,
    pub production_protocols: Vec<ProductionProtocol>,
    pub screenplays: Vec<Screenplay>,
}

impl Movie {
    /// Appends an entry to the collection matching its type.
    pub fn push_entry(&mut self, entry: Entry) {
        match entry {
            Entry::Adaptation(a) => self.adaptations.push(a),
            Entry::Book(b) => self.books.push(b),
            Entry::Critique(c) => self.critiques.push(c),
            Entry::Essay(e) => self.essays.push(e),
            Entry::Interview(i) => self.interviews.push(i),
            Entry::Novel(n) => self.novels.push(n),
            Entry::Other(o) => self.others.push(o),
            Entry::ProductionProtocol(p) => self.production_protocols.push(p),
            Entry::Screenplay(s) => self.screenplays.push(s),
        }
    }

    /// Iterates over every book-like entry: adaptations, then books, then novels.
    pub fn book_like_entries(&self) -> impl Iterator<Item = &Book> {
        self.adaptations
            .iter()
            .map(|a| &a.book)
            .chain(self.books.iter())
            .chain(self.novels.iter().map(|n| &n.book))
    }
}
