//! The two entry pipelines, [parse_book] and [parse_publication].
//!
//! Each pipeline is a fixed sequence of extractors. The sequence matters: fields
//! with a literal marker are removed first so that the positional fields (author,
//! title, publisher, notes) can be read from what is left.

use crate::model::{
    Adaptation, Book, Critique, Entry, Essay, Interview, Novel, Other, ProductionProtocol,
    Publication, Screenplay,
};
use crate::record::extract::*;
use crate::record::tags::{EntryShape, EntryTag};
use log::trace;

/// Parse the value of an `ADPT`, `BOOK` or `NOVL` line.
pub fn parse_book(text: &str) -> Book {
    let text = clean_surrounding_braces(text);
    let text = clean_random_text(&text);
    let (misc_info, text) = extract_in(&text);
    let (volume, text) = extract_volume_number(&text);
    let (issue, text) = extract_issue_number(&text);
    let (isbn, text) = extract_isbn(&text);
    let (page_count, text) = extract_page_count(&text);
    let (first_published, text) = extract_first_published_date(&text);
    let (date, text) = extract_published_date(&text);
    let (author, text) = extract_author(&text);
    let (title, text) = extract_title(&text);
    let (publisher, text) = extract_publisher(&text);
    let (note, text) = extract_notes(&text);
    log_leftover(&text);

    Book {
        title,
        author,
        publisher,
        date,
        first_published,
        page_count,
        volume,
        issue,
        isbn,
        note,
        misc_info,
    }
}

/// Parse the value of a periodical entry line such as `CRIT` or `ESSY`.
pub fn parse_publication(text: &str) -> Publication {
    let text = clean_surrounding_braces(text);
    let text = clean_random_text(&text);
    let (volume, text) = extract_volume_number(&text);
    let (issue, text) = extract_issue_number(&text);
    let (issn, text) = extract_isbn(&text);
    let (article_pages, text) = extract_page_range(&text);
    let (name, text) = extract_in(&text);
    let (date, text) = extract_published_date(&text);
    let (article_author, text) = extract_author(&text);
    let (article_title, text) = extract_title(&text);
    let (publisher, text) = extract_publisher(&text);
    log_leftover(&text);

    Publication {
        name,
        publisher,
        date,
        volume,
        issue,
        issn,
        article_author,
        article_title,
        article_pages,
        article_interviewee: String::new(),
    }
}

/// Parse the value of an `IVIW` line: a publication whose subject is named in an
/// `(interview with ...)` remark.
pub fn parse_interview(text: &str) -> Publication {
    let (interviewee, text) = extract_interviewee(text);
    Publication {
        article_interviewee: interviewee,
        ..parse_publication(&text)
    }
}

/// Parse an entry value with the pipeline its tag calls for.
///
/// Returns `None` for [`EntryTag::Movie`], which is not a literature entry.
pub fn parse_entry(tag: EntryTag, text: &str) -> Option<Entry> {
    let entry = match (tag, tag.shape()?) {
        (EntryTag::Adaptation, _) => Entry::Adaptation(Adaptation {
            book: parse_book(text),
        }),
        (EntryTag::Novel, _) => Entry::Novel(Novel {
            book: parse_book(text),
        }),
        (EntryTag::Interview, _) => Entry::Interview(Interview {
            publication: parse_interview(text),
        }),
        (_, EntryShape::Book) => Entry::Book(parse_book(text)),
        (_, EntryShape::Publication) => {
            let publication = parse_publication(text);
            match tag {
                EntryTag::Critique => Entry::Critique(Critique { publication }),
                EntryTag::Essay => Entry::Essay(Essay { publication }),
                EntryTag::ProductionProtocol => {
                    Entry::ProductionProtocol(ProductionProtocol { publication })
                }
                EntryTag::Screenplay => Entry::Screenplay(Screenplay { publication }),
                _ => Entry::Other(Other { publication }),
            }
        }
    };
    Some(entry)
}

fn log_leftover(text: &str) {
    let text = text.trim_matches(|c: char| c == ',' || c.is_whitespace());
    if !text.is_empty() {
        trace!("unused entry text: {text}");
    }
}
