use crate::record::tags::EntryTag;
use either::{Either, Left, Right};
use itertools::Itertools;
use log::trace;
use std::collections::HashMap;

/// Entry values of one record grouped by their [EntryTag].
///
/// Several lines with the same tag become several values, kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedEntries {
    /// Values following each recognised tag.
    data: HashMap<EntryTag, Vec<String>>,
    /// Non-blank lines without a recognised tag, which the parser skips.
    ignored_lines: Vec<String>,
}

impl GroupedEntries {
    /// All values for a tag, in file order.
    pub fn get(&self, tag: EntryTag) -> &[String] {
        self.data.get(&tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// The first value for a tag, if any.
    pub fn first(&self, tag: EntryTag) -> Option<&str> {
        self.get(tag).first().map(String::as_str)
    }

    /// Remove and return all values for a tag.
    pub fn remove(&mut self, tag: EntryTag) -> Vec<String> {
        self.data.remove(&tag).unwrap_or_default()
    }

    /// Lines that were skipped because their tag is not recognised.
    pub fn ignored_lines(&self) -> &[String] {
        &self.ignored_lines
    }

    /// Returns `true` if no recognised entry was found.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Split the text of one record into its tagged entries.
///
/// Blank lines are dropped, and so are lines whose tag is not one of the known
/// entry types. There is no failure case: an empty or malformed record simply
/// yields no entries.
pub fn group_entries<S: AsRef<str>>(record_text: S) -> GroupedEntries {
    let (ignored_lines, pairs): (Vec<_>, Vec<_>) = record_text
        .as_ref()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .partition_map(parse_entry_line);

    let mut data: HashMap<EntryTag, Vec<String>> = HashMap::new();
    for (tag, value) in pairs {
        data.entry(tag).or_default().push(value);
    }

    GroupedEntries {
        data,
        ignored_lines,
    }
}

/// Parse a line as a tagged entry, or hand it back untouched.
fn parse_entry_line(line: &str) -> Either<String, (EntryTag, String)> {
    split_on_colon(line)
        .and_then(|(k, v)| match_entry_tag(k, v))
        .map(|(tag, v)| Right((tag, v.to_string())))
        .unwrap_or_else(|| {
            trace!("skipping line without a known entry tag: {line}");
            Left(line.to_string())
        })
}

/// Match `key` with a known [EntryTag].
fn match_entry_tag<V>(key: &str, value: V) -> Option<(EntryTag, V)> {
    EntryTag::from_tag(key).map(|tag| (tag, value))
}

/// Split on the first `:` and trim both sides.
fn split_on_colon(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').map(|(l, r)| (l.trim(), r.trim()))
}
