use crate::Result;
use crate::literature::read_error;
use encoding_rs::Encoding;
use log::debug;
use std::io::{self, BufRead};

/// The line separating two records.
pub const RECORD_DIVIDER: &str = "-------------------------------------------------------------------------------";

/// An [Iterator] over the lines of a reader, decoded from a legacy encoding.
///
/// Line endings (`\n` or `\r\n`) are not part of the lines. A line that is not
/// valid in the encoding is an [io::ErrorKind::InvalidData] error; this cannot
/// happen with single byte encodings such as Windows-1252.
pub struct DecodedLines<R> {
    reader: R,
    encoding: &'static Encoding,
    buf: Vec<u8>,
}

impl<R: BufRead> DecodedLines<R> {
    pub(crate) fn new(reader: R, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            encoding,
            buf: Vec::new(),
        }
    }

    /// Reads the next line, `None` at the end of the input.
    pub(crate) fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        decode_line(&self.buf, self.encoding).map(Some)
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

fn decode_line(bytes: &[u8], encoding: &'static Encoding) -> io::Result<String> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("stream did not contain valid {}", encoding.name()),
        ));
    }
    Ok(text.into_owned())
}

/// An [Iterator] over the records of a literature list, one text block each.
///
/// Blocks are separated by [RECORD_DIVIDER] lines, which are not part of any
/// block. A divider closing a block that holds only whitespace is skipped, as is
/// the first divider of the list. The last block does not need a divider.
pub struct RecordBlocks<'a, I> {
    lines: I,
    line_number: usize,
    block: String,
    count: &'a mut usize,
    finished: bool,
}

impl<'a, I> RecordBlocks<'a, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// `line_number` is the number of lines read before the first item of `lines`,
    /// and `count` is incremented for every block yielded.
    pub(crate) fn new(lines: I, line_number: usize, count: &'a mut usize) -> Self {
        Self {
            lines,
            line_number,
            block: String::new(),
            count,
            finished: false,
        }
    }

    fn take_block(&mut self) -> Option<String> {
        if self.block.trim().is_empty() {
            self.block.clear();
            return None;
        }
        *self.count += 1;
        Some(std::mem::take(&mut self.block))
    }
}

impl<I> Iterator for RecordBlocks<'_, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while let Some(line) = self.lines.next() {
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(read_error(err, self.line_number)));
                }
            };

            if line.trim_end() == RECORD_DIVIDER {
                match self.take_block() {
                    Some(block) => return Some(Ok(block)),
                    None => {
                        debug!("skipping divider without a record at line {}", self.line_number);
                        continue;
                    }
                }
            }
            self.block.push_str(&line);
            self.block.push('\n');
        }
        self.finished = true;
        self.take_block().map(Ok)
    }
}
