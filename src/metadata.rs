//! Transcript metadata table
//!
//! One row per video, comma separated, with a header row naming the columns.
//! The columns we need are `textFile`, `runtimeInMinutes`, `link` and
//! `videoName`, in any order; extra columns are ignored. Fields may be
//! double quoted, in which case commas are literal and `""` is a quote.
//!
//! The stream date isn't a column. It is encoded in the transcript file name
//! as the first bracketed group, `[YYYYMMDD]`.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use chrono::NaiveDate;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until, take_while, take_while_m_n};
use nom::character::complete::{char, space0};
use nom::combinator::{all_consuming, cut, map, value};
use nom::multi::{fold_many0, separated_list1};
use nom::sequence::{delimited, preceded, terminated, tuple};
use errors::*;

pub const TEXT_FILE: &str = "textFile";
pub const RUNTIME: &str = "runtimeInMinutes";
pub const LINK: &str = "link";
pub const TITLE: &str = "videoName";

/// Everything known about a transcript besides its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMeta {
    /// Transcript file name, relative to the corpus directory
    pub text_file: String,
    pub runtime_minutes: u32,
    pub link: String,
    pub title: String,
    pub stream_date: NaiveDate,
}

impl TranscriptMeta {
    /// Describe a transcript, reading the stream date out of its file name.
    pub fn new<S: Into<String>>(text_file: S, runtime_minutes: u32, link: S, title: S) -> Result<Self> {
        let text_file = text_file.into();
        let stream_date = stream_date(&text_file)?;
        Ok(TranscriptMeta {
            text_file: text_file,
            runtime_minutes: runtime_minutes,
            link: link.into(),
            title: title.into(),
            stream_date: stream_date,
        })
    }

    /// The video id, which is whatever follows the last `=` of the link
    pub fn youtube_id(&self) -> &str {
        self.link.rsplit('=').next().unwrap_or("")
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn bracketed_date(input: &str) -> IResult<&str, (&str, &str, &str)> {
    preceded(
        take_until("["),
        preceded(char('['), tuple((
            take_while_m_n(4, 4, is_digit),
            take_while_m_n(2, 2, is_digit),
            take_while_m_n(2, 2, is_digit),
        ))),
    )(input)
}

/// Find the `[YYYYMMDD]` stamp in a transcript file name.
pub fn stream_date(text_file: &str) -> Result<NaiveDate> {
    let (year, month, day) = match bracketed_date(text_file) {
        Ok((_rest, ymd)) => ymd,
        Err(_) => return Err(Error::Metadata(format!(
            "{} has no [YYYYMMDD] stream date in its name", text_file))),
    };
    NaiveDate::from_ymd_opt(year.parse()?, month.parse()?, day.parse()?)
        .ok_or_else(|| Error::Metadata(format!(
            "{} names a date that doesn't exist: {}{}{}", text_file, year, month, day)))
}

fn quoted(input: &str) -> IResult<&str, String> {
    // Once a field opens with a quote it has to close with one
    preceded(
        char('"'),
        cut(terminated(
            fold_many0(
                alt((value("\"", tag("\"\"")), is_not("\""))),
                String::new,
                |mut acc: String, piece: &str| { acc.push_str(piece); acc },
            ),
            char('"'),
        )),
    )(input)
}

fn bare(input: &str) -> IResult<&str, String> {
    map(take_while(|c: char| c != ','), |s: &str| s.trim().to_string())(input)
}

fn record(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(char(','), alt((delimited(space0, quoted, space0), bare)))(input)
}

/// Split one line of the table into its fields.
pub fn parse_row(line: &str) -> Result<Vec<String>> {
    match all_consuming(record)(line.trim_end_matches('\r')) {
        Ok((_, fields)) => Ok(fields),
        Err(e) => Err(Error::Metadata(format!("Could not parse the row {:?}: {}", line, e))),
    }
}

fn column(header: &[String], name: &'static str) -> Result<usize> {
    header.iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::Metadata(format!("the header has no {} column", name)))
}

/// Where each needed column sits in the table
#[derive(Debug, Clone, Copy)]
struct Columns {
    text_file: usize,
    runtime: usize,
    link: usize,
    title: usize,
}

impl Columns {
    fn from_header(line: &str) -> Result<Columns> {
        let header = parse_row(line)?;
        Ok(Columns {
            text_file: column(&header, TEXT_FILE)?,
            runtime: column(&header, RUNTIME)?,
            link: column(&header, LINK)?,
            title: column(&header, TITLE)?,
        })
    }

    /// Read one row; `line_no` is 1-based and only used in messages.
    fn row(&self, line_no: usize, line: &str) -> Result<TranscriptMeta> {
        let fields = parse_row(line)?;
        let field = |i: usize| fields.get(i).ok_or_else(|| Error::Metadata(format!(
            "line {} has {} fields, expected at least {}", line_no, fields.len(), i + 1)));
        let runtime_minutes = field(self.runtime)?.parse::<u32>()
            .map_err(|e| Error::Metadata(format!(
                "line {}: runtime {:?} is not a whole number of minutes ({})",
                line_no, fields[self.runtime], e)))?;
        TranscriptMeta::new(
            field(self.text_file)?.clone(),
            runtime_minutes,
            field(self.link)?.clone(),
            field(self.title)?.clone())
    }
}

/// Parse a whole metadata table. Blank lines are skipped.
///
/// A bad header fails the whole table. A bad row is logged and left out.
pub fn parse_table(text: &str) -> Result<Vec<TranscriptMeta>> {
    let mut lines = text.lines()
        .enumerate()
        .filter(|&(_, line)| !line.trim().is_empty());
    let columns = match lines.next() {
        Some((_, line)) => Columns::from_header(line)?,
        None => return Err(Error::Metadata("the table is empty".to_string())),
    };

    let mut rows = vec![];
    for (line_i, line) in lines {
        match columns.row(line_i + 1, line) {
            Ok(meta) => rows.push(meta),
            Err(err) => warn!("Skipping metadata line {}: {}", line_i + 1, err),
        }
    }
    debug!("Parsed {} metadata rows", rows.len());
    Ok(rows)
}

/// Read and parse a metadata table from disk.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Vec<TranscriptMeta>> {
    let mut text = String::new();
    File::open(path.as_ref())?.read_to_string(&mut text)?;
    parse_table(&text)
}
