//! Reads bids out of a comma separated export and inserts them into a
//! [`Tree`].
//!
//! The first line is a header. Fields may be wrapped in double quotes, in
//! which case they can contain commas and `""` stands for a literal quote.
//! Quoted fields spanning several lines are not supported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, info_span, warn};

use crate::bid::Bid;
use crate::error::{Error, Result};
use crate::tree::Tree;

/// Zero-based positions of the bid fields within a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    /// Column holding [`Bid::id`].
    pub id: usize,
    /// Column holding [`Bid::title`].
    pub title: usize,
    /// Column holding the amount, currency symbol included.
    pub amount: usize,
    /// Column holding [`Bid::fund`].
    pub fund: usize,
}

/// The layout of the monthly eBid sales export.
impl Default for Columns {
    fn default() -> Self {
        Self {
            id: 1,
            title: 0,
            amount: 4,
            fund: 8,
        }
    }
}

/// What a load produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loaded {
    /// The header row, split into column names.
    pub header: Vec<String>,
    /// How many bids were inserted.
    pub count: usize,
}

impl Columns {
    fn widest(&self) -> usize {
        self.id.max(self.title).max(self.amount).max(self.fund)
    }
}

/// Loads every bid in the file at `path` into `tree`, returning the header
/// and how many bids were inserted.
pub fn load_bids(path: &Path, columns: &Columns, tree: &mut Tree) -> Result<Loaded> {
    let _span = info_span!("load_bids", path = %path.display()).entered();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(BufReader::new(file), columns, tree).map_err(|e| match e {
        Error::Console(source) => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Like [`load_bids`] but reads from any buffered reader.
///
/// Loading stops at the first row that is too short. Bids from earlier rows
/// stay in the tree.
///
/// # Examples
///
/// ```
/// use bidtree::loader::{load_from_reader, Columns};
/// use bidtree::Tree;
///
/// let csv = "Title,Id,Amount,Fund\n\"Desk, oak\",98110,$1.50,General\n";
/// let columns = Columns { title: 0, id: 1, amount: 2, fund: 3 };
///
/// let mut tree = Tree::new();
/// let loaded = load_from_reader(csv.as_bytes(), &columns, &mut tree).unwrap();
/// assert_eq!(loaded.count, 1);
/// assert_eq!(loaded.header, ["Title", "Id", "Amount", "Fund"]);
/// assert_eq!(tree.search("98110").map(|b| b.title.as_str()), Some("Desk, oak"));
/// ```
pub fn load_from_reader<R: BufRead>(
    reader: R,
    columns: &Columns,
    tree: &mut Tree,
) -> Result<Loaded> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(header) => split_fields(&header?),
        None => {
            return Ok(Loaded {
                header: Vec::new(),
                count: 0,
            })
        }
    };
    info!(header = %header.join(" | "), "read header");

    let widest = columns.widest();
    let mut count = 0;
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Line numbers are one-based and the header was line 1.
        let line_number = index + 2;

        let fields = split_fields(&line);
        if fields.len() <= widest {
            return Err(Error::MissingColumn {
                line: line_number,
                column: widest,
                found: fields.len(),
            });
        }

        let bid = Bid {
            id: fields[columns.id].clone(),
            title: fields[columns.title].clone(),
            fund: fields[columns.fund].clone(),
            amount: parse_amount(&fields[columns.amount], '$'),
        };
        debug!(line = line_number, id = %bid.id, "parsed bid");
        tree.insert(bid);
        count += 1;
    }

    info!(count, "bids loaded");
    Ok(Loaded { header, count })
}

/// Splits one line into fields, honouring double quotes.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            '\r' if !in_quotes && chars.peek().is_none() => {}
            c => field.push(c),
        }
    }
    fields.push(field);

    fields
}

/// Converts a currency string to a number after removing `symbol`.
///
/// Only the leading numeric part is used, so `"1,234.50"` reads as `1.0`.
/// An exponent is honoured. Anything without a leading number reads as `0.0`.
///
/// ```
/// use bidtree::loader::parse_amount;
///
/// assert_eq!(parse_amount("$102.50", '$'), 102.5);
/// assert_eq!(parse_amount("$1,234.50", '$'), 1.0);
/// assert_eq!(parse_amount("$1e3", '$'), 1000.0);
/// assert_eq!(parse_amount("n/a", '$'), 0.0);
/// ```
pub fn parse_amount(raw: &str, symbol: char) -> f64 {
    let stripped: String = raw.chars().filter(|&c| c != symbol).collect();
    let trimmed = stripped.trim_start();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        if !trimmed.is_empty() {
            warn!(raw, "amount is not a number, using 0");
        }
        return 0.0;
    }
    end += exponent_len(&trimmed[end..]);

    trimmed[..end].parse().unwrap_or_else(|_| {
        warn!(raw, "amount is not a number, using 0");
        0.0
    })
}

/// Length of an `e`/`E` exponent at the start of `rest`, or 0 if there is
/// no complete one.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}
