// ---------------------------------------------------------------------------
// Row – one record of a harvest sheet
// ---------------------------------------------------------------------------

/// A single CSV record: the crop (or header) label followed by one value per
/// week.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// First column. Empty when the cell is blank.
    pub label: String,
    /// Remaining columns. Blank or non-numeric cells are stored as `0.0`.
    pub values: Vec<f64>,
}

impl Row {
    /// Build a row from raw CSV fields.
    ///
    /// Returns `None` for a record with no fields at all.
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let label = fields.next()?.to_string();
        let values = fields.map(parse_cell).collect();
        Some(Row { label, values })
    }
}

/// Lenient cell parsing. A quantity with a unit suffix (`60#`, `88.8 lb`)
/// reads as its leading number; anything without one counts as zero.
pub fn parse_cell(cell: &str) -> f64 {
    let cell = cell.trim();
    cell[..numeric_prefix_len(cell)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` run of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };
    end += digits(end);
    if bytes.get(end) == Some(&b'.') {
        end += 1 + digits(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let n = digits(exp);
        if n > 0 {
            end = exp + n;
        }
    }
    end
}

// ---------------------------------------------------------------------------
// Series – the samples collected for one crop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Series {
            label: label.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SeriesPair – the two crops compared in one run
// ---------------------------------------------------------------------------

/// Two series compared index by index. Loader output always has equal
/// lengths; pairs built by hand are checked where lengths matter.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair {
    pub first: Series,
    pub second: Series,
}

impl SeriesPair {
    pub fn new(first: Series, second: Series) -> Self {
        SeriesPair { first, second }
    }
}
