//! CSV reading and per-column cell typing.

use csv::{ReaderBuilder, StringRecord};

use super::{ParseError, RecordSet, Row, Value};

/// Cell texts that read as a missing value.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

/// Parse comma-separated text with a header row into a typed [`RecordSet`].
///
/// Blank lines are skipped. Rows shorter than the header are padded with missing cells;
/// rows longer than the header are rejected.
pub fn parse_csv(input: &[u8]) -> Result<RecordSet, ParseError> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let header: Vec<String> = rdr
        .headers()
        .map_err(csv_error)?
        .iter().map(str::to_string).collect();
    if header.iter().all(|h| h.is_empty()) {
        return Err(ParseError::NoHeader);
    }

    let mut raw: Vec<StringRecord> = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        if record.len() > header.len() {
            return Err(ParseError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: header.len(),
                found: record.len(),
            });
        }
        raw.push(record);
    }

    let kinds: Vec<ColumnKind> = (0..header.len())
        .map(|col| column_kind(raw.iter().map(|r| cell(r, col))))
        .collect();

    let rows = raw
        .iter()
        .map(|record| {
            let cells = kinds
                .iter()
                .enumerate()
                .map(|(col, kind)| typed(cell(record, col), *kind))
                .collect();
            Row::new(cells)
        })
        .collect();

    Ok(RecordSet::new(header, rows))
}

fn csv_error(e: csv::Error) -> ParseError {
    tracing::debug!("csv reader: {}", e);
    ParseError::Csv(e)
}

/// Raw cell text, or `None` when missing (absent or an NA token).
fn cell(record: &StringRecord, col: usize) -> Option<&str> {
    record.get(col).filter(|s| !NA_TOKENS.contains(s))
}

fn looks_numeric(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit()) && s.parse::<f64>().is_ok()
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Fits `i64`; carries whether it is negative.
    Int { negative: bool },
    /// Above `i64::MAX` but within `u64`.
    Wide,
    Float,
    Text,
}

fn classify(s: &str) -> Token {
    if let Ok(n) = s.parse::<i64>() {
        Token::Int { negative: n < 0 }
    } else if s.parse::<u64>().is_ok() {
        Token::Wide
    } else if is_integer_literal(s) {
        // Integer text that overflows 64 bits has no exact numeric form.
        Token::Text
    } else if looks_numeric(s) {
        Token::Float
    } else {
        Token::Text
    }
}

fn column_kind<'a>(cells: impl Iterator<Item = Option<&'a str>>) -> ColumnKind {
    let mut any_missing = false;
    let mut any_float = false;
    let mut any_negative = false;
    let mut any_wide = false;
    for c in cells {
        match c.map(classify) {
            None => any_missing = true,
            Some(Token::Int { negative }) => any_negative |= negative,
            Some(Token::Wide) => any_wide = true,
            Some(Token::Float) => any_float = true,
            Some(Token::Text) => return ColumnKind::Text,
        }
    }
    if any_wide {
        // Unsigned 64-bit ids neither mix with negatives nor survive promotion to float.
        if any_float || any_missing || any_negative {
            ColumnKind::Text
        } else {
            ColumnKind::Integer
        }
    } else if any_float || any_missing {
        ColumnKind::Float
    } else {
        ColumnKind::Integer
    }
}

fn typed(cell: Option<&str>, kind: ColumnKind) -> Value {
    let Some(s) = cell else {
        return Value::Missing;
    };
    match kind {
        ColumnKind::Integer => s
            .parse::<i128>()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::Text(s.to_string())),
        ColumnKind::Float => s
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::Text(s.to_string())),
        ColumnKind::Text => Value::Text(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(rs: &RecordSet, index: usize) -> Vec<String> {
        rs.rows().iter().map(|r| r.get(index).to_string()).collect()
    }

    #[test]
    fn header_and_rows_in_order() {
        let rs = parse_csv(b"Tiffin Number\nA\nB\nC\n").unwrap();
        assert_eq!(rs.header(), ["Tiffin Number"]);
        assert_eq!(col(&rs, 0), ["A", "B", "C"]);
    }

    #[test]
    fn integer_column_stays_integer() {
        let rs = parse_csv(b"n\n101\n007\n").unwrap();
        assert_eq!(rs.rows()[0].get(0), &Value::Integer(101));
        assert_eq!(col(&rs, 0), ["101", "7"]);
    }

    #[test]
    fn integer_column_with_gap_becomes_float() {
        let rs = parse_csv(b"n,x\n101,a\n,b\n102,c\n").unwrap();
        assert_eq!(col(&rs, 0), ["101.0", "nan", "102.0"]);
    }

    #[test]
    fn mixed_column_keeps_text_verbatim() {
        let rs = parse_csv(b"n\n007\nabc\n").unwrap();
        assert_eq!(col(&rs, 0), ["007", "abc"]);
    }

    #[test]
    fn na_tokens_are_missing() {
        let rs = parse_csv(b"a,b\nNA,x\nnull,y\n\"\",z\n").unwrap();
        assert!(rs.rows().iter().all(|r| r.get(0).is_missing()));
        assert_eq!(col(&rs, 0), ["nan", "nan", "nan"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let rs = parse_csv(b"a,b,c\n1,2\n").unwrap();
        assert_eq!(rs.rows()[0].get(2), &Value::Missing);
    }

    #[test]
    fn long_rows_are_rejected() {
        let err = parse_csv(b"a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::RaggedRow {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(parse_csv(b"").unwrap_err(), ParseError::NoHeader));
    }

    #[test]
    fn bom_is_stripped() {
        let rs = parse_csv(b"\xEF\xBB\xBFTiffin Number\n1\n").unwrap();
        assert_eq!(rs.header(), ["Tiffin Number"]);
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let rs = parse_csv(b"Items\n\"rice, dal; roti\"\n").unwrap();
        assert_eq!(col(&rs, 0), ["rice, dal; roti"]);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = parse_csv(b"a\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, ParseError::Csv(_)));
        assert_eq!(err.to_string(), "the file is not valid UTF-8 CSV");
    }

    #[test]
    fn unsigned_64_bit_ids_stay_exact() {
        let rs = parse_csv(b"ID\n12345678901234567890\n18446744073709551615\n42\n").unwrap();
        assert_eq!(rs.rows()[0].get(0), &Value::Integer(12345678901234567890));
        assert_eq!(
            col(&rs, 0),
            ["12345678901234567890", "18446744073709551615", "42"]
        );
    }

    #[test]
    fn integers_beyond_64_bits_stay_text() {
        let rs = parse_csv(b"ID\n12345678901234567890\n99999999999999999999\n").unwrap();
        assert_eq!(
            rs.rows()[1].get(0),
            &Value::Text("99999999999999999999".to_string())
        );
        assert_eq!(col(&rs, 0), ["12345678901234567890", "99999999999999999999"]);
    }

    #[test]
    fn wide_ids_with_gaps_are_not_promoted_to_float() {
        let rs = parse_csv(b"ID,x\n12345678901234567890,a\n,b\n").unwrap();
        assert_eq!(col(&rs, 0), ["12345678901234567890", "nan"]);
    }

    #[test]
    fn wide_ids_mixed_with_negatives_stay_text() {
        let rs = parse_csv(b"ID\n12345678901234567890\n-1\n").unwrap();
        assert_eq!(col(&rs, 0), ["12345678901234567890", "-1"]);
        assert_eq!(rs.rows()[1].get(0), &Value::Text("-1".to_string()));
    }
}
