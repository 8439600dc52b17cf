use crate::error::ApiError;
use csv::ReaderBuilder;

/// Supported upload formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// Matches `.csv` / `.json` case-insensitively; anything else is unsupported.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".json") {
            Some(FileFormat::Json)
        } else if lower.ends_with(".csv") {
            Some(FileFormat::Csv)
        } else {
            None
        }
    }
}

/// Turns an uploaded file into the values to import as comments.
///
/// CSV: the whole file must parse (quoted fields, embedded commas and newlines,
/// every record the same width), but only the cells of the first record are
/// imported. JSON: the document must be an array of strings; `null` counts as
/// an empty array.
pub fn parse_values(format: FileFormat, contents: &[u8]) -> Result<Vec<String>, ApiError> {
    match format {
        FileFormat::Csv => read_csv_values(contents),
        FileFormat::Json => read_json_values(contents),
    }
}

fn read_csv_values(contents: &[u8]) -> Result<Vec<String>, ApiError> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(contents);

    let mut first_row: Option<Vec<String>> = None;
    for record in reader.records() {
        let record = record?;
        if first_row.is_none() {
            first_row = Some(record.iter().map(str::to_string).collect());
        }
    }
    Ok(first_row.unwrap_or_default())
}

fn read_json_values(contents: &[u8]) -> Result<Vec<String>, ApiError> {
    let values: Option<Vec<String>> = serde_json::from_slice(contents)?;
    Ok(values.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_comes_from_extension() {
        assert_eq!(FileFormat::from_filename("a.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_filename("Export.JSON"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_filename("notes.txt"), None);
        assert_eq!(FileFormat::from_filename("csv"), None);
        assert_eq!(FileFormat::from_filename(""), None);
    }

    #[test]
    fn csv_imports_only_the_first_row() {
        let values = parse_values(FileFormat::Csv, b"a,b,c\nd,e,f\n").unwrap();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn csv_handles_quoted_commas_and_newlines() {
        let values =
            parse_values(FileFormat::Csv, b"\"x, y\",\"multi\nline\",plain\r\n").unwrap();
        assert_eq!(values, vec!["x, y", "multi\nline", "plain"]);
    }

    #[test]
    fn empty_csv_yields_no_values() {
        assert!(parse_values(FileFormat::Csv, b"").unwrap().is_empty());
    }

    #[test]
    fn ragged_csv_is_rejected() {
        let err = parse_values(FileFormat::Csv, b"a,b,c\nd,e\n").unwrap_err();
        assert!(matches!(err, ApiError::InvalidCsv(_)));
        assert!(err.to_string().starts_with("failed to parse CSV"));
    }

    #[test]
    fn json_array_of_strings() {
        let values = parse_values(FileFormat::Json, br#"["x", "y"]"#).unwrap();
        assert_eq!(values, vec!["x", "y"]);
    }

    #[test]
    fn json_null_yields_no_values() {
        assert!(parse_values(FileFormat::Json, b"null").unwrap().is_empty());
    }

    #[test]
    fn json_that_is_not_a_string_array_is_rejected() {
        let bodies: [&[u8]; 3] = [br#"{"a": 1}"#, br#"["x", 2]"#, b"not json"];
        for body in bodies {
            let err = parse_values(FileFormat::Json, body).unwrap_err();
            assert!(matches!(err, ApiError::InvalidJson(_)));
        }
    }
}
