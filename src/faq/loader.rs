//! CSV loader for the FAQ file.

use super::FaqRecord;
use crate::error::{Result, SupportError};
use std::path::Path;
use tracing::{debug, instrument};

const REQUIRED_COLUMNS: [&str; 2] = ["question", "answer"];

/// Read every FAQ record from the CSV file at `path`, in file order.
///
/// The file is read on every call; nothing is cached.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_faqs(path: &Path) -> Result<Vec<FaqRecord>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SupportError::data_source(path, e))?;

    let records = parse_faqs(&content).map_err(|e| SupportError::data_source(path, e))?;
    debug!("Loaded {} FAQ records", records.len());

    Ok(records)
}

/// Parse FAQ records from CSV text with a header row.
///
/// The header must declare `question` and `answer`; any other columns are ignored.
pub fn parse_faqs(content: &str) -> std::result::Result<Vec<FaqRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("missing required column `{}`", column),
            )));
        }
    }

    reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_preserves_file_order() {
        let file = write_csv(
            "question,answer\n\
             How do I reset my password,Click forgot password\n\
             How do I contact support,Email us\n\
             How do I reset my password,Duplicate rows are kept\n",
        );

        let faqs = load_faqs(file.path()).await.unwrap();
        assert_eq!(faqs.len(), 3);
        assert_eq!(faqs[0], FaqRecord::new("How do I reset my password", "Click forgot password"));
        assert_eq!(faqs[1].question, "How do I contact support");
        assert_eq!(faqs[2].answer, "Duplicate rows are kept");
    }

    #[test]
    fn test_extra_columns_and_quoting() {
        let faqs = parse_faqs(
            "id,question,answer,category\n\
             1,\"Where is my order, exactly?\",\"Check the \"\"Orders\"\" page\",shipping\n",
        )
        .unwrap();

        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "Where is my order, exactly?");
        assert_eq!(faqs[0].answer, "Check the \"Orders\" page");
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_faqs("question,answer\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let err = parse_faqs("question,reply\nHi,Hello\n").unwrap_err();
        assert!(err.to_string().contains("answer"));
    }

    #[tokio::test]
    async fn test_missing_file_is_data_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_faqs(&dir.path().join("faqs.csv")).await.unwrap_err();
        assert!(matches!(err, SupportError::DataSource { .. }));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_malformed_rows_are_data_source_error() {
        let file = write_csv("question,answer\nonly one field\n");
        let err = load_faqs(file.path()).await.unwrap_err();
        assert!(matches!(err, SupportError::DataSource { .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_data_source_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"question,answer\n\xff\xfe,bad\n").unwrap();

        let err = load_faqs(file.path()).await.unwrap_err();
        assert!(matches!(err, SupportError::DataSource { .. }));
    }
}
