use std::path::Path;

use tokio::{fs::File, io::AsyncWriteExt};

use crate::{Error, Quote, Result};

pub const HEADER: [&str; 3] = ["text", "author", "tags"];

/// Encodes the quotes as CSV: a header row, then `text`, `author` and the legacy tags string per quote.
/// Rows end in `\r\n` and fields are quoted only when they need to be.
pub fn to_csv_bytes(quotes: &[Quote]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::with_capacity(quotes.len() * 128));

    wtr.write_record(HEADER)?;
    for quote in quotes {
        let tags = quote.tags_legacy_repr();
        wtr.write_record([quote.text.as_str(), quote.author.as_str(), tags.as_str()])?;
    }

    wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Creates (or truncates) `path` and writes the whole CSV into it.
pub async fn write_quotes(quotes: &[Quote], path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_csv_bytes(quotes)?;

    let mut file = File::create(path.as_ref()).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("“Plain”", "Albert Einstein", vec!["a".into(), "b".into()]),
            Quote::new("Has, a comma", "Jane \"JA\" Austen", vec![]),
            Quote::new("Two\nlines", "Someone", vec!["don't".into()]),
        ]
    }

    #[test]
    fn test_writes_header_and_rows() {
        let bytes = to_csv_bytes(&sample()).unwrap();
        let out = String::from_utf8(bytes).unwrap();
        assert_eq!(
            out,
            "text,author,tags\r\n\
             “Plain”,Albert Einstein,\"['a', 'b']\"\r\n\
             \"Has, a comma\",\"Jane \"\"JA\"\" Austen\",[]\r\n\
             \"Two\nlines\",Someone,\"[\"\"don't\"\"]\"\r\n"
        );
    }

    #[test]
    fn test_empty_input_writes_only_header() {
        let bytes = to_csv_bytes(&[]).unwrap();
        assert_eq!(bytes, b"text,author,tags\r\n");
    }

    #[tokio::test]
    async fn test_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        let quotes = sample();

        write_quotes(&quotes, &path).await.unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let header = rdr.headers().unwrap().clone();
        assert_eq!(header.iter().collect::<Vec<_>>(), HEADER);

        let rows = rdr.records().collect::<core::result::Result<Vec<_>, _>>().unwrap();
        assert_eq!(rows.len(), quotes.len());
        for (row, quote) in rows.iter().zip(&quotes) {
            assert_eq!(&row[0], quote.text);
            assert_eq!(&row[1], quote.author);
            assert_eq!(&row[2], quote.tags_legacy_repr());
        }
    }

    #[tokio::test]
    async fn test_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::write(&path, "stale contents that are longer than the new file\n".repeat(10)).unwrap();

        write_quotes(&[], &path).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "text,author,tags\r\n");
    }

    #[tokio::test]
    async fn test_unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("quotes.csv");
        let err = write_quotes(&sample(), &path).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
