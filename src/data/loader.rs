//! CSV Feed Loader Module
//! Downloads the published sales feed and parses it with Polars.

use std::io::Cursor;

use polars::prelude::*;
use thiserror::Error;

use super::record::{COL_PRICE, COL_PRODUCT, COL_QTY, COL_REGION};

/// Columns the rest of the pipeline depends on.
const REQUIRED_COLUMNS: [&str; 4] = [COL_PRODUCT, COL_REGION, COL_QTY, COL_PRICE];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to download feed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("feed is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Fetches the sales feed over HTTP and exposes it as a DataFrame.
pub struct DataLoader {
    url: String,
}

impl DataLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Download the feed and parse it. Any transport or parse failure is
    /// fatal; there is no retry.
    pub fn fetch(&self) -> Result<DataFrame, LoaderError> {
        let response = reqwest::blocking::get(&self.url)?.error_for_status()?;
        let bytes = response.bytes()?;
        Self::parse_csv(&bytes)
    }

    /// Parse CSV bytes into a DataFrame and validate the expected columns.
    pub fn parse_csv(bytes: &[u8]) -> Result<DataFrame, LoaderError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10_000))
            .with_ignore_errors(true)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        for required in REQUIRED_COLUMNS {
            if !df
                .get_column_names()
                .iter()
                .any(|name| name.as_str() == required)
            {
                return Err(LoaderError::MissingColumn(required));
            }
        }

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_feed() {
        let feed = b"produit,region,qte,prix\nClavier,Nord,2,30\nSouris,Sud,5,10\n";
        let df = DataLoader::parse_csv(feed).unwrap();
        assert_eq!(df.height(), 2);
        assert!(df.column(COL_PRODUCT).is_ok());
        assert!(df.column(COL_PRICE).is_ok());
    }

    #[test]
    fn rejects_a_feed_missing_a_required_column() {
        let feed = b"produit,region,qte\nClavier,Nord,2\n";
        let err = DataLoader::parse_csv(feed).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn("prix")));
    }

    #[test]
    fn accepts_a_header_only_feed() {
        let feed = b"produit,region,qte,prix\n";
        let df = DataLoader::parse_csv(feed).unwrap();
        assert_eq!(df.height(), 0);
    }
}
