use crate::config::FEATURE_NAMES;
use crate::error::{Error, Result};
use polars::prelude::*;
use std::io::Cursor;

pub const TARGET_COLUMN: &str = "target";

/// `data/breast_cancer.csv`, copied in by the build script. Empty when the
/// file was absent at build time.
const BUNDLED_CSV: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/breast_cancer.csv"));

/// The table loaded at startup: feature columns (Float64) in source order,
/// then the integer `target` label. Never mutated after loading.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    frame: DataFrame,
    feature_names: Vec<String>,
}

impl Dataset {
    /// The breast cancer dataset embedded in the binary.
    pub fn bundled() -> Result<Self> {
        if BUNDLED_CSV.is_empty() {
            return Err(Error::NotBundled);
        }
        let dataset = Self::from_csv_bytes(BUNDLED_CSV, &FEATURE_NAMES)?;
        log::info!(
            "loaded {} rows and {} columns",
            dataset.height(),
            dataset.width()
        );
        Ok(dataset)
    }

    /// Parses the bundled file layout: a `n_samples,n_features,<target names>`
    /// line followed by headerless rows of features plus the label.
    pub fn from_csv_bytes(bytes: &[u8], feature_names: &[&str]) -> Result<Self> {
        let (header, body) = match bytes.iter().position(|b| *b == b'\n') {
            Some(pos) => (&bytes[..pos], &bytes[pos + 1..]),
            None => (bytes, &bytes[bytes.len()..]),
        };
        let header = std::str::from_utf8(header)
            .map_err(|e| Error::InvalidHeader(e.to_string()))?
            .trim();
        if header.is_empty() {
            return Err(Error::MissingHeader);
        }

        let mut fields = header.split(',').map(str::trim);
        let n_samples = parse_count(fields.next(), "n_samples")?;
        let n_features = parse_count(fields.next(), "n_features")?;

        if n_features != feature_names.len() {
            return Err(Error::FeatureCount {
                expected: feature_names.len(),
                found: n_features,
            });
        }

        let raw = CsvReadOptions::default()
            .with_has_header(false)
            .into_reader_with_file_handle(Cursor::new(body))
            .finish()?;

        if raw.width() != n_features + 1 {
            return Err(Error::ColumnCount {
                expected: n_features + 1,
                found: raw.width(),
            });
        }
        if raw.height() != n_samples {
            return Err(Error::RowCount {
                expected: n_samples,
                found: raw.height(),
            });
        }

        let source_names: Vec<String> = raw
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut exprs: Vec<Expr> = source_names
            .iter()
            .zip(feature_names)
            .map(|(src, name)| col(src).cast(DataType::Float64).alias(name))
            .collect();
        exprs.push(
            col(&source_names[n_features])
                .cast(DataType::Int64)
                .alias(TARGET_COLUMN),
        );
        let frame = raw.lazy().select(exprs).collect()?;

        Ok(Self {
            frame,
            feature_names: feature_names.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn has_feature(&self, name: &str) -> bool {
        self.feature_names.iter().any(|f| f == name)
    }

    pub fn column_mean(&self, feature: &str) -> Result<f64> {
        if !self.has_feature(feature) {
            return Err(Error::UnknownFeature(feature.to_owned()));
        }
        Ok(self.frame.column(feature)?.mean().unwrap_or(f64::NAN))
    }
}

fn parse_count(field: Option<&str>, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| Error::InvalidHeader(format!("missing {what}")))?;
    field
        .parse::<usize>()
        .map_err(|_| Error::InvalidHeader(format!("{what} `{field}` is not a count")))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Dataset;

    pub const FEATURES: [&str; 3] = ["alpha", "beta", "gamma"];

    pub const CSV: &str = "12,3,malignant,benign
1.5,20.25,0.1,0
2.5,18.5,0.2,1
3.25,17.75,0.3,1
4.0,16.5,0.4,0
5.5,15.25,0.5,1
6.75,14.0,0.6,0
7.0,13.5,0.7,1
8.25,12.75,0.8,1
9.5,11.0,0.9,0
10.0,10.5,1.0,1
11.75,9.25,1.1,0
12.5,8.0,1.2,1
";

    pub fn dataset() -> Dataset {
        Dataset::from_csv_bytes(CSV.as_bytes(), &FEATURES).expect("fixture parses")
    }
}
