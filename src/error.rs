use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dataset not bundled, add data/breast_cancer.csv and rebuild")]
    NotBundled,
    #[error("dataset file is empty, expected a `n_samples,n_features,...` line")]
    MissingHeader,
    #[error("invalid dataset header: {0}")]
    InvalidHeader(String),
    #[error("dataset declares {found} features but {expected} feature names are known")]
    FeatureCount { expected: usize, found: usize },
    #[error("dataset has {found} columns, expected {expected}")]
    ColumnCount { expected: usize, found: usize },
    #[error("dataset has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error("unknown feature `{0}`")]
    UnknownFeature(String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, Error>;
