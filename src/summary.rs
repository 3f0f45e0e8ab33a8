use crate::utils::TableView;
use polars::prelude::*;

pub const STAT_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Computes the describe table: one row per entry of [`STAT_NAMES`], one
/// Float64 column per input column. `std` uses ddof 1 and the quantiles
/// interpolate linearly.
pub fn describe(df: &DataFrame) -> PolarsResult<TableView> {
    let values = || all().cast(DataType::Float64);
    let quantile = |q: f64| values().quantile(lit(q), QuantileInterpolOptions::Linear);
    let stats = [
        values().count().cast(DataType::Float64),
        values().mean(),
        values().std(1),
        values().min(),
        quantile(0.25),
        quantile(0.5),
        quantile(0.75),
        values().max(),
    ];

    let mut table: Option<DataFrame> = None;
    for expr in stats {
        let row = df.clone().lazy().select([expr]).collect()?;
        match table.as_mut() {
            Some(t) => {
                t.vstack_mut(&row)?;
            }
            None => table = Some(row),
        }
    }
    let mut table = table.unwrap_or_default();
    table.align_chunks();

    Ok(TableView::new(
        table,
        STAT_NAMES.iter().map(|s| s.to_string()).collect(),
    ))
}

/// The eight describe values of a single column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: f64,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Reads one column out of a table produced by [`describe`].
    pub fn from_describe(stats: &TableView, name: &str) -> PolarsResult<Self> {
        let column = stats.data.column(name)?.f64()?;
        let at = |i: usize| column.get(i).unwrap_or(f64::NAN);
        Ok(Self {
            name: name.to_owned(),
            count: at(0),
            mean: at(1),
            std: at(2),
            min: at(3),
            q25: at(4),
            q50: at(5),
            q75: at(6),
            max: at(7),
        })
    }

    /// Text panel rendering. Count keeps its float form; the rest use
    /// 4 decimals.
    pub fn report(&self) -> String {
        format!(
            "Statistics for {}:\n\
             Count: {:?}\n\
             Mean: {:.4}\n\
             Std: {:.4}\n\
             Min: {:.4}\n\
             25%: {:.4}\n\
             50%: {:.4}\n\
             75%: {:.4}\n\
             Max: {:.4}",
            self.name,
            self.count,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max
        )
    }
}
