use crate::utils::TableView;
use polars::prelude::*;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Samples `size` rows without replacement.
///
/// When `size` covers every row the result is the whole frame in a random
/// order, with the row labels reset to `0..n`. A smaller sample keeps the
/// original row numbers as labels. Sizes are clamped into `1..=n`.
pub fn shuffle<R: Rng + ?Sized>(
    df: &DataFrame,
    size: usize,
    rng: &mut R,
) -> PolarsResult<TableView> {
    let height = df.height();
    if height == 0 {
        return Ok(TableView::reindexed(df.clone()));
    }
    let size = size.clamp(1, height);

    if size == height {
        let mut positions: Vec<usize> = (0..height).collect();
        positions.shuffle(rng);
        let data = df.take(&to_idx(&positions))?;
        Ok(TableView::reindexed(data))
    } else {
        let positions = index::sample(rng, height, size).into_vec();
        let data = df.take(&to_idx(&positions))?;
        Ok(TableView::with_positions(data, positions))
    }
}

fn to_idx(positions: &[usize]) -> IdxCa {
    IdxCa::from_vec("", positions.iter().map(|&i| i as IdxSize).collect())
}
