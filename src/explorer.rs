use crate::config::ExplorerConfig;
use crate::dataset::{Dataset, TARGET_COLUMN};
use crate::error::{Error, Result};
use crate::sample::shuffle;
use crate::summary::{describe, ColumnSummary};
use crate::utils::{render_table, RenderedTable, TableView};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The user's current choices in the control row.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub feature: String,
    pub sample_size: usize,
}

/// Read-only text panel contents. `append` starts a new line.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct InfoLog {
    text: String,
}

impl InfoLog {
    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }

    pub(crate) fn append(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }
}

/// Owns the dataset and maps every user action to a derived view that
/// replaces the current grid.
pub struct Explorer {
    dataset: Dataset,
    selection: Selection,
    info: InfoLog,
    table: RenderedTable,
    status: String,
    head_rows: usize,
    preview_rows: usize,
    rng: StdRng,
}

impl Explorer {
    pub fn new(dataset: Dataset, config: &ExplorerConfig) -> Self {
        Self::with_rng(dataset, config, StdRng::from_entropy())
    }

    pub fn with_rng(dataset: Dataset, config: &ExplorerConfig, rng: StdRng) -> Self {
        let height = dataset.height();
        let selection = Selection {
            feature: dataset.feature_names().first().cloned().unwrap_or_default(),
            sample_size: config.default_sample_size.clamp(1, height.max(1)),
        };
        let status = format!(
            "Dataset loaded with {} rows and {} columns",
            height,
            dataset.width()
        );
        let mut explorer = Self {
            dataset,
            selection,
            info: InfoLog::default(),
            table: RenderedTable::default(),
            status,
            head_rows: config.head_rows,
            preview_rows: config.preview_rows,
            rng,
        };
        if let Err(e) = explorer.show_head() {
            log::error!("initial view failed: {e}");
        }
        explorer
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn info(&self) -> &str {
        self.info.as_str()
    }

    pub fn table(&self) -> &RenderedTable {
        &self.table
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn show_full_dataset(&mut self) -> Result<()> {
        log::debug!("showing full dataset");
        let view = TableView::reindexed(self.dataset.frame().clone());
        self.display(&view)
    }

    pub fn show_head(&mut self) -> Result<()> {
        log::debug!("showing first {} rows", self.head_rows);
        let data = self.dataset.frame().head(Some(self.head_rows));
        self.display(&TableView::reindexed(data))
    }

    pub fn shuffle_dataset(&mut self) -> Result<()> {
        let size = self.selection.sample_size;
        log::debug!("shuffling with sample size {size}");
        let view = shuffle(self.dataset.frame(), size, &mut self.rng)?;
        self.display(&view)?;
        self.info
            .append(&format!("Shuffled and showing {} samples", view.data.height()));
        Ok(())
    }

    pub fn show_statistics(&mut self) -> Result<()> {
        log::debug!("describing dataset for `{}`", self.selection.feature);
        let stats = describe(self.dataset.frame())?;
        let summary = ColumnSummary::from_describe(&stats, &self.selection.feature)?;
        self.info.clear();
        self.info.append(&summary.report());
        self.display(&stats)
    }

    pub fn feature_selected(&mut self) -> Result<()> {
        let feature = self.selection.feature.clone();
        let mean = self.dataset.column_mean(&feature)?;
        self.info.clear();
        self.info.append(&format!("Selected feature: {feature}"));
        self.info.append(&format!("Mean value: {mean:.4}"));

        let data = self
            .dataset
            .frame()
            .select([feature.as_str(), TARGET_COLUMN])?
            .head(Some(self.preview_rows));
        self.display(&TableView::reindexed(data))
    }

    /// Changes the selected feature and fires [`Self::feature_selected`]
    /// when the value actually changes.
    pub fn select_feature(&mut self, feature: &str) -> Result<()> {
        if !self.dataset.has_feature(feature) {
            return Err(Error::UnknownFeature(feature.to_owned()));
        }
        if self.selection.feature == feature {
            return Ok(());
        }
        self.selection.feature = feature.to_owned();
        self.feature_selected()
    }

    pub fn set_sample_size(&mut self, size: usize) {
        self.selection.sample_size = size.clamp(1, self.dataset.height().max(1));
    }

    fn display(&mut self, view: &TableView) -> Result<()> {
        let table = render_table(view, self.table.generation + 1)?;
        self.status = table.status();
        self.table = table;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;
    use crate::summary::STAT_NAMES;
    use std::collections::HashSet;

    fn explorer() -> Explorer {
        Explorer::with_rng(
            fixtures::dataset(),
            &ExplorerConfig::default(),
            StdRng::seed_from_u64(3),
        )
    }

    fn first_cells(e: &Explorer) -> Vec<String> {
        e.table().cells.iter().map(|r| r[0].clone()).collect()
    }

    #[test]
    fn starts_on_head_view() {
        let e = explorer();
        assert_eq!(e.table().row_count(), 5);
        assert_eq!(e.table().column_count(), 4);
        assert_eq!(e.status(), "Displaying 5 rows and 4 columns.");
        assert_eq!(e.selection().feature, "alpha");
        assert_eq!(e.selection().sample_size, 5);
        assert!(e.info().is_empty());
    }

    #[test]
    fn head_is_first_five_rows_in_order() {
        let mut e = explorer();
        e.show_full_dataset().unwrap();
        let full = e.table().cells.clone();
        e.show_head().unwrap();
        assert_eq!(e.table().cells, full[..5]);
        assert_eq!(e.table().index, ["0", "1", "2", "3", "4"]);
        assert_eq!(e.table().headers, ["alpha", "beta", "gamma", "target"]);
    }

    #[test]
    fn full_dataset_matches_shape() {
        let mut e = explorer();
        e.show_full_dataset().unwrap();
        assert_eq!(e.table().row_count(), 12);
        assert_eq!(e.table().column_count(), 4);
        assert_eq!(e.status(), "Displaying 12 rows and 4 columns.");
    }

    #[test]
    fn shuffle_full_size_permutes_all_rows() {
        let mut e = explorer();
        e.show_full_dataset().unwrap();
        let mut full = e.table().cells.clone();
        e.set_sample_size(12);
        e.shuffle_dataset().unwrap();
        let mut shuffled = e.table().cells.clone();
        full.sort();
        shuffled.sort();
        assert_eq!(full, shuffled);
        assert_eq!(e.table().index[0], "0");
        assert_eq!(e.info(), "Shuffled and showing 12 samples");
    }

    #[test]
    fn shuffle_subset_has_distinct_rows() {
        let mut e = explorer();
        e.set_sample_size(4);
        e.shuffle_dataset().unwrap();
        assert_eq!(e.table().row_count(), 4);
        let distinct: HashSet<String> = first_cells(&e).into_iter().collect();
        assert_eq!(distinct.len(), 4);
        e.shuffle_dataset().unwrap();
        assert_eq!(
            e.info(),
            "Shuffled and showing 4 samples\nShuffled and showing 4 samples"
        );
    }

    #[test]
    fn sample_size_is_bounded() {
        let mut e = explorer();
        e.set_sample_size(0);
        assert_eq!(e.selection().sample_size, 1);
        e.set_sample_size(500);
        assert_eq!(e.selection().sample_size, 12);
    }

    #[test]
    fn statistics_render_describe_table_and_feature_report() {
        let mut e = explorer();
        e.select_feature("gamma").unwrap();
        e.show_statistics().unwrap();
        assert_eq!(e.table().row_count(), 8);
        assert_eq!(e.table().column_count(), 4);
        assert_eq!(e.table().index, STAT_NAMES);
        assert!(e.table().cells[0].iter().all(|c| c == "12.0"));
        let lines: Vec<&str> = e.info().lines().collect();
        assert_eq!(lines[0], "Statistics for gamma:");
        assert_eq!(lines[1], "Count: 12.0");
        assert_eq!(lines[2], "Mean: 0.6500");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn feature_selection_shows_two_columns_and_mean() {
        let mut e = explorer();
        e.select_feature("beta").unwrap();
        assert_eq!(e.table().headers, ["beta", "target"]);
        assert_eq!(e.table().row_count(), 10);
        assert_eq!(e.status(), "Displaying 10 rows and 2 columns.");
        let mean = e.dataset().column_mean("beta").unwrap();
        assert_eq!(
            e.info(),
            format!("Selected feature: beta\nMean value: {mean:.4}")
        );
    }

    #[test]
    fn reselecting_the_same_feature_does_not_fire() {
        let mut e = explorer();
        e.select_feature("alpha").unwrap();
        assert_eq!(e.table().row_count(), 5);
        assert!(e.info().is_empty());
    }

    #[test]
    fn unknown_feature_is_rejected() {
        let mut e = explorer();
        assert!(matches!(
            e.select_feature("target"),
            Err(Error::UnknownFeature(_))
        ));
        assert_eq!(e.selection().feature, "alpha");
    }

    #[test]
    fn feature_preview_is_capped_by_height() {
        let csv = "3,1,a,b\n0.5,0\n1.5,1\n2.5,0\n";
        let dataset = Dataset::from_csv_bytes(csv.as_bytes(), &["x"]).unwrap();
        let mut e = Explorer::with_rng(
            dataset,
            &ExplorerConfig::default(),
            StdRng::seed_from_u64(0),
        );
        assert_eq!(e.selection().sample_size, 3);
        e.feature_selected().unwrap();
        assert_eq!(e.table().row_count(), 3);
        assert_eq!(e.info(), "Selected feature: x\nMean value: 1.5000");
    }

    #[test]
    fn every_render_bumps_generation() {
        let mut e = explorer();
        let before = e.table().generation;
        e.show_head().unwrap();
        assert_eq!(e.table().generation, before + 1);
    }
}
