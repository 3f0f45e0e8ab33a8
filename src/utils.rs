use egui_extras::{Column, TableBuilder};
use polars::prelude::*;

/// A table derived from the dataset for display, with one index label per row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub data: DataFrame,
    pub index: Vec<String>,
}

impl TableView {
    pub fn new(data: DataFrame, index: Vec<String>) -> Self {
        debug_assert_eq!(data.height(), index.len());
        Self { data, index }
    }

    /// Labels rows with the given original row numbers.
    pub fn with_positions(data: DataFrame, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(data, positions.into_iter().map(|i| i.to_string()).collect())
    }

    /// Labels rows `0..height`.
    pub fn reindexed(data: DataFrame) -> Self {
        let height = data.height();
        Self::with_positions(data, 0..height)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }
}

/// Fully stringified grid contents for one render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub index: Vec<String>,
    pub cells: Vec<Vec<String>>,
    pub generation: u64,
}

impl RenderedTable {
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn status(&self) -> String {
        format!(
            "Displaying {} rows and {} columns.",
            self.row_count(),
            self.column_count()
        )
    }
}

pub fn render_table(view: &TableView, generation: u64) -> PolarsResult<RenderedTable> {
    let columns = view.data.get_columns();
    let headers = columns.iter().map(|c| c.name().to_string()).collect();
    let mut cells = Vec::with_capacity(view.data.height());
    for row in 0..view.data.height() {
        let mut line = Vec::with_capacity(columns.len());
        for column in columns {
            line.push(format_cell(&column.get(row)?));
        }
        cells.push(line);
    }
    Ok(RenderedTable {
        headers,
        index: view.index.clone(),
        cells,
        generation,
    })
}

/// Floats print in their shortest round-trip form; everything else uses the
/// polars display without string quotes.
fn format_cell(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Float64(v) => format!("{v:?}"),
        AnyValue::Float32(v) => format!("{v:?}"),
        other => format!("{}", other).replace('"', ""),
    }
}

pub fn display_table(table: &RenderedTable, ui: &mut egui::Ui) {
    let nr_cols = table.column_count();
    // a new id per render makes the auto columns measure the new content
    ui.push_id(table.generation, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            TableBuilder::new(ui)
                .column(Column::auto())
                .columns(Column::auto().clip(true), nr_cols)
                .striped(true)
                .resizable(true)
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.label("");
                    });
                    for head in &table.headers {
                        header.col(|ui| {
                            ui.strong(head);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, table.row_count(), |mut row| {
                        let row_index = row.index();
                        row.col(|ui| {
                            ui.label(table.index.get(row_index).map_or("", |s| s.as_str()));
                        });
                        for cell in &table.cells[row_index] {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
    });
}
