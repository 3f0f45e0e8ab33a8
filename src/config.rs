/// Column names of the Wisconsin breast cancer dataset, in file order.
pub const FEATURE_NAMES: [&str; 30] = [
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

/// Startup settings. Nothing here is read from the command line or the
/// environment; the defaults are the application.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
    pub title: String,
    pub heading: String,
    pub inner_size: [f32; 2],
    pub head_rows: usize,
    pub preview_rows: usize,
    pub default_sample_size: usize,
    pub info_panel_height: f32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            title: "Breast Cancer datasæt udforskning".to_owned(),
            heading: "Breast Cancer Datasæt Udforskning.".to_owned(),
            inner_size: [1000.0, 800.0],
            head_rows: 5,
            preview_rows: 10,
            default_sample_size: 5,
            info_panel_height: 150.0,
        }
    }
}
