mod cards;
pub use cards::MetricCardsPanel;

mod chart_view;
pub use chart_view::ResultsChartPanel;

mod export;
pub use export::{build_csv, build_json, ExportError, ResultsExportPanel};

pub mod state;
pub use state::{DashboardState, Phase, Recomputations, Transition};

pub mod table;
pub use table::{Cell, Column, ResultsTable, SortDirection, TableRow};

mod table_view;
pub use table_view::ResultsTableView;
