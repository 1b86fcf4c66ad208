//! UI Components
//!
//! Leptos components for the dashboard. Each one reads the derived
//! `DashboardView` and sends user actions back through `dispatch`.

pub mod aspect_card;
pub mod ask_panel;
pub mod filter_panel;
pub mod kpi_card;
pub mod loading;
pub mod review_table;
pub mod sentiment_chart;
pub mod theme_toggle;

pub use aspect_card::AspectGrid;
pub use ask_panel::AskPanel;
pub use filter_panel::FilterPanel;
pub use kpi_card::KpiRow;
pub use loading::{InlineLoading, TableSkeleton};
pub use review_table::ReviewTable;
pub use sentiment_chart::SentimentChart;
pub use theme_toggle::ThemeToggle;
