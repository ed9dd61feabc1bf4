//! `mayanfruit-views` — pure view projections.
//!
//! Stateless functions each page runs over a snapshot of the store plus its
//! own UI state (search term, selected facets). Filtering is AND across
//! facets and OR across the page's searchable fields; statistics are plain
//! reductions with guarded ratios.

pub mod accounting;
pub mod customers;
pub mod dashboard;
pub mod filter;
pub mod inventory;
pub mod products;
pub mod purchasing;
pub mod ratio;
pub mod sales;
pub mod suppliers;

pub use accounting::FinancialSummary;
pub use customers::{CustomerFilter, CustomerStats, filter_customers};
pub use dashboard::DashboardMetrics;
pub use filter::{facet_matches, text_matches};
pub use inventory::{InventoryFilter, InventoryStats, filter_movements, net_inventory_change};
pub use products::{filter_fruit, filter_supplies};
pub use purchasing::{PurchaseFilter, PurchaseStats, filter_purchase_orders};
pub use ratio::{percent_change, round1};
pub use sales::{SalesFilter, SalesStats, filter_sales_orders};
pub use suppliers::{SupplierFilter, SupplierStats, filter_suppliers};
