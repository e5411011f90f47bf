mod dashboard;
pub use dashboard::Dashboard;

mod reports;
pub use reports::Reports;

mod transaction;
pub use transaction::NewTransaction;
