mod auth;
mod export;

pub use auth::TokenManager;
pub use export::ExportError;
pub use export::csv_columns;
pub use export::write_csv;
pub use export::write_json;
