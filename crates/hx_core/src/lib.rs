pub mod error;
pub mod explain;
pub mod types;

pub use error::Error;
pub use explain::Explainer;
pub use types::HeadlineRecord;

pub type Result<T> = std::result::Result<T, Error>;
