pub mod csv;
pub mod store;

pub use store::DatasetStore;

pub mod prelude {
    pub use crate::DatasetStore;
    pub use hx_core::{Error, HeadlineRecord, Result};
}
