pub mod conversion;
pub mod definition;
pub mod document;
pub mod outline;

pub use conversion::*;
pub use definition::*;
pub use outline::*;
