//! Site content: the compiled-in navigation and product sequences, plus an
//! optional file-backed override validated at load time.

pub mod constants;
pub mod error;
pub mod site;

pub use constants::{MOCK_PRODUCTS, NAV_LINKS};
pub use error::ContentError;
pub use site::SiteContent;
