//! Presentational building blocks.
//!
//! [`Card`] and [`PageHeader`] are used by pages; the functions in
//! [`chrome`] render the frame the layout puts around every page.

pub mod chrome;
mod card;
mod page_header;

pub use card::Card;
pub use page_header::PageHeader;
