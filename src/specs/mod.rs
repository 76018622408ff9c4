//! # Scraping "specs" module
//!
//! One module per source site. Each spec encodes *where the listing lives in the
//! HTML* and *how to pull title, deadline and status out of one row*.
//!
//! ## What lives here
//! - **Container + row location** (`rows`): `None` when the container is missing,
//!   so the caller can tell layout drift apart from an empty page.
//! - **Field extraction** (`extract`, `extract_detail`): absent cells or
//!   attributes become empty strings; a row that can't be read at all becomes `None`.
//! - Pure functions of the parsed document: same markup in, same fields out.
//!
//! ## What does **not** live here
//! - **Networking, pagination, politeness delays**: see `scrape`.
//! - **Export**: see `file`.
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::collect_site → Adapter::enumerate
//!                                     ↘ Fetch::get → specs::<site>::rows → extract
//! ```
//!
//! ## Testing notes
//! Every spec is tested offline against inline HTML snippets shaped like the live pages.
pub mod koita;
pub mod nia;
pub mod ntis;
pub mod smtech;
