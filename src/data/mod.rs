//! Data layer: core types, loading, cleaning, and filtering.
//!
//! ```text
//!  data/listings.csv[.gz]
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  resolve path, parse CSV → ListingTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ ListingTable  │  Vec<Listing>, ordered columns
//!   └──────────────┘
//!        │
//!        ├──────────────────┐
//!        ▼                  ▼
//!   ┌──────────┐     ┌───────────────┐
//!   │  price    │     │ neighbourhood  │  clean currency column /
//!   └──────────┘     └───────────────┘  pick + validate area column
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  keyword subset → row indices
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod neighbourhood;
pub mod price;
