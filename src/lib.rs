//! # Catalog Search
//!
//! A read-only catalog search service. A fixed set of product-like items is
//! loaded once at startup and served over HTTP and the command line: text
//! search, category filtering, sorting, single-item lookup, related items,
//! and the category list.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────┐
//! │ Catalog file │──▶│       catalog-core        │
//! │ or built-in  │   │ store · search · lookup   │
//! └──────────────┘   └────────────┬─────────────┘
//!                                 │
//!                      ┌──────────┴──────────┐
//!                      ▼                     ▼
//!                 ┌──────────┐          ┌──────────┐
//!                 │   CLI    │          │   HTTP   │
//!                 │(catalog) │          │  (axum)  │
//!                 └──────────┘          └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! catalog serve                          # start HTTP server on 127.0.0.1:8000
//! catalog search coffee
//! catalog search --categories Electronics,Furniture --sort-by price_asc
//! catalog get 3
//! catalog related 1 --limit 2
//! catalog categories
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`catalog`] | Catalog loading (built-in or JSON file) |
//! | [`server`] | HTTP server |
//! | [`search`] | `search` command |
//! | [`get`] | `get` and `related` commands |
//! | [`categories`] | `categories` command |
//! | [`logging`] | Tracing subscriber setup |

pub mod catalog;
pub mod categories;
pub mod config;
pub mod get;
pub mod logging;
pub mod search;
pub mod server;
