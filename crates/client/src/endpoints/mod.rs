//! REST API endpoint implementations.
//!
//! Each function is the request converter for one operation: it builds the
//! method, path, query parameters, and body from a request struct, issues the
//! call through [`request::send_request`], and decodes the typed response.

mod aliases;
mod freeze;
mod lifecycle;
mod maintenance;
mod mappings;
mod params;
mod query_tools;
mod request;
mod resize;
mod settings;
mod templates;
pub mod url;

pub use aliases::{alias_exists, get_alias, update_aliases};
pub use freeze::{freeze_index, unfreeze_index};
pub use lifecycle::{
    close_index, create_index, delete_index, get_index, index_exists, open_index,
};
pub use maintenance::{clear_cache, flush, flush_synced, force_merge, refresh};
pub use mappings::{get_field_mappings, get_mappings, put_mapping};
pub use query_tools::{analyze, validate_query};
pub use request::{decode_json, send_exists, send_request};
pub use resize::{rollover, shrink, split};
pub use settings::{get_settings, update_settings};
pub use templates::{delete_template, get_templates, put_template, template_exists};
