pub mod client;
pub mod types;

pub use client::SupabaseStore;
pub use types::PostgrestErrorResponse;
