mod client;
pub use client::client;

mod cosine_similarity;
pub use cosine_similarity::cosine_similarity;

mod dot_product;
pub use dot_product::dot_product;

mod embed;
pub use embed::embed;

mod embed_many;
pub use embed_many::embed_many;

mod embed_shared;
pub use embed_shared::{EmbeddingBatch, EmbeddingVector};

mod generate_text;
pub use generate_text::generate_text;

mod models;
pub use models::known_dimensions;
