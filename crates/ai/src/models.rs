/// Output dimensionality of the embedding models the demo is expected to hit.
///
/// Provider prefixes such as `openai/` (OpenRouter naming) are ignored.
pub fn known_dimensions(model: &str) -> Option<usize> {
  let name = model.rsplit('/').next().unwrap_or(model);
  match name {
    "text-embedding-3-large" => Some(3072),
    "text-embedding-3-small" | "text-embedding-ada-002" => Some(1536),
    _ => None,
  }
}
