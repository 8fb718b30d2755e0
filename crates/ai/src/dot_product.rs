use anyhow::anyhow;
use embedsim_shared::AppError;

pub(crate) fn check_dimensions(a: &[f32], b: &[f32]) -> Result<(), AppError> {
  if a.len() != b.len() {
    return Err(AppError::dimension(anyhow!(
      "vector length mismatch: {} vs {}",
      a.len(),
      b.len()
    )));
  }
  Ok(())
}

/// Sum of elementwise products of two equal-length vectors.
///
/// OpenAI embeddings are unit length, so this equals their cosine similarity.
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f32, AppError> {
  check_dimensions(a, b)?;
  Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}
