use std::io::{self, Write};

use embedsim_ai::EmbeddingVector;

/// Components shown before the ellipsis.
const PREVIEW_LEN: usize = 2;

pub fn reply<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
  writeln!(out, "{text}")
}

pub fn usage<W: Write>(out: &mut W, total_tokens: u32) -> io::Result<()> {
  writeln!(out, "Usage: {total_tokens} tokens")
}

pub fn vector<W: Write>(out: &mut W, position: usize, vector: &EmbeddingVector) -> io::Result<()> {
  let mut preview: Vec<String> = vector
    .values
    .iter()
    .take(PREVIEW_LEN)
    .map(|v| format!("{v:.6}"))
    .collect();
  if vector.values.len() > PREVIEW_LEN {
    preview.push("...".to_owned());
  }

  writeln!(
    out,
    "Embedding {position} (index {}): length={}, preview=[{}]",
    vector.index,
    vector.values.len(),
    preview.join(", ")
  )
}

pub fn similarity<W: Write>(out: &mut W, score: f32) -> io::Result<()> {
  writeln!(
    out,
    "The similarity score between the query and the target is {score:.6}"
  )
}

pub fn cosine<W: Write>(out: &mut W, score: f32) -> io::Result<()> {
  writeln!(out, "Cosine similarity: {score:.6}")
}
