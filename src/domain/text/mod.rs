//! Text normalization: tokenizing and paraphrasing log lines

pub mod paraphrase;
pub mod tokenizer;

pub use paraphrase::{paraphrase, Paraphraser, RewriteStep};
pub use tokenizer::tokenize;
