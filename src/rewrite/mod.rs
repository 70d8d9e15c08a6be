// Bulk rewriting of CSS source text, one unit at a time

pub mod rewriter;

#[cfg(test)]
mod tests;

pub use rewriter::{rewrite, BulkCodeRewriter, RewriteOutcome};
