mod ast;
mod block;
mod emit;
mod error;
mod html;
mod inline;

pub use ast::{BlockType, InlineSpan, SpanSeq};
pub use block::{classify, split_blocks};
pub use emit::{block_to_node, document_to_node, extract_title, render_html, span_to_node};
pub use error::ParseError;
pub use html::HtmlNode;
pub use inline::tokenize;
