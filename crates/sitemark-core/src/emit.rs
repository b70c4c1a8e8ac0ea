use crate::ast::{BlockType, InlineSpan};
use crate::block::{classify, split_blocks};
use crate::error::ParseError;
use crate::html::HtmlNode;
use crate::inline::tokenize;

/// Converts a whole Markdown document into a single root `<div>` node.
pub fn document_to_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let mut children = Vec::new();
    for block in split_blocks(markdown) {
        children.push(block_to_node(&block, classify(&block))?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Converts a document straight to its rendered HTML fragment.
pub fn render_html(markdown: &str) -> Result<String, ParseError> {
    Ok(document_to_node(markdown)?.to_html())
}

/// Builds the HTML subtree for one classified block.
pub fn block_to_node(block: &str, kind: BlockType) -> Result<HtmlNode, ParseError> {
    match kind {
        BlockType::Paragraph => {
            let children = inline_children(&block.replace('\n', " "))?;
            Ok(HtmlNode::parent("p", children))
        }
        BlockType::Heading(level) => {
            let rest = block.get(level as usize..).unwrap_or("");
            let rest = rest.strip_prefix(' ').unwrap_or(rest);
            let tag = format!("h{}", level);
            Ok(HtmlNode::parent(tag, inline_children(rest.trim())?))
        }
        BlockType::Code => code_to_node(block),
        BlockType::Quote => {
            let text = block
                .split('\n')
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
        }
        BlockType::UnorderedList => {
            let mut items = Vec::new();
            for line in block.split('\n') {
                let content = line.strip_prefix("- ").unwrap_or(line).trim();
                items.push(HtmlNode::parent("li", inline_children(content)?));
            }
            Ok(HtmlNode::parent("ul", items))
        }
        BlockType::OrderedList => {
            let mut items = Vec::new();
            for line in block.split('\n') {
                let content = match line.split_once(". ") {
                    Some((_, rest)) => rest,
                    None => line,
                };
                items.push(HtmlNode::parent("li", inline_children(content.trim())?));
            }
            Ok(HtmlNode::parent("ol", items))
        }
    }
}

/// Lowers one inline span to its leaf node.
pub fn span_to_node(span: InlineSpan) -> HtmlNode {
    match span {
        InlineSpan::Text(text) => HtmlNode::text(text),
        InlineSpan::Bold(text) => HtmlNode::leaf("b", text),
        InlineSpan::Italic(text) => HtmlNode::leaf("i", text),
        InlineSpan::Code(text) => HtmlNode::leaf("code", text),
        InlineSpan::Link { text, url } => {
            HtmlNode::leaf_with_attrs("a", text, vec![("href".to_string(), url)])
        }
        InlineSpan::Image { alt, url } => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![("src".to_string(), url), ("alt".to_string(), alt)],
        ),
    }
}

/// Returns the text of the first `# ` heading, used as the page title.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    for line in markdown.lines() {
        if let Some(rest) = line.trim().strip_prefix("# ") {
            return Ok(rest.trim().to_string());
        }
    }
    Err(ParseError::MissingTitle)
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize(text)?.into_iter().map(span_to_node).collect())
}

// Code content keeps its raw formatting: the interior lines are joined back
// with newlines, a trailing newline is appended, and no inline pass runs.
fn code_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let lines: Vec<&str> = block.split('\n').collect();
    let first = lines.first().copied().unwrap_or("");
    let last = lines.last().copied().unwrap_or("");
    if first.trim() != "```" || last.trim() != "```" {
        return Err(ParseError::MalformedCodeFence);
    }
    let interior = if lines.len() > 1 {
        &lines[1..lines.len() - 1]
    } else {
        &[] as &[&str]
    };
    let mut content = interior.join("\n");
    content.push('\n');
    Ok(HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent(
            "code",
            vec![HtmlNode::text(content)],
        )],
    ))
}
