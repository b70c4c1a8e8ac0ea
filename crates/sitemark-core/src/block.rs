use crate::ast::BlockType;

/// Splits a document into its block strings.
///
/// Blocks are separated by blank lines. The document is trimmed, each
/// block's lines are trimmed individually and re-joined with single
/// newlines, and blocks left empty are dropped.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    markdown
        .trim()
        .split("\n\n")
        .map(|raw| {
            raw.trim()
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect()
}

/// Determines the structural type of one block. First match wins.
pub fn classify(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if lines.len() == 1
        && let Some(level) = heading_level(lines[0])
    {
        return BlockType::Heading(level);
    }

    // Structural fence check only: a single ``` line is its own first and
    // last line and still qualifies.
    let first = lines.first().copied().unwrap_or("");
    let last = lines.last().copied().unwrap_or("");
    if first.trim() == "```" && last.trim() == "```" {
        return BlockType::Code;
    }

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    // Markers must count up from 1 with no gaps or reordering.
    if lines.iter().enumerate().all(|(idx, line)| {
        ordinal_prefix_is_numeric(line) && line.starts_with(&format!("{}. ", idx + 1))
    }) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&byte| byte == b'#').count();
    if (1..=6).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ') {
        return Some(hashes as u8);
    }
    None
}

fn ordinal_prefix_is_numeric(line: &str) -> bool {
    match line.split_once(". ") {
        Some((prefix, _)) => !prefix.is_empty() && prefix.bytes().all(|byte| byte.is_ascii_digit()),
        None => false,
    }
}
