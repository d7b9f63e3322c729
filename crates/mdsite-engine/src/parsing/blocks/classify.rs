/// The structural type of a blank-line-delimited block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Splits a document into trimmed, non-empty block strings.
///
/// Blocks are separated by the literal blank-line token `\n\n`; runs of
/// three or more newlines collapse to the same boundaries because the extra
/// pieces trim to empty and are discarded. Each block is trimmed of
/// surrounding spaces and newlines. Order is preserved.
pub fn split_into_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(|piece| piece.trim_matches([' ', '\n']))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies one block into its [`BlockKind`].
///
/// - heading: first whitespace-delimited token is 1-6 `#` characters
/// - code: block starts and ends with the ``` fence
/// - quote: every line starts with `>`
/// - unordered list: every line starts with `* ` or `- `
/// - ordered list: lines read `1. `, `2. `, ... strictly from 1
/// - everything else, including any mismatching line in a would-be
///   quote/list block, is a paragraph
pub fn classify_block(block: &str) -> BlockKind {
    if is_heading(block) {
        return BlockKind::Heading;
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.lines().collect();
    let Some(first) = lines.first() else {
        return BlockKind::Paragraph;
    };

    if first.starts_with('>') {
        if lines.iter().all(|line| line.starts_with('>')) {
            return BlockKind::Quote;
        }
        return BlockKind::Paragraph;
    }
    if first.starts_with("* ") || first.starts_with("- ") {
        if lines
            .iter()
            .all(|line| line.starts_with("* ") || line.starts_with("- "))
        {
            return BlockKind::UnorderedList;
        }
        return BlockKind::Paragraph;
    }
    if first.starts_with("1. ") {
        if lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
        {
            return BlockKind::OrderedList;
        }
        return BlockKind::Paragraph;
    }

    BlockKind::Paragraph
}

fn is_heading(block: &str) -> bool {
    block.split_whitespace().next().is_some_and(|token| {
        (1..=6).contains(&token.len()) && token.bytes().all(|b| b == b'#')
    })
}
