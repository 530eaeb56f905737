// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release notes markdown classifier
//!
//! Single-pass line classifier for the markdown subset used in
//! ChitChat release notes: headings, star/dash bullet lists, and
//! paragraphs, with per-token inline styling. There is no nesting and
//! no recursive grammar; numbered lists and tables are not supported.
//!
//! A blank line closes the current block. Inline markers only apply to
//! whole whitespace-separated tokens and never span token boundaries.

/// Block-level element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` through `######` heading, with its level (1-6).
    Heading(u8),
    /// Bullet list introduced by `* ` or `- `.
    Bullets(BulletStyle),
    /// Plain paragraph text.
    Paragraph,
}

/// Marker character a bullet list was introduced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStyle {
    /// `* ` items
    Star,
    /// `- ` items
    Dash,
}

/// One block of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// What kind of block this is.
    pub kind: BlockKind,
    /// Lines with their block marker stripped.
    pub lines: Vec<String>,
}

/// Inline styling of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    /// `*token*`
    Bold,
    /// `_token_`
    Italic,
    /// `__token__`
    Underline,
    /// `~token~`
    Strikethrough,
}

/// A styled token with its markers stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// Classify markdown text into blocks.
///
/// Never fails: unrecognized lines become paragraph text.
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for raw in text.lines() {
        let line = raw.trim_end();

        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        match current.as_mut() {
            None => current = Some(open_block(line)),
            Some(block) => {
                let stripped = match block.kind {
                    // Later bullet lines keep their own marker stripped
                    BlockKind::Bullets(_) => strip_bullet_marker(line),
                    _ => line,
                };
                block.lines.push(stripped.to_string());
            }
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks
}

/// Split a line into styled tokens.
pub fn spans(line: &str) -> Vec<Span> {
    line.split_whitespace().map(classify_token).collect()
}

/// Classify the first line of a new block.
fn open_block(line: &str) -> Block {
    if let Some((level, rest)) = heading_level(line) {
        return Block {
            kind: BlockKind::Heading(level),
            lines: vec![rest.to_string()],
        };
    }

    if let Some(rest) = line.strip_prefix("* ") {
        return Block {
            kind: BlockKind::Bullets(BulletStyle::Star),
            lines: vec![rest.to_string()],
        };
    }

    if let Some(rest) = line.strip_prefix("- ") {
        return Block {
            kind: BlockKind::Bullets(BulletStyle::Dash),
            lines: vec![rest.to_string()],
        };
    }

    Block {
        kind: BlockKind::Paragraph,
        lines: vec![line.to_string()],
    }
}

/// Leading `#` run of length 1-6 followed by a space.
fn heading_level(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest))
}

fn strip_bullet_marker(line: &str) -> &str {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
        .unwrap_or(line)
}

fn classify_token(token: &str) -> Span {
    let styled = |text: &str, marker: char, style: SpanStyle| Span {
        text: text.trim_matches(marker).to_string(),
        style,
    };

    if token.len() > 2 && token.starts_with('*') && token.ends_with('*') {
        styled(token, '*', SpanStyle::Bold)
    } else if token.len() > 4 && token.starts_with("__") && token.ends_with("__") {
        styled(token, '_', SpanStyle::Underline)
    } else if token.len() > 2 && token.starts_with('_') && token.ends_with('_') {
        styled(token, '_', SpanStyle::Italic)
    } else if token.len() > 2 && token.starts_with('~') && token.ends_with('~') {
        styled(token, '~', SpanStyle::Strikethrough)
    } else {
        Span {
            text: token.to_string(),
            style: SpanStyle::Plain,
        }
    }
}
