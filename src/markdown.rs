use std::fmt::Write;

use chrono::{DateTime, Local};
use tracing::{debug, trace, warn};

use crate::block::{Block, Element, List, ListStyle, RICH_TEXT, RichTextBlock, Style};
use crate::config::{Config, DateConfig, Timezone};
use crate::error::{Error, Result};

/// Deepest list indent that is rendered.
pub const MAX_LIST_INDENT: usize = 32;

/// Convert a rich text document to Markdown
pub fn document_to_markdown(doc: &RichTextBlock, config: &Config) -> Result<String> {
    if doc.kind != RICH_TEXT {
        return Err(Error::InvalidRoot(doc.kind.clone()));
    }
    debug!(blocks = doc.elements.len(), "rendering rich text document");

    let mut fragments = Vec::with_capacity(doc.elements.len());
    for block in &doc.elements {
        // Indented lists continue the list above them, so no blank line
        let separator = match block {
            Block::List(list) if list.indent > 0 => "",
            _ => "\n",
        };
        fragments.push(format!("{separator}{}", block_to_markdown(block, config)?));
    }

    Ok(fragments.join("\n").trim().to_string())
}

fn block_to_markdown(block: &Block, config: &Config) -> Result<String> {
    match block {
        Block::Section { elements } => Ok(elements
            .iter()
            .map(|el| element_to_markdown(el, config))
            .collect::<Vec<_>>()
            .join(" ")),
        Block::List(list) => list_to_markdown(list, config),
        Block::Quote { elements } => Ok(format!("> {}", concat_elements(elements, config))),
        Block::Preformatted { elements } => {
            Ok(format!("```\n{}\n```", concat_elements(elements, config)))
        }
    }
}

fn concat_elements(elements: &[Element], config: &Config) -> String {
    elements
        .iter()
        .map(|el| element_to_markdown(el, config))
        .collect()
}

fn list_to_markdown(list: &List, config: &Config) -> Result<String> {
    // Ordered lists only get numbers when asked to
    let first_number = match &list.style {
        ListStyle::Bullet => None,
        ListStyle::Ordered if config.lists.number_ordered => Some(list.offset + 1),
        ListStyle::Ordered => None,
        ListStyle::Unsupported(style) => {
            return Err(Error::UnsupportedListStyle(style.clone()));
        }
    };
    trace!(
        indent = list.indent,
        items = list.elements.len(),
        "rendering list"
    );

    if list.indent > MAX_LIST_INDENT {
        return Err(Error::ListTooDeep(list.indent));
    }
    let indent = "  ".repeat(list.indent);
    let mut items = Vec::with_capacity(list.elements.len());
    for (i, item) in list.elements.iter().enumerate() {
        let content = block_to_markdown(item, config)?;
        match first_number {
            Some(start) => items.push(format!("{indent}{}. {content}", start + i)),
            None => items.push(format!("{indent}- {content}")),
        }
    }

    Ok(items.join("\n"))
}

fn element_to_markdown(el: &Element, config: &Config) -> String {
    match el {
        Element::Broadcast { range } => backtick_surround(range),
        Element::Color { value } => backtick_surround(&format!("#{value}")),
        Element::Channel { channel_id } => backtick_surround(channel_id),
        Element::Date { timestamp } => format_date(*timestamp, &config.date),
        Element::Emoji { name, unicode } => {
            if let Some(unicode) = unicode {
                match decode_code_points(unicode) {
                    Some(emoji) => return emoji,
                    None => warn!(unicode = %unicode, ?name, "undecodable emoji code point"),
                }
            }
            // Neither a usable code point nor a name renders as `::`
            let name = name.as_deref().unwrap_or_default();
            backtick_surround(&format!(":{name}:"))
        }
        Element::Link { url, text, style } => {
            let text = text.as_deref().unwrap_or(url);
            style_to_markdown(format!("[{text}]({url})"), style)
        }
        Element::Team { team_id } => backtick_surround(team_id),
        Element::Text { text, style } => style_to_markdown(text.clone(), style),
        Element::User { user_id } => backtick_surround(user_id),
        Element::Usergroup { usergroup_id } => backtick_surround(usergroup_id),
    }
}

fn backtick_surround(input: &str) -> String {
    format!("`{input}`")
}

/// Wrap in style delimiters: code innermost, then bold, italic, strike.
fn style_to_markdown(input: String, style: &Style) -> String {
    let mut out = input;
    if style.code {
        out = format!("`{out}`");
    }
    if style.bold {
        out = format!("**{out}**");
    }
    if style.italic {
        out = format!("*{out}*");
    }
    if style.strike {
        out = format!("~~{out}~~");
    }
    out
}

/// Decode `1f44d` or `1f44d-1f3fb` into the characters it names.
fn decode_code_points(unicode: &str) -> Option<String> {
    unicode
        .split('-')
        .map(|hex| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
        .collect()
}

fn format_date(timestamp: i64, config: &DateConfig) -> String {
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        warn!(timestamp, "date out of range");
        return timestamp.to_string();
    };

    let mut out = String::new();
    let written = match config.timezone {
        Timezone::Utc => write!(out, "{}", utc.format(&config.format)),
        Timezone::Local => write!(out, "{}", utc.with_timezone(&Local).format(&config.format)),
    };
    if written.is_err() {
        warn!(format = %config.format, "invalid date format");
        return timestamp.to_string();
    }
    out
}
