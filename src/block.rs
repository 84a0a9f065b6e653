use serde::{Deserialize, Deserializer};

/// Discriminant of a rich text document root.
pub const RICH_TEXT: &str = "rich_text";

/// Root of a Slack rich text tree.
///
/// The `type` is kept as a plain string so that a wrong discriminant
/// decodes fine and is reported by the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub elements: Vec<Block>,
}

impl RichTextBlock {
    /// A `rich_text` document holding the given blocks.
    pub fn new(elements: Vec<Block>) -> Self {
        Self {
            kind: RICH_TEXT.to_string(),
            block_id: None,
            elements,
        }
    }
}

/// Block-level nodes of a rich text document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "rich_text_section")]
    Section { elements: Vec<Element> },
    #[serde(rename = "rich_text_list")]
    List(List),
    #[serde(rename = "rich_text_quote")]
    Quote { elements: Vec<Element> },
    #[serde(rename = "rich_text_preformatted")]
    Preformatted { elements: Vec<Element> },
}

/// A list block. Each child block is one item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct List {
    pub style: ListStyle,
    /// Nesting level as declared by the producer.
    #[serde(default)]
    pub indent: usize,
    /// Number of items before this one in an ordered sequence.
    #[serde(default)]
    pub offset: usize,
    pub elements: Vec<Block>,
}

/// Marker style of a list.
///
/// Unknown styles are kept verbatim so the renderer can name them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ListStyle {
    Bullet,
    Ordered,
    Unsupported(String),
}

impl From<String> for ListStyle {
    fn from(style: String) -> Self {
        match style.as_str() {
            "bullet" => Self::Bullet,
            "ordered" => Self::Ordered,
            _ => Self::Unsupported(style),
        }
    }
}

/// Inline leaf nodes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Broadcast {
        range: String,
    },
    Color {
        value: String,
    },
    Channel {
        channel_id: String,
    },
    Date {
        /// Seconds since the Unix epoch
        timestamp: i64,
    },
    /// Carries a code point, a name, or both.
    Emoji {
        #[serde(default)]
        name: Option<String>,
        /// Dash-separated hex code points, e.g. `1f44d-1f3fb`
        #[serde(default)]
        unicode: Option<String>,
    },
    Link {
        url: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        style: Style,
    },
    Team {
        team_id: String,
    },
    Text {
        text: String,
        #[serde(default, deserialize_with = "null_as_default")]
        style: Style,
    },
    User {
        user_id: String,
    },
    Usergroup {
        usergroup_id: String,
    },
}

impl Element {
    /// Unstyled text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Style::default(),
        }
    }

    /// Text run with the given style.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Formatting flags on text and link elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
}
