//! Column-aligned `title : value` listings.
//!
//! Used for the contact listing, search results and upcoming birthdays:
//!
//! ```text
//! You have 2 contacts:
//!   Alice : 1234567890
//!   Bob   : 9876543210; 7233232321
//! ```

/// Default indentation in front of every line.
pub const DEFAULT_OFFSET: &str = "  ";

/// Default text between a title and its value.
pub const DEFAULT_SEPARATOR: &str = " : ";

/// A list of `(title, value)` pairs rendered with titles padded to one width.
#[derive(Debug, Clone)]
pub struct AlignedList {
    items: Vec<(String, String)>,
    offset: String,
    separator: String,
}

impl AlignedList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offset: DEFAULT_OFFSET.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Replace the indentation placed before each line.
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Replace the text placed between titles and values.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn push(&mut self, title: impl Into<String>, value: impl Into<String>) {
        self.items.push((title.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Aligned lines without a header; empty for an empty list.
    pub fn body(&self) -> String {
        let width = self
            .items
            .iter()
            .map(|(title, _)| title.chars().count())
            .max()
            .unwrap_or(0);

        self.items
            .iter()
            .map(|(title, value)| {
                format!(
                    "{}{:<width$}{}{}",
                    self.offset,
                    title,
                    self.separator,
                    value,
                    width = width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `"<header>:"` followed by the aligned lines.
    pub fn render(&self, header: &str) -> String {
        if self.items.is_empty() {
            return format!("{}:", header);
        }
        format!("{}:\n{}", header, self.body())
    }
}

impl Default for AlignedList {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> FromIterator<(T, V)> for AlignedList
where
    T: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (title, value) in iter {
            list.push(title, value);
        }
        list
    }
}
