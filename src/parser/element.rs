use crate::errors::{AppError, AppResult};

/// An in-memory XML element: name, attributes in document order, text, and children.
///
/// `text` is `None` when the element carries no character data at all (`<a/>` or
/// `<a></a>`), which the accessors treat the same as an absent element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    #[cfg(test)]
    pub(crate) fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follows `path` one child at a time, taking the first match at each step.
    /// An empty path returns `self`.
    pub fn lookup(&self, path: &[&str]) -> Option<&Element> {
        path.iter()
            .try_fold(self, |element, segment| element.child(segment))
    }

    /// Text of the deepest element on `path`, if every segment exists and it has text.
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.lookup(path).and_then(Element::text)
    }

    /// Like [`Element::text_at`], defaulting to an empty string.
    pub fn optional_text(&self, path: &[&str]) -> String {
        self.text_at(path).unwrap_or_default().to_string()
    }

    /// Attribute value, defaulting to an empty string when absent.
    pub fn optional_attr(&self, key: &str) -> String {
        self.attr(key).unwrap_or_default().to_string()
    }

    /// Direct child that the schema guarantees to exist.
    pub fn required_child(&self, name: &str) -> AppResult<&Element> {
        self.child(name)
            .ok_or_else(|| AppError::missing(&self.name, name))
    }

    /// Text of a child element that must exist; an element without text yields `""`.
    pub fn required_text(&self, name: &str) -> AppResult<String> {
        Ok(self
            .required_child(name)?
            .text()
            .unwrap_or_default()
            .to_string())
    }

    /// Attribute that the schema guarantees to exist.
    pub fn required_attr(&self, key: &str) -> AppResult<&str> {
        self.attr(key)
            .ok_or_else(|| AppError::missing(&self.name, format!("@{key}")))
    }
}
