/// Rendering failed because a node violates a structural invariant.
///
/// These indicate a construction-time logic defect in whatever built the
/// tree, not malformed user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("text node has no text to render")]
    MissingText,
    #[error("element node has no tag")]
    MissingTag,
    #[error("element node <{0}> has no children")]
    NoChildren(String),
}

/// An ordered list of attribute name/value pairs.
///
/// Insertion order is render order, so attributes come out in the order the
/// builder pushed them.
pub type Attrs = Vec<(String, String)>;

/// Renders attribute pairs as ` name="value"` in insertion order.
///
/// An empty list renders as the empty string. Values are inserted verbatim.
pub fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    out
}

/// A leaf node holding literal text, optionally wrapped in a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// Wrapping tag. `None` renders the text bare.
    pub tag: Option<String>,
    /// The text content. `None` is unrenderable; the empty string is valid
    /// (used for `img`, which carries everything in its attributes).
    pub text: Option<String>,
    pub attrs: Attrs,
}

impl TextNode {
    /// A bare text leaf with no wrapping tag.
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: Some(text.into()),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf, e.g. `<b>text</b>`.
    pub fn tagged(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            text: Some(text.into()),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf with attributes, e.g. `<a href="...">text</a>`.
    pub fn with_attrs(tag: impl Into<String>, text: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            tag: Some(tag.into()),
            text: Some(text.into()),
            attrs,
        }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let text = self.text.as_deref().ok_or(RenderError::MissingText)?;
        match self.tag.as_deref() {
            None | Some("") => Ok(text.to_string()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{text}</{tag}>",
                render_attrs(&self.attrs)
            )),
        }
    }
}

/// An element wrapping an ordered, non-empty list of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attrs: Attrs,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        if self.tag.is_empty() {
            return Err(RenderError::MissingTag);
        }
        if self.children.is_empty() {
            return Err(RenderError::NoChildren(self.tag.clone()));
        }
        let mut inner = String::new();
        for child in &self.children {
            inner.push_str(&child.render()?);
        }
        Ok(format!(
            "<{tag}{attrs}>{inner}</{tag}>",
            tag = self.tag,
            attrs = render_attrs(&self.attrs)
        ))
    }
}

/// A unit of the render tree: either a text leaf or an element with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Text(TextNode),
    Element(ElementNode),
}

impl HtmlNode {
    /// Renders this node and its descendants to an HTML fragment.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Text(t) => t.render(),
            HtmlNode::Element(e) => e.render(),
        }
    }
}

impl From<TextNode> for HtmlNode {
    fn from(node: TextNode) -> Self {
        HtmlNode::Text(node)
    }
}

impl From<ElementNode> for HtmlNode {
    fn from(node: ElementNode) -> Self {
        HtmlNode::Element(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attrs_render_in_insertion_order() {
        let attrs = vec![
            ("alt".to_string(), "a diagram".to_string()),
            ("src".to_string(), "img/diagram.png".to_string()),
        ];
        assert_eq!(
            render_attrs(&attrs),
            " alt=\"a diagram\" src=\"img/diagram.png\""
        );
    }

    #[test]
    fn empty_attrs_render_as_empty_string() {
        assert_eq!(render_attrs(&Vec::new()), "");
    }

    #[test]
    fn bare_text_renders_verbatim() {
        let node = TextNode::bare("just some text");
        assert_eq!(node.render().unwrap(), "just some text");
    }

    #[test]
    fn tagged_text_wraps_in_tag() {
        let node = TextNode::tagged("b", "bold words");
        assert_eq!(node.render().unwrap(), "<b>bold words</b>");
    }

    #[test]
    fn tagged_text_with_attrs() {
        let node = TextNode::with_attrs(
            "a",
            "a link",
            vec![("href".to_string(), "https://example.com".to_string())],
        );
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://example.com\">a link</a>"
        );
    }

    #[test]
    fn empty_text_is_renderable() {
        // The img case: all content lives in the attributes.
        let node = TextNode::with_attrs(
            "img",
            "",
            vec![
                ("alt".to_string(), "alt text".to_string()),
                ("src".to_string(), "u1".to_string()),
            ],
        );
        assert_eq!(node.render().unwrap(), "<img alt=\"alt text\" src=\"u1\"></img>");
    }

    #[test]
    fn missing_text_fails_to_render() {
        let node = TextNode {
            tag: Some("p".to_string()),
            text: None,
            attrs: Vec::new(),
        };
        assert_eq!(node.render(), Err(RenderError::MissingText));
    }

    #[test]
    fn element_concatenates_children() {
        let node = ElementNode::new(
            "p",
            vec![
                TextNode::bare("plain ").into(),
                TextNode::tagged("i", "italic").into(),
            ],
        );
        assert_eq!(node.render().unwrap(), "<p>plain <i>italic</i></p>");
    }

    #[test]
    fn nested_elements_render_fully_nested() {
        let inner = ElementNode::new(
            "p",
            vec![
                TextNode::tagged("b", "one").into(),
                TextNode::bare("two").into(),
            ],
        );
        let outer = ElementNode::new("p", vec![inner.into()]);
        assert_eq!(
            outer.render().unwrap(),
            "<p><p><b>one</b>two</p></p>"
        );
    }

    #[test]
    fn element_without_children_fails() {
        let node = ElementNode::new("ul", Vec::new());
        assert_eq!(node.render(), Err(RenderError::NoChildren("ul".to_string())));
    }

    #[test]
    fn element_without_tag_fails() {
        let node = ElementNode::new("", vec![TextNode::bare("x").into()]);
        assert_eq!(node.render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn no_escaping_is_performed() {
        let node = TextNode::tagged("p", "a < b && c > d");
        assert_eq!(node.render().unwrap(), "<p>a < b && c > d</p>");
    }
}
