//! HTML node tree and serialization.
//!
//! [`HtmlNode`] is a closed two-variant tree: leaves carry a value and an
//! optional wrapping tag, parents carry a required tag and one or more
//! children. Nodes are assembled bottom-up and validated at render time,
//! not at construction time, so the renderer reports exactly which field
//! was missing.

use std::fmt::Write;

/// Error returned when a malformed tree is rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A leaf node has no value.
    #[error("leaf node is missing a value")]
    MissingValue,
    /// A parent node has no tag.
    #[error("parent node is missing a tag")]
    MissingTag,
    /// A parent node has no children.
    #[error("parent node has no children")]
    EmptyChildren,
}

/// A node in an HTML document tree.
///
/// Attributes are stored as an ordered list of key/value pairs and render
/// in insertion order on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Terminal node. Without a tag it renders as raw text.
    Leaf {
        /// Wrapping element name; `None` renders the value verbatim.
        tag: Option<String>,
        /// Text content. Must be present at render time.
        value: Option<String>,
        /// Ordered attribute pairs.
        attrs: Vec<(String, String)>,
    },
    /// Container node wrapping one or more children.
    Parent {
        /// Element name. Must be present at render time.
        tag: Option<String>,
        /// Child nodes, rendered in order. Must be non-empty.
        children: Vec<HtmlNode>,
        /// Ordered attribute pairs.
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Create a leaf wrapped in the given tag.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Create a tagless leaf that renders as raw text.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Create a parent with the given tag and children.
    #[must_use]
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: Some(tag.into()),
            children,
            attrs: Vec::new(),
        }
    }

    /// Append an attribute, preserving insertion order.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { attrs, .. } | Self::Parent { attrs, .. } => {
                attrs.push((key.into(), value.into()));
            }
        }
        self
    }

    /// Serialize the tree to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingValue`] for a leaf without a value,
    /// [`RenderError::MissingTag`] for a parent without a tag, and
    /// [`RenderError::EmptyChildren`] for a parent with no children.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Leaf { tag, value, attrs } => {
                let value = value.as_ref().ok_or(RenderError::MissingValue)?;
                match tag {
                    None => Ok(value.clone()),
                    Some(tag) => {
                        let mut out = String::with_capacity(value.len() + 2 * tag.len() + 5);
                        out.push('<');
                        out.push_str(tag);
                        render_attrs(attrs, &mut out);
                        write!(out, ">{value}</{tag}>").unwrap();
                        Ok(out)
                    }
                }
            }
            Self::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_ref().ok_or(RenderError::MissingTag)?;
                if children.is_empty() {
                    return Err(RenderError::EmptyChildren);
                }
                let mut out = String::new();
                out.push('<');
                out.push_str(tag);
                render_attrs(attrs, &mut out);
                out.push('>');
                for child in children {
                    out.push_str(&child.render()?);
                }
                write!(out, "</{tag}>").unwrap();
                Ok(out)
            }
        }
    }
}

/// Append attributes as ` key="value"` pairs, one leading space each.
fn render_attrs(attrs: &[(String, String)], out: &mut String) {
    for (key, value) in attrs {
        write!(out, r#" {key}="{value}""#).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tagless_leaf_renders_verbatim() {
        let node = HtmlNode::text("x");
        assert_eq!(node.render().unwrap(), "x");
    }

    #[test]
    fn test_leaf_with_tag() {
        let node = HtmlNode::leaf("p", "Hello");
        assert_eq!(node.render().unwrap(), "<p>Hello</p>");
    }

    #[test]
    fn test_leaf_with_attrs() {
        let node = HtmlNode::leaf("a", "go").with_attr("href", "z");
        assert_eq!(node.render().unwrap(), r#"<a href="z">go</a>"#);
    }

    #[test]
    fn test_attrs_render_in_insertion_order() {
        let node = HtmlNode::leaf("img", "")
            .with_attr("src", "cat.png")
            .with_attr("alt", "a cat");
        assert_eq!(
            node.render().unwrap(),
            r#"<img src="cat.png" alt="a cat"></img>"#
        );

        let reversed = HtmlNode::leaf("img", "")
            .with_attr("alt", "a cat")
            .with_attr("src", "cat.png");
        assert_eq!(
            reversed.render().unwrap(),
            r#"<img alt="a cat" src="cat.png"></img>"#
        );
    }

    #[test]
    fn test_tag_without_attrs_has_no_trailing_space() {
        let node = HtmlNode::leaf("b", "x");
        assert_eq!(node.render().unwrap(), "<b>x</b>");
    }

    #[test]
    fn test_parent_concatenates_children_in_order() {
        let node = HtmlNode::parent(
            "p",
            vec![HtmlNode::leaf("b", "Bold"), HtmlNode::text("text")],
        );
        assert_eq!(node.render().unwrap(), "<p><b>Bold</b>text</p>");
    }

    #[test]
    fn test_nested_parents() {
        let inner = HtmlNode::parent("li", vec![HtmlNode::text("item")]);
        let node = HtmlNode::parent("ul", vec![inner]);
        assert_eq!(node.render().unwrap(), "<ul><li>item</li></ul>");
    }

    #[test]
    fn test_parent_with_attrs() {
        let node = HtmlNode::parent("div", vec![HtmlNode::text("x")]).with_attr("class", "wide");
        assert_eq!(node.render().unwrap(), r#"<div class="wide">x</div>"#);
    }

    #[test]
    fn test_leaf_without_value_fails() {
        let node = HtmlNode::Leaf {
            tag: Some("p".to_owned()),
            value: None,
            attrs: Vec::new(),
        };
        assert_eq!(node.render(), Err(RenderError::MissingValue));
    }

    #[test]
    fn test_parent_without_tag_fails() {
        let node = HtmlNode::Parent {
            tag: None,
            children: vec![HtmlNode::text("x")],
            attrs: Vec::new(),
        };
        assert_eq!(node.render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn test_parent_without_children_fails() {
        let node = HtmlNode::parent("p", Vec::new());
        assert_eq!(node.render(), Err(RenderError::EmptyChildren));
    }

    #[test]
    fn test_child_error_propagates_through_parent() {
        let bad = HtmlNode::Leaf {
            tag: None,
            value: None,
            attrs: Vec::new(),
        };
        let node = HtmlNode::parent("p", vec![bad]);
        assert_eq!(node.render(), Err(RenderError::MissingValue));
    }
}
