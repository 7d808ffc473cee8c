// Builder: construct complex objects step by step, producing different
// representations (HTML, CSS) from the same construction code.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::{PatternError, Result};

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Html,
    Css,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 2] = [ComponentKind::Html, ComponentKind::Css];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Html => "html",
            ComponentKind::Css => "css",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ComponentKind::Html),
            "css" => Ok(ComponentKind::Css),
            _ => Err(PatternError::unsupported("component kind", s)),
        }
    }
}

/// A fragment of HTML markup, wrapped in a `<div>` when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlComponent {
    pub content: String,
}

impl HtmlComponent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("<div>{}</div>", self.content)
    }
}

/// A CSS declaration block, applied to the `.element` class when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssComponent {
    pub style: String,
}

impl CssComponent {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(".element {{ {} }}", self.style)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    Html(HtmlComponent),
    Css(CssComponent),
}

impl Component {
    fn new(kind: ComponentKind, payload: String) -> Self {
        match kind {
            ComponentKind::Html => Component::Html(HtmlComponent::new(payload)),
            ComponentKind::Css => Component::Css(CssComponent::new(payload)),
        }
    }

    fn kind(&self) -> ComponentKind {
        match self {
            Component::Html(_) => ComponentKind::Html,
            Component::Css(_) => ComponentKind::Css,
        }
    }

    fn render(&self) -> String {
        match self {
            Component::Html(html) => html.render(),
            Component::Css(css) => css.render(),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates HTML and CSS components and renders each kind on demand.
///
/// Components keep their insertion order; `build` renders only the requested
/// kind, one component per line.
#[derive(Debug, Default, Clone)]
pub struct CodeBuilder {
    components: Vec<Component>,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ComponentKind, payload: impl Into<String>) -> &mut Self {
        let component = Component::new(kind, payload.into());
        debug!(%kind, position = self.components.len(), "adding component");
        self.components.push(component);
        self
    }

    pub fn add_html(&mut self, content: impl Into<String>) -> &mut Self {
        self.add(ComponentKind::Html, content)
    }

    pub fn add_css(&mut self, style: impl Into<String>) -> &mut Self {
        self.add(ComponentKind::Css, style)
    }

    /// Renders every component of `kind` joined by newlines. Empty if none were added.
    pub fn build(&self, kind: ComponentKind) -> String {
        let rendered = self
            .components
            .iter()
            .filter(|component| component.kind() == kind)
            .map(Component::render)
            .join("\n");
        trace!(%kind, bytes = rendered.len(), "built output");
        rendered
    }

    pub fn build_html(&self) -> String {
        self.build(ComponentKind::Html)
    }

    pub fn build_css(&self) -> String {
        self.build(ComponentKind::Css)
    }

    pub fn count(&self, kind: ComponentKind) -> usize {
        self.components.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut builder = CodeBuilder::new();
    builder.add_html("Hello, world!");
    builder.add_css("color: blue;");
    let html_code = builder.build_html();
    let css_code = builder.build_css();

    writeln!(out, "Generated HTML:")?;
    writeln!(out, "{}", html_code)?;
    writeln!(out, "\nGenerated CSS:")?;
    writeln!(out, "{}", css_code)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_html_single() {
        let mut builder = CodeBuilder::new();
        builder.add_html("Hello, world!");
        assert_eq!(builder.build_html(), "<div>Hello, world!</div>");
    }

    #[test]
    fn test_build_css_single() {
        let mut builder = CodeBuilder::new();
        builder.add_css("color: blue;");
        assert_eq!(builder.build_css(), ".element { color: blue; }");
    }

    #[test]
    fn test_chaining_keeps_order() {
        let mut builder = CodeBuilder::new();
        builder
            .add_html("first")
            .add_css("margin: 0;")
            .add_html("second")
            .add(ComponentKind::Css, "padding: 4px;");

        assert_eq!(builder.build_html(), "<div>first</div>\n<div>second</div>");
        assert_eq!(
            builder.build_css(),
            ".element { margin: 0; }\n.element { padding: 4px; }"
        );
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn test_build_empty_kind() {
        let mut builder = CodeBuilder::new();
        assert_eq!(builder.build_html(), "");
        assert_eq!(builder.build_css(), "");
        assert!(builder.is_empty());

        builder.add_html("only html");
        assert_eq!(builder.build_css(), "");
        assert_eq!(builder.count(ComponentKind::Css), 0);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("HTML".parse::<ComponentKind>().unwrap(), ComponentKind::Html);
        assert_eq!(" css ".parse::<ComponentKind>().unwrap(), ComponentKind::Css);

        let err = "svg".parse::<ComponentKind>().unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnsupportedVariant { kind: "component kind", ref name } if name == "svg"
        ));
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Generated HTML:\n<div>Hello, world!</div>\n\n\
             Generated CSS:\n.element { color: blue; }\n"
        );
    }

    fn any_kind() -> impl Strategy<Value = ComponentKind> {
        prop_oneof![Just(ComponentKind::Html), Just(ComponentKind::Css)]
    }

    proptest! {
        #[test]
        fn test_build_preserves_insertion_order(
            adds in prop::collection::vec((any_kind(), "[a-zA-Z0-9:; ]{0,16}"), 0..32)
        ) {
            let mut builder = CodeBuilder::new();
            for (kind, payload) in &adds {
                builder.add(*kind, payload.clone());
            }

            for kind in ComponentKind::ALL {
                let expected: Vec<String> = adds
                    .iter()
                    .filter(|(k, _)| *k == kind)
                    .map(|(_, payload)| match kind {
                        ComponentKind::Html => format!("<div>{}</div>", payload),
                        ComponentKind::Css => format!(".element {{ {} }}", payload),
                    })
                    .collect();

                prop_assert_eq!(builder.count(kind), expected.len());
                prop_assert_eq!(builder.build(kind), expected.join("\n"));
            }
            prop_assert_eq!(builder.len(), adds.len());
        }
    }
}
