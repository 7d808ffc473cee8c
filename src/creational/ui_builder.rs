// Builder with a Director: the Designer knows *how* to assemble a basic UI,
// the concrete DesignTool decides *what* actually gets created.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiComponent {
    Button(Button),
    TextField(TextField),
    Checkbox(Checkbox),
}

impl fmt::Display for UiComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiComponent::Button(button) => write!(f, "Button: {}", button.text),
            UiComponent::TextField(field) => write!(f, "Text Field: {}", field.label),
            UiComponent::Checkbox(checkbox) => write!(f, "Checkbox: {}", checkbox.label),
        }
    }
}

// ============================================================================
// Builder interface and concrete builder
// ============================================================================

pub trait DesignTool {
    fn create_button(&mut self, text: &str);
    fn create_text_field(&mut self, label: &str);
    fn create_checkbox(&mut self, label: &str);
}

/// Collects every created component, in creation order.
#[derive(Debug, Default)]
pub struct Figma {
    components: Vec<UiComponent>,
}

impl Figma {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_design(&self) -> &[UiComponent] {
        &self.components
    }

    fn push(&mut self, component: UiComponent) {
        debug!(%component, "figma created component");
        self.components.push(component);
    }
}

impl DesignTool for Figma {
    fn create_button(&mut self, text: &str) {
        self.push(UiComponent::Button(Button {
            text: text.to_string(),
        }));
    }

    fn create_text_field(&mut self, label: &str) {
        self.push(UiComponent::TextField(TextField {
            label: label.to_string(),
        }));
    }

    fn create_checkbox(&mut self, label: &str) {
        self.push(UiComponent::Checkbox(Checkbox {
            label: label.to_string(),
        }));
    }
}

// ============================================================================
// Director
// ============================================================================

pub struct Designer<'a> {
    design_tool: &'a mut dyn DesignTool,
}

impl<'a> Designer<'a> {
    pub fn new(design_tool: &'a mut dyn DesignTool) -> Self {
        Self { design_tool }
    }

    /// Submit button, username and password fields, then a "Remember me" checkbox.
    pub fn build_basic_ui(&mut self) {
        debug!("building basic ui");
        self.design_tool.create_button("Submit");
        self.design_tool.create_text_field("Username");
        self.design_tool.create_text_field("Password");
        self.design_tool.create_checkbox("Remember me");
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut figma = Figma::new();
    Designer::new(&mut figma).build_basic_ui();

    writeln!(out, "Created UI Components:")?;
    for component in figma.render_design() {
        writeln!(out, "{}", component)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
