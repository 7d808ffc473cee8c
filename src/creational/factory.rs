// Factory Method: an interface for creating objects, where the provider
// decides which concrete type gets created.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PatternError, Result};

// ============================================================================
// Products
// ============================================================================

pub trait DesignTool {
    fn create_design(&self) -> String;
    fn name(&self) -> &'static str;
}

pub struct Figma;
impl DesignTool for Figma {
    fn create_design(&self) -> String {
        "creating a design using Figma!".to_string()
    }
    fn name(&self) -> &'static str {
        "Figma"
    }
}

pub struct AdobeXd;
impl DesignTool for AdobeXd {
    fn create_design(&self) -> String {
        "creating a design using AdobeXD!".to_string()
    }
    fn name(&self) -> &'static str {
        "AdobeXD"
    }
}

pub struct Zeplin;
impl DesignTool for Zeplin {
    fn create_design(&self) -> String {
        "creating a design using Zeplin!".to_string()
    }
    fn name(&self) -> &'static str {
        "Zeplin"
    }
}

// ============================================================================
// Providers (the factory methods)
// ============================================================================

pub trait DesignToolProvider {
    /// Returns a freshly constructed tool, always of the same variant.
    fn get_design_tool(&self) -> Box<dyn DesignTool>;
}

pub struct FigmaProvider;
impl DesignToolProvider for FigmaProvider {
    fn get_design_tool(&self) -> Box<dyn DesignTool> {
        Box::new(Figma)
    }
}

pub struct AdobeXdProvider;
impl DesignToolProvider for AdobeXdProvider {
    fn get_design_tool(&self) -> Box<dyn DesignTool> {
        Box::new(AdobeXd)
    }
}

pub struct ZeplinProvider;
impl DesignToolProvider for ZeplinProvider {
    fn get_design_tool(&self) -> Box<dyn DesignTool> {
        Box::new(Zeplin)
    }
}

// ============================================================================
// Selecting a provider by name
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolVariant {
    Figma,
    AdobeXd,
    Zeplin,
}

impl ToolVariant {
    pub const ALL: [ToolVariant; 3] = [
        ToolVariant::Figma,
        ToolVariant::AdobeXd,
        ToolVariant::Zeplin,
    ];

    pub fn provider(self) -> Box<dyn DesignToolProvider> {
        match self {
            ToolVariant::Figma => Box::new(FigmaProvider),
            ToolVariant::AdobeXd => Box::new(AdobeXdProvider),
            ToolVariant::Zeplin => Box::new(ZeplinProvider),
        }
    }
}

impl fmt::Display for ToolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolVariant::Figma => "Figma",
            ToolVariant::AdobeXd => "AdobeXD",
            ToolVariant::Zeplin => "Zeplin",
        };
        f.pad(name)
    }
}

impl FromStr for ToolVariant {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "figma" => Ok(ToolVariant::Figma),
            "adobexd" | "adobe-xd" | "adobe_xd" => Ok(ToolVariant::AdobeXd),
            "zeplin" => Ok(ToolVariant::Zeplin),
            _ => Err(PatternError::unsupported("design tool", s)),
        }
    }
}

pub fn provider_for(name: &str) -> Result<Box<dyn DesignToolProvider>> {
    let variant: ToolVariant = name.parse()?;
    Ok(variant.provider())
}

// ============================================================================
// Consumer
// ============================================================================

/// Resolves its tool once, at construction, and never looks at which variant it got.
pub struct Designer {
    design_tool: Box<dyn DesignTool>,
}

impl Designer {
    pub fn new(provider: &dyn DesignToolProvider) -> Self {
        let design_tool = provider.get_design_tool();
        debug!(tool = design_tool.name(), "designer resolved design tool");
        Self { design_tool }
    }

    pub fn create_design(&self) -> String {
        self.design_tool.create_design()
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let figma_provider = FigmaProvider;
    let designer1 = Designer::new(&figma_provider);
    writeln!(out, "Designer 1 {}", designer1.create_design())?;

    let adobe_xd_provider = AdobeXdProvider;
    let designer2 = Designer::new(&adobe_xd_provider);
    writeln!(out, "Designer 2 {}", designer2.create_design())?;

    let zeplin_provider = ZeplinProvider;
    let designer3 = Designer::new(&zeplin_provider);
    writeln!(out, "Designer 3 {}", designer3.create_design())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
