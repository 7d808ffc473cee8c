// The pattern catalog: every pattern this crate covers, its category and
// intent, and which runnable demos (if any) illustrate it.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::behavioral::{observer, state, strategy};
use crate::creational::{builder, factory, ui_builder};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, decorator, facade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn summary(self) -> &'static str {
        match self {
            Category::Creational => {
                "Creational design patterns provide object creation mechanisms that increase \
                 flexibility and reuse of existing code."
            }
            Category::Structural => {
                "Structural design patterns explain how to assemble objects and classes into \
                 larger structures, while keeping these structures flexible and efficient."
            }
            Category::Behavioral => {
                "Behavioral design patterns are concerned with algorithms and the assignment of \
                 responsibilities between objects."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        };
        f.pad(name)
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "creational" => Ok(Category::Creational),
            "structural" => Ok(Category::Structural),
            "behavioral" | "behavioural" => Ok(Category::Behavioral),
            _ => Err(PatternError::unsupported("category", s)),
        }
    }
}

// ============================================================================
// Demos
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Demo {
    CodeBuilder,
    UiBuilder,
    FactoryMethod,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::CodeBuilder, Demo::UiBuilder, Demo::FactoryMethod];

    /// Name of the standalone binary running this demo.
    pub fn bin_name(self) -> &'static str {
        match self {
            Demo::CodeBuilder => "p1_code_builder",
            Demo::UiBuilder => "p2_ui_builder",
            Demo::FactoryMethod => "p3_factory_method",
        }
    }

    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        debug!(demo = self.bin_name(), "running demo");
        match self {
            Demo::CodeBuilder => builder::run(out),
            Demo::UiBuilder => ui_builder::run(out),
            Demo::FactoryMethod => factory::run(out),
        }
    }
}

// ============================================================================
// Catalog entries
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PatternInfo {
    pub name: &'static str,
    pub category: Category,
    pub intent: &'static str,
    pub demos: &'static [Demo],
}

impl PatternInfo {
    pub fn is_runnable(&self) -> bool {
        !self.demos.is_empty()
    }
}

static CATALOG: [PatternInfo; 8] = [
    PatternInfo {
        name: "Builder",
        category: Category::Creational,
        intent: "Builder is a creational design pattern that lets you construct complex objects \
            step by step. The pattern allows you to produce different types and representations of \
            an object using the same construction code.",
        demos: &[Demo::CodeBuilder, Demo::UiBuilder],
    },
    PatternInfo {
        name: "Factory Method",
        category: Category::Creational,
        intent: "The Factory Method Design Pattern is a creational design pattern used in \
            software engineering to provide an interface for creating objects in a superclass, \
            while allowing subclasses to alter the type of objects that will be created.",
        demos: &[Demo::FactoryMethod],
    },
    PatternInfo {
        name: "Adapter",
        category: Category::Structural,
        intent: adapter::INTENT,
        demos: &[],
    },
    PatternInfo {
        name: "Facade",
        category: Category::Structural,
        intent: facade::INTENT,
        demos: &[],
    },
    PatternInfo {
        name: "Decorator",
        category: Category::Structural,
        intent: decorator::INTENT,
        demos: &[],
    },
    PatternInfo {
        name: "Observer",
        category: Category::Behavioral,
        intent: observer::INTENT,
        demos: &[],
    },
    PatternInfo {
        name: "Strategy",
        category: Category::Behavioral,
        intent: strategy::INTENT,
        demos: &[],
    },
    PatternInfo {
        name: "State",
        category: Category::Behavioral,
        intent: state::INTENT,
        demos: &[],
    },
];

pub fn catalog() -> &'static [PatternInfo] {
    &CATALOG
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static PatternInfo> {
    CATALOG.iter().filter(move |info| info.category == category)
}

/// Case-insensitive; spaces, hyphens and underscores are ignored ("factory-method" works).
pub fn lookup(name: &str) -> Result<&'static PatternInfo> {
    let wanted = normalize(name);
    debug!(%wanted, "looking up pattern");
    CATALOG
        .iter()
        .find(|info| normalize(info.name) == wanted)
        .ok_or_else(|| PatternError::unsupported("pattern", name))
}

/// Runs a demo by binary name, or every demo of a pattern by pattern name.
pub fn run_demo(name: &str, out: &mut dyn Write) -> Result<()> {
    let wanted = normalize(name);
    if let Some(demo) = Demo::ALL.into_iter().find(|d| normalize(d.bin_name()) == wanted) {
        return demo.run(out);
    }

    let info = lookup(name)?;
    if !info.is_runnable() {
        return Err(PatternError::NotRunnable {
            pattern: info.name.to_string(),
        });
    }
    for (i, demo) in info.demos.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        demo.run(out)?;
    }
    Ok(())
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = catalog().iter().map(|info| info.name).collect();
        assert_eq!(
            names,
            vec![
                "Builder",
                "Factory Method",
                "Adapter",
                "Facade",
                "Decorator",
                "Observer",
                "Strategy",
                "State",
            ]
        );
    }

    #[test]
    fn test_by_category() {
        let structural: Vec<&str> = by_category(Category::Structural).map(|i| i.name).collect();
        assert_eq!(structural, vec!["Adapter", "Facade", "Decorator"]);

        let total: usize = Category::ALL.iter().map(|c| by_category(*c).count()).sum();
        assert_eq!(total, catalog().len());
    }

    #[test]
    fn test_only_creational_patterns_run() {
        for info in catalog() {
            assert_eq!(
                info.is_runnable(),
                info.category == Category::Creational,
                "{}",
                info.name
            );
        }
    }

    #[test]
    fn test_lookup_is_forgiving() {
        assert_eq!(lookup("factory-method").unwrap().name, "Factory Method");
        assert_eq!(lookup("FACTORY_METHOD").unwrap().name, "Factory Method");
        assert_eq!(lookup("observer").unwrap().category, Category::Behavioral);
    }

    #[test]
    fn test_intents_keep_full_description() {
        let closing = [
            ("Builder", "using the same construction code."),
            ("Factory Method", "alter the type of objects that will be created."),
            ("Adapter", "joining functionalities of independent or incompatible interfaces."),
            ("Facade", "enhancing code readability and maintainability."),
            ("Decorator", "promoting code reuse and maintainability."),
            ("Observer", "facilitating flexible and scalable system designs."),
            ("Strategy", "promoting flexibility and enabling runtime selection of algorithms."),
            ("State", "without modifying existing code."),
        ];
        for (name, ending) in closing {
            let intent = lookup(name).unwrap().intent;
            assert!(intent.ends_with(ending), "{}: {}", name, intent);
        }

        assert!(lookup("state").unwrap().intent.contains("it promotes cleaner code,"));
        assert!(!catalog().iter().any(|info| info.intent.contains("  ")));
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("singleton").unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedVariant { kind: "pattern", .. }));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Structural".parse::<Category>().unwrap(), Category::Structural);
        assert_eq!("behavioural".parse::<Category>().unwrap(), Category::Behavioral);
        assert!("functional".parse::<Category>().is_err());
    }

    #[test]
    fn test_run_demo_by_bin_name() {
        let mut out = Vec::new();
        run_demo("p3_factory_method", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Designer 1 creating a design using Figma!"));
    }

    #[test]
    fn test_run_demo_by_pattern_runs_all() {
        let mut out = Vec::new();
        run_demo("builder", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<div>Hello, world!</div>"));
        assert!(text.contains("Checkbox: Remember me"));
        let html_at = text.find("Generated HTML:").unwrap();
        let ui_at = text.find("Created UI Components:").unwrap();
        assert!(html_at < ui_at);
    }

    #[test]
    fn test_run_documented_only() {
        let mut out = Vec::new();
        let err = run_demo("Decorator", &mut out).unwrap_err();
        assert!(matches!(err, PatternError::NotRunnable { ref pattern } if pattern == "Decorator"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(lookup("Factory Method").unwrap()).unwrap();
        assert_eq!(json["category"], "creational");
        assert_eq!(json["demos"][0], "factory_method");
    }
}
