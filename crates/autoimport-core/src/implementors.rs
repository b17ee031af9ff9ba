use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One implementation descriptor in the documentation index: a display
/// string, a synthetic flag, and an auxiliary type list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementor {
    pub text: String,
    pub synthetic: bool,
    pub types: Vec<String>,
}

impl Implementor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            synthetic: false,
            types: Vec::new(),
        }
    }
}

/// Static index mapping package names to the implementations their glue
/// provides, rendered for the documentation browser via [`to_js`].
///
/// [`to_js`]: ImplementorIndex::to_js
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorIndex {
    packages: BTreeMap<String, Vec<Implementor>>,
}

impl ImplementorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the tool: Ruby standard-library packages and
    /// the classes their generated glue registers.
    pub fn builtin() -> Self {
        let mut index = Self::new();
        index.insert("delegate", vec![Implementor::new("impl File for Delegate")]);
        index.insert(
            "forwardable",
            vec![
                Implementor::new("impl File for Forwardable"),
                Implementor::new("impl File for SingleForwardable"),
            ],
        );
        index.insert("json", vec![Implementor::new("impl File for Json")]);
        index.insert("ostruct", vec![Implementor::new("impl File for OpenStruct")]);
        index.insert(
            "set",
            vec![
                Implementor::new("impl File for Set"),
                Implementor::new("impl File for SortedSet"),
            ],
        );
        index.insert("uri", vec![Implementor::new("impl File for Uri")]);
        index
    }

    pub fn insert(&mut self, package: impl Into<String>, implementors: Vec<Implementor>) {
        self.packages.insert(package.into(), implementors);
    }

    pub fn get(&self, package: &str) -> Option<&[Implementor]> {
        self.packages.get(package).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Renders the client-side documentation fragment: one registration line
    /// per package in sorted order, then the hook handoff — registered
    /// immediately when `register_implementors` exists at load time, else
    /// parked in `pending_implementors`.
    pub fn to_js(&self) -> String {
        let mut out = String::from("(function() {var implementors = {};\n");
        for (package, implementors) in &self.packages {
            let key = serde_json::to_string(package).unwrap();
            let value = serde_json::to_string(implementors).unwrap();
            out.push_str(&format!("implementors[{key}] = {value};\n"));
        }
        out.push_str(
            "if (window.register_implementors) {window.register_implementors(implementors);} \
             else {window.pending_implementors = implementors;}})()",
        );
        out
    }
}
