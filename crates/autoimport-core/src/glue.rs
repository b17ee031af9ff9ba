use tracing::debug;

use crate::implementors::Implementor;
use crate::scanner::Constant;
use crate::templates;

/// Everything substituted into the glue template: the package name, the
/// normalized source identifiers, the discovered constants, and the known
/// implementations for the package (when the implementor table has an entry).
#[derive(Debug, Clone)]
pub struct GlueFile {
    pub package: String,
    pub sources: Vec<String>,
    pub constants: Vec<Constant>,
    pub implementors: Vec<Implementor>,
}

impl GlueFile {
    pub fn new(package: impl Into<String>, sources: Vec<String>, constants: Vec<Constant>) -> Self {
        Self {
            package: package.into(),
            sources,
            constants,
            implementors: Vec::new(),
        }
    }

    pub fn with_implementors(mut self, implementors: &[Implementor]) -> Self {
        self.implementors = implementors.to_vec();
        self
    }

    /// Renders the generated Rust module. Pure; the caller owns the write.
    pub fn render(&self) -> String {
        let mut out = String::from(templates::GLUE_HEADER);
        out.push('\n');
        out.push_str(&format!(
            "//! Glue for the Ruby `{}` package.\n",
            self.package
        ));
        if !self.implementors.is_empty() {
            out.push_str("//!\n//! Known implementations:\n");
            for implementor in &self.implementors {
                out.push_str(&format!("//! - {}\n", implementor.text));
            }
        }
        out.push('\n');

        out.push_str(&format!("pub const PACKAGE: &str = {:?};\n\n", self.package));

        out.push_str("pub const SOURCES: &[&str] = &[\n");
        for source in &self.sources {
            out.push_str(&format!("    {source:?},\n"));
        }
        out.push_str("];\n\n");

        out.push_str("pub const CONSTANTS: &[(&str, Option<&str>)] = &[\n");
        for constant in &self.constants {
            match &constant.value {
                Some(value) => out.push_str(&format!(
                    "    ({:?}, Some({:?})),\n",
                    constant.name, value
                )),
                None => out.push_str(&format!("    ({:?}, None),\n", constant.name)),
            }
        }
        out.push_str("];\n\n");

        out.push_str(
            "/// Feeds every discovered constant to `record`.\n\
             pub fn register(mut record: impl FnMut(&str, Option<&str>)) {\n\
             \x20   for (name, value) in CONSTANTS {\n\
             \x20       record(name, *value);\n\
             \x20   }\n\
             }\n",
        );

        debug!(bytes = out.len(), package = %self.package, "rendered glue");
        out
    }
}
