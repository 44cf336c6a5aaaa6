//! Embedding of the generated term into a complete mCRL2 specification
//!
//! The header is a static mCRL2 specification of the pi-calculus interpreter
//! (`PiInterpreter`, `pi_definition`, `input_prefix`, ...). The generated term
//! is appended between fixed markers as the argument of `init PiInterpreter`.

use std::fs;
use std::io;
use std::path::Path;

/// Where the header is looked up when no other path is given
pub const DEFAULT_TEMPLATE_PATH: &str = "mcrl2/picalc.mcrl2";

pub const PROLOGUE: &str = "init PiInterpreter(\n% BEGIN GENERATED\n";
pub const EPILOGUE: &str = "\n% END GENERATED\n);";

/// Static specification text placed before the generated term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    header: String,
}

impl Template {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let header = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = header.len(), "loaded template");
        Ok(Self::new(header))
    }

    /// Header, prologue, `fragment` and epilogue, in that order
    pub fn wrap(&self, fragment: &str) -> String {
        let mut output =
            String::with_capacity(self.header.len() + PROLOGUE.len() + fragment.len() + EPILOGUE.len());
        output.push_str(&self.header);
        output.push_str(PROLOGUE);
        output.push_str(fragment);
        output.push_str(EPILOGUE);
        output
    }
}

/// The final artifact: `fragment` alone in raw mode, otherwise wrapped in `template`.
pub fn render(fragment: String, template: Option<&Template>) -> String {
    match template {
        Some(template) => template.wrap(&fragment),
        None => fragment,
    }
}
