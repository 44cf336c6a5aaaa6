// AST (Abstract Syntax Tree) definitions for pi-calculus process declarations

use std::fmt;

/// Source location information for error reporting
///
/// Both coordinates are zero-based; `Display` renders them one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line + 1, self.column + 1)
    }
}

/// A textual name; two identifiers are equal when their text is equal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::new(value)
    }
}

/// Process terms
///
/// Every continuation is exclusively owned by its parent node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proc {
    /// The inert process `0`
    Zero { location: SourceLocation },
    /// `tau . next`
    TauPrefix {
        next: Box<Proc>,
        location: SourceLocation,
    },
    /// `subject(object) . next`, binding `object` in `next`
    PositivePrefix {
        subject: Identifier,
        object: Identifier,
        next: Box<Proc>,
        location: SourceLocation,
    },
    /// `subject'object . next`
    NegativePrefix {
        subject: Identifier,
        object: Identifier,
        next: Box<Proc>,
        location: SourceLocation,
    },
    /// `[name1 = name2] next`
    Match {
        name1: Identifier,
        name2: Identifier,
        next: Box<Proc>,
        location: SourceLocation,
    },
    /// `(^name) next`, binding a fresh private `name` in `next`
    Restriction {
        name: Identifier,
        next: Box<Proc>,
        location: SourceLocation,
    },
    /// `lhs + rhs`
    Sum {
        lhs: Box<Proc>,
        rhs: Box<Proc>,
        location: SourceLocation,
    },
    /// `lhs | rhs`
    Parallel {
        lhs: Box<Proc>,
        rhs: Box<Proc>,
        location: SourceLocation,
    },
    /// `Name(a, b, ...)`, a call of a declared process
    IdentifierCall {
        name: Identifier,
        args: Vec<Identifier>,
        location: SourceLocation,
    },
}

impl Proc {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Proc::Zero { location }
            | Proc::TauPrefix { location, .. }
            | Proc::PositivePrefix { location, .. }
            | Proc::NegativePrefix { location, .. }
            | Proc::Match { location, .. }
            | Proc::Restriction { location, .. }
            | Proc::Sum { location, .. }
            | Proc::Parallel { location, .. }
            | Proc::IdentifierCall { location, .. } => *location,
        }
    }
}

fn write_name_list(f: &mut fmt::Formatter<'_>, names: &[Identifier]) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", name)?;
    }
    Ok(())
}

impl fmt::Display for Proc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proc::Zero { .. } => write!(f, "0"),
            Proc::TauPrefix { next, .. } => write!(f, "tau . {}", next),
            Proc::PositivePrefix {
                subject,
                object,
                next,
                ..
            } => write!(f, "{}({}) . {}", subject, object, next),
            Proc::NegativePrefix {
                subject,
                object,
                next,
                ..
            } => write!(f, "{}'{} . {}", subject, object, next),
            Proc::Match {
                name1, name2, next, ..
            } => write!(f, "[{} = {}] {}", name1, name2, next),
            Proc::Restriction { name, next, .. } => write!(f, "(^{}) {}", name, next),
            Proc::Sum { lhs, rhs, .. } => write!(f, "({} + {})", lhs, rhs),
            Proc::Parallel { lhs, rhs, .. } => write!(f, "({} | {})", lhs, rhs),
            Proc::IdentifierCall { name, args, .. } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    write_name_list(f, args)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

/// A named, parameterized process declaration: `agent Name(params) = body;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcDecl {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Proc,
    pub location: SourceLocation,
}

impl fmt::Display for ProcDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent {}", self.name)?;
        if !self.params.is_empty() {
            write!(f, "(")?;
            write_name_list(f, &self.params)?;
            write!(f, ")")?;
        }
        write!(f, " = {};", self.body)
    }
}

/// Top-level module structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub declarations: Vec<ProcDecl>, // Declaration order fixes each declaration's index
}

impl Module {
    pub fn new(declarations: Vec<ProcDecl>) -> Self {
        Module { declarations }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.declarations {
            writeln!(f, "{}", decl)?;
        }
        Ok(())
    }
}
