//! Column references and boolean conditions.

use std::fmt;

/// A column reference `table.attr`.
///
/// `attr` may itself be dotted (`t.x.y` has table `t` and attr `x.y`) when a
/// column is reached through a subquery alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    /// Table or alias qualifier.
    pub table: String,
    /// Attribute name or dotted path.
    pub attr: String,
}

/// Qualifier and attribute of the `*` select-list sentinel.
pub const WILDCARD: &str = "*";

impl Column {
    /// Creates a new column reference.
    #[must_use]
    pub fn new(table: impl Into<String>, attr: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            attr: attr.into(),
        }
    }

    /// The `*` projection sentinel: `{table: "*", attr: "*"}`.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new(WILDCARD, WILDCARD)
    }

    /// Returns true for the `*` projection sentinel.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.table == WILDCARD && self.attr == WILDCARD
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            f.write_str(WILDCARD)
        } else {
            write!(f, "{}.{}", self.table, self.attr)
        }
    }
}

/// A literal on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `<>`
    Ne,
}

impl CompareOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Ne => "<>",
        }
    }

    /// Returns the discriminator used in serialized documents.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Le => "LE",
            Self::Ge => "GE",
            Self::Ne => "NE",
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A constant.
    Literal(Literal),
    /// Another column.
    Column(Column),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => lit.fmt(f),
            Self::Column(col) => col.fmt(f),
        }
    }
}

impl From<Literal> for Operand {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Column> for Operand {
    fn from(value: Column) -> Self {
        Self::Column(value)
    }
}

/// A boolean condition attached to `Select` and `Join` nodes.
///
/// The left side of a comparison is always a column; a literal cannot be
/// expressed there.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `left op right`
    Comparison {
        op: CompareOp,
        left: Column,
        right: Operand,
    },
    /// `left AND right`
    And {
        left: Box<Condition>,
        right: Box<Condition>,
    },
    /// `left OR right`
    Or {
        left: Box<Condition>,
        right: Box<Condition>,
    },
    /// `NOT inner`
    Not { inner: Box<Condition> },
}

impl Condition {
    /// Creates a comparison.
    #[must_use]
    pub fn compare(left: Column, op: CompareOp, right: impl Into<Operand>) -> Self {
        Self::Comparison {
            op,
            left,
            right: right.into(),
        }
    }

    /// Creates an equality comparison.
    #[must_use]
    pub fn eq(left: Column, right: impl Into<Operand>) -> Self {
        Self::compare(left, CompareOp::Eq, right)
    }

    /// Combines with AND.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        Self::And {
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Combines with OR.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        Self::Or {
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Negates the condition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not {
            inner: Box::new(self),
        }
    }

    /// Returns the discriminator used in serialized documents.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Comparison { op, .. } => op.tag(),
            Self::And { .. } => "AND",
            Self::Or { .. } => "OR",
            Self::Not { .. } => "NOT",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison { op, left, right } => {
                write!(f, "{left} {} {right}", op.as_str())
            }
            Self::And { left, right } => write!(f, "({left}) AND ({right})"),
            Self::Or { left, right } => write!(f, "({left}) OR ({right})"),
            Self::Not { inner } => write!(f, "NOT ({inner})"),
        }
    }
}
