//! Declaration input.
//!
//! These types are what an external front end hands to the builder: one
//! `ClassDecl` per class body (a reopened class produces several), with
//! ancestor references still by name and type-member declarations still in
//! their argument shape. They double as the JSON snapshot format, and the
//! chained constructors keep test fixtures short.

use crate::symbols::{ClassKind, Modifier};
use rbz_common::SourceLocation;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A reference to an ancestor by name, with the location of the reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loc: SourceLocation::default(),
        }
    }

    #[must_use]
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

/// One class or module body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub superclass: Option<NameRef>,
    /// Included mixins in inclusion order.
    #[serde(default)]
    pub mixins: Vec<NameRef>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub type_members: Vec<TypeMemberDecl>,
    /// Whether the class may leave abstract members unimplemented.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl ClassDecl {
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Module)
    }

    fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            superclass: None,
            mixins: Vec::new(),
            methods: Vec::new(),
            type_members: Vec::new(),
            is_abstract: false,
            is_final: false,
            loc: SourceLocation::default(),
        }
    }

    #[must_use]
    pub fn superclass(mut self, name: impl Into<String>) -> Self {
        self.superclass = Some(NameRef::new(name));
        self
    }

    #[must_use]
    pub fn superclass_ref(mut self, reference: NameRef) -> Self {
        self.superclass = Some(reference);
        self
    }

    #[must_use]
    pub fn mixin(mut self, name: impl Into<String>) -> Self {
        self.mixins.push(NameRef::new(name));
        self
    }

    #[must_use]
    pub fn mixin_ref(mut self, reference: NameRef) -> Self {
        self.mixins.push(reference);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn type_member(mut self, member: TypeMemberDecl) -> Self {
        self.type_members.push(member);
        self
    }

    #[must_use]
    pub fn mark_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    #[must_use]
    pub fn mark_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    #[must_use]
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

/// A method definition and its signature modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// `false` for a method defined without any signature.
    #[serde(default = "default_true")]
    pub has_sig: bool,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl MethodDecl {
    /// A method with a signature and no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            has_sig: true,
            loc: SourceLocation::default(),
        }
    }

    /// A method defined without a signature.
    pub fn without_sig(name: impl Into<String>) -> Self {
        Self {
            has_sig: false,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }
}

/// The syntactic kind of a non-name expression, used in messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExprKind {
    String,
    Integer,
    Float,
    List,
    Hash,
    Nil,
    Call,
    Other,
}

impl ExprKind {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::String => "a string literal",
            Self::Integer => "an integer literal",
            Self::Float => "a float literal",
            Self::List => "a list literal",
            Self::Hash => "a hash literal",
            Self::Nil => "`nil`",
            Self::Call => "a method call",
            Self::Other => "an expression",
        }
    }
}

/// A positional argument to `type_member(...)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeclArg {
    /// A symbol such as `:in` or `:out`.
    Symbol {
        name: String,
        #[serde(default)]
        loc: SourceLocation,
    },
    Expr {
        expr: ExprKind,
        #[serde(default)]
        loc: SourceLocation,
    },
}

impl DeclArg {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol {
            name: name.into(),
            loc: SourceLocation::default(),
        }
    }

    pub fn expr(expr: ExprKind) -> Self {
        Self::Expr {
            expr,
            loc: SourceLocation::default(),
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Symbol { loc, .. } | Self::Expr { loc, .. } => loc,
        }
    }

    #[must_use]
    pub fn at(mut self, new_loc: SourceLocation) -> Self {
        match &mut self {
            Self::Symbol { loc, .. } | Self::Expr { loc, .. } => *loc = new_loc,
        }
        self
    }
}

/// The value of one keyword in the extended `type_member(key: value)` form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OptionValue {
    /// A type reference, e.g. `Integer`.
    Type {
        name: String,
        #[serde(default)]
        loc: SourceLocation,
    },
    Expr {
        expr: ExprKind,
        #[serde(default)]
        loc: SourceLocation,
    },
}

impl OptionValue {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Type { loc, .. } | Self::Expr { loc, .. } => loc,
        }
    }
}

/// One `key: value` pair of the extended form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclOption {
    pub key: String,
    #[serde(default)]
    pub key_loc: SourceLocation,
    pub value: OptionValue,
}

impl DeclOption {
    pub fn ty(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            key_loc: SourceLocation::default(),
            value: OptionValue::Type {
                name: type_name.into(),
                loc: SourceLocation::default(),
            },
        }
    }

    pub fn expr(key: impl Into<String>, expr: ExprKind, loc: SourceLocation) -> Self {
        Self {
            key: key.into(),
            key_loc: SourceLocation::default(),
            value: OptionValue::Expr { expr, loc },
        }
    }

    #[must_use]
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.key_loc = loc;
        self
    }
}

/// The right-hand side of `Name = ...` inside a class body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeMemberValue {
    /// `type_member(args..., key: value...)`. `options` is `None` for the
    /// plain form and `Some` once the keyword form is used, even if empty.
    TypeMember {
        #[serde(default)]
        args: Vec<DeclArg>,
        #[serde(default)]
        options: Option<Vec<DeclOption>>,
    },
    /// Anything else assigned to a name that redeclares a type member.
    Other {
        expr: ExprKind,
        #[serde(default)]
        loc: SourceLocation,
    },
}

/// `Name = <value>` in a class body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMemberDecl {
    pub name: String,
    #[serde(default)]
    pub loc: SourceLocation,
    pub value: TypeMemberValue,
}

impl TypeMemberDecl {
    /// `Name = type_member`
    pub fn invariant(name: impl Into<String>) -> Self {
        Self::with_args(name, Vec::new())
    }

    /// `Name = type_member(:token)`
    pub fn with_variance(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_args(name, vec![DeclArg::symbol(token)])
    }

    pub fn with_args(name: impl Into<String>, args: Vec<DeclArg>) -> Self {
        Self {
            name: name.into(),
            loc: SourceLocation::default(),
            value: TypeMemberValue::TypeMember {
                args,
                options: None,
            },
        }
    }

    /// `Name = type_member(key: value, ...)`
    pub fn with_options(name: impl Into<String>, options: Vec<DeclOption>) -> Self {
        Self {
            name: name.into(),
            loc: SourceLocation::default(),
            value: TypeMemberValue::TypeMember {
                args: Vec::new(),
                options: Some(options),
            },
        }
    }

    /// `Name = <expr>` where `<expr>` is not a `type_member` call.
    pub fn other(name: impl Into<String>, expr: ExprKind) -> Self {
        Self {
            name: name.into(),
            loc: SourceLocation::default(),
            value: TypeMemberValue::Other {
                expr,
                loc: SourceLocation::default(),
            },
        }
    }

    #[must_use]
    pub fn at(mut self, loc: SourceLocation) -> Self {
        if let TypeMemberValue::Other { loc: value_loc, .. } = &mut self.value
            && *value_loc == SourceLocation::default()
        {
            *value_loc = loc.clone();
        }
        self.loc = loc;
        self
    }
}
