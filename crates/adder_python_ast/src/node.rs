//! A borrowed any-node union and the per-kind field descriptors.
//!
//! [`AnyNodeRef::fields`] is the single source of truth for a node's kind
//! name and its named, typed field set. Generic consumers (such as a
//! structural dumper) walk this descriptor instead of matching on every node
//! kind themselves, which keeps ordering and layout guarantees centralized.

use crate::nodes::*;

/// A borrowed reference to any node of the tree, including the auxiliary
/// structural kinds that never appear directly in a suite.
#[derive(Clone, Copy, Debug)]
pub enum AnyNodeRef<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Parameters(&'a Parameters),
    ParameterWithDefault(&'a ParameterWithDefault),
    Parameter(&'a Parameter),
    Keyword(&'a Keyword),
    Alias(&'a Alias),
    WithItem(&'a WithItem),
    ExceptHandler(&'a ExceptHandler),
    Comprehension(&'a Comprehension),
    DictItem(&'a DictItem),
    Operator(&'a Operator),
    UnaryOp(&'a UnaryOp),
    BoolOp(&'a BoolOp),
    CmpOp(&'a CmpOp),
}

/// The value of a single named field, as seen by a generic walker.
///
/// Optional fields surface as [`Field::Absent`] when unset, never as a
/// sentinel scalar, so an absent default stays distinguishable from a present
/// falsy one.
#[derive(Clone, Debug)]
pub enum Field<'a> {
    Node(AnyNodeRef<'a>),
    NodeSeq(Vec<AnyNodeRef<'a>>),
    StrSeq(&'a [String]),
    Str(&'a str),
    Int(i64),
    Float(f64),
    Complex { real: f64, imag: f64 },
    Bool(bool),
    Bytes(&'a [u8]),
    Absent,
}

fn node<'a, T>(item: &'a T) -> Field<'a>
where
    &'a T: Into<AnyNodeRef<'a>>,
{
    Field::Node(item.into())
}

fn seq<'a, T>(items: &'a [T]) -> Field<'a>
where
    &'a T: Into<AnyNodeRef<'a>>,
{
    Field::NodeSeq(items.iter().map(Into::into).collect())
}

fn opt<'a, T>(item: Option<&'a T>) -> Field<'a>
where
    &'a T: Into<AnyNodeRef<'a>>,
{
    item.map_or(Field::Absent, |item| Field::Node(item.into()))
}

fn opt_str(item: Option<&str>) -> Field<'_> {
    item.map_or(Field::Absent, Field::Str)
}

impl<'a> AnyNodeRef<'a> {
    /// The node's kind tag, e.g. `"FunctionDef"` or `"Comprehension"`.
    pub fn kind_name(self) -> &'static str {
        match self {
            Self::Stmt(Stmt::FunctionDef(_)) => "FunctionDef",
            Self::Stmt(Stmt::ClassDef(_)) => "ClassDef",
            Self::Stmt(Stmt::Return(_)) => "Return",
            Self::Stmt(Stmt::Delete(_)) => "Delete",
            Self::Stmt(Stmt::Assign(_)) => "Assign",
            Self::Stmt(Stmt::AugAssign(_)) => "AugAssign",
            Self::Stmt(Stmt::For(_)) => "For",
            Self::Stmt(Stmt::While(_)) => "While",
            Self::Stmt(Stmt::If(_)) => "If",
            Self::Stmt(Stmt::With(_)) => "With",
            Self::Stmt(Stmt::Raise(_)) => "Raise",
            Self::Stmt(Stmt::Try(_)) => "Try",
            Self::Stmt(Stmt::Assert(_)) => "Assert",
            Self::Stmt(Stmt::Import(_)) => "Import",
            Self::Stmt(Stmt::ImportFrom(_)) => "ImportFrom",
            Self::Stmt(Stmt::Global(_)) => "Global",
            Self::Stmt(Stmt::Nonlocal(_)) => "Nonlocal",
            Self::Stmt(Stmt::Expr(_)) => "Expr",
            Self::Stmt(Stmt::Pass(_)) => "Pass",
            Self::Stmt(Stmt::Break(_)) => "Break",
            Self::Stmt(Stmt::Continue(_)) => "Continue",
            Self::Expr(Expr::BoolOp(_)) => "BoolOp",
            Self::Expr(Expr::BinOp(_)) => "BinOp",
            Self::Expr(Expr::UnaryOp(_)) => "UnaryOp",
            Self::Expr(Expr::Lambda(_)) => "Lambda",
            Self::Expr(Expr::If(_)) => "IfExp",
            Self::Expr(Expr::Dict(_)) => "Dict",
            Self::Expr(Expr::Set(_)) => "Set",
            Self::Expr(Expr::ListComp(_)) => "ListComp",
            Self::Expr(Expr::SetComp(_)) => "SetComp",
            Self::Expr(Expr::DictComp(_)) => "DictComp",
            Self::Expr(Expr::Generator(_)) => "Generator",
            Self::Expr(Expr::Yield(_)) => "Yield",
            Self::Expr(Expr::YieldFrom(_)) => "YieldFrom",
            Self::Expr(Expr::Compare(_)) => "Compare",
            Self::Expr(Expr::Call(_)) => "Call",
            Self::Expr(Expr::NumberLiteral(_)) => "NumberLiteral",
            Self::Expr(Expr::StringLiteral(_)) => "StringLiteral",
            Self::Expr(Expr::BytesLiteral(_)) => "BytesLiteral",
            Self::Expr(Expr::BooleanLiteral(_)) => "BooleanLiteral",
            Self::Expr(Expr::NoneLiteral(_)) => "NoneLiteral",
            Self::Expr(Expr::EllipsisLiteral(_)) => "EllipsisLiteral",
            Self::Expr(Expr::Attribute(_)) => "Attribute",
            Self::Expr(Expr::Subscript(_)) => "Subscript",
            Self::Expr(Expr::Starred(_)) => "Starred",
            Self::Expr(Expr::Name(_)) => "Name",
            Self::Expr(Expr::List(_)) => "List",
            Self::Expr(Expr::Tuple(_)) => "Tuple",
            Self::Expr(Expr::Slice(_)) => "Slice",
            Self::Parameters(_) => "Parameters",
            Self::ParameterWithDefault(_) => "ParameterWithDefault",
            Self::Parameter(_) => "Parameter",
            Self::Keyword(_) => "Keyword",
            Self::Alias(_) => "Alias",
            Self::WithItem(_) => "WithItem",
            Self::ExceptHandler(_) => "ExceptHandler",
            Self::Comprehension(_) => "Comprehension",
            Self::DictItem(_) => "DictItem",
            Self::Operator(Operator::Add) => "Add",
            Self::Operator(Operator::Sub) => "Sub",
            Self::Operator(Operator::Mult) => "Mult",
            Self::Operator(Operator::MatMult) => "MatMult",
            Self::Operator(Operator::Div) => "Div",
            Self::Operator(Operator::Mod) => "Mod",
            Self::Operator(Operator::Pow) => "Pow",
            Self::Operator(Operator::LShift) => "LShift",
            Self::Operator(Operator::RShift) => "RShift",
            Self::Operator(Operator::BitOr) => "BitOr",
            Self::Operator(Operator::BitXor) => "BitXor",
            Self::Operator(Operator::BitAnd) => "BitAnd",
            Self::Operator(Operator::FloorDiv) => "FloorDiv",
            Self::UnaryOp(UnaryOp::Invert) => "Invert",
            Self::UnaryOp(UnaryOp::Not) => "Not",
            Self::UnaryOp(UnaryOp::UAdd) => "UAdd",
            Self::UnaryOp(UnaryOp::USub) => "USub",
            Self::BoolOp(BoolOp::And) => "And",
            Self::BoolOp(BoolOp::Or) => "Or",
            Self::CmpOp(CmpOp::Eq) => "Eq",
            Self::CmpOp(CmpOp::NotEq) => "NotEq",
            Self::CmpOp(CmpOp::Lt) => "Lt",
            Self::CmpOp(CmpOp::LtE) => "LtE",
            Self::CmpOp(CmpOp::Gt) => "Gt",
            Self::CmpOp(CmpOp::GtE) => "GtE",
            Self::CmpOp(CmpOp::Is) => "Is",
            Self::CmpOp(CmpOp::IsNot) => "IsNot",
            Self::CmpOp(CmpOp::In) => "In",
            Self::CmpOp(CmpOp::NotIn) => "NotIn",
        }
    }

    /// The node's named fields, in declaration order.
    ///
    /// Every field of the underlying struct appears exactly once; consumers
    /// that need a deterministic order independent of declaration order are
    /// expected to sort by name themselves.
    pub fn fields(self) -> Vec<(&'static str, Field<'a>)> {
        match self {
            Self::Stmt(stmt) => stmt_fields(stmt),
            Self::Expr(expr) => expr_fields(expr),
            Self::Parameters(parameters) => {
                let Parameters {
                    args,
                    vararg,
                    kwonlyargs,
                    kwarg,
                } = parameters;
                vec![
                    ("args", seq(args)),
                    ("vararg", opt(vararg.as_deref())),
                    ("kwonlyargs", seq(kwonlyargs)),
                    ("kwarg", opt(kwarg.as_deref())),
                ]
            }
            Self::ParameterWithDefault(ParameterWithDefault { parameter, default }) => vec![
                ("parameter", node(parameter)),
                ("default", opt(default.as_deref())),
            ],
            Self::Parameter(Parameter { name }) => vec![("name", Field::Str(name))],
            Self::Keyword(Keyword { arg, value }) => {
                vec![("arg", opt_str(arg.as_deref())), ("value", node(value))]
            }
            Self::Alias(Alias { name, asname }) => vec![
                ("name", Field::Str(name)),
                ("asname", opt_str(asname.as_deref())),
            ],
            Self::WithItem(WithItem {
                context_expr,
                optional_vars,
            }) => vec![
                ("context_expr", node(context_expr)),
                ("optional_vars", opt(optional_vars.as_deref())),
            ],
            Self::ExceptHandler(ExceptHandler { type_, name, body }) => vec![
                ("type", opt(type_.as_deref())),
                ("name", opt_str(name.as_deref())),
                ("body", seq(body)),
            ],
            Self::Comprehension(Comprehension { target, iter, ifs }) => vec![
                ("target", node(target)),
                ("iter", node(iter)),
                ("ifs", seq(ifs)),
            ],
            Self::DictItem(DictItem { key, value }) => {
                vec![("key", opt(key.as_ref())), ("value", node(value))]
            }
            Self::Operator(_) | Self::UnaryOp(_) | Self::BoolOp(_) | Self::CmpOp(_) => vec![],
        }
    }
}

fn stmt_fields(stmt: &Stmt) -> Vec<(&'static str, Field<'_>)> {
    match stmt {
        Stmt::FunctionDef(StmtFunctionDef {
            decorator_list,
            name,
            parameters,
            body,
        }) => vec![
            ("decorator_list", seq(decorator_list)),
            ("name", Field::Str(name)),
            ("parameters", node(parameters.as_ref())),
            ("body", seq(body)),
        ],
        Stmt::ClassDef(StmtClassDef {
            decorator_list,
            name,
            bases,
            keywords,
            body,
        }) => vec![
            ("decorator_list", seq(decorator_list)),
            ("name", Field::Str(name)),
            ("bases", seq(bases)),
            ("keywords", seq(keywords)),
            ("body", seq(body)),
        ],
        Stmt::Return(StmtReturn { value }) => vec![("value", opt(value.as_deref()))],
        Stmt::Delete(StmtDelete { targets }) => vec![("targets", seq(targets))],
        Stmt::Assign(StmtAssign { targets, value }) => vec![
            ("targets", seq(targets)),
            ("value", node(value.as_ref())),
        ],
        Stmt::AugAssign(StmtAugAssign { target, op, value }) => vec![
            ("target", node(target.as_ref())),
            ("op", node(op)),
            ("value", node(value.as_ref())),
        ],
        Stmt::For(StmtFor {
            target,
            iter,
            body,
            orelse,
        }) => vec![
            ("target", node(target.as_ref())),
            ("iter", node(iter.as_ref())),
            ("body", seq(body)),
            ("orelse", seq(orelse)),
        ],
        Stmt::While(StmtWhile { test, body, orelse }) => vec![
            ("test", node(test.as_ref())),
            ("body", seq(body)),
            ("orelse", seq(orelse)),
        ],
        Stmt::If(StmtIf { test, body, orelse }) => vec![
            ("test", node(test.as_ref())),
            ("body", seq(body)),
            ("orelse", seq(orelse)),
        ],
        Stmt::With(StmtWith { items, body }) => {
            vec![("items", seq(items)), ("body", seq(body))]
        }
        Stmt::Raise(StmtRaise { exc, cause }) => vec![
            ("exc", opt(exc.as_deref())),
            ("cause", opt(cause.as_deref())),
        ],
        Stmt::Try(StmtTry {
            body,
            handlers,
            orelse,
            finalbody,
        }) => vec![
            ("body", seq(body)),
            ("handlers", seq(handlers)),
            ("orelse", seq(orelse)),
            ("finalbody", seq(finalbody)),
        ],
        Stmt::Assert(StmtAssert { test, msg }) => vec![
            ("test", node(test.as_ref())),
            ("msg", opt(msg.as_deref())),
        ],
        Stmt::Import(StmtImport { names }) => vec![("names", seq(names))],
        Stmt::ImportFrom(StmtImportFrom {
            module,
            names,
            level,
        }) => vec![
            ("module", opt_str(module.as_deref())),
            ("names", seq(names)),
            ("level", Field::Int(i64::from(*level))),
        ],
        Stmt::Global(StmtGlobal { names }) => vec![("names", Field::StrSeq(names))],
        Stmt::Nonlocal(StmtNonlocal { names }) => vec![("names", Field::StrSeq(names))],
        Stmt::Expr(StmtExpr { value }) => vec![("value", node(value.as_ref()))],
        Stmt::Pass(StmtPass) | Stmt::Break(StmtBreak) | Stmt::Continue(StmtContinue) => vec![],
    }
}

fn expr_fields(expr: &Expr) -> Vec<(&'static str, Field<'_>)> {
    match expr {
        Expr::BoolOp(ExprBoolOp { op, values }) => vec![
            ("op", node(op)),
            ("values", seq(values)),
        ],
        Expr::BinOp(ExprBinOp { left, op, right }) => vec![
            ("left", node(left.as_ref())),
            ("op", node(op)),
            ("right", node(right.as_ref())),
        ],
        Expr::UnaryOp(ExprUnaryOp { op, operand }) => vec![
            ("op", node(op)),
            ("operand", node(operand.as_ref())),
        ],
        Expr::Lambda(ExprLambda { parameters, body }) => vec![
            ("parameters", node(parameters.as_ref())),
            ("body", node(body.as_ref())),
        ],
        Expr::If(ExprIf { test, body, orelse }) => vec![
            ("test", node(test.as_ref())),
            ("body", node(body.as_ref())),
            ("orelse", node(orelse.as_ref())),
        ],
        Expr::Dict(ExprDict { items }) => vec![("items", seq(items))],
        Expr::Set(ExprSet { elts }) => vec![("elts", seq(elts))],
        Expr::ListComp(ExprListComp { elt, generators }) => vec![
            ("elt", node(elt.as_ref())),
            ("generators", seq(generators)),
        ],
        Expr::SetComp(ExprSetComp { elt, generators }) => vec![
            ("elt", node(elt.as_ref())),
            ("generators", seq(generators)),
        ],
        Expr::DictComp(ExprDictComp {
            key,
            value,
            generators,
        }) => vec![
            ("key", node(key.as_ref())),
            ("value", node(value.as_ref())),
            ("generators", seq(generators)),
        ],
        Expr::Generator(ExprGenerator { elt, generators }) => vec![
            ("elt", node(elt.as_ref())),
            ("generators", seq(generators)),
        ],
        Expr::Yield(ExprYield { value }) => vec![("value", opt(value.as_deref()))],
        Expr::YieldFrom(ExprYieldFrom { value }) => vec![("value", node(value.as_ref()))],
        Expr::Compare(ExprCompare {
            left,
            ops,
            comparators,
        }) => vec![
            ("left", node(left.as_ref())),
            ("ops", seq(ops)),
            ("comparators", seq(comparators)),
        ],
        Expr::Call(ExprCall {
            func,
            args,
            keywords,
        }) => vec![
            ("func", node(func.as_ref())),
            ("args", seq(args)),
            ("keywords", seq(keywords)),
        ],
        Expr::NumberLiteral(ExprNumberLiteral { value }) => vec![(
            "value",
            match value {
                Number::Int(int) => Field::Int(*int),
                Number::Float(float) => Field::Float(*float),
                Number::Complex { real, imag } => Field::Complex {
                    real: *real,
                    imag: *imag,
                },
            },
        )],
        Expr::StringLiteral(ExprStringLiteral { value }) => vec![("value", Field::Str(value))],
        Expr::BytesLiteral(ExprBytesLiteral { value }) => vec![("value", Field::Bytes(value))],
        Expr::BooleanLiteral(ExprBooleanLiteral { value }) => {
            vec![("value", Field::Bool(*value))]
        }
        Expr::NoneLiteral(ExprNoneLiteral) | Expr::EllipsisLiteral(ExprEllipsisLiteral) => vec![],
        Expr::Attribute(ExprAttribute { value, attr }) => vec![
            ("value", node(value.as_ref())),
            ("attr", Field::Str(attr)),
        ],
        Expr::Subscript(ExprSubscript { value, slice }) => vec![
            ("value", node(value.as_ref())),
            ("slice", node(slice.as_ref())),
        ],
        Expr::Starred(ExprStarred { value }) => vec![("value", node(value.as_ref()))],
        Expr::Name(ExprName { id }) => vec![("id", Field::Str(id))],
        Expr::List(ExprList { elts }) => vec![("elts", seq(elts))],
        Expr::Tuple(ExprTuple { elts }) => vec![("elts", seq(elts))],
        Expr::Slice(ExprSlice { lower, upper, step }) => vec![
            ("lower", opt(lower.as_deref())),
            ("upper", opt(upper.as_deref())),
            ("step", opt(step.as_deref())),
        ],
    }
}

impl<'a> From<&'a Stmt> for AnyNodeRef<'a> {
    fn from(node: &'a Stmt) -> Self {
        Self::Stmt(node)
    }
}

impl<'a> From<&'a Expr> for AnyNodeRef<'a> {
    fn from(node: &'a Expr) -> Self {
        Self::Expr(node)
    }
}

impl<'a> From<&'a Parameters> for AnyNodeRef<'a> {
    fn from(node: &'a Parameters) -> Self {
        Self::Parameters(node)
    }
}

impl<'a> From<&'a ParameterWithDefault> for AnyNodeRef<'a> {
    fn from(node: &'a ParameterWithDefault) -> Self {
        Self::ParameterWithDefault(node)
    }
}

impl<'a> From<&'a Parameter> for AnyNodeRef<'a> {
    fn from(node: &'a Parameter) -> Self {
        Self::Parameter(node)
    }
}

impl<'a> From<&'a Keyword> for AnyNodeRef<'a> {
    fn from(node: &'a Keyword) -> Self {
        Self::Keyword(node)
    }
}

impl<'a> From<&'a Alias> for AnyNodeRef<'a> {
    fn from(node: &'a Alias) -> Self {
        Self::Alias(node)
    }
}

impl<'a> From<&'a WithItem> for AnyNodeRef<'a> {
    fn from(node: &'a WithItem) -> Self {
        Self::WithItem(node)
    }
}

impl<'a> From<&'a ExceptHandler> for AnyNodeRef<'a> {
    fn from(node: &'a ExceptHandler) -> Self {
        Self::ExceptHandler(node)
    }
}

impl<'a> From<&'a Comprehension> for AnyNodeRef<'a> {
    fn from(node: &'a Comprehension) -> Self {
        Self::Comprehension(node)
    }
}

impl<'a> From<&'a DictItem> for AnyNodeRef<'a> {
    fn from(node: &'a DictItem) -> Self {
        Self::DictItem(node)
    }
}

impl<'a> From<&'a Operator> for AnyNodeRef<'a> {
    fn from(node: &'a Operator) -> Self {
        Self::Operator(node)
    }
}

impl<'a> From<&'a UnaryOp> for AnyNodeRef<'a> {
    fn from(node: &'a UnaryOp) -> Self {
        Self::UnaryOp(node)
    }
}

impl<'a> From<&'a BoolOp> for AnyNodeRef<'a> {
    fn from(node: &'a BoolOp) -> Self {
        Self::BoolOp(node)
    }
}

impl<'a> From<&'a CmpOp> for AnyNodeRef<'a> {
    fn from(node: &'a CmpOp) -> Self {
        Self::CmpOp(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::nodes::*;
    use crate::{AnyNodeRef, Field};

    #[test]
    fn kind_names() {
        let stmt: Stmt = StmtPass.into();
        assert_eq!(AnyNodeRef::from(&stmt).kind_name(), "Pass");

        let expr: Expr = ExprIf {
            test: Box::new(ExprName { id: "t".to_string() }.into()),
            body: Box::new(ExprName { id: "a".to_string() }.into()),
            orelse: Box::new(ExprName { id: "b".to_string() }.into()),
        }
        .into();
        assert_eq!(AnyNodeRef::from(&expr).kind_name(), "IfExp");

        assert_eq!(AnyNodeRef::from(&Operator::FloorDiv).kind_name(), "FloorDiv");
        assert_eq!(AnyNodeRef::from(&CmpOp::IsNot).kind_name(), "IsNot");
    }

    #[test]
    fn fields_follow_declaration_order() {
        let stmt: Stmt = StmtImportFrom {
            module: Some("os".to_string()),
            names: vec![Alias {
                name: "path".to_string(),
                asname: None,
            }],
            level: 0,
        }
        .into();
        let fields = AnyNodeRef::from(&stmt).fields();
        let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["module", "names", "level"]);
    }

    #[test]
    fn absent_optionals_stay_distinguishable() {
        let none_default: Stmt = StmtReturn { value: None }.into();
        let fields = AnyNodeRef::from(&none_default).fields();
        assert!(matches!(fields.as_slice(), [("value", Field::Absent)]));

        let falsy_default: Expr = ExprNumberLiteral {
            value: Number::Int(0),
        }
        .into();
        let fields = AnyNodeRef::from(&falsy_default).fields();
        assert!(matches!(fields.as_slice(), [("value", Field::Int(0))]));
    }

    #[test]
    fn operators_expose_no_fields() {
        assert!(AnyNodeRef::from(&BoolOp::And).fields().is_empty());
        assert!(AnyNodeRef::from(&UnaryOp::Not).fields().is_empty());
    }
}
