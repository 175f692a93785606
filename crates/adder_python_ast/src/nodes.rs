//! Node definitions, one struct per kind.
//!
//! The shapes follow the CPython AST (see the `ast` module documentation),
//! minus the constructs this crate does not model: async forms, f-strings,
//! pattern matching, assignment expressions, and annotations.

/// An ordered block of statements. Blocks are never empty in a well-formed
/// tree; producers represent "no `else` clause" as an empty suite only where
/// the grammar makes that meaningful (`orelse`, `finalbody`).
pub type Suite = Vec<Stmt>;

#[derive(Clone, Debug, PartialEq, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    #[is(name = "function_def_stmt")]
    FunctionDef(StmtFunctionDef),
    #[is(name = "class_def_stmt")]
    ClassDef(StmtClassDef),
    #[is(name = "return_stmt")]
    Return(StmtReturn),
    #[is(name = "delete_stmt")]
    Delete(StmtDelete),
    #[is(name = "assign_stmt")]
    Assign(StmtAssign),
    #[is(name = "aug_assign_stmt")]
    AugAssign(StmtAugAssign),
    #[is(name = "for_stmt")]
    For(StmtFor),
    #[is(name = "while_stmt")]
    While(StmtWhile),
    #[is(name = "if_stmt")]
    If(StmtIf),
    #[is(name = "with_stmt")]
    With(StmtWith),
    #[is(name = "raise_stmt")]
    Raise(StmtRaise),
    #[is(name = "try_stmt")]
    Try(StmtTry),
    #[is(name = "assert_stmt")]
    Assert(StmtAssert),
    #[is(name = "import_stmt")]
    Import(StmtImport),
    #[is(name = "import_from_stmt")]
    ImportFrom(StmtImportFrom),
    #[is(name = "global_stmt")]
    Global(StmtGlobal),
    #[is(name = "nonlocal_stmt")]
    Nonlocal(StmtNonlocal),
    #[is(name = "expr_stmt")]
    Expr(StmtExpr),
    #[is(name = "pass_stmt")]
    Pass(StmtPass),
    #[is(name = "break_stmt")]
    Break(StmtBreak),
    #[is(name = "continue_stmt")]
    Continue(StmtContinue),
}

/// See also [FunctionDef](https://docs.python.org/3/library/ast.html#ast.FunctionDef)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtFunctionDef {
    pub decorator_list: Vec<Expr>,
    pub name: String,
    pub parameters: Box<Parameters>,
    pub body: Suite,
}

/// See also [ClassDef](https://docs.python.org/3/library/ast.html#ast.ClassDef)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtClassDef {
    pub decorator_list: Vec<Expr>,
    pub name: String,
    pub bases: Vec<Expr>,
    /// Metaclass-style keyword arguments, e.g. `class C(Base, metaclass=M)`.
    pub keywords: Vec<Keyword>,
    pub body: Suite,
}

/// See also [Return](https://docs.python.org/3/library/ast.html#ast.Return)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtReturn {
    pub value: Option<Box<Expr>>,
}

/// See also [Delete](https://docs.python.org/3/library/ast.html#ast.Delete)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtDelete {
    pub targets: Vec<Expr>,
}

/// An assignment with one or more chained targets, e.g. `a = b = 1`.
///
/// See also [Assign](https://docs.python.org/3/library/ast.html#ast.Assign)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtAssign {
    pub targets: Vec<Expr>,
    pub value: Box<Expr>,
}

/// See also [AugAssign](https://docs.python.org/3/library/ast.html#ast.AugAssign)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtAugAssign {
    pub target: Box<Expr>,
    pub op: Operator,
    pub value: Box<Expr>,
}

/// See also [For](https://docs.python.org/3/library/ast.html#ast.For)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtFor {
    pub target: Box<Expr>,
    pub iter: Box<Expr>,
    pub body: Suite,
    pub orelse: Suite,
}

/// See also [While](https://docs.python.org/3/library/ast.html#ast.While)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtWhile {
    pub test: Box<Expr>,
    pub body: Suite,
    pub orelse: Suite,
}

/// An `if` statement. An `elif` chain is represented as an `orelse` suite
/// holding a single nested `If`.
///
/// See also [If](https://docs.python.org/3/library/ast.html#ast.If)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtIf {
    pub test: Box<Expr>,
    pub body: Suite,
    pub orelse: Suite,
}

/// See also [With](https://docs.python.org/3/library/ast.html#ast.With)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtWith {
    pub items: Vec<WithItem>,
    pub body: Suite,
}

/// See also [Raise](https://docs.python.org/3/library/ast.html#ast.Raise)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtRaise {
    pub exc: Option<Box<Expr>>,
    pub cause: Option<Box<Expr>>,
}

/// See also [Try](https://docs.python.org/3/library/ast.html#ast.Try)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtTry {
    pub body: Suite,
    pub handlers: Vec<ExceptHandler>,
    pub orelse: Suite,
    pub finalbody: Suite,
}

/// See also [Assert](https://docs.python.org/3/library/ast.html#ast.Assert)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtAssert {
    pub test: Box<Expr>,
    pub msg: Option<Box<Expr>>,
}

/// See also [Import](https://docs.python.org/3/library/ast.html#ast.Import)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtImport {
    pub names: Vec<Alias>,
}

/// A `from ... import ...` statement. `level` counts the leading dots of a
/// relative import; `module` may be absent when `level` is non-zero
/// (`from .. import name`).
///
/// See also [ImportFrom](https://docs.python.org/3/library/ast.html#ast.ImportFrom)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtImportFrom {
    pub module: Option<String>,
    pub names: Vec<Alias>,
    pub level: u32,
}

/// See also [Global](https://docs.python.org/3/library/ast.html#ast.Global)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtGlobal {
    pub names: Vec<String>,
}

/// See also [Nonlocal](https://docs.python.org/3/library/ast.html#ast.Nonlocal)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtNonlocal {
    pub names: Vec<String>,
}

/// An expression used as a statement.
///
/// See also [Expr](https://docs.python.org/3/library/ast.html#ast.Expr)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtExpr {
    pub value: Box<Expr>,
}

/// See also [Pass](https://docs.python.org/3/library/ast.html#ast.Pass)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtPass;

/// See also [Break](https://docs.python.org/3/library/ast.html#ast.Break)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtBreak;

/// See also [Continue](https://docs.python.org/3/library/ast.html#ast.Continue)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtContinue;

#[derive(Clone, Debug, PartialEq, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    #[is(name = "bool_op_expr")]
    BoolOp(ExprBoolOp),
    #[is(name = "bin_op_expr")]
    BinOp(ExprBinOp),
    #[is(name = "unary_op_expr")]
    UnaryOp(ExprUnaryOp),
    #[is(name = "lambda_expr")]
    Lambda(ExprLambda),
    #[is(name = "if_expr")]
    If(ExprIf),
    #[is(name = "dict_expr")]
    Dict(ExprDict),
    #[is(name = "set_expr")]
    Set(ExprSet),
    #[is(name = "list_comp_expr")]
    ListComp(ExprListComp),
    #[is(name = "set_comp_expr")]
    SetComp(ExprSetComp),
    #[is(name = "dict_comp_expr")]
    DictComp(ExprDictComp),
    #[is(name = "generator_expr")]
    Generator(ExprGenerator),
    #[is(name = "yield_expr")]
    Yield(ExprYield),
    #[is(name = "yield_from_expr")]
    YieldFrom(ExprYieldFrom),
    #[is(name = "compare_expr")]
    Compare(ExprCompare),
    #[is(name = "call_expr")]
    Call(ExprCall),
    #[is(name = "number_literal_expr")]
    NumberLiteral(ExprNumberLiteral),
    #[is(name = "string_literal_expr")]
    StringLiteral(ExprStringLiteral),
    #[is(name = "bytes_literal_expr")]
    BytesLiteral(ExprBytesLiteral),
    #[is(name = "boolean_literal_expr")]
    BooleanLiteral(ExprBooleanLiteral),
    #[is(name = "none_literal_expr")]
    NoneLiteral(ExprNoneLiteral),
    #[is(name = "ellipsis_literal_expr")]
    EllipsisLiteral(ExprEllipsisLiteral),
    #[is(name = "attribute_expr")]
    Attribute(ExprAttribute),
    #[is(name = "subscript_expr")]
    Subscript(ExprSubscript),
    #[is(name = "starred_expr")]
    Starred(ExprStarred),
    #[is(name = "name_expr")]
    Name(ExprName),
    #[is(name = "list_expr")]
    List(ExprList),
    #[is(name = "tuple_expr")]
    Tuple(ExprTuple),
    #[is(name = "slice_expr")]
    Slice(ExprSlice),
}

/// A chain of `and` or `or` operands, flattened: `a or b or c` is a single
/// node with three values.
///
/// See also [BoolOp](https://docs.python.org/3/library/ast.html#ast.BoolOp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprBoolOp {
    pub op: BoolOp,
    pub values: Vec<Expr>,
}

/// See also [BinOp](https://docs.python.org/3/library/ast.html#ast.BinOp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprBinOp {
    pub left: Box<Expr>,
    pub op: Operator,
    pub right: Box<Expr>,
}

/// See also [UnaryOp](https://docs.python.org/3/library/ast.html#ast.UnaryOp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprUnaryOp {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

/// See also [Lambda](https://docs.python.org/3/library/ast.html#ast.Lambda)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprLambda {
    pub parameters: Box<Parameters>,
    pub body: Box<Expr>,
}

/// A conditional expression, e.g. `a if test else b`.
///
/// See also [IfExp](https://docs.python.org/3/library/ast.html#ast.IfExp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprIf {
    pub test: Box<Expr>,
    pub body: Box<Expr>,
    pub orelse: Box<Expr>,
}

/// See also [Dict](https://docs.python.org/3/library/ast.html#ast.Dict)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprDict {
    pub items: Vec<DictItem>,
}

/// See also [Set](https://docs.python.org/3/library/ast.html#ast.Set)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprSet {
    pub elts: Vec<Expr>,
}

/// See also [ListComp](https://docs.python.org/3/library/ast.html#ast.ListComp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprListComp {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// See also [SetComp](https://docs.python.org/3/library/ast.html#ast.SetComp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprSetComp {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// See also [DictComp](https://docs.python.org/3/library/ast.html#ast.DictComp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprDictComp {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// See also [GeneratorExp](https://docs.python.org/3/library/ast.html#ast.GeneratorExp)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprGenerator {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
}

/// See also [Yield](https://docs.python.org/3/library/ast.html#ast.Yield)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprYield {
    pub value: Option<Box<Expr>>,
}

/// See also [YieldFrom](https://docs.python.org/3/library/ast.html#ast.YieldFrom)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprYieldFrom {
    pub value: Box<Expr>,
}

/// A comparison chain: `a < b < c` is one node with two operators and two
/// comparators. `ops` and `comparators` always have the same, non-zero
/// length in a well-formed tree.
///
/// See also [Compare](https://docs.python.org/3/library/ast.html#ast.Compare)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprCompare {
    pub left: Box<Expr>,
    pub ops: Vec<CmpOp>,
    pub comparators: Vec<Expr>,
}

/// See also [Call](https://docs.python.org/3/library/ast.html#ast.Call)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprCall {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
    pub keywords: Vec<Keyword>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprNumberLiteral {
    pub value: Number,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprStringLiteral {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprBytesLiteral {
    pub value: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprBooleanLiteral {
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprNoneLiteral;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprEllipsisLiteral;

/// See also [Attribute](https://docs.python.org/3/library/ast.html#ast.Attribute)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprAttribute {
    pub value: Box<Expr>,
    pub attr: String,
}

/// A subscript, e.g. `a[i]`. The index may be a plain expression, a
/// [`ExprSlice`], or a tuple mixing both (multi-dimensional indexing).
///
/// See also [Subscript](https://docs.python.org/3/library/ast.html#ast.Subscript)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprSubscript {
    pub value: Box<Expr>,
    pub slice: Box<Expr>,
}

/// A starred element, e.g. in `a, *rest = items` or `f(*args)`.
///
/// See also [Starred](https://docs.python.org/3/library/ast.html#ast.Starred)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprStarred {
    pub value: Box<Expr>,
}

/// See also [Name](https://docs.python.org/3/library/ast.html#ast.Name)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprName {
    pub id: String,
}

/// See also [List](https://docs.python.org/3/library/ast.html#ast.List)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprList {
    pub elts: Vec<Expr>,
}

/// See also [Tuple](https://docs.python.org/3/library/ast.html#ast.Tuple)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprTuple {
    pub elts: Vec<Expr>,
}

/// A slice, e.g. `lower:upper:step` with every part optional. Only legal
/// inside a subscript index, directly or as a tuple element.
///
/// See also [Slice](https://docs.python.org/3/library/ast.html#ast.Slice)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprSlice {
    pub lower: Option<Box<Expr>>,
    pub upper: Option<Box<Expr>>,
    pub step: Option<Box<Expr>>,
}

/// A numeric literal value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Int(i64),
    Float(f64),
    Complex { real: f64, imag: f64 },
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mult,
    MatMult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Invert,
    Not,
    UAdd,
    USub,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoolOp {
    And,
    Or,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

/// The parameter list of a function definition or lambda. The struct shape
/// enforces the grammar's ordering constraint: positional (optionally
/// defaulted) parameters, then `*vararg`, then keyword-only parameters, then
/// `**kwarg`.
///
/// See also [arguments](https://docs.python.org/3/library/ast.html#ast.arguments)
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    pub args: Vec<ParameterWithDefault>,
    pub vararg: Option<Box<Parameter>>,
    pub kwonlyargs: Vec<ParameterWithDefault>,
    pub kwarg: Option<Box<Parameter>>,
}

impl Parameters {
    /// Returns `true` if the parameter list declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
            && self.vararg.is_none()
            && self.kwonlyargs.is_empty()
            && self.kwarg.is_none()
    }
}

/// A parameter with its optional default, e.g. `a=1`. A missing default is
/// `None`, never a sentinel value, so a literal default of `0` or `None`
/// stays distinguishable from "no default".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterWithDefault {
    pub parameter: Parameter,
    pub default: Option<Box<Expr>>,
}

/// See also [arg](https://docs.python.org/3/library/ast.html#ast.arg)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
}

/// A keyword argument in a call or class definition; `arg` is `None` for a
/// `**kwargs` splat.
///
/// See also [keyword](https://docs.python.org/3/library/ast.html#ast.keyword)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyword {
    pub arg: Option<String>,
    pub value: Expr,
}

/// See also [alias](https://docs.python.org/3/library/ast.html#ast.alias)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alias {
    pub name: String,
    pub asname: Option<String>,
}

/// See also [withitem](https://docs.python.org/3/library/ast.html#ast.withitem)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithItem {
    pub context_expr: Expr,
    pub optional_vars: Option<Box<Expr>>,
}

/// An `except` clause. Both the exception type and the bound name are
/// optional: a bare `except:` has neither.
///
/// See also [ExceptHandler](https://docs.python.org/3/library/ast.html#ast.ExceptHandler)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptHandler {
    pub type_: Option<Box<Expr>>,
    pub name: Option<String>,
    pub body: Suite,
}

/// A single `for target in iter [if cond]*` clause of a comprehension.
///
/// See also [comprehension](https://docs.python.org/3/library/ast.html#ast.comprehension)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comprehension {
    pub target: Expr,
    pub iter: Expr,
    pub ifs: Vec<Expr>,
}

/// One entry of a dictionary display; a `None` key is a `**` splat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictItem {
    pub key: Option<Expr>,
    pub value: Expr,
}

impl From<StmtFunctionDef> for Stmt {
    fn from(node: StmtFunctionDef) -> Self {
        Self::FunctionDef(node)
    }
}

impl From<StmtClassDef> for Stmt {
    fn from(node: StmtClassDef) -> Self {
        Self::ClassDef(node)
    }
}

impl From<StmtReturn> for Stmt {
    fn from(node: StmtReturn) -> Self {
        Self::Return(node)
    }
}

impl From<StmtDelete> for Stmt {
    fn from(node: StmtDelete) -> Self {
        Self::Delete(node)
    }
}

impl From<StmtAssign> for Stmt {
    fn from(node: StmtAssign) -> Self {
        Self::Assign(node)
    }
}

impl From<StmtAugAssign> for Stmt {
    fn from(node: StmtAugAssign) -> Self {
        Self::AugAssign(node)
    }
}

impl From<StmtFor> for Stmt {
    fn from(node: StmtFor) -> Self {
        Self::For(node)
    }
}

impl From<StmtWhile> for Stmt {
    fn from(node: StmtWhile) -> Self {
        Self::While(node)
    }
}

impl From<StmtIf> for Stmt {
    fn from(node: StmtIf) -> Self {
        Self::If(node)
    }
}

impl From<StmtWith> for Stmt {
    fn from(node: StmtWith) -> Self {
        Self::With(node)
    }
}

impl From<StmtRaise> for Stmt {
    fn from(node: StmtRaise) -> Self {
        Self::Raise(node)
    }
}

impl From<StmtTry> for Stmt {
    fn from(node: StmtTry) -> Self {
        Self::Try(node)
    }
}

impl From<StmtAssert> for Stmt {
    fn from(node: StmtAssert) -> Self {
        Self::Assert(node)
    }
}

impl From<StmtImport> for Stmt {
    fn from(node: StmtImport) -> Self {
        Self::Import(node)
    }
}

impl From<StmtImportFrom> for Stmt {
    fn from(node: StmtImportFrom) -> Self {
        Self::ImportFrom(node)
    }
}

impl From<StmtGlobal> for Stmt {
    fn from(node: StmtGlobal) -> Self {
        Self::Global(node)
    }
}

impl From<StmtNonlocal> for Stmt {
    fn from(node: StmtNonlocal) -> Self {
        Self::Nonlocal(node)
    }
}

impl From<StmtExpr> for Stmt {
    fn from(node: StmtExpr) -> Self {
        Self::Expr(node)
    }
}

impl From<StmtPass> for Stmt {
    fn from(node: StmtPass) -> Self {
        Self::Pass(node)
    }
}

impl From<StmtBreak> for Stmt {
    fn from(node: StmtBreak) -> Self {
        Self::Break(node)
    }
}

impl From<StmtContinue> for Stmt {
    fn from(node: StmtContinue) -> Self {
        Self::Continue(node)
    }
}

impl From<ExprBoolOp> for Expr {
    fn from(node: ExprBoolOp) -> Self {
        Self::BoolOp(node)
    }
}

impl From<ExprBinOp> for Expr {
    fn from(node: ExprBinOp) -> Self {
        Self::BinOp(node)
    }
}

impl From<ExprUnaryOp> for Expr {
    fn from(node: ExprUnaryOp) -> Self {
        Self::UnaryOp(node)
    }
}

impl From<ExprLambda> for Expr {
    fn from(node: ExprLambda) -> Self {
        Self::Lambda(node)
    }
}

impl From<ExprIf> for Expr {
    fn from(node: ExprIf) -> Self {
        Self::If(node)
    }
}

impl From<ExprDict> for Expr {
    fn from(node: ExprDict) -> Self {
        Self::Dict(node)
    }
}

impl From<ExprSet> for Expr {
    fn from(node: ExprSet) -> Self {
        Self::Set(node)
    }
}

impl From<ExprListComp> for Expr {
    fn from(node: ExprListComp) -> Self {
        Self::ListComp(node)
    }
}

impl From<ExprSetComp> for Expr {
    fn from(node: ExprSetComp) -> Self {
        Self::SetComp(node)
    }
}

impl From<ExprDictComp> for Expr {
    fn from(node: ExprDictComp) -> Self {
        Self::DictComp(node)
    }
}

impl From<ExprGenerator> for Expr {
    fn from(node: ExprGenerator) -> Self {
        Self::Generator(node)
    }
}

impl From<ExprYield> for Expr {
    fn from(node: ExprYield) -> Self {
        Self::Yield(node)
    }
}

impl From<ExprYieldFrom> for Expr {
    fn from(node: ExprYieldFrom) -> Self {
        Self::YieldFrom(node)
    }
}

impl From<ExprCompare> for Expr {
    fn from(node: ExprCompare) -> Self {
        Self::Compare(node)
    }
}

impl From<ExprCall> for Expr {
    fn from(node: ExprCall) -> Self {
        Self::Call(node)
    }
}

impl From<ExprNumberLiteral> for Expr {
    fn from(node: ExprNumberLiteral) -> Self {
        Self::NumberLiteral(node)
    }
}

impl From<ExprStringLiteral> for Expr {
    fn from(node: ExprStringLiteral) -> Self {
        Self::StringLiteral(node)
    }
}

impl From<ExprBytesLiteral> for Expr {
    fn from(node: ExprBytesLiteral) -> Self {
        Self::BytesLiteral(node)
    }
}

impl From<ExprBooleanLiteral> for Expr {
    fn from(node: ExprBooleanLiteral) -> Self {
        Self::BooleanLiteral(node)
    }
}

impl From<ExprNoneLiteral> for Expr {
    fn from(node: ExprNoneLiteral) -> Self {
        Self::NoneLiteral(node)
    }
}

impl From<ExprEllipsisLiteral> for Expr {
    fn from(node: ExprEllipsisLiteral) -> Self {
        Self::EllipsisLiteral(node)
    }
}

impl From<ExprAttribute> for Expr {
    fn from(node: ExprAttribute) -> Self {
        Self::Attribute(node)
    }
}

impl From<ExprSubscript> for Expr {
    fn from(node: ExprSubscript) -> Self {
        Self::Subscript(node)
    }
}

impl From<ExprStarred> for Expr {
    fn from(node: ExprStarred) -> Self {
        Self::Starred(node)
    }
}

impl From<ExprName> for Expr {
    fn from(node: ExprName) -> Self {
        Self::Name(node)
    }
}

impl From<ExprList> for Expr {
    fn from(node: ExprList) -> Self {
        Self::List(node)
    }
}

impl From<ExprTuple> for Expr {
    fn from(node: ExprTuple) -> Self {
        Self::Tuple(node)
    }
}

impl From<ExprSlice> for Expr {
    fn from(node: ExprSlice) -> Self {
        Self::Slice(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        let make = || {
            Expr::from(ExprBinOp {
                left: Box::new(ExprName { id: "x".to_string() }.into()),
                op: Operator::Add,
                right: Box::new(
                    ExprNumberLiteral {
                        value: Number::Int(1),
                    }
                    .into(),
                ),
            })
        };
        assert_eq!(make(), make());

        let mut other = make();
        if let Expr::BinOp(ExprBinOp { op, .. }) = &mut other {
            *op = Operator::Sub;
        }
        assert_ne!(make(), other);
    }

    #[test]
    fn keyword_variant_accessors() {
        let stmt: Stmt = StmtReturn { value: None }.into();
        assert!(stmt.is_return_stmt());
        assert!(!stmt.is_if_stmt());

        let stmt: Stmt = StmtTry {
            body: vec![StmtPass.into()],
            handlers: vec![],
            orelse: vec![],
            finalbody: vec![StmtPass.into()],
        }
        .into();
        assert!(stmt.is_try_stmt());

        let expr: Expr = ExprYield { value: None }.into();
        assert!(expr.is_yield_expr());
        assert!(!expr.is_if_expr());
    }

    #[test]
    fn empty_parameter_list() {
        assert!(Parameters::default().is_empty());
        assert!(!Parameters {
            kwarg: Some(Box::new(Parameter {
                name: "kwargs".to_string(),
            })),
            ..Parameters::default()
        }
        .is_empty());
    }
}
