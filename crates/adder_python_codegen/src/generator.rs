//! Generate Python source code from an abstract syntax tree.

use adder_python_ast::{
    Alias, BoolOp, CmpOp, Comprehension, DictItem, ExceptHandler, Expr, ExprAttribute, ExprBinOp,
    ExprBoolOp, ExprBooleanLiteral, ExprBytesLiteral, ExprCall, ExprCompare, ExprDict,
    ExprDictComp, ExprEllipsisLiteral, ExprGenerator, ExprIf, ExprLambda, ExprList, ExprListComp,
    ExprName, ExprNoneLiteral, ExprNumberLiteral, ExprSet, ExprSetComp, ExprSlice, ExprStarred,
    ExprStringLiteral, ExprSubscript, ExprTuple, ExprUnaryOp, ExprYield, ExprYieldFrom, Keyword,
    Number, Operator, Parameter, ParameterWithDefault, Parameters, Stmt, StmtAssert, StmtAssign,
    StmtAugAssign, StmtBreak, StmtClassDef, StmtContinue, StmtDelete, StmtExpr, StmtFor,
    StmtFunctionDef, StmtGlobal, StmtIf, StmtImport, StmtImportFrom, StmtNonlocal, StmtPass,
    StmtRaise, StmtReturn, StmtTry, StmtWhile, StmtWith, Suite, UnaryOp, WithItem,
};

use crate::{escape, CodegenError, Indentation};

mod precedence {
    macro_rules! precedence {
        ($($op:ident,)*) => {
            precedence!(@0, $($op,)*);
        };
        (@$i:expr, $op1:ident, $($op:ident,)*) => {
            pub(crate) const $op1: u8 = $i;
            precedence!(@$i + 1, $($op,)*);
        };
        (@$i:expr,) => {};
    }
    // YIELD sits below TUPLE: a bare yield is only legal as a whole
    // expression statement or as the sole right-hand side of an assignment,
    // so any higher context forces parentheses around it.
    precedence!(
        YIELD, TUPLE, TEST, OR, AND, NOT, CMP, // "EXPR" =
        BOR, BXOR, BAND, SHIFT, ARITH, TERM, FACTOR, POWER, ATOM,
    );
    pub(crate) const EXPR: u8 = BOR;
}

/// The source renderer. One instance per render call; the only state is the
/// output buffer, the current indent depth, and pending-newline bookkeeping.
pub struct Generator<'a> {
    /// The indentation unit to use.
    indent: &'a Indentation,
    buffer: String,
    indent_depth: usize,
    num_newlines: usize,
    initial: bool,
}

impl<'a> Generator<'a> {
    pub const fn new(indent: &'a Indentation) -> Self {
        Self {
            indent,
            buffer: String::new(),
            indent_depth: 0,
            num_newlines: 0,
            initial: true,
        }
    }

    pub fn generate(self) -> String {
        self.buffer
    }

    fn newline(&mut self) {
        if !self.initial {
            self.num_newlines = std::cmp::max(self.num_newlines, 1);
        }
    }

    fn newlines(&mut self, extra: usize) {
        if !self.initial {
            self.num_newlines = std::cmp::max(self.num_newlines, 1 + extra);
        }
    }

    fn body(&mut self, stmts: &Suite) -> Result<(), CodegenError> {
        if stmts.is_empty() {
            return Err(CodegenError::MalformedTree("empty block body"));
        }
        self.indent_depth += 1;
        for stmt in stmts {
            self.unparse_stmt(stmt)?;
        }
        self.indent_depth -= 1;
        Ok(())
    }

    fn p(&mut self, s: &str) {
        if self.num_newlines > 0 {
            for _ in 0..self.num_newlines {
                self.buffer += "\n";
            }
            self.num_newlines = 0;
        }
        self.buffer += s;
    }

    fn p_if(&mut self, cond: bool, s: &str) {
        if cond {
            self.p(s);
        }
    }

    fn p_delim(&mut self, first: &mut bool, s: &str) {
        self.p_if(!std::mem::take(first), s);
    }

    pub fn unparse_suite(&mut self, suite: &Suite) -> Result<(), CodegenError> {
        if suite.is_empty() {
            return Err(CodegenError::MalformedTree("empty module body"));
        }
        for stmt in suite {
            self.unparse_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn unparse_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        macro_rules! statement {
            ($body:block) => {{
                self.newline();
                self.p(&self.indent.as_str().repeat(self.indent_depth));
                $body
                self.initial = false;
            }};
        }

        match stmt {
            Stmt::FunctionDef(StmtFunctionDef {
                decorator_list,
                name,
                parameters,
                body,
            }) => {
                self.newlines(if self.indent_depth == 0 { 2 } else { 1 });
                for decorator in decorator_list {
                    statement!({
                        self.p("@");
                        self.unparse_expr(decorator, precedence::EXPR)?;
                    });
                }
                statement!({
                    self.p("def ");
                    self.p(name);
                    self.p("(");
                    self.unparse_parameters(parameters)?;
                    self.p("):");
                });
                self.body(body)?;
                if self.indent_depth == 0 {
                    self.newlines(2);
                }
            }
            Stmt::ClassDef(StmtClassDef {
                decorator_list,
                name,
                bases,
                keywords,
                body,
            }) => {
                self.newlines(if self.indent_depth == 0 { 2 } else { 1 });
                for decorator in decorator_list {
                    statement!({
                        self.p("@");
                        self.unparse_expr(decorator, precedence::EXPR)?;
                    });
                }
                statement!({
                    self.p("class ");
                    self.p(name);
                    let mut first = true;
                    for base in bases {
                        self.p_if(first, "(");
                        self.p_delim(&mut first, ", ");
                        self.unparse_expr(base, precedence::EXPR)?;
                    }
                    for keyword in keywords {
                        self.p_if(first, "(");
                        self.p_delim(&mut first, ", ");
                        self.unparse_keyword(keyword)?;
                    }
                    self.p_if(!first, ")");
                    self.p(":");
                });
                self.body(body)?;
                if self.indent_depth == 0 {
                    self.newlines(2);
                }
            }
            Stmt::Return(StmtReturn { value }) => {
                statement!({
                    if let Some(expr) = value {
                        self.p("return ");
                        self.unparse_expr(expr, precedence::TUPLE)?;
                    } else {
                        self.p("return");
                    }
                });
            }
            Stmt::Delete(StmtDelete { targets }) => {
                if targets.is_empty() {
                    return Err(CodegenError::MalformedTree("del statement without targets"));
                }
                statement!({
                    self.p("del ");
                    let mut first = true;
                    for expr in targets {
                        self.p_delim(&mut first, ", ");
                        self.unparse_expr(expr, precedence::TEST)?;
                    }
                });
            }
            Stmt::Assign(StmtAssign { targets, value }) => {
                if targets.is_empty() {
                    return Err(CodegenError::MalformedTree("assignment without targets"));
                }
                statement!({
                    for target in targets {
                        self.unparse_expr(target, precedence::TUPLE)?;
                        self.p(" = ");
                    }
                    self.unparse_expr(value, precedence::YIELD)?;
                });
            }
            Stmt::AugAssign(StmtAugAssign { target, op, value }) => {
                statement!({
                    self.unparse_expr(target, precedence::TUPLE)?;
                    self.p(" ");
                    self.p(match op {
                        Operator::Add => "+",
                        Operator::Sub => "-",
                        Operator::Mult => "*",
                        Operator::MatMult => "@",
                        Operator::Div => "/",
                        Operator::Mod => "%",
                        Operator::Pow => "**",
                        Operator::LShift => "<<",
                        Operator::RShift => ">>",
                        Operator::BitOr => "|",
                        Operator::BitXor => "^",
                        Operator::BitAnd => "&",
                        Operator::FloorDiv => "//",
                    });
                    self.p("= ");
                    self.unparse_expr(value, precedence::YIELD)?;
                });
            }
            Stmt::For(StmtFor {
                target,
                iter,
                body,
                orelse,
            }) => {
                statement!({
                    self.p("for ");
                    self.unparse_expr(target, precedence::TUPLE)?;
                    self.p(" in ");
                    self.unparse_expr(iter, precedence::TUPLE)?;
                    self.p(":");
                });
                self.body(body)?;
                if !orelse.is_empty() {
                    statement!({
                        self.p("else:");
                    });
                    self.body(orelse)?;
                }
            }
            Stmt::While(StmtWhile { test, body, orelse }) => {
                statement!({
                    self.p("while ");
                    self.unparse_expr(test, precedence::TUPLE)?;
                    self.p(":");
                });
                self.body(body)?;
                if !orelse.is_empty() {
                    statement!({
                        self.p("else:");
                    });
                    self.body(orelse)?;
                }
            }
            Stmt::If(StmtIf { test, body, orelse }) => {
                statement!({
                    self.p("if ");
                    self.unparse_expr(test, precedence::TUPLE)?;
                    self.p(":");
                });
                self.body(body)?;

                let mut orelse = orelse;
                loop {
                    // An `elif` chain is a single nested `If` in the else
                    // suite; anything else is a plain `else`.
                    if let [Stmt::If(StmtIf {
                        test,
                        body,
                        orelse: next,
                    })] = orelse.as_slice()
                    {
                        statement!({
                            self.p("elif ");
                            self.unparse_expr(test, precedence::TUPLE)?;
                            self.p(":");
                        });
                        self.body(body)?;
                        orelse = next;
                    } else {
                        if !orelse.is_empty() {
                            statement!({
                                self.p("else:");
                            });
                            self.body(orelse)?;
                        }
                        break;
                    }
                }
            }
            Stmt::With(StmtWith { items, body }) => {
                if items.is_empty() {
                    return Err(CodegenError::MalformedTree("with statement without items"));
                }
                statement!({
                    self.p("with ");
                    let mut first = true;
                    for item in items {
                        self.p_delim(&mut first, ", ");
                        self.unparse_with_item(item)?;
                    }
                    self.p(":");
                });
                self.body(body)?;
            }
            Stmt::Raise(StmtRaise { exc, cause }) => {
                if exc.is_none() && cause.is_some() {
                    return Err(CodegenError::MalformedTree(
                        "raise-from without an exception",
                    ));
                }
                statement!({
                    self.p("raise");
                    if let Some(exc) = exc {
                        self.p(" ");
                        self.unparse_expr(exc, precedence::TEST)?;
                    }
                    if let Some(cause) = cause {
                        self.p(" from ");
                        self.unparse_expr(cause, precedence::TEST)?;
                    }
                });
            }
            Stmt::Try(StmtTry {
                body,
                handlers,
                orelse,
                finalbody,
            }) => {
                if handlers.is_empty() && finalbody.is_empty() {
                    return Err(CodegenError::MalformedTree(
                        "try statement without handlers or finally",
                    ));
                }
                if handlers.is_empty() && !orelse.is_empty() {
                    return Err(CodegenError::MalformedTree(
                        "try-else without except handlers",
                    ));
                }
                statement!({
                    self.p("try:");
                });
                self.body(body)?;

                for handler in handlers {
                    statement!({
                        self.unparse_except_handler(handler)?;
                    });
                }

                if !orelse.is_empty() {
                    statement!({
                        self.p("else:");
                    });
                    self.body(orelse)?;
                }
                if !finalbody.is_empty() {
                    statement!({
                        self.p("finally:");
                    });
                    self.body(finalbody)?;
                }
            }
            Stmt::Assert(StmtAssert { test, msg }) => {
                statement!({
                    self.p("assert ");
                    self.unparse_expr(test, precedence::TEST)?;
                    if let Some(msg) = msg {
                        self.p(", ");
                        self.unparse_expr(msg, precedence::TEST)?;
                    }
                });
            }
            Stmt::Import(StmtImport { names }) => {
                if names.is_empty() {
                    return Err(CodegenError::MalformedTree("import without names"));
                }
                statement!({
                    self.p("import ");
                    let mut first = true;
                    for alias in names {
                        self.p_delim(&mut first, ", ");
                        self.unparse_alias(alias);
                    }
                });
            }
            Stmt::ImportFrom(StmtImportFrom {
                module,
                names,
                level,
            }) => {
                if names.is_empty() {
                    return Err(CodegenError::MalformedTree("from-import without names"));
                }
                if module.is_none() && *level == 0 {
                    return Err(CodegenError::MalformedTree(
                        "from-import without a module or relative level",
                    ));
                }
                statement!({
                    self.p("from ");
                    self.p(&".".repeat(*level as usize));
                    if let Some(module) = module {
                        self.p(module);
                    }
                    self.p(" import ");
                    let mut first = true;
                    for alias in names {
                        self.p_delim(&mut first, ", ");
                        self.unparse_alias(alias);
                    }
                });
            }
            Stmt::Global(StmtGlobal { names }) => {
                if names.is_empty() {
                    return Err(CodegenError::MalformedTree("global without names"));
                }
                statement!({
                    self.p("global ");
                    let mut first = true;
                    for name in names {
                        self.p_delim(&mut first, ", ");
                        self.p(name);
                    }
                });
            }
            Stmt::Nonlocal(StmtNonlocal { names }) => {
                if names.is_empty() {
                    return Err(CodegenError::MalformedTree("nonlocal without names"));
                }
                statement!({
                    self.p("nonlocal ");
                    let mut first = true;
                    for name in names {
                        self.p_delim(&mut first, ", ");
                        self.p(name);
                    }
                });
            }
            Stmt::Expr(StmtExpr { value }) => {
                statement!({
                    self.unparse_expr(value, 0)?;
                });
            }
            Stmt::Pass(StmtPass) => {
                statement!({
                    self.p("pass");
                });
            }
            Stmt::Break(StmtBreak) => {
                statement!({
                    self.p("break");
                });
            }
            Stmt::Continue(StmtContinue) => {
                statement!({
                    self.p("continue");
                });
            }
        }
        Ok(())
    }

    fn unparse_except_handler(&mut self, handler: &ExceptHandler) -> Result<(), CodegenError> {
        let ExceptHandler { type_, name, body } = handler;
        if type_.is_none() && name.is_some() {
            return Err(CodegenError::MalformedTree(
                "except binding without an exception type",
            ));
        }
        self.p("except");
        if let Some(type_) = type_ {
            self.p(" ");
            self.unparse_expr(type_, precedence::EXPR)?;
        }
        if let Some(name) = name {
            self.p(" as ");
            self.p(name);
        }
        self.p(":");
        self.body(body)
    }

    pub fn unparse_expr(&mut self, expr: &Expr, level: u8) -> Result<(), CodegenError> {
        macro_rules! opprec {
            ($opty:ident, $x:expr, $enu:path, $($var:ident($op:literal, $prec:ident)),*$(,)?) => {
                match $x {
                    $(<$enu>::$var => (opprec!(@space $opty, $op), precedence::$prec),)*
                }
            };
            (@space bin, $op:literal) => {
                concat!(" ", $op, " ")
            };
            (@space un, $op:literal) => {
                $op
            };
        }
        macro_rules! group_if {
            ($lvl:expr, $body:block) => {{
                let group = level > $lvl;
                self.p_if(group, "(");
                let ret = $body;
                self.p_if(group, ")");
                ret
            }};
        }
        match expr {
            Expr::BoolOp(ExprBoolOp { op, values }) => {
                if values.len() < 2 {
                    return Err(CodegenError::MalformedTree(
                        "boolean operation with fewer than two operands",
                    ));
                }
                let (op, prec) = opprec!(bin, op, BoolOp, And("and", AND), Or("or", OR));
                group_if!(prec, {
                    let mut first = true;
                    for value in values {
                        self.p_delim(&mut first, op);
                        self.unparse_expr(value, prec + 1)?;
                    }
                });
            }
            Expr::BinOp(ExprBinOp { left, op, right }) => {
                let rassoc = matches!(op, Operator::Pow);
                let (op, prec) = opprec!(
                    bin,
                    op,
                    Operator,
                    Add("+", ARITH),
                    Sub("-", ARITH),
                    Mult("*", TERM),
                    MatMult("@", TERM),
                    Div("/", TERM),
                    Mod("%", TERM),
                    Pow("**", POWER),
                    LShift("<<", SHIFT),
                    RShift(">>", SHIFT),
                    BitOr("|", BOR),
                    BitXor("^", BXOR),
                    BitAnd("&", BAND),
                    FloorDiv("//", TERM),
                );
                group_if!(prec, {
                    self.unparse_expr(left, prec + u8::from(rassoc))?;
                    self.p(op);
                    self.unparse_expr(right, prec + u8::from(!rassoc))?;
                });
            }
            Expr::UnaryOp(ExprUnaryOp { op, operand }) => {
                let (op, prec) = opprec!(
                    un,
                    op,
                    UnaryOp,
                    Invert("~", FACTOR),
                    Not("not ", NOT),
                    UAdd("+", FACTOR),
                    USub("-", FACTOR),
                );
                group_if!(prec, {
                    self.p(op);
                    self.unparse_expr(operand, prec)?;
                });
            }
            Expr::Lambda(ExprLambda { parameters, body }) => {
                group_if!(precedence::TEST, {
                    self.p(if parameters.is_empty() {
                        "lambda"
                    } else {
                        "lambda "
                    });
                    self.unparse_parameters(parameters)?;
                    self.p(": ");
                    self.unparse_expr(body, precedence::TEST)?;
                });
            }
            Expr::If(ExprIf { test, body, orelse }) => {
                group_if!(precedence::TEST, {
                    self.unparse_expr(body, precedence::TEST + 1)?;
                    self.p(" if ");
                    self.unparse_expr(test, precedence::TEST + 1)?;
                    self.p(" else ");
                    self.unparse_expr(orelse, precedence::TEST)?;
                });
            }
            Expr::Dict(ExprDict { items }) => {
                self.p("{");
                let mut first = true;
                for DictItem { key, value } in items {
                    self.p_delim(&mut first, ", ");
                    if let Some(key) = key {
                        self.unparse_expr(key, precedence::TEST)?;
                        self.p(": ");
                        self.unparse_expr(value, precedence::TEST)?;
                    } else {
                        self.p("**");
                        self.unparse_expr(value, precedence::EXPR)?;
                    }
                }
                self.p("}");
            }
            Expr::Set(ExprSet { elts }) => {
                if elts.is_empty() {
                    // There is no empty-set display.
                    self.p("set()");
                } else {
                    self.p("{");
                    let mut first = true;
                    for elt in elts {
                        self.p_delim(&mut first, ", ");
                        self.unparse_expr(elt, precedence::TEST)?;
                    }
                    self.p("}");
                }
            }
            Expr::ListComp(ExprListComp { elt, generators }) => {
                self.p("[");
                self.unparse_expr(elt, precedence::TEST)?;
                self.unparse_comp(generators)?;
                self.p("]");
            }
            Expr::SetComp(ExprSetComp { elt, generators }) => {
                self.p("{");
                self.unparse_expr(elt, precedence::TEST)?;
                self.unparse_comp(generators)?;
                self.p("}");
            }
            Expr::DictComp(ExprDictComp {
                key,
                value,
                generators,
            }) => {
                self.p("{");
                self.unparse_expr(key, precedence::TEST)?;
                self.p(": ");
                self.unparse_expr(value, precedence::TEST)?;
                self.unparse_comp(generators)?;
                self.p("}");
            }
            Expr::Generator(ExprGenerator { elt, generators }) => {
                self.p("(");
                self.unparse_expr(elt, precedence::TEST)?;
                self.unparse_comp(generators)?;
                self.p(")");
            }
            Expr::Yield(ExprYield { value }) => {
                group_if!(precedence::YIELD, {
                    self.p("yield");
                    if let Some(value) = value {
                        self.p(" ");
                        self.unparse_expr(value, precedence::ATOM)?;
                    }
                });
            }
            Expr::YieldFrom(ExprYieldFrom { value }) => {
                group_if!(precedence::YIELD, {
                    self.p("yield from ");
                    self.unparse_expr(value, precedence::ATOM)?;
                });
            }
            Expr::Compare(ExprCompare {
                left,
                ops,
                comparators,
            }) => {
                if ops.is_empty() {
                    return Err(CodegenError::MalformedTree(
                        "comparison without operators",
                    ));
                }
                if ops.len() != comparators.len() {
                    return Err(CodegenError::MalformedTree(
                        "comparison operator and comparator counts differ",
                    ));
                }
                group_if!(precedence::CMP, {
                    let new_lvl = precedence::CMP + 1;
                    self.unparse_expr(left, new_lvl)?;
                    for (op, comparator) in ops.iter().zip(comparators) {
                        let op = match op {
                            CmpOp::Eq => " == ",
                            CmpOp::NotEq => " != ",
                            CmpOp::Lt => " < ",
                            CmpOp::LtE => " <= ",
                            CmpOp::Gt => " > ",
                            CmpOp::GtE => " >= ",
                            CmpOp::Is => " is ",
                            CmpOp::IsNot => " is not ",
                            CmpOp::In => " in ",
                            CmpOp::NotIn => " not in ",
                        };
                        self.p(op);
                        self.unparse_expr(comparator, new_lvl)?;
                    }
                });
            }
            Expr::Call(ExprCall {
                func,
                args,
                keywords,
            }) => {
                self.unparse_expr(func, precedence::ATOM)?;
                self.p("(");
                if let ([Expr::Generator(ExprGenerator { elt, generators })], []) =
                    (args.as_slice(), keywords.as_slice())
                {
                    // make sure a single genexp doesn't get double parens
                    self.unparse_expr(elt, precedence::TEST)?;
                    self.unparse_comp(generators)?;
                } else {
                    let mut first = true;
                    for arg in args {
                        self.p_delim(&mut first, ", ");
                        self.unparse_expr(arg, precedence::TEST)?;
                    }
                    for keyword in keywords {
                        self.p_delim(&mut first, ", ");
                        self.unparse_keyword(keyword)?;
                    }
                }
                self.p(")");
            }
            Expr::NumberLiteral(ExprNumberLiteral { value }) => match value {
                Number::Int(int) => self.p(&int.to_string()),
                Number::Float(float) => {
                    if float.is_nan() {
                        // No NaN literal exists; "nan" would re-parse as a name.
                        return Err(CodegenError::MalformedTree(
                            "NaN float has no literal form",
                        ));
                    }
                    self.p(&escape::float_repr(*float));
                }
                Number::Complex { real, imag } => {
                    if real.is_nan() || imag.is_nan() {
                        return Err(CodegenError::MalformedTree(
                            "NaN float has no literal form",
                        ));
                    }
                    self.p(&escape::complex_repr(*real, *imag));
                }
            },
            Expr::StringLiteral(ExprStringLiteral { value }) => {
                self.p(&escape::str_repr(value));
            }
            Expr::BytesLiteral(ExprBytesLiteral { value }) => {
                self.p(&escape::bytes_repr(value));
            }
            Expr::BooleanLiteral(ExprBooleanLiteral { value }) => {
                self.p(if *value { "True" } else { "False" });
            }
            Expr::NoneLiteral(ExprNoneLiteral) => self.p("None"),
            Expr::EllipsisLiteral(ExprEllipsisLiteral) => self.p("..."),
            Expr::Attribute(ExprAttribute { value, attr }) => {
                if let Expr::NumberLiteral(ExprNumberLiteral {
                    value: Number::Int(_),
                }) = value.as_ref()
                {
                    // `5.foo` would parse the dot as a decimal point
                    self.p("(");
                    self.unparse_expr(value, precedence::ATOM)?;
                    self.p(").");
                } else {
                    self.unparse_expr(value, precedence::ATOM)?;
                    self.p(".");
                }
                self.p(attr);
            }
            Expr::Subscript(ExprSubscript { value, slice }) => {
                self.unparse_expr(value, precedence::ATOM)?;
                self.p("[");
                match slice.as_ref() {
                    Expr::Slice(slice) => {
                        self.unparse_slice(slice)?;
                    }
                    Expr::Tuple(ExprTuple { elts })
                        if !elts.is_empty() && elts.iter().any(Expr::is_slice_expr) =>
                    {
                        // multi-dimensional index; slices render bare
                        // between the commas
                        let mut first = true;
                        for elt in elts {
                            self.p_delim(&mut first, ", ");
                            self.unparse_index(elt)?;
                        }
                        self.p_if(elts.len() == 1, ",");
                    }
                    Expr::Tuple(ExprTuple { elts })
                        if elts.iter().any(Expr::is_starred_expr) =>
                    {
                        // a starred element forces the parenthesized form
                        self.unparse_expr(slice, precedence::TUPLE + 1)?;
                    }
                    _ => {
                        self.unparse_expr(slice, precedence::TUPLE)?;
                    }
                }
                self.p("]");
            }
            Expr::Starred(ExprStarred { value }) => {
                self.p("*");
                self.unparse_expr(value, precedence::EXPR)?;
            }
            Expr::Name(ExprName { id }) => self.p(id),
            Expr::List(ExprList { elts }) => {
                self.p("[");
                let mut first = true;
                for elt in elts {
                    self.p_delim(&mut first, ", ");
                    self.unparse_expr(elt, precedence::TEST)?;
                }
                self.p("]");
            }
            Expr::Tuple(ExprTuple { elts }) => {
                if elts.is_empty() {
                    self.p("()");
                } else {
                    group_if!(precedence::TUPLE, {
                        let mut first = true;
                        for elt in elts {
                            self.p_delim(&mut first, ", ");
                            self.unparse_expr(elt, precedence::TEST)?;
                        }
                        self.p_if(elts.len() == 1, ",");
                    });
                }
            }
            Expr::Slice(_) => {
                // A bare slice is only syntax inside a subscript index;
                // anywhere else the output would not re-parse.
                return Err(CodegenError::UnsupportedConstruct(
                    "slice expression outside a subscript index",
                ));
            }
        }
        Ok(())
    }

    fn unparse_slice(&mut self, slice: &ExprSlice) -> Result<(), CodegenError> {
        let ExprSlice { lower, upper, step } = slice;
        if let Some(lower) = lower {
            self.unparse_expr(lower, precedence::TEST)?;
        }
        self.p(":");
        if let Some(upper) = upper {
            self.unparse_expr(upper, precedence::TEST)?;
        }
        if let Some(step) = step {
            self.p(":");
            self.unparse_expr(step, precedence::TEST)?;
        }
        Ok(())
    }

    fn unparse_index(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::Slice(slice) => self.unparse_slice(slice),
            _ => self.unparse_expr(expr, precedence::TEST),
        }
    }

    fn unparse_keyword(&mut self, keyword: &Keyword) -> Result<(), CodegenError> {
        if let Some(arg) = &keyword.arg {
            self.p(arg);
            self.p("=");
            self.unparse_expr(&keyword.value, precedence::TEST)?;
        } else {
            self.p("**");
            self.unparse_expr(&keyword.value, precedence::EXPR)?;
        }
        Ok(())
    }

    fn unparse_parameters(&mut self, parameters: &Parameters) -> Result<(), CodegenError> {
        let mut first = true;
        for ParameterWithDefault { parameter, default } in &parameters.args {
            self.p_delim(&mut first, ", ");
            self.unparse_parameter(parameter);
            if let Some(default) = default {
                self.p("=");
                self.unparse_expr(default, precedence::TEST)?;
            }
        }
        if parameters.vararg.is_some() || !parameters.kwonlyargs.is_empty() {
            self.p_delim(&mut first, ", ");
            self.p("*");
        }
        if let Some(vararg) = &parameters.vararg {
            self.unparse_parameter(vararg);
        }
        for ParameterWithDefault { parameter, default } in &parameters.kwonlyargs {
            self.p_delim(&mut first, ", ");
            self.unparse_parameter(parameter);
            if let Some(default) = default {
                self.p("=");
                self.unparse_expr(default, precedence::TEST)?;
            }
        }
        if let Some(kwarg) = &parameters.kwarg {
            self.p_delim(&mut first, ", ");
            self.p("**");
            self.unparse_parameter(kwarg);
        }
        Ok(())
    }

    fn unparse_parameter(&mut self, parameter: &Parameter) {
        self.p(&parameter.name);
    }

    fn unparse_comp(&mut self, generators: &[Comprehension]) -> Result<(), CodegenError> {
        if generators.is_empty() {
            return Err(CodegenError::MalformedTree(
                "comprehension without generator clauses",
            ));
        }
        for comp in generators {
            self.p(" for ");
            self.unparse_expr(&comp.target, precedence::TUPLE)?;
            self.p(" in ");
            self.unparse_expr(&comp.iter, precedence::TEST + 1)?;
            for cond in &comp.ifs {
                self.p(" if ");
                self.unparse_expr(cond, precedence::TEST + 1)?;
            }
        }
        Ok(())
    }

    fn unparse_alias(&mut self, alias: &Alias) {
        self.p(&alias.name);
        if let Some(asname) = &alias.asname {
            self.p(" as ");
            self.p(asname);
        }
    }

    fn unparse_with_item(&mut self, item: &WithItem) -> Result<(), CodegenError> {
        self.unparse_expr(&item.context_expr, precedence::EXPR)?;
        if let Some(optional_vars) = &item.optional_vars {
            self.p(" as ");
            self.unparse_expr(optional_vars, precedence::EXPR)?;
        }
        Ok(())
    }
}
