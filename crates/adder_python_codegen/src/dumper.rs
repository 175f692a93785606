//! Dump a tree as an eval-able constructor expression.
//!
//! The output is not Python source but a structural echo of the tree itself:
//! `Kind(field=value, ...)`, suitable for feeding back to a namespace that
//! maps each kind name to a constructor. Fields print sorted by name so the
//! output is stable regardless of declaration order; a node with more than
//! one field (and a sequence with more than one element) breaks across lines,
//! one indent level deeper than its parent.

use adder_python_ast::{AnyNodeRef, Field, Suite};

use crate::{escape, Indentation};

/// Dump a single node with the default two-space indentation unit.
pub fn dump<'a>(node: impl Into<AnyNodeRef<'a>>) -> String {
    dump_with_indentation(node, &Indentation::default())
}

/// Dump a single node.
pub fn dump_with_indentation<'a>(
    node: impl Into<AnyNodeRef<'a>>,
    indentation: &Indentation,
) -> String {
    let mut dumper = Dumper::new(indentation);
    dumper.visit_node(node.into());
    dumper.finish()
}

/// Dump a module-level suite as a bracketed sequence, with the default
/// two-space indentation unit.
pub fn dump_suite(suite: &Suite) -> String {
    dump_suite_with_indentation(suite, &Indentation::default())
}

/// Dump a module-level suite as a bracketed sequence.
pub fn dump_suite_with_indentation(suite: &Suite, indentation: &Indentation) -> String {
    let mut dumper = Dumper::new(indentation);
    dumper.visit_node_seq(&suite.iter().map(Into::into).collect::<Vec<_>>());
    dumper.finish()
}

struct Dumper<'a> {
    out: String,
    current_indent: String,
    one_indent: &'a str,
}

impl<'a> Dumper<'a> {
    fn new(indentation: &'a Indentation) -> Self {
        Self {
            out: String::new(),
            current_indent: String::new(),
            one_indent: indentation.as_str(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self) {
        self.current_indent.push_str(self.one_indent);
    }

    fn dedent(&mut self) {
        self.current_indent
            .truncate(self.current_indent.len() - self.one_indent.len());
    }

    fn break_line(&mut self) {
        self.out.push('\n');
        self.out.push_str(&self.current_indent);
    }

    fn visit_node(&mut self, node: AnyNodeRef<'_>) {
        let mut fields = node.fields();
        fields.sort_unstable_by_key(|(name, _)| *name);

        let multiline = fields.len() > 1;
        if multiline {
            self.indent();
        }
        self.out.push_str(node.kind_name());
        self.out.push('(');
        let count = fields.len();
        for (i, (name, field)) in fields.into_iter().enumerate() {
            if multiline {
                self.break_line();
            }
            self.out.push_str(name);
            self.out.push('=');
            self.visit_field(&field);
            if i + 1 != count {
                self.out.push(',');
            }
        }
        self.out.push(')');
        if multiline {
            self.dedent();
        }
    }

    fn visit_node_seq(&mut self, items: &[AnyNodeRef<'_>]) {
        let multiline = items.len() > 1;
        if multiline {
            self.indent();
        }
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if multiline {
                self.break_line();
            }
            self.visit_node(*item);
            if i + 1 != items.len() {
                self.out.push(',');
            }
        }
        self.out.push(']');
        if multiline {
            self.dedent();
        }
    }

    fn visit_str_seq(&mut self, items: &[String]) {
        let multiline = items.len() > 1;
        if multiline {
            self.indent();
        }
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if multiline {
                self.break_line();
            }
            self.out.push_str(&escape::str_repr(item));
            if i + 1 != items.len() {
                self.out.push(',');
            }
        }
        self.out.push(']');
        if multiline {
            self.dedent();
        }
    }

    fn visit_field(&mut self, field: &Field<'_>) {
        match field {
            Field::Node(node) => self.visit_node(*node),
            Field::NodeSeq(items) => self.visit_node_seq(items),
            Field::StrSeq(items) => self.visit_str_seq(items),
            Field::Str(value) => self.out.push_str(&escape::str_repr(value)),
            Field::Int(value) => self.out.push_str(&value.to_string()),
            Field::Float(value) => self.out.push_str(&escape::float_repr(*value)),
            Field::Complex { real, imag } => {
                self.out.push_str(&escape::complex_repr(*real, *imag));
            }
            Field::Bool(value) => self.out.push_str(if *value { "True" } else { "False" }),
            Field::Bytes(value) => self.out.push_str(&escape::bytes_repr(value)),
            Field::Absent => self.out.push_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use adder_python_ast::{
        Alias, BoolOp, Expr, ExprBinOp, ExprBoolOp, ExprCall, ExprIf, ExprName, ExprNumberLiteral,
        ExprStringLiteral, ExprTuple, Number, Operator, Parameter, ParameterWithDefault,
        Parameters, Stmt, StmtAssign, StmtExpr, StmtFor, StmtFunctionDef, StmtGlobal,
        StmtImportFrom, StmtPass, StmtReturn,
    };

    use crate::{dump, dump_suite, dump_suite_with_indentation, Indentation};

    fn name(id: &str) -> Expr {
        ExprName { id: id.to_string() }.into()
    }

    fn int(value: i64) -> Expr {
        ExprNumberLiteral {
            value: Number::Int(value),
        }
        .into()
    }

    fn call(func: Expr, args: Vec<Expr>) -> Expr {
        ExprCall {
            func: Box::new(func),
            args,
            keywords: vec![],
        }
        .into()
    }

    fn assign(targets: Vec<Expr>, value: Expr) -> Stmt {
        StmtAssign {
            targets,
            value: Box::new(value),
        }
        .into()
    }

    fn expr_stmt(value: Expr) -> Stmt {
        StmtExpr {
            value: Box::new(value),
        }
        .into()
    }

    fn param(name: &str) -> ParameterWithDefault {
        ParameterWithDefault {
            parameter: Parameter {
                name: name.to_string(),
            },
            default: None,
        }
    }

    fn param_with_default(name: &str, default: Expr) -> ParameterWithDefault {
        ParameterWithDefault {
            parameter: Parameter {
                name: name.to_string(),
            },
            default: Some(Box::new(default)),
        }
    }

    fn add_func(decorator_list: Vec<Expr>) -> Stmt {
        StmtFunctionDef {
            decorator_list,
            name: "func".to_string(),
            parameters: Box::new(Parameters {
                args: vec![param("x"), param_with_default("a", int(1))],
                ..Parameters::default()
            }),
            body: vec![StmtReturn {
                value: Some(Box::new(
                    ExprBinOp {
                        left: Box::new(name("x")),
                        op: Operator::Add,
                        right: Box::new(name("a")),
                    }
                    .into(),
                )),
            }
            .into()],
        }
        .into()
    }

    #[test]
    fn single_field_nodes_render_inline() {
        assert_snapshot!(dump(&name("x")), @"Name(id='x')");
        assert_snapshot!(dump(&Stmt::from(StmtPass)), @"Pass()");
        assert_snapshot!(dump(&expr_stmt(name("x"))), @"Expr(value=Name(id='x'))");
    }

    #[test]
    fn fields_sort_by_name_and_break_lines() {
        let stmt = assign(vec![name("a")], int(1));
        assert_snapshot!(dump(&stmt), @r"
        Assign(
          targets=[Name(id='a')],
          value=NumberLiteral(value=1))
        ");
    }

    #[test]
    fn tuple_target_assignment() {
        let stmt = assign(
            vec![ExprTuple {
                elts: vec![name("a"), name("b")],
            }
            .into()],
            ExprTuple {
                elts: vec![int(1), int(2)],
            }
            .into(),
        );
        assert_snapshot!(dump(&stmt), @r"
        Assign(
          targets=[Tuple(elts=[
            Name(id='a'),
            Name(id='b')])],
          value=Tuple(elts=[
            NumberLiteral(value=1),
            NumberLiteral(value=2)]))
        ");
    }

    #[test]
    fn function_def() {
        assert_snapshot!(dump(&add_func(vec![])), @r"
        FunctionDef(
          body=[Return(value=BinOp(
            left=Name(id='x'),
            op=Add(),
            right=Name(id='a')))],
          decorator_list=[],
          name='func',
          parameters=Parameters(
            args=[
              ParameterWithDefault(
                default=None,
                parameter=Parameter(name='x')),
              ParameterWithDefault(
                default=NumberLiteral(value=1),
                parameter=Parameter(name='a'))],
            kwarg=None,
            kwonlyargs=[],
            vararg=None))
        ");
    }

    #[test]
    fn decorators_keep_source_order() {
        assert_snapshot!(dump(&add_func(vec![name("dec1"), name("dec2")])), @r"
        FunctionDef(
          body=[Return(value=BinOp(
            left=Name(id='x'),
            op=Add(),
            right=Name(id='a')))],
          decorator_list=[
            Name(id='dec1'),
            Name(id='dec2')],
          name='func',
          parameters=Parameters(
            args=[
              ParameterWithDefault(
                default=None,
                parameter=Parameter(name='x')),
              ParameterWithDefault(
                default=NumberLiteral(value=1),
                parameter=Parameter(name='a'))],
            kwarg=None,
            kwonlyargs=[],
            vararg=None))
        ");
    }

    #[test]
    fn for_with_else_clause() {
        let stmt: Stmt = StmtFor {
            target: Box::new(name("i")),
            iter: Box::new(call(name("range"), vec![int(5)])),
            body: vec![expr_stmt(call(name("test"), vec![name("i")]))],
            orelse: vec![expr_stmt(call(name("do_stuff"), vec![]))],
        }
        .into();
        assert_snapshot!(dump(&stmt), @r"
        For(
          body=[Expr(value=Call(
            args=[Name(id='i')],
            func=Name(id='test'),
            keywords=[]))],
          iter=Call(
            args=[NumberLiteral(value=5)],
            func=Name(id='range'),
            keywords=[]),
          orelse=[Expr(value=Call(
            args=[],
            func=Name(id='do_stuff'),
            keywords=[]))],
          target=Name(id='i'))
        ");
    }

    #[test]
    fn conditional_expression() {
        let stmt = assign(
            vec![name("a")],
            ExprIf {
                test: Box::new(
                    ExprBinOp {
                        left: Box::new(name("e")),
                        op: Operator::Add,
                        right: Box::new(int(5)),
                    }
                    .into(),
                ),
                body: Box::new(call(name("do_this"), vec![])),
                orelse: Box::new(call(name("do_that"), vec![])),
            }
            .into(),
        );
        assert_snapshot!(dump(&stmt), @r"
        Assign(
          targets=[Name(id='a')],
          value=IfExp(
            body=Call(
              args=[],
              func=Name(id='do_this'),
              keywords=[]),
            orelse=Call(
              args=[],
              func=Name(id='do_that'),
              keywords=[]),
            test=BinOp(
              left=Name(id='e'),
              op=Add(),
              right=NumberLiteral(value=5))))
        ");
    }

    #[test]
    fn suite_renders_as_sequence() {
        let suite = vec![assign(vec![name("x")], int(1)), StmtPass.into()];
        assert_snapshot!(dump_suite(&suite), @r"
        [
          Assign(
            targets=[Name(id='x')],
            value=NumberLiteral(value=1)),
          Pass()]
        ");
    }

    #[test]
    fn boolean_operation() {
        let expr: Expr = ExprBoolOp {
            op: BoolOp::Or,
            values: vec![name("a"), name("b")],
        }
        .into();
        assert_snapshot!(dump(&expr), @r"
        BoolOp(
          op=Or(),
          values=[
            Name(id='a'),
            Name(id='b')])
        ");
    }

    #[test]
    fn scalar_fields_use_literal_reprs() {
        assert_snapshot!(
            dump(&Expr::from(ExprStringLiteral {
                value: "it's".to_string(),
            })),
            @r#"StringLiteral(value="it's")"#
        );
        assert_snapshot!(
            dump(&Expr::from(ExprNumberLiteral {
                value: Number::Float(1.5),
            })),
            @"NumberLiteral(value=1.5)"
        );
        assert_snapshot!(
            dump(&Expr::from(ExprNumberLiteral {
                value: Number::Complex {
                    real: 0.0,
                    imag: 2.0,
                },
            })),
            @"NumberLiteral(value=2j)"
        );
    }

    #[test]
    fn absent_fields_and_string_sequences() {
        let stmt: Stmt = StmtImportFrom {
            module: None,
            names: vec![Alias {
                name: "x".to_string(),
                asname: None,
            }],
            level: 1,
        }
        .into();
        assert_snapshot!(dump(&stmt), @r"
        ImportFrom(
          level=1,
          module=None,
          names=[Alias(
            asname=None,
            name='x')])
        ");

        let stmt: Stmt = StmtGlobal {
            names: vec!["a".to_string(), "b".to_string()],
        }
        .into();
        assert_snapshot!(dump(&stmt), @r"
        Global(names=[
          'a',
          'b'])
        ");
    }

    #[test]
    fn custom_indentation_unit() {
        let suite = vec![assign(vec![name("x")], int(1))];
        let indentation = Indentation::new("    ".to_string());
        assert_snapshot!(dump_suite_with_indentation(&suite, &indentation), @r"
        [Assign(
            targets=[Name(id='x')],
            value=NumberLiteral(value=1))]
        ");
    }
}
