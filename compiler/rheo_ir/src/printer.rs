//! Indented tree dump of the AST, for debugging and golden tests.
//!
//! Each node prints on its own line, children indented two spaces deeper:
//!
//! ```text
//! FunctionDecl(main)
//!   ReturnType: i64
//!   BlockExpr
//!     ReturnStmt
//!       IntLiteral(1399)
//! ```

use std::fmt::{self, Write};

use crate::ast::{BlockExpr, Expr, ExprKind, FunctionDecl, Module, Stmt, StmtKind, Type, TypeKind};

/// Writes AST nodes as an indented tree into any `fmt::Write` sink.
pub struct AstPrinter<W> {
    out: W,
    depth: usize,
}

impl AstPrinter<String> {
    /// Render a module into a fresh string.
    pub fn module_to_string(module: &Module<'_>) -> String {
        let mut printer = AstPrinter::new(String::new());
        // Writing into a String cannot fail.
        let _ = printer.print_module(module);
        printer.into_inner()
    }

    pub fn function_to_string(func: &FunctionDecl<'_>) -> String {
        let mut printer = AstPrinter::new(String::new());
        let _ = printer.print_function(func);
        printer.into_inner()
    }

    pub fn expr_to_string(expr: &Expr<'_>) -> String {
        let mut printer = AstPrinter::new(String::new());
        let _ = printer.print_expr(expr);
        printer.into_inner()
    }
}

impl<W: Write> AstPrinter<W> {
    pub fn new(out: W) -> Self {
        AstPrinter { out, depth: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_module(&mut self, module: &Module<'_>) -> fmt::Result {
        self.line(format_args!("Module({})", module.name))?;
        self.nested(|p| {
            for func in module.functions {
                p.print_function(func)?;
            }
            Ok(())
        })
    }

    pub fn print_function(&mut self, func: &FunctionDecl<'_>) -> fmt::Result {
        self.line(format_args!("FunctionDecl({})", func.name))?;
        self.nested(|p| {
            for param in func.params {
                p.line(format_args!("Param({}: {})", param.name, TypeDisplay(param.ty)))?;
            }
            if let Some(ret) = func.return_type {
                p.line(format_args!("ReturnType: {}", TypeDisplay(ret)))?;
            }
            if let Some(body) = func.body {
                p.print_block(body)?;
            }
            Ok(())
        })
    }

    pub fn print_expr(&mut self, expr: &Expr<'_>) -> fmt::Result {
        match expr.kind {
            ExprKind::IntLiteral(value) => self.line(format_args!("IntLiteral({value})")),
            ExprKind::FloatLiteral(value) => self.line(format_args!("FloatLiteral({value:?})")),
            ExprKind::BoolLiteral(value) => self.line(format_args!("BoolLiteral({value})")),
            ExprKind::VarRef(name) => self.line(format_args!("VarRef({name})")),
            ExprKind::Continue => self.line(format_args!("ContinueExpr")),
            ExprKind::Unary { op, operand } => {
                self.line(format_args!("UnaryExpr({})", op.as_symbol()))?;
                self.nested(|p| p.print_expr(operand))
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.line(format_args!("BinaryExpr({})", op.as_symbol()))?;
                self.nested(|p| {
                    p.print_expr(lhs)?;
                    p.print_expr(rhs)
                })
            }
            ExprKind::Call { callee, args } => {
                self.line(format_args!("CallExpr"))?;
                self.nested(|p| {
                    p.section("Callee:", |p| p.print_expr(callee))?;
                    p.section("Args:", |p| {
                        for arg in args {
                            p.print_expr(arg)?;
                        }
                        Ok(())
                    })
                })
            }
            ExprKind::Block(block) => self.print_block(block),
            ExprKind::If {
                condition,
                then_block,
                else_branch,
            } => {
                self.line(format_args!("IfExpr"))?;
                self.nested(|p| {
                    p.section("Condition:", |p| p.print_expr(condition))?;
                    p.section("Then:", |p| p.print_block(then_block))?;
                    if let Some(else_branch) = else_branch {
                        p.section("Else:", |p| p.print_expr(else_branch))?;
                    }
                    Ok(())
                })
            }
            ExprKind::While { condition, body } => {
                self.line(format_args!("WhileExpr"))?;
                self.nested(|p| {
                    p.section("Condition:", |p| p.print_expr(condition))?;
                    p.section("Body:", |p| p.print_block(body))
                })
            }
            ExprKind::Break(value) => {
                self.line(format_args!("BreakExpr"))?;
                match value {
                    Some(value) => self.nested(|p| p.print_expr(value)),
                    None => Ok(()),
                }
            }
        }
    }

    pub fn print_block(&mut self, block: &BlockExpr<'_>) -> fmt::Result {
        self.line(format_args!("BlockExpr"))?;
        self.nested(|p| {
            for stmt in block.stmts {
                p.print_stmt(stmt)?;
            }
            if let Some(tail) = block.tail {
                p.section("Tail:", |p| p.print_expr(tail))?;
            }
            Ok(())
        })
    }

    pub fn print_stmt(&mut self, stmt: &Stmt<'_>) -> fmt::Result {
        match stmt.kind {
            StmtKind::Expr(expr) => {
                self.line(format_args!("ExprStmt"))?;
                self.nested(|p| p.print_expr(expr))
            }
            StmtKind::Return(value) => {
                self.line(format_args!("ReturnStmt"))?;
                match value {
                    Some(value) => self.nested(|p| p.print_expr(value)),
                    None => Ok(()),
                }
            }
            StmtKind::VarDecl {
                name,
                ty,
                init,
                is_mut,
            } => {
                let mutability = if is_mut { "mut " } else { "" };
                match ty {
                    Some(ty) => self.line(format_args!(
                        "VarDecl({mutability}{name}: {})",
                        TypeDisplay(ty)
                    ))?,
                    None => self.line(format_args!("VarDecl({mutability}{name})"))?,
                }
                match init {
                    Some(init) => self.nested(|p| p.print_expr(init)),
                    None => Ok(()),
                }
            }
            StmtKind::Assign { target, value } => {
                self.line(format_args!("AssignStmt"))?;
                self.nested(|p| {
                    p.section("Target:", |p| p.print_expr(target))?;
                    p.section("Value:", |p| p.print_expr(value))
                })
            }
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str("  ")?;
        }
        self.out.write_fmt(args)?;
        self.out.write_char('\n')
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> fmt::Result) -> fmt::Result {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// A labeled child group such as `Condition:` with its contents nested
    /// one level below the label.
    fn section(
        &mut self,
        label: &str,
        f: impl FnOnce(&mut Self) -> fmt::Result,
    ) -> fmt::Result {
        self.line(format_args!("{label}"))?;
        self.nested(f)
    }
}

/// Inline rendering of a type: `i32`, `Point`, `(i32, bool)`.
struct TypeDisplay<'a, 'ast>(&'a Type<'ast>);

impl fmt::Display for TypeDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.kind {
            TypeKind::Builtin(kind) => f.write_str(kind.as_str()),
            TypeKind::Named(name) => f.write_str(name),
            TypeKind::Tuple(elements) => {
                f.write_char('(')?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", TypeDisplay(*element))?;
                }
                f.write_char(')')
            }
        }
    }
}
