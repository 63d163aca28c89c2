use crate::Span;

use super::{
    expressions::{
        ArrayAccessExpr, BinaryExpr, CallExpr, GroupingExpr, NumberExpr, PrefixExpr, StringExpr,
        SymbolExpr,
    },
    statements::{
        ArrayDeclStmt, AssignmentStmt, Block, CallStmt, ForStmt, IfStmt, PrintStmt, ReturnStmt,
        VarDeclStmt, WhileStmt,
    },
};

/// Root of the tree: zero or more subroutines followed by exactly one main
/// block.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub subroutines: Vec<SubroutineDef>,
    pub main: MainBlock,
    pub span: Span,
}

/// `name(a, b) BEGIN ... END`. Parameters are distinct and the body may
/// contain `RETURN`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubroutineDef {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Block<ReturnStmt>,
    pub span: Span,
}

/// The program entry `BEGIN ... END`. Its statements fill the return slot
/// with [`NoReturn`], so a `Return` cannot be placed anywhere inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct MainBlock {
    pub body: Block<NoReturn>,
    pub span: Span,
}

/// Statements of a subroutine body, nested blocks included.
pub type SubroutineStatement = Statement<ReturnStmt>;

/// Statements of the main block, nested blocks included.
pub type MainStatement = Statement<NoReturn>;

/// Uninhabited: the return slot of main-block statements.
///
/// ```compile_fail
/// use pseudo::ast::ast::{MainStatement, Statement};
/// use pseudo::ast::statements::ReturnStmt;
///
/// fn smuggle(stmt: ReturnStmt) -> MainStatement {
///     Statement::Return(stmt)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoReturn {}

/// What a statement list may hold in its `Return` position.
pub trait ReturnSlot {
    fn get_span(&self) -> &Span;
}

impl ReturnSlot for ReturnStmt {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl ReturnSlot for NoReturn {
    fn get_span(&self) -> &Span {
        match *self {}
    }
}

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    VarDeclStmt,
    ArrayDeclStmt,
    AssignmentStmt,
    IfStmt,
    WhileStmt,
    ForStmt,
    PrintStmt,
    ReturnStmt,
    CallStmt,
}

/// A statement whose `Return` variant holds an `R`. Nested blocks carry the
/// same `R`, so the restriction reaches every depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<R> {
    VarDecl(VarDeclStmt),
    ArrayDecl(ArrayDeclStmt),
    Assignment(AssignmentStmt),
    If(IfStmt<R>),
    While(WhileStmt<R>),
    For(ForStmt<R>),
    Print(PrintStmt),
    Return(R),
    Call(CallStmt),
}

impl<R: ReturnSlot> Statement<R> {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Statement::VarDecl(_) => StmtType::VarDeclStmt,
            Statement::ArrayDecl(_) => StmtType::ArrayDeclStmt,
            Statement::Assignment(_) => StmtType::AssignmentStmt,
            Statement::If(_) => StmtType::IfStmt,
            Statement::While(_) => StmtType::WhileStmt,
            Statement::For(_) => StmtType::ForStmt,
            Statement::Print(_) => StmtType::PrintStmt,
            Statement::Return(_) => StmtType::ReturnStmt,
            Statement::Call(_) => StmtType::CallStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Statement::VarDecl(stmt) => &stmt.span,
            Statement::ArrayDecl(stmt) => &stmt.span,
            Statement::Assignment(stmt) => &stmt.span,
            Statement::If(stmt) => &stmt.span,
            Statement::While(stmt) => &stmt.span,
            Statement::For(stmt) => &stmt.span,
            Statement::Print(stmt) => &stmt.span,
            Statement::Return(stmt) => stmt.get_span(),
            Statement::Call(stmt) => &stmt.span,
        }
    }
}

/// Left side of `<-`. Closed on purpose: literals and other expressions have
/// no variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum LValue {
    Identifier(SymbolExpr),
    ArrayAccess(ArrayAccessExpr),
}

impl LValue {
    /// Name of the variable or array being written.
    pub fn get_name(&self) -> &str {
        match self {
            LValue::Identifier(symbol) => &symbol.value,
            LValue::ArrayAccess(access) => &access.base,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            LValue::Identifier(symbol) => &symbol.span,
            LValue::ArrayAccess(access) => &access.span,
        }
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Symbol,
    ArrayAccess,
    Prefix,
    Binary,
    CallExpr,
    Grouping,
}

/// Expressions never contain an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    ArrayAccess(ArrayAccessExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Grouping(GroupingExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::ArrayAccess(_) => ExprType::ArrayAccess,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::CallExpr,
            Expr::Grouping(_) => ExprType::Grouping,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::ArrayAccess(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
        }
    }
}
