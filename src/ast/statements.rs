use std::slice::Iter;

use crate::Span;

use super::ast::{Expr, LValue, Statement};

/// Statements of one block; `R` is the return slot of the enclosing body.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<R> {
    pub body: Vec<Statement<R>>,
    pub span: Span,
}

impl<R> Block<R> {
    pub fn iter(&self) -> Iter<'_, Statement<R>> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a Block<R> {
    type Item = &'a Statement<R>;
    type IntoIter = Iter<'a, Statement<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `VAR name` or `VAR name <- value`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

/// `VAR name[size]`, size is always at least 1
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDeclStmt {
    pub identifier: String,
    pub size: u64,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub assignee: LValue,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt<R> {
    pub condition: Expr,
    pub then_body: Block<R>,
    pub else_body: Option<Block<R>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt<R> {
    pub condition: Expr,
    pub body: Block<R>,
    pub span: Span,
}

/// `FOR variable <- from TO to DO body ENDFOR`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt<R> {
    pub variable: String,
    pub from: Expr,
    pub to: Expr,
    pub body: Block<R>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub argument: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// A call used for its side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}
