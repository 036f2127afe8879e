use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{covering_span, Node, NodeRef, NodeType},
    declarations::{FunctionDecl, Identifier},
};

/// Expression
///
/// Every construct of the language is an expression. Nodes are built in one
/// go by their constructors and never change afterwards. Variants holding
/// more than one token are boxed to keep `Expr` small on deeply nested input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Parenthesis(Box<ParenthesisExpr>),
    Block(Box<BlockExpr>),
    Function(Box<FunctionDecl>),
    Identifier(Identifier),
    Invalid(InvalidExpr),
}

impl Expr {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Expr::Invalid(_))
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Literal(expr) => expr,
            Expr::Unary(expr) => expr,
            Expr::Binary(expr) => expr,
            Expr::Parenthesis(expr) => expr.as_ref(),
            Expr::Block(expr) => expr.as_ref(),
            Expr::Function(expr) => expr.as_ref(),
            Expr::Identifier(expr) => expr,
            Expr::Invalid(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn get_node_type(&self) -> NodeType {
        self.as_node().get_node_type()
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.as_node().children()
    }
    fn get_span(&self) -> Span {
        self.as_node().get_span()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(expr) => write!(f, "{}", expr.token),
            Expr::Unary(expr) => match &expr.operand {
                Some(operand) => write!(f, "{}{}", expr.operator, operand),
                None => write!(f, "{}", expr.operator),
            },
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.left, expr.operator, expr.right),
            Expr::Parenthesis(expr) => match &expr.inner {
                Some(inner) => write!(f, "({})", inner),
                None => write!(f, "()"),
            },
            Expr::Block(expr) => write!(f, "{}", expr),
            Expr::Function(expr) => write!(f, "{}", expr),
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Invalid(expr) => match &expr.inner {
                InvalidNode::Token(token) => write!(f, "{}", token),
                InvalidNode::Expr(inner) => write!(f, "{}", inner),
            },
        }
    }
}

// LITERALS

/// Literal Expression
/// Wraps a number or string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpr {
    token: Token,
}

impl LiteralExpr {
    pub fn new(token: Token) -> Self {
        LiteralExpr { token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Node for LiteralExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Literal
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![NodeRef::Token(&self.token)]
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

// OPERATORS

/// Unary Expression
/// A prefix operator and its operand. The operand is absent when none could
/// be found after the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    operator: Token,
    operand: Option<Box<Expr>>,
    span: Span,
}

impl UnaryExpr {
    pub fn new(operator: Token, operand: Option<Expr>) -> Self {
        let mut expr = UnaryExpr {
            operator,
            operand: operand.map(Box::new),
            span: Span::default(),
        };
        let span = covering_span(&expr.children());
        expr.span = span;
        expr
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn operand(&self) -> Option<&Expr> {
        self.operand.as_deref()
    }
}

impl Node for UnaryExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Unary
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![NodeRef::Token(&self.operator)];
        if let Some(operand) = &self.operand {
            children.push(NodeRef::Expr(operand));
        }
        children
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

/// Binary Expression
/// Both operands are always present; the parser substitutes an invalid
/// expression when the right-hand side is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    left: Box<Expr>,
    operator: Token,
    right: Box<Expr>,
    span: Span,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        let span = Span::new(left.get_span().start, right.get_span().end);

        BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

impl Node for BinaryExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Binary
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![
            NodeRef::Expr(&self.left),
            NodeRef::Token(&self.operator),
            NodeRef::Expr(&self.right),
        ]
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

// GROUPING

/// Parenthesis Expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesisExpr {
    open: Token,
    inner: Option<Box<Expr>>,
    close: Option<Token>,
    span: Span,
}

impl ParenthesisExpr {
    pub fn new(open: Token, inner: Option<Expr>, close: Option<Token>) -> Self {
        let mut expr = ParenthesisExpr {
            open,
            inner: inner.map(Box::new),
            close,
            span: Span::default(),
        };
        let span = covering_span(&expr.children());
        expr.span = span;
        expr
    }

    pub fn open(&self) -> &Token {
        &self.open
    }

    pub fn inner(&self) -> Option<&Expr> {
        self.inner.as_deref()
    }

    pub fn close(&self) -> Option<&Token> {
        self.close.as_ref()
    }
}

impl Node for ParenthesisExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Parenthesis
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![NodeRef::Token(&self.open)];
        if let Some(inner) = &self.inner {
            children.push(NodeRef::Expr(inner));
        }
        if let Some(close) = &self.close {
            children.push(NodeRef::Token(close));
        }
        children
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

/// Block Expression
/// `{` followed by any number of expressions and `}`. The closing brace is
/// absent when the input ended first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockExpr {
    open: Token,
    expressions: Vec<Expr>,
    close: Option<Token>,
    span: Span,
}

impl BlockExpr {
    pub fn new(open: Token, expressions: Vec<Expr>, close: Option<Token>) -> Self {
        let mut block = BlockExpr {
            open,
            expressions,
            close,
            span: Span::default(),
        };
        let span = covering_span(&block.children());
        block.span = span;
        block
    }

    pub fn open(&self) -> &Token {
        &self.open
    }

    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }

    pub fn close(&self) -> Option<&Token> {
        self.close.as_ref()
    }
}

impl Node for BlockExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Block
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![NodeRef::Token(&self.open)];
        children.extend(self.expressions.iter().map(NodeRef::Expr));
        if let Some(close) = &self.close {
            children.push(NodeRef::Token(close));
        }
        children
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for BlockExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.expressions.is_empty() {
            return write!(f, "{{ }}");
        }

        let body = self
            .expressions
            .iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{{ {} }}", body)
    }
}

// RECOVERY

/// What an invalid expression wraps: either the offending token or the
/// partial construct built before parsing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNode {
    Token(Token),
    Expr(Box<Expr>),
}

/// Invalid Expression
/// Marks a place where no valid construct could be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidExpr {
    inner: InvalidNode,
}

impl InvalidExpr {
    pub fn from_token(token: Token) -> Self {
        InvalidExpr {
            inner: InvalidNode::Token(token),
        }
    }

    pub fn from_expr(expr: Expr) -> Self {
        InvalidExpr {
            inner: InvalidNode::Expr(Box::new(expr)),
        }
    }

    pub fn inner(&self) -> &InvalidNode {
        &self.inner
    }
}

impl Node for InvalidExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Invalid
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        match &self.inner {
            InvalidNode::Token(token) => vec![NodeRef::Token(token)],
            InvalidNode::Expr(expr) => vec![NodeRef::Expr(expr)],
        }
    }
    fn get_span(&self) -> Span {
        match &self.inner {
            InvalidNode::Token(token) => token.span,
            InvalidNode::Expr(expr) => expr.get_span(),
        }
    }
}
