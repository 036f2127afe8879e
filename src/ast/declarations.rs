use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{covering_span, Node, NodeRef, NodeType},
    expressions::BlockExpr,
    types::TypeExpr,
};

/// Identifier
/// A name, wrapping its identifier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    token: Token,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier { token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn name(&self) -> &str {
        &self.token.text
    }
}

impl Node for Identifier {
    fn get_node_type(&self) -> NodeType {
        NodeType::Identifier
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![NodeRef::Token(&self.token)]
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.text)
    }
}

/// Parameter
/// `name` or `name: Type`. Every parameter after the first carries the comma
/// that precedes it, when there was one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    comma: Option<Token>,
    identifier: Identifier,
    colon: Option<Token>,
    type_expr: Option<TypeExpr>,
    span: Span,
}

impl Parameter {
    pub fn new(
        comma: Option<Token>,
        identifier: Identifier,
        colon: Option<Token>,
        type_expr: Option<TypeExpr>,
    ) -> Self {
        let mut parameter = Parameter {
            comma,
            identifier,
            colon,
            type_expr,
            span: Span::default(),
        };
        let span = covering_span(&parameter.children());
        parameter.span = span;
        parameter
    }

    pub fn comma(&self) -> Option<&Token> {
        self.comma.as_ref()
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn colon(&self) -> Option<&Token> {
        self.colon.as_ref()
    }

    pub fn type_expr(&self) -> Option<&TypeExpr> {
        self.type_expr.as_ref()
    }
}

impl Node for Parameter {
    fn get_node_type(&self) -> NodeType {
        NodeType::Parameter
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![];
        if let Some(comma) = &self.comma {
            children.push(NodeRef::Token(comma));
        }
        children.push(NodeRef::Identifier(&self.identifier));
        if let Some(colon) = &self.colon {
            children.push(NodeRef::Token(colon));
        }
        if let Some(type_expr) = &self.type_expr {
            children.push(NodeRef::Type(type_expr));
        }
        children
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.type_expr {
            Some(type_expr) => write!(f, "{}: {}", self.identifier, type_expr),
            None => write!(f, "{}", self.identifier),
        }
    }
}

/// Parameters List
/// `(` parameters `)`; the closing parenthesis may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametersList {
    open: Token,
    parameters: Vec<Parameter>,
    close: Option<Token>,
    span: Span,
}

impl ParametersList {
    pub fn new(open: Token, parameters: Vec<Parameter>, close: Option<Token>) -> Self {
        let mut list = ParametersList {
            open,
            parameters,
            close,
            span: Span::default(),
        };
        let span = covering_span(&list.children());
        list.span = span;
        list
    }

    pub fn open(&self) -> &Token {
        &self.open
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn close(&self) -> Option<&Token> {
        self.close.as_ref()
    }
}

impl Node for ParametersList {
    fn get_node_type(&self) -> NodeType {
        NodeType::ParametersList
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![NodeRef::Token(&self.open)];
        children.extend(self.parameters.iter().map(NodeRef::Parameter));
        if let Some(close) = &self.close {
            children.push(NodeRef::Token(close));
        }
        children
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for ParametersList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", parameters)
    }
}

/// Function Declaration
///
/// `function name(params) { body }`. Name, parameter list and body are each
/// optional so a declaration missing any of them still yields a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    keyword: Token,
    name: Option<Identifier>,
    parameters: Option<ParametersList>,
    body: Option<BlockExpr>,
    span: Span,
}

impl FunctionDecl {
    pub fn new(
        keyword: Token,
        name: Option<Identifier>,
        parameters: Option<ParametersList>,
        body: Option<BlockExpr>,
    ) -> Self {
        let mut decl = FunctionDecl {
            keyword,
            name,
            parameters,
            body,
            span: Span::default(),
        };
        let span = covering_span(&decl.children());
        decl.span = span;
        decl
    }

    pub fn keyword(&self) -> &Token {
        &self.keyword
    }

    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    pub fn parameters(&self) -> Option<&ParametersList> {
        self.parameters.as_ref()
    }

    pub fn body(&self) -> Option<&BlockExpr> {
        self.body.as_ref()
    }
}

impl Node for FunctionDecl {
    fn get_node_type(&self) -> NodeType {
        NodeType::Function
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        let mut children = vec![NodeRef::Token(&self.keyword)];
        if let Some(name) = &self.name {
            children.push(NodeRef::Identifier(name));
        }
        if let Some(parameters) = &self.parameters {
            children.push(NodeRef::ParametersList(parameters));
        }
        if let Some(body) = &self.body {
            children.push(NodeRef::Block(body));
        }
        children
    }
    fn get_span(&self) -> Span {
        self.span
    }
}

impl Display for FunctionDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "function")?;
        if let Some(name) = &self.name {
            write!(f, " {}", name)?;
        }
        if let Some(parameters) = &self.parameters {
            write!(f, "{}", parameters)?;
        }
        if let Some(body) = &self.body {
            write!(f, " {}", body)?;
        }
        Ok(())
    }
}
