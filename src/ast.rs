use crate::token::{Token, TokenKind};

/// Ast nodes for the expressions.
///
/// Every node owns its children, and nodes can not be changed once built:
/// the parser assembles the tree bottom-up through the constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
    /// A numeric literal
    Number(Token),
    /// The free variable, substituted at evaluation time
    Variable(Token),
    /// name <arg>
    Function {
        /// The function name token
        name: Token,
        /// The single operand
        arg: Box<Ast>,
    },
    /// <left> op <right>
    Binary {
        /// The operator token
        op: Token,
        /// Left operand
        left: Box<Ast>,
        /// Right operand
        right: Box<Ast>,
    },
}

impl Ast {
    /// Build a leaf node from a `Number` or `Variable` token.
    pub fn leaf(token: Token) -> Self {
        match token.kind() {
            TokenKind::Variable => Self::Variable(token),
            _ => Self::Number(token),
        }
    }

    /// Build a function application node
    pub fn function(name: Token, arg: Self) -> Self {
        Self::Function {
            name,
            arg: Box::new(arg),
        }
    }

    /// Build a binary operator node
    pub fn binary(op: Token, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The token this node was built from
    pub fn token(&self) -> &Token {
        match self {
            Self::Number(token) | Self::Variable(token) => token,
            Self::Function { name, .. } => name,
            Self::Binary { op, .. } => op,
        }
    }

    /// Left child. This is the operand for function nodes.
    pub fn left(&self) -> Option<&Ast> {
        match self {
            Self::Number(_) | Self::Variable(_) => None,
            Self::Function { arg, .. } => Some(&**arg),
            Self::Binary { left, .. } => Some(&**left),
        }
    }

    /// Right child, only present on binary operator nodes
    pub fn right(&self) -> Option<&Ast> {
        match self {
            Self::Binary { right, .. } => Some(&**right),
            _ => None,
        }
    }

    /// Check if the free variable appears anywhere in this tree
    pub fn has_variable(&self) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Variable(_) => return true,
                Self::Number(_) => {}
                Self::Function { arg, .. } => pending.push(&**arg),
                Self::Binary { left, right, .. } => {
                    pending.push(&**right);
                    pending.push(&**left);
                }
            }
        }
        false
    }
}
