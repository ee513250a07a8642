use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedToken { .. } => "UnrecognizedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingInfixHandler { .. } => "MissingInfixHandler",
            ErrorImpl::ExpectedTokenKind { .. } => "ExpectedTokenKind",
            ErrorImpl::MissingTypeOrValue { .. } => "MissingTypeOrValue",
            ErrorImpl::ConstantWithoutValue { .. } => "ConstantWithoutValue",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognizedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, kind } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}` ({}), expected the start of an expression",
                token, kind
            )),
            ErrorImpl::MissingInfixHandler { kind } => ErrorTip::Suggestion(format!(
                "Operator `{}` has a binding power but no infix handler",
                kind
            )),
            ErrorImpl::ExpectedTokenKind {
                expected,
                received,
                message,
            } => match message {
                Some(message) => ErrorTip::Suggestion(format!(
                    "Expected {}, received {}: {}",
                    expected, received, message
                )),
                None => ErrorTip::Suggestion(format!(
                    "Expected {}, received {}, did you miss a semicolon?",
                    expected, received
                )),
            },
            ErrorImpl::MissingTypeOrValue { identifier } => ErrorTip::Suggestion(format!(
                "Variable `{}` needs an explicit type or a value",
                identifier
            )),
            ErrorImpl::ConstantWithoutValue { identifier } => ErrorTip::Suggestion(format!(
                "Constant `{}` must be assigned a value",
                identifier
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "At most {} levels of nesting are allowed, split the construct up",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognized token near {remainder:?}")]
    UnrecognizedToken { remainder: String },
    #[error("unexpected token {kind}: {token:?}")]
    UnexpectedToken { token: String, kind: TokenKind },
    #[error("no infix handler registered for {kind}")]
    MissingInfixHandler { kind: TokenKind },
    #[error("expected {expected}, but received {received} instead")]
    ExpectedTokenKind {
        expected: TokenKind,
        received: TokenKind,
        message: Option<String>,
    },
    #[error("variable {identifier:?} has neither an explicit type nor a value")]
    MissingTypeOrValue { identifier: String },
    #[error("cannot define constant {identifier:?} without providing a value")]
    ConstantWithoutValue { identifier: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}
