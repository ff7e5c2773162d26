// Site configuration errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("navigation path {0:?} is declared more than once")]
    DuplicateNavPath(String),

    #[error("navigation path {0:?} must start with '/'")]
    InvalidNavPath(String),

    #[error("theme token {0:?} is declared more than once")]
    DuplicateThemeToken(String),

    #[error("theme token name must not be empty")]
    EmptyThemeTokenName,

    #[error("theme token {0:?} has an empty color value")]
    EmptyThemeTokenValue(String),

    #[error("theme token {0:?} may only contain ASCII letters, digits, '-' and '_'")]
    InvalidThemeTokenName(String),

    #[error("theme token {0:?} has a color value containing one of ;{{}}<>")]
    InvalidThemeTokenValue(String),

    #[error("site title must not be empty")]
    EmptySiteTitle,
}
