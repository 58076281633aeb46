use std::{error::Error, fmt};

#[derive(Debug)]
pub enum BookmarkError {
    MissingSession,
    MissingVideoId,
    Duplicate(String),
    NoBookmarks,
    NotFound(String),
    Store(Box<dyn Error + Send + Sync + 'static>),
}

impl std::error::Error for BookmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use BookmarkError::*;
        match self {
            Store(e) => Some(e.as_ref() as &dyn Error),
            _ => None,
        }
    }
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BookmarkError::*;
        match self {
            MissingSession => write!(f, "MissingSession"),
            MissingVideoId => write!(f, "MissingVideoId"),
            Duplicate(id) => write!(f, "Duplicate: {}", id),
            NoBookmarks => write!(f, "NoBookmarks"),
            NotFound(id) => write!(f, "NotFound: {}", id),
            Store(e) => write!(f, "Store: {}", e),
        }
    }
}

impl From<libsql::Error> for BookmarkError {
    fn from(error: libsql::Error) -> Self {
        BookmarkError::Store(Box::new(error))
    }
}

#[derive(Debug)]
pub enum SearchError {
    EmptySearchTerm,
    Upstream(Box<dyn Error + Send + Sync + 'static>),
    MalformedResponse(String),
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use SearchError::*;
        match self {
            Upstream(e) => Some(e.as_ref() as &dyn Error),
            _ => None,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SearchError::*;
        match self {
            EmptySearchTerm => write!(f, "EmptySearchTerm"),
            Upstream(e) => write!(f, "Upstream: {}", e),
            MalformedResponse(s) => write!(f, "MalformedResponse: {}", s),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        SearchError::Upstream(Box::new(error))
    }
}
