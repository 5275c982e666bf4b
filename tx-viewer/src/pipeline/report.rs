//! What one submission produced.

use axum::http::StatusCode;
use tx_viewer_shared::{Transfer, TransferEdge};

use crate::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Success,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

/// A message shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }
}

/// Everything rendered for a submission.
///
/// Sections filled before a failure are kept, so the page still shows the
/// table and charts when the graph step fails.
#[derive(Debug, Default)]
pub struct Report {
    pub notices: Vec<Notice>,
    pub transfers: Vec<Transfer>,
    pub line_svg: Option<String>,
    pub bar_svg: Option<String>,
    /// `None` when the graph step never ran.
    pub graph_rows: Option<Vec<TransferEdge>>,
    pub graph_svg: Option<String>,
    pub error: Option<ViewerError>,
}

impl Report {
    pub fn status_code(&self) -> StatusCode {
        self.error
            .as_ref()
            .map_or(StatusCode::OK, ViewerError::status_code)
    }

    pub fn has_notice(&self, text: &str) -> bool {
        self.notices.iter().any(|n| n.text == text)
    }
}
