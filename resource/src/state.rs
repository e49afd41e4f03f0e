use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Metadata of a response that completed, successfully or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub headers: HeaderMap,
    pub status: StatusCode,
    pub status_text: String,
}

/// Observable state of a fetch resource.
///
/// Each cycle starts from [`RequestState::loading`], so a consumer never
/// sees `is_loading` alongside the data or error of an earlier cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Present only once a response arrived. Absent while loading and after
    /// transport failures.
    pub response_meta: Option<ResponseMeta>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
            response_meta: None,
        }
    }
}

impl<T> RequestState<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn succeeded(data: Option<T>, meta: ResponseMeta) -> Self {
        Self {
            data,
            is_loading: false,
            error: None,
            response_meta: Some(meta),
        }
    }

    pub fn failed(error: String, meta: Option<ResponseMeta>) -> Self {
        Self {
            data: None,
            is_loading: false,
            error: Some(error),
            response_meta: meta,
        }
    }

    /// Returns true while the first response is still outstanding.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.data.is_none() && self.error.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RequestState<U> {
        RequestState {
            data: self.data.map(f),
            is_loading: self.is_loading,
            error: self.error,
            response_meta: self.response_meta,
        }
    }
}
