use actix_web::http::header::{Accept, Header, Quality};
use actix_web::{mime, HttpRequest};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Html,
}

impl ResponseFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(ResponseFormat::Json),
            "html" | "htm" => Some(ResponseFormat::Html),
            _ => None,
        }
    }

    fn media_type(self) -> (mime::Name<'static>, mime::Name<'static>) {
        match self {
            ResponseFormat::Json => (mime::APPLICATION, mime::JSON),
            ResponseFormat::Html => (mime::TEXT, mime::HTML),
        }
    }

    fn is_exactly(self, media: &mime::Mime) -> bool {
        let (ty, subtype) = self.media_type();
        media.type_() == ty && media.subtype() == subtype
    }

    fn matches(self, media: &mime::Mime) -> bool {
        let (ty, subtype) = self.media_type();
        media.type_() == mime::STAR
            || (media.type_() == ty && (media.subtype() == subtype || media.subtype() == mime::STAR))
    }
}

/// Picks the response format for `req` out of `supported`, which is listed
/// in order of preference.
///
/// A `{format}` path suffix wins over the `Accept` header. A missing header
/// or `*/*` selects the first supported format that was not refused with
/// `q=0`.
pub fn negotiate(req: &HttpRequest, supported: &[ResponseFormat]) -> Result<ResponseFormat, ApiError> {
    if let Some(ext) = req.match_info().get("format") {
        return ResponseFormat::from_extension(ext)
            .filter(|format| supported.contains(format))
            .ok_or(ApiError::NotAcceptable);
    }

    let mut items = Accept::parse(req).map(|accept| accept.0).unwrap_or_default();

    if items.is_empty() {
        return supported.first().copied().ok_or(ApiError::NotAcceptable);
    }

    // q=0 on an exact media type refuses it, even under a wildcard.
    let refused: Vec<ResponseFormat> = supported
        .iter()
        .copied()
        .filter(|format| {
            items
                .iter()
                .any(|qitem| qitem.quality == Quality::ZERO && format.is_exactly(&qitem.item))
        })
        .collect();

    items.retain(|qitem| qitem.quality > Quality::ZERO);
    items.sort_by(|a, b| b.quality.cmp(&a.quality));

    for qitem in &items {
        let found = supported
            .iter()
            .find(|format| !refused.contains(*format) && format.matches(&qitem.item));
        if let Some(format) = found {
            return Ok(*format);
        }
    }

    Err(ApiError::NotAcceptable)
}
