use fxdesk_core::{FxError, Result};
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

/// Returns a copy of `request` carrying `Authorization: <credential>`.
///
/// The credential is used exactly as given (include any `Bearer ` prefix in
/// it). An absent or empty credential yields an unmodified copy: the header
/// is never sent empty.
pub fn attach_token(request: &Request, credential: Option<&str>) -> Result<Request> {
    let mut cloned = request
        .try_clone()
        .ok_or_else(|| FxError::internal("request with a streaming body cannot be cloned"))?;

    let Some(credential) = credential.filter(|value| !value.is_empty()) else {
        return Ok(cloned);
    };

    let mut value = HeaderValue::from_str(credential)
        .map_err(|_| FxError::config("access token contains characters not allowed in a header"))?;
    value.set_sensitive(true);
    cloned.headers_mut().insert(AUTHORIZATION, value);

    Ok(cloned)
}
