//! Annotation endpoints.

use serde_json::Value;

use super::shaping::remove_key;
use crate::error::{ClientError, Result};
use crate::models::NewAnnotation;
use crate::transport::Transport;

/// Create an annotation. Returns the response without its `message`.
pub async fn create_annotation<T: Transport>(
    transport: &T,
    annotation: &NewAnnotation,
) -> Result<Value> {
    let body = serde_json::to_value(annotation)
        .map_err(|e| ClientError::ValidationError(format!("invalid annotation: {e}")))?;
    let response = transport.post("api/annotations", &body).await?;
    Ok(remove_key(response, "message"))
}
