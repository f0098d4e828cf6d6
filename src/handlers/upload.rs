use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{state::AppState, types::AppError};

/// Fixed success payload returned once both storage calls complete
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Fixed success message
    pub message: String,
}

/// Handles `POST /upload`
///
/// Accepts a multipart form with a required `upload_image` file part and a
/// required `file_name` text field, writes the payload to S3 under
/// `{prefix}/{file_name}` and marks the object public-read. The two storage
/// calls are not atomic: if the ACL call fails after a successful write, the
/// object stays in the bucket and the caller still gets the storage-failure
/// response.
///
/// # Errors
///
/// Returns `AppError::InvalidMultipart` when the body cannot be parsed,
/// `AppError::MissingField` when a required part is absent and
/// `AppError::Storage` when either S3 call fails.
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file_name: Option<String> = None;
    let mut image_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "upload_image" => {
                content_type = field.content_type().map(ToString::to_string);
                image_data = Some(field.bytes().await?.to_vec());
            }
            "file_name" => {
                file_name = Some(field.text().await?);
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let file_name = file_name.ok_or(AppError::MissingField("file_name"))?;
    let image_data = image_data.ok_or(AppError::MissingField("upload_image"))?;

    let key = state.media_storage.object_key(&file_name);
    info!(
        key = %key,
        size = image_data.len(),
        content_type = ?content_type,
        "Received image upload"
    );

    state
        .media_storage
        .put_object(&key, image_data, content_type.as_deref())
        .await?;
    state.media_storage.set_public_read(&key).await?;

    info!(key = %key, "Image uploaded successfully");

    Ok(Json(UploadResponse {
        message: "Image uploaded successfully".to_string(),
    }))
}
