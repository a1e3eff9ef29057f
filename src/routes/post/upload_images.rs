use actix_multipart::Multipart;
use actix_web::{post, web};
use futures_util::TryStreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::UploadImagesRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthedUser;

const MAX_IMAGES_PER_POST: u64 = 5;
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

#[post("/{post_id}/images")]
async fn upload_images(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    path: web::Path<i32>,
    mut payload: Multipart,
) -> ApiResult<UploadImagesRes> {
    let post_id = path.into_inner();

    let post = db.get_post(post_id).await?;
    if post.user_id != user.id {
        return Err(AppError::Forbidden(
            "only the author can add images to this post".to_string(),
        ));
    }

    let existing = db.count_post_images(post_id).await?;
    let upload_dir = PathBuf::from(&config().upload_dir);

    let mut file_paths: Vec<String> = Vec::new();
    let mut written: Vec<PathBuf> = Vec::new();

    let result = async {
        while let Some(mut field) = payload
            .try_next()
            .await
            .map_err(|e| AppError::BadRequest(format!("malformed multipart payload: {e}")))?
        {
            if field.name() != Some("images") {
                return Err(AppError::BadRequest(format!(
                    "unexpected field {:?}",
                    field.name().unwrap_or("")
                )));
            }

            if existing + written.len() as u64 >= MAX_IMAGES_PER_POST {
                return Err(AppError::BadRequest(format!(
                    "a post may have at most {MAX_IMAGES_PER_POST} images"
                )));
            }

            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string)
                .ok_or_else(|| AppError::BadRequest("file name is required".to_string()))?;
            let extension = Path::new(&filename)
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(AppError::BadRequest(
                    "only jpg, jpeg, png and gif images are allowed".to_string(),
                ));
            }
            let is_image = field
                .content_type()
                .map(|ct| ct.essence_str().starts_with("image/"))
                .unwrap_or(false);
            if !is_image {
                return Err(AppError::BadRequest(
                    "only image uploads are allowed".to_string(),
                ));
            }

            let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
            let disk_path = upload_dir.join(&stored_name);
            let mut file = tokio::fs::File::create(&disk_path)
                .await
                .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;
            written.push(disk_path.clone());

            let mut size: usize = 0;
            while let Some(chunk) = field
                .try_next()
                .await
                .map_err(|e| AppError::BadRequest(format!("upload interrupted: {e}")))?
            {
                size += chunk.len();
                if size > MAX_IMAGE_BYTES {
                    return Err(AppError::BadRequest(
                        "images may be at most 5 MiB".to_string(),
                    ));
                }
                file.write_all(&chunk)
                    .await
                    .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;
            }

            file_paths.push(format!("{}/{}", config().upload_dir, stored_name));
        }

        if file_paths.is_empty() {
            return Err(AppError::BadRequest("no images provided".to_string()));
        }
        Ok(())
    }
    .await;

    if let Err(e) = result {
        for path in &written {
            let _ = tokio::fs::remove_file(path).await;
        }
        return Err(e);
    }

    db.add_post_images(post_id, file_paths.clone()).await?;

    Ok(ApiResponse::Created(UploadImagesRes {
        images: file_paths,
    }))
}
