use crate::error::{Error, Result};
use bytes::Bytes;

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

pub fn image_extension(filename: &str) -> Option<String> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())?;
    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Some(extension)
    } else {
        None
    }
}

/// Stores an uploaded image under `<media_dir>/<subdir>/` with a generated
/// name and returns the path relative to the media root, as recorded in the
/// database and served under `/media`.
pub async fn save_image(
    media_dir: &str,
    subdir: &str,
    filename: &str,
    data: Bytes,
) -> Result<String> {
    let extension = image_extension(filename).ok_or_else(|| {
        Error::BadRequest(format!(
            "Недопустимый формат файла. Разрешены: {}",
            ALLOWED_EXTENSIONS.join(", ")
        ))
    })?;

    let dir = format!("{}/{}", media_dir, subdir);
    tokio::fs::create_dir_all(&dir).await?;

    let relative = format!("{}/{}.{}", subdir, uuid::Uuid::new_v4(), extension);
    tokio::fs::write(format!("{}/{}", media_dir, relative), data).await?;
    Ok(relative)
}
