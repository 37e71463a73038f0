//! Meal photo endpoints
//!
//! Uploads go through the multipart path of the gateway: no JSON content
//! type, and any rejection surfaces as a plain "Upload failed".

use crate::client::NutritionClient;
use crate::endpoints::common::{flag, MessageResponse};
use crate::error::ApiResult;
use crate::path::ApiPath;
use crate::upload::UploadFile;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

const BASE: &str = "/api/images";
const UPLOAD_PATH: &str = "/api/images/upload";

/// Images API interface
#[derive(Debug, Clone)]
pub struct ImagesApi {
    client: NutritionClient,
    user_id: i64,
}

impl ImagesApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        let user_id = client.user_id();
        Self { client, user_id }
    }

    /// Scope requests to another user
    #[must_use]
    pub fn for_user(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Upload one photo
    ///
    /// POST /api/images/upload (multipart: `image`, `user_id`, `description`)
    pub async fn upload(
        &self,
        file: UploadFile,
        description: Option<&str>,
    ) -> ApiResult<UploadResponse> {
        let form = upload_form("image", vec![file], self.user_id, description)?;
        self.client.upload(UPLOAD_PATH, form).await
    }

    /// Upload several photos of the same meal as one group. The first file
    /// becomes the group's primary image.
    ///
    /// POST /api/images/upload (multipart: `images`..., `user_id`, `description`)
    pub async fn upload_multiple(
        &self,
        files: Vec<UploadFile>,
        description: Option<&str>,
    ) -> ApiResult<UploadResponse> {
        let form = upload_form("images", files, self.user_id, description)?;
        self.client.upload(UPLOAD_PATH, form).await
    }

    /// Primary images of the user with their groups, newest first
    ///
    /// GET /api/images?user_id=<u>
    pub async fn list(&self) -> ApiResult<Vec<ImageGroup>> {
        let path = ApiPath::new(BASE).query("user_id", self.user_id).build();
        self.client.get(&path).await
    }

    /// Delete an image; deleting a primary image removes its whole group
    ///
    /// DELETE /api/images/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<MessageResponse> {
        self.client.delete(&item_path(id)).await
    }

    /// Flag an image as already analyzed
    ///
    /// PUT /api/images/<id>/analyzed
    pub async fn mark_analyzed(&self, id: i64) -> ApiResult<SavedImage> {
        let path = ApiPath::new(BASE).segment(id).segment("analyzed").build();
        self.client.put(&path, &serde_json::json!({})).await
    }

    /// Direct URL of the image file, for display
    #[must_use]
    pub fn image_url(&self, id: i64) -> String {
        self.client.url_for(&item_path(id))
    }
}

fn item_path(id: i64) -> String {
    ApiPath::new(BASE).segment(id).build()
}

/// Build the multipart body: file parts under `field`, then `user_id` and
/// `description` (empty when not given)
fn upload_form(
    field: &'static str,
    files: Vec<UploadFile>,
    user_id: i64,
    description: Option<&str>,
) -> ApiResult<Form> {
    let mut form = Form::new();
    for file in files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)?;
        form = form.part(field, part);
    }

    Ok(form
        .text("user_id", user_id.to_string())
        .text("description", description.unwrap_or_default().to_string()))
}

/// A stored photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedImage {
    pub id: i64,
    pub user_id: Option<i64>,
    pub image_path: String,
    pub description: Option<String>,
    pub image_group_id: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_primary: bool,
    #[serde(default, deserialize_with = "flag")]
    pub analyzed: bool,
    pub created_at: Option<String>,
}

/// A primary image and the other photos uploaded with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGroup {
    #[serde(flatten)]
    pub primary: SavedImage,
    #[serde(default)]
    pub group_images: Vec<SavedImage>,
    #[serde(default)]
    pub image_count: usize,
}

/// Result of an upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub primary_image: SavedImage,
    pub group_id: String,
    pub total_images: usize,
    #[serde(default)]
    pub all_images: Vec<SavedImage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_image_url() {
        let client = NutritionClient::with_config(
            ClientConfig::default().with_base_url("https://legend.example.com"),
        )
        .unwrap();
        assert_eq!(
            client.images().image_url(31),
            "https://legend.example.com/api/images/31"
        );
    }

    #[test]
    fn test_upload_form_builds() {
        let files = vec![
            UploadFile::from_bytes("a.jpg", vec![1, 2]),
            UploadFile::from_bytes("b.jpg", vec![3]),
        ];
        assert!(upload_form("images", files, 1, None).is_ok());
    }

    #[test]
    fn test_upload_form_rejects_bad_mime() {
        let file = UploadFile::from_bytes("a.jpg", vec![1]).with_mime("not a mime");
        assert!(upload_form("image", vec![file], 1, None).is_err());
    }

    #[test]
    fn test_image_group_deserialize() {
        let json = r#"{
            "id": 5,
            "user_id": 1,
            "image_path": "abc.jpg",
            "description": "dinner",
            "image_group_id": "g-1",
            "is_primary": 1,
            "analyzed": 0,
            "created_at": "2024-03-09 19:00:00",
            "group_images": [
                {"id": 5, "image_path": "abc.jpg", "is_primary": 1},
                {"id": 6, "image_path": "def.jpg", "is_primary": 0}
            ],
            "image_count": 2
        }"#;

        let group: ImageGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.primary.id, 5);
        assert!(group.primary.is_primary);
        assert!(!group.primary.analyzed);
        assert_eq!(group.image_count, 2);
        assert!(!group.group_images[1].is_primary);
    }
}
