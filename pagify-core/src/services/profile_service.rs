//! 个人资料服务：资料编辑、头像上传

use std::path::Path;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::form::{FieldError, FormState, ValidationErrors, profile_form};
use crate::services::ServiceContext;
use crate::types::{ProfilePicture, ProfileUpdate, UploadedPicture, UserProfile};

/// 头像文件大小上限
pub const MAX_PICTURE_BYTES: usize = 5 * 1024 * 1024;

/// 个人资料服务
pub struct ProfileService {
    ctx: Arc<ServiceContext>,
}

impl ProfileService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 用当前资料预填编辑表单
    pub fn fill_form(profile: &UserProfile) -> FormState {
        let mut form = FormState::new();
        form.set("name", profile.name.clone());
        form.set("phone", profile.phone.clone().unwrap_or_default());
        form
    }

    /// 校验资料表单并生成更新请求（不发请求）
    pub fn prepare_update(form: &mut FormState) -> CoreResult<ProfileUpdate> {
        form.validate(&profile_form())
            .map_err(CoreError::Validation)?;
        Ok(ProfileUpdate {
            name: form.non_blank("name"),
            phone: form.non_blank("phone"),
        })
    }

    /// 提交资料更新（`PATCH /users/me`），成功后刷新会话中的资料快照
    ///
    /// 不含任何字段的更新不发请求。
    pub async fn update_profile(&self, update: &ProfileUpdate) -> CoreResult<UserProfile> {
        if update.is_empty() {
            return Err(CoreError::InvalidAction("Nothing to update".to_string()));
        }
        let token = self.ctx.require_token().await?;
        let profile = self.ctx.api.update_current_user(&token, update).await?;
        self.ctx.session.update_profile(profile.clone()).await;
        log::info!("Profile updated for {}", profile.email);
        Ok(profile)
    }

    /// 读取本地图片并上传为头像
    pub async fn upload_picture(&self, path: &Path) -> CoreResult<UploadedPicture> {
        let picture = load_picture(path).await?;
        let token = self.ctx.require_token().await?;
        let uploaded = self.ctx.api.upload_profile_picture(&token, picture).await?;

        if let Some(url) = &uploaded.url
            && let Some(mut session) = self.ctx.session.current().await
        {
            session.profile.avatar_url = Some(url.clone());
            self.ctx.session.update_profile(session.profile).await;
        }
        Ok(uploaded)
    }
}

fn file_error(message: &str) -> CoreError {
    CoreError::Validation(ValidationErrors::new(vec![FieldError::new("file", message)]))
}

/// 按扩展名推断图片 MIME 类型
fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

async fn load_picture(path: &Path) -> CoreResult<ProfilePicture> {
    let content_type = content_type_for(path)
        .ok_or_else(|| file_error("Please choose a PNG, JPEG, GIF or WebP image"))?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        log::warn!("Failed to read {}: {e}", path.display());
        file_error("Could not read the selected file")
    })?;
    if bytes.is_empty() {
        return Err(file_error("The selected file is empty"));
    }
    if bytes.len() > MAX_PICTURE_BYTES {
        return Err(file_error("Image must be smaller than 5 MB"));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("avatar")
        .to_string();

    Ok(ProfilePicture {
        file_name,
        content_type: content_type.to_string(),
        bytes,
    })
}
