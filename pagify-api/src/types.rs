use serde::{Deserialize, Serialize};

// ============ Portals & Auth ============

/// Login portal.
///
/// Buyers and admins share the `/auth/login` endpoint; sellers have their own
/// portal at `/sellers/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    /// Buyer / admin portal.
    #[default]
    Buyer,
    /// Seller portal.
    Seller,
}

impl Portal {
    /// Every portal, in display order.
    #[must_use]
    pub fn all() -> &'static [Portal] {
        &[Portal::Buyer, Portal::Seller]
    }

    /// Path (below the versioned API prefix) of the credential exchange endpoint.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Buyer => "/auth/login",
            Self::Seller => "/sellers/login",
        }
    }

    /// Human readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Buyer => "Buyer / Admin",
            Self::Seller => "Seller",
        }
    }
}

/// Credentials exchanged for a bearer token.
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plain password (sent once, never stored).
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Bearer token returned by a successful login.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    /// Opaque token string.
    pub token: String,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &crate::utils::log_sanitizer::mask_token(&self.token))
            .finish()
    }
}

// ============ Users ============

/// Role of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Book seller.
    Seller,
    /// Regular customer.
    #[default]
    #[serde(alias = "user", alias = "customer")]
    Buyer,
}

impl Role {
    /// Human readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Seller => "Seller",
            Self::Buyer => "Buyer",
        }
    }
}

/// Profile of the currently authenticated user (`GET /users/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    #[serde(default)]
    pub role: Role,
    /// Phone number, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// URL of the uploaded profile picture, if any.
    #[serde(
        default,
        alias = "profilePicture",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

/// Partial profile update (`PATCH /users/me`). Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// Whether the update carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// Image file to upload as profile picture.
#[derive(Clone)]
pub struct ProfilePicture {
    /// Original file name.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ProfilePicture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilePicture")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Result of a profile picture upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedPicture {
    /// Public URL of the stored picture, when the backend returns one.
    pub url: Option<String>,
}

// ============ Products ============

/// Lifecycle status of a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    /// Listed and purchasable.
    #[default]
    Active,
    /// Not yet published.
    Draft,
    /// Withdrawn by the seller.
    Archived,
    /// Listed but no stock left.
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    /// Blocked by an administrator.
    Blocked,
}

impl ProductStatus {
    /// Every status, in display order.
    #[must_use]
    pub fn all() -> &'static [ProductStatus] {
        &[
            ProductStatus::Active,
            ProductStatus::Draft,
            ProductStatus::Archived,
            ProductStatus::OutOfStock,
            ProductStatus::Blocked,
        ]
    }

    /// Label as used by the backend.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
            Self::OutOfStock => "Out of Stock",
            Self::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A book listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    #[serde(alias = "_id")]
    pub id: String,
    /// Book title.
    #[serde(alias = "name")]
    pub title: String,
    /// Book author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Listing status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Seller display name.
    #[serde(default, alias = "sellerName", skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    /// Category / genre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Which product collection to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductScope {
    /// Every product (admin / seller dashboards).
    #[default]
    All,
    /// Only publicly visible products (buyer catalog).
    Public,
}

impl ProductScope {
    /// Endpoint path below the versioned API prefix.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::All => "/products/all",
            Self::Public => "/products/public",
        }
    }
}

// ============ Response envelopes ============

/// The backend returns payloads either bare or wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Data { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Data { data } | Self::Bare(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_status_uses_backend_labels() {
        let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");

        let parsed: ProductStatus = serde_json::from_str("\"Blocked\"").unwrap();
        assert_eq!(parsed, ProductStatus::Blocked);
    }

    #[test]
    fn product_accepts_mongo_style_fields() {
        let json = r#"{
            "_id": "PRD-001",
            "name": "The Rust Programming Language",
            "price": 39.99,
            "sellerName": "No Starch"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "PRD-001");
        assert_eq!(product.title, "The Rust Programming Language");
        assert_eq!(product.seller.as_deref(), Some("No Starch"));
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn envelope_unwraps_data_and_bare() {
        let wrapped: Envelope<UserProfile> = serde_json::from_str(
            r#"{"data": {"id": "u1", "name": "Ann", "email": "ann@pagify.io", "role": "seller"}}"#,
        )
        .unwrap();
        let profile = wrapped.into_inner();
        assert_eq!(profile.role, Role::Seller);

        let bare: Envelope<UserProfile> =
            serde_json::from_str(r#"{"id": "u2", "email": "bob@pagify.io"}"#).unwrap();
        let profile = bare.into_inner();
        assert_eq!(profile.id, "u2");
        assert_eq!(profile.role, Role::Buyer);
    }

    #[test]
    fn role_accepts_legacy_user_alias() {
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::Buyer);
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            name: Some("Ann".into()),
            phone: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ann"}));
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            email: "ann@pagify.io".into(),
            password: "hunter22".into(),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn portal_login_paths() {
        assert_eq!(Portal::Buyer.login_path(), "/auth/login");
        assert_eq!(Portal::Seller.login_path(), "/sellers/login");
    }
}
