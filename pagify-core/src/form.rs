//! Form / validation controller
//!
//! A [`FormSchema`] declares the fields of a form and, per field, an ordered
//! list of [`Rule`]s. [`FormState`] holds the raw input and the error map of
//! the last validation; submission is only allowed while the error map is
//! empty.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// 邮箱格式：`x@y.z`，不含空白
static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// 电话号码：可选 `+` 前缀，数字 / 空格 / 连字符 / 括号，首尾为数字
static PHONE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,18}[0-9]$").ok());

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

// ============ Rules ============

/// A single presence / format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be blank.
    Required,
    /// Value must look like an email address.
    Email,
    /// At least `n` characters.
    MinLength(usize),
    /// At most `n` characters.
    MaxLength(usize),
    /// Value must look like a phone number.
    PhoneNumber,
}

impl Rule {
    /// 检查单个值，失败时返回错误文案
    ///
    /// 除 `Required` 外，空值一律视为通过（可选字段）。
    fn check(self, label: &str, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return (self == Self::Required).then(|| format!("{label} is required"));
        }

        let ok = match self {
            Self::Required => true,
            Self::Email => matches(&EMAIL_RE, trimmed),
            Self::MinLength(n) => value.chars().count() >= n,
            Self::MaxLength(n) => value.chars().count() <= n,
            Self::PhoneNumber => matches(&PHONE_RE, trimmed),
        };
        if ok {
            return None;
        }

        Some(match self {
            Self::Required => format!("{label} is required"),
            Self::Email => "Please enter a valid email address".to_string(),
            Self::MinLength(n) => format!("{label} must be at least {n} characters"),
            Self::MaxLength(n) => format!("{label} must be at most {n} characters"),
            Self::PhoneNumber => "Please enter a valid phone number".to_string(),
        })
    }
}

/// How validation failures are presented.
///
/// Both modes are in use (the buyer login shows inline messages, the seller
/// login raises notifications); the error map is filled the same way in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Message rendered next to its field.
    #[default]
    PerField,
    /// Every failure becomes a discrete notification.
    Notifications,
}

/// 字段定义
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Key in [`FormState`].
    pub name: &'static str,
    /// Human readable label, used in messages.
    pub label: &'static str,
    /// Rules, evaluated in order.
    pub rules: Vec<Rule>,
    /// Render masked (passwords).
    pub secret: bool,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            name,
            label,
            rules,
            secret: false,
        }
    }

    fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// 第一条失败规则的错误文案
    fn first_failure(&self, value: &str) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(self.label, value))
    }
}

/// 表单定义
#[derive(Debug, Clone)]
pub struct FormSchema {
    /// Fields in display order.
    pub fields: Vec<FieldSpec>,
    /// Presentation of failures.
    pub report_mode: ReportMode,
}

impl FormSchema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Buyer / admin login: email + password, inline messages.
pub fn login_form() -> FormSchema {
    FormSchema {
        fields: vec![
            FieldSpec::new("email", "Email", vec![Rule::Required, Rule::Email]),
            FieldSpec::new(
                "password",
                "Password",
                vec![Rule::Required, Rule::MinLength(6)],
            )
            .secret(),
        ],
        report_mode: ReportMode::PerField,
    }
}

/// Seller login: same rules, failures raised as notifications.
pub fn seller_login_form() -> FormSchema {
    FormSchema {
        report_mode: ReportMode::Notifications,
        ..login_form()
    }
}

/// Profile editing: name + optional phone.
pub fn profile_form() -> FormSchema {
    FormSchema {
        fields: vec![
            FieldSpec::new("name", "Name", vec![Rule::Required, Rule::MaxLength(80)]),
            FieldSpec::new("phone", "Phone", vec![Rule::PhoneNumber]),
        ],
        report_mode: ReportMode::PerField,
    }
}

// ============ Errors ============

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name.
    pub field: String,
    /// Message of the first failing rule.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every failed field of one validation, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wrap a list of field errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message of the first failed field.
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|e| e.message.as_str())
    }

    /// Message for one field.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// One notification per failure.
    pub fn notifications(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message.clone()).collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Validation failed: {joined}")
    }
}

// ============ State ============

/// Raw input and last validation result of one open form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字段值（同时清除该字段的旧错误）
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    /// Current value, empty when never set.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Trimmed value, `None` when blank.
    pub fn non_blank(&self, field: &str) -> Option<String> {
        let v = self.value(field).trim();
        (!v.is_empty()).then(|| v.to_string())
    }

    /// Inline error of a field from the last validation.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// 按 schema 校验所有字段
    ///
    /// 每个字段按声明顺序执行规则，第一条失败的规则决定该字段的错误。
    /// 错误表会被整体替换。
    pub fn validate(&mut self, schema: &FormSchema) -> Result<(), ValidationErrors> {
        let failures: Vec<FieldError> = schema
            .fields
            .iter()
            .filter_map(|spec| {
                spec.first_failure(self.value(spec.name))
                    .map(|msg| FieldError::new(spec.name, msg))
            })
            .collect();

        self.errors = failures
            .iter()
            .map(|e| (e.field.clone(), e.message.clone()))
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(failures))
        }
    }

    /// Submission is allowed only when no error is recorded.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reset values and errors (after a successful submit).
    pub fn clear(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> FormState {
        let mut form = FormState::new();
        form.set("email", email);
        form.set("password", password);
        form
    }

    #[test]
    fn valid_login_passes() {
        let mut form = login("ann@pagify.io", "secret1");
        assert!(form.validate(&login_form()).is_ok());
        assert!(form.can_submit());
    }

    #[test]
    fn invalid_email_reports_format_error() {
        let mut form = login("ann.pagify.io", "secret1");
        let errors = form.validate(&login_form()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.for_field("email"),
            Some("Please enter a valid email address")
        );
        assert!(!form.can_submit());
        assert_eq!(form.error("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut form = login("", "");
        let errors = form.validate(&login_form()).unwrap_err();
        assert_eq!(errors.for_field("email"), Some("Email is required"));
        assert_eq!(errors.for_field("password"), Some("Password is required"));
    }

    #[test]
    fn short_password_rejected() {
        let mut form = login("ann@pagify.io", "12345");
        let errors = form.validate(&login_form()).unwrap_err();
        assert_eq!(
            errors.first_message(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = login("bad", "secret1");
        assert!(form.validate(&login_form()).is_err());
        form.set("email", "ann@pagify.io");
        assert!(form.error("email").is_none());
        assert!(form.can_submit());
    }

    #[test]
    fn seller_form_uses_notifications() {
        let schema = seller_login_form();
        assert_eq!(schema.report_mode, ReportMode::Notifications);

        let mut form = login("", "abc");
        let errors = form.validate(&schema).unwrap_err();
        assert_eq!(
            errors.notifications(),
            vec![
                "Email is required".to_string(),
                "Password must be at least 6 characters".to_string()
            ]
        );
    }

    #[test]
    fn optional_phone_may_be_blank() {
        let mut form = FormState::new();
        form.set("name", "Ann");
        assert!(form.validate(&profile_form()).is_ok());

        form.set("phone", "call me");
        let errors = form.validate(&profile_form()).unwrap_err();
        assert_eq!(
            errors.for_field("phone"),
            Some("Please enter a valid phone number")
        );

        form.set("phone", "+1 (555) 123-4567");
        assert!(form.validate(&profile_form()).is_ok());
    }

    #[test]
    fn max_length_rule() {
        assert!(Rule::MaxLength(3).check("Code", "abcd").is_some());
        assert!(Rule::MaxLength(3).check("Code", "abc").is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = login("bad", "");
        let _ = form.validate(&login_form());
        form.clear();
        assert_eq!(form.value("email"), "");
        assert!(form.can_submit());
    }
}
