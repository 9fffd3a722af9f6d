//! ログインフォームの入力値
//!
//! 認証はしない。必須チェック（空欄不可）はブラウザの `required` 属性と同じ規則で、
//! 値はトリムもハッシュもせずそのまま呼び出し元へ渡す。

/// フォーム項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
}

impl LoginFields {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 最初の空欄項目（`required` 違反）
    pub fn missing_required(&self) -> Option<LoginField> {
        if self.username.is_empty() {
            Some(LoginField::Username)
        } else if self.password.is_empty() {
            Some(LoginField::Password)
        } else {
            None
        }
    }

    /// 必須項目が揃っていればコールバックを呼ぶ。呼んだ場合 `true`
    pub fn submit<F>(self, on_login: F) -> bool
    where
        F: FnOnce(String, String),
    {
        if self.missing_required().is_some() {
            return false;
        }
        on_login(self.username, self.password);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_passes_values_verbatim() {
        let mut received = None;
        let submitted = LoginFields::new("alice", "secret")
            .submit(|u, p| received = Some((u, p)));

        assert!(submitted);
        assert_eq!(received, Some(("alice".to_string(), "secret".to_string())));
    }

    #[test]
    fn test_submit_does_not_trim() {
        let mut received = None;
        LoginFields::new(" bob ", "  ").submit(|u, p| received = Some((u, p)));
        assert_eq!(received, Some((" bob ".to_string(), "  ".to_string())));
    }

    #[test]
    fn test_empty_password_blocks_submit() {
        let fields = LoginFields::new("alice", "");
        assert_eq!(fields.missing_required(), Some(LoginField::Password));

        let mut called = false;
        assert!(!fields.submit(|_, _| called = true));
        assert!(!called);
    }

    #[test]
    fn test_empty_username_reported_first() {
        let fields = LoginFields::default();
        assert_eq!(fields.missing_required(), Some(LoginField::Username));
    }
}
