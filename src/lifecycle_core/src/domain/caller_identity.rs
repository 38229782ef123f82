use super::{email::Email, user_id::UserId};

/// Who is calling, as resolved by the identity verifier for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerIdentity {
    user_id: UserId,
    email: Option<Email>,
}

impl CallerIdentity {
    pub fn new(user_id: UserId, email: Option<Email>) -> Self {
        Self { user_id, email }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }
}
