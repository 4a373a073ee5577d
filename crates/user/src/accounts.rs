use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pantryplan_shared::document;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{hash_password, verify_password};

const KITCHEN_FILENAME: &str = "kitchen.json";
const USERS_DIR: &str = "users";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub password_hash: String,
}

/// Credentials and the logged in user. Kitchen state is never stored here;
/// each user has a separate kitchen document, see [`kitchen_path`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountsDocument {
    #[serde(default)]
    pub users: BTreeMap<String, Account>,
    #[serde(default)]
    pub current_user: Option<String>,
}

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(
        length(min = 1, max = 32, message = "Username must be 1 to 32 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: String,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Ok(());
    }

    Err(ValidationError::new("username")
        .with_message("Username may only contain letters, digits, '-' and '_'".into()))
}

/// Where a user's kitchen lives under `data_dir`. Without a user, the
/// shared kitchen is used.
pub fn kitchen_path(data_dir: &Path, username: Option<&str>) -> PathBuf {
    match username {
        Some(username) => data_dir.join(USERS_DIR).join(username).join(KITCHEN_FILENAME),
        None => data_dir.join(KITCHEN_FILENAME),
    }
}

/// User accounts backed by a JSON document.
pub struct AccountBook {
    path: PathBuf,
    document: AccountsDocument,
}

impl AccountBook {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = document::read_or_default(&path);

        Self { path, document }
    }

    pub fn document(&self) -> &AccountsDocument {
        &self.document
    }

    pub fn current_user(&self) -> Option<&str> {
        self.document.current_user.as_deref()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.document.users.keys().map(String::as_str)
    }

    pub fn register(&mut self, input: RegisterInput) -> pantryplan_shared::Result<()> {
        input.validate()?;

        if self.document.users.contains_key(&input.username) {
            pantryplan_shared::user!("Username already exists");
        }

        let password_hash = hash_password(&input.password)?;
        self.document
            .users
            .insert(input.username.to_owned(), Account { password_hash });

        tracing::info!(username = %input.username, "user registered");

        self.save()
    }

    pub fn login(&mut self, username: &str, password: &str) -> pantryplan_shared::Result<()> {
        let verified = self
            .document
            .users
            .get(username)
            .is_some_and(|account| verify_password(password, &account.password_hash));

        if !verified {
            tracing::info!(username, "login rejected");
            pantryplan_shared::user!("Invalid username or password");
        }

        self.document.current_user = Some(username.to_owned());

        tracing::info!(username, "user logged in");

        self.save()
    }

    /// Returns who was logged in, if anyone.
    pub fn logout(&mut self) -> pantryplan_shared::Result<Option<String>> {
        let Some(username) = self.document.current_user.take() else {
            return Ok(None);
        };

        tracing::info!(%username, "user logged out");

        self.save()?;

        Ok(Some(username))
    }

    fn save(&self) -> pantryplan_shared::Result<()> {
        document::write_atomic(&self.path, &self.document)
    }
}
