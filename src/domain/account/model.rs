//! Account aggregate
//!
//! The account is the sole root entity of the service. Wire documents keep
//! the legacy key names (`_id`, `_schema_version_`, `2fa_authentication`);
//! the structs here are the typed face of those documents.
//!
//! Construction happens in exactly two ways: [`Account::signup`] for brand
//! new accounts, and [`Account::from_document`] to re-type a stored or
//! merged document, regenerating derived defaults for anything absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::verification::VerificationCode;

/// Version stamp written into every document.
pub const SCHEMA_VERSION: f64 = 2022.01;

/// Fields removed by the full sanitization pass (public profile view).
const FULL_SANITIZE_STRIPS: [&str; 10] = [
    "password",
    "verification_codes",
    "notifications",
    "preferences",
    "payment_tokens",
    "transactions",
    "previous_usernames",
    "recent_searches",
    "interests",
    "eggs_archived",
];

/// Fields removed by the soft sanitization pass (owner-facing view).
const SOFT_SANITIZE_STRIPS: [&str; 3] = ["password", "verification_codes", "payment_tokens"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "2fa_authentication", default)]
    pub two_factor_authentication: bool,
    #[serde(default = "default_true")]
    pub is_expire_login: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            two_factor_authentication: false,
            is_expire_login: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub identifier: String,
    pub display_name: String,
    pub email_address: String,
    pub username: String,
    /// bcrypt digest, never plaintext.
    pub password: String,
    pub profile_image: String,

    // Funding collections, untouched by the auth core.
    pub eggs: Vec<Value>,
    pub eggs_funded: Vec<Value>,
    pub eggs_archived: Vec<Value>,
    pub eggs_bookmarked: Vec<Value>,

    // Biography.
    pub home_city: String,
    pub nationality: String,
    pub gender: i64,
    pub age: i64,
    pub occupation: String,
    pub interests: Vec<String>,
    pub external_links: Vec<Value>,

    // Profile activity.
    pub comments: Vec<Value>,
    pub recent_searches: Vec<Value>,
    pub followers: Vec<Value>,
    pub follows: Vec<Value>,
    pub previous_usernames: Vec<String>,

    // Sensitive collections stripped by sanitization.
    pub payment_tokens: Vec<Value>,
    pub transactions: Vec<Value>,
    pub verification_codes: Vec<VerificationCode>,
    pub notifications: Vec<Value>,
    pub preferences: Preferences,

    #[serde(rename = "_schema_version_")]
    pub schema_version: f64,
}

/// Loosely-typed account document: every field optional, unknown keys
/// ignored. This is the shape stored documents and merge results pass
/// through before [`Account::from_document`] re-types them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountDocument {
    #[serde(rename = "_id")]
    pub identifier: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub profile_image: Option<String>,
    pub eggs: Option<Vec<Value>>,
    pub eggs_funded: Option<Vec<Value>>,
    pub eggs_archived: Option<Vec<Value>>,
    pub eggs_bookmarked: Option<Vec<Value>>,
    pub home_city: Option<String>,
    pub nationality: Option<String>,
    pub gender: Option<i64>,
    pub age: Option<i64>,
    pub occupation: Option<String>,
    pub interests: Option<Vec<String>>,
    pub external_links: Option<Vec<Value>>,
    pub comments: Option<Vec<Value>>,
    pub recent_searches: Option<Vec<Value>>,
    pub followers: Option<Vec<Value>>,
    pub follows: Option<Vec<Value>>,
    pub previous_usernames: Option<Vec<String>>,
    pub payment_tokens: Option<Vec<Value>>,
    pub transactions: Option<Vec<Value>>,
    pub verification_codes: Option<Vec<VerificationCode>>,
    pub notifications: Option<Vec<Value>>,
    pub preferences: Option<Preferences>,
    #[serde(rename = "_schema_version_")]
    pub schema_version: Option<f64>,
}

/// Username is the email local part, fixed at signup.
pub fn derive_username(email_address: &str) -> String {
    email_address
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn default_avatar_url(username: &str) -> String {
    format!("https://avatars.dicebear.com/api/pixel-art-neutral/{username}.svg")
}

impl Account {
    /// Build a brand new account. The caller supplies an already-hashed
    /// password; everything else is derived or defaulted.
    pub fn signup(display_name: &str, email_address: &str, password_digest: &str) -> Self {
        let username = derive_username(email_address);
        Self {
            identifier: Uuid::new_v4().to_string(),
            display_name: display_name.to_string(),
            email_address: email_address.to_string(),
            password: password_digest.to_string(),
            profile_image: default_avatar_url(&username),
            eggs: Vec::new(),
            eggs_funded: Vec::new(),
            eggs_archived: Vec::new(),
            eggs_bookmarked: Vec::new(),
            home_city: String::new(),
            nationality: String::new(),
            gender: 0,
            age: 0,
            occupation: String::new(),
            interests: vec!["inspiring".to_string()],
            external_links: Vec::new(),
            comments: Vec::new(),
            recent_searches: Vec::new(),
            followers: Vec::new(),
            follows: Vec::new(),
            previous_usernames: vec![username.clone()],
            payment_tokens: Vec::new(),
            transactions: Vec::new(),
            verification_codes: Vec::new(),
            notifications: Vec::new(),
            preferences: Preferences::default(),
            schema_version: SCHEMA_VERSION,
            username,
        }
    }

    /// Pure defaulting pass: fill every absent field of `document` the same
    /// way [`Account::signup`] would have.
    pub fn from_document(document: AccountDocument) -> Self {
        let email_address = document.email_address.unwrap_or_default();
        let username = document
            .username
            .unwrap_or_else(|| derive_username(&email_address));
        Self {
            identifier: document
                .identifier
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            display_name: document.display_name.unwrap_or_default(),
            password: document.password.unwrap_or_default(),
            profile_image: document
                .profile_image
                .unwrap_or_else(|| default_avatar_url(&username)),
            eggs: document.eggs.unwrap_or_default(),
            eggs_funded: document.eggs_funded.unwrap_or_default(),
            eggs_archived: document.eggs_archived.unwrap_or_default(),
            eggs_bookmarked: document.eggs_bookmarked.unwrap_or_default(),
            home_city: document.home_city.unwrap_or_default(),
            nationality: document.nationality.unwrap_or_default(),
            gender: document.gender.unwrap_or_default(),
            age: document.age.unwrap_or_default(),
            occupation: document.occupation.unwrap_or_default(),
            interests: document
                .interests
                .unwrap_or_else(|| vec!["inspiring".to_string()]),
            external_links: document.external_links.unwrap_or_default(),
            comments: document.comments.unwrap_or_default(),
            recent_searches: document.recent_searches.unwrap_or_default(),
            followers: document.followers.unwrap_or_default(),
            follows: document.follows.unwrap_or_default(),
            previous_usernames: document
                .previous_usernames
                .unwrap_or_else(|| vec![username.clone()]),
            payment_tokens: document.payment_tokens.unwrap_or_default(),
            transactions: document.transactions.unwrap_or_default(),
            verification_codes: document.verification_codes.unwrap_or_default(),
            notifications: document.notifications.unwrap_or_default(),
            preferences: document.preferences.unwrap_or_default(),
            schema_version: document.schema_version.unwrap_or(SCHEMA_VERSION),
            email_address,
            username,
        }
    }

    /// The account as a wire document with the legacy key names.
    pub fn to_document(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Public profile view: strips credentials and every owner-private
    /// collection.
    pub fn sanitize(&self) -> Value {
        self.project_without(&FULL_SANITIZE_STRIPS)
    }

    /// Owner-facing view: strips only credentials and payment material.
    pub fn sanitize_soft(&self) -> Value {
        self.project_without(&SOFT_SANITIZE_STRIPS)
    }

    fn project_without(&self, strip: &[&str]) -> Value {
        let mut document = self.to_document();
        for field in strip {
            document.remove(*field);
        }
        Value::Object(document)
    }

    /// Check a submitted second-factor code against the most recent
    /// challenge. Only the latest code counts, and it must still be inside
    /// its validity window at `now`.
    pub fn confirm_verification_code(
        &self,
        candidate: &str,
        now: chrono::DateTime<chrono::Utc>,
    ) -> bool {
        self.verification_codes
            .last()
            .map_or(false, |code| code.matches(candidate) && !code.is_expired(now))
    }
}
