//! Permission decisions for incoming callers.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::domain::entities::Caller;

type HmacSha256 = Hmac<Sha256>;

/// Maps request credentials to a [`Caller`].
///
/// The admin token is never kept in plain form. At construction a random
/// per-process key is drawn and only the HMAC-SHA256 of the token under that
/// key is stored; presented tokens are checked with a constant-time MAC
/// comparison.
pub struct AccessPolicy {
    public_create: bool,
    key: [u8; 32],
    admin_token_mac: Option<Vec<u8>>,
}

impl AccessPolicy {
    /// Creates a policy.
    ///
    /// # Arguments
    ///
    /// - `public_create` - when true, every caller may create links
    /// - `admin_token` - bearer token granting admin rights; `None` or an empty
    ///   string disables admin access entirely
    ///
    /// # Errors
    ///
    /// Returns an error if the system random number generator fails.
    pub fn new(public_create: bool, admin_token: Option<&str>) -> Result<Self, getrandom::Error> {
        let mut key = [0u8; 32];
        getrandom::fill(&mut key)?;

        let admin_token_mac = admin_token
            .filter(|t| !t.is_empty())
            .map(|t| mac(&key, t).finalize().into_bytes().to_vec());

        Ok(Self {
            public_create,
            key,
            admin_token_mac,
        })
    }

    /// Decides what the caller behind `identity` may do.
    pub fn authorize(&self, identity: impl Into<String>, bearer_token: Option<&str>) -> Caller {
        let is_admin = bearer_token.is_some_and(|token| self.is_admin_token(token));
        let identity = identity.into();

        debug!(identity = %identity, is_admin, "Caller authorized");

        Caller {
            identity,
            can_create: self.public_create || is_admin,
            is_admin,
        }
    }

    fn is_admin_token(&self, token: &str) -> bool {
        let Some(expected) = &self.admin_token_mac else {
            return false;
        };

        mac(&self.key, token).verify_slice(expected).is_ok()
    }
}

fn mac(key: &[u8], token: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    mac
}
