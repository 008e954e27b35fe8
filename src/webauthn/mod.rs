//! Passkey (WebAuthn) handshake marshalling.
//!
//! The API speaks base64url-encoded JSON; a credential authenticator speaks
//! binary. This module converts between the two and applies the field
//! rewrites the handshake needs in practice:
//!
//! ### Flow Overview
//! 1. **Preparation**: unwrap the server's `publicKey` options, drop the
//!    fields that break real authenticators (`authenticatorAttachment`
//!    during registration, `userVerification` during authentication), and
//!    decode the base64url challenge/user/credential-id fields into bytes.
//! 2. **Interaction**: hand the prepared options to a
//!    [`CredentialAuthenticator`], the seam in front of the platform
//!    credential API that shows the passkey dialog.
//! 3. **Finalization**: encode the authenticator's binary response back to
//!    unpadded base64url and build the JSON body for the finish endpoint.
//!
//! Marshalling works field-by-field on `serde_json::Value`, so options the
//! server adds in later revisions pass through untouched.

pub mod authentication;
pub mod encoding;
pub mod registration;

pub use authentication::{AssertionCredential, AssertionOptions};
pub use registration::{CreatedCredential, CreationOptions};

use crate::error::Result;

/// A platform credential authenticator.
///
/// Implementations wrap whatever shows the passkey prompt on the current
/// platform; tests use a scripted stand-in. Both calls block until the user
/// completes or cancels the dialog.
pub trait CredentialAuthenticator {
    /// Create a new credential for the prepared registration options.
    ///
    /// # Errors
    /// Returns an error if the user cancels or the authenticator fails.
    fn create(&mut self, options: &CreationOptions) -> Result<CreatedCredential>;

    /// Produce an assertion for the prepared authentication options.
    ///
    /// # Errors
    /// Returns an error if the user cancels or the authenticator fails.
    fn get(&mut self, options: &AssertionOptions) -> Result<AssertionCredential>;
}
