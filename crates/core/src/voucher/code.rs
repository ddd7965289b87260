//! Voucher code normalisation.
//!
//! Codes are typed by hand from a scratch card, so spaces and dashes are
//! ignored and letters are uppercased before checking the format.

use std::fmt;

use crate::error::{EngineError, EngineResult};

/// Minimum number of characters in a voucher code.
pub const MIN_CODE_LEN: usize = 10;

/// Maximum number of characters in a voucher code.
pub const MAX_CODE_LEN: usize = 32;

/// Characters left visible when a code is displayed.
const VISIBLE_SUFFIX: usize = 4;

/// A normalised prepaid voucher code.
///
/// `Display` and `Debug` mask everything except the last four characters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VoucherCode(String);

impl VoucherCode {
    /// Normalises and checks a voucher code as typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the code contains anything other
    /// than ASCII letters and digits (after dropping spaces and dashes) or its
    /// length is outside `MIN_CODE_LEN..=MAX_CODE_LEN`.
    pub fn parse(raw: &str) -> EngineResult<Self> {
        let code: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(EngineError::invalid(
                "voucher code may only contain letters and digits",
            ));
        }
        if code.len() < MIN_CODE_LEN || code.len() > MAX_CODE_LEN {
            return Err(EngineError::invalid(format!(
                "voucher code must be {MIN_CODE_LEN} to {MAX_CODE_LEN} characters"
            )));
        }

        Ok(Self(code))
    }

    /// The normalised code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code with all but the last four characters replaced by `*`.
    #[must_use]
    pub fn masked(&self) -> String {
        let hidden = self.0.len() - VISIBLE_SUFFIX;
        format!("{}{}", "*".repeat(hidden), &self.0[hidden..])
    }
}

impl fmt::Display for VoucherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for VoucherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VoucherCode").field(&self.masked()).finish()
    }
}
