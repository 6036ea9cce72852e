//! Check-in token generation.

use rand::RngCore;
use rand::rngs::OsRng;

/// Length of a generated token: 16 random bytes, hex encoded.
pub const TOKEN_LEN: usize = 32;

/// Generate an opaque check-in token: 128 bits from the OS random source,
/// lowercase hex. The `qr_token` UNIQUE constraint backs this up, but at
/// this size collisions are not a practical concern.
pub fn generate() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);

    let mut out = String::with_capacity(TOKEN_LEN);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
