//! Test suite for the AES core: FIPS-197 known-answer vectors, boundary
//! cases, and a deterministic randomized round-trip sweep.

mod test_aes_kat;
mod test_aes_roundtrip;
