//! Content digests for the Margin anchoring engine.
//!
//! A comment anchor stores a digest of the line it was attached to. The only
//! question the digest answers is "did this line change", so the default is a
//! cheap 32-bit rolling hash. A domain-separated BLAKE3 digest is available for
//! callers that want collisions to be practically impossible.
//!
//! Digests are self-describing: [`ContentHasher::matches`] recognises which
//! algorithm produced a stored digest, so anchors minted under either
//! algorithm remain comparable after the configured algorithm changes.

pub mod hasher;

pub use hasher::{ContentHasher, HashAlgorithm, HasherError};
