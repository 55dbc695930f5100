use xxhash_rust::xxh3::Xxh3;

const MARKUP_SEED: u64 = 0x3c6e_f372_fe94_f82b;

/// 128-bit digest of rendered markup, used to skip redundant container writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct MarkupFingerprint(u128);

/// Hashes the byte length, then the bytes.
pub(crate) fn fingerprint_markup(markup: &str) -> MarkupFingerprint {
    let mut h = Xxh3::with_seed(MARKUP_SEED);
    h.update(&(markup.len() as u64).to_le_bytes());
    h.update(markup.as_bytes());
    MarkupFingerprint(h.digest128())
}
