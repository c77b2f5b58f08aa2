//! Synonym dictionary for keyword expansion

use std::collections::HashMap;

/// Synonym groups - words in the same group are interchangeable for matching
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    // Listings
    &["produk", "barang", "item", "product"],
    &["jual", "menjual", "sell", "selling"],
    &["beli", "membeli", "buy", "buying"],
    &["harga", "biaya", "price", "cost"],
    &["bayar", "pembayaran", "payment", "pay"],
    &["kirim", "pengiriman", "shipping", "delivery"],
    &["penjual", "pedagang", "seller", "vendor"],
    &["pembeli", "konsumen", "buyer", "customer"],
    // Account
    &["akun", "account", "profil", "profile"],
    &["daftar", "mendaftar", "register", "signup"],
    &["masuk", "login", "signin"],
    &["sandi", "password", "passcode"],
    // Communication
    &["chat", "pesan", "message", "obrolan"],
    // Listing details
    &["lokasi", "alamat", "location", "address"],
    &["foto", "gambar", "photo", "image"],
    &["hapus", "menghapus", "delete", "remove"],
];

/// Word → other words of its synonym group
///
/// Built once and never mutated. A word outside every group has no entry.
#[derive(Debug, Clone)]
pub struct SynonymMap {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymMap {
    /// Build from the built-in marketplace groups
    pub fn marketplace() -> Self {
        Self::from_groups(SYNONYM_GROUPS)
    }

    /// Build from arbitrary groups
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();

        for group in groups {
            for &word in *group {
                let others = entries.entry(word.to_string()).or_default();
                for &other in *group {
                    if other != word && !others.iter().any(|o| o == other) {
                        others.push(other.to_string());
                    }
                }
            }
        }

        Self { entries }
    }

    /// Synonyms of `word`, excluding the word itself; empty when unknown
    pub fn synonyms_of(&self, word: &str) -> &[String] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_synonyms(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of words with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SynonymMap {
    fn default() -> Self {
        Self::marketplace()
    }
}
