use crate::keys::codec::normalize;
use crate::keys::structs::normalized_key::NormalizedKey;

impl NormalizedKey {
    pub fn new(key: &str) -> NormalizedKey {
        NormalizedKey {
            original: key.to_string(),
            normalized: normalize(key).into_owned(),
        }
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.normalized
    }
}
