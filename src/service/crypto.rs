use sha3::{Digest, Sha3_256};
use uuid::Uuid;

pub fn get_sha3_256_hash(data: &str) -> String {
   let mut hasher = Sha3_256::default();
   hasher.update(data);
   format!("{:X}", hasher.finalize())
}

pub fn new_organizer_token() -> String {
   Uuid::new_v4().to_string()
}

pub fn verify_token(candidate: &str, stored_hash: &str) -> bool {
   get_sha3_256_hash(candidate) == stored_hash
}
