#![no_main]

use dleq::EncodedProof;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(encoded) = serde_json::from_slice::<EncodedProof>(data) {
        let _ = encoded.verify();
    }
});
