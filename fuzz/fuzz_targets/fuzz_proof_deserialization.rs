#![no_main]

use std::sync::Arc;

use dleq::{Curve, NistP256, Proof};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let curve: Arc<dyn Curve> = Arc::new(NistP256::new());
    if let Ok(proof) = Proof::from_bytes(curve, data) {
        let _ = proof.verify();
    }
});
