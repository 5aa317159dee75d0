#![no_main]

use std::sync::Arc;

use dleq::{Curve, CurveParams, NistP256, Point};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let curves: [Arc<dyn Curve>; 2] = [Arc::new(NistP256::new()), Arc::new(CurveParams::secp256k1())];
    for curve in curves {
        if let Ok(point) = Point::unmarshal(curve, data) {
            if point.is_on_curve() {
                assert_eq!(point.marshal(), data);
            }
        }
    }
});
