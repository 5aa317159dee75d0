//! Wire formats for proofs.
//!
//! Two representations are provided:
//! - a compact binary format ([`Proof::to_bytes`], [`Proof::from_bytes`])
//! - a serde-friendly record of hex strings ([`EncodedProof`]) for JSON and
//!   similar text transports
//!
//! Both carry untrusted data: decoding validates encodings but not curve
//! membership, which is left to [`Proof::verify`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Proof;
use crate::primitives::curves;
use crate::primitives::scalar::{decode_scalar, encode_scalar, scalar_len};
use crate::primitives::{Curve, HashAlgorithm, Point};
use crate::{Error, Result};

/// Protocol version for serialization compatibility.
const PROOF_VERSION: u8 = 1;

impl Proof {
    /// Returns the size of a binary proof over `curve`.
    pub fn encoded_len(curve: &dyn Curve) -> usize {
        let point_len = 1 + 2 * curve.coordinate_len();
        2 + 4 * point_len + 2 * scalar_len(curve.order())
    }

    /// Serializes the proof to bytes.
    ///
    /// Format: `[version (1 byte)][hash id (1 byte)][G][H][M][Z][R][C]`, with
    /// points in [`Point::marshal`] form and scalars fixed-width big-endian.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let order = self.g.curve().order();
        let mut result = Vec::with_capacity(Self::encoded_len(&**self.g.curve()));
        result.push(PROOF_VERSION);
        result.push(self.hash.id());
        for point in [&self.g, &self.h, &self.m, &self.z] {
            result.extend_from_slice(&point.marshal());
        }
        result.extend_from_slice(&encode_scalar(&self.r, order)?);
        result.extend_from_slice(&encode_scalar(&self.c, order)?);
        Ok(result)
    }

    /// Deserializes a proof over `curve` from bytes.
    pub fn from_bytes(curve: Arc<dyn Curve>, bytes: &[u8]) -> Result<Self> {
        let expected = Self::encoded_len(&*curve);
        if bytes.len() != expected {
            return Err(Error::MalformedProof(format!(
                "expected {} bytes, got {}",
                expected,
                bytes.len()
            )));
        }

        let version = bytes[0];
        if version != PROOF_VERSION {
            return Err(Error::MalformedProof(format!(
                "unsupported proof version: {version}"
            )));
        }
        let hash = HashAlgorithm::from_id(bytes[1])?;

        let point_len = 1 + 2 * curve.coordinate_len();
        let point_at = |i: usize| {
            let start = 2 + i * point_len;
            Point::unmarshal(Arc::clone(&curve), &bytes[start..start + point_len])
        };
        let g = point_at(0)?;
        let h = point_at(1)?;
        let m = point_at(2)?;
        let z = point_at(3)?;

        let order = curve.order();
        let scalars = &bytes[2 + 4 * point_len..];
        let (r_bytes, c_bytes) = scalars.split_at(scalars.len() / 2);
        let r = decode_scalar(r_bytes, order)?;
        let c = decode_scalar(c_bytes, order)?;

        Ok(Self::from_parts(hash, g, h, m, z, r, c))
    }
}

/// Text form of a proof, with every field optional.
///
/// Points are hex-encoded [`Point::marshal`] outputs and scalars are
/// hex-encoded fixed-width big-endian integers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedProof {
    /// Curve name, resolved with [`curves::by_name`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    /// Hash algorithm identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<HashAlgorithm>,
    /// First generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<String>,
    /// Public point `xG`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<String>,
    /// Second generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
    /// Public point `xM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<String>,
    /// Response scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    /// Challenge scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<String>,
}

impl EncodedProof {
    /// Encodes a proof.
    pub fn from_proof(proof: &Proof) -> Result<Self> {
        let order = proof.g.curve().order();
        Ok(Self {
            curve: Some(proof.g.curve().name().to_string()),
            hash: Some(proof.hash),
            g: Some(hex::encode(proof.g.marshal())),
            h: Some(hex::encode(proof.h.marshal())),
            m: Some(hex::encode(proof.m.marshal())),
            z: Some(hex::encode(proof.z.marshal())),
            r: Some(hex::encode(encode_scalar(&proof.r, order)?)),
            c: Some(hex::encode(encode_scalar(&proof.c, order)?)),
        })
    }

    /// Checks that every field is present.
    pub fn is_complete(&self) -> bool {
        self.curve.is_some()
            && self.hash.is_some()
            && self.g.is_some()
            && self.h.is_some()
            && self.m.is_some()
            && self.z.is_some()
            && self.r.is_some()
            && self.c.is_some()
    }

    /// Decodes the proof, resolving the curve by name.
    pub fn decode(&self) -> Result<Proof> {
        let name = self.curve.as_deref().ok_or(Error::IncompleteProof)?;
        self.decode_with(curves::by_name(name)?)
    }

    /// Decodes the proof over an explicitly supplied curve.
    ///
    /// The `curve` field may be absent; if present it must name `curve`.
    pub fn decode_with(&self, curve: Arc<dyn Curve>) -> Result<Proof> {
        if let Some(name) = &self.curve {
            let matches = match curves::by_name(name) {
                Ok(named) => named.name() == curve.name() && named.order() == curve.order(),
                Err(_) => name == curve.name(),
            };
            if !matches {
                return Err(Error::MalformedProof(format!(
                    "proof is for curve {name}, expected {}",
                    curve.name()
                )));
            }
        }

        let hash = self.hash.ok_or(Error::IncompleteProof)?;
        let point = |field: &Option<String>| -> Result<Point> {
            let bytes = decode_hex(field)?;
            Point::unmarshal(Arc::clone(&curve), &bytes)
        };
        let g = point(&self.g)?;
        let h = point(&self.h)?;
        let m = point(&self.m)?;
        let z = point(&self.z)?;

        let order = curve.order();
        let r = decode_scalar(&decode_hex(&self.r)?, order)?;
        let c = decode_scalar(&decode_hex(&self.c)?, order)?;

        Ok(Proof::from_parts(hash, g, h, m, z, r, c))
    }

    /// Decodes and verifies the proof.
    ///
    /// Incomplete or undecodable proofs are invalid.
    pub fn verify(&self) -> bool {
        if !self.is_complete() {
            tracing::debug!("rejecting incomplete encoded proof");
            return false;
        }
        match self.decode() {
            Ok(proof) => proof.verify(),
            Err(err) => {
                tracing::debug!(%err, "rejecting undecodable proof");
                false
            }
        }
    }
}

fn decode_hex(field: &Option<String>) -> Result<Vec<u8>> {
    let text = field.as_deref().ok_or(Error::IncompleteProof)?;
    hex::decode(text).map_err(|e| Error::MalformedProof(format!("invalid hex: {e}")))
}
