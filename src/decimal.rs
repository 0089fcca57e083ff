//! Decimal string conversion, chunked in base 10⁹.

use crate::arith;
use crate::bigint::BigInt;
use crate::error::Error;
use crate::limb::{DECIMAL_CHUNK_DIGITS, DECIMAL_CHUNK_MODULUS, DECIMAL_DIGITS_PER_LIMB, Limb};
use crate::view::{Sign, View};

/// Limbs needed to hold a magnitude of `n_decimals` decimal digits. Each
/// 9-digit chunk adds at most 30 bits, so one limb per chunk is enough; the
/// extra limb absorbs the final carry.
pub(crate) fn parse_estimate(n_decimals: usize) -> usize {
    n_decimals / DECIMAL_CHUNK_DIGITS + 1
}

/// Decimal digits of the magnitude, without any sign.
///
/// Repeatedly divides by 10⁹; each remainder is one 9-digit chunk, rendered
/// zero-padded except for the top-most. Single-limb magnitudes format
/// directly through the native integer path.
pub(crate) fn magnitude_to_decimal(v: View<'_>) -> String {
    if v.sign == Sign::Zero {
        return "0".to_string();
    }
    if v.len() == 1 {
        return v.limbs[0].to_string();
    }

    let mut value = v.limbs.to_vec();
    let mut scratch = vec![0 as Limb; v.len()];
    let mut len = v.len();
    let mut chunks: Vec<Limb> = Vec::new();
    while len > 0 {
        let (q_len, rem) = arith::divmod_limb(&mut scratch, &value[..len], DECIMAL_CHUNK_MODULUS);
        value[..q_len].copy_from_slice(&scratch[..q_len]);
        len = q_len;
        chunks.push(rem);
    }

    let mut out = String::with_capacity(DECIMAL_DIGITS_PER_LIMB * v.len());
    let mut rest = chunks.iter().rev();
    if let Some(top) = rest.next() {
        out.push_str(&top.to_string());
    }
    for chunk in rest {
        out.push_str(&format!("{chunk:09}"));
    }
    out
}

/// Parse an optionally-signed decimal string into a [`BigInt`].
///
/// The accumulator consumes up-to-9-digit chunks left to right: scale by
/// 10^(chunk length), add the chunk. Anything but `-?[0-9]+` is rejected.
pub(crate) fn parse(s: &str) -> Result<BigInt, Error> {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput);
    }

    let mut out = BigInt::with_limb_capacity(parse_estimate(digits.len()));
    let mut len = 0;
    {
        let limbs = out.limbs_mut();
        for chunk in digits.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let mut chunk_val: Limb = 0;
            for &b in chunk {
                chunk_val = chunk_val * 10 + (b - b'0') as Limb;
            }
            let scale = (10 as Limb).pow(chunk.len() as u32);
            len = mul_add_limb_in_place(limbs, len, scale, chunk_val);
        }
    }
    let sign = if len == 0 { Sign::Zero } else { sign };
    out.commit(sign, len);
    Ok(out)
}

/// `v[..len] = v[..len] * mul + add` in one carry pass. May grow the length
/// by one limb.
fn mul_add_limb_in_place(v: &mut [Limb], len: usize, mul: Limb, add: Limb) -> usize {
    let mut carry = add as u64;
    for idx in 0..len {
        let t = v[idx] as u64 * mul as u64 + carry;
        v[idx] = t as Limb;
        carry = t >> Limb::BITS;
    }
    if carry != 0 {
        v[len] = carry as Limb;
        return len + 1;
    }
    len
}
