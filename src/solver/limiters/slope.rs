//! Scalar slope-limiter functions.
//!
//! Each takes the backward slope `sl = q[c] - q[c-1]` and the forward slope
//! `sr = q[c+1] - q[c]` and returns the limited slope for cell `c`. All of
//! them except [`central`] return exactly `0` unless both slopes are
//! nonzero with the same sign, and exactly `sl` when `sl == sr`.

/// Both slopes nonzero with the same sign.
///
/// Compares signs directly so that tiny slopes whose product underflows
/// are still treated as same-signed.
#[inline(always)]
fn same_sign(sl: f64, sr: f64) -> bool {
    (sl > 0.0 && sr > 0.0) || (sl < 0.0 && sr < 0.0)
}

/// Unlimited central difference `(sl + sr) / 2`.
#[inline(always)]
pub fn central(sl: f64, sr: f64) -> f64 {
    0.5 * (sl + sr)
}

/// Minmod: the smaller-magnitude slope.
#[inline(always)]
pub fn minmod(sl: f64, sr: f64) -> f64 {
    if !same_sign(sl, sr) {
        return 0.0;
    }
    if sl.abs() <= sr.abs() { sl } else { sr }
}

/// Van Leer harmonic mean `2 sl sr / (sl + sr)`.
#[inline(always)]
pub fn van_leer(sl: f64, sr: f64) -> f64 {
    if !same_sign(sl, sr) {
        return 0.0;
    }
    // Grouped so that sl == sr gives exactly sl
    sl * (2.0 * sr / (sl + sr))
}

/// Monotonized central: `min(|2 sl|, |2 sr|, |sl + sr| / 2)` with the
/// common sign.
#[inline(always)]
pub fn monotonized_central(sl: f64, sr: f64) -> f64 {
    if !same_sign(sl, sr) {
        return 0.0;
    }
    let magnitude = (2.0 * sl).abs().min((2.0 * sr).abs()).min(central(sl, sr).abs());
    magnitude.copysign(sl)
}
