//! Precomputed lookup tables for the nonlinear halves of the conversion
//! pipelines.
//!
//! Gamma companding and the CIE f()/f⁻¹() nonlinearity dominate conversion
//! cost when computed with `powf` per channel. The [`Tables`] object
//! replaces those calls with fixed-size lookups that are built once and
//! never mutated, so conversions stay deterministic across platforms.
//!
//! A fresh, independently owned set can be built with [`Tables::new`] (used
//! by the table tests); production code reaches the process-wide instance
//! through [`Tables::shared`], which initializes on first use and is
//! lock-free afterwards.

use std::sync::OnceLock;

/// Entries in the sRGB decode table, one per 8-bit channel value.
const GAMMA_TABLE_SIZE: usize = 256;
/// Entries in the linear → sRGB encode table.
const LINEAR_TABLE_SIZE: usize = 4096;
/// Entries in the CIE f()/f⁻¹() tables, sampled over [0, 2].
const LAB_F_TABLE_SIZE: usize = 4096;

/// CIE threshold (6/29)³ separating the cube-root and linear segments.
const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear segment of f(t).
const LAB_KAPPA_INV: f64 = 7.787;

static SHARED: OnceLock<Tables> = OnceLock::new();

/// Immutable lookup tables for gamma companding and the CIE nonlinearity.
#[derive(Clone)]
pub struct Tables {
    gamma_to_linear: [f64; GAMMA_TABLE_SIZE],
    linear_to_gamma: [f64; LINEAR_TABLE_SIZE],
    lab_f: [f64; LAB_F_TABLE_SIZE],
    lab_f_inv: [f64; LAB_F_TABLE_SIZE],
}

impl Tables {
    /// Builds a fresh table set. Construction cannot fail; the tables are
    /// fixed-size and every entry is defined for its whole index range.
    pub fn new() -> Self {
        let mut gamma_to_linear = [0.0; GAMMA_TABLE_SIZE];
        for (i, entry) in gamma_to_linear.iter_mut().enumerate() {
            let v = i as f64 / 255.0;
            *entry = if v > 0.04045 {
                ((v + 0.055) / 1.055).powf(2.4)
            } else {
                v / 12.92
            };
        }

        let mut linear_to_gamma = [0.0; LINEAR_TABLE_SIZE];
        for (i, entry) in linear_to_gamma.iter_mut().enumerate() {
            let v = i as f64 / (LINEAR_TABLE_SIZE - 1) as f64;
            *entry = if v > 0.003_130_8 {
                1.055 * v.powf(1.0 / 2.4) - 0.055
            } else {
                12.92 * v
            };
        }

        let mut lab_f = [0.0; LAB_F_TABLE_SIZE];
        for (i, entry) in lab_f.iter_mut().enumerate() {
            let t = i as f64 / (LAB_F_TABLE_SIZE - 1) as f64 * 2.0;
            *entry = if t > LAB_EPSILON {
                t.powf(1.0 / 3.0)
            } else {
                LAB_KAPPA_INV * t + 16.0 / 116.0
            };
        }

        let mut lab_f_inv = [0.0; LAB_F_TABLE_SIZE];
        for (i, entry) in lab_f_inv.iter_mut().enumerate() {
            let t = i as f64 / (LAB_F_TABLE_SIZE - 1) as f64 * 2.0;
            let t3 = t * t * t;
            *entry = if t3 > LAB_EPSILON {
                t3
            } else {
                (t - 16.0 / 116.0) / LAB_KAPPA_INV
            };
        }

        Self {
            gamma_to_linear,
            linear_to_gamma,
            lab_f,
            lab_f_inv,
        }
    }

    /// Returns the process-wide table set, building it on first call.
    ///
    /// Construction happens-before every lookup; after the first call all
    /// access is read-only and needs no synchronization.
    pub fn shared() -> &'static Tables {
        SHARED.get_or_init(Tables::new)
    }

    /// Decodes an 8-bit sRGB channel to linear light in [0, 1].
    #[inline]
    pub fn gamma_to_linear(&self, v: u8) -> f64 {
        self.gamma_to_linear[v as usize]
    }

    /// Encodes linear light to gamma-compressed sRGB in [0, 1].
    ///
    /// Input is clamped to [0, 1] before indexing.
    #[inline]
    pub fn linear_to_gamma(&self, v: f64) -> f64 {
        lerp_lookup(&self.linear_to_gamma, v)
    }

    /// CIE f(t) over the domain [0, 2]; out-of-range input clamps.
    #[inline]
    pub fn lab_f(&self, t: f64) -> f64 {
        lerp_lookup(&self.lab_f, t / 2.0)
    }

    /// Inverse of [`Tables::lab_f`] over the same [0, 2] domain.
    #[inline]
    pub fn lab_f_inv(&self, t: f64) -> f64 {
        lerp_lookup(&self.lab_f_inv, t / 2.0)
    }
}

/// Samples a table at a fractional position in [0, 1], interpolating
/// linearly between the neighboring entries; quantization error stays
/// second-order, which the round-trip bounds on dark channels require.
#[inline]
fn lerp_lookup<const N: usize>(table: &[f64; N], frac: f64) -> f64 {
    let pos = frac.clamp(0.0, 1.0) * (N - 1) as f64;
    let i = pos as usize;
    if i >= N - 1 {
        return table[N - 1];
    }
    let f = pos - i as f64;
    table[i] + (table[i + 1] - table[i]) * f
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}
