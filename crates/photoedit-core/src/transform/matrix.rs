//! 4x5 color matrix: a 4x4 linear part on `[R, G, B, A]` plus a translation
//! column.
//!
//! Row `r` produces output channel `r`:
//! ```text
//! out[r] = m[r][0]×R + m[r][1]×G + m[r][2]×B + m[r][3]×A + m[r][4]
//! ```
//! The translation column is expressed in 0–255 channel units, the same
//! convention slider brightness offsets use. It is rescaled when the matrix is
//! applied to normalized pixels.

use serde::{Deserialize, Serialize};

use crate::grading::sliders::LUMA_WEIGHTS;
use crate::image::ChannelRange;
use crate::transform::params::AdjustmentParams;

/// Column holding the per-channel translation.
const OFFSET_COL: usize = 4;

/// Row-major 4x5 color matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ColorMatrix {
    /// Rows for R, G, B, A output channels.
    pub rows: [[f32; 5]; 4],
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorMatrix {
    /// Leaves every pixel unchanged.
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ],
    };

    /// Saturation matrix around the weighted gray.
    ///
    /// Row `c` holds `L[k] × (1 − s)` in every color column `k`, plus `s` on
    /// its own diagonal. Alpha row and translation column are identity.
    /// `s = 1` is the identity; `s = 0` maps every channel to the same gray.
    pub fn saturation(saturation: f32) -> Self {
        let inv = 1.0 - saturation;
        let mut m = Self::IDENTITY;
        for (c, row) in m.rows.iter_mut().take(3).enumerate() {
            for (k, weight) in LUMA_WEIGHTS.iter().enumerate() {
                row[k] = weight * inv;
            }
            row[c] += saturation;
        }
        m
    }

    /// Pure translation adding `brightness` to R, G and B.
    pub fn brightness(brightness: f32) -> Self {
        Self::IDENTITY.with_brightness(brightness)
    }

    /// Set the R, G, B translation entries to `brightness`. The alpha row and
    /// the linear part are left alone.
    pub fn set_brightness(&mut self, brightness: f32) {
        for row in self.rows.iter_mut().take(3) {
            row[OFFSET_COL] = brightness;
        }
    }

    /// Copy of `self` with the R, G, B translation set to `brightness`.
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.set_brightness(brightness);
        self
    }

    /// Composed matrix for one adjustment: saturation first, then the
    /// brightness offset.
    ///
    /// The saturation matrix has a zero translation column, so writing the
    /// brightness into it is the same as concatenating a brightness matrix
    /// after it.
    pub fn from_params(params: &AdjustmentParams) -> Self {
        let m = Self::saturation(params.saturation).with_brightness(params.brightness);
        tracing::trace!(
            brightness = params.brightness,
            saturation = params.saturation,
            "color matrix recomputed"
        );
        m
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Matrix equivalent to applying `other` first, then `self`.
    pub fn concat(&self, other: &Self) -> Self {
        let a = &self.rows;
        let b = &other.rows;
        let mut out = [[0.0_f32; 5]; 4];
        for r in 0..4 {
            for c in 0..4 {
                out[r][c] = (0..4).map(|k| a[r][k] * b[k][c]).sum();
            }
            out[r][OFFSET_COL] =
                (0..4).map(|k| a[r][k] * b[k][OFFSET_COL]).sum::<f32>() + a[r][OFFSET_COL];
        }
        Self { rows: out }
    }

    /// Multiply a pixel without clamping. `range` selects the unit the
    /// translation column is rescaled to.
    pub fn transform(&self, rgba: [f32; 4], range: ChannelRange) -> [f32; 4] {
        let scale = range.offset_scale();
        let mut out = [0.0_f32; 4];
        for (o, row) in out.iter_mut().zip(&self.rows) {
            *o = row[0] * rgba[0]
                + row[1] * rgba[1]
                + row[2] * rgba[2]
                + row[3] * rgba[3]
                + row[OFFSET_COL] * scale;
        }
        out
    }

    /// Multiply a pixel and clamp every channel into `range`.
    pub fn apply(&self, rgba: [f32; 4], range: ChannelRange) -> [f32; 4] {
        self.transform(rgba, range).map(|c| range.clamp(c))
    }

    /// The 4x4 linear part as a column-major `glam` matrix.
    pub fn linear(&self) -> glam::Mat4 {
        let m = &self.rows;
        glam::Mat4::from_cols(
            glam::Vec4::new(m[0][0], m[1][0], m[2][0], m[3][0]),
            glam::Vec4::new(m[0][1], m[1][1], m[2][1], m[3][1]),
            glam::Vec4::new(m[0][2], m[1][2], m[2][2], m[3][2]),
            glam::Vec4::new(m[0][3], m[1][3], m[2][3], m[3][3]),
        )
    }

    /// Translation column in 0–255 units.
    pub fn offset(&self) -> glam::Vec4 {
        let m = &self.rows;
        glam::Vec4::new(
            m[0][OFFSET_COL],
            m[1][OFFSET_COL],
            m[2][OFFSET_COL],
            m[3][OFFSET_COL],
        )
    }

    /// Uniform layout for a shader working on normalized colors.
    pub fn to_gpu(&self) -> GpuColorMatrix {
        GpuColorMatrix {
            linear: self.linear().to_cols_array_2d(),
            offset: (self.offset() * ChannelRange::Unit.offset_scale()).to_array(),
        }
    }

    /// Raw bytes of the row-major matrix.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// GPU-compatible color matrix. Must match the WGSL struct layout:
/// `mat4x4<f32>` followed by `vec4<f32>`.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct GpuColorMatrix {
    /// Column-major linear part.
    pub linear: [[f32; 4]; 4],
    /// Translation in normalized units.
    pub offset: [f32; 4],
}
