//! Packed surface samples and the compact indices that reference them

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};

use super::chunk::{CHUNK_SIZE, MAX_POINTS_PER_CHUNK, NEIGHBOR_SLOTS};

const CELL_BITS: u32 = 3;
const CELL_MASK: u64 = (1 << CELL_BITS) - 1;
const AXIS_SHIFT: u32 = 3 * CELL_BITS;
const ALPHA_SHIFT: u32 = 16;
const NORMAL_SHIFT: u32 = 32;

/// Quantize a value in [0, 1] to 16 bits
#[inline]
pub fn float_to_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}

#[inline]
pub fn u16_to_float(value: u16) -> f32 {
    value as f32 / 65535.0
}

/// Quantize a value in [0, 1] to 8 bits
#[inline]
pub fn float_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
pub fn u8_to_float(value: u8) -> f32 {
    value as f32 / 255.0
}

/// One place where a triangle crosses a voxel edge - exactly 8 bytes.
///
/// Layout (low to high): cell x, y, z (3 bits each), axis (2 bits),
/// 5 padding bits, alpha (16 bits), normal x, y, z (8 bits each), 8 padding bits.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Point(u64);

impl Point {
    /// Pack a sample. `cell` must lie in the chunk and `axis` in 0..3.
    pub fn new(cell: IVec3, axis: usize, alpha: f32, normal: Vec3) -> Self {
        debug_assert!(cell.cmpge(IVec3::ZERO).all() && cell.cmplt(IVec3::splat(CHUNK_SIZE)).all());
        debug_assert!(axis < 3);

        let mut raw = (cell.x as u64 & CELL_MASK)
            | (cell.y as u64 & CELL_MASK) << CELL_BITS
            | (cell.z as u64 & CELL_MASK) << (2 * CELL_BITS)
            | (axis as u64 & 0b11) << AXIS_SHIFT
            | (float_to_u16(alpha) as u64) << ALPHA_SHIFT;

        let encoded = (normal + Vec3::ONE) / 2.0;
        raw |= (float_to_u8(encoded.x) as u64) << NORMAL_SHIFT;
        raw |= (float_to_u8(encoded.y) as u64) << (NORMAL_SHIFT + 8);
        raw |= (float_to_u8(encoded.z) as u64) << (NORMAL_SHIFT + 16);
        Self(raw)
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Unpack untrusted bits. `None` if the axis field is out of range.
    pub fn try_from_raw(raw: u64) -> Option<Self> {
        let point = Self(raw);
        (point.axis() < 3).then_some(point)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Local cell inside the owning chunk
    #[inline]
    pub fn cell(&self) -> IVec3 {
        IVec3::new(
            (self.0 & CELL_MASK) as i32,
            (self.0 >> CELL_BITS & CELL_MASK) as i32,
            (self.0 >> (2 * CELL_BITS) & CELL_MASK) as i32,
        )
    }

    /// Principal axis of the crossed edge (0 = x, 1 = y, 2 = z)
    #[inline]
    pub fn axis(&self) -> usize {
        (self.0 >> AXIS_SHIFT & 0b11) as usize
    }

    /// Cell and axis bits: identifies the crossed voxel edge
    #[inline]
    pub fn edge_bits(&self) -> u16 {
        (self.0 & ((1 << (AXIS_SHIFT + 2)) - 1)) as u16
    }

    /// Quantized alpha
    #[inline]
    pub fn alpha_bits(&self) -> u16 {
        (self.0 >> ALPHA_SHIFT) as u16
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        u16_to_float((self.0 >> ALPHA_SHIFT) as u16)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        let decode = |shift: u32| 2.0 * u8_to_float((self.0 >> shift) as u8) - 1.0;
        Vec3::new(
            decode(NORMAL_SHIFT),
            decode(NORMAL_SHIFT + 8),
            decode(NORMAL_SHIFT + 16),
        )
    }

    /// Exact position in chunk-local coordinates
    #[inline]
    pub fn position(&self) -> Vec3 {
        let mut position = self.cell().as_vec3();
        position[self.axis()] += self.alpha();
        position
    }

    /// -1 if `other` lies behind the surface at `this_position`, +1 otherwise
    #[inline]
    pub fn sign(&self, this_position: Vec3, other: Vec3) -> f32 {
        if self.normal().dot(other - this_position) < 0.0 { -1.0 } else { 1.0 }
    }
}

/// Compact reference to a point: neighbor slot (0..27) and point slot (0..1024), 16 bits.
///
/// Bit 0 is the valid flag, bits 1..6 the slot, bits 6..16 the point.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PointIndex(u16);

impl PointIndex {
    pub const INVALID: PointIndex = PointIndex(0);

    pub fn new(slot: usize, point: usize) -> Self {
        debug_assert!(slot < NEIGHBOR_SLOTS);
        debug_assert!(point < MAX_POINTS_PER_CHUNK);
        Self(1 | (slot as u16 & 0x1F) << 1 | (point as u16 & 0x3FF) << 6)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 & 1 != 0
    }

    #[inline]
    pub fn slot(&self) -> usize {
        (self.0 >> 1 & 0x1F) as usize
    }

    #[inline]
    pub fn point(&self) -> usize {
        (self.0 >> 6) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(std::mem::size_of::<Point>(), 8);
        assert_eq!(std::mem::size_of::<PointIndex>(), 2);
    }

    #[test]
    fn test_point_fields() {
        let point = Point::new(IVec3::new(7, 0, 5), 2, 0.25, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(point.cell(), IVec3::new(7, 0, 5));
        assert_eq!(point.axis(), 2);
        assert!((point.alpha() - 0.25).abs() <= 1.0 / 65535.0);
        assert!((point.position() - Vec3::new(7.0, 0.0, 5.25)).length() <= 1.0 / 65535.0);
    }

    #[test]
    fn test_alpha_quantum() {
        // Alpha carries 16 bits: error is at most half a quantum
        for i in 0..100 {
            let alpha = i as f32 / 100.0;
            let point = Point::new(IVec3::ZERO, 0, alpha, Vec3::X);
            assert!((point.alpha() - alpha).abs() <= 0.5 / 65535.0 + 1e-7);
        }
    }

    #[test]
    fn test_normal_quantization() {
        let n = Vec3::new(0.6, -0.8, 0.0);
        let point = Point::new(IVec3::ZERO, 1, 0.0, n);
        assert!((point.normal() - n).abs().max_element() <= 1.0 / 255.0 + 1e-5);

        let down = Point::new(IVec3::ZERO, 1, 0.0, Vec3::NEG_Y).normal();
        assert!((down.y + 1.0).abs() < 1e-6);
        assert!(down.x.abs() <= 1.0 / 255.0 + 1e-5);
        assert!(down.z.abs() <= 1.0 / 255.0 + 1e-5);
    }

    #[test]
    fn test_sign() {
        let point = Point::new(IVec3::ZERO, 2, 0.0, Vec3::Z);
        let here = point.position();
        assert_eq!(point.sign(here, Vec3::new(0.0, 0.0, 3.0)), 1.0);
        assert_eq!(point.sign(here, Vec3::new(0.0, 0.0, -3.0)), -1.0);
    }

    #[test]
    fn test_try_from_raw_rejects_bad_axis() {
        let point = Point::new(IVec3::new(1, 2, 3), 2, 0.5, Vec3::Z);
        assert_eq!(Point::try_from_raw(point.raw()), Some(point));
        assert_eq!(Point::try_from_raw(3 << AXIS_SHIFT), None);
    }

    #[test]
    fn test_edge_bits_ignore_alpha_and_normal() {
        let a = Point::new(IVec3::new(1, 2, 3), 1, 0.25, Vec3::Z);
        let b = Point::new(IVec3::new(1, 2, 3), 1, 0.75, Vec3::NEG_X);
        assert_eq!(a.edge_bits(), b.edge_bits());
        assert!(a.alpha_bits() < b.alpha_bits());
        let c = Point::new(IVec3::new(1, 2, 3), 2, 0.25, Vec3::Z);
        assert_ne!(a.edge_bits(), c.edge_bits());
    }

    #[test]
    fn test_index_packing() {
        assert!(!PointIndex::INVALID.is_valid());
        assert!(!PointIndex::default().is_valid());

        let index = PointIndex::new(26, 1023);
        assert!(index.is_valid());
        assert_eq!(index.slot(), 26);
        assert_eq!(index.point(), 1023);

        let index = PointIndex::new(13, 0);
        assert_eq!((index.slot(), index.point()), (13, 0));
    }
}
