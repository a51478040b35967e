//! Integer box over voxel cells, max exclusive

use crate::core::types::IVec3;
use super::aabb::Aabb;

/// Integer box `[min, max)` in cell coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl IntBox {
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Cells covered by a chunk key at the given chunk size
    pub fn from_chunk_key(key: IVec3, chunk_size: i32) -> Self {
        Self {
            min: key * chunk_size,
            max: (key + IVec3::ONE) * chunk_size,
        }
    }

    pub fn size(&self) -> IVec3 {
        self.max - self.min
    }

    /// Number of cells, computed in 64 bits so huge boxes don't overflow
    pub fn count(&self) -> u64 {
        let size = self.size().max(IVec3::ZERO);
        size.x as u64 * size.y as u64 * size.z as u64
    }

    /// Smallest box containing both
    pub fn union(&self, other: &IntBox) -> IntBox {
        IntBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow by `amount` cells on every side
    pub fn extend(&self, amount: i32) -> IntBox {
        IntBox {
            min: self.min - IVec3::splat(amount),
            max: self.max + IVec3::splat(amount),
        }
    }

    pub fn intersects(&self, other: &IntBox) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y &&
        self.min.z < other.max.z && self.max.z > other.min.z
    }

    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(self.min.as_vec3(), self.max.as_vec3())
    }

    /// Box from a float AABB: floor of min, ceil of max
    pub fn from_aabb(aabb: &Aabb) -> IntBox {
        IntBox {
            min: aabb.min.floor().as_ivec3(),
            max: aabb.max.ceil().as_ivec3(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chunk_key() {
        let b = IntBox::from_chunk_key(IVec3::new(-1, 0, 2), 8);
        assert_eq!(b.min, IVec3::new(-8, 0, 16));
        assert_eq!(b.max, IVec3::new(0, 8, 24));
        assert_eq!(b.count(), 512);
    }

    #[test]
    fn test_count_large_box() {
        let b = IntBox::new(IVec3::splat(-100_000), IVec3::splat(100_000));
        assert_eq!(b.count(), 200_000u64.pow(3));
    }

    #[test]
    fn test_count_inverted_is_zero() {
        let b = IntBox::new(IVec3::splat(4), IVec3::ZERO);
        assert_eq!(b.count(), 0);
    }

    #[test]
    fn test_union_and_intersects() {
        let a = IntBox::new(IVec3::ZERO, IVec3::splat(8));
        let b = IntBox::new(IVec3::splat(8), IVec3::splat(16));
        assert!(!a.intersects(&b));
        assert!(a.extend(1).intersects(&b));
        let u = a.union(&b);
        assert_eq!(u, IntBox::new(IVec3::ZERO, IVec3::splat(16)));
    }
}
