//! Regular-cell triangulation tables in the Transvoxel layout.
//!
//! Corner `i` of a cell sits at `(i & 1, (i >> 1) & 1, (i >> 2) & 1)` and sets
//! bit `i` of the case code when its density is positive. A case maps to an
//! equivalence class (`REGULAR_CELL_CLASS`) holding the triangle topology
//! (`REGULAR_CELL_DATA`), while `REGULAR_VERTEX_DATA` holds one edge code per
//! vertex: the low byte packs the two corner indices as `(a << 4) | b` and the
//! high byte is the axis of the edge. Triangles wind so that
//! `(b - a) x (c - a)` points toward positive density.

/// Topology of one equivalence class
#[derive(Clone, Copy, Debug)]
pub struct RegularCellData {
    geometry_counts: u8,
    pub vertex_index: [u8; 15],
}

impl RegularCellData {
    pub const fn new(geometry_counts: u8, vertex_index: [u8; 15]) -> Self {
        Self { geometry_counts, vertex_index }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.geometry_counts >> 4) as usize
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        (self.geometry_counts & 0x0F) as usize
    }

    /// Vertex indices of the class' triangles, three per triangle
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.vertex_index[..3 * self.triangle_count()]
    }
}

/// Corner indices `(a, b)` of an edge code, `a < b`
#[inline]
pub fn edge_corners(code: u16) -> (usize, usize) {
    (((code >> 4) & 0x0F) as usize, (code & 0x0F) as usize)
}

/// Offset of a cell corner from the cell's minimum corner
#[inline]
pub fn corner_offset(corner: usize) -> glam::IVec3 {
    glam::IVec3::new((corner & 1) as i32, ((corner >> 1) & 1) as i32, ((corner >> 2) & 1) as i32)
}

pub const REGULAR_CELL_CLASS: [u8; 256] = [
    0x00, 0x01, 0x01, 0x02, 0x01, 0x02, 0x03, 0x04, 0x01, 0x03, 0x02, 0x04, 0x02, 0x04, 0x04, 0x05,
    0x01, 0x02, 0x03, 0x04, 0x03, 0x04, 0x06, 0x07, 0x08, 0x09, 0x09, 0x0A, 0x09, 0x0B, 0x0C, 0x0D,
    0x01, 0x03, 0x02, 0x04, 0x08, 0x09, 0x09, 0x0E, 0x03, 0x06, 0x04, 0x07, 0x09, 0x0F, 0x0A, 0x0D,
    0x02, 0x04, 0x04, 0x05, 0x09, 0x0A, 0x0F, 0x0D, 0x09, 0x0F, 0x0E, 0x0D, 0x10, 0x11, 0x11, 0x12,
    0x01, 0x03, 0x08, 0x09, 0x02, 0x04, 0x09, 0x13, 0x03, 0x06, 0x09, 0x0F, 0x04, 0x14, 0x0E, 0x0D,
    0x02, 0x04, 0x09, 0x0E, 0x04, 0x15, 0x0C, 0x0D, 0x09, 0x0F, 0x16, 0x11, 0x13, 0x0D, 0x11, 0x12,
    0x03, 0x06, 0x09, 0x0F, 0x09, 0x0C, 0x16, 0x11, 0x06, 0x17, 0x0F, 0x18, 0x0F, 0x18, 0x11, 0x08,
    0x04, 0x14, 0x13, 0x0D, 0x0B, 0x0D, 0x11, 0x12, 0x0C, 0x18, 0x11, 0x08, 0x11, 0x08, 0x08, 0x01,
    0x01, 0x08, 0x03, 0x09, 0x03, 0x09, 0x06, 0x0F, 0x02, 0x09, 0x04, 0x0E, 0x04, 0x0A, 0x07, 0x0D,
    0x03, 0x09, 0x06, 0x0C, 0x06, 0x0C, 0x17, 0x18, 0x09, 0x10, 0x0F, 0x11, 0x0C, 0x11, 0x18, 0x08,
    0x02, 0x09, 0x04, 0x0A, 0x09, 0x10, 0x0C, 0x11, 0x04, 0x0F, 0x05, 0x0D, 0x0B, 0x11, 0x0D, 0x12,
    0x04, 0x0B, 0x07, 0x0D, 0x0C, 0x11, 0x18, 0x08, 0x0A, 0x11, 0x0D, 0x12, 0x11, 0x08, 0x08, 0x01,
    0x02, 0x09, 0x09, 0x16, 0x04, 0x0B, 0x0C, 0x11, 0x04, 0x0C, 0x13, 0x11, 0x15, 0x0D, 0x0D, 0x12,
    0x04, 0x13, 0x0C, 0x11, 0x14, 0x0D, 0x18, 0x08, 0x0B, 0x11, 0x11, 0x08, 0x0D, 0x12, 0x08, 0x01,
    0x04, 0x0F, 0x0E, 0x11, 0x13, 0x11, 0x11, 0x08, 0x14, 0x18, 0x0D, 0x08, 0x0D, 0x08, 0x12, 0x01,
    0x15, 0x0D, 0x0D, 0x12, 0x0D, 0x12, 0x08, 0x01, 0x0D, 0x08, 0x12, 0x01, 0x12, 0x01, 0x01, 0x00,
];

pub const REGULAR_CELL_DATA: [RegularCellData; 25] = [
    RegularCellData::new(0x00, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x31, [0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x42, [0, 2, 1, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 2, 1, 0, 3, 2, 4, 2, 5, 5, 2, 3, 0, 0, 0]),
    RegularCellData::new(0x53, [0, 2, 1, 0, 3, 2, 3, 4, 2, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x42, [0, 2, 1, 1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x95, [0, 2, 1, 0, 1, 3, 0, 3, 4, 5, 4, 3, 6, 8, 7]),
    RegularCellData::new(0x64, [0, 2, 1, 3, 0, 1, 3, 1, 4, 3, 4, 5, 0, 0, 0]),
    RegularCellData::new(0x62, [0, 2, 1, 3, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x75, [0, 2, 1, 0, 3, 2, 1, 2, 4, 5, 6, 2, 4, 2, 6]),
    RegularCellData::new(0x64, [0, 2, 1, 0, 1, 3, 0, 3, 4, 3, 1, 5, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 2, 1, 0, 3, 2, 0, 4, 3, 5, 2, 3, 0, 0, 0]),
    RegularCellData::new(0x84, [0, 2, 1, 3, 5, 4, 4, 5, 6, 4, 6, 7, 0, 0, 0]),
    RegularCellData::new(0x53, [0, 2, 1, 0, 1, 3, 3, 1, 4, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 2, 1, 0, 1, 3, 0, 3, 4, 5, 3, 1, 0, 0, 0]),
    RegularCellData::new(0x84, [0, 2, 1, 3, 5, 4, 3, 6, 5, 5, 7, 4, 0, 0, 0]),
    RegularCellData::new(0x84, [0, 2, 1, 0, 1, 3, 4, 6, 5, 5, 6, 7, 0, 0, 0]),
    RegularCellData::new(0x73, [0, 2, 1, 0, 1, 3, 4, 6, 5, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x42, [0, 2, 1, 3, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 2, 1, 0, 3, 2, 0, 4, 3, 3, 5, 2, 0, 0, 0]),
    RegularCellData::new(0x64, [0, 2, 1, 3, 2, 0, 3, 4, 2, 3, 5, 4, 0, 0, 0]),
    RegularCellData::new(0x42, [0, 2, 1, 2, 3, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    RegularCellData::new(0x84, [0, 2, 1, 2, 3, 1, 4, 6, 5, 4, 7, 6, 0, 0, 0]),
    RegularCellData::new(0xC4, [0, 2, 1, 3, 5, 4, 6, 8, 7, 9, 11, 10, 0, 0, 0]),
    RegularCellData::new(0x93, [0, 2, 1, 3, 5, 4, 6, 8, 7, 0, 0, 0, 0, 0, 0]),
];

pub const REGULAR_VERTEX_DATA: [[u16; 12]; 256] = [
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0102, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0215, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0102, 0x0204, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0023, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0023, 0x0226, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0001, 0x0215, 0x0226, 0x0113, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0226, 0x0215, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0237, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0102, 0x0204, 0x0237, 0x0001, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0237, 0x0023, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0102, 0x0204, 0x0237, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0113, 0x0237, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0237, 0x0204, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0001, 0x0215, 0x0226, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0237, 0x0204, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0204, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0001, 0x0102, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0215, 0x0113, 0x0146, 0x0001, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0215, 0x0113, 0x0146, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0146, 0x0045, 0x0023, 0x0204, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0146, 0x0045, 0x0023, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0146, 0x0045, 0x0226, 0x0113, 0x0023, 0x0001, 0x0204, 0x0102, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0226, 0x0146, 0x0215, 0x0023, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0237, 0x0023, 0x0204, 0x0146, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0146, 0x0237, 0x0023, 0x0045, 0x0113, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0237, 0x0146, 0x0045, 0x0023, 0x0204, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0215, 0x0237, 0x0146, 0x0102, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0113, 0x0045, 0x0204, 0x0237, 0x0146, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0237, 0x0226, 0x0045, 0x0001, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0102, 0x0045, 0x0215, 0x0146, 0x0226, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0226, 0x0146, 0x0215, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0045, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0045, 0x0157, 0x0102, 0x0215, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0045, 0x0157, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0045, 0x0157, 0x0102, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0045, 0x0157, 0x0023, 0x0226, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0023, 0x0157, 0x0215, 0x0226, 0x0045, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0045, 0x0226, 0x0102, 0x0157, 0x0023, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0157, 0x0113, 0x0204, 0x0226, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0237, 0x0023, 0x0045, 0x0113, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0237, 0x0023, 0x0157, 0x0204, 0x0045, 0x0001, 0x0113, 0x0215, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0237, 0x0023, 0x0045, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0157, 0x0237, 0x0102, 0x0045, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0226, 0x0045, 0x0157, 0x0102, 0x0215, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0215, 0x0204, 0x0045, 0x0237, 0x0226, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0001, 0x0045, 0x0226, 0x0237, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0204, 0x0045, 0x0237, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0204, 0x0146, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0001, 0x0102, 0x0157, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0146, 0x0113, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0102, 0x0157, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0157, 0x0023, 0x0226, 0x0215, 0x0102, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0146, 0x0157, 0x0023, 0x0001, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0102, 0x0113, 0x0023, 0x0146, 0x0157, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0113, 0x0023, 0x0146, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0204, 0x0023, 0x0113, 0x0146, 0x0237, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0001, 0x0113, 0x0157, 0x0237, 0x0102, 0x0146, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0023, 0x0001, 0x0157, 0x0146, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0157, 0x0237, 0x0102, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0146, 0x0157, 0x0226, 0x0215, 0x0204, 0x0113, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0226, 0x0146, 0x0237, 0x0113, 0x0215, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0157, 0x0237, 0x0146, 0x0204, 0x0102, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0157, 0x0237, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0226, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0204, 0x0001, 0x0067, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0215, 0x0113, 0x0226, 0x0067, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0215, 0x0067, 0x0146, 0x0113, 0x0226, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0102, 0x0023, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0204, 0x0001, 0x0067, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0067, 0x0215, 0x0113, 0x0146, 0x0001, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0067, 0x0204, 0x0215, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0023, 0x0113, 0x0146, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0204, 0x0001, 0x0146, 0x0237, 0x0067, 0x0023, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0001, 0x0146, 0x0226, 0x0215, 0x0067, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0102, 0x0226, 0x0237, 0x0067, 0x0204, 0x0215, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0067, 0x0146, 0x0113, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0067, 0x0146, 0x0113, 0x0204, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0146, 0x0102, 0x0237, 0x0215, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0237, 0x0067, 0x0204, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0045, 0x0204, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0226, 0x0067, 0x0001, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0226, 0x0113, 0x0001, 0x0067, 0x0215, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0067, 0x0045, 0x0102, 0x0113, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0102, 0x0023, 0x0045, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0023, 0x0045, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0001, 0x0204, 0x0113, 0x0023, 0x0215, 0x0045, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0045, 0x0215, 0x0023, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0045, 0x0113, 0x0237, 0x0204, 0x0023, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0226, 0x0023, 0x0001, 0x0113, 0x0067, 0x0045, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0023, 0x0226, 0x0045, 0x0215, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0045, 0x0215, 0x0067, 0x0226, 0x0023, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0102, 0x0113, 0x0067, 0x0045, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0001, 0x0113, 0x0067, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0237, 0x0067, 0x0215, 0x0001, 0x0204, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0045, 0x0215, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0157, 0x0215, 0x0226, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0157, 0x0215, 0x0067, 0x0102, 0x0226, 0x0204, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0113, 0x0226, 0x0067, 0x0001, 0x0146, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0045, 0x0146, 0x0102, 0x0226, 0x0157, 0x0113, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0102, 0x0215, 0x0045, 0x0023, 0x0157, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0045, 0x0146, 0x0215, 0x0001, 0x0157, 0x0067, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0157, 0x0067, 0x0102, 0x0001, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0113, 0x0023, 0x0157, 0x0045, 0x0146, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0023, 0x0113, 0x0226, 0x0045, 0x0146, 0x0157, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0215, 0x0045, 0x0146, 0x0204, 0x0023, 0x0102, 0x0226, 0x0157, 0x0237, 0x0067],
    [0x0157, 0x0237, 0x0067, 0x0045, 0x0146, 0x0023, 0x0001, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0226, 0x0023, 0x0146, 0x0204, 0x0045, 0x0237, 0x0067, 0x0157, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0067, 0x0157, 0x0113, 0x0215, 0x0146, 0x0102, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0215, 0x0001, 0x0157, 0x0237, 0x0067, 0x0204, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0102, 0x0001, 0x0146, 0x0067, 0x0157, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0237, 0x0067, 0x0045, 0x0146, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0157, 0x0215, 0x0226, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0226, 0x0067, 0x0001, 0x0157, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0226, 0x0157, 0x0113, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0102, 0x0226, 0x0157, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0215, 0x0204, 0x0023, 0x0067, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0067, 0x0157, 0x0001, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0067, 0x0157, 0x0023, 0x0102, 0x0001, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0067, 0x0157, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0237, 0x0067, 0x0113, 0x0215, 0x0023, 0x0226, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0215, 0x0023, 0x0102, 0x0226, 0x0157, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0001, 0x0204, 0x0023, 0x0237, 0x0067, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0102, 0x0226, 0x0237, 0x0067, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0204, 0x0102, 0x0215, 0x0157, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0001, 0x0113, 0x0157, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0102, 0x0157, 0x0237, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0067, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0157, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0102, 0x0204, 0x0157, 0x0067, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0113, 0x0001, 0x0067, 0x0215, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0102, 0x0067, 0x0237, 0x0204, 0x0157, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0226, 0x0102, 0x0157, 0x0023, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0204, 0x0157, 0x0067, 0x0001, 0x0237, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0226, 0x0102, 0x0067, 0x0215, 0x0157, 0x0113, 0x0023, 0x0237, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0237, 0x0215, 0x0157, 0x0226, 0x0204, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0157, 0x0067, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0157, 0x0204, 0x0001, 0x0067, 0x0102, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0067, 0x0001, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0204, 0x0215, 0x0023, 0x0067, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0226, 0x0102, 0x0157, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0226, 0x0204, 0x0157, 0x0113, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0067, 0x0226, 0x0001, 0x0157, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0215, 0x0157, 0x0226, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0067, 0x0237, 0x0204, 0x0157, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0001, 0x0237, 0x0157, 0x0102, 0x0067, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0067, 0x0237, 0x0146, 0x0001, 0x0204, 0x0215, 0x0157, 0x0045, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0045, 0x0237, 0x0113, 0x0067, 0x0146, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0045, 0x0204, 0x0157, 0x0023, 0x0237, 0x0226, 0x0146, 0x0067, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0067, 0x0226, 0x0157, 0x0045, 0x0237, 0x0023, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0226, 0x0146, 0x0113, 0x0023, 0x0237, 0x0001, 0x0204, 0x0102, 0x0045, 0x0215, 0x0157],
    [0x0215, 0x0157, 0x0045, 0x0237, 0x0113, 0x0023, 0x0146, 0x0067, 0x0226, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0023, 0x0204, 0x0146, 0x0113, 0x0045, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0067, 0x0023, 0x0146, 0x0113, 0x0157, 0x0001, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0045, 0x0001, 0x0204, 0x0067, 0x0023, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0023, 0x0102, 0x0067, 0x0157, 0x0045, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0146, 0x0067, 0x0204, 0x0102, 0x0045, 0x0157, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0001, 0x0113, 0x0045, 0x0146, 0x0067, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0102, 0x0045, 0x0215, 0x0157, 0x0226, 0x0146, 0x0067, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0215, 0x0157, 0x0146, 0x0067, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0215, 0x0045, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0067, 0x0102, 0x0204, 0x0237, 0x0001, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0113, 0x0001, 0x0067, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0113, 0x0102, 0x0067, 0x0045, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0215, 0x0102, 0x0023, 0x0045, 0x0226, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0226, 0x0204, 0x0067, 0x0001, 0x0023, 0x0215, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0237, 0x0102, 0x0001, 0x0226, 0x0067, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0204, 0x0045, 0x0226, 0x0023, 0x0237, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0215, 0x0045, 0x0023, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0215, 0x0001, 0x0023, 0x0102, 0x0045, 0x0067, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0045, 0x0023, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0023, 0x0102, 0x0045, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0045, 0x0067, 0x0102, 0x0113, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0067, 0x0226, 0x0045, 0x0215, 0x0001, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0067, 0x0226, 0x0001, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0204, 0x0045, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0067, 0x0237, 0x0204, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0102, 0x0146, 0x0237, 0x0215, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0146, 0x0067, 0x0113, 0x0204, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0146, 0x0067, 0x0113, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0067, 0x0226, 0x0146, 0x0023, 0x0237, 0x0102, 0x0204, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0215, 0x0001, 0x0237, 0x0067, 0x0226, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0237, 0x0102, 0x0001, 0x0204, 0x0067, 0x0226, 0x0146, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0113, 0x0023, 0x0067, 0x0226, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0067, 0x0023, 0x0204, 0x0215, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0146, 0x0067, 0x0102, 0x0001, 0x0113, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0001, 0x0204, 0x0067, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0023, 0x0102, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0113, 0x0215, 0x0102, 0x0226, 0x0146, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0215, 0x0226, 0x0146, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0001, 0x0204, 0x0226, 0x0146, 0x0067, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0067, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0237, 0x0157, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0237, 0x0001, 0x0102, 0x0157, 0x0204, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0146, 0x0001, 0x0215, 0x0226, 0x0113, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0204, 0x0146, 0x0237, 0x0113, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0237, 0x0157, 0x0102, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0001, 0x0023, 0x0157, 0x0146, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0113, 0x0023, 0x0215, 0x0157, 0x0001, 0x0102, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0146, 0x0204, 0x0157, 0x0237, 0x0113, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0023, 0x0113, 0x0146, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0102, 0x0226, 0x0001, 0x0113, 0x0204, 0x0146, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0146, 0x0023, 0x0001, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0146, 0x0215, 0x0157, 0x0204, 0x0102, 0x0226, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0157, 0x0102, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0146, 0x0204, 0x0113, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0102, 0x0001, 0x0157, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0146, 0x0204, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0045, 0x0204, 0x0237, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0045, 0x0001, 0x0226, 0x0237, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0215, 0x0157, 0x0001, 0x0204, 0x0113, 0x0237, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0237, 0x0102, 0x0226, 0x0113, 0x0215, 0x0157, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0237, 0x0157, 0x0102, 0x0045, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0157, 0x0023, 0x0237, 0x0045, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0001, 0x0204, 0x0113, 0x0023, 0x0237, 0x0045, 0x0215, 0x0157, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0237, 0x0215, 0x0157, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0113, 0x0157, 0x0204, 0x0226, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0157, 0x0045, 0x0113, 0x0023, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0226, 0x0023, 0x0204, 0x0045, 0x0215, 0x0157, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0045, 0x0023, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0157, 0x0045, 0x0102, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0157, 0x0045, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0045, 0x0001, 0x0204, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0157, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0146, 0x0226, 0x0215, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0146, 0x0204, 0x0215, 0x0001, 0x0226, 0x0237, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0226, 0x0237, 0x0045, 0x0001, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0237, 0x0113, 0x0226, 0x0146, 0x0204, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0237, 0x0215, 0x0146, 0x0102, 0x0045, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0023, 0x0237, 0x0001, 0x0204, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0045, 0x0146, 0x0001, 0x0113, 0x0023, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0237, 0x0204, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0146, 0x0226, 0x0215, 0x0023, 0x0113, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0001, 0x0113, 0x0204, 0x0045, 0x0146, 0x0023, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000],
    [0x0226, 0x0045, 0x0146, 0x0023, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0204, 0x0045, 0x0146, 0x0102, 0x0226, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0113, 0x0215, 0x0146, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0215, 0x0204, 0x0045, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0102, 0x0001, 0x0146, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0045, 0x0146, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0204, 0x0237, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0215, 0x0001, 0x0226, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0237, 0x0113, 0x0204, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0237, 0x0113, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0023, 0x0204, 0x0102, 0x0237, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0215, 0x0023, 0x0237, 0x0001, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0102, 0x0113, 0x0023, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0023, 0x0237, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0226, 0x0023, 0x0215, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0215, 0x0001, 0x0023, 0x0102, 0x0226, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0226, 0x0023, 0x0204, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0102, 0x0226, 0x0023, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0113, 0x0204, 0x0102, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0113, 0x0215, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0001, 0x0204, 0x0102, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
    [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_cases_are_empty() {
        assert_eq!(REGULAR_CELL_DATA[REGULAR_CELL_CLASS[0] as usize].triangle_count(), 0);
        assert_eq!(REGULAR_CELL_DATA[REGULAR_CELL_CLASS[255] as usize].triangle_count(), 0);
    }

    #[test]
    fn test_vertex_codes_are_cell_edges() {
        for case in 1..255 {
            let data = &REGULAR_CELL_DATA[REGULAR_CELL_CLASS[case] as usize];
            assert!(data.triangle_count() > 0, "case {} has no triangles", case);

            for &code in &REGULAR_VERTEX_DATA[case][..data.vertex_count()] {
                let (a, b) = edge_corners(code);
                assert!(a < b && b < 8);
                let diff = a ^ b;
                assert_eq!(diff.count_ones(), 1, "case {} edge {:#06x}", case, code);
                assert_eq!(1 << (code >> 8), diff);
                // The edge must cross the surface
                assert_ne!(case >> a & 1, case >> b & 1);
            }
            for &index in data.indices() {
                assert!((index as usize) < data.vertex_count());
            }
        }
    }

    #[test]
    fn test_single_corner_faces_outward() {
        // Only corner 0 positive: the triangle normal points toward corner 0
        let data = &REGULAR_CELL_DATA[REGULAR_CELL_CLASS[1] as usize];
        let vertex = |i: u8| {
            let (a, b) = edge_corners(REGULAR_VERTEX_DATA[1][i as usize]);
            (corner_offset(a).as_vec3() + corner_offset(b).as_vec3()) * 0.5
        };
        let tri = data.indices();
        let (a, b, c) = (vertex(tri[0]), vertex(tri[1]), vertex(tri[2]));
        let normal = (b - a).cross(c - a);
        assert!(normal.dot(glam::Vec3::splat(-1.0)) > 0.0);
    }
}
