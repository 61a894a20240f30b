/// Geometry descriptor and vertex attribute layout

use crate::error::{Error, Result};

/// Descriptor for an immutable piece of geometry
///
/// `vertices` is a flat sequence of (x, y, z) positions; its length must be
/// a multiple of 3. `indices`, if present, names three vertex offsets per
/// triangle and every offset must be `< vertex_count`. Triangle winding
/// determines the front face but is not validated.
///
/// The data is uploaded verbatim with a write-once usage hint and never
/// changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct GeometryDesc<'a> {
    /// Flat (x, y, z) vertex positions
    pub vertices: &'a [f32],
    /// Optional triangle triples indexing into `vertices`
    pub indices: Option<&'a [[u32; 3]]>,
}

impl GeometryDesc<'_> {
    /// Number of vertices described (position triples)
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Number of indices described (3 per triangle), 0 when non-indexed
    pub fn index_count(&self) -> u32 {
        self.indices.map_or(0, |triangles| (triangles.len() * 3) as u32)
    }

    /// Check the descriptor invariants
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGeometry` if the vertex data is empty or not a
    /// multiple of 3, or if the index data is present but empty or references
    /// a vertex offset out of range.
    pub fn validate(&self) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(Error::InvalidGeometry("vertex data is empty".to_string()));
        }
        if self.vertices.len() % 3 != 0 {
            return Err(Error::InvalidGeometry(format!(
                "vertex data length {} is not a multiple of 3",
                self.vertices.len()
            )));
        }
        if let Some(triangles) = self.indices {
            if triangles.is_empty() {
                return Err(Error::InvalidGeometry("index data is empty".to_string()));
            }
            let vertex_count = self.vertex_count();
            for triangle in triangles {
                for &index in triangle {
                    if index >= vertex_count {
                        return Err(Error::InvalidGeometry(format!(
                            "index {} out of range (vertex count = {})",
                            index, vertex_count
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Vertex attribute layout declared at geometry creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Attribute slot
    pub location: u32,
    /// Floating-point components per vertex
    pub components: u32,
    /// Bytes between consecutive vertices
    pub stride: u32,
    /// Byte offset of the attribute within a vertex
    pub offset: u32,
}

/// The one layout this renderer uses: slot 0, 3 floats, tightly packed,
/// zero offset
pub const POSITION_LAYOUT: VertexLayout = VertexLayout {
    location: 0,
    components: 3,
    stride: (3 * std::mem::size_of::<f32>()) as u32,
    offset: 0,
};

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
