//! The six cube faces and their content indices.

use glam::Vec3;

/// A face of the rotating cube.
///
/// The discriminant is the face index reported to the content layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    Right = 0,
    /// −X face
    Left = 1,
    /// +Y face
    Top = 2,
    /// −Y face
    Bottom = 3,
    /// +Z face, toward the viewer at rest
    Front = 4,
    /// −Z face
    Back = 5,
}

/// An integer that does not name a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("face index {0} is out of range 0-5")]
pub struct FaceIndexError(pub usize);

impl CubeFace {
    /// All six faces in index order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Front,
        CubeFace::Back,
    ];

    /// Face index 0-5.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for an index 0-5.
    pub fn from_index(index: usize) -> Result<CubeFace, FaceIndexError> {
        CubeFace::ALL
            .get(index)
            .copied()
            .ok_or(FaceIndexError(index))
    }

    /// Lowercase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::Right => "right",
            CubeFace::Left => "left",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
            CubeFace::Front => "front",
            CubeFace::Back => "back",
        }
    }

    /// The opposite face (e.g., `Right` → `Left`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::Right => CubeFace::Left,
            CubeFace::Left => CubeFace::Right,
            CubeFace::Top => CubeFace::Bottom,
            CubeFace::Bottom => CubeFace::Top,
            CubeFace::Front => CubeFace::Back,
            CubeFace::Back => CubeFace::Front,
        }
    }

    /// Outward-pointing unit normal in the body's local frame.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::Right => Vec3::X,
            CubeFace::Left => Vec3::NEG_X,
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
            CubeFace::Front => Vec3::Z,
            CubeFace::Back => Vec3::NEG_Z,
        }
    }
}

impl TryFrom<u8> for CubeFace {
    type Error = FaceIndexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CubeFace::from_index(usize::from(value))
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}
