//! Wrapper types shared across the workspace.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::math::Vector3;

/// An integer block position in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// The position one block above this one.
    #[must_use]
    pub const fn up(&self) -> Self {
        Self::new(self.0.x, self.0.y + 1, self.0.z)
    }

    /// The position one block below this one.
    #[must_use]
    pub const fn down(&self) -> Self {
        Self::new(self.0.x, self.0.y - 1, self.0.z)
    }

    /// The position offset by the given deltas.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}

/// A namespaced identifier, used here as the key for worlds/dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    /// The namespace part, e.g. `minecraft`.
    pub namespace: Cow<'static, str>,
    /// The path part, e.g. `overworld`.
    pub path: Cow<'static, str>,
}

impl ResourceLocation {
    /// The namespace used for vanilla content.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates a vanilla-namespaced location from an owned path.
    #[must_use]
    pub fn vanilla(path: String) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Owned(path),
        }
    }

    /// Creates a vanilla-namespaced location from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    fn valid_segment(segment: &str, allow_slash: bool) -> bool {
        segment.chars().all(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '_'
                || c == '-'
                || c == '.'
                || (allow_slash && c == '/')
        })
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, path)) = s.split_once(':') else {
            return Err(format!("Invalid resource location: {s}"));
        };

        if !Self::valid_segment(namespace, false) {
            return Err(format!("Invalid namespace: {namespace}"));
        }
        if !Self::valid_segment(path, true) {
            return Err(format!("Invalid path: {path}"));
        }

        Ok(Self {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_pos_neighbours() {
        let pos = BlockPos::new(5, 70, -5);
        assert_eq!(pos.up(), BlockPos::new(5, 71, -5));
        assert_eq!(pos.down(), BlockPos::new(5, 69, -5));
        assert_eq!(pos.offset(-1, 2, 3), BlockPos::new(4, 72, -2));
    }

    #[test]
    fn resource_location_round_trip() {
        let loc: ResourceLocation = "minecraft:the_nether".parse().expect("valid location");
        assert_eq!(loc, ResourceLocation::vanilla_static("the_nether"));
        assert_eq!(loc.to_string(), "minecraft:the_nether");
    }

    #[test]
    fn resource_location_rejects_bad_chars() {
        assert!("Minecraft:overworld".parse::<ResourceLocation>().is_err());
        assert!("minecraft overworld".parse::<ResourceLocation>().is_err());
    }
}
