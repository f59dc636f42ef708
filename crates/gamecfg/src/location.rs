//! Placed scene objects.

use glam::IVec3;

use crate::model::Model;

/// Handle to an animated entity owned by some external table.
///
/// A location only refers to the entity; it never keeps it alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u32);

/// Everything needed to place a location.
#[derive(Debug, Clone, Default)]
pub struct LocationParams {
    pub level: i32,
    /// Height in world units.
    pub y: i32,
    pub x: i32,
    pub z: i32,
    pub model: Option<Model>,
    pub entity: Option<EntityHandle>,
    pub yaw: i32,
    pub min_tile_x: i32,
    pub max_tile_x: i32,
    pub min_tile_z: i32,
    pub max_tile_z: i32,
    pub type_code: i32,
    pub info: u8,
}

/// A scene object placed on the map.
///
/// The placement is fixed at construction. `distance` and `cycle` are
/// per-frame scratch written by the renderer and are not part of the
/// location's identity, so equality ignores them.
#[derive(Debug, Clone)]
pub struct Location {
    level: i32,
    y: i32,
    x: i32,
    z: i32,
    model: Option<Model>,
    entity: Option<EntityHandle>,
    yaw: i32,
    min_tile_x: i32,
    max_tile_x: i32,
    min_tile_z: i32,
    max_tile_z: i32,
    type_code: i32,
    info: u8,

    /// Distance from the camera, recomputed every frame.
    pub distance: i32,
    /// Frame number this location was last drawn on.
    pub cycle: i32,
}

impl Location {
    #[must_use]
    pub fn new(params: LocationParams) -> Self {
        let LocationParams {
            level,
            y,
            x,
            z,
            model,
            entity,
            yaw,
            min_tile_x,
            max_tile_x,
            min_tile_z,
            max_tile_z,
            type_code,
            info,
        } = params;
        Self {
            level,
            y,
            x,
            z,
            model,
            entity,
            yaw,
            min_tile_x,
            max_tile_x,
            min_tile_z,
            max_tile_z,
            type_code,
            info,
            distance: 0,
            cycle: 0,
        }
    }

    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn z(&self) -> i32 {
        self.z
    }

    /// World position as `(x, y, z)` with `y` up.
    #[must_use]
    pub fn position(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    #[must_use]
    pub fn entity(&self) -> Option<EntityHandle> {
        self.entity
    }

    #[must_use]
    pub fn yaw(&self) -> i32 {
        self.yaw
    }

    #[must_use]
    pub fn min_tile_x(&self) -> i32 {
        self.min_tile_x
    }

    #[must_use]
    pub fn max_tile_x(&self) -> i32 {
        self.max_tile_x
    }

    #[must_use]
    pub fn min_tile_z(&self) -> i32 {
        self.min_tile_z
    }

    #[must_use]
    pub fn max_tile_z(&self) -> i32 {
        self.max_tile_z
    }

    #[must_use]
    pub fn type_code(&self) -> i32 {
        self.type_code
    }

    #[must_use]
    pub fn info(&self) -> u8 {
        self.info
    }

    /// Shape id packed in the low five bits of `info`.
    #[must_use]
    pub fn shape(&self) -> u8 {
        self.info & 0x1f
    }

    /// Quarter-turn rotation packed in bits 6-7 of `info`.
    #[must_use]
    pub fn rotation(&self) -> u8 {
        (self.info >> 6) & 0x3
    }

    /// Whether the scene-local tile lies inside this location's tile range.
    #[must_use]
    pub fn occupies(&self, tile_x: i32, tile_z: i32) -> bool {
        (self.min_tile_x..=self.max_tile_x).contains(&tile_x)
            && (self.min_tile_z..=self.max_tile_z).contains(&tile_z)
    }

    /// Width and length of the tile range, in tiles.
    #[must_use]
    pub fn footprint(&self) -> (i64, i64) {
        (
            i64::from(self.max_tile_x) - i64::from(self.min_tile_x) + 1,
            i64::from(self.max_tile_z) - i64::from(self.min_tile_z) + 1,
        )
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
            && self.y == other.y
            && self.x == other.x
            && self.z == other.z
            && self.model == other.model
            && self.entity == other.entity
            && self.yaw == other.yaw
            && self.min_tile_x == other.min_tile_x
            && self.max_tile_x == other.max_tile_x
            && self.min_tile_z == other.min_tile_z
            && self.max_tile_z == other.max_tile_z
            && self.type_code == other.type_code
            && self.info == other.info
    }
}

impl Eq for Location {}
