use serde::{Deserialize, Serialize};

use crate::spatial::world::{Obstacle, World};

use super::params::PhysicsParams;

/// Built-in layout: ground floor, then platforms 1-4 and the top platform.
pub const DEFAULT_LAYOUT: [(i32, i32); 33] = [
    // Ground floor
    (0, 560), (40, 560), (80, 560), (120, 560), (160, 560), (200, 560), (240, 560), (280, 560),
    (320, 560), (360, 560), (400, 560), (440, 560), (480, 560), (520, 560), (560, 560), (600, 560),
    (640, 560), (680, 560), (720, 560), (760, 560),
    // Platform 1
    (200, 480), (240, 480), (280, 480),
    // Platform 2
    (400, 400), (440, 400),
    // Platform 3
    (600, 320), (640, 320), (680, 320),
    // Platform 4
    (100, 360), (140, 360),
    // Top platform
    (500, 240), (540, 240), (580, 240),
];

pub const DEFAULT_LEVEL_NAME: &str = "default";

/// On-disk / over-the-wire level description.
///
/// ```json
/// {
///   "name": "tutorial",
///   "params": { "gravity": 0.4 },
///   "obstacles": [{ "x": 0, "y": 560 }],
///   "rows": ["....", "##.."]
/// }
/// ```
///
/// `rows` is a tile map: `#` is a cell at `(col * block, row * block)`,
/// `.` and space are empty. Tiles are appended row-major after `obstacles`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LevelBundle {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub params: Option<PhysicsParams>,
    #[serde(default)]
    pub obstacles: Option<Vec<Obstacle>>,
    #[serde(default)]
    pub rows: Option<Vec<String>>,
}

/// A validated level: tuning plus the immutable world it applies to.
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    pub params: PhysicsParams,
    pub world: World,
}

impl Level {
    pub fn default_level() -> Self {
        Self {
            name: DEFAULT_LEVEL_NAME.to_string(),
            params: PhysicsParams::default(),
            world: DEFAULT_LAYOUT
                .iter()
                .map(|&(x, y)| Obstacle::new(x, y))
                .collect(),
        }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: LevelBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn from_bundle(bundle: LevelBundle) -> Result<Self, String> {
        if bundle.obstacles.is_none() && bundle.rows.is_none() {
            return Err("level bundle needs `obstacles` or `rows`".to_string());
        }

        let params = bundle.params.unwrap_or_default();
        params.validate()?;

        let mut obstacles = bundle.obstacles.unwrap_or_default();
        if let Some(rows) = bundle.rows.as_deref() {
            parse_rows(rows, params.block_size, &mut obstacles)?;
        }

        Ok(Self {
            name: bundle.name.unwrap_or_else(|| DEFAULT_LEVEL_NAME.to_string()),
            params,
            world: World::new(obstacles),
        })
    }

    pub fn manifest_json(&self) -> String {
        let manifest = LevelManifest {
            name: &self.name,
            obstacle_count: self.world.len(),
            params: &self.params,
        };
        // Plain struct of strings and numbers; serialization can't fail.
        serde_json::to_string(&manifest).unwrap_or_default()
    }
}

#[derive(Serialize)]
struct LevelManifest<'a> {
    name: &'a str,
    obstacle_count: usize,
    params: &'a PhysicsParams,
}

/// Top-left corner of the tile at `(row, col)`, or an error if it falls
/// outside the i32 coordinate range.
fn tile_cell(row: usize, col: usize, block: i32) -> Result<Obstacle, String> {
    let scale = |index: usize| {
        i32::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(block))
    };
    match (scale(col), scale(row)) {
        (Some(x), Some(y)) => Ok(Obstacle::new(x, y)),
        _ => Err(format!(
            "row {}: tile at column {} is out of range for block_size {}",
            row, col, block
        )),
    }
}

fn parse_rows(rows: &[String], block: i32, out: &mut Vec<Obstacle>) -> Result<(), String> {
    for (row, line) in rows.iter().enumerate() {
        for (col, tile) in line.chars().enumerate() {
            match tile {
                '#' => out.push(tile_cell(row, col, block)?),
                '.' | ' ' => {}
                other => {
                    return Err(format!(
                        "row {}: unknown tile {:?} at column {}",
                        row, other, col
                    ))
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_matches_builtin_layout() {
        let level = Level::default_level();
        assert_eq!(level.world.len(), 33);
        assert_eq!(level.world.obstacles()[0], Obstacle::new(0, 560));
        assert_eq!(level.world.obstacles()[19], Obstacle::new(760, 560));
        assert_eq!(level.world.obstacles()[32], Obstacle::new(580, 240));
        assert_eq!(level.params, PhysicsParams::default());
    }

    #[test]
    fn rows_follow_explicit_obstacles() {
        let json = r##"{
            "name": "mixed",
            "obstacles": [{ "x": 400, "y": 0 }],
            "rows": ["#..", ".##"]
        }"##;
        let level = Level::from_bundle_json(json).unwrap();

        assert_eq!(level.name, "mixed");
        assert_eq!(
            level.world.obstacles(),
            &[
                Obstacle::new(400, 0),
                Obstacle::new(0, 0),
                Obstacle::new(40, 40),
                Obstacle::new(80, 40),
            ]
        );
    }

    #[test]
    fn rows_use_bundle_block_size() {
        let json = r#"{ "params": { "block_size": 16 }, "rows": ["", " #"] }"#;
        let level = Level::from_bundle_json(json).unwrap();
        assert_eq!(level.world.obstacles(), &[Obstacle::new(16, 16)]);
        assert_eq!(level.name, DEFAULT_LEVEL_NAME);
    }

    #[test]
    fn rejects_unknown_tiles() {
        let err = Level::from_bundle_json(r#"{ "rows": ["..", ".X"] }"#).unwrap_err();
        assert!(err.contains("row 1"), "{}", err);
        assert!(err.contains("'X'"), "{}", err);
    }

    #[test]
    fn rejects_tiles_past_coordinate_range() {
        let json = r##"{ "params": { "block_size": 1073741824 }, "rows": ["..#"] }"##;
        let err = Level::from_bundle_json(json).unwrap_err();
        assert!(err.contains("out of range"), "{}", err);

        // Column 1 still fits.
        let json = r##"{ "params": { "block_size": 1073741824 }, "rows": [".#"] }"##;
        let level = Level::from_bundle_json(json).unwrap();
        assert_eq!(level.world.obstacles(), &[Obstacle::new(1073741824, 0)]);
    }

    #[test]
    fn rejects_bundle_without_geometry() {
        assert!(Level::from_bundle_json(r#"{ "name": "void" }"#).is_err());
    }

    #[test]
    fn rejects_invalid_params_and_bad_json() {
        assert!(Level::from_bundle_json(r#"{ "params": { "block_size": 0 }, "rows": [] }"#).is_err());
        assert!(Level::from_bundle_json("{ not json").is_err());
    }

    #[test]
    fn manifest_reports_counts() {
        let manifest = Level::default_level().manifest_json();
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["name"], "default");
        assert_eq!(value["obstacle_count"], 33);
        assert_eq!(value["params"]["block_size"], 40);
    }
}
