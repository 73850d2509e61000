use super::keys;
use crate::types::{Color, Metatile, Metatiles, Tiles};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Map, Value};

/// Builds the JSON object of a metatile set. Tile and absent ranges are written in ascending order.
pub fn metatiles_to_value(set: &Metatiles) -> Value {
	let tiles: Map<String, Value> = set
		.refs
		.iter()
		.map(|r| (r.range.to_string(), Value::from(r.reference_string())))
		.collect();

	let absent: Vec<Value> = set.absent_tiles.iter().map(|r| Value::from(r.to_string())).collect();
	let metatiles: Vec<Value> = set.metatiles.iter().map(metatile_to_value).collect();

	let mut object = Map::new();
	object.insert(keys::TYPE.into(), keys::TYPE_METATILE_DATA.into());
	object.insert(keys::TILES.into(), Value::Object(tiles));
	object.insert(keys::ABSENT_TILES.into(), Value::Array(absent));
	object.insert(keys::METATILES.into(), Value::Array(metatiles));
	object.insert(keys::PALETTE.into(), palette_to_value(&set.palette));
	Value::Object(object)
}

fn metatile_to_value(metatile: &Metatile) -> Value {
	let corners = [
		(keys::TOP_LEFT, metatile.top_left),
		(keys::TOP_RIGHT, metatile.top_right),
		(keys::BOTTOM_LEFT, metatile.bottom_left),
		(keys::BOTTOM_RIGHT, metatile.bottom_right),
	];
	Value::Object(
		corners
			.into_iter()
			.map(|(key, index)| (key.to_string(), Value::from(format!("{index:x}"))))
			.collect(),
	)
}

/// Builds the JSON object of a plain tile sheet, each tile as base64 of its 64 pixel indices.
pub fn tiles_to_value(tiles: &Tiles) -> Value {
	let encoded: Vec<Value> = tiles.tiles.iter().map(|tile| Value::from(STANDARD.encode(tile))).collect();

	let mut object = Map::new();
	object.insert(keys::TYPE.into(), keys::TYPE_TILE_DATA.into());
	object.insert(keys::TILES.into(), Value::Array(encoded));
	object.insert(keys::PALETTE.into(), palette_to_value(&tiles.palette));
	Value::Object(object)
}

fn palette_to_value(palette: &[Color]) -> Value {
	Value::Array(palette.iter().map(|c| Value::from(c.to_string())).collect())
}

/// Pretty printed, with a trailing newline.
pub fn to_pretty_string(value: &Value) -> String {
	format!("{value:#}\n")
}
