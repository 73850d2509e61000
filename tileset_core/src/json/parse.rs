use super::keys;
use crate::{
	constants::{DEFAULT_PALETTE, PIXELS_PER_TILE},
	error::{Result, TilesetError},
	types::{Color, IndexRange, Metatile, Metatiles, TileData, TileRef, Tiles, check_palette},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Map, Value};
use std::path::Path;

/// Either of the two JSON forms.
#[derive(Clone, Debug)]
pub enum JsonDocument {
	Metatiles(Metatiles),
	Tiles(Tiles),
}

/// Parses a JSON document, telling the forms apart by their `type` member.
/// Documents without `type` are read as metatile data.
pub fn parse_document(text: &str, path: &Path) -> Result<JsonDocument> {
	let object = parse_object(text, path)?;
	match document_type(&object, path)? {
		Some(keys::TYPE_TILE_DATA) => Ok(JsonDocument::Tiles(tiles_from_object(&object, path)?)),
		_ => Ok(JsonDocument::Metatiles(metatiles_from_object(&object, path)?)),
	}
}

/// Parses the metatile form. Broken records are logged and skipped.
pub fn parse_metatiles(text: &str, path: &Path) -> Result<Metatiles> {
	let object = parse_object(text, path)?;
	match document_type(&object, path)? {
		None | Some(keys::TYPE_METATILE_DATA) => metatiles_from_object(&object, path),
		Some(other) => Err(TilesetError::decode(path, format!("expected metatile data, found {other:?}"))),
	}
}

/// Parses the tile form. Tiles that do not decode to 64 pixel indices are logged and skipped.
pub fn parse_tiles(text: &str, path: &Path) -> Result<Tiles> {
	let object = parse_object(text, path)?;
	match document_type(&object, path)? {
		Some(keys::TYPE_TILE_DATA) => tiles_from_object(&object, path),
		other => Err(TilesetError::decode(path, format!("expected tile data, found {other:?}"))),
	}
}

fn parse_object(text: &str, path: &Path) -> Result<Map<String, Value>> {
	match serde_json::from_str::<Value>(text) {
		Ok(Value::Object(object)) => Ok(object),
		Ok(_) => Err(TilesetError::decode(path, "top level value is not an object")),
		Err(err) => Err(TilesetError::decode(path, err)),
	}
}

fn document_type<'a>(object: &'a Map<String, Value>, path: &Path) -> Result<Option<&'a str>> {
	match object.get(keys::TYPE) {
		None => Ok(None),
		Some(Value::String(kind)) => Ok(Some(kind.as_str())),
		Some(other) => Err(TilesetError::decode(path, format!("invalid type {other}"))),
	}
}

fn metatiles_from_object(object: &Map<String, Value>, path: &Path) -> Result<Metatiles> {
	let mut set = Metatiles::new(parse_palette(object.get(keys::PALETTE), path)?)?;

	for (range, reference) in members(object, keys::TILES, path) {
		let tile_ref = reference
			.as_str()
			.ok_or_else(|| TilesetError::decode(path, format!("reference for {range:?} is not a string")))
			.and_then(|reference| TileRef::parse(range, reference));
		match tile_ref {
			Ok(tile_ref) => match set.refs.overlapping(tile_ref.range) {
				Some(existing) => log::warn!("{path:?}: skipping {tile_ref:?}, it overlaps {existing:?}"),
				None => set.refs.insert(tile_ref),
			},
			Err(err) => log::warn!("{path:?}: skipping tile reference: {err}"),
		}
	}

	for entry in elements(object, keys::ABSENT_TILES, path) {
		let range = entry
			.as_str()
			.ok_or_else(|| TilesetError::MalformedRange(entry.to_string()))
			.and_then(str::parse::<IndexRange>);
		match range {
			Ok(range) => set.absent_tiles.insert(range),
			Err(err) => log::warn!("{path:?}: skipping absent tiles entry: {err}"),
		}
	}

	for entry in elements(object, keys::METATILES, path) {
		match parse_metatile(entry) {
			Ok(metatile) => set.metatiles.push(metatile),
			Err(err) => log::warn!("{path:?}: skipping metatile: {err}"),
		}
	}

	Ok(set)
}

fn parse_metatile(entry: &Value) -> Result<Metatile> {
	let malformed = |reason: &str| TilesetError::MalformedMetatile(format!("{reason} in {entry}"));
	let object = entry.as_object().ok_or_else(|| malformed("not an object"))?;

	let corner = |key: &str| -> Result<u8> {
		let text = object
			.get(key)
			.and_then(Value::as_str)
			.ok_or_else(|| malformed(&format!("missing {key:?}")))?;
		u8::from_str_radix(text, 16).map_err(|_| malformed(&format!("invalid index {text:?}")))
	};

	Ok(Metatile::new(
		corner(keys::TOP_LEFT)?,
		corner(keys::TOP_RIGHT)?,
		corner(keys::BOTTOM_LEFT)?,
		corner(keys::BOTTOM_RIGHT)?,
	))
}

fn tiles_from_object(object: &Map<String, Value>, path: &Path) -> Result<Tiles> {
	let palette = parse_palette(object.get(keys::PALETTE), path)?;
	let mut tiles = Vec::new();

	for (position, entry) in elements(object, keys::TILES, path).enumerate() {
		match decode_tile(entry) {
			Ok(tile) => tiles.push(tile),
			Err(reason) => log::warn!("{path:?}: skipping tile {position}: {reason}"),
		}
	}

	Ok(Tiles { tiles, palette })
}

fn decode_tile(entry: &Value) -> std::result::Result<TileData, String> {
	let text = entry.as_str().ok_or("not a string")?;
	let bytes = STANDARD.decode(text).map_err(|err| err.to_string())?;
	let tile: TileData = bytes
		.try_into()
		.map_err(|bytes: Vec<u8>| format!("expected {PIXELS_PER_TILE} pixels, found {}", bytes.len()))?;
	if let Some(pixel) = tile.iter().find(|&&pixel| pixel > 3) {
		return Err(format!("pixel value {pixel} is not a palette index"));
	}
	Ok(tile)
}

/// Reads the palette member. A missing palette yields the default one; colours that do not
/// parse are replaced with black.
fn parse_palette(value: Option<&Value>, path: &Path) -> Result<Vec<Color>> {
	let Some(value) = value else {
		return Ok(DEFAULT_PALETTE.to_vec());
	};
	let entries = value
		.as_array()
		.ok_or_else(|| TilesetError::decode(path, "palette is not an array"))?;

	let palette: Vec<Color> = entries
		.iter()
		.map(|entry| match entry.as_str().map(str::parse::<Color>) {
			Some(Ok(color)) => color,
			_ => {
				log::warn!("{path:?}: invalid palette color {entry}, using black");
				Color::rgb(0, 0, 0)
			}
		})
		.collect();

	check_palette(&palette)?;
	Ok(palette)
}

fn members<'a>(object: &'a Map<String, Value>, key: &str, path: &Path) -> impl Iterator<Item = (&'a str, &'a Value)> {
	let members = match object.get(key) {
		Some(Value::Object(members)) => Some(members),
		None => None,
		Some(_) => {
			log::warn!("{path:?}: {key:?} is not an object, ignoring it");
			None
		}
	};
	members.into_iter().flatten().map(|(k, v)| (k.as_str(), v))
}

fn elements<'a>(object: &'a Map<String, Value>, key: &str, path: &Path) -> impl Iterator<Item = &'a Value> {
	let elements = match object.get(key) {
		Some(Value::Array(elements)) => Some(elements),
		None => None,
		Some(_) => {
			log::warn!("{path:?}: {key:?} is not an array, ignoring it");
			None
		}
	};
	elements.into_iter().flatten()
}
