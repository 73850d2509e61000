pub const TYPE: &str = "type";
pub const TILES: &str = "tiles";
pub const ABSENT_TILES: &str = "absent_tiles";
pub const METATILES: &str = "metatiles";
pub const PALETTE: &str = "palette";

pub const TOP_LEFT: &str = "tl";
pub const TOP_RIGHT: &str = "tr";
pub const BOTTOM_LEFT: &str = "bl";
pub const BOTTOM_RIGHT: &str = "br";

pub const TYPE_METATILE_DATA: &str = "metatile_data";
pub const TYPE_TILE_DATA: &str = "tile_data";
