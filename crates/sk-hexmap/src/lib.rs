//! Hex maps for sektor sectors.
//!
//! A map is built in two steps. Every coordinate of the grid is stamped with
//! an empty hexagon carrying its `RR,CC` label, then each star system's name
//! (and, for the GM, its primary world's tags and tech level) is centred
//! below its label. Odd columns sit half a hex lower than even ones, and
//! neighbouring columns share their slanted walls.
//!
//! ```
//! use sk_core::Sector;
//! use sk_hexmap::render_hex_map;
//!
//! let sector = Sector::from_systems(2, 2, vec![]).unwrap();
//! let map = render_hex_map(&sector, false, false);
//! assert!(map.contains("00,00"));
//! ```

pub mod canvas;
pub mod map;
pub mod palette;
pub mod template;

pub use canvas::{Canvas, Cell};
pub use map::{HexMap, render_hex_map};
pub use palette::tech_level_color;
pub use template::HexCellTemplate;
