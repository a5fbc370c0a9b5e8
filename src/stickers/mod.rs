// SPDX-License-Identifier: MPL-2.0
//! The sticker catalog: a fixed, closed set of emoji overlays bundled with
//! the binary as SVG artwork.
//!
//! The catalog is static; there is no filtering, search, or pagination.
//! Stickers are referenced everywhere else by [`StickerId`], which indexes
//! into [`CATALOG`].

/// Opaque handle for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerId(usize);

/// One overlay image in the catalog.
#[derive(Debug)]
pub struct Sticker {
    pub name: &'static str,
    svg: &'static [u8],
}

impl Sticker {
    /// Raw SVG bytes, suitable for both the Iced svg widget and resvg.
    pub fn svg_bytes(&self) -> &'static [u8] {
        self.svg
    }
}

pub const CATALOG: &[Sticker] = &[
    Sticker {
        name: "smile",
        svg: include_bytes!("../../assets/stickers/smile.svg"),
    },
    Sticker {
        name: "sunglasses",
        svg: include_bytes!("../../assets/stickers/sunglasses.svg"),
    },
    Sticker {
        name: "heart",
        svg: include_bytes!("../../assets/stickers/heart.svg"),
    },
    Sticker {
        name: "star",
        svg: include_bytes!("../../assets/stickers/star.svg"),
    },
    Sticker {
        name: "thumbs-up",
        svg: include_bytes!("../../assets/stickers/thumbs-up.svg"),
    },
    Sticker {
        name: "party",
        svg: include_bytes!("../../assets/stickers/party.svg"),
    },
];

/// Enumerates the catalog as `(id, sticker)` pairs for the picker UI.
pub fn catalog() -> impl Iterator<Item = (StickerId, &'static Sticker)> {
    CATALOG.iter().enumerate().map(|(i, s)| (StickerId(i), s))
}

/// Looks up a catalog entry by id.
pub fn get(id: StickerId) -> &'static Sticker {
    // StickerId is only ever minted by `catalog()`, so the index is valid.
    &CATALOG[id.0]
}

/// The background artwork shown while no photo is selected.
pub fn placeholder_svg() -> &'static [u8] {
    include_bytes!("../../assets/branding/placeholder.svg")
}
