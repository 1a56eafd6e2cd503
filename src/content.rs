// SPDX-License-Identifier: MPL-2.0
//! Content store: the build-time-fixed portfolio catalog.
//!
//! All text and image assets are embedded in the binary. [`Catalog::load`]
//! decodes the embedded images once into Iced handles; the page shell runs it
//! on the blocking pool at startup so the UI thread never decodes pixels.
//! Records are immutable after loading and photo identity is array position,
//! which is sound only because the series is fixed at build time.

use crate::error::{Error, Result};
use iced::widget::image;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/media/"]
struct MediaAsset;

/// A decoded embedded image ready for display.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl Bitmap {
    /// Decodes an embedded media asset into an RGBA image handle.
    fn decode(asset: &'static str) -> Result<Self> {
        let file = MediaAsset::get(asset)
            .ok_or_else(|| Error::Image(format!("missing embedded asset: {asset}")))?;
        let decoded = image_rs::load_from_memory(file.data.as_ref())
            .map_err(|err| Error::Image(format!("{asset}: {err}")))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();

        Ok(Self {
            handle: image::Handle::from_rgba(width, height, decoded.into_raw()),
            width,
            height,
        })
    }
}

/// A single photo of the photography series.
///
/// `description` is `None` when the piece has no blurb; the lightbox must
/// omit the description block entirely in that case.
#[derive(Debug, Clone)]
pub struct Photo {
    pub bitmap: Bitmap,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

/// The ordered photo series. Order is the lightbox navigation order.
#[derive(Debug, Clone)]
pub struct PhotoSeries {
    pub title: &'static str,
    pub idea: &'static str,
    pub photos: Vec<Photo>,
}

impl PhotoSeries {
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Game-project showcase: a poster frame and the demo caption.
#[derive(Debug, Clone)]
pub struct GameWork {
    pub poster: Bitmap,
    pub caption: &'static str,
}

/// A game sprite with a short label.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub bitmap: Bitmap,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

/// The baking showcase entry.
#[derive(Debug, Clone)]
pub struct Baking {
    pub bitmap: Bitmap,
    pub blurb: &'static str,
}

/// Author profile shown in the header and the about section.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub headshot: Bitmap,
}

struct PhotoSpec {
    asset: &'static str,
    title: &'static str,
    description: Option<&'static str>,
}

struct SpriteSpec {
    asset: &'static str,
    title: &'static str,
    description: Option<&'static str>,
}

const SERIES_TITLE: &str = "Electric Food";

const SERIES_IDEA: &str = "One day, as I ate and scrolled through my phone, I realized I was \
being fed twice. Once by the meal in front of me, and once by the endless stream of digital \
information. This series grows out of that moment. A steak with wired rosemary, a banana bound \
in cables, grapes shaped into lungs. Each piece reimagines nourishment through the lens of \
technology. For me, it is about exploring the strange balance between what sustains our bodies \
and what sustains our digital lives.";

const PHOTO_SPECS: [PhotoSpec; 8] = [
    PhotoSpec {
        asset: "photos/beef.png",
        title: "Stake & Rosemary Circuit",
        description: Some("A steak plated with wired rosemary."),
    },
    PhotoSpec {
        asset: "photos/carrot.png",
        title: "Carrot Clock",
        description: None,
    },
    PhotoSpec {
        asset: "photos/lemonade.png",
        title: "High Voltage Lemonade",
        description: None,
    },
    PhotoSpec {
        asset: "photos/banana.png",
        title: "\"The $120000 Banana\"",
        description: Some("A banana bound in cables."),
    },
    PhotoSpec {
        asset: "photos/apple.png",
        title: "Fruit Spectrum",
        description: None,
    },
    PhotoSpec {
        asset: "photos/blueberry.png",
        title: "Blue Electroberry",
        description: None,
    },
    PhotoSpec {
        asset: "photos/grape.png",
        title: "Grape Lungs",
        description: Some("Grapes shaped into a pair of lungs."),
    },
    PhotoSpec {
        asset: "photos/oreo.png",
        title: "Binary Oreos",
        description: None,
    },
];

const GAME_CAPTION: &str = "Quickly go over the part of the game where the player gathers \
resources (picking berries, chopping trees, and mining stone) and follows the butterfly guide \
into the dungeon to fight against the boss.";

const SPRITE_SPECS: [SpriteSpec; 4] = [
    SpriteSpec {
        asset: "sprites/signal.png",
        title: "Signal",
        description: None,
    },
    SpriteSpec {
        asset: "sprites/tower.png",
        title: "Tower (Repaired & Broken)",
        description: None,
    },
    SpriteSpec {
        asset: "sprites/butterfly.png",
        title: "Butterfly Guide",
        description: None,
    },
    SpriteSpec {
        asset: "sprites/blueprint.png",
        title: "Blue Print",
        description: None,
    },
];

const BAKING_BLURB: &str = "Here is the most recent gift (six flavor biscuits) I made for my \
neighbor and new friends when I moved to Providence.";

/// The whole portfolio, decoded and ready to render.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub photography: PhotoSeries,
    pub game: GameWork,
    pub sprites: Vec<Sprite>,
    pub baking: Baking,
}

impl Catalog {
    /// Decodes every embedded asset into the full catalog.
    ///
    /// This is blocking work; callers on the UI thread should run it through
    /// `Task::perform` + `spawn_blocking`.
    pub fn load() -> Result<Self> {
        let photos = PHOTO_SPECS
            .iter()
            .map(|spec| {
                Ok(Photo {
                    bitmap: Bitmap::decode(spec.asset)?,
                    title: spec.title,
                    description: spec.description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let sprites = SPRITE_SPECS
            .iter()
            .map(|spec| {
                Ok(Sprite {
                    bitmap: Bitmap::decode(spec.asset)?,
                    title: spec.title,
                    description: spec.description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            profile: Profile {
                name: "Zihui (Aurora) Weng",
                role: "Indie Game Developer",
                bio: "I'm an indie game developer (in progress)",
                headshot: Bitmap::decode("profile/me.png")?,
            },
            photography: PhotoSeries {
                title: SERIES_TITLE,
                idea: SERIES_IDEA,
                photos,
            },
            game: GameWork {
                poster: Bitmap::decode("game/tower.png")?,
                caption: GAME_CAPTION,
            },
            sprites,
            baking: Baking {
                bitmap: Bitmap::decode("baking/biscuits.png")?,
                blurb: BAKING_BLURB,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_all_embedded_assets() {
        let catalog = Catalog::load().expect("catalog should decode");

        assert_eq!(catalog.photography.len(), 8);
        assert_eq!(catalog.sprites.len(), 4);
        assert!(!catalog.photography.is_empty());
        assert_eq!(catalog.profile.name, "Zihui (Aurora) Weng");
    }

    #[test]
    fn photo_order_matches_the_series() {
        let catalog = Catalog::load().expect("catalog should decode");
        let titles: Vec<_> = catalog
            .photography
            .photos
            .iter()
            .map(|photo| photo.title)
            .collect();

        assert_eq!(titles[0], "Stake & Rosemary Circuit");
        assert_eq!(titles[7], "Binary Oreos");
    }

    #[test]
    fn descriptions_are_none_when_absent() {
        let catalog = Catalog::load().expect("catalog should decode");

        assert!(catalog.photography.photos[0].description.is_some());
        assert!(catalog.photography.photos[1].description.is_none());
    }

    #[test]
    fn decoded_bitmaps_have_dimensions() {
        let bitmap = Bitmap::decode("profile/me.png").expect("headshot should decode");
        assert!(bitmap.width > 0);
        assert!(bitmap.height > 0);
    }

    #[test]
    fn missing_asset_is_an_error() {
        let result = Bitmap::decode("photos/nope.png");
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
