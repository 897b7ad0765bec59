//! Static media catalog backing the work gallery and hero mosaic.
//!
//! Everything here is immutable data baked in at compile time. Asset paths
//! are opaque strings resolved by the asset layer (`public/assets`). An
//! unknown category id is a valid "nothing to show" state, not an error.

/// What kind of element a media item renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One image or video in a category's gallery. Display order of the
/// containing slice is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: &'static str,
    pub alt: Option<&'static str>,
}

impl MediaItem {
    pub const fn image(src: &'static str) -> Self {
        Self {
            kind: MediaKind::Image,
            src,
            alt: None,
        }
    }

    pub const fn video(src: &'static str) -> Self {
        Self {
            kind: MediaKind::Video,
            src,
            alt: None,
        }
    }

    pub const fn with_alt(mut self, alt: &'static str) -> Self {
        self.alt = Some(alt);
        self
    }
}

/// A clickable card in the work grid. `object_position` is a CSS crop
/// anchor for the cover image; `None` means centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
    pub cover: &'static str,
    pub object_position: Option<&'static str>,
}

pub static DIGITAL_WORKS: &[CategoryEntry] = &[
    CategoryEntry {
        id: "3d-modeling",
        title: "3D Modeling",
        tag: "Design & Printing",
        description: "Concept driven 3D work varying from visual renders to fully functional 3D printed prototypes.",
        cover: "/assets/3D_Modeling_Cover.PNG",
        object_position: None,
    },
    CategoryEntry {
        id: "digital-media",
        title: "Digital Media",
        tag: "Graphic Design",
        description: "Digital branding, logo development, and UI/UX design.",
        cover: "/assets/Digital_Media_Cover.jpg",
        object_position: None,
    },
    CategoryEntry {
        id: "camera-work",
        title: "Camera Work",
        tag: "Video & Photo Production",
        description: "A collection of my camera based projects, each focused on their specific atmosphere and story.",
        cover: "/assets/Camera_Work_Cover.JPG",
        object_position: None,
    },
];

// The object positions control framing of the cover photos.
pub static HANDMADE_WORKS: &[CategoryEntry] = &[
    CategoryEntry {
        id: "programming",
        title: "Programming",
        tag: "Interactive Hardware",
        description: "Hardware focused interactive work using microcontrollers and sensors.",
        cover: "/assets/Programming_Cover_Pic.jpg",
        object_position: Some("center 70%"),
    },
    CategoryEntry {
        id: "sculptures",
        title: "Sculptures",
        tag: "Physical Form",
        description: "Handmade sculptures exploring form, balance, and physical interaction.",
        cover: "/assets/Shyon_Sculpture.jpg",
        object_position: Some("center 45%"),
    },
    CategoryEntry {
        id: "3d-models",
        title: "3D Models",
        tag: "Fabrication",
        description: "3D printed model design and fabrication.",
        cover: "/assets/3D_Models_Cover_Pic.jpg",
        object_position: Some("center 80%"),
    },
];

static MODELING_MEDIA: &[MediaItem] = &[
    MediaItem::video("/assets/Broken_NPC.MP4").with_alt("Rendered scene depicting GTA in game errors"),
    MediaItem::video("/assets/Blender_Case_Video.mov").with_alt("Custom Apple product case prototypes"),
    MediaItem::image("/assets/Venom.PNG"),
];

static GRAPHIC_MEDIA: &[MediaItem] = &[
    MediaItem::image("/assets/Cover_Art.JPG"),
    MediaItem::image("/assets/Cover_Art_2.jpg"),
    MediaItem::video("/assets/Shiri_Video_Game.MP4"),
    MediaItem::video("/assets/Nabu_Poster_Banner.mov"),
];

static CAMERA_MEDIA: &[MediaItem] = &[
    MediaItem::video("/assets/NABU_PUFFER_AD.mp4"),
    MediaItem::video("/assets/NABU_SALE_AD.mp4"),
];

static PROGRAMMING_MEDIA: &[MediaItem] = &[
    MediaItem::image("/assets/New_Radar_Sensor_front.jpg"),
    MediaItem::image("/assets/New_Radar_Sensor_Back.jpg"),
    MediaItem::video("/assets/New_Radar_Sensor.mp4"),
    MediaItem::image("/assets/New_LED_Box_Front.jpg"),
    MediaItem::image("/assets/New_LED_Box_Back.jpg"),
    MediaItem::video("/assets/New_LED_Box.mp4"),
];

static SCULPTURES_MEDIA: &[MediaItem] = &[
    MediaItem::image("/assets/Shyon_Sculpture.jpg"),
    MediaItem::image("/assets/Shyon_Glass.JPG"),
];

static MODELS_MEDIA: &[MediaItem] = &[MediaItem::image("/assets/3D_Models_Cover_Pic.jpg")];

/// Portraits for the hero mosaic, in display order.
pub static PORTRAIT_IMAGES: &[MediaItem] = &[
    MediaItem::image("/assets/Shyon_Pic_1.jpg").with_alt("Portrait 1"),
    MediaItem::image("/assets/Shyon_Pic_2.JPG").with_alt("Portrait 2"),
    MediaItem::image("/assets/Shyon_Pic_3.JPG").with_alt("Portrait 3"),
    MediaItem::image("/assets/Shyon_Pic_4.jpg").with_alt("Portrait 4"),
    MediaItem::image("/assets/Shyon_Pic_5.jpg").with_alt("Portrait 5"),
    MediaItem::image("/assets/Shyon_Pic_12.jpg").with_alt("Portrait 6"),
    MediaItem::image("/assets/Shyon_Pic_7.jpg").with_alt("Portrait 7"),
    MediaItem::image("/assets/Shyon_Pic_8.JPG").with_alt("Portrait 8"),
];

/// Gallery media for a category id, in display order. Unknown ids yield an
/// empty slice so callers can render "nothing" without a special case.
pub fn entries_for(category_id: &str) -> &'static [MediaItem] {
    match category_id {
        "3d-modeling" => MODELING_MEDIA,
        "digital-media" => GRAPHIC_MEDIA,
        "camera-work" => CAMERA_MEDIA,
        "programming" => PROGRAMMING_MEDIA,
        "sculptures" => SCULPTURES_MEDIA,
        "3d-models" => MODELS_MEDIA,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unknown_category_yields_empty_slice() {
        assert!(entries_for("welding").is_empty());
        assert!(entries_for("").is_empty());
        assert!(entries_for("3D-MODELING").is_empty());
    }

    #[test]
    fn every_card_has_media_or_is_intentionally_empty() {
        for entry in DIGITAL_WORKS.iter().chain(HANDMADE_WORKS) {
            assert!(
                !entries_for(entry.id).is_empty(),
                "card {} has no gallery media",
                entry.id
            );
        }
    }

    #[test]
    fn card_ids_are_unique_within_their_grid() {
        for works in [DIGITAL_WORKS, HANDMADE_WORKS] {
            let ids: HashSet<_> = works.iter().map(|e| e.id).collect();
            assert_eq!(ids.len(), works.len());
        }
    }

    #[test]
    fn media_order_is_preserved() {
        let graphic = entries_for("digital-media");
        assert_eq!(graphic.len(), 4);
        assert_eq!(graphic[0].kind, MediaKind::Image);
        assert_eq!(graphic[0].src, "/assets/Cover_Art.JPG");
        assert_eq!(graphic[2].kind, MediaKind::Video);
        assert_eq!(graphic[3].src, "/assets/Nabu_Poster_Banner.mov");
    }

    #[test]
    fn sources_are_non_empty() {
        let all_ids = DIGITAL_WORKS.iter().chain(HANDMADE_WORKS).map(|e| e.id);
        for id in all_ids {
            for item in entries_for(id) {
                assert!(!item.src.is_empty());
            }
        }
        for portrait in PORTRAIT_IMAGES {
            assert!(!portrait.src.is_empty());
        }
    }
}
