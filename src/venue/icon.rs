use serde::{Deserialize, Serialize};

/// Icons drawn on the page. The first four are assignable to venue areas,
/// the rest belong to the page chrome.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Eye,
    Yoga,
    Music,
    GlassWater,
    Ship,
    ArrowUp,
    Close,
}

impl IconKind {
    /// SVG path data on a 24x24 stroke grid.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
                "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6Z",
            ],
            IconKind::Yoga => &["M22 17v1c0 .5-.5 1-1 1H3c-.5 0-1-.5-1-1v-1"],
            IconKind::Music => &[
                "M9 18V5l12-2v13",
                "M6 15a3 3 0 1 0 0 6a3 3 0 1 0 0-6Z",
                "M18 13a3 3 0 1 0 0 6a3 3 0 1 0 0-6Z",
            ],
            IconKind::GlassWater => &[
                "M15.2 22H8.8a2 2 0 0 1-2-1.79L5 3h14l-1.81 17.21A2 2 0 0 1 15.2 22Z",
                "M6 12a5 5 0 0 1 6 0 5 5 0 0 0 6 0",
            ],
            IconKind::Ship => &[
                "M2 21c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1 .6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1",
                "M19.38 20A11.6 11.6 0 0 0 21 14l-9-4-9 4c0 2.9.94 5.34 2.81 7.76",
                "M19 13V7a2 2 0 0 0-2-2H7a2 2 0 0 0-2 2v6",
                "M12 10v4",
                "M12 2v3",
            ],
            IconKind::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IconKind::Eye => "eye",
            IconKind::Yoga => "yoga",
            IconKind::Music => "music",
            IconKind::GlassWater => "glass of water",
            IconKind::Ship => "ship",
            IconKind::ArrowUp => "arrow up",
            IconKind::Close => "close",
        }
    }
}
