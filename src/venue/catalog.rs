use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::venue::icon::IconKind;

const EMBEDDED_AREAS: &str = include_str!("../../content/venue_areas.json");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Percent of the display width, measured from the left edge.
    pub x: f64,
    /// Percent of the display height, measured from the top edge.
    pub y: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VenueArea {
    pub id: String,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub icon: IconKind,
    pub position: Position,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("venue content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("venue content lists no areas")]
    Empty,
    #[error("venue area without an id")]
    MissingId,
    #[error("venue area id {0:?} is used more than once")]
    DuplicateId(String),
    #[error("venue area {0:?} has no images")]
    NoImages(String),
    #[error("venue area {id:?} is placed outside the display at ({x}, {y})")]
    PositionOutOfRange { id: String, x: f64, y: f64 },
}

/// Ordered, validated list of venue areas. Built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VenueCatalog {
    areas: Vec<VenueArea>,
}

impl VenueCatalog {
    /// Loads the area list compiled into the binary.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_AREAS)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let areas: Vec<VenueArea> = serde_json::from_str(raw)?;
        Self::from_areas(areas)
    }

    pub fn from_areas(areas: Vec<VenueArea>) -> Result<Self, CatalogError> {
        if areas.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for area in &areas {
            if area.id.trim().is_empty() {
                return Err(CatalogError::MissingId);
            }
            if !seen.insert(area.id.as_str()) {
                return Err(CatalogError::DuplicateId(area.id.clone()));
            }
            if area.images.is_empty() {
                return Err(CatalogError::NoImages(area.id.clone()));
            }
            let Position { x, y } = area.position;
            if !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y) {
                return Err(CatalogError::PositionOutOfRange {
                    id: area.id.clone(),
                    x,
                    y,
                });
            }
        }

        Ok(Self { areas })
    }

    pub fn areas(&self) -> &[VenueArea] {
        &self.areas
    }

    pub fn get(&self, id: &str) -> Option<&VenueArea> {
        self.areas.iter().find(|area| area.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(id: &str, images: usize, x: f64, y: f64) -> VenueArea {
        VenueArea {
            id: id.to_string(),
            name: format!("Area {}", id),
            description: "somewhere on board".to_string(),
            images: (0..images).map(|i| format!("/img/{}-{}.png", id, i)).collect(),
            icon: IconKind::Music,
            position: Position { x, y },
        }
    }

    #[test]
    fn embedded_catalog_lists_the_four_decks_in_order() {
        let catalog = VenueCatalog::load_embedded().unwrap();
        let ids: Vec<&str> = catalog.areas().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["third-eye", "top-deck", "mid-deck", "lower-deck"]);

        let deck = catalog.get("top-deck").unwrap();
        assert_eq!(deck.name, "Celestial Deck");
        assert_eq!(deck.images.len(), 2);
        assert_eq!(deck.icon, IconKind::Yoga);
        assert_eq!(deck.position, Position { x: 75.0, y: 25.0 });

        assert_eq!(catalog.get("lower-deck").unwrap().icon, IconKind::GlassWater);
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(VenueCatalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            VenueCatalog::from_json("[{\"id\": \"x\"}]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = VenueCatalog::from_areas(vec![area("a", 1, 1.0, 1.0), area("a", 2, 5.0, 5.0)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = VenueCatalog::from_areas(vec![area("  ", 1, 1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingId));
    }

    #[test]
    fn rejects_area_without_images() {
        let err = VenueCatalog::from_areas(vec![area("bare", 0, 1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::NoImages(id) if id == "bare"));
    }

    #[test]
    fn rejects_positions_off_the_display() {
        let err = VenueCatalog::from_areas(vec![area("far", 1, 101.0, 50.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::PositionOutOfRange { .. }));

        let err = VenueCatalog::from_areas(vec![area("up", 1, 50.0, -0.5)]).unwrap_err();
        assert!(matches!(err, CatalogError::PositionOutOfRange { .. }));

        assert!(VenueCatalog::from_areas(vec![area("edge", 1, 0.0, 100.0)]).is_ok());
    }

    #[test]
    fn lookup_by_id() {
        let catalog =
            VenueCatalog::from_areas(vec![area("a", 1, 1.0, 1.0), area("b", 3, 2.0, 2.0)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("b"));
        assert!(!catalog.contains("c"));
        assert_eq!(catalog.get("b").unwrap().images.len(), 3);
    }
}
