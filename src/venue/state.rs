use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::venue::catalog::{VenueArea, VenueCatalog};

pub enum VenueAction {
    SelectArea(String),
    CloseDetail,
    OpenBooking,
    CloseBooking,
    OpenSubscribe,
    CloseSubscribe,
}

/// Page-level visibility flags. Each action touches exactly one flag.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueState {
    catalog: Rc<VenueCatalog>,
    pub selected: Option<String>,
    pub booking_open: bool,
    pub subscribe_open: bool,
}

impl VenueState {
    pub fn new(catalog: Rc<VenueCatalog>) -> Self {
        Self {
            catalog,
            selected: None,
            booking_open: false,
            subscribe_open: false,
        }
    }

    pub fn catalog(&self) -> &VenueCatalog {
        &self.catalog
    }

    pub fn selected_area(&self) -> Option<&VenueArea> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }
}

impl Reducible for VenueState {
    type Action = VenueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            VenueAction::SelectArea(id) => {
                if !next.catalog.contains(&id) {
                    warn!("Ignoring selection of unknown venue area {}", id);
                    return self;
                }
                debug!("Selected venue area {}", id);
                next.selected = Some(id);
            }
            VenueAction::CloseDetail => next.selected = None,
            VenueAction::OpenBooking => next.booking_open = true,
            VenueAction::CloseBooking => next.booking_open = false,
            VenueAction::OpenSubscribe => next.subscribe_open = true,
            VenueAction::CloseSubscribe => next.subscribe_open = false,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> Rc<VenueState> {
        let catalog = VenueCatalog::load_embedded().unwrap();
        Rc::new(VenueState::new(Rc::new(catalog)))
    }

    #[test]
    fn starts_with_nothing_open() {
        let state = initial();
        assert_eq!(state.selected, None);
        assert!(!state.booking_open);
        assert!(!state.subscribe_open);
        assert!(state.selected_area().is_none());
    }

    #[test]
    fn selecting_each_area_opens_exactly_that_area() {
        let state = initial();
        let ids: Vec<String> = state.catalog().areas().iter().map(|a| a.id.clone()).collect();
        for id in ids {
            let next = state.clone().reduce(VenueAction::SelectArea(id.clone()));
            assert_eq!(next.selected.as_deref(), Some(id.as_str()));
            assert_eq!(next.selected_area().map(|a| a.id.as_str()), Some(id.as_str()));
        }
    }

    #[test]
    fn closing_detail_always_clears_selection() {
        let state = initial();
        let ids: Vec<String> = state.catalog().areas().iter().map(|a| a.id.clone()).collect();
        for id in ids {
            let open = state.clone().reduce(VenueAction::SelectArea(id));
            let closed = open.reduce(VenueAction::CloseDetail);
            assert_eq!(closed.selected, None);
        }
        // Closing when nothing is open is harmless.
        assert_eq!(initial().reduce(VenueAction::CloseDetail).selected, None);
    }

    #[test]
    fn unknown_area_is_ignored() {
        let state = initial().reduce(VenueAction::SelectArea("top-deck".into()));
        let next = state.clone().reduce(VenueAction::SelectArea("engine-room".into()));
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.selected.as_deref(), Some("top-deck"));
    }

    #[test]
    fn booking_and_selection_are_independent() {
        let state = initial()
            .reduce(VenueAction::SelectArea("mid-deck".into()))
            .reduce(VenueAction::OpenBooking);
        assert!(state.booking_open);
        assert_eq!(state.selected.as_deref(), Some("mid-deck"));

        let state = state.reduce(VenueAction::SelectArea("third-eye".into()));
        assert!(state.booking_open);

        let state = state.reduce(VenueAction::CloseBooking);
        assert!(!state.booking_open);
        assert_eq!(state.selected.as_deref(), Some("third-eye"));

        let state = state.reduce(VenueAction::OpenBooking).reduce(VenueAction::CloseDetail);
        assert!(state.booking_open);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn subscribe_panel_does_not_touch_other_flags() {
        let state = initial()
            .reduce(VenueAction::OpenBooking)
            .reduce(VenueAction::SelectArea("lower-deck".into()))
            .reduce(VenueAction::OpenSubscribe);
        assert!(state.subscribe_open);
        assert!(state.booking_open);
        assert_eq!(state.selected.as_deref(), Some("lower-deck"));

        let state = state.reduce(VenueAction::CloseSubscribe);
        assert!(!state.subscribe_open);
        assert!(state.booking_open);
    }

    #[test]
    fn celestial_deck_scenario() {
        let state = initial().reduce(VenueAction::SelectArea("top-deck".into()));
        let area = state.selected_area().unwrap();
        assert_eq!(area.name, "Celestial Deck");
        assert_eq!(area.images.len(), 2);

        let state = state.reduce(VenueAction::CloseDetail);
        assert!(state.selected_area().is_none());
    }
}
