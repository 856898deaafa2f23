//! Panel selection state machine.
//!
//! `Closed` or `Open { city, event, photo }`. Navigation is guarded at both
//! ends (no wrapping), switching events resets the photo to 0, and selecting
//! a city always lands on its first event and photo.

use crate::atlas::{Atlas, City, CityId, Event};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open {
        city: CityId,
        event: usize,
        photo: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Select(CityId),
    Close,
    NextEvent,
    PrevEvent,
    NextPhoto,
    PrevPhoto,
}

impl PanelAction {
    /// Value of the `data-action` attribute carried by panel buttons.
    pub fn dom_action(self) -> Option<&'static str> {
        match self {
            PanelAction::Select(_) => None,
            PanelAction::Close => Some("close"),
            PanelAction::NextEvent => Some("next-event"),
            PanelAction::PrevEvent => Some("prev-event"),
            PanelAction::NextPhoto => Some("next-photo"),
            PanelAction::PrevPhoto => Some("prev-photo"),
        }
    }

    pub fn from_dom_action(action: &str) -> Option<Self> {
        match action {
            "close" => Some(PanelAction::Close),
            "next-event" => Some(PanelAction::NextEvent),
            "prev-event" => Some(PanelAction::PrevEvent),
            "next-photo" => Some(PanelAction::NextPhoto),
            "prev-photo" => Some(PanelAction::PrevPhoto),
            _ => None,
        }
    }
}

impl Selection {
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open { .. })
    }

    pub fn city(&self) -> Option<CityId> {
        match *self {
            Selection::Open { city, .. } => Some(city),
            Selection::Closed => None,
        }
    }

    /// State after `action`; unchanged when a guard blocks it.
    pub fn next(self, action: PanelAction, atlas: &Atlas) -> Selection {
        match (self, action) {
            (_, PanelAction::Select(city)) if atlas.get(city).is_some() => Selection::Open {
                city,
                event: 0,
                photo: 0,
            },
            (_, PanelAction::Select(_)) => self,
            (_, PanelAction::Close) => Selection::Closed,
            (Selection::Closed, _) => self,
            (Selection::Open { city, event, .. }, PanelAction::NextEvent) => {
                if event + 1 < atlas.event_count(city) {
                    Selection::Open {
                        city,
                        event: event + 1,
                        photo: 0,
                    }
                } else {
                    self
                }
            }
            (Selection::Open { city, event, .. }, PanelAction::PrevEvent) => {
                if event > 0 {
                    Selection::Open {
                        city,
                        event: event - 1,
                        photo: 0,
                    }
                } else {
                    self
                }
            }
            (Selection::Open { city, event, photo }, PanelAction::NextPhoto) => {
                if photo + 1 < atlas.photo_count(city, event) {
                    Selection::Open {
                        city,
                        event,
                        photo: photo + 1,
                    }
                } else {
                    self
                }
            }
            (Selection::Open { city, event, photo }, PanelAction::PrevPhoto) => {
                if photo > 0 {
                    Selection::Open {
                        city,
                        event,
                        photo: photo - 1,
                    }
                } else {
                    self
                }
            }
        }
    }

    /// Apply `action` in place. Returns true if the state changed.
    pub fn apply(&mut self, action: PanelAction, atlas: &Atlas) -> bool {
        let next = self.next(action, atlas);
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn view<'a>(&self, atlas: &'a Atlas) -> Option<PanelView<'a>> {
        PanelView::new(*self, atlas)
    }
}

/// What a dispatched action did. Computed after the state is updated, so
/// anything notified about `selected` already sees the new selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    /// Set when the action selected a known city, even if it was already open.
    pub selected: Option<CityId>,
}

/// Selection state of one mounted globe. Once shut it stays `Closed` and
/// ignores every action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelController {
    selection: Selection,
    shut: bool,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_shut(&self) -> bool {
        self.shut
    }

    pub fn dispatch(&mut self, action: PanelAction, atlas: &Atlas) -> Transition {
        if self.shut {
            return Transition::default();
        }
        let changed = self.selection.apply(action, atlas);
        let selected = match action {
            PanelAction::Select(city) if self.selection.city() == Some(city) => Some(city),
            _ => None,
        };
        Transition { changed, selected }
    }

    /// Close the panel for good. Returns true if it was open.
    pub fn shut(&mut self) -> bool {
        self.shut = true;
        std::mem::take(&mut self.selection).is_open()
    }
}

/// Everything the side panel shows for an open selection.
#[derive(Clone, Copy, Debug)]
pub struct PanelView<'a> {
    pub city: &'a City,
    pub event: &'a Event,
    pub photo: &'a str,
    pub event_index: usize,
    pub event_count: usize,
    pub photo_index: usize,
    pub photo_count: usize,
}

impl<'a> PanelView<'a> {
    pub fn new(selection: Selection, atlas: &'a Atlas) -> Option<Self> {
        let Selection::Open { city, event, photo } = selection else {
            return None;
        };
        let city = atlas.get(city)?;
        let ev = city.events.get(event)?;
        let url = ev.photos.get(photo)?;
        Some(Self {
            city,
            event: ev,
            photo: url,
            event_index: event,
            event_count: city.events.len(),
            photo_index: photo,
            photo_count: ev.photos.len(),
        })
    }

    pub fn can_prev_event(&self) -> bool {
        self.event_index > 0
    }

    pub fn can_next_event(&self) -> bool {
        self.event_index + 1 < self.event_count
    }

    pub fn can_prev_photo(&self) -> bool {
        self.photo_index > 0
    }

    pub fn can_next_photo(&self) -> bool {
        self.photo_index + 1 < self.photo_count
    }
}
