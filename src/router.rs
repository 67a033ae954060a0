use tracing::{debug, warn};

use crate::domain::Animal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Favorites,
    Appointments,
    Donations,
    Messages,
    Reports,
    Guide,
    Settings,
    Profile,
    AnimalDetail,
}

impl View {
    pub fn id(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Favorites => "favorites",
            View::Appointments => "appointments",
            View::Donations => "donations",
            View::Messages => "messages",
            View::Reports => "reports",
            View::Guide => "guide",
            View::Settings => "settings",
            View::Profile => "profile",
            View::AnimalDetail => "animal-detail",
        }
    }

    /// Unknown ids land on the home screen.
    pub fn from_id(id: &str) -> Self {
        match id {
            "favorites" => View::Favorites,
            "appointments" => View::Appointments,
            "donations" => View::Donations,
            "messages" => View::Messages,
            "reports" => View::Reports,
            "guide" => View::Guide,
            "settings" => View::Settings,
            "profile" => View::Profile,
            "animal-detail" => View::AnimalDetail,
            "home" => View::Home,
            other => {
                debug!(view = other, "unknown view id, falling back to home");
                View::Home
            }
        }
    }
}

/// Which screen is on display, plus the subject of the detail screen.
#[derive(Debug, Default)]
pub struct ViewRouter {
    current: View,
    selected_animal: Option<Animal>,
}

impl ViewRouter {
    pub fn current(&self) -> View {
        self.current
    }

    /// Subject of the detail screen. `None` means the detail screen draws nothing.
    pub fn selected_animal(&self) -> Option<&Animal> {
        self.selected_animal.as_ref()
    }

    pub fn navigate(&mut self, view: View, subject: Option<Animal>) {
        if view == View::AnimalDetail {
            if subject.is_none() {
                warn!("animal-detail requested without an animal");
            }
            self.selected_animal = subject;
        }
        debug!(from = self.current.id(), to = view.id(), "navigate");
        self.current = view;
    }

    pub fn back_from_detail(&mut self) {
        self.navigate(View::Home, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn ids_round_trip_and_unknown_falls_back() {
        for view in [View::Donations, View::AnimalDetail, View::Reports] {
            assert_eq!(View::from_id(view.id()), view);
        }
        assert_eq!(View::from_id("adoption-wizard"), View::Home);
    }

    #[test]
    fn detail_keeps_its_subject() {
        let buddy = fixtures::animals().remove(0);
        let mut router = ViewRouter::default();
        router.navigate(View::AnimalDetail, Some(buddy.clone()));
        assert_eq!(router.current(), View::AnimalDetail);
        assert_eq!(router.selected_animal(), Some(&buddy));
    }

    #[test]
    fn detail_without_subject_has_nothing_to_show() {
        let mut router = ViewRouter::default();
        router.navigate(View::AnimalDetail, Some(fixtures::animals().remove(1)));
        router.navigate(View::AnimalDetail, None);
        assert_eq!(router.current(), View::AnimalDetail);
        assert!(router.selected_animal().is_none());
    }

    #[test]
    fn back_from_detail_goes_home() {
        let mut router = ViewRouter::default();
        router.navigate(View::Donations, None);
        router.navigate(View::AnimalDetail, Some(fixtures::animals().remove(2)));
        router.back_from_detail();
        assert_eq!(router.current(), View::Home);
    }
}
