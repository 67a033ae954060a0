//! Root state of a session and the reducer that applies cross-screen events.

use tracing::{debug, warn};

use crate::{
    appointments::{AppointmentBook, AppointmentDraft},
    config::Config,
    domain::{Animal, Campaign, DonationStats, RecentDonation, Role},
    donation::DonationFlow,
    favorites::FavoriteSet,
    filter::Category,
    fixtures,
    router::{View, ViewRouter},
};

/// Events emitted by the shell and the screens.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(View),
    ShowAnimal(Animal),
    BackFromDetail,
    OpenSideMenu,
    CloseSideMenu,
    ToggleFavorite(String),
    OpenWhatsApp,
}

#[derive(Debug, Default)]
pub struct HomeFilters {
    pub query: String,
    pub category: Category,
}

pub struct Session {
    pub role: Role,
    pub router: ViewRouter,
    pub side_menu_open: bool,
    pub favorites: FavoriteSet,
    pub home: HomeFilters,
    pub animals: Vec<Animal>,
    pub appointments: AppointmentBook,
    /// Open "Novo Agendamento" dialog, if any.
    pub appointment_form: Option<AppointmentForm>,
    pub donation: DonationFlow,
    pub campaigns: Vec<Campaign>,
    pub donation_stats: DonationStats,
    pub recent_donations: Vec<RecentDonation>,
    /// Set by `OpenWhatsApp`; the app hands it to the toolkit and clears it.
    pub pending_link: Option<String>,
    config: Config,
}

#[derive(Debug, Default)]
pub struct AppointmentForm {
    pub draft: AppointmentDraft,
    pub error: Option<String>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let mut session = Self {
            role: config.role,
            router: ViewRouter::default(),
            side_menu_open: false,
            favorites: FavoriteSet::default(),
            home: HomeFilters::default(),
            animals: fixtures::animals(),
            appointments: AppointmentBook::new(fixtures::appointments()),
            appointment_form: None,
            donation: DonationFlow::default(),
            campaigns: fixtures::campaigns(),
            donation_stats: fixtures::donation_stats(),
            recent_donations: fixtures::recent_donations(),
            pending_link: None,
            config,
        };
        let start = session.config.start_view();
        session.dispatch(Message::Navigate(start));
        session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dispatch(&mut self, message: Message) {
        debug!(?message, "dispatch");
        match message {
            Message::Navigate(view) => self.go_to(view, None),
            Message::ShowAnimal(animal) => self.go_to(View::AnimalDetail, Some(animal)),
            Message::BackFromDetail => {
                self.leave(View::Home);
                self.router.back_from_detail();
            }
            Message::OpenSideMenu => self.side_menu_open = true,
            Message::CloseSideMenu => self.side_menu_open = false,
            Message::ToggleFavorite(id) => {
                let favorite = self.favorites.toggle(&id);
                debug!(%id, favorite, "favorite toggled");
            }
            Message::OpenWhatsApp => {
                match crate::contact::whatsapp_url(
                    &self.config.whatsapp_number,
                    &self.config.whatsapp_message,
                ) {
                    Ok(url) => self.pending_link = Some(url.into()),
                    Err(err) => warn!(%err, "could not build the WhatsApp link"),
                }
            }
        }
    }

    fn go_to(&mut self, view: View, subject: Option<Animal>) {
        let view = if view == View::Reports && !self.role.can_view_reports() {
            warn!(role = ?self.role, "reports are restricted to staff");
            View::Home
        } else {
            view
        };
        self.leave(view);
        self.router.navigate(view, subject);
    }

    /// Tears down screen-scoped state of the screen being left.
    fn leave(&mut self, next: View) {
        let current = self.router.current();
        if current == next {
            return;
        }
        match current {
            View::Donations => self.donation.teardown(),
            View::Appointments => self.appointment_form = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentMethod;
    use std::time::Instant;

    fn session_as(role: Role) -> Session {
        Session::new(Config {
            role,
            ..Config::default()
        })
    }

    #[test]
    fn starts_on_configured_view() {
        let session = Session::new(Config {
            start_view: "appointments".into(),
            ..Config::default()
        });
        assert_eq!(session.router.current(), View::Appointments);
    }

    #[test]
    fn closing_menu_keeps_current_view() {
        let mut session = session_as(Role::Admin);
        session.dispatch(Message::Navigate(View::Guide));
        session.dispatch(Message::OpenSideMenu);
        assert!(session.side_menu_open);
        session.dispatch(Message::CloseSideMenu);
        assert!(!session.side_menu_open);
        assert_eq!(session.router.current(), View::Guide);
    }

    #[test]
    fn reports_are_staff_only() {
        let mut adopter = session_as(Role::Adopter);
        adopter.dispatch(Message::Navigate(View::Reports));
        assert_eq!(adopter.router.current(), View::Home);

        let mut volunteer = session_as(Role::Volunteer);
        volunteer.dispatch(Message::Navigate(View::Reports));
        assert_eq!(volunteer.router.current(), View::Reports);
    }

    #[test]
    fn show_animal_then_back() {
        let mut session = session_as(Role::Admin);
        let mia = session.animals[3].clone();
        session.dispatch(Message::ShowAnimal(mia.clone()));
        assert_eq!(session.router.current(), View::AnimalDetail);
        assert_eq!(session.router.selected_animal(), Some(&mia));
        session.dispatch(Message::BackFromDetail);
        assert_eq!(session.router.current(), View::Home);
    }

    #[test]
    fn favorites_are_shared_across_screens() {
        let mut session = session_as(Role::Admin);
        session.dispatch(Message::ToggleFavorite("3".into()));
        session.dispatch(Message::Navigate(View::Favorites));
        let names: Vec<_> = session
            .favorites
            .select(&session.animals)
            .into_iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, ["Rex"]);
    }

    #[test]
    fn leaving_donations_cancels_pending_modal_and_timer() {
        let mut session = session_as(Role::Admin);
        session.dispatch(Message::Navigate(View::Donations));
        session.donation.select_preset(50);
        session.donation.choose_method(PaymentMethod::Pix).unwrap();
        let now = Instant::now();
        session.donation.mark_copied(now);

        session.dispatch(Message::Navigate(View::Home));
        assert!(session.donation.modal().is_none());
        assert!(!session.donation.copied(now));
        assert_eq!(session.donation.preset(), Some(50));
    }

    #[test]
    fn whatsapp_link_is_queued() {
        let mut session = session_as(Role::Adopter);
        session.dispatch(Message::OpenWhatsApp);
        let link = session.pending_link.take().unwrap();
        assert!(link.starts_with("https://wa.me/5551999119352?text="));
    }
}
