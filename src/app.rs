use std::time::Instant;

use chrono::Local;
use eframe::{
    App, CreationContext, Frame,
    egui::{self, Context},
};
use tracing::info;

use crate::{
    gateway::SimulatedGateway,
    router::View,
    shell,
    state::{Message, Session},
    views::{self, donations::DonationScreen},
};

pub const APP_NAME: &str = shell::APP_TITLE;

pub struct OndaApp {
    session: Session,
    gateway: SimulatedGateway,
}

impl OndaApp {
    pub fn new(cc: &CreationContext<'_>, session: Session) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        info!(
            role = ?session.role,
            view = session.router.current().id(),
            "session started"
        );
        Self {
            session,
            gateway: SimulatedGateway,
        }
    }

    fn render_view(&mut self, ui: &mut egui::Ui) -> Vec<Message> {
        let session = &mut self.session;
        match session.router.current() {
            View::Home => views::home::render(
                ui,
                &session.animals,
                &mut session.home,
                &session.favorites,
            ),
            View::AnimalDetail => views::detail::render(ui, session.router.selected_animal()),
            View::Favorites => views::pages::favorites(ui, &session.animals, &session.favorites),
            View::Appointments => {
                let today = Local::now().date_naive();
                views::appointments::render(
                    ui,
                    &mut session.appointments,
                    &mut session.appointment_form,
                    today,
                );
                Vec::new()
            }
            View::Donations => {
                let pix_code = session.config().pix_code.clone();
                DonationScreen {
                    flow: &mut session.donation,
                    campaigns: &session.campaigns,
                    stats: &session.donation_stats,
                    recent: &session.recent_donations,
                    pix_code: &pix_code,
                    gateway: &self.gateway,
                }
                .render(ui, Instant::now());
                Vec::new()
            }
            View::Messages => views::pages::messages(ui),
            View::Reports => {
                views::pages::reports(ui);
                Vec::new()
            }
            View::Guide => {
                views::pages::guide(ui);
                Vec::new()
            }
            View::Settings => {
                views::pages::settings(ui);
                Vec::new()
            }
            View::Profile => {
                views::pages::profile(ui, &session.favorites);
                Vec::new()
            }
        }
    }

    fn open_pending_link(&mut self, ctx: &Context) {
        if let Some(link) = self.session.pending_link.take() {
            info!(%link, "opening messaging link");
            ctx.open_url(egui::OpenUrl::new_tab(link));
        }
    }
}

impl App for OndaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut messages = Vec::new();
        let current = self.session.router.current();
        let role = self.session.role;
        let compact = shell::is_compact(
            ctx.content_rect().width(),
            self.session.config().compact_breakpoint,
        );
        let unread = self.session.config().unread_messages;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            messages.extend(shell::render_header(ui));
        });

        if compact {
            egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
                messages.extend(shell::render_bottom_bar(ui, current, unread));
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| messages.extend(self.render_view(ui)));
        });

        if self.session.side_menu_open {
            messages.extend(shell::render_side_menu_overlay(ctx, role, current));
        }

        for message in messages {
            self.session.dispatch(message);
        }
        self.open_pending_link(ctx);
    }
}
