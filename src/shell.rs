//! Header, side menu and bottom bar. Everything here only emits messages.

use eframe::egui::{self, Color32, RichText};

use crate::{
    domain::Role,
    router::View,
    state::Message,
    views::{BRAND, BRAND_BEIGE},
};

pub const APP_TITLE: &str = "ONDA ANIMAL";

const SIDE_MENU_WIDTH: f32 = 260.0;
const BACKDROP: Color32 = Color32::from_black_alpha(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(view: View, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { view, label, icon }
}

const SIDE_MENU: [MenuItem; 8] = [
    item(View::Home, "Início", "🏠"),
    item(View::Favorites, "Favoritos", "♥"),
    item(View::Appointments, "Agendamentos", "📅"),
    item(View::Donations, "Doações", "💲"),
    item(View::Messages, "Mensagens", "💬"),
    item(View::Reports, "Relatórios", "📊"),
    item(View::Guide, "Guia do Adotante", "❓"),
    item(View::Settings, "Configurações", "⚙"),
];

/// Side menu entries visible to `role`, in menu order.
pub fn side_menu_items(role: Role) -> Vec<MenuItem> {
    SIDE_MENU
        .into_iter()
        .filter(|entry| entry.view != View::Reports || role.can_view_reports())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomAction {
    Go(View),
    More,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomButton {
    pub action: BottomAction,
    pub label: &'static str,
    pub icon: &'static str,
    pub shows_unread: bool,
}

pub const BOTTOM_BAR: [BottomButton; 5] = [
    BottomButton {
        action: BottomAction::Go(View::Home),
        label: "Início",
        icon: "🏠",
        shows_unread: false,
    },
    BottomButton {
        action: BottomAction::Go(View::Favorites),
        label: "Favoritos",
        icon: "♥",
        shows_unread: false,
    },
    BottomButton {
        action: BottomAction::Go(View::Appointments),
        label: "Agenda",
        icon: "📅",
        shows_unread: false,
    },
    BottomButton {
        action: BottomAction::Go(View::Messages),
        label: "Chat",
        icon: "💬",
        shows_unread: true,
    },
    BottomButton {
        action: BottomAction::More,
        label: "Mais",
        icon: "⚙",
        shows_unread: false,
    },
];

impl BottomButton {
    /// "More" opens the side menu and is never highlighted.
    pub fn is_active(&self, current: View) -> bool {
        matches!(self.action, BottomAction::Go(view) if view == current)
    }

    pub fn message(&self) -> Message {
        match self.action {
            BottomAction::Go(view) => Message::Navigate(view),
            BottomAction::More => Message::OpenSideMenu,
        }
    }
}

/// Messages for picking `view` from the side menu: navigate, then close the menu.
pub fn side_menu_selection(view: View) -> [Message; 2] {
    [Message::Navigate(view), Message::CloseSideMenu]
}

pub fn is_compact(width: f32, breakpoint: f32) -> bool {
    width < breakpoint
}

// -----------------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------------

pub fn render_header(ui: &mut egui::Ui) -> Vec<Message> {
    let mut messages = Vec::new();
    ui.horizontal(|row| {
        if row.button(RichText::new("☰").size(20.0)).clicked() {
            messages.push(Message::OpenSideMenu);
        }
        row.label(RichText::new("♥").color(BRAND).size(20.0));
        row.heading(RichText::new(APP_TITLE).strong());
        row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |lane| {
            if lane.button("👤").on_hover_text("Meu Perfil").clicked() {
                messages.push(Message::Navigate(View::Profile));
            }
        });
    });
    messages
}

/// Side menu drawn over the current screen. Clicking the dimmed backdrop or
/// pressing Escape closes it.
pub fn render_side_menu_overlay(ctx: &egui::Context, role: Role, current: View) -> Vec<Message> {
    let mut messages = Vec::new();
    let screen = ctx.content_rect();

    let backdrop = egui::Area::new(egui::Id::new("side_menu_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::ZERO, BACKDROP);
            response
        })
        .inner;
    if backdrop.clicked() || ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
        messages.push(Message::CloseSideMenu);
    }

    egui::Area::new(egui::Id::new("side_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |menu| {
                menu.set_width(SIDE_MENU_WIDTH);
                menu.set_min_height(screen.height());
                egui::ScrollArea::vertical().show(menu, |menu| {
                    messages.extend(render_side_menu(menu, role, current));
                });
            });
        });
    messages
}

fn render_side_menu(ui: &mut egui::Ui, role: Role, current: View) -> Vec<Message> {
    let mut messages = Vec::new();
    ui.horizontal(|row| {
        row.label(RichText::new("♥").color(BRAND));
        row.strong(APP_TITLE);
        row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |lane| {
            if lane.small_button("✖").clicked() {
                messages.push(Message::CloseSideMenu);
            }
        });
    });
    ui.separator();

    for entry in side_menu_items(role) {
        let text = format!("{}  {}", entry.icon, entry.label);
        let selected = entry.view == current;
        if ui.selectable_label(selected, text).clicked() {
            messages.extend(side_menu_selection(entry.view));
        }
    }

    ui.add_space(16.0);
    ui.separator();
    // Sign-out has nowhere to go without authentication.
    ui.add_enabled(
        false,
        egui::Button::new(RichText::new("⎋  Sair").color(Color32::from_rgb(220, 38, 38))),
    );

    ui.add_space(24.0);
    egui::Frame::group(ui.style())
        .fill(BRAND_BEIGE)
        .show(ui, |card| {
            card.small("🌊 Ajude a ONDA ANIMAL a continuar salvando vidas!");
            if card
                .add_sized([card.available_width(), 28.0], egui::Button::new("Fazer Doação"))
                .clicked()
            {
                messages.extend(side_menu_selection(View::Donations));
            }
        });
    messages
}

pub fn render_bottom_bar(ui: &mut egui::Ui, current: View, unread: u32) -> Vec<Message> {
    let mut messages = Vec::new();
    ui.columns(BOTTOM_BAR.len(), |columns| {
        for (column, button) in columns.iter_mut().zip(BOTTOM_BAR) {
            column.vertical_centered(|cell| {
                let mut label = format!("{}\n{}", button.icon, button.label);
                if button.shows_unread && unread > 0 {
                    label = format!("{} ({unread})\n{}", button.icon, button.label);
                }
                let color = if button.is_active(current) {
                    BRAND
                } else {
                    Color32::GRAY
                };
                if cell
                    .add(egui::Button::new(RichText::new(label).color(color)).frame(false))
                    .clicked()
                {
                    messages.push(button.message());
                }
            });
        }
    });
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(items: &[MenuItem]) -> Vec<View> {
        items.iter().map(|entry| entry.view).collect()
    }

    #[test]
    fn staff_see_reports() {
        let admin = side_menu_items(Role::Admin);
        assert_eq!(admin.len(), 8);
        assert!(views(&admin).contains(&View::Reports));
        assert!(views(&side_menu_items(Role::Volunteer)).contains(&View::Reports));
    }

    #[test]
    fn adopters_do_not_see_reports() {
        let adopter = side_menu_items(Role::Adopter);
        assert_eq!(
            views(&adopter),
            [
                View::Home,
                View::Favorites,
                View::Appointments,
                View::Donations,
                View::Messages,
                View::Guide,
                View::Settings,
            ]
        );
    }

    #[test]
    fn side_menu_selection_navigates_then_closes() {
        let [first, second] = side_menu_selection(View::Guide);
        assert!(matches!(first, Message::Navigate(View::Guide)));
        assert!(matches!(second, Message::CloseSideMenu));
    }

    #[test]
    fn bottom_bar_layout() {
        let last = BOTTOM_BAR[4];
        assert!(matches!(last.message(), Message::OpenSideMenu));
        assert!(!last.is_active(View::Settings));
        assert!(BOTTOM_BAR[0].is_active(View::Home));
        assert_eq!(
            BOTTOM_BAR.iter().filter(|button| button.shows_unread).count(),
            1
        );
        assert!(BOTTOM_BAR[3].is_active(View::Messages));
    }

    fn phone_input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(420.0, 860.0),
            )),
            events,
            ..Default::default()
        }
    }

    fn press(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Draws the open menu for a few frames, clicking at `pos`.
    fn click_overlay_at(pos: egui::Pos2) -> Vec<Message> {
        let ctx = egui::Context::default();
        let mut messages = Vec::new();
        // Fresh areas need a couple of frames before they take input.
        let frames = [
            Vec::new(),
            Vec::new(),
            vec![egui::Event::PointerMoved(pos)],
            vec![press(pos, true)],
            vec![press(pos, false)],
        ];
        for events in frames {
            let _ = ctx.run(phone_input(events), |ctx| {
                messages.extend(render_side_menu_overlay(ctx, Role::Admin, View::Home));
            });
        }
        messages
    }

    #[test]
    fn backdrop_click_closes_menu() {
        let messages = click_overlay_at(egui::pos2(400.0, 400.0));
        assert!(matches!(messages.as_slice(), [Message::CloseSideMenu]));
    }

    #[test]
    fn clicks_inside_menu_do_not_reach_backdrop() {
        let messages = click_overlay_at(egui::pos2(120.0, 840.0));
        assert!(
            !messages
                .iter()
                .any(|message| matches!(message, Message::CloseSideMenu))
        );
    }

    #[test]
    fn compact_below_breakpoint() {
        assert!(is_compact(420.0, 1024.0));
        assert!(!is_compact(1280.0, 1024.0));
    }
}
