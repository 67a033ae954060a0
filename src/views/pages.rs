//! Smaller screens: favorites, messages, reports, guide, settings and profile.

use eframe::egui::{self, Color32, RichText, vec2};

use crate::{
    domain::Animal,
    favorites::FavoriteSet,
    images,
    state::Message,
};

use super::{BRAND, BRAND_BEIGE, DANGER, SUCCESS, badge, empty_state, section_title, stat_tile};

const THUMBNAIL: f32 = 72.0;

pub fn favorites(ui: &mut egui::Ui, animals: &[Animal], favorites: &FavoriteSet) -> Vec<Message> {
    let mut messages = Vec::new();
    section_title(ui, "Meus Favoritos");

    let chosen = favorites.select(animals);
    if chosen.is_empty() {
        empty_state(
            ui,
            "♡",
            "Você ainda não favoritou nenhum animal",
            "Toque no ♥ nos cards para favoritar",
        );
        return messages;
    }

    for animal in chosen {
        ui.push_id(&animal.id, |ui| {
            ui.group(|card| {
                card.horizontal(|row| {
                    images::photo_with_fallback(row, &animal.image, vec2(THUMBNAIL, THUMBNAIL));
                    row.vertical(|info| {
                        info.strong(&animal.name);
                        info.weak(format!("{} · {}", animal.species.label(), animal.age));
                        info.small(format!("📍 {}", animal.location));
                        info.horizontal(|actions| {
                            if actions.button("ℹ Ver Mais").clicked() {
                                messages.push(Message::ShowAnimal(animal.clone()));
                            }
                            if actions
                                .button(RichText::new("♥").color(DANGER))
                                .on_hover_text("Remover dos favoritos")
                                .clicked()
                            {
                                messages.push(Message::ToggleFavorite(animal.id.clone()));
                            }
                        });
                    });
                });
            });
        });
        ui.add_space(8.0);
    }
    messages
}

pub fn messages(ui: &mut egui::Ui) -> Vec<Message> {
    let mut messages = Vec::new();
    section_title(ui, "Mensagens");

    let response = ui
        .group(|card| {
            card.horizontal(|row| {
                row.label(RichText::new("👤").size(20.0).color(BRAND));
                row.vertical(|body| {
                    body.horizontal(|title| {
                        title.strong("Luciana - ONDA ANIMAL");
                        title.weak("2h");
                    });
                    body.label("Olá! Obrigada pelo interesse no Buddy. Quando gostaria de conhecê-lo?");
                    badge(body, "Nova mensagem", BRAND);
                });
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if response.clicked() {
        messages.push(Message::OpenWhatsApp);
    }
    messages
}

pub fn reports(ui: &mut egui::Ui) {
    section_title(ui, "Relatórios de Castração");
    ui.columns(3, |columns| {
        stat_tile(&mut columns[0], "47", "Castrações em Agosto", SUCCESS);
        stat_tile(&mut columns[1], "156", "Total no ano", BRAND);
        stat_tile(&mut columns[2], "12", "Agendadas", Color32::BLACK);
    });
    ui.add_space(8.0);
    ui.weak("Relatórios detalhados disponíveis em breve...");
}

struct GuideSection {
    title: &'static str,
    items: &'static [&'static str],
}

const GUIDE: [GuideSection; 3] = [
    GuideSection {
        title: "🏠 Preparando sua casa",
        items: &[
            "Remova objetos perigosos e tóxicos",
            "Prepare um cantinho aconchegante para o pet",
            "Tenha comedouros, bebedouros e brinquedos",
        ],
    },
    GuideSection {
        title: "⏰ Adaptação leva tempo",
        items: &[
            "É normal que o animal leve algumas semanas para se adaptar. \
             Tenha paciência e muito amor durante este período.",
        ],
    },
    GuideSection {
        title: "🎯 Comportamentos naturais",
        items: &[
            "Cães: Latem, cavam, correm, roem - é natural!",
            "Gatos: Arranham, sobem em lugares altos, são independentes",
            "Estes comportamentos podem ser direcionados com carinho e paciência",
        ],
    },
];

pub fn guide(ui: &mut egui::Ui) {
    section_title(ui, "Guia do Adotante Responsável");
    for section in &GUIDE {
        ui.group(|card| {
            card.set_width(card.available_width());
            card.label(RichText::new(section.title).size(16.0).strong());
            if let [paragraph] = section.items {
                card.label(*paragraph);
            } else {
                for item in section.items {
                    card.label(format!("• {item}"));
                }
            }
        });
        ui.add_space(8.0);
    }
}

pub fn settings(ui: &mut egui::Ui) {
    section_title(ui, "Configurações");
    for (title, hint) in [
        ("Notificações", "Gerencie suas preferências de notificação"),
        ("Privacidade", "Controle suas informações pessoais"),
    ] {
        ui.group(|card| {
            card.set_width(card.available_width());
            card.strong(title);
            card.weak(hint);
        });
        ui.add_space(8.0);
    }
}

pub fn profile(ui: &mut egui::Ui, favorites: &FavoriteSet) {
    ui.vertical_centered(|center| {
        center.label(RichText::new("👤").size(40.0).color(BRAND));
        center.label(RichText::new("Meu Perfil").size(20.0).strong());
        center.weak("Adotante desde agosto de 2025");
    });
    ui.add_space(12.0);

    egui::Frame::group(ui.style()).fill(BRAND_BEIGE).show(ui, |card| {
        card.set_width(card.available_width());
        card.strong("Informações Pessoais");
        for (field, value) in [
            ("Nome", "João da Silva"),
            ("Email", "joao@email.com"),
            ("Telefone", "(51) 99999-9999"),
            ("Cidade", "Xangri-lá, RS"),
        ] {
            card.horizontal(|row| {
                row.strong(format!("{field}:"));
                row.label(value);
            });
        }
    });
    ui.add_space(8.0);

    section_title(ui, "Histórico");
    ui.columns(3, |columns| {
        stat_tile(&mut columns[0], "2", "Adoções", SUCCESS);
        stat_tile(&mut columns[1], &favorites.len().to_string(), "Favoritos", BRAND);
        stat_tile(&mut columns[2], "R$ 350", "Doações", BRAND);
    });
}
