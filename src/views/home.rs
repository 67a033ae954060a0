use eframe::egui::{self, Color32, RichText, vec2};

use crate::{
    domain::{Animal, Urgency},
    favorites::FavoriteSet,
    filter::{self, Category},
    images,
    state::{HomeFilters, Message},
};

use super::{BRAND, BRAND_SKY, DANGER, SUCCESS, WARNING, badge, empty_state};

const PHOTO_HEIGHT: f32 = 180.0;
const NO_RESULTS: &str = "Nenhum animal encontrado";

pub fn render(
    ui: &mut egui::Ui,
    animals: &[Animal],
    filters: &mut HomeFilters,
    favorites: &FavoriteSet,
) -> Vec<Message> {
    let mut messages = Vec::new();

    render_hero(ui, animals);
    render_search(ui, animals, filters);

    let rows = filter::filter_animals(animals, &filters.query, filters.category);
    messages.extend(render_listing(ui, &rows, favorites));

    render_call_to_action(ui);
    messages
}

/// Animal cards, or the empty-state notice when nothing passed the filters.
fn render_listing(ui: &mut egui::Ui, rows: &[Animal], favorites: &FavoriteSet) -> Vec<Message> {
    let mut messages = Vec::new();
    if rows.is_empty() {
        empty_state(ui, "🔍", NO_RESULTS, "Tente ajustar os filtros ou busca");
        return messages;
    }
    for animal in rows {
        ui.push_id(&animal.id, |ui| {
            messages.extend(render_animal_card(ui, animal, favorites.contains(&animal.id)));
        });
    }
    messages
}

fn render_hero(ui: &mut egui::Ui, animals: &[Animal]) {
    egui::Frame::group(ui.style()).fill(BRAND_SKY).show(ui, |hero| {
        hero.label(
            RichText::new("Encontre seu novo melhor amigo! 🐾")
                .size(20.0)
                .strong(),
        );
        hero.label(format!(
            "{} animais esperando por uma família amorosa na região Metropolitana!",
            animals.len()
        ));
        hero.horizontal(|row| {
            let urgent = filter::category_count(animals, Category::Urgent);
            badge(row, &format!("{urgent} Urgentes"), DANGER);
            badge(
                row,
                &format!("{} Para Castração", filter::awaiting_castration(animals)),
                BRAND,
            );
        });
    });
    ui.add_space(12.0);
}

fn render_search(ui: &mut egui::Ui, animals: &[Animal], filters: &mut HomeFilters) {
    ui.add(
        egui::TextEdit::singleline(&mut filters.query)
            .hint_text("🔍 Buscar por nome ou descrição...")
            .desired_width(f32::INFINITY),
    );
    ui.horizontal_wrapped(|row| {
        for category in Category::ALL {
            let label = format!(
                "{} ({})",
                category.label(),
                filter::category_count(animals, category)
            );
            row.selectable_value(&mut filters.category, category, label);
        }
    });
    ui.add_space(12.0);
}

fn render_animal_card(ui: &mut egui::Ui, animal: &Animal, is_favorite: bool) -> Vec<Message> {
    let mut messages = Vec::new();
    ui.group(|card| {
        let width = card.available_width();
        images::photo_with_fallback(card, &animal.image, vec2(width, PHOTO_HEIGHT));

        card.horizontal(|row| {
            if let Some(text) = animal.urgency.badge() {
                badge(row, text, urgency_color(animal.urgency));
            }
            row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |lane| {
                let heart = if is_favorite {
                    RichText::new("♥").color(DANGER)
                } else {
                    RichText::new("♡")
                };
                if lane.button(heart.size(18.0)).clicked() {
                    messages.push(Message::ToggleFavorite(animal.id.clone()));
                }
            });
        });

        card.horizontal(|row| {
            row.label(RichText::new(&animal.name).size(18.0).strong());
            row.label(format!("{} {}", animal.species.icon(), animal.size.label()));
        });
        card.horizontal(|row| {
            row.label(format!("📅 {}", animal.age));
            row.label(format!("📍 {}", animal.location));
        });
        card.label(&animal.description);
        card.horizontal(|row| {
            if animal.vaccinated {
                badge(row, "💉 Vacinado", SUCCESS);
            }
            if animal.castrated {
                badge(row, "✂ Castrado", BRAND);
            }
        });

        card.horizontal(|row| {
            if row.button("ℹ Ver Mais").clicked() {
                messages.push(Message::ShowAnimal(animal.clone()));
            }
            if row
                .button(RichText::new("♥ Adotar").color(BRAND).strong())
                .clicked()
            {
                messages.push(Message::ShowAnimal(animal.clone()));
            }
        });
    });
    ui.add_space(12.0);
    messages
}

fn urgency_color(urgency: Urgency) -> Color32 {
    match urgency {
        Urgency::High => DANGER,
        Urgency::Medium => WARNING,
        Urgency::Low => SUCCESS,
        Urgency::None => Color32::GRAY,
    }
}

fn render_call_to_action(ui: &mut egui::Ui) {
    ui.add_space(16.0);
    egui::Frame::group(ui.style()).fill(BRAND).show(ui, |cta| {
        cta.vertical_centered(|center| {
            center.label(
                RichText::new("Não encontrou o pet ideal?")
                    .size(18.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            center.label(
                RichText::new("Cadastre-se para receber notificações de novos animais!")
                    .color(Color32::WHITE),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use eframe::egui::{Shape, epaint::ClippedShape};

    fn painted_text(shapes: &[ClippedShape]) -> Vec<String> {
        fn collect(shape: &Shape, out: &mut Vec<String>) {
            match shape {
                Shape::Text(text) => out.push(text.galley.text().to_owned()),
                Shape::Vec(inner) => inner.iter().for_each(|shape| collect(shape, out)),
                _ => {}
            }
        }
        let mut out = Vec::new();
        for clipped in shapes {
            collect(&clipped.shape, &mut out);
        }
        out
    }

    fn draw_home(filters: &mut HomeFilters) -> (Vec<Message>, Vec<String>) {
        let animals = fixtures::animals();
        let favorites = FavoriteSet::default();
        let ctx = egui::Context::default();
        let mut messages = Vec::new();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                messages = render(ui, &animals, filters, &favorites);
            });
        });
        (messages, painted_text(&output.shapes))
    }

    #[test]
    fn unmatched_query_shows_empty_state() {
        let mut filters = HomeFilters {
            query: "zzz".into(),
            category: Category::All,
        };
        let (messages, text) = draw_home(&mut filters);
        assert!(messages.is_empty());
        assert!(text.iter().any(|line| line == NO_RESULTS), "{text:?}");
        assert!(!text.iter().any(|line| line == "ℹ Ver Mais"));
    }

    #[test]
    fn matching_query_lists_cards() {
        let mut filters = HomeFilters {
            query: "luna".into(),
            category: Category::All,
        };
        let (messages, text) = draw_home(&mut filters);
        assert!(messages.is_empty());
        assert!(!text.iter().any(|line| line == NO_RESULTS));
        assert_eq!(text.iter().filter(|line| *line == "ℹ Ver Mais").count(), 1);
    }
}
