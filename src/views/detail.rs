use eframe::egui::{self, RichText, vec2};

use crate::{
    domain::Animal,
    images,
    router::View,
    state::Message,
};

use super::{BRAND, DANGER, SUCCESS, WARNING, badge};

/// Animal detail screen. Draws nothing when there is no subject.
pub fn render(ui: &mut egui::Ui, animal: Option<&Animal>) -> Vec<Message> {
    let mut messages = Vec::new();
    let Some(animal) = animal else {
        return messages;
    };

    if ui.button("← Voltar").clicked() {
        messages.push(Message::BackFromDetail);
    }
    ui.add_space(8.0);

    let width = ui.available_width();
    images::photo_with_fallback(ui, &animal.image, vec2(width, 240.0));
    ui.add_space(8.0);

    ui.group(|card| {
        card.label(RichText::new(&animal.name).size(22.0).strong());
        card.label(&animal.description);
        card.add_space(8.0);

        card.columns(2, |columns| {
            columns[0].strong("Características");
            columns[0].label(format!("Tipo: {}", animal.species.label()));
            columns[0].label(format!("Idade: {}", animal.age));
            columns[0].label(format!("Porte: {}", animal.size.label()));
            columns[0].label(format!("Local: {}", animal.location));

            columns[1].strong("Saúde");
            if animal.vaccinated {
                badge(&mut columns[1], "✓ Vacinado", SUCCESS);
            } else {
                badge(&mut columns[1], "⚠ Não vacinado", DANGER);
            }
            if animal.castrated {
                badge(&mut columns[1], "✓ Castrado", SUCCESS);
            } else {
                badge(&mut columns[1], "⚠ Não castrado", WARNING);
            }
        });

        card.add_space(8.0);
        card.horizontal(|row| {
            // Adoption requests go through the team on WhatsApp.
            if row
                .button(RichText::new("♥ Quero Adotar").color(BRAND).strong())
                .clicked()
            {
                messages.push(Message::OpenWhatsApp);
            }
            if row.button("💬 Enviar Mensagem").clicked() {
                messages.push(Message::Navigate(View::Messages));
            }
        });
    });
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subject_renders_nothing() {
        let ctx = egui::Context::default();
        let mut messages = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let before = ui.min_rect();
                messages = Some(render(ui, None));
                assert_eq!(ui.min_rect(), before);
            });
        });
        assert_eq!(messages.map(|m| m.len()), Some(0));
    }
}
