use chrono::NaiveDate;
use eframe::egui::{self, Color32, RichText};

use crate::{
    appointments::{AppointmentBook, format_long_date},
    domain::{Appointment, AppointmentStatus},
    fixtures::{APPOINTMENT_SPECIES, CLINICS},
    state::AppointmentForm,
};

use super::{BRAND, DANGER, SUCCESS, WARNING, badge, empty_state, section_title, stat_tile};

enum AppointmentAction {
    Confirm(String),
}

pub fn render(
    ui: &mut egui::Ui,
    book: &mut AppointmentBook,
    form: &mut Option<AppointmentForm>,
    today: NaiveDate,
) {
    ui.horizontal(|row| {
        row.vertical(|title| {
            title.label(RichText::new("Agendamentos de Castração").size(20.0).strong());
            title.weak("Gerencie os agendamentos para castração dos animais");
        });
    });
    if ui
        .button(RichText::new("＋ Novo Agendamento").color(BRAND).strong())
        .clicked()
    {
        *form = Some(AppointmentForm::default());
    }
    ui.add_space(8.0);

    let stats = book.stats(today);
    ui.columns(4, |columns| {
        stat_tile(&mut columns[0], &stats.upcoming.to_string(), "Próximos", WARNING);
        stat_tile(&mut columns[1], &stats.completed.to_string(), "Concluídos", SUCCESS);
        stat_tile(&mut columns[2], &stats.pending.to_string(), "Pendentes", BRAND);
        stat_tile(&mut columns[3], &stats.total.to_string(), "Total", Color32::BLACK);
    });

    let mut actions = Vec::new();

    section_title(ui, "Próximos Agendamentos");
    let upcoming = book.upcoming(today);
    if upcoming.is_empty() {
        empty_state(ui, "📅", "Nenhum agendamento próximo", "");
        ui.vertical_centered(|center| {
            if center.button("Criar Primeiro Agendamento").clicked() {
                *form = Some(AppointmentForm::default());
            }
        });
    } else {
        for appointment in upcoming {
            actions.extend(render_card(ui, appointment));
        }
    }

    let past = book.past(today);
    if !past.is_empty() {
        section_title(ui, "Histórico");
        for appointment in past {
            actions.extend(render_card(ui, appointment));
        }
    }

    for action in actions {
        match action {
            AppointmentAction::Confirm(id) => {
                book.confirm(&id);
            }
        }
    }

    render_form(ui.ctx(), book, form);
}

fn render_card(ui: &mut egui::Ui, appointment: &Appointment) -> Vec<AppointmentAction> {
    let mut actions = Vec::new();
    ui.push_id(&appointment.id, |ui| {
        ui.group(|card| {
            card.horizontal(|row| {
                row.vertical(|pet| {
                    pet.strong(&appointment.pet_name);
                    pet.weak(&appointment.pet_species);
                });
                row.with_layout(egui::Layout::right_to_left(egui::Align::Min), |lane| {
                    badge(lane, appointment.status.label(), status_color(appointment.status));
                });
            });
            card.label(format!("👤 {}", appointment.owner_name));
            card.label(format!("📞 {}", appointment.owner_phone));
            card.label(format!("📅 {}", format_long_date(appointment.date)));
            card.label(format!("🕑 {}", appointment.time.format("%H:%M")));
            card.label(format!("📍 {}", appointment.location));
            if let Some(notes) = &appointment.notes {
                card.label(
                    RichText::new(format!("Observações: {notes}")).color(Color32::DARK_GRAY),
                );
            }
            if appointment.status == AppointmentStatus::Pending
                && card
                    .button(RichText::new("✔ Confirmar").color(SUCCESS))
                    .clicked()
            {
                actions.push(AppointmentAction::Confirm(appointment.id.clone()));
            }
        });
    });
    ui.add_space(8.0);
    actions
}

fn status_color(status: AppointmentStatus) -> Color32 {
    match status {
        AppointmentStatus::Confirmed => SUCCESS,
        AppointmentStatus::Pending => WARNING,
        AppointmentStatus::Completed => BRAND,
        AppointmentStatus::Cancelled => DANGER,
    }
}

fn render_form(ctx: &egui::Context, book: &mut AppointmentBook, form: &mut Option<AppointmentForm>) {
    let Some(state) = form.as_mut() else {
        return;
    };

    let mut close = false;
    let response = egui::Modal::new(egui::Id::new("new_appointment")).show(ctx, |ui| {
        ui.heading("Novo Agendamento de Castração");
        ui.weak("Preencha os dados abaixo para agendar uma castração para o animal.");
        ui.separator();

        let draft = &mut state.draft;
        ui.label("Nome do Pet");
        ui.text_edit_singleline(&mut draft.pet_name);

        ui.label("Tipo");
        egui::ComboBox::from_id_salt("appointment_species")
            .selected_text(placeholder_or(&draft.pet_species, "Selecione"))
            .show_ui(ui, |combo| {
                for species in APPOINTMENT_SPECIES {
                    combo.selectable_value(&mut draft.pet_species, (*species).to_owned(), *species);
                }
            });

        ui.label("Nome do Responsável");
        ui.text_edit_singleline(&mut draft.owner_name);

        ui.label("Telefone");
        ui.add(egui::TextEdit::singleline(&mut draft.owner_phone).hint_text("(00) 00000-0000"));

        ui.horizontal(|row| {
            row.vertical(|col| {
                col.label("Data");
                col.add(
                    egui::TextEdit::singleline(&mut draft.date)
                        .hint_text("AAAA-MM-DD")
                        .desired_width(110.0),
                );
            });
            row.vertical(|col| {
                col.label("Horário");
                col.add(
                    egui::TextEdit::singleline(&mut draft.time)
                        .hint_text("HH:MM")
                        .desired_width(70.0),
                );
            });
        });

        ui.label("Local");
        egui::ComboBox::from_id_salt("appointment_clinic")
            .selected_text(placeholder_or(&draft.location, "Selecione a clínica"))
            .show_ui(ui, |combo| {
                for clinic in CLINICS {
                    combo.selectable_value(&mut draft.location, (*clinic).to_owned(), *clinic);
                }
            });

        ui.label("Observações");
        ui.add(
            egui::TextEdit::multiline(&mut draft.notes)
                .hint_text("Informações importantes sobre o animal...")
                .desired_rows(3),
        );

        if let Some(error) = &state.error {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        ui.horizontal(|row| {
            if row.button("Cancelar").clicked() {
                close = true;
            }
            if row
                .button(RichText::new("Agendar").color(BRAND).strong())
                .clicked()
            {
                match book.create(&state.draft) {
                    Ok(_) => close = true,
                    Err(err) => state.error = Some(err.to_string()),
                }
            }
        });
    });

    if close || response.should_close() {
        *form = None;
    }
}

fn placeholder_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
