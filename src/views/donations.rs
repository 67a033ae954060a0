use std::time::Instant;

use eframe::egui::{self, Color32, RichText};
use tracing::warn;

use crate::{
    domain::{Cadence, Campaign, DonationStats, PaymentMethod, Priority, RecentDonation},
    donation::{DonationFlow, DonationStage, PaymentModal},
    fixtures::{IMPACT, MONTHLY_PRESETS, SINGLE_PRESETS},
    gateway::{MAX_INSTALLMENTS, PaymentGateway, installment_value},
};

use super::{
    BRAND, BRAND_BEIGE, BRAND_SKY, DANGER, SUCCESS, WARNING, badge, money, section_title,
};

pub struct DonationScreen<'a> {
    pub flow: &'a mut DonationFlow,
    pub campaigns: &'a [Campaign],
    pub stats: &'a DonationStats,
    pub recent: &'a [RecentDonation],
    pub pix_code: &'a str,
    pub gateway: &'a dyn PaymentGateway,
}

impl DonationScreen<'_> {
    pub fn render(self, ui: &mut egui::Ui, now: Instant) {
        render_header(ui);
        render_stats(ui, self.stats);
        render_campaigns(ui, self.flow, self.campaigns);

        if self.flow.stage() == DonationStage::Confirmed {
            render_confirmation(ui, self.flow);
        } else {
            render_form(ui, self.flow);
        }

        render_recent(ui, self.recent);
        render_impact(ui);

        let ctx = ui.ctx().clone();
        match self.flow.modal() {
            Some(PaymentModal::CampaignMethod) => render_campaign_method(&ctx, self.flow),
            Some(PaymentModal::Pix) => render_pix(&ctx, self.flow, self.pix_code, now),
            Some(PaymentModal::Card) => render_card(&ctx, self.flow, self.gateway),
            None => {}
        }

        if let Some(left) = self.flow.tick(now) {
            ctx.request_repaint_after(left);
        }
    }
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|center| {
        center.label(RichText::new("♥").size(36.0).color(BRAND));
        center.label(RichText::new("Ajude a ONDA ANIMAL").size(20.0).strong());
        center.weak("Sua doação salva vidas e ajuda animais a encontrarem um lar amoroso");
    });
    ui.add_space(8.0);
}

fn render_stats(ui: &mut egui::Ui, stats: &DonationStats) {
    ui.group(|card| {
        card.label(RichText::new(money(stats.current_month)).size(20.0).strong());
        card.weak(format!("de {} este mês", money(stats.monthly_goal)));
        card.add(egui::ProgressBar::new(stats.progress()).fill(BRAND));
        card.horizontal(|row| {
            row.label(format!("👥 {} doadores este mês", stats.total_donors));
            row.label(format!("💲 {} doação média", money(stats.average_donation)));
        });
    });
}

fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::High => DANGER,
        Priority::Medium => WARNING,
        Priority::Low => SUCCESS,
    }
}

fn render_campaigns(ui: &mut egui::Ui, flow: &mut DonationFlow, campaigns: &[Campaign]) {
    section_title(ui, "Campanhas Ativas");
    for campaign in campaigns {
        ui.push_id(campaign.id, |ui| {
            ui.group(|card| {
                card.horizontal(|row| {
                    row.strong(&campaign.title);
                    row.with_layout(egui::Layout::right_to_left(egui::Align::Min), |lane| {
                        badge(
                            lane,
                            &format!("{} dias", campaign.days_left),
                            priority_color(campaign.priority),
                        );
                    });
                });
                card.small(&campaign.description);
                card.horizontal(|row| {
                    row.label(money(campaign.current));
                    row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |lane| {
                        lane.label(money(campaign.target));
                    });
                });
                card.add(egui::ProgressBar::new(campaign.progress()).fill(BRAND));
                if card.button("Doar para esta campanha").clicked() {
                    flow.bind_campaign(campaign.clone());
                }
            });
        });
    }
}

fn render_form(ui: &mut egui::Ui, flow: &mut DonationFlow) {
    section_title(ui, "Fazer uma Doação");
    ui.group(|card| {
        let mut cadence = flow.cadence();
        card.horizontal(|row| {
            row.selectable_value(&mut cadence, Cadence::Single, "Doação Única");
            row.selectable_value(&mut cadence, Cadence::Monthly, "Doação Mensal");
        });
        if cadence != flow.cadence() {
            flow.set_cadence(cadence);
        }

        let presets = match flow.cadence() {
            Cadence::Single => SINGLE_PRESETS,
            Cadence::Monthly => {
                egui::Frame::group(card.style())
                    .fill(BRAND_SKY)
                    .show(card, |note| {
                        note.small(
                            "💛 Doação Mensal: Ajude de forma contínua! Você pode cancelar a qualquer momento.",
                        );
                    });
                MONTHLY_PRESETS
            }
        };

        card.label(match flow.cadence() {
            Cadence::Single => "Escolha o valor:",
            Cadence::Monthly => "Valor mensal:",
        });
        card.horizontal_wrapped(|row| {
            for amount in presets {
                let label = format!("R$ {amount}{}", flow.cadence().suffix());
                if row
                    .selectable_label(flow.preset() == Some(*amount), label)
                    .clicked()
                {
                    flow.select_preset(*amount);
                }
            }
        });

        if flow.cadence() == Cadence::Single {
            card.label("Ou digite um valor personalizado:");
            let mut custom = flow.custom_text().to_owned();
            let response = card.add(egui::TextEdit::singleline(&mut custom).hint_text("Ex: 150"));
            if response.changed() {
                flow.set_custom(custom);
            }
        }

        if !flow.shows_payment_options() {
            return;
        }

        card.separator();
        card.strong(format!(
            "Valor a doar: {}{}",
            money(flow.effective_amount()),
            flow.cadence().suffix()
        ));
        card.horizontal(|row| {
            if row
                .button(RichText::new("▦ Pagar com Pix").color(SUCCESS))
                .clicked()
            {
                choose(flow, PaymentMethod::Pix);
            }
            if row
                .button(RichText::new("💳 Cartão de Crédito").color(BRAND))
                .clicked()
            {
                choose(flow, PaymentMethod::Card);
            }
        });
    });
}

fn choose(flow: &mut DonationFlow, method: PaymentMethod) {
    if let Err(err) = flow.choose_method(method) {
        warn!(%err, "payment method unavailable");
    }
}

fn render_confirmation(ui: &mut egui::Ui, flow: &mut DonationFlow) {
    section_title(ui, "Fazer uma Doação");
    egui::Frame::group(ui.style()).fill(BRAND_SKY).show(ui, |card| {
        card.vertical_centered(|center| {
            center.label(RichText::new("✔").size(32.0).color(SUCCESS));
            center.strong("Pagamento processado com sucesso! Obrigado pela sua doação!");
            if center.button("Fazer outra doação").clicked() {
                flow.start_over();
            }
        });
    });
}

fn render_recent(ui: &mut egui::Ui, recent: &[RecentDonation]) {
    section_title(ui, "Doações Recentes");
    ui.group(|card| {
        for donation in recent {
            card.horizontal(|row| {
                row.label(RichText::new("♥").color(BRAND));
                row.vertical(|who| {
                    who.label(&donation.name);
                    who.weak(&donation.time);
                });
                row.with_layout(egui::Layout::right_to_left(egui::Align::Center), |lane| {
                    lane.vertical(|amount| {
                        amount.label(RichText::new(money(donation.amount)).color(SUCCESS).strong());
                        amount.small(donation.method.label());
                    });
                });
            });
            card.separator();
        }
    });
}

fn render_impact(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    egui::Frame::group(ui.style()).fill(BRAND).show(ui, |banner| {
        banner.vertical_centered(|center| {
            center.label(
                RichText::new("Seu impacto faz a diferença!")
                    .size(18.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
        banner.columns(IMPACT.len(), |columns| {
            for (column, (count, caption)) in columns.iter_mut().zip(IMPACT) {
                column.vertical_centered(|cell| {
                    cell.label(
                        RichText::new(count.to_string())
                            .size(24.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    cell.small(RichText::new(caption).color(Color32::WHITE));
                });
            }
        });
    });
}

// -----------------------------------------------------------------------------
// Payment modals
// -----------------------------------------------------------------------------

/// Payable amount and who receives it, shown atop both payment modals.
fn render_amount_banner(ui: &mut egui::Ui, flow: &DonationFlow) {
    ui.vertical_centered(|center| {
        let suffix = if flow.campaign().is_some() {
            ""
        } else {
            flow.cadence().suffix()
        };
        center.label(
            RichText::new(format!("{}{}", money(flow.payable_amount()), suffix))
                .size(22.0)
                .strong()
                .color(BRAND),
        );
        center.weak(
            flow.campaign()
                .map(|campaign| campaign.title.as_str())
                .unwrap_or("ONDA ANIMAL"),
        );
    });
}

fn render_campaign_method(ctx: &egui::Context, flow: &mut DonationFlow) {
    let Some(campaign) = flow.campaign().cloned() else {
        flow.close_modal();
        return;
    };

    let response = egui::Modal::new(egui::Id::new("campaign_method")).show(ctx, |ui| {
        ui.heading("Doar para Campanha");
        ui.weak("Escolha a forma de pagamento para contribuir com esta campanha específica");
        ui.separator();
        ui.label(RichText::new(&campaign.title).strong().color(BRAND));
        ui.small(&campaign.description);

        egui::Frame::group(ui.style()).fill(BRAND_BEIGE).show(ui, |card| {
            card.label(format!("Meta: {}", money(campaign.target)));
            card.label(format!("Arrecadado: {}", money(campaign.current)));
            card.label(
                RichText::new(format!("Faltam: {}", money(campaign.remaining())))
                    .color(DANGER)
                    .strong(),
            );
            card.add(egui::ProgressBar::new(campaign.progress()).fill(BRAND));
            card.horizontal(|row| {
                row.small(format!("{:.0}% concluído", campaign.progress() * 100.0));
                row.small(format!("{} dias restantes", campaign.days_left));
            });
        });

        ui.label("Escolha a forma de pagamento:");
        if ui
            .button(RichText::new("▦ Pagar com PIX").color(SUCCESS))
            .clicked()
        {
            choose(flow, PaymentMethod::Pix);
        }
        if ui
            .button(RichText::new("💳 Cartão de Crédito").color(BRAND))
            .clicked()
        {
            choose(flow, PaymentMethod::Card);
        }
        ui.small("💙 Sua doação será destinada exclusivamente para esta campanha!");
    });

    if response.should_close() {
        flow.close_modal();
    }
}

fn render_pix(ctx: &egui::Context, flow: &mut DonationFlow, pix_code: &str, now: Instant) {
    let response = egui::Modal::new(egui::Id::new("pix_payment")).show(ctx, |ui| {
        ui.vertical_centered(|center| {
            center.heading("Pagamento via PIX");
            center.weak("Faça sua doação através do PIX de forma rápida e segura");
        });
        render_amount_banner(ui, flow);
        ui.separator();
        ui.small("Escaneie o QR Code com o app do seu banco ou copie o código PIX");
        ui.small("Código PIX:");
        ui.add(
            egui::Label::new(RichText::new(pix_code).monospace().small()).wrap(),
        );

        let copied = flow.copied(now);
        let label = if copied {
            "✔ Código Copiado!"
        } else {
            "📋 Copiar Código PIX"
        };
        if ui.add_enabled(!copied, egui::Button::new(label)).clicked() {
            ui.ctx().copy_text(pix_code.to_owned());
            flow.mark_copied(now);
        }

        ui.small(
            "💚 Após o pagamento, o comprovante será enviado automaticamente por email. \
             Sua doação ajudará diretamente os animais da ONDA ANIMAL!",
        );
    });

    if response.should_close() {
        flow.close_modal();
    }
}

fn render_card(ctx: &egui::Context, flow: &mut DonationFlow, gateway: &dyn PaymentGateway) {
    let mut cancel = false;
    let response = egui::Modal::new(egui::Id::new("card_payment")).show(ctx, |ui| {
        ui.vertical_centered(|center| {
            center.heading("Pagamento com Cartão");
            center.weak("Preencha os dados do seu cartão de crédito para finalizar a doação");
        });
        render_amount_banner(ui, flow);
        ui.separator();

        let payable = flow.payable_amount();
        let card = &mut flow.card;
        let mut edited = false;

        ui.label("Número do Cartão");
        edited |= ui
            .add(egui::TextEdit::singleline(&mut card.number).hint_text("1234 5678 9012 3456"))
            .changed();
        ui.label("Nome no Cartão");
        ui.add(egui::TextEdit::singleline(&mut card.holder).hint_text("Seu nome completo"));
        ui.horizontal(|row| {
            row.vertical(|col| {
                col.label("Validade");
                edited |= col
                    .add(
                        egui::TextEdit::singleline(&mut card.expiry)
                            .hint_text("MM/AA")
                            .desired_width(70.0),
                    )
                    .changed();
            });
            row.vertical(|col| {
                col.label("CVV");
                edited |= col
                    .add(
                        egui::TextEdit::singleline(&mut card.cvv)
                            .hint_text("123")
                            .desired_width(50.0),
                    )
                    .changed();
            });
        });
        if edited {
            card.normalize();
        }

        ui.label("Parcelamento");
        egui::ComboBox::from_id_salt("installments")
            .selected_text(installment_label(card.installments, payable))
            .show_ui(ui, |combo| {
                for count in 1..=MAX_INSTALLMENTS {
                    combo.selectable_value(
                        &mut card.installments,
                        count,
                        installment_label(count, payable),
                    );
                }
            });

        ui.small(
            "🔒 Seus dados estão protegidos com criptografia SSL. \
             Esta é uma simulação - nenhum valor será cobrado.",
        );

        if let Some(error) = &flow.last_failure {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        ui.horizontal(|row| {
            if row.button("Cancelar").clicked() {
                cancel = true;
            }
            if row
                .button(RichText::new("Finalizar Pagamento").color(BRAND).strong())
                .clicked()
            {
                if let Err(err) = flow.submit_card(gateway) {
                    flow.last_failure = Some(err.to_string());
                }
            }
        });
    });

    if cancel || response.should_close() {
        flow.close_modal();
    }
}

fn installment_label(count: u8, total: rust_decimal::Decimal) -> String {
    format!(
        "{count}x de {} sem juros",
        money(installment_value(total, count))
    )
}
