//! Donation flow: amount selection, payment method, payment modals and confirmation.
//!
//! Preset and custom amounts are mutually exclusive; whichever was set last wins.
//! A donation bound to a campaign pays the campaign's remaining need instead.

use std::str::FromStr;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{Cadence, Campaign, PaymentMethod};
use crate::gateway::{PaymentGateway, PaymentRequest, PaymentResult};

pub const COPY_CONFIRMATION_TTL: Duration = Duration::from_secs(3);

const CARD_DIGITS: usize = 16;
const EXPIRY_DIGITS: usize = 4;
const CVV_DIGITS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonationStage {
    AmountPending,
    AmountChosen,
    MethodChosen(PaymentMethod),
    Confirmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentModal {
    /// Method picker shown after choosing a campaign.
    CampaignMethod,
    Pix,
    Card,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DonationError {
    #[error("Preencha o campo obrigatório: {0}")]
    MissingField(&'static str),
    #[error("Escolha um valor antes de continuar")]
    NothingToPay,
}

#[derive(Debug, Default)]
pub struct DonationFlow {
    preset: Option<u32>,
    custom: String,
    cadence: Cadence,
    campaign: Option<Campaign>,
    modal: Option<PaymentModal>,
    confirmed: bool,
    pub card: CardForm,
    pub last_failure: Option<String>,
    copy_confirmation: CopyConfirmation,
}

impl DonationFlow {
    pub fn preset(&self) -> Option<u32> {
        self.preset
    }

    pub fn custom_text(&self) -> &str {
        &self.custom
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn campaign(&self) -> Option<&Campaign> {
        self.campaign.as_ref()
    }

    pub fn modal(&self) -> Option<PaymentModal> {
        self.modal
    }

    pub fn select_preset(&mut self, amount: u32) {
        self.preset = Some(amount);
        self.custom.clear();
        self.confirmed = false;
    }

    pub fn set_custom(&mut self, raw: impl Into<String>) {
        self.custom = raw.into();
        self.preset = None;
        self.confirmed = false;
    }

    pub fn set_cadence(&mut self, cadence: Cadence) {
        self.cadence = cadence;
    }

    /// Preset if one is selected, else the parsed custom amount, else zero.
    pub fn effective_amount(&self) -> Decimal {
        match self.preset {
            Some(preset) => Decimal::from(preset),
            None => parse_amount(&self.custom),
        }
    }

    /// What the payment modals charge: the campaign's remaining need when bound.
    pub fn payable_amount(&self) -> Decimal {
        match &self.campaign {
            Some(campaign) => campaign.remaining(),
            None => self.effective_amount(),
        }
    }

    /// The pay-with buttons only exist for a positive amount.
    pub fn shows_payment_options(&self) -> bool {
        self.effective_amount() > Decimal::ZERO
    }

    pub fn stage(&self) -> DonationStage {
        match self.modal {
            Some(PaymentModal::Pix) => DonationStage::MethodChosen(PaymentMethod::Pix),
            Some(PaymentModal::Card) => DonationStage::MethodChosen(PaymentMethod::Card),
            _ if self.confirmed => DonationStage::Confirmed,
            _ if self.payable_amount() > Decimal::ZERO => DonationStage::AmountChosen,
            _ => DonationStage::AmountPending,
        }
    }

    pub fn bind_campaign(&mut self, campaign: Campaign) {
        debug!(campaign = campaign.id, "donation bound to campaign");
        self.campaign = Some(campaign);
        self.confirmed = false;
        self.modal = Some(PaymentModal::CampaignMethod);
    }

    pub fn choose_method(&mut self, method: PaymentMethod) -> Result<(), DonationError> {
        if self.payable_amount() <= Decimal::ZERO {
            return Err(DonationError::NothingToPay);
        }
        self.last_failure = None;
        self.modal = Some(match method {
            PaymentMethod::Pix => PaymentModal::Pix,
            PaymentMethod::Card => PaymentModal::Card,
        });
        Ok(())
    }

    /// Dismisses whatever modal is open and releases the campaign binding.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.campaign = None;
        self.last_failure = None;
        self.copy_confirmation.cancel();
    }

    /// Drops transient state when the donations screen goes away.
    pub fn teardown(&mut self) {
        self.close_modal();
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copy_confirmation.trigger(now);
    }

    pub fn copied(&self, now: Instant) -> bool {
        self.copy_confirmation.is_active(now)
    }

    /// Clears the copy flag once its deadline passed. Returns the time left, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        self.copy_confirmation.tick(now)
    }

    pub fn submit_card(
        &mut self,
        gateway: &dyn PaymentGateway,
    ) -> Result<PaymentResult, DonationError> {
        self.card.check_required()?;
        let amount = self.payable_amount();
        if amount <= Decimal::ZERO {
            return Err(DonationError::NothingToPay);
        }

        let request = PaymentRequest {
            amount,
            cadence: self.cadence,
            method: PaymentMethod::Card,
            installments: self.card.installments,
            campaign_id: self.campaign.as_ref().map(|campaign| campaign.id),
        };

        let result = gateway.process(&request);
        match &result {
            PaymentResult::Success => {
                info!(amount = %amount, "donation confirmed");
                self.close_modal();
                self.card = CardForm::default();
                self.confirmed = true;
            }
            PaymentResult::Failure(reason) => {
                warn!(%reason, "payment rejected");
                self.last_failure = Some(reason.clone());
            }
        }
        Ok(result)
    }

    /// Leaves the confirmation screen for a fresh donation.
    pub fn start_over(&mut self) {
        self.preset = None;
        self.custom.clear();
        self.confirmed = false;
    }
}

/// Parses a typed amount. Anything unparsable or negative counts as zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', ".");
    match Decimal::from_str(&normalized) {
        Ok(value) if value > Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}

#[derive(Debug)]
pub struct CardForm {
    pub number: String,
    pub holder: String,
    pub expiry: String,
    pub cvv: String,
    pub installments: u8,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            number: String::new(),
            holder: String::new(),
            expiry: String::new(),
            cvv: String::new(),
            installments: 1,
        }
    }
}

impl CardForm {
    /// Re-applies input masks after an edit.
    pub fn normalize(&mut self) {
        self.number = format_card_number(&self.number);
        self.expiry = format_expiry(&self.expiry);
        self.cvv = digits(&self.cvv, CVV_DIGITS);
    }

    fn check_required(&self) -> Result<(), DonationError> {
        let fields = [
            (&self.number, "Número do Cartão"),
            (&self.holder, "Nome no Cartão"),
            (&self.expiry, "Validade"),
            (&self.cvv, "CVV"),
        ];
        match fields.iter().find(|(value, _)| value.trim().is_empty()) {
            Some((_, name)) => Err(DonationError::MissingField(*name)),
            None => Ok(()),
        }
    }
}

fn digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// `4111111111111111` becomes `4111 1111 1111 1111`.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = digits(raw, CARD_DIGITS).chars().collect();
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `1227` becomes `12/27`; the slash appears as soon as the month is complete.
pub fn format_expiry(raw: &str) -> String {
    let digits = digits(raw, EXPIRY_DIGITS);
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

// -----------------------------------------------------------------------------
// Copy confirmation
// -----------------------------------------------------------------------------

#[derive(Debug, Default)]
struct CopyConfirmation {
    deadline: Option<Instant>,
}

impl CopyConfirmation {
    fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + COPY_CONFIRMATION_TTL);
    }

    fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    fn tick(&mut self, now: Instant) -> Option<Duration> {
        let deadline = self.deadline?;
        if now >= deadline {
            self.deadline = None;
            None
        } else {
            Some(deadline - now)
        }
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal_macros::dec;

    struct DecliningGateway;

    impl PaymentGateway for DecliningGateway {
        fn process(&self, _request: &PaymentRequest) -> PaymentResult {
            PaymentResult::Failure("cartão recusado".into())
        }
    }

    fn filled_card() -> CardForm {
        CardForm {
            number: "4111 1111 1111 1111".into(),
            holder: "Maria Silva".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            installments: 2,
        }
    }

    #[test]
    fn custom_after_preset_wins() {
        let mut flow = DonationFlow::default();
        flow.select_preset(50);
        flow.set_custom("30");
        assert_eq!(flow.effective_amount(), dec!(30));
        assert_eq!(flow.preset(), None);
    }

    #[test]
    fn preset_after_custom_wins() {
        let mut flow = DonationFlow::default();
        flow.set_custom("30");
        flow.select_preset(50);
        assert_eq!(flow.effective_amount(), dec!(50));
        assert_eq!(flow.custom_text(), "");
    }

    #[test]
    fn empty_amount_hides_payment_options() {
        let flow = DonationFlow::default();
        assert_eq!(flow.effective_amount(), Decimal::ZERO);
        assert!(!flow.shows_payment_options());
        assert_eq!(flow.stage(), DonationStage::AmountPending);
    }

    #[test]
    fn malformed_custom_amounts_are_zero() {
        for raw in ["", "abc", "-5", "0", "  "] {
            assert_eq!(parse_amount(raw), Decimal::ZERO, "{raw:?}");
        }
        assert_eq!(parse_amount(" 12,50 "), dec!(12.50));
    }

    #[test]
    fn cannot_pick_method_without_amount() {
        let mut flow = DonationFlow::default();
        assert_eq!(
            flow.choose_method(PaymentMethod::Pix),
            Err(DonationError::NothingToPay)
        );
        assert_eq!(flow.modal(), None);
    }

    #[test]
    fn campaign_binding_pays_remaining_need() {
        let mut flow = DonationFlow::default();
        flow.select_preset(10);
        let campaign = fixtures::campaigns().remove(0);
        flow.bind_campaign(campaign);
        assert_eq!(flow.modal(), Some(PaymentModal::CampaignMethod));
        assert_eq!(flow.payable_amount(), dec!(550));
        flow.choose_method(PaymentMethod::Card).unwrap();
        assert_eq!(flow.stage(), DonationStage::MethodChosen(PaymentMethod::Card));
    }

    #[test]
    fn closing_modal_releases_campaign() {
        let mut flow = DonationFlow::default();
        flow.bind_campaign(fixtures::campaigns().remove(1));
        flow.close_modal();
        assert!(flow.campaign().is_none());
        assert_eq!(flow.payable_amount(), Decimal::ZERO);
    }

    #[test]
    fn successful_card_payment_confirms() {
        let mut flow = DonationFlow::default();
        flow.select_preset(100);
        flow.choose_method(PaymentMethod::Card).unwrap();
        flow.card = filled_card();

        let result = flow.submit_card(&crate::gateway::SimulatedGateway).unwrap();
        assert_eq!(result, PaymentResult::Success);
        assert_eq!(flow.modal(), None);
        assert_eq!(flow.stage(), DonationStage::Confirmed);
        assert!(flow.card.number.is_empty());

        flow.start_over();
        assert_eq!(flow.stage(), DonationStage::AmountPending);
    }

    #[test]
    fn declined_card_keeps_modal_open() {
        let mut flow = DonationFlow::default();
        flow.select_preset(25);
        flow.choose_method(PaymentMethod::Card).unwrap();
        flow.card = filled_card();

        let result = flow.submit_card(&DecliningGateway).unwrap();
        assert!(matches!(result, PaymentResult::Failure(_)));
        assert_eq!(flow.modal(), Some(PaymentModal::Card));
        assert_eq!(flow.last_failure.as_deref(), Some("cartão recusado"));
    }

    #[test]
    fn card_requires_every_field() {
        let mut flow = DonationFlow::default();
        flow.select_preset(25);
        flow.choose_method(PaymentMethod::Card).unwrap();
        flow.card = CardForm {
            cvv: String::new(),
            ..filled_card()
        };
        assert_eq!(
            flow.submit_card(&crate::gateway::SimulatedGateway),
            Err(DonationError::MissingField("CVV"))
        );
    }

    #[test]
    fn card_number_groups_of_four() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("41 11-11a1"), "4111 111");
        assert_eq!(format_card_number("41111111111111119999"), "4111 1111 1111 1111");
    }

    #[test]
    fn expiry_inserts_slash_after_month() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12/279"), "12/27");
    }

    #[test]
    fn normalize_masks_every_field() {
        let mut card = CardForm {
            number: "41111111".into(),
            holder: "Ana".into(),
            expiry: "0830".into(),
            cvv: "12a34".into(),
            installments: 1,
        };
        card.normalize();
        assert_eq!(card.number, "4111 1111");
        assert_eq!(card.expiry, "08/30");
        assert_eq!(card.cvv, "1234");
    }

    #[test]
    fn copy_flag_expires_after_three_seconds() {
        let mut flow = DonationFlow::default();
        let start = Instant::now();
        flow.mark_copied(start);
        assert!(flow.copied(start + Duration::from_secs(2)));
        assert!(flow.tick(start + Duration::from_secs(2)).is_some());
        assert!(!flow.copied(start + COPY_CONFIRMATION_TTL));
        assert!(flow.tick(start + Duration::from_secs(4)).is_none());
        assert!(!flow.copied(start));
    }

    #[test]
    fn teardown_cancels_copy_flag() {
        let mut flow = DonationFlow::default();
        flow.select_preset(10);
        flow.choose_method(PaymentMethod::Pix).unwrap();
        let now = Instant::now();
        flow.mark_copied(now);
        flow.teardown();
        assert!(!flow.copied(now));
        assert_eq!(flow.modal(), None);
    }
}
