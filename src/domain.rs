use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Domain data structures shared across modules.

#[derive(Clone, Debug, PartialEq)]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub age: String,
    pub size: Size,
    pub location: String,
    pub image: String,
    pub description: String,
    pub vaccinated: bool,
    pub castrated: bool,
    pub urgency: Urgency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Cachorro",
            Species::Cat => "Gato",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Species::Dog => "🐕",
            Species::Cat => "🐱",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Pequeno",
            Size::Medium => "Médio",
            Size::Large => "Grande",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    High,
    Medium,
    Low,
    None,
}

impl Urgency {
    /// Badge text shown on the animal card; `None` renders no badge.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Urgency::High => Some("Urgente"),
            Urgency::Medium => Some("Prioridade"),
            Urgency::Low => Some("Disponível"),
            Urgency::None => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub pet_name: String,
    pub pet_species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "⏳ Pendente",
            AppointmentStatus::Confirmed => "✓ Confirmado",
            AppointmentStatus::Completed => "✓ Concluído",
            AppointmentStatus::Cancelled => "✗ Cancelado",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub target: Decimal,
    pub current: Decimal,
    pub days_left: u32,
    pub priority: Priority,
}

impl Campaign {
    /// What is still missing to reach the target. Overfunded campaigns need nothing.
    pub fn remaining(&self) -> Decimal {
        (self.target - self.current).max(Decimal::ZERO)
    }

    pub fn progress(&self) -> f32 {
        ratio(self.current, self.target)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cadence {
    #[default]
    Single,
    Monthly,
}

impl Cadence {
    pub fn suffix(&self) -> &'static str {
        match self {
            Cadence::Single => "",
            Cadence::Monthly => "/mês",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Pix,
    Card,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Card => "Cartão",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DonationStats {
    pub monthly_goal: Decimal,
    pub current_month: Decimal,
    pub total_donors: u32,
    pub average_donation: Decimal,
}

impl DonationStats {
    pub fn progress(&self) -> f32 {
        ratio(self.current_month, self.monthly_goal)
    }
}

#[derive(Clone, Debug)]
pub struct RecentDonation {
    pub name: String,
    pub amount: Decimal,
    pub time: String,
    pub method: PaymentMethod,
}

/// Who is using the client. Resolved once at startup.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Adopter,
    Volunteer,
    #[default]
    Admin,
}

impl Role {
    pub fn can_view_reports(&self) -> bool {
        matches!(self, Role::Admin | Role::Volunteer)
    }
}

fn ratio(part: Decimal, whole: Decimal) -> f32 {
    use rust_decimal::prelude::ToPrimitive;

    if whole <= Decimal::ZERO {
        return 0.0;
    }
    (part / whole).to_f32().unwrap_or(0.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn campaign(target: Decimal, current: Decimal) -> Campaign {
        Campaign {
            id: 1,
            title: "Teste".into(),
            description: String::new(),
            target,
            current,
            days_left: 3,
            priority: Priority::Low,
        }
    }

    #[test]
    fn remaining_need_is_target_minus_current() {
        assert_eq!(campaign(dec!(2000), dec!(1450)).remaining(), dec!(550));
    }

    #[test]
    fn overfunded_campaign_needs_nothing() {
        let overfunded = campaign(dec!(100), dec!(150));
        assert_eq!(overfunded.remaining(), Decimal::ZERO);
        assert_eq!(overfunded.progress(), 1.0);
    }

    #[test]
    fn only_staff_roles_see_reports() {
        assert!(Role::Admin.can_view_reports());
        assert!(Role::Volunteer.can_view_reports());
        assert!(!Role::Adopter.can_view_reports());
    }

    #[test]
    fn closed_statuses() {
        assert!(AppointmentStatus::Completed.is_closed());
        assert!(AppointmentStatus::Cancelled.is_closed());
        assert!(!AppointmentStatus::Pending.is_closed());
        assert!(!AppointmentStatus::Confirmed.is_closed());
    }
}
