//! Sample data standing in for a live data source.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{
    Animal, Appointment, AppointmentStatus, Campaign, DonationStats, PaymentMethod, Priority,
    RecentDonation, Size, Species, Urgency,
};

pub const CLINICS: &[&str] = &[
    "Clínica Veterinária Central",
    "Clínica Veterinária Norte",
    "Clínica Veterinária Sul",
];

pub const APPOINTMENT_SPECIES: &[&str] = &["Cão", "Gata"];

pub const SINGLE_PRESETS: &[u32] = &[10, 25, 50, 100, 200, 500];
pub const MONTHLY_PRESETS: &[u32] = &[20, 50, 100];

pub fn animals() -> Vec<Animal> {
    vec![
        animal(
            "1",
            "Buddy",
            Species::Dog,
            "2 anos",
            Size::Medium,
            "Porto Alegre",
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=300&fit=crop",
            "Cachorro muito carinhoso e brincalhão, adora crianças e outros pets. Precisa de uma família amorosa.",
            (true, true),
            Urgency::High,
        ),
        animal(
            "2",
            "Luna",
            Species::Cat,
            "1 ano",
            Size::Small,
            "Alvorada",
            "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=400&h=300&fit=crop",
            "Gatinha dócil e independente, ideal para apartamento. Gosta de carinho e de observar pela janela.",
            (true, false),
            Urgency::Medium,
        ),
        animal(
            "3",
            "Rex",
            Species::Dog,
            "5 anos",
            Size::Large,
            "Porto Alegre",
            "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=300&fit=crop",
            "Cão adulto, muito tranquilo e obediente. Ótimo guardião e companheiro para toda a família.",
            (true, true),
            Urgency::None,
        ),
        animal(
            "4",
            "Mia",
            Species::Cat,
            "6 meses",
            Size::Small,
            "Canoas",
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400&h=300&fit=crop",
            "Filhote de gata, muito ativa e curiosa. Precisa de uma família que tenha tempo para brincar.",
            (true, false),
            Urgency::High,
        ),
        animal(
            "5",
            "Toby",
            Species::Dog,
            "3 anos",
            Size::Small,
            "Porto Alegre",
            "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=400&h=300&fit=crop",
            "Pequeno e corajoso, adora passear e conhecer novos lugares. Perfeito para quem tem estilo de vida ativo.",
            (true, true),
            Urgency::Low,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn animal(
    id: &str,
    name: &str,
    species: Species,
    age: &str,
    size: Size,
    location: &str,
    image: &str,
    description: &str,
    (vaccinated, castrated): (bool, bool),
    urgency: Urgency,
) -> Animal {
    Animal {
        id: id.to_owned(),
        name: name.to_owned(),
        species,
        age: age.to_owned(),
        size,
        location: location.to_owned(),
        image: image.to_owned(),
        description: description.to_owned(),
        vaccinated,
        castrated,
        urgency,
    }
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        appointment(
            "1",
            ("Buddy", "Cão"),
            ("Maria Silva", "(51) 99999-9999"),
            (2025, 8, 15),
            (14, 0),
            CLINICS[0],
            AppointmentStatus::Confirmed,
            "Primeira castração, animal nervoso",
        ),
        appointment(
            "2",
            ("Luna", "Gata"),
            ("João Santos", "(51) 88888-8888"),
            (2025, 8, 18),
            (9, 30),
            CLINICS[1],
            AppointmentStatus::Pending,
            "Confirmar jejum de 12 horas",
        ),
        appointment(
            "3",
            ("Rex", "Cão"),
            ("Ana Costa", "(51) 77777-7777"),
            (2025, 8, 12),
            (10, 0),
            CLINICS[2],
            AppointmentStatus::Completed,
            "Castração realizada com sucesso",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    (pet_name, pet_species): (&str, &str),
    (owner_name, owner_phone): (&str, &str),
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    location: &str,
    status: AppointmentStatus,
    notes: &str,
) -> Appointment {
    Appointment {
        id: id.to_owned(),
        pet_name: pet_name.to_owned(),
        pet_species: pet_species.to_owned(),
        owner_name: owner_name.to_owned(),
        owner_phone: owner_phone.to_owned(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        location: location.to_owned(),
        status,
        notes: Some(notes.to_owned()),
    }
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            title: "Castração de Emergência - Agosto".into(),
            description: "Meta para realizar 20 castrações em animais resgatados".into(),
            target: dec!(2000),
            current: dec!(1450),
            days_left: 8,
            priority: Priority::High,
        },
        Campaign {
            id: 2,
            title: "Medicamentos para Tratamento".into(),
            description: "Antibióticos e anti-inflamatórios para animais em recuperação".into(),
            target: dec!(800),
            current: dec!(620),
            days_left: 15,
            priority: Priority::Medium,
        },
        Campaign {
            id: 3,
            title: "Ração para Lares Temporários".into(),
            description: "Alimentação para 30 animais em lares provisórios".into(),
            target: dec!(1500),
            current: dec!(890),
            days_left: 22,
            priority: Priority::Low,
        },
    ]
}

pub fn donation_stats() -> DonationStats {
    DonationStats {
        monthly_goal: dec!(5000),
        current_month: dec!(3200),
        total_donors: 124,
        average_donation: dec!(75),
    }
}

pub fn recent_donations() -> Vec<RecentDonation> {
    let entry = |name: &str, amount: Decimal, time: &str, method| RecentDonation {
        name: name.to_owned(),
        amount,
        time: time.to_owned(),
        method,
    };
    vec![
        entry("Maria S.", dec!(100), "2 horas atrás", PaymentMethod::Pix),
        entry("João P.", dec!(50), "5 horas atrás", PaymentMethod::Card),
        entry("Ana C.", dec!(200), "1 dia atrás", PaymentMethod::Pix),
        entry("Carlos M.", dec!(75), "1 dia atrás", PaymentMethod::Card),
    ]
}

/// Castrated, adopted and rescued counters shown on the impact banner.
pub const IMPACT: [(u32, &str); 3] = [
    (156, "Animais castrados"),
    (89, "Adoções realizadas"),
    (234, "Animais salvos"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn animal_ids_are_unique() {
        let animals = animals();
        let ids: HashSet<_> = animals.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), animals.len());
    }

    #[test]
    fn every_urgency_level_is_represented() {
        let animals = animals();
        for urgency in [Urgency::High, Urgency::Medium, Urgency::Low, Urgency::None] {
            assert!(
                animals.iter().any(|animal| animal.urgency == urgency),
                "{urgency:?}"
            );
        }
    }

    #[test]
    fn campaigns_stay_under_target() {
        for campaign in campaigns() {
            assert!(campaign.current <= campaign.target, "{}", campaign.title);
        }
    }
}
