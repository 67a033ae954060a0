use chrono::{Locale, NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Appointment, AppointmentStatus};
use crate::fixtures::{APPOINTMENT_SPECIES, CLINICS};

/// Sterilization appointments, in the order they were scheduled.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    entries: Vec<Appointment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentStats {
    pub upcoming: usize,
    pub completed: usize,
    pub pending: usize,
    pub total: usize,
}

impl AppointmentBook {
    pub fn new(entries: Vec<Appointment>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Still ahead and still open. A cancelled appointment is never upcoming,
    /// whatever its date.
    pub fn is_upcoming(appointment: &Appointment, today: NaiveDate) -> bool {
        appointment.date >= today && !appointment.status.is_closed()
    }

    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Appointment> {
        self.entries
            .iter()
            .filter(|appointment| Self::is_upcoming(appointment, today))
            .collect()
    }

    pub fn past(&self, today: NaiveDate) -> Vec<&Appointment> {
        self.entries
            .iter()
            .filter(|appointment| !Self::is_upcoming(appointment, today))
            .collect()
    }

    pub fn stats(&self, today: NaiveDate) -> AppointmentStats {
        let count = |status| {
            self.entries
                .iter()
                .filter(|appointment| appointment.status == status)
                .count()
        };
        AppointmentStats {
            upcoming: self.upcoming(today).len(),
            completed: count(AppointmentStatus::Completed),
            pending: count(AppointmentStatus::Pending),
            total: self.entries.len(),
        }
    }

    /// Appends a new appointment. It always starts out pending.
    pub fn create(&mut self, draft: &AppointmentDraft) -> Result<&Appointment, AppointmentFormError> {
        let mut appointment = draft.validate()?;
        appointment.status = AppointmentStatus::Pending;
        info!(
            id = %appointment.id,
            pet = %appointment.pet_name,
            date = %appointment.date,
            "appointment scheduled"
        );
        self.entries.push(appointment);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Marks a pending appointment as confirmed. Other statuses are left alone.
    pub fn confirm(&mut self, id: &str) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|appointment| appointment.id == id)
        {
            Some(appointment) if appointment.status == AppointmentStatus::Pending => {
                appointment.status = AppointmentStatus::Confirmed;
                debug!(%id, "appointment confirmed");
                true
            }
            _ => false,
        }
    }
}

/// Raw contents of the "Novo Agendamento" form.
#[derive(Debug, Clone, Default)]
pub struct AppointmentDraft {
    pub pet_name: String,
    pub pet_species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub notes: String,
    /// Ignored on creation; new appointments are always pending.
    pub status: Option<AppointmentStatus>,
}

impl AppointmentDraft {
    fn validate(&self) -> Result<Appointment, AppointmentFormError> {
        let required = [
            (&self.pet_name, "Nome do Pet"),
            (&self.pet_species, "Tipo"),
            (&self.owner_name, "Nome do Responsável"),
            (&self.owner_phone, "Telefone"),
            (&self.date, "Data"),
            (&self.time, "Horário"),
            (&self.location, "Local"),
        ];
        if let Some((_, field)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(AppointmentFormError::Missing(*field));
        }

        if !APPOINTMENT_SPECIES.contains(&self.pet_species.as_str()) {
            return Err(AppointmentFormError::UnknownSpecies(self.pet_species.clone()));
        }
        if !CLINICS.contains(&self.location.as_str()) {
            return Err(AppointmentFormError::UnknownClinic(self.location.clone()));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| AppointmentFormError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| AppointmentFormError::InvalidTime(self.time.clone()))?;

        let notes = self.notes.trim();
        Ok(Appointment {
            id: Uuid::new_v4().to_string(),
            pet_name: self.pet_name.trim().to_owned(),
            pet_species: self.pet_species.clone(),
            owner_name: self.owner_name.trim().to_owned(),
            owner_phone: self.owner_phone.trim().to_owned(),
            date,
            time,
            location: self.location.clone(),
            status: self.status.unwrap_or(AppointmentStatus::Pending),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppointmentFormError {
    #[error("Preencha o campo obrigatório: {0}")]
    Missing(&'static str),
    #[error("Data inválida: {0:?} (use AAAA-MM-DD)")]
    InvalidDate(String),
    #[error("Horário inválido: {0:?} (use HH:MM)")]
    InvalidTime(String),
    #[error("Tipo de animal desconhecido: {0}")]
    UnknownSpecies(String),
    #[error("Clínica desconhecida: {0}")]
    UnknownClinic(String),
}

/// Weekday, day, month and year spelled out in Brazilian Portuguese.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format_localized("%A, %-d de %B de %Y", Locale::pt_BR)
        .to_string()
}
