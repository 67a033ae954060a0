use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{Cadence, PaymentMethod};

pub const MAX_INSTALLMENTS: u8 = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub cadence: Cadence,
    pub method: PaymentMethod,
    pub installments: u8,
    pub campaign_id: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentResult {
    Success,
    Failure(String),
}

pub trait PaymentGateway {
    fn process(&self, request: &PaymentRequest) -> PaymentResult;
}

/// Accepts every well-formed request. Nothing is charged.
#[derive(Debug, Default)]
pub struct SimulatedGateway;

impl PaymentGateway for SimulatedGateway {
    fn process(&self, request: &PaymentRequest) -> PaymentResult {
        if request.amount <= Decimal::ZERO {
            return PaymentResult::Failure("O valor da doação deve ser maior que zero.".into());
        }
        if !(1..=MAX_INSTALLMENTS).contains(&request.installments) {
            return PaymentResult::Failure(format!(
                "Parcelamento inválido: {}x",
                request.installments
            ));
        }

        info!(
            amount = %request.amount,
            cadence = ?request.cadence,
            method = request.method.label(),
            installments = request.installments,
            campaign = ?request.campaign_id,
            "simulated payment accepted"
        );
        PaymentResult::Success
    }
}

/// Value of each installment, rounded to cents.
pub fn installment_value(amount: Decimal, installments: u8) -> Decimal {
    if installments == 0 {
        return amount;
    }
    (amount / Decimal::from(installments)).round_dp(2)
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(amount: Decimal, installments: u8) -> PaymentRequest {
        PaymentRequest {
            amount,
            cadence: Cadence::Single,
            method: PaymentMethod::Card,
            installments,
            campaign_id: None,
        }
    }

    #[test]
    fn simulated_gateway_accepts_positive_amounts() {
        let result = SimulatedGateway.process(&request(dec!(50), 1));
        assert_eq!(result, PaymentResult::Success);
    }

    #[test]
    fn simulated_gateway_accepts_monthly_donations() {
        let monthly = PaymentRequest {
            cadence: Cadence::Monthly,
            ..request(dec!(20), 1)
        };
        assert_eq!(SimulatedGateway.process(&monthly), PaymentResult::Success);
    }

    #[test]
    fn simulated_gateway_rejects_zero() {
        let result = SimulatedGateway.process(&request(Decimal::ZERO, 1));
        assert!(matches!(result, PaymentResult::Failure(_)));
    }

    #[test]
    fn simulated_gateway_rejects_out_of_range_installments() {
        assert!(matches!(
            SimulatedGateway.process(&request(dec!(50), 7)),
            PaymentResult::Failure(_)
        ));
        assert!(matches!(
            SimulatedGateway.process(&request(dec!(50), 0)),
            PaymentResult::Failure(_)
        ));
    }

    #[test]
    fn installments_round_to_cents() {
        assert_eq!(installment_value(dec!(100), 3), dec!(33.33));
        assert_eq!(installment_value(dec!(550), 2), dec!(275));
    }
}
