//! Closed-form financial math shared by the calculators

/// Level monthly payment that accumulates to `target` over `months`
///
/// Solves target = payment * [(1 + r)^n - 1] / r for the payment, with r
/// the monthly rate and n the number of months. Zero months or a
/// non-positive target require no saving at all.
pub fn annuity_payment(target: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 || target <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return target / months as f64;
    }
    let accumulation = (1.0 + monthly_rate).powi(months as i32) - 1.0;
    target * monthly_rate / accumulation
}

/// Future value of a level monthly payment after `months`
///
/// The forward companion of [`annuity_payment`]; used to confirm that a
/// computed payment actually reaches its target.
pub fn annuity_accumulation(payment: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return payment * months as f64;
    }
    payment * ((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate
}

/// Split fractional years into whole years and rounded months
///
/// The month part rounds the fractional remainder times 12; rounding up to
/// a full twelve carries into the year count.
pub fn years_and_months(years: f64) -> (u32, u32) {
    if !years.is_finite() || years <= 0.0 {
        return (0, 0);
    }
    let mut whole = years.floor() as u32;
    let mut months = ((years - years.floor()) * 12.0).round() as u32;
    if months == 12 {
        whole += 1;
        months = 0;
    }
    (whole, months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annuity_payment_round_trips_through_accumulation() {
        let monthly_rate = 0.06 / 12.0;
        let target = 27_244_539.0;
        let payment = annuity_payment(target, monthly_rate, 360);

        assert!(payment > 0.0);
        assert_relative_eq!(
            annuity_accumulation(payment, monthly_rate, 360),
            target,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_annuity_payment_guards() {
        assert_eq!(annuity_payment(100_000.0, 0.005, 0), 0.0);
        assert_eq!(annuity_payment(0.0, 0.005, 120), 0.0);
        assert_eq!(annuity_payment(-5.0, 0.005, 120), 0.0);
    }

    #[test]
    fn test_annuity_payment_zero_rate_is_straight_line() {
        assert_relative_eq!(annuity_payment(12_000.0, 0.0, 12), 1_000.0);
    }

    #[test]
    fn test_years_and_months_rounding() {
        assert_eq!(years_and_months(2.0), (2, 0));
        assert_eq!(years_and_months(2.5), (2, 6));
        assert_eq!(years_and_months(1.99), (2, 0)); // 11.88 months rounds to 12, carries
        assert_eq!(years_and_months(0.0), (0, 0));
        assert_eq!(years_and_months(f64::INFINITY), (0, 0));
    }
}
