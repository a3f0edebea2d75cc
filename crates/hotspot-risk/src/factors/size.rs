/// Member count at which the size factor reaches 1 − 1/e.
pub const SIZE_SCALE: f64 = 3.0;

/// Size factor: `1 − e^(−n / SIZE_SCALE)` over contributing members.
///
/// Range: 0.0 – 1.0, saturating as the cluster grows.
pub fn calculate(contributing: usize) -> f64 {
    1.0 - (-(contributing as f64) / SIZE_SCALE).exp()
}

#[cfg(test)]
mod tests {
    #[test]
    fn empty_is_zero_and_growth_saturates() {
        assert_eq!(super::calculate(0), 0.0);
        assert!(super::calculate(3) > super::calculate(2));
        assert!(super::calculate(50) > 0.99);
    }
}
