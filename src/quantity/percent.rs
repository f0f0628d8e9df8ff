quantity!(Percent, via: f64, suffix: "%", precision: 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ok() {
        assert_eq!(Percent(85.0).to_string(), "85.0 %");
        assert_eq!(Percent(f64::NAN).to_string(), "NaN %");
    }
}
