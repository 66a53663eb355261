#[cfg(test)]
mod tests {
    use crate::calc::converter::{ConversionPair, PairState, Side};
    use crate::calc::debounce::Debouncer;
    use crate::calc::download::{solve, DownloadCalculator, DownloadInputs, Field};
    use crate::calc::electricity::{annual_cost, detect_country, hours_warning, Tariff};
    use crate::calc::mortgage::compare_inputs;
    use crate::calc::validation::ValidationResult;
    use crate::units::{FileSizeUnit, SpeedUnit, TimeUnit};

    #[test]
    fn test_size_and_speed_fill_in_time() {
        let mut calc = DownloadCalculator::new();
        calc.set_input(Field::Size, "100");
        let solved = calc.set_input(Field::Speed, "10");

        assert_eq!(solved, Some(Field::Time));
        let seconds = calc.seconds().expect("time should be solved");
        assert!((seconds - 83.88608).abs() < 1e-9, "got {}", seconds);

        let summary = calc.summary().expect("summary once size and speed are known");
        assert!(summary.starts_with("Downloaded 100.00 MB"), "{}", summary);
        assert!(summary.contains("1m 24s"), "{}", summary);
    }

    #[test]
    fn test_time_edit_after_size_recomputes_speed() {
        let mut calc = DownloadCalculator::new();
        calc.set_input(Field::Size, "100");
        let solved = calc.set_input(Field::Time, "10");

        assert_eq!(solved, Some(Field::Speed));
        let rate = calc.bytes_per_second().expect("speed should be solved");
        assert!((rate - 10_485_760.0).abs() < 1e-6);
        assert_eq!(calc.inputs().speed_unit, SpeedUnit::Mbps);
        assert_eq!(calc.inputs().speed, (10_485_760.0 / 125_000.0).to_string());
    }

    #[test]
    fn test_speed_and_time_fill_in_size() {
        let mut calc = DownloadCalculator::with_inputs(DownloadInputs {
            size: "1".to_string(),
            ..DownloadInputs::default()
        });
        calc.set_input(Field::Speed, "8");
        let solved = calc.set_input(Field::Time, "60");

        assert_eq!(solved, Some(Field::Size));
        let bytes = calc.bytes().expect("size should be solved");
        assert!((bytes - 60_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_clearing_a_field_does_not_refill_it() {
        let mut calc = DownloadCalculator::new();
        calc.set_input(Field::Size, "100");
        assert!(calc.seconds().is_some());

        let solved = calc.set_input(Field::Time, "");
        assert_eq!(solved, None);
        assert_eq!(calc.inputs().time, "");
    }

    #[test]
    fn test_unit_typed_into_field_is_adopted() {
        let mut calc = DownloadCalculator::new();
        calc.set_input(Field::Size, "1.5 GB");

        assert_eq!(calc.inputs().size_unit, FileSizeUnit::GB);
        assert_eq!(calc.inputs().size, "1.5");
        assert_eq!(calc.bytes(), Some(1.5 * 1024.0 * 1024.0 * 1024.0));

        calc.set_input(Field::Time, "2 min");
        assert_eq!(calc.inputs().time_unit, TimeUnit::Minutes);
        assert_eq!(calc.seconds(), Some(120.0));
    }

    #[test]
    fn test_one_shot_solve_needs_two_fields() {
        let inputs = DownloadInputs {
            size: String::new(),
            time: String::new(),
            ..DownloadInputs::default()
        };
        assert!(solve(inputs).is_err());

        let report = solve(DownloadInputs {
            size: "100".to_string(),
            ..DownloadInputs::default()
        })
        .unwrap();
        assert_eq!(report.solved, Some(Field::Time));
        assert!(report.speeds.is_some());
    }

    #[test]
    fn test_debounced_edit_sequence() {
        let mut calc = DownloadCalculator::new();
        let mut debouncer = Debouncer::new(300.0);

        debouncer.schedule(Field::Size, 0.0);
        debouncer.schedule(Field::Size, 120.0);
        assert_eq!(debouncer.poll(300.0), None);

        if let Some(field) = debouncer.poll(420.0) {
            calc.set_input(field, "100");
        }
        assert!(calc.seconds().is_some());
    }

    #[test]
    fn test_two_kilowatt_device_single_rate() {
        let estimate = annual_cost(2000.0, &Tariff::Single { rate: 0.15 }).unwrap();
        assert_eq!(format!("{:.2}", estimate.annual_cost), "2628.00");
        assert_eq!(format!("{:.2}", estimate.annual_kwh), "17520.00");
        assert_eq!(format!("{:.2}", estimate.monthly_cost), "219.00");
    }

    #[test]
    fn test_detected_country_prefills_dual_tariff() {
        let country = detect_country("en-GB");
        assert_eq!(country.code, "UK");

        let estimate = annual_cost(1000.0, &country.default_dual_tariff()).unwrap();
        let breakdown = estimate.breakdown.expect("dual tariff has a breakdown");
        assert_eq!(breakdown.peak.hours, 8.0);
        assert_eq!(breakdown.off_peak.hours, 16.0);
        let total = breakdown.peak.cost + breakdown.off_peak.cost;
        assert!((estimate.annual_cost - total).abs() < 1e-9);
    }

    #[test]
    fn test_hours_mismatch_surfaces_as_validation_error() {
        let tariff = Tariff::Dual {
            peak_rate: 0.3,
            off_peak_rate: 0.1,
            peak_hours: 10.0,
            off_peak_hours: 10.0,
        };
        let mut validation = ValidationResult::new();
        if let Err(e) = annual_cost(500.0, &tariff) {
            validation.add_calc_error(&e);
        }
        assert!(!validation.is_valid());
        assert!(hours_warning(10.0, 10.0).is_some());
    }

    #[test]
    fn test_mortgage_form_inputs() {
        let result = compare_inputs("250,000", "4.5", "20000").unwrap();
        assert_eq!(result.after_overpayment.balance, 230_000.0);
        let expected = 20_000.0 * 0.045 / 365.0;
        assert!((result.saving.daily - expected).abs() < 1e-9);
    }

    #[test]
    fn test_converter_round_trip_through_state() {
        let mut state = PairState::new(ConversionPair::PoundsKilograms);
        state.edit(Side::Left, "150");
        assert_eq!(state.right, "68.0389");

        state.edit(Side::Right, "68.0389");
        assert_eq!(state.left, "150.0001");
    }
}
