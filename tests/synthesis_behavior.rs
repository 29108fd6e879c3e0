//! Behavior-driven tests for history and forecast synthesis
//!
//! These tests verify WHAT the generators promise callers: series lengths,
//! calendar placement, price and confidence bounds, and reproducibility under
//! a fixed seed.

use stockcast_tests::*;

// =============================================================================
// History: Shape and Calendar
// =============================================================================

#[test]
fn when_any_timeframe_is_requested_history_has_exactly_its_day_count() {
    // Given: A fixed reference date and seed
    let as_of = reference_date();

    for (timeframe, expected) in Timeframe::ALL.into_iter().zip([30, 90, 180, 365, 730]) {
        // When: History is synthesized for the timeframe
        let mut rng = seeded_rng(3);
        let bars = synthesize_history("AAPL", timeframe, as_of, &mut rng);

        // Then: One bar per calendar day in the window
        assert_eq!(bars.len(), expected, "timeframe {timeframe}");
    }
}

#[test]
fn when_one_month_is_requested_bars_are_consecutive_days_ending_before_reference() {
    // Given: AAPL over one month
    let as_of = reference_date();
    let mut rng = seeded_rng(11);

    // When: History is synthesized
    let bars = synthesize_history("AAPL", Timeframe::OneMonth, as_of, &mut rng);

    // Then: The first bar sits a full window back and the last is the day before
    assert_eq!(bars[0].date, as_of.offset(-30));
    assert_eq!(bars[29].date, as_of.offset(-1));
    for pair in bars.windows(2) {
        assert_eq!(pair[0].date.days_until(pair[1].date), 1, "dates must be consecutive");
    }
}

#[test]
fn when_catalog_symbol_is_used_walk_starts_near_its_base_price() {
    // Given: Symbols with very different catalog prices
    let as_of = reference_date();

    for (symbol, base) in [("AAPL", 150.0), ("GOOGL", 2800.0), ("IBM", 100.0)] {
        // When: A single month is synthesized
        let mut rng = seeded_rng(5);
        let bars = synthesize_history(symbol, Timeframe::OneMonth, as_of, &mut rng);

        // Then: The first close is one bounded step away from the base price
        let first_close = bars[0].close;
        assert!(
            (first_close / base - 1.0).abs() <= 0.041 + 1e-9,
            "{symbol}: first close {first_close} strays from base {base}"
        );
    }
}

#[test]
fn when_symbol_case_differs_history_uses_the_same_base_price() {
    // Given: The same ticker written two ways
    let as_of = reference_date();

    // When: Both are synthesized from the same seed
    let upper = synthesize_history("TSLA", Timeframe::ThreeMonths, as_of, &mut seeded_rng(8));
    let lower = synthesize_history("tsla", Timeframe::ThreeMonths, as_of, &mut seeded_rng(8));

    // Then: The series are identical
    assert_eq!(upper, lower);
}

// =============================================================================
// History: Price Invariants
// =============================================================================

#[test]
fn when_history_is_synthesized_every_bar_respects_floor_and_wick_ordering() {
    // Given: Many seeds across the longest window
    let as_of = reference_date();

    for seed in 0..20 {
        // When: Two years of history are synthesized
        let mut rng = seeded_rng(seed);
        let bars = synthesize_history("NVDA", Timeframe::TwoYears, as_of, &mut rng);

        // Then: Every bar is a well-formed candle above the price floor
        for bar in &bars {
            assert!(bar.open >= PRICE_FLOOR);
            assert!(bar.high >= PRICE_FLOOR);
            assert!(bar.low >= PRICE_FLOOR);
            assert!(bar.close >= PRICE_FLOOR);
            assert!(bar.low <= bar.open.min(bar.close), "low above body on {}", bar.date);
            assert!(bar.high >= bar.open.max(bar.close), "high below body on {}", bar.date);
            assert!((1_000_000..11_000_000).contains(&bar.volume));
        }
    }
}

// =============================================================================
// Forecast: Shape and Bounds
// =============================================================================

#[test]
fn when_history_is_empty_every_model_forecasts_nothing() {
    // Given: No history at all
    let history: Vec<DailyBar> = Vec::new();

    for model in ModelKind::ALL {
        // When: A forecast is requested
        let mut rng = seeded_rng(1);
        let forecast = synthesize_forecast(&history, model, reference_date(), &mut rng);

        // Then: The forecast is empty rather than an error
        assert!(forecast.is_empty(), "{model} produced points from nothing");
    }
}

#[test]
fn when_history_exists_forecast_has_thirty_bounded_points() {
    // Given: Generated histories for every model and several seeds
    let as_of = reference_date();

    for model in ModelKind::ALL {
        for seed in 0..10 {
            let mut rng = seeded_rng(seed);
            let history = synthesize_history("MSFT", Timeframe::SixMonths, as_of, &mut rng);

            // When: The model forecasts ahead
            let forecast = synthesize_forecast(&history, model, as_of, &mut rng);

            // Then: The horizon is fixed and every point is in range
            assert_eq!(forecast.len(), FORECAST_HORIZON);
            for point in &forecast {
                assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&point.confidence));
                assert!(point.predicted >= PRICE_FLOOR);
                assert!(point.actual.is_none());
            }
        }
    }
}

#[test]
fn when_forecast_is_made_points_start_the_day_after_reference() {
    // Given: A flat history
    let history = flat_history(10, 100.0);

    // When: LSTM forecasts from it
    let forecast =
        synthesize_forecast(&history, ModelKind::Lstm, reference_date(), &mut seeded_rng(2));

    // Then: Dates run reference+1 ..= reference+30
    assert_eq!(forecast[0].date, reference_date().offset(1));
    assert_eq!(forecast[29].date, reference_date().offset(30));
}

#[test]
fn when_history_is_flat_linear_regression_walks_within_two_percent_per_step() {
    // Given: Ten bars all at 100, so the trend statistic is zero
    let history = flat_history(10, 100.0);
    assert_eq!(trend_statistic(&history), 0.0);

    for seed in 0..25 {
        // When: Linear regression forecasts
        let mut rng = seeded_rng(seed);
        let forecast =
            synthesize_forecast(&history, ModelKind::LinearRegression, reference_date(), &mut rng);

        // Then: Each step moves by at most the model volatility
        let mut previous = 100.0;
        for point in &forecast {
            let step = point.predicted / previous - 1.0;
            assert!(step.abs() <= 0.02 + 1e-12, "step {step} exceeds 2%");
            previous = point.predicted;
        }

        // And: The first confidence is the decayed accuracy plus bounded noise
        let expected = 0.75 * 0.99;
        assert!((forecast[0].confidence - expected).abs() <= 0.05 + 1e-12);
    }
}

#[test]
fn when_recent_closes_rise_forecasts_drift_upward_on_average() {
    // Given: Older noise followed by a steady 20% climb over the trend window
    let mut closes = vec![300.0, 50.0, 80.0];
    closes.extend((0..TREND_WINDOW).map(|step| 100.0 + step as f64 * 20.0 / 9.0));
    let history = history_from_closes(&closes);
    assert!((trend_statistic(&history) - 0.2).abs() < 1e-9);

    // When: LSTM forecasts across many seeds
    let runs = 50;
    let mean_final = (0..runs)
        .map(|seed| {
            let mut rng = seeded_rng(seed);
            let forecast =
                synthesize_forecast(&history, ModelKind::Lstm, reference_date(), &mut rng);
            forecast[FORECAST_HORIZON - 1].predicted
        })
        .sum::<f64>()
        / runs as f64;

    // Then: The average end price sits well above the last close
    assert!(mean_final > 120.0 * 1.2, "mean final {mean_final} did not follow the trend");
}

// =============================================================================
// Forecast: Confidence Decay
// =============================================================================

#[test]
fn when_horizon_grows_mean_confidence_decays() {
    // Given: Many seeded LSTM forecasts of the same history
    let history = flat_history(30, 250.0);
    let runs = 400;
    let mut totals = vec![0.0; FORECAST_HORIZON];

    // When: Confidence is averaged per horizon index
    for seed in 0..runs {
        let mut rng = seeded_rng(seed);
        let forecast = synthesize_forecast(&history, ModelKind::Lstm, reference_date(), &mut rng);
        for (total, point) in totals.iter_mut().zip(&forecast) {
            *total += point.confidence;
        }
    }
    let means = totals.iter().map(|total| total / runs as f64).collect::<Vec<_>>();

    // Then: Each five-day block is less confident than the one before
    let blocks = means
        .chunks(5)
        .map(|block| block.iter().sum::<f64>() / block.len() as f64)
        .collect::<Vec<_>>();
    for pair in blocks.windows(2) {
        assert!(pair[1] < pair[0], "block means {blocks:?} are not decreasing");
    }

    // And: The ends of the horizon match the geometric decay
    assert!((means[0] - 0.85 * 0.99).abs() < 0.01);
    assert!((means[29] - 0.85 * 0.99_f64.powi(30)).abs() < 0.01);
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn when_seed_and_date_are_fixed_output_is_identical() {
    // Given: Two scenarios built from the same inputs
    let build = || {
        Scenario::new("AMZN", reference_date(), 2024)
            .with_timeframe(Timeframe::OneYear)
            .with_model(ModelKind::RandomForest)
    };

    // When: Both run
    let first = build().run();
    let second = build().run();

    // Then: History and forecast match exactly
    assert_eq!(first, second);
}

#[test]
fn when_reference_date_moves_series_shift_but_prices_repeat() {
    // Given: The same seed anchored to two different days
    let earlier = reference_date();
    let later = earlier.offset(7);

    // When: History is synthesized for each
    let a = synthesize_history("META", Timeframe::OneMonth, earlier, &mut seeded_rng(9));
    let b = synthesize_history("META", Timeframe::OneMonth, later, &mut seeded_rng(9));

    // Then: Only the calendar differs
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.date.offset(7), right.date);
        assert_eq!(left.close, right.close);
        assert_eq!(left.volume, right.volume);
    }
}

#[test]
fn when_generators_share_one_source_scenario_matches_manual_chaining() {
    // Given: A scenario and the equivalent manual calls
    let scenario = Scenario::new("NFLX", reference_date(), 77)
        .with_timeframe(Timeframe::ThreeMonths)
        .with_model(ModelKind::LinearRegression);

    // When: Both paths are taken
    let output = scenario.run();
    let mut rng: StdRng = seeded_rng(77);
    let history = synthesize_history("NFLX", Timeframe::ThreeMonths, reference_date(), &mut rng);
    let forecast =
        synthesize_forecast(&history, ModelKind::LinearRegression, reference_date(), &mut rng);

    // Then: They agree draw for draw
    assert_eq!(output.history, history);
    assert_eq!(output.forecast, forecast);
}
