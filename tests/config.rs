mod common;

mod tests {
    use myrtio_pixel_effects::{
        Direction, Duration, EffectKind, EffectStatus, Instant, PixelEffect, Rgb,
    };

    use crate::common::{BLACK, BLUE, FixedClock, RED, SENTINEL, ScriptedRandom, WHITE, config};

    #[test]
    fn test_set_range_updates_length_and_cursor() {
        let mut effect = PixelEffect::new(&config(EffectKind::Comet, 0, 9, RED));
        effect.set_range(3, 7);
        assert_eq!(effect.state().range().len(), 5);
        assert_eq!(effect.state().cursor(), 3);

        effect.set_direction(Direction::Reverse);
        effect.set_range(2, 4);
        assert_eq!(effect.state().range().len(), 3);
        assert_eq!(effect.state().cursor(), 4);
    }

    #[test]
    fn test_inverted_range_is_ignored() {
        let mut effect = PixelEffect::new(&config(EffectKind::Comet, 2, 5, RED));
        effect.set_range(6, 4);
        assert_eq!(effect.state().range().start(), 2);
        assert_eq!(effect.state().range().end(), 5);
        assert_eq!(effect.state().range().len(), 4);
    }

    #[test]
    fn test_shrinking_range_clamps_area() {
        let mut cfg = config(EffectKind::Comet, 0, 9, RED);
        cfg.area = 8;
        let mut effect = PixelEffect::new(&cfg);
        assert_eq!(effect.state().area(), 8);
        effect.set_range(0, 3);
        assert_eq!(effect.state().area(), 4);
    }

    #[test]
    fn test_area_outside_range_is_ignored() {
        let mut effect = PixelEffect::new(&config(EffectKind::Comet, 0, 4, RED));
        effect.set_area_of_effect(3);
        assert_eq!(effect.state().area(), 3);
        effect.set_area_of_effect(0);
        assert_eq!(effect.state().area(), 3);
        effect.set_area_of_effect(6);
        assert_eq!(effect.state().area(), 3);
        effect.set_area_of_effect(5);
        assert_eq!(effect.state().area(), 5);
    }

    #[test]
    fn test_zero_interval_is_ignored() {
        let mut effect = PixelEffect::new(&config(EffectKind::Chase, 0, 3, RED));
        effect.set_interval(Duration::from_millis(0));
        assert_eq!(effect.state().interval(), Duration::from_millis(10));

        effect.set_rate_hz(50);
        assert_eq!(effect.state().interval(), Duration::from_millis(20));
        effect.set_rate_hz(0);
        assert_eq!(effect.state().interval(), Duration::from_millis(20));
        effect.set_rate_hz(5000);
        assert_eq!(effect.state().interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_interval_gate_is_strict() {
        let mut effect = PixelEffect::new(&config(EffectKind::Strobe, 0, 0, RED));
        let mut leds = [BLACK; 1];
        let mut rng = ScriptedRandom::new(0, 0);

        effect.tick(Instant::from_millis(1000), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 1);
        effect.tick(Instant::from_millis(1010), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 1);
        effect.tick(Instant::from_millis(1011), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 2);
    }

    #[test]
    fn test_interval_gate_survives_clock_rollover() {
        let mut effect = PixelEffect::new(&config(EffectKind::Strobe, 0, 0, RED));
        let mut leds = [BLACK; 1];
        let mut rng = ScriptedRandom::new(0, 0);
        let ms = |millis: u64| Duration::from_millis(millis).as_ticks();

        // 5 ms before the tick counter rolls over
        effect.tick(Instant::from_ticks(u64::MAX - ms(5) + 1), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 1);
        effect.tick(Instant::from_ticks(ms(5)), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 1);
        effect.tick(Instant::from_ticks(ms(6)), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 2);
    }

    #[test]
    fn test_setters_force_next_frame() {
        let mut cfg = config(EffectKind::Strobe, 0, 1, RED);
        cfg.interval = Duration::from_millis(1000);
        let mut effect = PixelEffect::new(&cfg);
        let mut leds = [BLACK; 2];
        let mut rng = ScriptedRandom::new(0, 0);

        effect.tick(Instant::from_millis(5), &mut leds, &mut rng);
        effect.tick(Instant::from_millis(6), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 1);

        effect.set_background_color(BLUE);
        effect.tick(Instant::from_millis(7), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 2);
        assert_eq!(leds, [BLUE, BLUE]);

        effect.set_repeat(false);
        effect.tick(Instant::from_millis(8), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 3);
    }

    #[test]
    fn test_set_effect_rewinds_for_direction() {
        let mut effect = PixelEffect::new(&config(EffectKind::Comet, 2, 8, RED));
        effect.set_direction(Direction::Reverse);
        effect.set_effect(EffectKind::Pulse);
        assert_eq!(effect.state().cursor(), 8);
        assert_eq!(effect.state().counter(), 100);
        assert_eq!(effect.state().status(), EffectStatus::Active);

        effect.set_direction(Direction::Forward);
        effect.set_effect(EffectKind::FillIn);
        assert_eq!(effect.state().cursor(), 2);
        assert_eq!(effect.state().counter(), 0);
    }

    #[test]
    fn test_stopped_effect_does_not_render() {
        let mut effect = PixelEffect::new(&config(EffectKind::Chase, 0, 1, RED));
        let mut leds = [SENTINEL; 2];
        let mut rng = ScriptedRandom::new(0, 0);
        effect.stop();
        assert_eq!(effect.state().kind(), EffectKind::None);
        assert_eq!(effect.state().status(), EffectStatus::Inactive);

        effect.tick(Instant::from_millis(100), &mut leds, &mut rng);
        assert_eq!(leds, [SENTINEL; 2]);

        effect.set_effect(EffectKind::Chase);
        effect.tick(Instant::from_millis(200), &mut leds, &mut rng);
        assert_eq!(leds, [RED, BLACK]);
    }

    #[test]
    fn test_default_effect_is_idle() {
        let mut effect = PixelEffect::default();
        let mut leds = [SENTINEL; 1];
        let mut rng = ScriptedRandom::new(0, 0);
        effect.tick(Instant::from_millis(100), &mut leds, &mut rng);
        assert_eq!(leds, [SENTINEL]);
        assert_eq!(effect.state().area(), 1);
        assert!(effect.state().repeat());
    }

    #[test]
    fn test_update_reads_clock() {
        let mut effect = PixelEffect::new(&config(EffectKind::Strobe, 0, 0, WHITE));
        let mut leds = [BLACK; 1];
        let mut rng = ScriptedRandom::new(0, 0);
        effect.update(&FixedClock(50), &mut leds, &mut rng);
        effect.update(&FixedClock(55), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 1);
        effect.update(&FixedClock(61), &mut leds, &mut rng);
        assert_eq!(effect.state().counter(), 2);
    }

    #[test]
    fn test_color_setters() {
        let mut effect = PixelEffect::new(&config(EffectKind::Strobe, 0, 0, WHITE));
        effect.set_color_rgb(1, 2, 3);
        assert_eq!(effect.state().color(), Rgb::new(1, 2, 3));
        effect.set_color_temperature(6600);
        assert_eq!(effect.state().color(), WHITE);
    }

    #[test]
    fn test_buffer_fills_stay_in_range() {
        let effect = PixelEffect::new(&config(EffectKind::None, 1, 4, RED));
        let mut leds = [SENTINEL; 6];

        effect.fill_solid(&mut leds, RED);
        assert_eq!(leds, [SENTINEL, RED, RED, RED, RED, SENTINEL]);

        effect.fill_gradient(&mut leds, BLACK, Rgb::new(200, 0, 0));
        let gradient = [0, 50, 100, 150].map(|r| Rgb::new(r, 0, 0));
        assert_eq!(&leds[1..5], &gradient);
        assert_eq!(leds[5], SENTINEL);

        effect.clear(&mut leds);
        assert_eq!(leds, [SENTINEL, BLACK, BLACK, BLACK, BLACK, SENTINEL]);
    }

    #[test]
    #[should_panic(expected = "effect range ends past the pixel buffer")]
    fn test_range_past_buffer_is_caught() {
        let mut effect = PixelEffect::new(&config(EffectKind::Chase, 0, 9, RED));
        let mut leds = [BLACK; 4];
        let mut rng = ScriptedRandom::new(0, 0);
        effect.tick(Instant::from_millis(0), &mut leds, &mut rng);
    }
}
