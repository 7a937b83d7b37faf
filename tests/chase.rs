mod tests {
    use halo_ring_core::{ChaseBuffer, Rgb, scale8};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_head_enters_rest_shifts() {
        let mut chase = ChaseBuffer::<12>::new();
        let frame = chase.tick(RED, 255);
        assert_eq!(frame.len(), 12);
        assert_eq!(frame[0], RED);
        assert!(frame[1..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_trail_propagates_one_step_per_tick() {
        let mut chase = ChaseBuffer::<12>::new();
        chase.tick(RED, 255);
        let frame = chase.tick(BLUE, 255);
        assert_eq!(frame[0], BLUE);
        assert_eq!(frame[1], RED);
        assert_eq!(frame[2], BLACK);
    }

    #[test]
    fn test_constant_color_saturates_after_ring_length() {
        let mut chase = ChaseBuffer::<12>::new();
        for _ in 0..11 {
            chase.tick(BLUE, 255);
        }
        // Tail still holds the initial black until the 12th tick.
        assert_eq!(chase.colors()[11], BLACK);
        chase.tick(BLUE, 255);
        assert!(chase.colors().iter().all(|led| *led == BLUE));
    }

    #[test]
    fn test_level_zero_head_is_black() {
        let mut chase = ChaseBuffer::<12>::new();
        let frame = chase.tick(WHITE, 0);
        assert_eq!(frame[0], BLACK);
    }

    #[test]
    fn test_half_level_scales_each_channel() {
        let mut chase = ChaseBuffer::<12>::new();
        let frame = chase.tick(BLUE, 128);
        assert_eq!(frame[0], Rgb { r: 0, g: 0, b: 128 });
    }

    #[test]
    fn test_full_level_passes_color_through() {
        let mut chase = ChaseBuffer::<12>::new();
        let frame = chase.tick(Rgb { r: 34, g: 139, b: 34 }, 255);
        assert_eq!(frame[0], Rgb { r: 34, g: 139, b: 34 });
    }

    #[test]
    fn test_filled_startup_state() {
        let chase = ChaseBuffer::<12>::filled(RED);
        assert!(chase.colors().iter().all(|led| *led == RED));
    }
}
