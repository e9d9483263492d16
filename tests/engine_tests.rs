//! Integration tests for LedState

mod common;
use common::*;

use rgb_aura::{AuraColor, AuraError, AuraMode, LedState};

const BOUNDS: [u16; 4] = [1, 7, 100, 999];

#[test]
fn static_matches_component_mask() {
    let max = 100;
    let expected = [
        (AuraColor::Red, (max, 0, 0)),
        (AuraColor::Green, (0, max, 0)),
        (AuraColor::Blue, (0, 0, max)),
        (AuraColor::Magenta, (max, 0, max)),
        (AuraColor::Yellow, (max, max, 0)),
        (AuraColor::Cyan, (0, max, max)),
        (AuraColor::White, (max, max, max)),
    ];

    for (color, rgb) in expected {
        let mut state = LedState::new(AuraMode::Static, color, max);
        state.advance();
        assert_eq!(state.rgb(), rgb, "color {:?}", color);

        // holds on every following tick
        state.advance();
        assert_eq!(state.rgb(), rgb, "color {:?}", color);
    }
}

#[test]
fn static_clears_channels_left_by_override() {
    let mut state = LedState::new(AuraMode::Static, AuraColor::Red, 10);
    state.advance();
    state.set_rgb(0, 255, 0);
    assert_eq!(state.rgb(), (0, 10, 0));

    state.advance();
    assert_eq!(state.rgb(), (10, 0, 0));
}

#[test]
fn off_always_goes_dark_in_one_tick() {
    let mut state = LedState::new(AuraMode::Off, AuraColor::White, 50);
    state.set_rgb(255, 128, 7);
    assert_ne!(state.rgb(), (0, 0, 0));

    state.advance();
    assert_eq!(state.rgb(), (0, 0, 0));
}

#[test]
fn blink_alternates_every_tick() {
    let mut state = LedState::new(AuraMode::Blink, AuraColor::Magenta, 20);

    state.advance();
    assert_eq!(state.rgb(), (0, 0, 0));
    assert_eq!(state.phase(), 1);

    state.advance();
    assert_eq!(state.rgb(), (20, 0, 20));
    assert_eq!(state.phase(), 0);

    let after_round_trip = state;
    advance_n(&mut state, 2);
    assert_eq!(state, after_round_trip);

    state.advance();
    assert_eq!(state.rgb(), (0, 0, 0));
}

#[test]
fn breathe_single_channel_round_trip() {
    let max = 100;
    let mut state = LedState::new(AuraMode::Breathe, AuraColor::Red, max);
    assert_eq!(state.rgb(), (max, 0, 0));
    assert_eq!(state.phase(), 0);

    advance_n(&mut state, max as usize - 1);
    assert_eq!(state.rgb(), (1, 0, 0));
    assert_eq!(state.phase(), 0);

    state.advance();
    assert_eq!(state.rgb(), (0, 0, 0));
    assert_eq!(state.phase(), 1);

    advance_n(&mut state, max as usize - 1);
    assert_eq!(state.rgb(), (max - 1, 0, 0));
    assert_eq!(state.phase(), 1);

    state.advance();
    assert_eq!(state.rgb(), (max, 0, 0));
    assert_eq!(state.phase(), 0);
}

#[test]
fn breathe_moves_only_its_own_channel() {
    for (color, expected) in [
        (AuraColor::Green, (0, 9, 0)),
        (AuraColor::Blue, (0, 0, 9)),
    ] {
        let mut state = LedState::new(AuraMode::Breathe, color, 10);
        state.advance();
        assert_eq!(state.rgb(), expected);
    }
}

#[test]
fn breathe_multi_channel_stays_in_lockstep() {
    let max = 25;
    for color in [
        AuraColor::Magenta,
        AuraColor::Yellow,
        AuraColor::Cyan,
        AuraColor::White,
    ] {
        let mask = color.channels();
        let mut state = LedState::new(AuraMode::Breathe, color, max);

        for _ in 0..(4 * max) {
            state.advance();
            let lit: Vec<u16> = [
                (mask.red, state.red()),
                (mask.green, state.green()),
                (mask.blue, state.blue()),
            ]
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, v)| *v)
            .collect();
            assert!(lit.windows(2).all(|w| w[0] == w[1]), "color {:?}", color);

            if !mask.red {
                assert_eq!(state.red(), 0);
            }
            if !mask.green {
                assert_eq!(state.green(), 0);
            }
            if !mask.blue {
                assert_eq!(state.blue(), 0);
            }
        }
    }
}

#[test]
fn breathe_resyncs_mixed_channels_after_override() {
    let mut state = LedState::new(AuraMode::Breathe, AuraColor::White, 10);
    state.set_rgb(255, 0, 128);
    assert_eq!(state.rgb(), (10, 0, 5));

    state.advance();
    assert_eq!(state.rgb(), (9, 9, 9));
}

#[test]
fn smooth_walks_three_legs() {
    let max = 50;
    let mut state = LedState::new(AuraMode::Smooth, AuraColor::Blue, max);
    assert_eq!(state.rgb(), (max, 0, 0));

    advance_n(&mut state, 10);
    assert_eq!(state.rgb(), (40, 0, 10));
    assert_eq!(state.phase(), 0);

    advance_n(&mut state, 40);
    assert_eq!(state.rgb(), (0, 0, max));
    assert_eq!(state.phase(), 1);

    advance_n(&mut state, max as usize);
    assert_eq!(state.rgb(), (0, max, 0));
    assert_eq!(state.phase(), 2);

    advance_n(&mut state, max as usize);
    assert_eq!(state.rgb(), (max, 0, 0));
    assert_eq!(state.phase(), 0);
}

#[test]
fn smooth_period_is_three_times_bound() {
    for max in BOUNDS {
        let start = LedState::new(AuraMode::Smooth, AuraColor::Red, max);
        let mut state = start;

        for tick in 1..=(3 * max as usize) {
            state.advance();
            let (r, g, b) = state.rgb();
            assert_eq!(r + g + b, max, "max {} tick {}", max, tick);
            if tick < 3 * max as usize {
                assert_ne!(state, start, "max {} returned early at tick {}", max, tick);
            }
        }

        assert_eq!(state, start, "max {}", max);
    }
}

#[test]
fn smooth_recovers_from_override() {
    let max = 12;
    let mut state = LedState::new(AuraMode::Smooth, AuraColor::Red, max);
    state.set_rgb(255, 255, 255);

    for _ in 0..(3 * max) {
        state.advance();
        assert!(within_bound(&state));
    }
    assert_eq!(state.rgb(), (max, 0, 0));
    assert_eq!(state.phase(), 0);
}

#[test]
fn set_rgb_full_scale_hits_bound_exactly() {
    for max in BOUNDS.into_iter().chain([u16::MAX]) {
        let mut state = LedState::new(AuraMode::Off, AuraColor::Red, max);

        state.set_rgb(255, 255, 255);
        assert_eq!(state.rgb(), (max, max, max));

        state.set_rgb(0, 0, 0);
        assert_eq!(state.rgb(), (0, 0, 0));
    }
}

#[test]
fn set_rgb_leaves_effect_state_alone() {
    let mut state = LedState::new(AuraMode::Blink, AuraColor::Cyan, 999);
    state.advance();
    state.set_rgb(100, 255, 255);

    assert_eq!(state.rgb(), (391, 999, 999));
    assert_eq!(state.mode(), AuraMode::Blink);
    assert_eq!(state.color(), AuraColor::Cyan);
    assert_eq!(state.phase(), 1);
}

#[test]
fn channels_never_exceed_bound() {
    let modes = [
        AuraMode::Off,
        AuraMode::Static,
        AuraMode::Blink,
        AuraMode::Breathe,
        AuraMode::Smooth,
    ];

    for mode in modes {
        for color in AuraColor::ALL {
            let mut state = LedState::new(mode, color, 7);
            for _ in 0..50 {
                state.advance();
                assert!(within_bound(&state), "{:?} {:?}", mode, color);
            }
        }
    }
}

#[test]
fn zero_bound_clamps_to_one() {
    let mut state = LedState::new(AuraMode::Smooth, AuraColor::Red, 0);
    assert_eq!(state.brightness_max(), 1);
    assert_eq!(state.rgb(), (1, 0, 0));

    advance_n(&mut state, 3);
    assert_eq!(state.rgb(), (1, 0, 0));

    assert_eq!(
        LedState::try_new(AuraMode::Smooth, AuraColor::Red, 0),
        Err(AuraError::ZeroBrightness)
    );
}

#[test]
fn reconfiguring_reseeds() {
    let mut state = LedState::new(AuraMode::Static, AuraColor::Red, 40);
    state.advance();

    state.set_mode(AuraMode::Breathe);
    assert_eq!(state.rgb(), (40, 0, 0));
    assert_eq!(state.phase(), 0);

    state.advance();
    state.set_color(AuraColor::Yellow);
    assert_eq!(state.rgb(), (40, 40, 0));

    state.set_brightness(0);
    assert_eq!(state.brightness_max(), 1);
    assert_eq!(state.rgb(), (1, 1, 0));

    state.set_brightness(30);
    advance_n(&mut state, 5);
    state.reset();
    assert_eq!(state.rgb(), (30, 30, 0));
}
