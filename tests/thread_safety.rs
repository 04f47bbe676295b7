//! Thread safety tests for ansi_rgb.
//!
//! Verifies that public types are Send + Sync and that one colorizer can be
//! shared across threads without locking.

use ansi_rgb::prelude::*;
use std::sync::Arc;
use std::thread;

/// Helper function to verify a type is Send + Sync at compile time.
fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_send_sync() {
    assert_send_sync::<Colorizer>();
    assert_send_sync::<ColorizerBuilder>();
    assert_send_sync::<Palette>();
    assert_send_sync::<Rgb>();
    assert_send_sync::<ColorError>();
    assert_send_sync::<TextStyle>();
    assert_send_sync::<Attributes>();
    assert_send_sync::<MatchPolicy>();
    assert_send_sync::<Preset>();
}

#[test]
fn test_shared_colorizer_concurrent_quantize() {
    let colorizer = Arc::new(Colorizer::new());
    let expected: Vec<u8> = (0u8..=255)
        .map(|v| colorizer.quantize_rgb(Rgb::new(v, v.wrapping_mul(7), v.wrapping_mul(13))))
        .collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let colorizer = Arc::clone(&colorizer);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for v in 0u8..=255 {
                    let rgb = Rgb::new(v, v.wrapping_mul(7), v.wrapping_mul(13));
                    assert_eq!(
                        colorizer.quantize(&rgb.hex()).unwrap(),
                        expected[usize::from(v)]
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
}

#[test]
fn test_shared_colorizer_concurrent_sequences() {
    let colorizer = Arc::new(Colorizer::new());

    let handles: Vec<_> = TextStyle::ALL
        .into_iter()
        .map(|style| {
            let colorizer = Arc::clone(&colorizer);
            thread::spawn(move || {
                let out = colorizer.color_by_index(1, Some(2), Some(style));
                (style, out)
            })
        })
        .collect();

    for handle in handles {
        let (style, out) = handle.join().expect("thread panicked");
        assert_eq!(
            out,
            format!("\x1b[0m\x1b[{}m\x1b[48;5;2m\x1b[38;5;1m", style.code())
        );
    }
}
