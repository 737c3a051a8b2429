mod common;

use approx::assert_relative_eq;
use common::{assert_signals_close, sample_filters, stream, two_tone, uniform_noise};
use digital_filters::error::HistoryKind;
use digital_filters::{Filter, FilterError};

#[test]
fn test_batch_matches_streaming_with_history() {
    let x = two_tone(300, 0.02);

    for (seed, mut f) in sample_filters().into_iter().enumerate() {
        let x0 = uniform_noise(f.numerator().len() - 1, 1.0, seed as u64);
        let y0 = uniform_noise(f.denominator().len() - 1, 1.0, 100 + seed as u64);

        let batch = f.filter_sequence(&x0, &y0, &x).unwrap();

        f.init_input_samples(&x0).unwrap();
        f.init_output_samples(&y0).unwrap();
        let streamed = stream(&mut f, &x);

        assert_signals_close(&batch, &streamed, 1e-12);
    }
}

#[test]
fn test_batch_continues_streaming_state() {
    let mut f = Filter::<f64, f64>::new(&[3.0, -2.0, 1.0, -0.05], &[1.7, 0.5, -0.8]).unwrap();
    let warmup = two_tone(50, 0.1);
    stream(&mut f, &warmup);

    // Newest-first history minus the slot about to be evicted
    let inputs = f.input_history();
    let outputs = f.output_history();
    let x0 = &inputs[..inputs.len() - 1];
    let y0 = &outputs[..outputs.len() - 1];

    let x = uniform_noise(100, 1.0, 5);
    let batch = f.filter_sequence(x0, y0, &x).unwrap();
    let streamed = stream(&mut f, &x);
    assert_signals_close(&batch, &streamed, 1e-12);
}

#[test]
fn test_static_gain_filter() {
    let mut f = Filter::<f64, f64>::new(&[2.0], &[1.0]).unwrap();
    let x = uniform_noise(100, 50.0, 11);
    let y = stream(&mut f, &x);
    for (xi, yi) in x.iter().zip(&y) {
        assert_eq!(*yi, 2.0 * xi);
    }

    let batch = f.filter_sequence(&[], &[], &x).unwrap();
    assert_eq!(batch, y);
}

#[test]
fn test_normalized_leading_denominator() {
    for a0 in [0.3, -2.0, 7.5, 1e-4, 1e6] {
        let f = Filter::<f64, f64>::new(&[1.0, 2.0], &[a0, 0.1, 0.2]).unwrap();
        assert_eq!(f.denominator()[0], 1.0);
        assert_relative_eq!(f.numerator()[1], 2.0 / a0, max_relative = 1e-15);
    }
}

#[test]
fn test_size_mismatch_errors() {
    let mut f = Filter::<f64, f64>::new(&[1.0, 0.5, 0.25, 0.125], &[1.0, -0.5]).unwrap();

    for n in [0, 1, 2, 4] {
        match f.init_input_samples(&vec![0.0; n]) {
            Err(FilterError::InitialConditionSizeMismatch {
                history: HistoryKind::Input,
                expected: 3,
                actual,
            }) => assert_eq!(actual, n),
            other => panic!("unexpected result for {} samples: {:?}", n, other),
        }
    }
    for n in [0, 2] {
        assert!(matches!(
            f.init_output_samples(&vec![0.0; n]),
            Err(FilterError::InitialConditionSizeMismatch {
                history: HistoryKind::Output,
                expected: 1,
                ..
            })
        ));
    }
    assert!(f.filter_sequence(&[0.0; 3], &[0.0; 2], &[1.0]).is_err());
}

#[test]
fn test_mixed_precision_copy() {
    let mut fd = Filter::<f64, f64>::new(&[0.2, 0.3], &[1.0, -0.5]).unwrap();
    fd.init_input(1.0);
    fd.init_output(1.0);

    let mut ff = fd.cast::<f32, f32>();
    let x = two_tone(200, 0.05);
    for &v in &x {
        let yd = fd.filter(v);
        let yf = ff.filter(v as f32);
        assert!((yd - yf as f64).abs() < 1e-5, "{} vs {}", yd, yf);
    }

    let back = ff.cast::<f64, f64>();
    assert_relative_eq!(back.numerator()[1], 0.3, max_relative = 1e-7);
}
