//! Integration tests for wordforge

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Read, Write};

use num_bigint::BigUint;
use num_traits::One;

use wordforge::{
    estimate, generate, words, Charset, GenerationSpec, NullObserver, WordforgeError,
};

fn spec(min: usize, max: usize, symbols: &str) -> GenerationSpec {
    GenerationSpec::new(min, max, Charset::from_symbols(symbols), 0).unwrap()
}

#[test]
fn test_estimate_matches_formula() {
    // 3^1 + 3^2 + 3^3 + 3^4 = 120
    let est = estimate(&spec(1, 4, "abc")).unwrap();
    assert_eq!(est.total_count, BigUint::from(120u32));

    // Average word length (1+4)/2 = 2.5
    assert_eq!(est.estimated_size_bytes, 120.0 * 2.5);
}

#[test]
fn test_estimate_is_exact_beyond_u64() {
    let est = estimate(&spec(1, 11, wordforge::DEFAULT_SYMBOLS)).unwrap();

    let base = BigUint::from(95u32);
    let mut expected = BigUint::from(0u32);
    let mut term = base.clone();
    for _ in 1..=11 {
        expected += &term;
        term *= &base;
    }

    assert_eq!(est.total_count, expected);
    assert!(est.total_count > BigUint::from(u64::MAX));
}

#[test]
fn test_generated_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let s = spec(1, 2, "ab");

    let est = estimate(&s).unwrap();
    {
        let mut sink = BufWriter::new(File::create(&path).unwrap());
        let report = generate(&s, &mut sink, &mut NullObserver).unwrap();
        assert_eq!(BigUint::from(report.words_generated), est.total_count);
    }

    let mut content = String::new();
    File::open(&path).unwrap().read_to_string(&mut content).unwrap();

    assert_eq!(content, "a\nb\naa\nab\nba\nbb\n");
}

#[test]
fn test_every_line_within_spec() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let s = spec(2, 3, "xyz");

    {
        let mut sink = BufWriter::new(File::create(&path).unwrap());
        generate(&s, &mut sink, &mut NullObserver).unwrap();
    }

    let mut content = String::new();
    File::open(&path).unwrap().read_to_string(&mut content).unwrap();

    let symbols: HashSet<char> = "xyz".chars().collect();
    let mut line_count = 0u32;
    for line in content.lines() {
        line_count += 1;
        assert!(line.len() >= 2 && line.len() <= 3, "bad length: {:?}", line);
        assert!(line.chars().all(|c| symbols.contains(&c)), "bad symbol: {:?}", line);
    }
    assert_eq!(line_count, 9 + 27);
}

#[test]
fn test_full_product_as_a_set() {
    let generated: HashSet<String> = words(&spec(1, 2, "01")).collect();

    let expected: HashSet<String> = ["0", "1", "00", "01", "10", "11"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(generated, expected);
}

#[test]
fn test_no_duplicate_words() {
    let generated: Vec<String> = words(&spec(1, 3, "abcd")).collect();
    let unique: HashSet<&String> = generated.iter().collect();
    assert_eq!(generated.len(), unique.len());
}

#[test]
fn test_degenerate_zero_length_run() {
    let s = spec(0, 0, "abcdefghijklmnopqrstuvwxyz");

    let est = estimate(&s).unwrap();
    assert_eq!(est.total_count, BigUint::one());

    let mut sink = Vec::new();
    let report = generate(&s, &mut sink, &mut NullObserver).unwrap();
    assert_eq!(report.words_generated, 1);
    assert_eq!(sink, b"\n");
}

#[test]
fn test_invalid_range_is_rejected_by_both_phases() {
    let bad = GenerationSpec {
        min_length: 9,
        max_length: 3,
        charset: Charset::from_symbols("ab"),
        verbosity: 0,
    };

    assert!(matches!(
        estimate(&bad).unwrap_err(),
        WordforgeError::InvalidRange { .. }
    ));

    let mut sink = Vec::new();
    assert!(matches!(
        generate(&bad, &mut sink, &mut NullObserver).unwrap_err(),
        WordforgeError::InvalidRange { .. }
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_empty_charset_is_rejected() {
    let bad = GenerationSpec {
        min_length: 1,
        max_length: 2,
        charset: Charset::from_symbols(""),
        verbosity: 0,
    };

    assert!(matches!(
        estimate(&bad).unwrap_err(),
        WordforgeError::EmptyCharset
    ));
}

#[test]
fn test_failed_write_leaves_partial_file() {
    // A sink with almost no room: the word lands, the newline does not.
    struct TinySink {
        budget: usize,
        written: Vec<u8>,
    }

    impl Write for TinySink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.written.len() + buf.len() > self.budget {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "no space left",
                ));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut sink = TinySink {
        budget: 3,
        written: Vec::new(),
    };
    let err = generate(&spec(1, 1, "ab"), &mut sink, &mut NullObserver).unwrap_err();

    assert!(matches!(err, WordforgeError::SinkWrite { .. }));
    // The successful prefix stays in place, untouched.
    assert_eq!(sink.written, b"a\nb");
}

#[test]
fn test_report_timestamps_are_ordered() {
    let mut sink = Vec::new();
    let report = generate(&spec(1, 1, "ab"), &mut sink, &mut NullObserver).unwrap();
    assert!(report.finished_at >= report.started_at);
}
