use strandalign_core::{
    AlignmentEngine, AlignmentResult, LinearScoring, RandomSequenceGenerator, ScoringPolicy,
    Strategy, GAP, MATCH, MISMATCH,
};

/// Exhaustive recursion with no memo and no pruning; exponential, so only
/// usable on short inputs.
fn brute_force_score(seq1: &[u8], seq2: &[u8]) -> i64 {
    if seq1.is_empty() {
        return GAP * seq2.len() as i64;
    }
    if seq2.is_empty() {
        return GAP * seq1.len() as i64;
    }
    let column = if seq1[0] == seq2[0] { MATCH } else { MISMATCH };
    let with_both = brute_force_score(&seq1[1..], &seq2[1..]) + column;
    let gap_in_first = brute_force_score(seq1, &seq2[1..]) + GAP;
    let gap_in_second = brute_force_score(&seq1[1..], seq2) + GAP;
    with_both.max(gap_in_first).max(gap_in_second)
}

/// Direct recursion over suffixes that builds the rows eagerly, trying the
/// branches in the same order and with the same tie rule as the engine.
fn eager_alignment(seq1: &[u8], seq2: &[u8], policy: &LinearScoring) -> (i64, String, String) {
    let text = |seq: &[u8]| String::from_utf8_lossy(seq).into_owned();
    if seq1.is_empty() {
        return (policy.gap_run(seq2.len()), "-".repeat(seq2.len()), text(seq2));
    }
    if seq2.is_empty() {
        return (policy.gap_run(seq1.len()), text(seq1), "-".repeat(seq1.len()));
    }

    let (a, b) = (seq1[0] as char, seq2[0] as char);
    let (score, row1, row2) = eager_alignment(&seq1[1..], &seq2[1..], policy);
    let mut best = (
        score + policy.substitution(&a, &b),
        format!("{}{}", a, row1),
        format!("{}{}", b, row2),
    );
    if a == b {
        return best;
    }

    let (score, row1, row2) = eager_alignment(seq1, &seq2[1..], policy);
    if score + policy.gap() > best.0 {
        best = (score + policy.gap(), format!("-{}", row1), format!("{}{}", b, row2));
    }
    let (score, row1, row2) = eager_alignment(&seq1[1..], seq2, policy);
    if score + policy.gap() > best.0 {
        best = (score + policy.gap(), format!("{}{}", a, row1), format!("-{}", row2));
    }
    best
}

fn rows(result: &AlignmentResult<u8>) -> (String, String) {
    result.gapped('-')
}

fn assert_valid(result: &AlignmentResult<u8>, seq1: &[u8], seq2: &[u8]) {
    assert_eq!(result.aligned1.len(), result.aligned2.len());
    assert!(result
        .columns()
        .all(|(a, b)| a.is_some() || b.is_some()));
    assert_eq!(result.ungapped1(), seq1.to_vec());
    assert_eq!(result.ungapped2(), seq2.to_vec());
    assert_eq!(result.rescore(&LinearScoring::default()), result.score);
}

#[test]
fn base_cases() {
    let engine = AlignmentEngine::default();

    let empty_left = engine.align(b"", b"AT");
    assert_eq!(empty_left.score, -4);
    assert_eq!(rows(&empty_left), ("--".to_string(), "AT".to_string()));

    let both_empty = engine.align::<u8>(b"", b"");
    assert_eq!(both_empty.score, 0);
    assert!(both_empty.aligned1.is_empty());
    assert!(both_empty.aligned2.is_empty());
}

#[test]
fn single_symbols() {
    let engine = AlignmentEngine::default();
    assert_eq!(rows(&engine.align(b"A", b"A")), ("A".to_string(), "A".to_string()));
    assert_eq!(engine.align(b"A", b"A").score, 1);

    // -1 for the aligned mismatch beats -4 for either pair of gaps
    let mismatch = engine.align(b"A", b"T");
    assert_eq!(mismatch.score, -1);
    assert_eq!(rows(&mismatch), ("A".to_string(), "T".to_string()));
}

#[test]
fn identical_sequences_align_without_gaps() {
    let engine = AlignmentEngine::default();
    let mut generator = RandomSequenceGenerator::from_seed(11);
    for _ in 0..20 {
        let strand = generator.generate_dna(1, 200).unwrap();
        let result = engine.align(&strand, &strand);
        assert_eq!(result.score, strand.len() as i64);
        assert_eq!(result.stats().gaps(), 0);
        assert_eq!(result.ungapped1(), strand);
        assert_eq!(result.len(), strand.len());
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mut generator = RandomSequenceGenerator::from_seed(5);
    let (seq1, seq2) = generator.generate_dna_pair(40, 60).unwrap();
    let engine = AlignmentEngine::default();
    let first = engine.align(&seq1, &seq2);
    let second = engine.align(&seq1, &seq2);
    assert_eq!(first, second);
}

#[test]
fn known_strand_pairs() {
    let engine = AlignmentEngine::default();
    let cases: [(&[u8], &[u8], i64, &str, &str); 3] = [
        (
            b"TGTACCCGCCGATCCCCGACTAAAAACTCTGGGTATTGGGGTGTACTTCCACCAA",
            b"CGACTCACAACATTCGGATAGAGAAAGCCGTTAGACAGGGCTTAGTGAGACATT",
            -10,
            "TGTACCCGCCG-ATCCCCGACTA-A-AAACTC-TGGGTATTGGGGTGTACTTCCACCAA",
            "CG-ACTCACAACATTCG-GA-TAGAGAAAGCCGTTAG-ACAGGGCT-TAGTGAGACATT",
        ),
        (
            b"TGTCGAGAATATCTTTCCTGTGGCTCAGACGCAGCGGTCCCCGTAGTCAA",
            b"AGCCGGGGTAATGCGCACGGGAGCCTGCATTTACAATAGCCAGGTGCCCATTTTCAAC",
            -6,
            "TGTCGAGAATAT-CTTTCCTGTGGCT-CAG--ACGC-AGC--GGTCCCCGTAGTCAA-",
            "AGCCGGGGTAATGCGCACGGGAGCCTGCATTTACAATAGCCAGGTGCCCATTTTCAAC",
        ),
        (
            b"TCCATATATTGGACGATATACCAGATTCGCCACCTTGTCAGTGGTTGCCCGTAGGG",
            b"TTTCCTGCCCAAGAGTTTCCGACTTGTCCAGGGGTTGCCCGCCGTTGCGGCGCGGG",
            -7,
            "TC-CATATATTGGACGATATACCAGATTCG-CCACC--TTGTCAGTGGTTGCC-CGTAGGG",
            "TTTCCTGCCCAAGA-GTT-T-CC-GACTTGTCCAGGGGTTGCCCGCCGTTGCGGCGC-GGG",
        ),
    ];

    for (seq1, seq2, score, row1, row2) in cases {
        for strategy in Strategy::all() {
            let result = engine.clone().with_strategy(strategy).align(seq1, seq2);
            assert_eq!(result.score, score, "{:?}", strategy);
            assert_eq!(rows(&result), (row1.to_string(), row2.to_string()), "{:?}", strategy);
            assert_valid(&result, seq1, seq2);
        }
    }
}

#[test]
fn memoized_score_matches_brute_force() {
    let engine = AlignmentEngine::default();
    let mut generator = RandomSequenceGenerator::from_seed(2024);
    for _ in 0..30 {
        let seq1 = generator.generate_dna(1, 7).unwrap();
        let seq2 = generator.generate_dna(1, 7).unwrap();
        assert_eq!(
            engine.align(&seq1, &seq2).score,
            brute_force_score(&seq1, &seq2),
            "{:?} vs {:?}",
            String::from_utf8_lossy(&seq1),
            String::from_utf8_lossy(&seq2)
        );
    }

    // Largest size the oracle is checked at
    let seq1 = b"GATTACAGAT";
    let seq2 = b"CTTAGACATG";
    assert_eq!(engine.score(seq1, seq2), brute_force_score(seq1, seq2));
}

#[test]
fn score_bounds() {
    let engine = AlignmentEngine::default();
    let mut generator = RandomSequenceGenerator::from_seed(99);
    for _ in 0..50 {
        let (seq1, seq2) = generator.generate_dna_pair(1, 80).unwrap();
        let result = engine.align(&seq1, &seq2);
        let upper = seq1.len().min(seq2.len()) as i64 * MATCH;
        let lower = GAP * seq1.len().max(seq2.len()) as i64;
        assert!(result.score <= upper);
        assert!(result.score >= lower);
        assert_valid(&result, &seq1, &seq2);
    }
}

#[test]
fn long_inputs_do_not_exhaust_the_stack() {
    // Deep enough that a natively recursive solver would overflow
    let mut generator = RandomSequenceGenerator::from_seed(8);
    let seq1 = generator.generate_dna(2500, 2500).unwrap();
    let seq2 = generator.generate_dna(2500, 2500).unwrap();
    for strategy in [Strategy::BottomUp, Strategy::TopDown] {
        let engine = AlignmentEngine::default().with_strategy(strategy);
        let result = engine.align(&seq1, &seq2);
        assert_valid(&result, &seq1, &seq2);
    }
}

#[test]
fn oversized_inputs_are_rejected() {
    let engine = AlignmentEngine::default().with_max_cells(Some(10_000));
    let seq = vec![b'A'; 200];
    let err = engine.try_align(&seq, &seq).unwrap_err();
    assert!(err.is_resource_limit());
    assert!(engine.try_align(&seq[..50], &seq[..50]).is_ok());
}

#[test]
fn alphabet_agnostic() {
    let engine = AlignmentEngine::default();
    let words1 = ["the", "quick", "brown", "fox"];
    let words2 = ["the", "brown", "fox"];
    let result = engine.align(&words1, &words2);
    assert_eq!(result.score, 3 * MATCH + GAP);
    assert_eq!(result.aligned2[1], None);
}

#[test]
fn injected_policy_is_used() {
    let policy = LinearScoring::new(3, -2, -1);
    let engine = AlignmentEngine::new(policy);
    let result = engine.align(b"GATTACA", b"GATACA");
    assert_eq!(result.score, 6 * policy.match_score() + policy.gap());
    assert_eq!(result.rescore(&policy), result.score);
}

#[test]
fn rows_match_eager_recursion() {
    let policies = [
        LinearScoring::default(),
        LinearScoring::new(2, -1, -1),
        LinearScoring::new(1, 0, -1),
        LinearScoring::new(1, -1, 0),
    ];
    let mut generator = RandomSequenceGenerator::from_seed(77);
    let pairs: Vec<(Vec<u8>, Vec<u8>)> = (0..60)
        .map(|_| generator.generate_dna_pair(1, 6).unwrap())
        .chain([(b"ACA".to_vec(), b"CAC".to_vec()), (b"A".to_vec(), b"CC".to_vec())])
        .collect();

    for policy in policies {
        for (seq1, seq2) in &pairs {
            let (score, row1, row2) = eager_alignment(seq1, seq2, &policy);
            for strategy in Strategy::all() {
                let result = AlignmentEngine::new(policy)
                    .with_strategy(strategy)
                    .align(seq1.as_slice(), seq2.as_slice());
                assert_eq!(
                    (result.score, rows(&result)),
                    (score, (row1.clone(), row2.clone())),
                    "{:?} {:?} on {:?} vs {:?}",
                    policy,
                    strategy,
                    String::from_utf8_lossy(seq1),
                    String::from_utf8_lossy(seq2)
                );
            }
        }
    }
}
