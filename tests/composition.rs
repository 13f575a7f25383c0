use team_seqreport::composition::gc_content;

#[test]
fn gc_content_reference_values() {
    assert_eq!(gc_content(""), 0.0);
    assert_eq!(gc_content("GCGC"), 100.0);
    assert_eq!(gc_content("ATAT"), 0.0);
    assert_eq!(gc_content("gcAT"), 50.0);
}

#[test]
fn gc_content_stays_in_bounds() {
    for sequence in ["A", "G", "ACGTN", "nnnnGGc", "GATTACA", "-.-C"] {
        let value = gc_content(sequence);
        assert!((0.0..=100.0).contains(&value), "{sequence}: {value}");
    }
}
