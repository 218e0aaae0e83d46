use campanile_core::utils::time::{format_timestamp, now_timestamp};
use time::OffsetDateTime;

/*
    Obiettivo test: due istanti nello stesso secondo con frazioni diverse
    (500ms e 510ms) devono produrre la stessa stringa troncata. Senza il
    troncamento Rfc3339 emetterebbe "…00.5Z" e "…00.51Z", e il confronto
    lessicografico (quello usato da ORDER BY e dal riordino del client)
    metterebbe l'istante più vecchio dopo quello più nuovo.
*/
#[test]
fn same_second_fractions_format_identically() {
    let base_ns: i128 = 1_762_070_400_000_000_000; // 2025-11-02T08:00:00Z
    let earlier = OffsetDateTime::from_unix_timestamp_nanos(base_ns + 500_000_000)
        .expect("valid instant");
    let later = OffsetDateTime::from_unix_timestamp_nanos(base_ns + 510_000_000)
        .expect("valid instant");

    let earlier_s = format_timestamp(earlier);
    let later_s = format_timestamp(later);

    assert_eq!(earlier_s, later_s, "same second must truncate to the same string");
    assert!(!earlier_s.contains('.'), "no variable-width subseconds: {}", earlier_s);
}

/*
    Obiettivo test: tra secondi diversi l'ordine lessicografico delle stringhe
    coincide con quello cronologico, anche quando l'istante più vecchio ha una
    frazione "alta" e il più nuovo una "bassa".
*/
#[test]
fn string_order_matches_time_order_across_seconds() {
    let base_ns: i128 = 1_762_070_400_000_000_000; // 2025-11-02T08:00:00Z
    let earlier = OffsetDateTime::from_unix_timestamp_nanos(base_ns + 900_000_000)
        .expect("valid instant");
    let later = OffsetDateTime::from_unix_timestamp_nanos(base_ns + 1_100_000_000)
        .expect("valid instant");

    let earlier_s = format_timestamp(earlier);
    let later_s = format_timestamp(later);

    assert!(later_s > earlier_s, "{} must sort after {}", later_s, earlier_s);
}

/*
    Obiettivo test: now_timestamp produce il formato troncato atteso,
    senza subsecondi e con la Z finale.
*/
#[test]
fn now_timestamp_is_whole_second_rfc3339() {
    let s = now_timestamp();
    assert!(s.ends_with('Z'), "UTC timestamp: {}", s);
    assert!(!s.contains('.'), "no subseconds: {}", s);
    assert_eq!(s.len(), "2025-11-02T08:00:00Z".len(), "fixed width: {}", s);
}
