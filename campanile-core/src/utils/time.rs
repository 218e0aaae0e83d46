use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Formatta un istante come RFC3339 UTC troncato al secondo intero
/// (es. "2025-11-02T12:34:56Z"). Il troncamento tiene la larghezza fissa:
/// Rfc3339 ometterebbe gli zeri finali dei subsecondi ("…00.5Z" vs
/// "…00.51Z") e l'ordine lessicografico divergerebbe da quello
/// cronologico. A parità di secondo lo spareggio è l'id.
pub fn format_timestamp(instant: OffsetDateTime) -> String {
    let truncated = instant
        .replace_nanosecond(0)
        .expect("zero nanoseconds is in range");
    truncated
        .format(&Rfc3339)
        .expect("error formatting timestamp")
}

/// Restituisce l'istante corrente in UTC formattato come RFC3339 troncato
/// al secondo. Con la larghezza fissa l'ordine lessicografico delle stringhe
/// coincide con quello cronologico: è la proprietà su cui si appoggia
/// l'ordinamento delle notifiche.
pub fn now_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}
