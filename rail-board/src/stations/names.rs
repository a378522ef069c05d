//! Resolving what the user typed to a station from the live list.

use tracing::info;

use crate::realtime::{RealtimeApi, Station};

use super::error::LookupError;

/// Canonical form of a station name for fuzzy comparison.
///
/// Lower-cases the text and keeps only lowercase letters, so case, spaces,
/// digits and punctuation never affect a match. Accented letters are kept
/// as they are: "Dún Laoghaire" and "Dun Laoghaire" normalize differently.
///
/// # Examples
///
/// ```
/// use rail_board::stations::normalize;
///
/// assert_eq!(normalize("Dun Laoghaire"), "dunlaoghaire");
/// assert_eq!(normalize("DUNLAOGHAIRE"), "dunlaoghaire");
/// assert_eq!(normalize("Tara St."), "tarast");
/// ```
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_lowercase())
        .collect()
}

/// Whether `station` answers to an already normalized query, by name,
/// alias or code.
pub fn matches(station: &Station, normalized_query: &str) -> bool {
    [&station.name, &station.alias, &station.code]
        .into_iter()
        .any(|field| normalize(field) == normalized_query)
}

/// Find the station the user means by `query`.
///
/// Fetches the full station list and returns the first station, in list
/// order, whose name, alias or code normalizes to the same text as the
/// query.
pub async fn lookup_station<C: RealtimeApi>(
    client: &C,
    query: &str,
) -> Result<Station, LookupError> {
    let stations = client.list_stations().await?;
    let wanted = normalize(query);

    let station = stations
        .into_iter()
        .find(|station| matches(station, &wanted))
        .ok_or_else(|| LookupError::NotFound {
            query: query.to_string(),
        })?;

    info!(query, code = %station.code, name = %station.name, "resolved station");
    Ok(station)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::realtime::{MockRealtimeClient, RealtimeError};

    fn station(code: &str, name: &str, alias: &str) -> Station {
        Station {
            code: code.to_string(),
            name: name.to_string(),
            alias: alias.to_string(),
            ..Default::default()
        }
    }

    fn client() -> MockRealtimeClient {
        MockRealtimeClient::with_stations(vec![
            station("BFSTC", "Belfast", ""),
            station("CNLY", "Connolly", ""),
            station("DLERY", "Dun Laoghaire", "Dún Laoghaire"),
            station("TARA ", "Tara Street", ""),
        ])
    }

    #[test]
    fn normalize_strips_case_and_punctuation() {
        assert_eq!(normalize("Dun Laoghaire"), "dunlaoghaire");
        assert_eq!(normalize("DUNLAOGHAIRE"), "dunlaoghaire");
        assert_eq!(normalize("St. Stephen's Green"), "ststephensgreen");
        assert_eq!(normalize("Platform 2"), "platform");
        assert_eq!(normalize("  "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_keeps_accented_letters() {
        assert_eq!(normalize("Dún Laoghaire"), "dúnlaoghaire");
        assert_ne!(normalize("Dún Laoghaire"), normalize("DUNLAOGHAIRE"));
        assert_eq!(normalize("DÚN LAOGHAIRE"), normalize("dún laoghaire"));
    }

    #[test]
    fn matches_any_of_name_alias_code() {
        let s = station("DLERY", "Dun Laoghaire", "Dún Laoghaire");
        assert!(matches(&s, "dunlaoghaire"));
        assert!(matches(&s, "dúnlaoghaire"));
        assert!(matches(&s, "dlery"));
        assert!(!matches(&s, "dun"));
    }

    #[test]
    fn empty_alias_matches_empty_query() {
        // An alias-less station answers to a query with no letters at all.
        let s = station("CNLY", "Connolly", "");
        assert!(matches(&s, ""));
    }

    #[tokio::test]
    async fn lookup_by_name_any_case() {
        let client = client();
        for query in ["connolly", "CONNOLLY", "Connolly"] {
            let found = lookup_station(&client, query).await.unwrap();
            assert_eq!(found.code, "CNLY");
            assert_eq!(found.name, "Connolly");
        }
    }

    #[tokio::test]
    async fn lookup_by_code() {
        let found = lookup_station(&client(), "cnly").await.unwrap();
        assert_eq!(found.name, "Connolly");
    }

    #[tokio::test]
    async fn lookup_by_alias() {
        let found = lookup_station(&client(), "dún laoghaire").await.unwrap();
        assert_eq!(found.code, "DLERY");
    }

    #[tokio::test]
    async fn lookup_uses_trimmed_code() {
        let found = lookup_station(&client(), "Tara").await.unwrap();
        assert_eq!(found.code, "TARA");
    }

    #[tokio::test]
    async fn lookup_returns_first_match() {
        let client = MockRealtimeClient::with_stations(vec![
            station("AAA", "Twin", ""),
            station("BBB", "Other", "twin"),
        ]);
        let found = lookup_station(&client, "TWIN").await.unwrap();
        assert_eq!(found.code, "AAA");
    }

    #[tokio::test]
    async fn lookup_not_found_keeps_query() {
        let err = lookup_station(&client(), "nonexistent").await.unwrap_err();
        match err {
            LookupError::NotFound { query } => assert_eq!(query, "nonexistent"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookup_propagates_fetch_failure() {
        let client = client();
        client.set_offline(true).await;

        let err = lookup_station(&client, "connolly").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::Realtime(RealtimeError::Api { status: 503, .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output only ever holds lowercase letters
        #[test]
        fn output_is_lowercase_letters(s in "[a-zA-Z0-9 '.,áéíóúÁÉÍÓÚ-]{0,40}") {
            let n = normalize(&s);
            prop_assert!(n.chars().all(|c| c.is_lowercase() && c.is_alphabetic()));
        }

        /// Normalizing twice changes nothing
        #[test]
        fn idempotent(s in "[a-zA-Z0-9 '.,áéíóúÁÉÍÓÚ-]{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Case never matters
        #[test]
        fn case_insensitive(s in "[a-zA-Z ]{0,40}") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
