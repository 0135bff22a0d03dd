//! Canonical keys for raw quoted identifiers

use memchr::memchr;

use super::FormatError;

/// Given a quote-surrounded player name with a server suffix
/// (`"Zizek-Stalagg"`), returns the name without quotes or server.
pub fn normalize_player_name(raw: &str) -> Result<&str, FormatError> {
    let unquoted = raw.strip_prefix('"').unwrap_or(raw);
    let hyphen = memchr(b'-', unquoted.as_bytes()).ok_or_else(|| {
        FormatError::MissingServerSuffix {
            raw: raw.to_string(),
        }
    })?;

    let name = &unquoted[..hyphen];
    if name.is_empty() {
        return Err(FormatError::EmptyPlayerName {
            raw: raw.to_string(),
        });
    }
    Ok(name)
}

/// Strips every quote character, nothing else
pub fn normalize_mob_name(raw: &str) -> String {
    raw.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name_drops_quotes_and_server() {
        assert_eq!(normalize_player_name("\"Thrall-Orgrimmar\""), Ok("Thrall"));
        assert_eq!(normalize_player_name("\"Zizek-Stalagg\""), Ok("Zizek"));
    }

    #[test]
    fn test_player_name_without_server_suffix() {
        let err = normalize_player_name("\"NoHyphen\"").unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingServerSuffix {
                raw: "\"NoHyphen\"".to_string()
            }
        );
    }

    #[test]
    fn test_player_name_only_server() {
        assert!(matches!(
            normalize_player_name("\"-Stalagg\""),
            Err(FormatError::EmptyPlayerName { .. })
        ));
    }

    #[test]
    fn test_player_name_multi_region_suffix() {
        // only the first hyphen separates the name
        assert_eq!(normalize_player_name("\"Jaina-Area-52\""), Ok("Jaina"));
    }

    #[test]
    fn test_mob_name() {
        assert_eq!(normalize_mob_name("\"Ragnaros\""), "Ragnaros");
        assert_eq!(normalize_mob_name("\"Death Talon Seether\""), "Death Talon Seether");
        assert_eq!(normalize_mob_name("Core Hound"), "Core Hound");
        assert_eq!(normalize_mob_name(""), "");
    }
}
