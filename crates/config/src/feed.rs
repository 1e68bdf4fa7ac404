//! Loading the request feed from disk.

use std::path::Path;

use returndesk_protocol::RequestStore;
use tracing::info;

use crate::error::Result;
use crate::persistence::read_config_file;

/// Reads a feed document (JSON5 or JSON) into a request store.
///
/// Unknown type, mode and status values do not fail the load; they resolve
/// to their fallbacks while parsing.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a feed document.
///
/// # Examples
///
/// ```no_run
/// use returndesk_config::feed::load_feed;
///
/// # fn main() -> returndesk_config::Result<()> {
/// let store = load_feed("returns.json5")?;
/// println!("{} requests", store.len());
/// # Ok(())
/// # }
/// ```
pub fn load_feed(path: impl AsRef<Path>) -> Result<RequestStore> {
    let path = path.as_ref();
    let store: RequestStore = read_config_file(path)?;
    info!(path = %path.display(), requests = store.len(), "loaded request feed");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use returndesk_protocol::{DamageType, RequestStatus, ReturnType};
    use tempfile::TempDir;

    #[test]
    fn loads_json5_feed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("returns.json5");
        std::fs::write(
            &path,
            r#"
            {
                requests: [
                    { id: "RET-1", clientName: "Acme", returnType: "Damaged", rating: 3 },
                    { id: "RET-2", clientName: "Hooli", returnType: "store credit" },
                ],
                line_items: {
                    "RET-1": [{ item_code: "SKU-1", item_name: "Vase", qty: 1, damage_type: "broken" }],
                },
            }
            "#,
        )
        .unwrap();

        let store = load_feed(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.requests()[0].return_type, ReturnType::Damage);
        assert_eq!(store.requests()[1].return_type, ReturnType::Refund);
        assert_eq!(
            store.line_items_for("RET-1")[0].damage_type,
            DamageType::Broken
        );
    }

    #[test]
    fn json5_feed_with_odd_field_types_still_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("returns.json5");
        std::fs::write(
            &path,
            r#"
            {
                requests: [
                    { id: "RET-1", returnType: "Missing", rating: 2 },
                    { id: "RET-2", returnType: null, status: 4, rating: 4.5, progress: "30" },
                ],
            }
            "#,
        )
        .unwrap();

        let store = load_feed(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.requests()[0].return_type, ReturnType::Missing);

        let odd = &store.requests()[1];
        assert_eq!(odd.return_type, ReturnType::Refund);
        assert_eq!(odd.status, RequestStatus::Pending);
        assert_eq!(odd.rating.get(), 5);
        assert_eq!(odd.progress.get(), 30);
    }

    #[test]
    fn missing_feed_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_feed(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
