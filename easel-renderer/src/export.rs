//! Data URL conversion for surface snapshots.
//!
//! The persistence API carries canvas images as `data:image/png;base64,`
//! strings, the same envelope browsers produce from `canvas.toDataURL()`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use easel_core::Snapshot;

use crate::error::{RenderError, RenderResult};

/// Prefix every PNG snapshot data URL carries.
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode a snapshot as a PNG data URL.
#[must_use]
pub fn snapshot_to_data_url(snapshot: &Snapshot) -> String {
    let mut url = String::from(DATA_URL_PREFIX);
    STANDARD.encode_string(snapshot.as_bytes(), &mut url);
    url
}

/// Decode a PNG data URL back into a snapshot.
///
/// # Errors
///
/// Returns [`RenderError::Decode`] if the prefix is missing or the payload
/// is not valid base64.
pub fn snapshot_from_data_url(url: &str) -> RenderResult<Snapshot> {
    let payload = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| RenderError::Decode("missing data:image/png;base64, prefix".into()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| RenderError::Decode(format!("invalid base64 payload: {e}")))?;
    Ok(Snapshot::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_snapshot_bytes() {
        let snapshot = Snapshot::from_bytes(vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0x01]);
        let url = snapshot_to_data_url(&snapshot);
        assert!(url.starts_with(DATA_URL_PREFIX));
        assert_eq!(snapshot_from_data_url(&url).unwrap(), snapshot);
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(snapshot_from_data_url("data:image/jpeg;base64,AAAA").is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        let url = format!("{DATA_URL_PREFIX}not base64!!");
        assert!(snapshot_from_data_url(&url).is_err());
    }
}
