use crate::NamingError;

/// Number of token characters used as the shard prefix
pub const SHARD_PREFIX_LEN: usize = 4;

/// Extension used when the MIME type is unknown
pub const DEFAULT_EXTENSION: &str = ".jpg";

const TOKEN_BYTES: usize = 16;

/// Random 128-bit token as lowercase hex. Only needs to be unique, not secret.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    hex::encode(bytes)
}

/// Maps an upload MIME type to the extension tag used in generated names
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        _ => DEFAULT_EXTENSION,
    }
}

/// Fresh base name shared by every variant of one upload
pub fn base_name(extension: &str) -> String {
    format!("{}{}", generate_token(), extension)
}

/// Builds `/<prefix>/<variant>_<base>` where prefix is the first
/// four characters of the base name.
pub fn shard(base: &str, variant: &str) -> Result<String, NamingError> {
    if base.is_empty() {
        return Err(NamingError::EmptyName);
    }
    validate_segment(base)?;
    validate_segment(variant)?;

    let prefix: String = base.chars().take(SHARD_PREFIX_LEN).collect();
    Ok(format!("/{}/{}_{}", prefix, variant, base))
}

fn validate_segment(segment: &str) -> Result<(), NamingError> {
    if segment.is_empty()
        || segment.contains('/')
        || segment.contains('\\')
        || segment.contains("..")
    {
        return Err(NamingError::InvalidName(segment.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_hex() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(token, generate_token());
    }

    #[test]
    fn test_extension_for() {
        assert_eq!(extension_for("image/jpeg"), ".jpg");
        assert_eq!(extension_for("image/PNG"), ".png");
        assert_eq!(extension_for("image/gif"), ".gif");
        assert_eq!(extension_for("application/octet-stream"), ".jpg");
        assert_eq!(extension_for(""), ".jpg");
    }

    #[test]
    fn test_shard_layout() {
        let path = shard("0a1b2c3d.jpg", "thumb").unwrap();
        assert_eq!(path, "/0a1b/thumb_0a1b2c3d.jpg");
    }

    #[test]
    fn test_shard_is_deterministic() {
        let base = base_name(".png");
        assert_eq!(shard(&base, "large").unwrap(), shard(&base, "large").unwrap());
        assert_ne!(shard(&base, "large").unwrap(), shard(&base, "small").unwrap());
    }

    #[test]
    fn test_shard_short_base() {
        assert_eq!(shard("ab", "v").unwrap(), "/ab/v_ab");
    }

    #[test]
    fn test_shard_rejects_bad_input() {
        assert_eq!(shard("", "thumb"), Err(NamingError::EmptyName));
        assert!(matches!(shard("../etc", "thumb"), Err(NamingError::InvalidName(_))));
        assert!(matches!(shard("abcd.jpg", "a/b"), Err(NamingError::InvalidName(_))));
        assert!(matches!(shard("abcd.jpg", ""), Err(NamingError::InvalidName(_))));
    }
}
