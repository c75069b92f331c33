use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;
use uuid::Uuid;

use shared_models::auth::{AdminSession, JwtClaims, JwtHeader, ADMIN_ROLE};

type HmacSha256 = Hmac<Sha256>;

/// Sign a fresh admin token valid for `ttl_hours`.
pub fn issue_admin_token(
    secret: &str,
    ttl_hours: i64,
) -> Result<(String, DateTime<Utc>), String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(ttl_hours);

    let claims = JwtClaims {
        sub: Uuid::new_v4().to_string(),
        role: Some(ADMIN_ROLE.to_string()),
        iat: Some(now.timestamp() as u64),
        exp: Some(expires_at.timestamp() as u64),
    };

    let token = sign_claims(&claims, secret)?;
    Ok((token, expires_at))
}

pub fn sign_claims(claims: &JwtClaims, secret: &str) -> Result<String, String> {
    if secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let header = JwtHeader {
        alg: "HS256".to_string(),
        typ: "JWT".to_string(),
    };

    let header_json = serde_json::to_string(&header).map_err(|e| e.to_string())?;
    let claims_json = serde_json::to_string(claims).map_err(|e| e.to_string())?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", signing_input, signature))
}

pub fn validate_token(token: &str, jwt_secret: &str) -> Result<AdminSession, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid token format".to_string());
    }

    let header_b64 = parts[0];
    let claims_b64 = parts[1];
    let signature_b64 = parts[2];

    let signature = match URL_SAFE_NO_PAD.decode(signature_b64) {
        Ok(sig) => sig,
        Err(e) => {
            debug!("Failed to decode signature: {}", e);
            return Err("Invalid signature encoding".to_string());
        }
    };

    let signature_string = format!("{}.{}", header_b64, claims_b64);

    let mut mac = HmacSha256::new_from_slice(jwt_secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signature_string.as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err("Invalid token signature".to_string());
    }

    let claims_json = URL_SAFE_NO_PAD
        .decode(claims_b64)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| "Invalid claims encoding".to_string())?;

    let claims: JwtClaims = serde_json::from_str(&claims_json).map_err(|e| {
        debug!("Failed to parse claims: {}", e);
        "Invalid claims format".to_string()
    })?;

    if let Some(exp) = claims.exp {
        let now = Utc::now().timestamp() as u64;
        if exp < now {
            debug!("Token expired at {} (now: {})", exp, now);
            return Err("Token expired".to_string());
        }
    }

    let to_datetime = |ts: u64| Utc.timestamp_opt(ts as i64, 0).single();

    let session = AdminSession {
        id: claims.sub,
        role: claims.role,
        issued_at: claims.iat.and_then(to_datetime),
        expires_at: claims.exp.and_then(to_datetime),
    };

    debug!("Token validated successfully for session: {}", session.id);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_issued_token_validates() {
        let (token, expires_at) = issue_admin_token(SECRET, 2).unwrap();
        let session = validate_token(&token, SECRET).unwrap();

        assert!(session.is_admin());
        assert_eq!(session.expires_at.map(|e| e.timestamp()), Some(expires_at.timestamp()));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let (token, _) = issue_admin_token(SECRET, 2).unwrap();
        assert_eq!(
            validate_token(&token, "other-secret").unwrap_err(),
            "Invalid token signature"
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let (token, _) = issue_admin_token(SECRET, -1).unwrap();
        assert_eq!(validate_token(&token, SECRET).unwrap_err(), "Token expired");
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert_eq!(
            validate_token("not-a-token", SECRET).unwrap_err(),
            "Invalid token format"
        );
        assert!(issue_admin_token("", 1).is_err());
    }
}
