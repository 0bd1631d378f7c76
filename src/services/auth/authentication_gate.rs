//! Bearer 토큰 인증 게이트
//!
//! 토큰 발급과 검증을 한곳에서 담당합니다. 서명 키([`SigningConfiguration`])와
//! 발급자/대상/유효 기간([`TokenConfiguration`])은 시작 시 한 번 주입되고 이후 변하지 않습니다.
//!
//! ## 검증 단계
//!
//! ```text
//! Unauthenticated ── 헤더 없음/형식 오류 ──▶ 거부
//!       │
//! TokenPresent ───── 서명 불일치 ─────────▶ 거부
//!       │
//! SignatureValid ─── iss/aud 불일치 ──────▶ 거부
//!       │
//! ClaimsValid ────── exp 지남 / nbf 이전 ──▶ 거부 (허용 오차 0초)
//!       │
//! Authenticated ──▶ AuthenticatedUser
//! ```
//!
//! 거부 사유는 내부적으로 구분해 `warn` 로그로 남기고, 밖으로는 모두 401입니다.

use std::fmt;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Header, Validation, decode, encode};
use log::{debug, warn};
use uuid::Uuid;
use crate::config::{SigningConfiguration, TokenConfiguration};
use crate::domain::models::auth::{AuthenticatedUser, AuthorizationPolicy};
use crate::domain::models::token::{IssuedToken, TokenClaims};
use crate::errors::{AppError, AppResult, ErrorContext};

/// 토큰 거부 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingToken,
    MalformedToken,
    InvalidSignature,
    InvalidIssuer,
    InvalidAudience,
    Expired,
    NotYetValid,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::MissingToken => "인증 토큰이 없습니다",
            RejectReason::MalformedToken => "토큰 형식이 올바르지 않습니다",
            RejectReason::InvalidSignature => "토큰 서명이 유효하지 않습니다",
            RejectReason::InvalidIssuer => "토큰 발급자가 일치하지 않습니다",
            RejectReason::InvalidAudience => "토큰 대상이 일치하지 않습니다",
            RejectReason::Expired => "토큰이 만료되었습니다",
            RejectReason::NotYetValid => "아직 유효하지 않은 토큰입니다",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<RejectReason> for AppError {
    fn from(reason: RejectReason) -> Self {
        AppError::AuthenticationError(reason.message().to_string())
    }
}

fn reason_from(error: &jsonwebtoken::errors::Error) -> RejectReason {
    match error.kind() {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::InvalidKeyFormat
        | ErrorKind::InvalidRsaKey(_)
        | ErrorKind::InvalidEcdsaKey => RejectReason::InvalidSignature,
        ErrorKind::InvalidIssuer => RejectReason::InvalidIssuer,
        ErrorKind::InvalidAudience => RejectReason::InvalidAudience,
        ErrorKind::ExpiredSignature => RejectReason::Expired,
        ErrorKind::ImmatureSignature => RejectReason::NotYetValid,
        _ => RejectReason::MalformedToken,
    }
}

/// 토큰 발급/검증 게이트
///
/// 보호된 라우트는 모두 [`AuthenticationGate::authenticate`]를 통과해야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let gate = AuthenticationGate::new(signing, token_config);
/// let issued = gate.issue(&user_id.to_string(), "ana@x.com")?;
///
/// let header = format!("Bearer {}", issued.access_token);
/// let user = gate.authenticate(Some(&header))?;
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticationGate {
    signing: SigningConfiguration,
    token: TokenConfiguration,
    policy: AuthorizationPolicy,
}

impl AuthenticationGate {
    pub fn new(signing: SigningConfiguration, token: TokenConfiguration) -> Self {
        Self {
            signing,
            token,
            policy: AuthorizationPolicy::BEARER,
        }
    }

    pub fn policy(&self) -> AuthorizationPolicy {
        self.policy
    }

    pub fn token_configuration(&self) -> &TokenConfiguration {
        &self.token
    }

    /// 현재 시각 기준으로 토큰을 발급합니다.
    pub fn issue(&self, subject: &str, login: &str) -> AppResult<IssuedToken> {
        self.issue_at(subject, login, Utc::now())
    }

    /// `now`를 발급 시각으로 토큰을 발급합니다.
    ///
    /// `nbf`와 `iat`는 발급 시각, `exp`는 발급 시각 + 설정된 유효 기간입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 만료 시각 계산 불가 또는 서명 실패
    pub fn issue_at(&self, subject: &str, login: &str, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        let created = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        let expiration = created.checked_add_signed(self.token.validity()).ok_or_else(|| {
            AppError::InternalError(format!("토큰 만료 시각을 계산할 수 없습니다: {}", created))
        })?;

        let claims = TokenClaims {
            sub: subject.to_string(),
            unique_name: login.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.token.issuer().to_string(),
            aud: self.token.audience().to_string(),
            iat: created.timestamp(),
            nbf: created.timestamp(),
            exp: expiration.timestamp(),
        };

        let mut header = Header::new(self.signing.algorithm());
        header.kid = self.signing.key_id().map(str::to_string);

        let access_token = encode(&header, &claims, self.signing.encoding_key())
            .context("JWT 토큰 생성 실패")?;

        debug!("토큰 발급: sub={}, jti={}", claims.sub, claims.jti);

        Ok(IssuedToken {
            access_token,
            created,
            expiration,
            claims,
        })
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 꺼냅니다.
    ///
    /// 스킴 이름은 대소문자를 구분하지 않고, 스킴과 토큰 사이에는 공백이나 탭이 올 수 있습니다.
    /// 다른 스킴의 헤더는 토큰이 없는 것으로 봅니다.
    pub fn extract_bearer_token<'a>(&self, authorization: Option<&'a str>) -> Result<&'a str, RejectReason> {
        let header = authorization.map(str::trim).ok_or(RejectReason::MissingToken)?;

        let (scheme, token) = header
            .split_once(|c: char| c.is_ascii_whitespace())
            .unwrap_or((header, ""));
        if !scheme.eq_ignore_ascii_case(self.policy.scheme()) {
            return Err(RejectReason::MissingToken);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(RejectReason::MalformedToken);
        }

        Ok(token)
    }

    /// 토큰을 현재 시각 기준으로 검증합니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, RejectReason> {
        self.verify_at(token, Utc::now())
    }

    /// 토큰을 `now` 기준으로 검증합니다.
    ///
    /// 서명, 발급자, 대상은 `jsonwebtoken`이 확인하고,
    /// 만료와 활성 시각은 허용 오차 없이 직접 비교합니다.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, RejectReason> {
        let mut validation = Validation::new(self.signing.algorithm());
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.set_issuer(&[self.token.issuer()]);
        validation.set_audience(&[self.token.audience()]);

        let claims = decode::<TokenClaims>(token, self.signing.decoding_key(), &validation)
            .map(|data| data.claims)
            .map_err(|e| reason_from(&e))?;

        let now = now.timestamp();
        if claims.exp < now {
            return Err(RejectReason::Expired);
        }
        if claims.nbf > now {
            return Err(RejectReason::NotYetValid);
        }

        Ok(claims)
    }

    /// `Authorization` 헤더 값을 검증해 인증된 사용자를 돌려줍니다.
    ///
    /// 거부 사유는 `warn`으로 기록되고 `AppError::AuthenticationError`로 변환됩니다.
    pub fn authenticate(&self, authorization: Option<&str>) -> AppResult<AuthenticatedUser> {
        let result = self
            .extract_bearer_token(authorization)
            .and_then(|token| self.verify(token));

        match result {
            Ok(claims) => Ok(AuthenticatedUser::from(claims)),
            Err(reason) => {
                warn!("인증 거부 ({:?}): {}", reason, reason);
                Err(reason.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use once_cell::sync::Lazy;

    static RSA_SIGNING: Lazy<SigningConfiguration> =
        Lazy::new(|| SigningConfiguration::generate().unwrap());

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";
    const OTHER_SECRET: &[u8] = b"fedcba9876543210fedcba9876543210";

    fn token_config(issuer: &str, audience: &str) -> TokenConfiguration {
        TokenConfiguration::new(issuer, audience, 60).unwrap()
    }

    fn gate() -> AuthenticationGate {
        AuthenticationGate::new(
            SigningConfiguration::from_secret(SECRET).unwrap(),
            token_config("ExemploIssuer", "ExemploAudience"),
        )
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn test_issue_then_authenticate() {
        let gate = gate();
        let issued = gate.issue("U1", "a@b.com").unwrap();

        let user = gate.authenticate(Some(&bearer(&issued.access_token))).unwrap();
        assert_eq!(user.user_id, "U1");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.token_id, issued.claims.jti);
    }

    #[test]
    fn test_rsa_signed_token_round_trip_carries_key_id() {
        let gate = AuthenticationGate::new(
            RSA_SIGNING.clone(),
            token_config("ExemploIssuer", "ExemploAudience"),
        );
        let issued = gate.issue("U1", "a@b.com").unwrap();

        let header = jsonwebtoken::decode_header(&issued.access_token).unwrap();
        assert_eq!(header.alg, jsonwebtoken::Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), RSA_SIGNING.key_id());

        let claims = gate.verify(&issued.access_token).unwrap();
        assert_eq!(claims.sub, "U1");
    }

    #[test]
    fn test_claims_window_matches_configuration() {
        let gate = gate();
        let issued = gate.issue("U1", "a@b.com").unwrap();

        assert_eq!(issued.claims.exp - issued.claims.nbf, 60);
        assert_eq!(issued.claims.iat, issued.claims.nbf);
        assert_eq!(issued.claims.iss, "ExemploIssuer");
        assert_eq!(issued.claims.aud, "ExemploAudience");
        assert_eq!(issued.expiration - issued.created, Duration::seconds(60));
    }

    #[test]
    fn test_expiration_overflow_is_an_error_not_a_panic() {
        let gate = gate();

        match gate.issue_at("U1", "a@b.com", DateTime::<Utc>::MAX_UTC) {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("만료 시각")),
            other => panic!("Expected InternalError, got {:?}", other.map(|t| t.claims)),
        }
    }

    #[test]
    fn test_longest_allowed_lifetime_still_issues() {
        let gate = AuthenticationGate::new(
            SigningConfiguration::from_secret(SECRET).unwrap(),
            TokenConfiguration::new("ExemploIssuer", "ExemploAudience", crate::config::MAX_TOKEN_SECONDS).unwrap(),
        );

        let issued = gate.issue("U1", "a@b.com").unwrap();
        assert_eq!(issued.claims.exp - issued.claims.iat, crate::config::MAX_TOKEN_SECONDS);
        assert!(gate.verify(&issued.access_token).is_ok());
    }

    #[test]
    fn test_token_expired_by_one_second_is_rejected() {
        let gate = gate();
        let issued_at = Utc::now() - Duration::seconds(61);
        let issued = gate.issue_at("U1", "a@b.com", issued_at).unwrap();

        assert_eq!(gate.verify(&issued.access_token), Err(RejectReason::Expired));
    }

    #[test]
    fn test_token_is_valid_until_its_expiration_second() {
        let gate = gate();
        let issued = gate.issue("U1", "a@b.com").unwrap();

        assert!(gate.verify_at(&issued.access_token, issued.expiration).is_ok());
        assert_eq!(
            gate.verify_at(&issued.access_token, issued.expiration + Duration::seconds(1)),
            Err(RejectReason::Expired)
        );
    }

    #[test]
    fn test_token_not_yet_valid_is_rejected() {
        let gate = gate();
        let issued = gate.issue_at("U1", "a@b.com", Utc::now() + Duration::seconds(30)).unwrap();

        assert_eq!(gate.verify(&issued.access_token), Err(RejectReason::NotYetValid));
    }

    #[test]
    fn test_token_signed_with_foreign_key_is_rejected() {
        let foreign = AuthenticationGate::new(
            SigningConfiguration::from_secret(OTHER_SECRET).unwrap(),
            token_config("ExemploIssuer", "ExemploAudience"),
        );
        let issued = foreign.issue("U1", "a@b.com").unwrap();

        assert_eq!(gate().verify(&issued.access_token), Err(RejectReason::InvalidSignature));
    }

    #[test]
    fn test_token_with_foreign_algorithm_is_rejected() {
        let rsa_gate = AuthenticationGate::new(
            RSA_SIGNING.clone(),
            token_config("ExemploIssuer", "ExemploAudience"),
        );
        let issued = rsa_gate.issue("U1", "a@b.com").unwrap();

        assert_eq!(gate().verify(&issued.access_token), Err(RejectReason::InvalidSignature));
    }

    #[test]
    fn test_issuer_and_audience_mismatch_are_rejected() {
        let signing = SigningConfiguration::from_secret(SECRET).unwrap();
        let other_issuer = AuthenticationGate::new(signing.clone(), token_config("Other", "ExemploAudience"));
        let other_audience = AuthenticationGate::new(signing, token_config("ExemploIssuer", "Other"));

        let by_other_issuer = other_issuer.issue("U1", "a@b.com").unwrap();
        let for_other_audience = other_audience.issue("U1", "a@b.com").unwrap();

        assert_eq!(gate().verify(&by_other_issuer.access_token), Err(RejectReason::InvalidIssuer));
        assert_eq!(gate().verify(&for_other_audience.access_token), Err(RejectReason::InvalidAudience));
    }

    #[test]
    fn test_missing_and_malformed_headers() {
        let gate = gate();

        assert_eq!(gate.extract_bearer_token(None), Err(RejectReason::MissingToken));
        assert_eq!(gate.extract_bearer_token(Some("Basic abc")), Err(RejectReason::MissingToken));
        assert_eq!(gate.extract_bearer_token(Some("Bearer ")), Err(RejectReason::MalformedToken));
        assert_eq!(gate.extract_bearer_token(Some("bearer abc")), Ok("abc"));
        assert_eq!(gate.extract_bearer_token(Some("Bearer\tabc")), Ok("abc"));
        assert_eq!(gate.extract_bearer_token(Some("Bearer \t abc")), Ok("abc"));
        assert_eq!(gate.extract_bearer_token(Some("Bearer\t")), Err(RejectReason::MalformedToken));
        assert_eq!(gate.verify("not.a.jwt"), Err(RejectReason::MalformedToken));
    }

    #[test]
    fn test_rejection_becomes_authentication_error() {
        let result = gate().authenticate(Some("Bearer garbage"));
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
