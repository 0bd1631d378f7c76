//! # Token Configuration
//!
//! 발급되는 모든 토큰에 들어가는 정적 메타데이터(issuer, audience, 유효 기간)를 관리합니다.
//! 시작 시 외부 설정에서 한 번 읽고, 이후에는 읽기 전용입니다.

use std::env;
use chrono::TimeDelta;
use crate::errors::errors::{AppError, AppResult};

/// 토큰 클레임 메타데이터
///
/// `iss`, `aud` 클레임과 `exp` 계산에 사용되는 유효 기간(초)을 보관합니다.
/// 인증 게이트는 검증 시 이 값과 토큰의 클레임을 그대로 비교합니다.
///
/// ## 필수 키
///
/// | 환경 변수 | 의미 |
/// |-----------|------|
/// | `TOKEN_CONFIGURATIONS_ISSUER` | 토큰 발급자 |
/// | `TOKEN_CONFIGURATIONS_AUDIENCE` | 토큰 대상 |
/// | `TOKEN_CONFIGURATIONS_SECONDS` | 유효 기간 (양의 정수, 초) |
///
/// 어느 하나라도 없거나 잘못되면 [`AppError::ConfigurationFault`]를 반환하며,
/// 호출자(`main`)는 프로세스 시작을 중단해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfiguration {
    issuer: String,
    audience: String,
    seconds: i64,
    validity: TimeDelta,
}

/// 허용하는 최대 유효 기간 (10년, 초)
pub const MAX_TOKEN_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

impl TokenConfiguration {
    pub const ISSUER_KEY: &'static str = "TOKEN_CONFIGURATIONS_ISSUER";
    pub const AUDIENCE_KEY: &'static str = "TOKEN_CONFIGURATIONS_AUDIENCE";
    pub const SECONDS_KEY: &'static str = "TOKEN_CONFIGURATIONS_SECONDS";

    /// 값을 직접 지정하여 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationFault` - issuer/audience가 비어 있거나 seconds가 0 이하,
    ///   또는 [`MAX_TOKEN_SECONDS`]를 넘는 경우
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>, seconds: i64) -> AppResult<Self> {
        let issuer = issuer.into();
        let audience = audience.into();

        if issuer.trim().is_empty() {
            return Err(AppError::ConfigurationFault(format!("{} 값이 비어 있습니다", Self::ISSUER_KEY)));
        }
        if audience.trim().is_empty() {
            return Err(AppError::ConfigurationFault(format!("{} 값이 비어 있습니다", Self::AUDIENCE_KEY)));
        }
        if seconds <= 0 {
            return Err(AppError::ConfigurationFault(format!(
                "{} 값은 양수여야 합니다: {}",
                Self::SECONDS_KEY,
                seconds
            )));
        }
        if seconds > MAX_TOKEN_SECONDS {
            return Err(AppError::ConfigurationFault(format!(
                "{} 값은 {} 이하여야 합니다: {}",
                Self::SECONDS_KEY,
                MAX_TOKEN_SECONDS,
                seconds
            )));
        }

        let validity = TimeDelta::try_seconds(seconds).ok_or_else(|| {
            AppError::ConfigurationFault(format!("{} 값을 기간으로 표현할 수 없습니다: {}", Self::SECONDS_KEY, seconds))
        })?;

        Ok(Self { issuer, audience, seconds, validity })
    }

    /// 프로세스 환경 변수에서 읽어옵니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정을 구성합니다.
    ///
    /// 환경 변수를 건드리지 않고 테스트할 수 있도록 조회 방식을 주입받습니다.
    ///
    /// ```rust,ignore
    /// let config = TokenConfiguration::from_lookup(|key| match key {
    ///     "TOKEN_CONFIGURATIONS_ISSUER" => Some("issuer".into()),
    ///     "TOKEN_CONFIGURATIONS_AUDIENCE" => Some("audience".into()),
    ///     "TOKEN_CONFIGURATIONS_SECONDS" => Some("3600".into()),
    ///     _ => None,
    /// })?;
    /// ```
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::ConfigurationFault(format!("{} 값이 설정되지 않았습니다", key)))
        };

        let issuer = required(Self::ISSUER_KEY)?;
        let audience = required(Self::AUDIENCE_KEY)?;
        let seconds = required(Self::SECONDS_KEY)?
            .trim()
            .parse::<i64>()
            .map_err(|e| AppError::ConfigurationFault(format!("{} 파싱 실패: {}", Self::SECONDS_KEY, e)))?;

        Self::new(issuer, audience, seconds)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// 토큰 유효 기간
    pub fn validity(&self) -> TimeDelta {
        self.validity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_loads_all_required_keys() {
        let config = TokenConfiguration::from_lookup(lookup_from(&[
            (TokenConfiguration::ISSUER_KEY, "ExemploIssuer"),
            (TokenConfiguration::AUDIENCE_KEY, "ExemploAudience"),
            (TokenConfiguration::SECONDS_KEY, "28800"),
        ]))
        .unwrap();

        assert_eq!(config.issuer(), "ExemploIssuer");
        assert_eq!(config.audience(), "ExemploAudience");
        assert_eq!(config.seconds(), 28800);
        assert_eq!(config.validity(), TimeDelta::hours(8));
    }

    #[test]
    fn test_missing_issuer_is_fatal() {
        let result = TokenConfiguration::from_lookup(lookup_from(&[
            (TokenConfiguration::AUDIENCE_KEY, "ExemploAudience"),
            (TokenConfiguration::SECONDS_KEY, "60"),
        ]));

        match result {
            Err(AppError::ConfigurationFault(msg)) => assert!(msg.contains(TokenConfiguration::ISSUER_KEY)),
            other => panic!("Expected ConfigurationFault, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_audience_is_fatal() {
        let result = TokenConfiguration::from_lookup(lookup_from(&[
            (TokenConfiguration::ISSUER_KEY, "ExemploIssuer"),
            (TokenConfiguration::SECONDS_KEY, "60"),
        ]));

        assert!(matches!(result, Err(AppError::ConfigurationFault(_))));
    }

    #[test]
    fn test_invalid_seconds_are_rejected() {
        for seconds in ["abc", "0", "-5"] {
            let result = TokenConfiguration::from_lookup(lookup_from(&[
                (TokenConfiguration::ISSUER_KEY, "i"),
                (TokenConfiguration::AUDIENCE_KEY, "a"),
                (TokenConfiguration::SECONDS_KEY, seconds),
            ]));
            assert!(matches!(result, Err(AppError::ConfigurationFault(_))), "seconds={}", seconds);
        }
    }

    #[test]
    fn test_oversized_seconds_are_rejected_at_startup() {
        assert!(TokenConfiguration::new("i", "a", MAX_TOKEN_SECONDS).is_ok());

        for seconds in [MAX_TOKEN_SECONDS + 1, 10_000_000_000_000, i64::MAX] {
            let result = TokenConfiguration::new("i", "a", seconds);
            assert!(matches!(result, Err(AppError::ConfigurationFault(_))), "seconds={}", seconds);
        }
    }

    #[test]
    fn test_missing_key_message_names_the_key() {
        match TokenConfiguration::from_lookup(|_| None) {
            Err(AppError::ConfigurationFault(msg)) => {
                assert_eq!(msg, format!("{} 값이 설정되지 않았습니다", TokenConfiguration::ISSUER_KEY));
            }
            other => panic!("Expected ConfigurationFault, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_values_do_not_silently_default() {
        assert!(TokenConfiguration::new("  ", "aud", 60).is_err());
        assert!(TokenConfiguration::new("iss", "", 60).is_err());
    }
}
