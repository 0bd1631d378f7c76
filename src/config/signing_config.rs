//! # Signing Configuration
//!
//! 토큰 서명과 검증에 사용하는 키 재료를 보관합니다.
//!
//! 키는 프로세스 시작 시 한 번만 결정되며 프로세스 수명 동안 교체되지 않습니다.
//! 따라서 같은 프로세스가 발급한 모든 토큰은 같은 키로 검증됩니다.
//!
//! ## 키 소스 결정 순서
//!
//! 1. `JWT_PRIVATE_KEY_PATH` - PKCS#1 PEM RSA 개인키 파일 → RS256
//! 2. `JWT_SECRET` - 32바이트 이상 HMAC 비밀키 → HS256
//! 3. 둘 다 없으면 메모리에서 2048비트 RSA 키 생성 → RS256 (디스크에 저장하지 않음)
//!
//! # RSA 키 생성
//!
//! ```bash
//! # 개인키 생성
//! openssl genrsa -traditional -out jwt_private_key.pem 2048
//! ```

use std::{env, fmt, fs};
use base64::{Engine as _, engine::general_purpose};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use rsa::RsaPrivateKey;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::EncodePublicKey;
use sha2::{Digest, Sha256};
use crate::errors::errors::{AppError, AppResult};

/// HMAC 비밀키 최소 길이 (바이트)
pub const MIN_SECRET_LEN: usize = 32;

/// RSA 키 생성 비트 수
pub const RSA_KEY_BITS: usize = 2048;

/// 서명/검증 키 묶음
///
/// 인증 게이트가 소유하며 생성 이후 불변입니다.
/// `Clone`은 키를 복사할 뿐 새 키를 만들지 않습니다.
#[derive(Clone)]
pub struct SigningConfiguration {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    key_id: Option<String>,
}

impl SigningConfiguration {
    /// 환경 변수를 보고 키 소스를 결정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationFault` - 키 파일을 읽거나 파싱할 수 없는 경우, 비밀키가 너무 짧은 경우
    pub fn from_env() -> AppResult<Self> {
        if let Ok(path) = env::var("JWT_PRIVATE_KEY_PATH") {
            log::info!("🔑 RSA 서명 키 로드: {}", path);
            let pem = fs::read_to_string(&path).map_err(|e| {
                AppError::ConfigurationFault(format!("개인키 파일 '{}' 읽기 실패: {}", path, e))
            })?;
            let private_key = RsaPrivateKey::from_pkcs1_pem(&pem).map_err(|e| {
                AppError::ConfigurationFault(format!("개인키 파일 '{}' 파싱 실패: {}", path, e))
            })?;
            return Self::from_rsa(private_key);
        }

        if let Ok(secret) = env::var("JWT_SECRET") {
            log::info!("🔑 HMAC 서명 키 사용 (JWT_SECRET)");
            return Self::from_secret(secret.as_bytes());
        }

        log::info!("🔑 서명 키 소스가 없어 RSA 키를 메모리에 생성합니다");
        Self::generate()
    }

    /// 새 RSA 키 쌍을 생성합니다. 프로세스당 한 번만 호출되어야 합니다.
    pub fn generate() -> AppResult<Self> {
        let private_key = RsaPrivateKey::new(&mut rsa::rand_core::OsRng, RSA_KEY_BITS)
            .map_err(|e| AppError::ConfigurationFault(format!("RSA 키 생성 실패: {}", e)))?;
        Self::from_rsa(private_key)
    }

    /// RSA 개인키로부터 RS256 서명 설정을 만듭니다.
    ///
    /// 키 ID(`kid`)는 공개키 DER의 SHA-256 다이제스트를 base64url로 인코딩한 값입니다.
    pub fn from_rsa(private_key: RsaPrivateKey) -> AppResult<Self> {
        let public_key = private_key.to_public_key();

        let private_pem = private_key
            .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
            .map_err(|e| AppError::ConfigurationFault(format!("개인키 PEM 변환 실패: {}", e)))?;
        let public_pem = public_key
            .to_public_key_pem(rsa::pkcs8::LineEnding::LF)
            .map_err(|e| AppError::ConfigurationFault(format!("공개키 PEM 변환 실패: {}", e)))?;
        let public_der = public_key
            .to_public_key_der()
            .map_err(|e| AppError::ConfigurationFault(format!("공개키 DER 변환 실패: {}", e)))?;

        let encoding_key = EncodingKey::from_rsa_pem(private_pem.as_bytes())
            .map_err(|e| AppError::ConfigurationFault(format!("서명 키 생성 실패: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_pem.as_bytes())
            .map_err(|e| AppError::ConfigurationFault(format!("검증 키 생성 실패: {}", e)))?;

        let digest = Sha256::digest(public_der.as_bytes());
        let key_id = general_purpose::URL_SAFE_NO_PAD.encode(digest);

        Ok(Self {
            algorithm: Algorithm::RS256,
            encoding_key,
            decoding_key,
            key_id: Some(key_id),
        })
    }

    /// HMAC 비밀키로부터 HS256 서명 설정을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationFault` - 비밀키가 [`MIN_SECRET_LEN`]보다 짧은 경우
    pub fn from_secret(secret: &[u8]) -> AppResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::ConfigurationFault(format!(
                "JWT_SECRET은 최소 {}바이트여야 합니다 (현재 {}바이트)",
                MIN_SECRET_LEN,
                secret.len()
            )));
        }

        Ok(Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            key_id: None,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}

// 키 재료는 로그에 남기지 않는다
impl fmt::Debug for SigningConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfiguration")
            .field("algorithm", &self.algorithm)
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_is_a_configuration_fault() {
        let result = SigningConfiguration::from_secret(b"too-short");
        assert!(matches!(result, Err(AppError::ConfigurationFault(_))));
    }

    #[test]
    fn test_secret_uses_hs256_without_key_id() {
        let config = SigningConfiguration::from_secret(&[7u8; 32]).unwrap();
        assert_eq!(config.algorithm(), Algorithm::HS256);
        assert!(config.key_id().is_none());
    }

    #[test]
    fn test_debug_output_hides_key_material() {
        let config = SigningConfiguration::from_secret(b"0123456789abcdef0123456789abcdef").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("HS256"));
        assert!(!debug.contains("0123456789abcdef"));
    }
}
