//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 저장소 경로, 회원가입 기본값, Rate Limiting 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 잘못된 값은 기본값으로 대체하고 로그를 남깁니다.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 숫자형 환경 변수를 읽습니다. 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 사용", name, e);
            default
        }),
        Err(_) => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        parse_env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 요청 본문 최대 크기 (바이트)
    ///
    /// - `MAX_BODY_BYTES`: 기본값 65536
    pub fn max_body_bytes() -> usize {
        parse_env_or("MAX_BODY_BYTES", Self::DEFAULT_MAX_BODY_BYTES)
    }
}

/// 사용자 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// JSON 저장소 파일 경로
    ///
    /// - `USERS_FILE`: 기본값 `users.json` (작업 디렉터리 기준)
    pub fn users_file() -> PathBuf {
        env::var("USERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("users.json"))
    }
}

/// 회원가입 기본값 설정
pub struct RegistrationConfig;

impl RegistrationConfig {
    /// 프로필 이미지 기본 URL
    pub const DEFAULT_IMAGE_URL: &'static str = "https://example.com/default-image.jpg";

    /// 신규 사용자에게 부여할 프로필 이미지 URL
    ///
    /// - `DEFAULT_IMAGE_URL`: 비어 있으면 상수 기본값 사용
    pub fn default_image_url() -> String {
        env::var("DEFAULT_IMAGE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_IMAGE_URL.to_string())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        Self {
            per_second: parse_env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_parse_env_or_falls_back_on_missing_variable() {
        assert_eq!(parse_env_or::<u16>("USER_REGISTRATION_TEST_UNSET_VARIABLE", 42), 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("MAX_BODY_BYTES").is_err() {
            assert_eq!(ServerConfig::max_body_bytes(), 65536);
        }
    }

    #[test]
    fn test_storage_and_registration_defaults() {
        if env::var("USERS_FILE").is_err() {
            assert_eq!(StorageConfig::users_file(), PathBuf::from("users.json"));
        }

        if env::var("DEFAULT_IMAGE_URL").is_err() {
            assert_eq!(
                RegistrationConfig::default_image_url(),
                "https://example.com/default-image.jpg"
            );
        }
    }
}
