//! Engine configuration
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | BOOKING_SERVICE_URL | http://localhost:3000 | 预订服务地址 |
//! | VENUE_TIMEZONE | Europe/Madrid | 场馆营业时区 |
//! | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
//! | TICK_INTERVAL_MS | 1000 | 剩余时间刷新间隔(毫秒) |

use chrono_tz::Tz;
use std::time::Duration;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the external booking service
    pub booking_service_url: String,
    /// Venue business timezone, used to interpret legacy clock-time
    /// window fields
    pub timezone: Tz,
    /// Request timeout for the submission collaborator (milliseconds)
    pub request_timeout_ms: u64,
    /// Remaining-time refresh interval (milliseconds)
    pub tick_interval_ms: u64,
}

impl EngineConfig {
    /// Load configuration from environment variables, using defaults for
    /// anything unset. An unparsable timezone falls back to the default
    /// with a warning rather than failing startup.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let timezone = std::env::var("VENUE_TIMEZONE")
            .ok()
            .and_then(|raw| {
                raw.parse::<Tz>()
                    .map_err(|e| {
                        tracing::warn!("Invalid VENUE_TIMEZONE '{}': {}, using default", raw, e);
                    })
                    .ok()
            })
            .unwrap_or(chrono_tz::Europe::Madrid);

        Self {
            booking_service_url: std::env::var("BOOKING_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            timezone,
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
            tick_interval_ms: std::env::var("TICK_INTERVAL_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1_000),
        }
    }

    /// The tick interval as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            booking_service_url: "http://localhost:3000".into(),
            timezone: chrono_tz::Europe::Madrid,
            request_timeout_ms: 30_000,
            tick_interval_ms: 1_000,
        }
    }
}
