//! Time window tracking
//!
//! Derives a live remaining-time countdown from the absolute validity
//! window of a physical barcode/band. Remaining time is recomputed from
//! absolute instants on every tick, never decremented from a running
//! counter, so the display cannot drift.

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::BarcodeRecord;
use shared::util;
use std::fmt;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Remaining time until a window's end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// Seconds left (always > 0)
    Running(i64),
    /// Terminal — the window end has passed
    Expired,
}

impl Remaining {
    pub fn is_expired(&self) -> bool {
        matches!(self, Remaining::Expired)
    }
}

impl fmt::Display for Remaining {
    /// HH:MM:SS display; `Expired` shows `00:00:00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = match self {
            Remaining::Running(secs) => *secs,
            Remaining::Expired => 0,
        };
        write!(f, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

/// Absolute validity interval for one barcode/band.
///
/// Always stored as absolute Unix millis; the legacy hour/minute wire
/// form is converted once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_millis: i64,
    pub end_millis: i64,
}

impl TimeWindow {
    /// Window from explicit absolute instants
    pub fn from_instants(start_millis: i64, end_millis: i64) -> Self {
        Self {
            start_millis,
            end_millis,
        }
    }

    /// Window from a start instant and a duration in minutes
    pub fn from_start_duration(start_millis: i64, duration_minutes: i64) -> Self {
        Self {
            start_millis,
            end_millis: start_millis + duration_minutes * 60_000,
        }
    }

    /// Window from legacy clock times interpreted against `date` in the
    /// venue timezone.
    ///
    /// When end < start the window is computed naively, without day
    /// rollover — it is already expired by the time it is evaluated.
    /// Malformed components yield an expired window instead of an error,
    /// so the tick loop never crashes on bad barcode data.
    pub fn from_clock_times(
        date: NaiveDate,
        start_hour: u32,
        start_min: u32,
        end_hour: u32,
        end_min: u32,
        tz: Tz,
    ) -> Self {
        let start = clock_to_millis(date, start_hour, start_min, tz);
        let end = clock_to_millis(date, end_hour, end_min, tz);
        match (start, end) {
            (Some(start_millis), Some(end_millis)) => Self {
                start_millis,
                end_millis,
            },
            _ => {
                tracing::warn!(
                    start_hour,
                    start_min,
                    end_hour,
                    end_min,
                    "Malformed clock times, treating window as expired"
                );
                Self {
                    start_millis: 0,
                    end_millis: 0,
                }
            }
        }
    }

    /// Window from a barcode record: clock times against its creation
    /// date, extended by any purchased extra minutes.
    pub fn from_barcode(record: &BarcodeRecord, tz: Tz) -> Self {
        let date = match NaiveDate::parse_from_str(&record.created_date, "%Y-%m-%d") {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(
                    barcode = %record.barcode,
                    created_date = %record.created_date,
                    "Invalid barcode creation date: {}, treating window as expired",
                    e
                );
                return Self {
                    start_millis: 0,
                    end_millis: 0,
                };
            }
        };
        Self::from_clock_times(
            date,
            record.start_hour,
            record.start_min,
            record.end_hour,
            record.end_min,
            tz,
        )
        .with_extra_minutes(record.extra_minutes)
    }

    /// Extend the window end (extra time purchased after creation)
    pub fn with_extra_minutes(self, minutes: i64) -> Self {
        Self {
            end_millis: self.end_millis + minutes * 60_000,
            ..self
        }
    }

    /// Remaining time at an absolute instant — pure, recomputed from the
    /// window bounds every call.
    pub fn remaining_at(&self, now_millis: i64) -> Remaining {
        let remaining_ms = self.end_millis - now_millis;
        if remaining_ms <= 0 {
            Remaining::Expired
        } else {
            // Round up so a window with time left never displays 00:00:00
            Remaining::Running((remaining_ms + 999) / 1000)
        }
    }
}

/// Clock time on `date` in the venue timezone → Unix millis.
///
/// DST gap fallback: if the local time does not exist, fall back to UTC.
fn clock_to_millis(date: NaiveDate, hour: u32, min: u32, tz: Tz) -> Option<i64> {
    let naive = date.and_hms_opt(hour, min, 0)?;
    Some(
        naive
            .and_local_timezone(tz)
            .latest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| naive.and_utc().timestamp_millis()),
    )
}

// ============================================================================
// TimeWindowTracker
// ============================================================================

/// Ticks a remaining-time display once per second for one view session.
///
/// At most one live tick per tracker: re-parameterizing via [`track`]
/// cancels the previous tick before starting from the new inputs, and
/// dropping the tracker (the owning view session ending) cancels the tick
/// outright.
///
/// [`track`]: TimeWindowTracker::track
pub struct TimeWindowTracker {
    tick_every: Duration,
    shutdown: CancellationToken,
    live: Option<CancellationToken>,
    tx: watch::Sender<Remaining>,
}

impl TimeWindowTracker {
    /// Create a tracker and the receiver the view observes.
    ///
    /// `shutdown` is the owning session's token; cancelling it tears the
    /// tick down along with everything else in the session.
    pub fn new(
        tick_every: Duration,
        shutdown: CancellationToken,
    ) -> (Self, watch::Receiver<Remaining>) {
        let (tx, rx) = watch::channel(Remaining::Expired);
        (
            Self {
                tick_every,
                shutdown,
                live: None,
                tx,
            },
            rx,
        )
    }

    /// Additional receiver for the current display value
    pub fn subscribe(&self) -> watch::Receiver<Remaining> {
        self.tx.subscribe()
    }

    /// Start (or restart) ticking against a window.
    ///
    /// Any previous tick is cancelled first; computation restarts from
    /// the new inputs.
    pub fn track(&mut self, window: TimeWindow) {
        self.stop();

        let cancel = self.shutdown.child_token();
        self.live = Some(cancel.clone());
        let tx = self.tx.clone();
        let tick_every = self.tick_every;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_every);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let remaining = window.remaining_at(util::now_millis());
                        let _ = tx.send(remaining);
                        if remaining.is_expired() {
                            // Terminal state, nothing left to tick
                            break;
                        }
                    }
                    _ = cancel.cancelled() => break,
                }
            }
        });
    }

    /// Cancel the live tick, if any
    pub fn stop(&mut self) {
        if let Some(live) = self.live.take() {
            live.cancel();
        }
    }
}

impl Drop for TimeWindowTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TZ: Tz = chrono_tz::Europe::Madrid;

    fn local_millis(date: NaiveDate, hour: u32, min: u32, sec: u32) -> i64 {
        TZ.from_local_datetime(&date.and_hms_opt(hour, min, sec).unwrap())
            .unwrap()
            .timestamp_millis()
    }

    // ====================================================================
    // Pure window arithmetic
    // ====================================================================

    #[test]
    fn test_remaining_from_start_duration() {
        // started 5 minutes ago, lasts 10 ⇒ ~5 minutes remaining
        let start = 1_750_000_000_000;
        let now = start + 5 * 60_000;
        let window = TimeWindow::from_start_duration(start, 10);

        assert_eq!(window.remaining_at(now), Remaining::Running(300));

        // 6 more minutes on ⇒ expired
        let later = now + 6 * 60_000;
        assert_eq!(window.remaining_at(later), Remaining::Expired);
    }

    #[test]
    fn test_remaining_recomputed_not_decremented() {
        let start = 1_750_000_000_000;
        let window = TimeWindow::from_start_duration(start, 10);
        // Evaluating out of order gives consistent answers — remaining is
        // a function of the instant, not of call history.
        assert_eq!(window.remaining_at(start + 9 * 60_000), Remaining::Running(60));
        assert_eq!(window.remaining_at(start + 60_000), Remaining::Running(540));
    }

    #[test]
    fn test_clock_window_at_quarter_past() {
        // 10:00 → 10:30 evaluated at 10:15 ⇒ 00:15:00
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let window = TimeWindow::from_clock_times(date, 10, 0, 10, 30, TZ);
        let at_1015 = local_millis(date, 10, 15, 0);

        let remaining = window.remaining_at(at_1015);
        assert_eq!(remaining, Remaining::Running(900));
        assert_eq!(remaining.to_string(), "00:15:00");
    }

    #[test]
    fn test_clock_window_no_day_rollover() {
        // end < start is computed naively: the window is already over
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let window = TimeWindow::from_clock_times(date, 23, 0, 1, 0, TZ);
        assert!(window.end_millis < window.start_millis);
        let at_2330 = local_millis(date, 23, 30, 0);
        assert_eq!(window.remaining_at(at_2330), Remaining::Expired);
    }

    #[test]
    fn test_malformed_clock_times_expire_instead_of_erroring() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let window = TimeWindow::from_clock_times(date, 99, 0, 10, 30, TZ);
        assert_eq!(window.remaining_at(util::now_millis()), Remaining::Expired);
    }

    #[test]
    fn test_barcode_window_with_extra_minutes() {
        let record = BarcodeRecord {
            barcode: "BC-001".to_string(),
            start_hour: 10,
            start_min: 0,
            end_hour: 11,
            end_min: 0,
            created_date: "2025-06-01".to_string(),
            extra_minutes: 30,
        };
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let window = TimeWindow::from_barcode(&record, TZ);
        // ends at 11:30, not 11:00
        assert_eq!(window.end_millis, local_millis(date, 11, 30, 0));
    }

    #[test]
    fn test_barcode_bad_date_expires() {
        let record = BarcodeRecord {
            barcode: "BC-002".to_string(),
            start_hour: 10,
            start_min: 0,
            end_hour: 11,
            end_min: 0,
            created_date: "not-a-date".to_string(),
            extra_minutes: 0,
        };
        let window = TimeWindow::from_barcode(&record, TZ);
        assert_eq!(window.remaining_at(util::now_millis()), Remaining::Expired);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Remaining::Running(3661).to_string(), "01:01:01");
        assert_eq!(Remaining::Running(59).to_string(), "00:00:59");
        assert_eq!(Remaining::Expired.to_string(), "00:00:00");
    }

    #[test]
    fn test_subsecond_remainder_rounds_up() {
        let window = TimeWindow::from_instants(0, 1_500);
        assert_eq!(window.remaining_at(1_000), Remaining::Running(1));
    }

    // ====================================================================
    // Tracker tick lifecycle
    // ====================================================================

    #[tokio::test]
    async fn test_tracker_publishes_then_expires() {
        let shutdown = CancellationToken::new();
        let (mut tracker, mut rx) =
            TimeWindowTracker::new(Duration::from_millis(10), shutdown.clone());

        let now = util::now_millis();
        tracker.track(TimeWindow::from_instants(now - 1_000, now + 100));

        let deadline = tokio::time::sleep(Duration::from_secs(2));
        tokio::pin!(deadline);
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    changed.unwrap();
                    if rx.borrow().is_expired() {
                        break;
                    }
                }
                _ = &mut deadline => panic!("tracker never reached EXPIRED"),
            }
        }
        assert_eq!(rx.borrow().to_string(), "00:00:00");
    }

    #[tokio::test]
    async fn test_retrack_restarts_from_new_inputs() {
        let shutdown = CancellationToken::new();
        let (mut tracker, mut rx) =
            TimeWindowTracker::new(Duration::from_millis(10), shutdown.clone());

        let now = util::now_millis();
        tracker.track(TimeWindow::from_start_duration(now, 60));
        rx.changed().await.unwrap();
        assert!(matches!(*rx.borrow(), Remaining::Running(secs) if secs > 3_000));

        // Re-parameterize with an already-expired window; the old tick is
        // cancelled and the new one publishes EXPIRED.
        tracker.track(TimeWindow::from_instants(now - 2_000, now - 1_000));
        let deadline = tokio::time::sleep(Duration::from_secs(2));
        tokio::pin!(deadline);
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    changed.unwrap();
                    if rx.borrow().is_expired() {
                        break;
                    }
                }
                _ = &mut deadline => panic!("retracked window never expired"),
            }
        }
    }

    #[tokio::test]
    async fn test_stop_silences_the_tick() {
        let shutdown = CancellationToken::new();
        let (mut tracker, mut rx) =
            TimeWindowTracker::new(Duration::from_millis(10), shutdown.clone());

        let now = util::now_millis();
        tracker.track(TimeWindow::from_start_duration(now, 60));
        rx.changed().await.unwrap();

        tracker.stop();
        // Let any in-flight tick drain, then verify silence
        tokio::time::sleep(Duration::from_millis(50)).await;
        rx.borrow_and_update();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!rx.has_changed().unwrap());
    }
}
