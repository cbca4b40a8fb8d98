use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

use crate::database::models::{ClockSession, WorkLog};
use crate::database::repositories::{ClientRepository, ClockSessionRepository, WorkLogRepository};
use crate::domain::timeclock::{duration_hours, session_cost};
use crate::error::AppError;

#[derive(Clone)]
pub struct TimeclockService {
    sessions: ClockSessionRepository,
    work_logs: WorkLogRepository,
    clients: ClientRepository,
}

impl TimeclockService {
    pub fn new(
        sessions: ClockSessionRepository,
        work_logs: WorkLogRepository,
        clients: ClientRepository,
    ) -> Self {
        Self {
            sessions,
            work_logs,
            clients,
        }
    }

    /// Open a new session for a client. One active session per client at a
    /// time; clocking in twice without clocking out is a conflict.
    pub async fn clock_in(
        &self,
        user_id: &str,
        client_id: &str,
        now: NaiveDateTime,
    ) -> Result<ClockSession, AppError> {
        let client = self
            .clients
            .find_by_id(user_id, client_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("client {}", client_id)))?;

        if let Some(open) = self
            .sessions
            .find_active_for_client(user_id, client_id)
            .await?
        {
            return Err(AppError::conflict(format!(
                "already clocked in for {} since {}",
                client.name, open.clock_in_time
            )));
        }

        let session = ClockSession::start(user_id.to_string(), client_id.to_string(), now);
        self.sessions.create(&session).await?;
        log::info!("Clocked in session {} for user {}", session.id, user_id);
        Ok(session)
    }

    /// Close an active session and fold its hours into the day's work log.
    /// Clocking out an already-completed session is a no-op that returns 0
    /// hours, not an error; the conditional flip in the repository means a
    /// concurrent double clock-out can never add hours twice.
    pub async fn clock_out(
        &self,
        user_id: &str,
        session_id: &str,
        now: NaiveDateTime,
    ) -> Result<BigDecimal, AppError> {
        let session = self
            .sessions
            .find_by_id(user_id, session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("clock session {}", session_id)))?;

        if !session.is_active {
            log::debug!("Session {} already completed, ignoring clock-out", session_id);
            return Ok(BigDecimal::from(0));
        }

        // Reject before flipping the session, so negative hours can never
        // reach the day's work log.
        if now < session.clock_in_time {
            return Err(AppError::validation(format!(
                "clock-out time {} is before clock-in time {}",
                now, session.clock_in_time
            )));
        }

        let flipped = self.sessions.complete(user_id, session_id, now).await?;
        if !flipped {
            // Lost the race to a concurrent clock-out; treat like the
            // already-completed case.
            return Ok(BigDecimal::from(0));
        }

        let hours = duration_hours(session.clock_in_time, now);
        self.merge_into_worklog(
            user_id,
            &session.client_id,
            session.clock_in_time.date(),
            hours.clone(),
        )
        .await?;

        log::info!(
            "Clocked out session {} for user {}: {} hours",
            session_id,
            user_id,
            hours
        );
        Ok(hours)
    }

    /// Upsert keyed by (user, client, work_date): an existing work log
    /// accumulates the new hours, a missing one is created with the client's
    /// default hourly rate. `total_amount` is recomputed on every save.
    pub async fn merge_into_worklog(
        &self,
        user_id: &str,
        client_id: &str,
        work_date: NaiveDate,
        hours_to_add: BigDecimal,
    ) -> Result<(WorkLog, bool), AppError> {
        if let Some(mut existing) = self
            .work_logs
            .find_by_user_client_date(user_id, client_id, work_date)
            .await?
        {
            existing.hours_worked += hours_to_add;
            existing.total_amount = session_cost(&existing.hours_worked, &existing.hourly_rate);
            self.work_logs
                .update_hours(
                    user_id,
                    &existing.id,
                    &existing.hours_worked,
                    &existing.hourly_rate,
                    &existing.total_amount,
                )
                .await?;
            return Ok((existing, false));
        }

        let client = self
            .clients
            .find_by_id(user_id, client_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("client {}", client_id)))?;

        let total_amount = session_cost(&hours_to_add, &client.hourly_rate);
        let work_log = WorkLog::new(
            user_id.to_string(),
            client_id.to_string(),
            work_date,
            hours_to_add,
            client.hourly_rate,
            total_amount,
        );
        self.work_logs.create(&work_log).await?;
        Ok((work_log, true))
    }
}
