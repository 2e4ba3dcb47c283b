use chrono::Duration;
use std::time::Duration as StdDuration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::state::SharedState;

/// 清理统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub sessions: usize,
    pub quizzes: usize,
    pub transcripts: usize,
}

/// 执行一次清理：过期会话句柄、长时间未更新的问卷与转录
pub async fn sweep_once(state: &SharedState) -> SweepReport {
    let mut report = SweepReport::default();

    match state.chat.sweep_expired().await {
        Ok(count) => report.sessions = count,
        Err(e) => warn!("Failed to sweep expired sessions: {}", e),
    }

    let stale_after = Duration::seconds(state.config.session.stale_after_secs as i64);
    let before = state.clock.now() - stale_after;

    match state.quiz.sweep_stale(before).await {
        Ok(count) => report.quizzes = count,
        Err(e) => warn!("Failed to sweep stale quiz answers: {}", e),
    }

    match state.chat.sweep_stale_transcripts(before).await {
        Ok(count) => report.transcripts = count,
        Err(e) => warn!("Failed to sweep stale transcripts: {}", e),
    }

    report
}

/// 启动周期性清理任务
pub fn spawn_sweeper(state: SharedState) -> JoinHandle<()> {
    let period = StdDuration::from_secs(state.config.session.sweep_interval_secs.max(1));
    info!("Session sweeper running every {:?}", period);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // 第一次 tick 立即返回
        interval.tick().await;

        loop {
            interval.tick().await;
            let report = sweep_once(&state).await;
            if report == SweepReport::default() {
                debug!("Sweep finished, nothing to remove");
            } else {
                info!(
                    sessions = report.sessions,
                    quizzes = report.quizzes,
                    transcripts = report.transcripts,
                    "Sweep removed stale entries"
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::state::test_state;
    use crate::modules::chat::application::testing::ScriptedLLM;
    use crate::modules::chat::SessionId;
    use crate::modules::quiz::QuizContext;
    use crate::shared::ManualClock;

    #[tokio::test]
    async fn test_sweep_once_removes_expired_and_stale_entries() {
        let clock = ManualClock::default();
        let state = test_state(ScriptedLLM::default(), &clock);
        let id = SessionId::new();

        state.quiz.submit(id, QuizContext::default()).await.unwrap();
        state.chat.send_message(id, "hello").await.unwrap();

        // 未过期时不清理
        assert_eq!(sweep_once(&state).await, SweepReport::default());

        clock.advance(Duration::hours(2));
        let report = sweep_once(&state).await;
        assert_eq!(report.sessions, 1);
        assert_eq!(report.quizzes, 0);

        clock.advance(Duration::days(1));
        let report = sweep_once(&state).await;
        assert_eq!(report.sessions, 0);
        assert_eq!(report.quizzes, 1);
        assert_eq!(report.transcripts, 1);
    }
}
