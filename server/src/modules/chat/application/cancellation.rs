use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{watch, RwLock};

use crate::modules::chat::domain::SessionId;

/// 进行中生成的取消登记
///
/// 每次发送登记一个 watch 通道；停止请求触发同一会话上的信号
#[derive(Default)]
pub struct CancellationRegistry {
    next_token: AtomicU64,
    active: RwLock<HashMap<SessionId, (u64, watch::Sender<bool>)>>,
}

/// 一次登记的凭据
pub struct CancellationTicket {
    session_id: SessionId,
    token: u64,
    receiver: watch::Receiver<bool>,
}

impl CancellationTicket {
    /// 等待取消信号；发送端被丢弃时永远挂起
    pub async fn cancelled(&mut self) {
        loop {
            if *self.receiver.borrow_and_update() {
                return;
            }
            if self.receiver.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl CancellationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为会话登记一次生成，覆盖同会话上较早的登记
    pub async fn register(&self, session_id: SessionId) -> CancellationTicket {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = watch::channel(false);

        self.active.write().await.insert(session_id, (token, sender));

        CancellationTicket {
            session_id,
            token,
            receiver,
        }
    }

    /// 触发会话上的取消信号，返回是否存在进行中的生成
    pub async fn cancel(&self, session_id: SessionId) -> bool {
        match self.active.write().await.remove(&session_id) {
            Some((_, sender)) => sender.send(true).is_ok(),
            None => false,
        }
    }

    /// 生成结束后注销；只移除与凭据对应的登记
    pub async fn finish(&self, ticket: &CancellationTicket) {
        let mut active = self.active.write().await;
        if active
            .get(&ticket.session_id)
            .is_some_and(|(token, _)| *token == ticket.token)
        {
            active.remove(&ticket.session_id);
        }
    }

    pub async fn is_active(&self, session_id: SessionId) -> bool {
        self.active.read().await.contains_key(&session_id)
    }
}
