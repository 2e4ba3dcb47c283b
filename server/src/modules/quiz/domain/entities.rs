// Quiz Domain Entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::value_objects::{Feelings, Issue, Mood};

/// 问卷上下文快照
///
/// 提交问卷时创建，按值传入聊天初始化，之后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizContext {
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub mood: BTreeSet<Mood>,
    #[serde(default)]
    pub feelings: Feelings,
}

impl QuizContext {
    pub fn new(
        issue: Option<Issue>,
        mood: impl IntoIterator<Item = Mood>,
        feelings: Feelings,
    ) -> Self {
        Self {
            issue,
            mood: mood.into_iter().collect(),
            feelings,
        }
    }

    /// 感受描述（未作答时为 None）
    pub fn answered_feelings(&self) -> Option<&str> {
        self.feelings.is_answered().then(|| self.feelings.as_str())
    }
}

impl Default for QuizContext {
    fn default() -> Self {
        Self {
            issue: Some(Issue::Anxiety),
            mood: BTreeSet::new(),
            feelings: Feelings::not_answered(),
        }
    }
}
